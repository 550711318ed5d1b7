use crate::constants::HEADER_FEATURE_POLICY;
use crate::headers::options::ResponseHeadersOptions;
use std::borrow::Cow;

pub trait FeaturePolicyExt: ResponseHeadersOptions {
    /// Sets an already serialized feature policy, e.g. `camera 'none'`.
    #[inline]
    fn add_feature_policy(&mut self, value: impl Into<Cow<'static, str>>) -> &mut Self {
        self.add(HEADER_FEATURE_POLICY, value)
    }
}

impl<T> FeaturePolicyExt for T where T: ResponseHeadersOptions {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::headers::options::ResponseHeadersBuilder;
    use crate::headers::ContentTypeOptionsExt;

    #[test]
    fn test_feature_policy_and_nosniff() {
        let mut builder = ResponseHeadersBuilder::new();
        builder
            .add_feature_policy("geolocation 'self'; camera 'none'")
            .prevent_content_type_sniffing();

        assert_eq!(
            builder.get("feature-policy"),
            Some("geolocation 'self'; camera 'none'")
        );
        assert_eq!(builder.get("x-content-type-options"), Some("nosniff"));
    }
}
