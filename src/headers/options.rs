use crate::core::policy::{CspPolicy, CspPolicyBuilder};
use crate::error::CspError;
use actix_web::http::header::{HeaderMap, HeaderName, HeaderValue};
use indexmap::IndexMap;
use std::borrow::Cow;

/// Anything that collects response headers as plain name/value pairs.
///
/// The header extension traits ([`FrameOptionsExt`](super::FrameOptionsExt),
/// [`ContentTypeOptionsExt`](super::ContentTypeOptionsExt),
/// [`FeaturePolicyExt`](super::FeaturePolicyExt)) are implemented for every
/// type implementing this trait.
pub trait ResponseHeadersOptions {
    fn add(
        &mut self,
        name: impl Into<Cow<'static, str>>,
        value: impl Into<Cow<'static, str>>,
    ) -> &mut Self;
}

/// Collects the security headers to send with every response.
///
/// Header names are case-insensitive; adding a header twice keeps the first
/// position and the last value.
#[derive(Debug, Clone, Default)]
pub struct ResponseHeadersBuilder {
    headers: IndexMap<String, (Cow<'static, str>, Cow<'static, str>)>,
}

impl ResponseHeadersBuilder {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Configures an enforced Content-Security-Policy.
    pub fn content_security_policy<F>(&mut self, configure: F) -> Result<&mut Self, CspError>
    where
        F: FnOnce(&mut CspPolicyBuilder) -> Result<(), CspError>,
    {
        let mut builder = CspPolicyBuilder::new();
        configure(&mut builder)?;
        Ok(self.add_policy(&builder.policy()))
    }

    /// Configures a Content-Security-Policy that browsers only report on.
    pub fn content_security_policy_report_only<F>(
        &mut self,
        configure: F,
    ) -> Result<&mut Self, CspError>
    where
        F: FnOnce(&mut CspPolicyBuilder) -> Result<(), CspError>,
    {
        let mut builder = CspPolicyBuilder::new();
        configure(&mut builder)?;
        builder.report_only(true);
        Ok(self.add_policy(&builder.policy()))
    }

    /// Adds a finished policy under its header name. An empty policy adds
    /// nothing.
    pub fn add_policy(&mut self, policy: &CspPolicy) -> &mut Self {
        if policy.is_empty() {
            log::debug!("skipping empty {} header", policy.header_name().as_str());
            return self;
        }
        self.add(policy.header_name().as_str().to_owned(), policy.to_string())
    }

    #[inline]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(|(_, value)| value.as_ref())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.headers.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }

    /// Validates every pair and freezes them into [`ResponseHeaders`].
    pub fn build(&self) -> Result<ResponseHeaders, CspError> {
        let mut headers = IndexMap::with_capacity(self.headers.len());

        for (name, value) in self.headers.values() {
            let header_name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|_| CspError::InvalidHeaderName(name.to_string()))?;
            let header_value = HeaderValue::from_str(value).map_err(|e| {
                CspError::HeaderError(format!("invalid value for '{}': {}", name, e))
            })?;
            headers.insert(header_name, header_value);
        }

        log::debug!("built {} response headers", headers.len());
        Ok(ResponseHeaders { headers })
    }
}

impl ResponseHeadersOptions for ResponseHeadersBuilder {
    fn add(
        &mut self,
        name: impl Into<Cow<'static, str>>,
        value: impl Into<Cow<'static, str>>,
    ) -> &mut Self {
        let name = name.into();
        let key = name.to_ascii_lowercase();
        let value = value.into();

        match self.headers.get_mut(&key) {
            Some(entry) => entry.1 = value,
            None => {
                self.headers.insert(key, (name, value));
            }
        }
        self
    }
}

/// Validated headers, applied unchanged to every response.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResponseHeaders {
    headers: IndexMap<HeaderName, HeaderValue>,
}

impl ResponseHeaders {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn get(&self, name: &str) -> Option<&HeaderValue> {
        HeaderName::from_bytes(name.as_bytes())
            .ok()
            .and_then(|name| self.headers.get(&name))
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&HeaderName, &HeaderValue)> {
        self.headers.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.headers.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }

    /// Writes the headers into `target` and returns how many were written.
    ///
    /// Unless `overwrite` is set, a header the handler already set is kept.
    pub fn apply_to(&self, target: &mut HeaderMap, overwrite: bool) -> usize {
        let mut written = 0;

        for (name, value) in &self.headers {
            if !overwrite && target.contains_key(name) {
                log::debug!("response already has a '{}' header, keeping it", name.as_str());
                continue;
            }
            target.insert(name.clone(), value.clone());
            written += 1;
        }

        written
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_is_case_insensitive_last_value_wins() {
        let mut builder = ResponseHeadersBuilder::new();
        builder
            .add("X-Frame-Options", "DENY")
            .add("Referrer-Policy", "no-referrer")
            .add("x-frame-options", "SAMEORIGIN");

        assert_eq!(builder.len(), 2);
        assert_eq!(builder.get("X-FRAME-OPTIONS"), Some("SAMEORIGIN"));

        let headers = builder.build().unwrap();
        let names: Vec<&str> = headers.iter().map(|(name, _)| name.as_str()).collect();
        assert_eq!(names, vec!["x-frame-options", "referrer-policy"]);
    }

    #[test]
    fn test_content_security_policy_is_serialized() {
        let mut builder = ResponseHeadersBuilder::new();
        builder
            .content_security_policy(|csp| {
                csp.default_src().allow_from_self()?;
                csp.script_src().allow_from_self()?.allow_host("cdn.example.com")?;
                Ok(())
            })
            .unwrap();

        assert_eq!(
            builder.get("content-security-policy"),
            Some("default-src 'self'; script-src 'self' cdn.example.com")
        );
    }

    #[test]
    fn test_report_only_policy_uses_report_only_header() {
        let mut builder = ResponseHeadersBuilder::new();
        builder
            .content_security_policy_report_only(|csp| {
                csp.img_src().allow_from_scheme("data:")?;
                Ok(())
            })
            .unwrap();

        assert!(builder.get("content-security-policy").is_none());
        assert_eq!(
            builder.get("content-security-policy-report-only"),
            Some("img-src data:")
        );
    }

    #[test]
    fn test_empty_policy_adds_no_header() {
        let mut builder = ResponseHeadersBuilder::new();
        builder.content_security_policy(|_| Ok(())).unwrap();

        assert!(builder.is_empty());
    }

    #[test]
    fn test_policy_error_propagates() {
        let mut builder = ResponseHeadersBuilder::new();
        let result = builder.content_security_policy(|csp| {
            csp.object_src().disallow_all()?.allow_from_self()?;
            Ok(())
        });

        assert!(matches!(result, Err(CspError::InvalidState(_))));
        assert!(builder.is_empty());
    }

    #[test]
    fn test_build_rejects_invalid_pairs() {
        let mut bad_name = ResponseHeadersBuilder::new();
        bad_name.add("X Frame Options", "DENY");
        assert!(matches!(
            bad_name.build(),
            Err(CspError::InvalidHeaderName(_))
        ));

        let mut bad_value = ResponseHeadersBuilder::new();
        bad_value.add("Feature-Policy", "camera 'none'\n");
        assert!(matches!(bad_value.build(), Err(CspError::HeaderError(_))));
    }

    #[test]
    fn test_apply_to_respects_existing_headers() {
        let mut builder = ResponseHeadersBuilder::new();
        builder
            .add("X-Frame-Options", "DENY")
            .add("X-Content-Type-Options", "nosniff");
        let headers = builder.build().unwrap();

        let mut target = HeaderMap::new();
        target.insert(
            HeaderName::from_static("x-frame-options"),
            HeaderValue::from_static("SAMEORIGIN"),
        );

        assert_eq!(headers.apply_to(&mut target, false), 1);
        assert_eq!(target.get("x-frame-options").unwrap(), "SAMEORIGIN");
        assert_eq!(target.get("x-content-type-options").unwrap(), "nosniff");

        assert_eq!(headers.apply_to(&mut target, true), 2);
        assert_eq!(target.get("x-frame-options").unwrap(), "DENY");
    }
}
