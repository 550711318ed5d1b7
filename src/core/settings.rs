use crate::core::builder::{DirectiveBuilder, SourceDirectiveBuilder};
use crate::core::directive::Directive;
use crate::core::policy::CspPolicyBuilder;
use crate::error::CspError;
use crate::headers::options::{ResponseHeaders, ResponseHeadersBuilder};
use crate::headers::{ContentTypeOptionsExt, FeaturePolicyExt, FrameOptionsExt};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Declarative form of the security headers, e.g. loaded from a JSON file:
///
/// ```json
/// {
///   "content_security_policy": {
///     "directives": {
///       "default-src": ["'self'"],
///       "object-src": ["'none'"],
///       "upgrade-insecure-requests": []
///     }
///   },
///   "frame_options": "same-origin",
///   "content_type_nosniff": true,
///   "feature_policy": "camera 'none'"
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HeadersSettings {
    pub content_security_policy: Option<CspSettings>,
    pub frame_options: Option<FrameOptionsSetting>,
    pub content_type_nosniff: bool,
    pub feature_policy: Option<String>,
}

/// Directive name to values. Names matching a predefined slot go to that slot
/// and are emitted in the fixed slot order; a predefined slot listed with no
/// values is left out. Anything else becomes a custom directive, emitted after
/// the slots in the order of the file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CspSettings {
    #[serde(default)]
    pub report_only: bool,
    #[serde(default)]
    pub directives: IndexMap<String, Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FrameOptionsSetting {
    Deny,
    SameOrigin,
    AllowFrom(String),
}

impl HeadersSettings {
    pub fn from_json(json: &str) -> Result<Self, CspError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn apply(&self, builder: &mut ResponseHeadersBuilder) -> Result<(), CspError> {
        if let Some(csp) = &self.content_security_policy {
            let mut policy = CspPolicyBuilder::new();
            csp.apply(&mut policy)?;
            builder.add_policy(&policy.policy());
        }

        match &self.frame_options {
            Some(FrameOptionsSetting::Deny) => {
                builder.prevent_framing();
            }
            Some(FrameOptionsSetting::SameOrigin) => {
                builder.allow_framing_from_same_origin();
            }
            Some(FrameOptionsSetting::AllowFrom(origin)) => {
                builder.allow_framing_from_origin(origin);
            }
            None => {}
        }

        if self.content_type_nosniff {
            builder.prevent_content_type_sniffing();
        }

        if let Some(feature_policy) = &self.feature_policy {
            builder.add_feature_policy(feature_policy.clone());
        }

        Ok(())
    }

    pub fn to_headers(&self) -> Result<ResponseHeaders, CspError> {
        let mut builder = ResponseHeadersBuilder::new();
        self.apply(&mut builder)?;
        builder.build()
    }
}

impl CspSettings {
    pub fn apply(&self, builder: &mut CspPolicyBuilder) -> Result<(), CspError> {
        builder.report_only(self.report_only);

        for (name, values) in &self.directives {
            let mut values = values.iter();

            match values.next() {
                Some(first) if builder.add_to_slot(name, first.clone())? => {
                    for value in values {
                        builder.add_to_slot(name, value.clone())?;
                    }
                }
                first => {
                    if builder.slots().any(|slot| slot.name() == name) {
                        continue;
                    }

                    let mut custom = SourceDirectiveBuilder::from(
                        Directive::try_new(name.clone())
                            .map_err(|e| CspError::ConfigError(e.to_string()))?,
                    );
                    for value in first.into_iter().chain(values) {
                        custom.add(value.clone())?;
                    }
                    builder.add_directive(custom.build());
                }
            }
        }

        Ok(())
    }
}
