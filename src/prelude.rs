pub use crate::core::{
    CspPolicy, CspPolicyBuilder, Directive, DirectiveBuilder, HeadersConfig, HeadersConfigBuilder,
    HeadersSettings, MediaTypeDirectiveBuilder, SourceDirectiveBuilder,
};
pub use crate::error::CspError;
pub use crate::headers::{
    ContentTypeOptionsExt, FeaturePolicyExt, FrameOptionsExt, ResponseHeaders,
    ResponseHeadersBuilder, ResponseHeadersOptions,
};
pub use crate::middleware::{configure_headers, response_headers, ResponseHeadersMiddleware};
