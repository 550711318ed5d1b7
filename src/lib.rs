mod constants;
pub mod core;
pub mod error;
pub mod headers;
pub mod middleware;
pub mod monitoring;
pub mod prelude;
mod utils;

// Re-export commonly used types for convenience
pub use crate::core::{
    CspPolicy, CspPolicyBuilder, CspSettings, Directive, DirectiveBuilder, FrameOptionsSetting,
    HeadersConfig, HeadersConfigBuilder, HeadersSettings, MediaTypeDirectiveBuilder,
    SourceDirectiveBuilder,
};
pub use error::CspError;
pub use headers::{
    ContentTypeOptionsExt, FeaturePolicyExt, FrameOptionsExt, ResponseHeaders,
    ResponseHeadersBuilder, ResponseHeadersOptions,
};
pub use middleware::{configure_headers, response_headers, ResponseHeadersMiddleware};
pub use monitoring::HeaderStats;
