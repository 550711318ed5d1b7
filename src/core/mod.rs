pub mod builder;
pub mod config;
pub mod directive;
pub mod policy;
pub mod settings;

pub use builder::{DirectiveBuilder, MediaTypeDirectiveBuilder, SourceDirectiveBuilder};
pub use config::{HeadersConfig, HeadersConfigBuilder};
pub use directive::Directive;
pub use policy::{CspPolicy, CspPolicyBuilder};
pub use settings::{CspSettings, FrameOptionsSetting, HeadersSettings};
