pub mod content_type_options;
pub mod feature_policy;
pub mod frame_options;
pub mod options;

pub use content_type_options::ContentTypeOptionsExt;
pub use feature_policy::FeaturePolicyExt;
pub use frame_options::FrameOptionsExt;
pub use options::{ResponseHeaders, ResponseHeadersBuilder, ResponseHeadersOptions};
