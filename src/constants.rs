pub(crate) const HEADER_CSP: &str = "content-security-policy";
pub(crate) const HEADER_CSP_REPORT_ONLY: &str = "content-security-policy-report-only";
pub(crate) const HEADER_FRAME_OPTIONS: &str = "X-Frame-Options";
pub(crate) const HEADER_CONTENT_TYPE_OPTIONS: &str = "X-Content-Type-Options";
pub(crate) const HEADER_FEATURE_POLICY: &str = "Feature-Policy";

pub(crate) const BASE_URI: &str = "base-uri";
pub(crate) const CHILD_SRC: &str = "child-src";
pub(crate) const CONNECT_SRC: &str = "connect-src";
pub(crate) const DEFAULT_SRC: &str = "default-src";
pub(crate) const FONT_SRC: &str = "font-src";
pub(crate) const FORM_ACTION: &str = "form-action";
pub(crate) const FRAME_ANCESTORS: &str = "frame-ancestors";
pub(crate) const FRAME_SRC: &str = "frame-src";
pub(crate) const IMG_SRC: &str = "img-src";
pub(crate) const MANIFEST_SRC: &str = "manifest-src";
pub(crate) const MEDIA_SRC: &str = "media-src";
pub(crate) const OBJECT_SRC: &str = "object-src";
pub(crate) const PLUGIN_TYPES: &str = "plugin-types";
pub(crate) const PREFETCH_SRC: &str = "prefetch-src";
pub(crate) const SCRIPT_SRC: &str = "script-src";
pub(crate) const STYLE_SRC: &str = "style-src";
pub(crate) const WORKER_SRC: &str = "worker-src";

pub(crate) const NONE_SOURCE: &str = "'none'";
pub(crate) const SELF_SOURCE: &str = "'self'";
pub(crate) const UNSAFE_INLINE_SOURCE: &str = "'unsafe-inline'";
pub(crate) const UNSAFE_EVAL_SOURCE: &str = "'unsafe-eval'";
pub(crate) const STRICT_DYNAMIC_SOURCE: &str = "'strict-dynamic'";

pub(crate) const FRAME_OPTIONS_DENY: &str = "DENY";
pub(crate) const FRAME_OPTIONS_SAME_ORIGIN: &str = "SAMEORIGIN";
pub(crate) const FRAME_OPTIONS_ALLOW_FROM: &str = "ALLOW-FROM";
pub(crate) const CONTENT_TYPE_NOSNIFF: &str = "nosniff";

pub(crate) const SEMICOLON_SPACE: &[u8] = b"; ";
pub(crate) const DEFAULT_BUFFER_CAPACITY: usize = 256;
