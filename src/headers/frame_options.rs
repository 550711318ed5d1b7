use crate::constants::{
    FRAME_OPTIONS_ALLOW_FROM, FRAME_OPTIONS_DENY, FRAME_OPTIONS_SAME_ORIGIN, HEADER_FRAME_OPTIONS,
};
use crate::headers::options::ResponseHeadersOptions;
use std::borrow::Cow;

/// Controls whether browsers may render the application inside a frame
/// (`X-Frame-Options`).
pub trait FrameOptionsExt: ResponseHeadersOptions {
    /// Sets a raw `X-Frame-Options` value.
    #[inline]
    fn add_frame_options(&mut self, value: impl Into<Cow<'static, str>>) -> &mut Self {
        self.add(HEADER_FRAME_OPTIONS, value)
    }

    /// Only pages from the same origin may frame the application.
    #[inline]
    fn allow_framing_from_same_origin(&mut self) -> &mut Self {
        self.add_frame_options(FRAME_OPTIONS_SAME_ORIGIN)
    }

    /// Only pages from `origin` may frame the application.
    #[inline]
    fn allow_framing_from_origin(&mut self, origin: impl AsRef<str>) -> &mut Self {
        self.add_frame_options(format!("{} {}", FRAME_OPTIONS_ALLOW_FROM, origin.as_ref()))
    }

    /// The application may not be framed at all.
    #[inline]
    fn prevent_framing(&mut self) -> &mut Self {
        self.add_frame_options(FRAME_OPTIONS_DENY)
    }
}

impl<T> FrameOptionsExt for T where T: ResponseHeadersOptions {}
