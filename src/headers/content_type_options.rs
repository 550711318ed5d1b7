use crate::constants::{CONTENT_TYPE_NOSNIFF, HEADER_CONTENT_TYPE_OPTIONS};
use crate::headers::options::ResponseHeadersOptions;

pub trait ContentTypeOptionsExt: ResponseHeadersOptions {
    /// Tells browsers to refuse responses whose declared content type does
    /// not match what the request expects (`X-Content-Type-Options: nosniff`).
    #[inline]
    fn prevent_content_type_sniffing(&mut self) -> &mut Self {
        self.add(HEADER_CONTENT_TYPE_OPTIONS, CONTENT_TYPE_NOSNIFF)
    }
}

impl<T> ContentTypeOptionsExt for T where T: ResponseHeadersOptions {}
