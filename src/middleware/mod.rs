pub mod headers;

pub use headers::{
    configure_headers, response_headers, ResponseHeadersMiddleware,
    ResponseHeadersMiddlewareService,
};
