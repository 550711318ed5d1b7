use crate::core::config::HeadersConfig;
use crate::headers::options::ResponseHeaders;
use actix_web::{
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    web::{Data, ServiceConfig},
    Error,
};
use futures::future::{ready, LocalBoxFuture, Ready};
use std::{rc::Rc, sync::Arc};

/// Writes the configured security headers onto every response.
#[derive(Clone)]
pub struct ResponseHeadersMiddleware {
    config: Arc<HeadersConfig>,
}

impl ResponseHeadersMiddleware {
    #[inline]
    pub fn new(config: HeadersConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    #[inline]
    pub fn config(&self) -> Arc<HeadersConfig> {
        self.config.clone()
    }
}

impl<S, B> Transform<S, ServiceRequest> for ResponseHeadersMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Transform = ResponseHeadersMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(ResponseHeadersMiddlewareService {
            service: Rc::new(service),
            config: self.config.clone(),
        }))
    }
}

pub struct ResponseHeadersMiddlewareService<S> {
    service: Rc<S>,
    config: Arc<HeadersConfig>,
}

impl<S, B> Service<ServiceRequest> for ResponseHeadersMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();
        let config = self.config.clone();

        Box::pin(async move {
            let mut res = service.call(req).await?;

            let headers = config.headers();
            let written = headers.apply_to(res.headers_mut(), config.overwrite_existing());
            config
                .stats()
                .record_response(written, headers.len() - written);

            Ok(res)
        })
    }
}

#[inline]
pub fn response_headers(headers: ResponseHeaders) -> ResponseHeadersMiddleware {
    ResponseHeadersMiddleware::new(HeadersConfig::new(headers))
}

/// Registers the config as app data so handlers can reach it, e.g. to call
/// [`HeadersConfig::reconfigure`].
pub fn configure_headers(config: HeadersConfig) -> impl FnOnce(&mut ServiceConfig) {
    move |cfg: &mut ServiceConfig| {
        cfg.app_data(Data::new(config));
    }
}
