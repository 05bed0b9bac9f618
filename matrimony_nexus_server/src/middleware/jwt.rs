//! Authentication middleware for the Matrimony Nexus Server.
//!
//! This is the first of the two guards. It checks the incoming request for a valid bearer token in the
//! `Authorization` header and, on success, stashes the verified [`TokenClaims`] in the request extensions for the
//! handler (and any admin guard downstream) to pick up. It never touches the database. A missing, malformed or
//! expired token produces a 401 response.

use std::{pin::Pin, rc::Rc};

use actix_web::{
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    web,
    Error,
    HttpMessage,
};
use futures::{
    future::{ok, Ready},
    Future,
};
use log::debug;

use crate::{
    auth::{extract_bearer_token, TokenIssuer},
    errors::ServerError,
};

pub struct JwtMiddlewareFactory;

impl JwtMiddlewareFactory {
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        JwtMiddlewareFactory
    }
}

impl<S, B> Transform<S, ServiceRequest> for JwtMiddlewareFactory
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Error = Error;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;
    type InitError = ();
    type Response = ServiceResponse<B>;
    type Transform = JwtMiddlewareService<S>;

    fn new_transform(&self, service: S) -> Self::Future {
        ok(JwtMiddlewareService { service: Rc::new(service) })
    }
}

pub struct JwtMiddlewareService<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for JwtMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Error = Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>>>>;
    type Response = ServiceResponse<B>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        Box::pin(async move {
            let issuer = req
                .app_data::<web::Data<TokenIssuer>>()
                .cloned()
                .ok_or_else(|| Error::from(ServerError::InitializeError("Token issuer is not configured".into())))?;
            let claims = extract_bearer_token(req.headers())
                .and_then(|token| issuer.verify(token))
                .map_err(|e| {
                    debug!("🔑️ Rejecting request to {}: {e}", req.path());
                    Error::from(ServerError::from(e))
                })?;
            req.extensions_mut().insert(claims);
            service.call(req).await
        })
    }
}
