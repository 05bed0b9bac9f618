//! Administrator gate for the Matrimony Nexus Server.
//!
//! This is the second of the two guards and always runs after [`crate::middleware::JwtMiddlewareFactory`]. It takes
//! the authenticated claims from the request extensions and re-reads the user's role from the database on every
//! call. The token itself carries no role information, so revoking the admin role takes effect on the very next
//! request, even for tokens issued before the revocation. A non-admin (or unknown) user gets a 403.

use std::{marker::PhantomData, pin::Pin, rc::Rc};

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
use log::{debug, warn};
use matrimony_nexus_engine::{traits::UserManagement, UserApi};

use crate::{
    auth::TokenClaims,
    errors::{AuthError, ServerError},
};

pub struct AdminMiddlewareFactory<B> {
    _backend: PhantomData<fn() -> B>,
}

impl<B> AdminMiddlewareFactory<B> {
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        AdminMiddlewareFactory { _backend: PhantomData }
    }
}

impl<S, B, E> Transform<S, ServiceRequest> for AdminMiddlewareFactory<E>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
    E: UserManagement + 'static,
{
    type Error = Error;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;
    type InitError = ();
    type Response = ServiceResponse<B>;
    type Transform = AdminMiddlewareService<S, E>;

    fn new_transform(&self, service: S) -> Self::Future {
        ok(AdminMiddlewareService { service: Rc::new(service), _backend: PhantomData })
    }
}

pub struct AdminMiddlewareService<S, E> {
    service: Rc<S>,
    _backend: PhantomData<fn() -> E>,
}

impl<S, B, E> Service<ServiceRequest> for AdminMiddlewareService<S, E>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
    E: UserManagement + 'static,
{
    type Error = Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>>>>;
    type Response = ServiceResponse<B>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        Box::pin(async move {
            let claims = req.extensions().get::<TokenClaims>().cloned().ok_or_else(|| {
                warn!("🔑️ No claims found in request extensions. Is the authentication guard missing?");
                Error::from(ServerError::from(AuthError::MissingToken))
            })?;
            let email = claims.require_email().map_err(Error::from)?.to_string();
            let api = req
                .app_data::<web::Data<UserApi<E>>>()
                .cloned()
                .ok_or_else(|| Error::from(ServerError::InitializeError("User API is not configured".into())))?;
            // Live lookup. The role stored in the database is authoritative, not anything in the token.
            let is_admin =
                api.is_admin(&email).await.map_err(|e| Error::from(ServerError::BackendError(e.to_string())))?;
            if is_admin {
                service.call(req).await
            } else {
                debug!("🔑️ {email} is not an admin. Denying access to {}", req.path());
                Err(Error::from(ServerError::InsufficientPermissions(format!("{email} is not an administrator"))))
            }
        })
    }
}
