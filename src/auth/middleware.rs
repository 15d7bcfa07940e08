use actix_web::{
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    http::header,
    web, Error, HttpMessage,
};
use futures::future::{ready, LocalBoxFuture, Ready};

use crate::auth::token::JwtKeys;
use crate::error::AppError;

/// Rejects requests without a valid `Authorization: Bearer <jwt>` header.
///
/// On success the decoded `Claims` are stored in the request extensions, where
/// `AuthenticatedUser` picks them up. Wrap only the scopes that need protection;
/// the verifying keys are read from `web::Data<JwtKeys>` app data.
pub struct AuthMiddleware;

impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Transform = AuthMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService { service }))
    }
}

pub struct AuthMiddlewareService<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let token = req
            .headers()
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "));

        let token = match token {
            Some(token) => token,
            None => {
                log::warn!("missing bearer token for {} {}", req.method(), req.path());
                let app_err = AppError::Unauthorized("Missing token".into());
                return Box::pin(async move { Err(app_err.into()) });
            }
        };

        let keys = match req.app_data::<web::Data<JwtKeys>>() {
            Some(keys) => keys,
            None => {
                log::error!("JwtKeys are not registered as app data");
                let app_err = AppError::InternalServerError("authentication is not configured".into());
                return Box::pin(async move { Err(app_err.into()) });
            }
        };

        match keys.verify_token(token) {
            Ok(claims) => {
                req.extensions_mut().insert(claims);
                Box::pin(self.service.call(req))
            }
            Err(app_err) => {
                log::warn!("rejected token for {} {}: {}", req.method(), req.path(), app_err);
                Box::pin(async move { Err(app_err.into()) })
            }
        }
    }
}
