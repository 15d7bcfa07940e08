use actix_web::dev::Payload;
use actix_web::{web, Error as ActixError, FromRequest, HttpMessage, HttpRequest};
use futures::future::LocalBoxFuture;

use crate::auth::token::Claims;
use crate::error::AppError;
use crate::repository::{RepoError, UserRepository};

/// The id of the live user that `AuthMiddleware` authenticated for this request.
///
/// Only meaningful on routes wrapped by `AuthMiddleware`; elsewhere the claims
/// are absent and extraction fails with 401. A token whose account has been
/// soft-deleted also fails with 401.
#[derive(Debug, Clone, Copy)]
pub struct AuthenticatedUser(pub i32);

impl FromRequest for AuthenticatedUser {
    type Error = ActixError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let sub = req.extensions().get::<Claims>().map(|claims| claims.sub);
        let users = req.app_data::<web::Data<dyn UserRepository>>().cloned();

        Box::pin(async move {
            let sub = sub.ok_or_else(|| AppError::Unauthorized("Missing token".to_string()))?;
            let users = users.ok_or_else(|| {
                log::error!("UserRepository is not registered as app data");
                AppError::InternalServerError("authentication is not configured".into())
            })?;

            match users.find_by_id(sub).await {
                Ok(_) => Ok(AuthenticatedUser(sub)),
                Err(RepoError::NotFound) => {
                    log::warn!("token presented for deleted or unknown user {}", sub);
                    Err(AppError::Unauthorized("account no longer exists".into()).into())
                }
                Err(err) => Err(AppError::from(err).into()),
            }
        })
    }
}
