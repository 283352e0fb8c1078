use actix_web::dev::Payload;
use actix_web::{Error as ActixError, FromRequest, HttpMessage, HttpRequest};
use std::future::{ready, Ready};

use crate::auth::token::Claims;
use crate::error::AppError;
use crate::models::Role;

/// Extracts the authenticated caller's claims from request extensions.
///
/// Intended for routes behind [`AuthGate`](crate::auth::AuthGate), which
/// verifies the token and inserts the claims. If the claims are missing the
/// gate did not run, and refusing with 401 is the safe default.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub Claims);

impl FromRequest for CurrentUser {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        match req.extensions().get::<Claims>().cloned() {
            Some(claims) => ready(Ok(CurrentUser(claims))),
            None => {
                let err = AppError::Unauthenticated("no claims in request extensions".into());
                ready(Err(err.into()))
            }
        }
    }
}

/// Like [`CurrentUser`], but only admits callers whose token carries the
/// admin role. Anyone else is refused with 403, including the degenerate case
/// of no claims at all.
#[derive(Debug, Clone)]
pub struct AdminUser(pub Claims);

impl FromRequest for AdminUser {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let claims = req.extensions().get::<Claims>().cloned();
        match claims {
            Some(claims) if claims.role.is_admin() => ready(Ok(AdminUser(claims))),
            _ => {
                let err = AppError::Forbidden("admin access required".into());
                ready(Err(err.into()))
            }
        }
    }
}
