use actix_web::{
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    http::header,
    Error, HttpMessage,
};
use futures::future::{ready, LocalBoxFuture, Ready};

use crate::auth::token::TokenService;
use crate::error::AppError;

/// Scope middleware that verifies the bearer token on every request.
///
/// On success the decoded [`Claims`](crate::auth::token::Claims) are placed
/// into request extensions for the extractors downstream; on failure the
/// request is rejected before the inner service ever runs. Routes that must
/// stay open (registration, login, health) simply live outside wrapped scopes.
pub struct AuthGate {
    tokens: TokenService,
}

impl AuthGate {
    pub fn new(tokens: TokenService) -> Self {
        Self { tokens }
    }
}

impl<S, B> Transform<S, ServiceRequest> for AuthGate
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Transform = AuthGateService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthGateService {
            service,
            tokens: self.tokens.clone(),
        }))
    }
}

pub struct AuthGateService<S> {
    service: S,
    tokens: TokenService,
}

impl<S, B> Service<ServiceRequest> for AuthGateService<S>
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
        let bearer = req
            .headers()
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "));

        match bearer {
            Some(token) => match self.tokens.verify(token) {
                Ok(claims) => {
                    req.extensions_mut().insert(claims);
                    let fut = self.service.call(req);
                    Box::pin(fut)
                }
                Err(err) => {
                    // The cause lands in the log; the response body stays fixed.
                    log::debug!("{} {}: {}", req.method(), req.path(), err);
                    Box::pin(async move { Err(err.into()) })
                }
            },
            None => {
                log::debug!(
                    "{} {}: authorization header missing or not a bearer token",
                    req.method(),
                    req.path()
                );
                let err = AppError::Unauthenticated("missing bearer token".into());
                Box::pin(async move { Err(err.into()) })
            }
        }
    }
}
