//!
//! # Application Error Handling
//!
//! This module defines the error type `AppError` shared by every layer of the
//! service. Stores, services and request guards all surface failures through it,
//! and its `actix_web::error::ResponseError` implementation turns each variant
//! into the matching HTTP status with a `{"error": "..."}` JSON body.
//!
//! Authentication failures are deliberately lossy on the wire: the variant keeps
//! the concrete cause (bad signature, missing header, and so on) for logging,
//! while every response carries the same fixed body so callers cannot probe
//! which check rejected them. Credential failures at login behave the same way.

use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use serde_json::json;
use std::fmt;

/// Represents all failure modes the service can surface to a caller.
///
/// Variants carrying a `String` expose that message in the response body.
/// `Unauthenticated`, `InvalidCredentials` and `Storage` respond with fixed or
/// sanitized bodies instead; their payloads exist for the logs.
#[derive(Debug)]
pub enum AppError {
    /// Input rejected before touching any store (HTTP 400).
    Validation(String),
    /// No acceptable proof of identity. The message records the internal cause;
    /// the response body never does (HTTP 401).
    Unauthenticated(String),
    /// Caller is authenticated but lacks the required role (HTTP 403).
    Forbidden(String),
    /// The addressed record does not exist (HTTP 404).
    NotFound(String),
    /// A uniqueness guarantee would be violated (HTTP 400).
    Conflict(String),
    /// Login with an unknown username or a wrong password (HTTP 401).
    /// A single variant for both keeps the responses indistinguishable.
    InvalidCredentials,
    /// The backing store failed or timed out (HTTP 500).
    Storage(String),
    /// Unexpected server-side failure such as a hashing or signing error (HTTP 500).
    Internal(String),
}

impl AppError {
    /// Message placed in the JSON response body.
    ///
    /// Authentication and server-side variants map to fixed strings here; the
    /// variant payload only ever reaches the logs through `Display`.
    fn public_message(&self) -> &str {
        match self {
            AppError::Validation(msg)
            | AppError::Forbidden(msg)
            | AppError::NotFound(msg)
            | AppError::Conflict(msg) => msg,
            AppError::Unauthenticated(_) => "authentication required",
            AppError::InvalidCredentials => "invalid username or password",
            AppError::Storage(_) | AppError::Internal(_) => "internal server error",
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AppError::Validation(msg) => write!(f, "validation failed: {}", msg),
            AppError::Unauthenticated(cause) => write!(f, "authentication required ({})", cause),
            AppError::Forbidden(msg) => write!(f, "forbidden: {}", msg),
            AppError::NotFound(msg) => write!(f, "not found: {}", msg),
            AppError::Conflict(msg) => write!(f, "conflict: {}", msg),
            AppError::InvalidCredentials => write!(f, "invalid username or password"),
            AppError::Storage(msg) => write!(f, "storage failure: {}", msg),
            AppError::Internal(msg) => write!(f, "internal error: {}", msg),
        }
    }
}

/// Converts `AppError` variants into `HttpResponse` objects.
///
/// This lets Actix Web translate `AppError` results from handlers and guards
/// into the correct status code and JSON error envelope.
impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::Conflict(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthenticated(_) | AppError::InvalidCredentials => {
                StatusCode::UNAUTHORIZED
            }
            AppError::Forbidden(_) => StatusCode::FORBIDDEN,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Storage(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if self.status_code() == StatusCode::INTERNAL_SERVER_ERROR {
            log::error!("{}", self);
        }
        HttpResponse::build(self.status_code()).json(json!({
            "error": self.public_message()
        }))
    }
}

/// Converts `sqlx::Error` into `AppError`.
///
/// `sqlx::Error::RowNotFound` maps to `AppError::NotFound`; everything else
/// becomes `AppError::Storage`. Store implementations intercept constraint
/// violations themselves before this conversion runs.
impl From<sqlx::Error> for AppError {
    fn from(error: sqlx::Error) -> AppError {
        match error {
            sqlx::Error::RowNotFound => AppError::NotFound("record not found".into()),
            _ => AppError::Storage(error.to_string()),
        }
    }
}

/// Converts `jsonwebtoken::errors::Error` into `AppError::Unauthenticated`.
///
/// Covers the verification path; signing failures are mapped to
/// `AppError::Internal` at the call site instead.
impl From<jsonwebtoken::errors::Error> for AppError {
    fn from(error: jsonwebtoken::errors::Error) -> AppError {
        AppError::Unauthenticated(format!("token rejected: {}", error))
    }
}

/// Converts `bcrypt::BcryptError` into `AppError::Internal`.
///
/// Hashing never fails on well-formed input, so any bcrypt error is a server
/// fault rather than a caller mistake.
impl From<bcrypt::BcryptError> for AppError {
    fn from(error: bcrypt::BcryptError) -> AppError {
        AppError::Internal(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AppError::Validation("fields cannot be empty".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::Conflict("username already taken".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::Unauthenticated("missing header".into()).status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AppError::InvalidCredentials.status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AppError::Forbidden("admin access required".into()).status_code(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            AppError::NotFound("task not found".into()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::Storage("timed out".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            AppError::Internal("hash failure".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_authentication_body_is_fixed() {
        // Different internal causes must collapse to one public message.
        let missing = AppError::Unauthenticated("authorization header missing".into());
        let rejected = AppError::Unauthenticated("token rejected: InvalidSignature".into());
        assert_eq!(missing.public_message(), "authentication required");
        assert_eq!(rejected.public_message(), missing.public_message());

        // The cause still shows up where operators look.
        assert!(format!("{}", missing).contains("authorization header missing"));
    }

    #[test]
    fn test_credential_failures_share_one_message() {
        assert_eq!(
            AppError::InvalidCredentials.public_message(),
            "invalid username or password"
        );
    }

    #[test]
    fn test_server_side_messages_are_not_exposed() {
        let error = AppError::Storage("connection refused on 5432".into());
        assert_eq!(error.public_message(), "internal server error");
        assert!(format!("{}", error).contains("connection refused"));
    }

    #[test]
    fn test_row_not_found_maps_to_not_found() {
        let error: AppError = sqlx::Error::RowNotFound.into();
        assert_eq!(error.status_code(), StatusCode::NOT_FOUND);
    }
}
