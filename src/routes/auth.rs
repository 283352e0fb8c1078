use actix_web::{post, web, HttpResponse, Responder};

use crate::auth::Credentials;
use crate::error::AppError;
use crate::services::AccountService;

/// Registers a new account.
///
/// ## Request Body:
/// A JSON object with `username` and `password`.
///
/// ## Responses:
/// - `201 Created`: The new account, with `"password"` blanked. The first
///   account ever registered carries `"role": "admin"`.
/// - `400 Bad Request`: Empty field, oversized password, or taken username.
/// - `500 Internal Server Error`: Store or hashing failure.
#[post("/register")]
pub async fn register(
    accounts: web::Data<AccountService>,
    payload: web::Json<Credentials>,
) -> Result<impl Responder, AppError> {
    let user = accounts
        .register(&payload.username, &payload.password)
        .await?;
    Ok(HttpResponse::Created().json(user))
}

/// Exchanges valid credentials for a signed bearer token.
///
/// ## Responses:
/// - `200 OK`: `{"id", "username", "token"}`.
/// - `400 Bad Request`: Missing username.
/// - `401 Unauthorized`: Unknown username or wrong password; the body does
///   not distinguish the two.
/// - `500 Internal Server Error`: Store or signing failure.
#[post("/login")]
pub async fn login(
    accounts: web::Data<AccountService>,
    payload: web::Json<Credentials>,
) -> Result<impl Responder, AppError> {
    let response = accounts.login(&payload.username, &payload.password).await?;
    Ok(HttpResponse::Ok().json(response))
}
