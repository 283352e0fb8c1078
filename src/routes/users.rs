use actix_web::{get, post, web, HttpResponse, Responder};

use crate::auth::{AdminUser, CurrentUser};
use crate::error::AppError;
use crate::services::AccountService;

/// Retrieves an account by username.
///
/// Any authenticated caller may look up any account. The response includes
/// the stored password hash under `"password"`.
///
/// ## Responses:
/// - `200 OK`: The account record.
/// - `401 Unauthorized`: No valid token.
/// - `404 Not Found`: No account with that username.
#[get("/{username}")]
pub async fn get_user(
    accounts: web::Data<AccountService>,
    username: web::Path<String>,
    _user: CurrentUser,
) -> Result<impl Responder, AppError> {
    let record = accounts.get_by_username(&username).await?;
    Ok(HttpResponse::Ok().json(record))
}

/// Grants the admin role to the addressed account. Admin only.
///
/// Promoting an account that is already an admin succeeds unchanged.
///
/// ## Path Parameters:
/// - `id`: The UUID of the account to promote.
///
/// ## Responses:
/// - `200 OK`: The promoted account, with `"password"` blanked.
/// - `400 Bad Request`: Malformed id.
/// - `401 Unauthorized`: No valid token.
/// - `403 Forbidden`: Caller's token does not carry the admin role.
/// - `404 Not Found`: No account with that id.
#[post("/{id}/promote")]
pub async fn promote_user(
    accounts: web::Data<AccountService>,
    id: web::Path<String>,
    admin: AdminUser,
) -> Result<impl Responder, AppError> {
    let user = accounts.promote(&id).await?;
    log::info!("{} promoted {} to admin", admin.0.username, user.username);
    Ok(HttpResponse::Ok().json(user))
}
