//!
//! # Account Service
//!
//! Registration, login, lookup and promotion of accounts. All user-facing
//! account rules live here; the stores below only persist, and the routes
//! above only translate HTTP.

use std::sync::Arc;
use uuid::Uuid;

use crate::auth::password::{PasswordHasher, MAX_PASSWORD_BYTES};
use crate::auth::token::TokenService;
use crate::error::AppError;
use crate::models::{LoginResponse, NewUser, Role, User};
use crate::store::UserStore;

#[derive(Clone)]
pub struct AccountService {
    users: Arc<dyn UserStore>,
    hasher: PasswordHasher,
    tokens: TokenService,
}

impl AccountService {
    pub fn new(users: Arc<dyn UserStore>, hasher: PasswordHasher, tokens: TokenService) -> Self {
        Self {
            users,
            hasher,
            tokens,
        }
    }

    /// Creates an account. The very first account in an empty store becomes
    /// the admin; every later one starts as a regular user.
    ///
    /// The returned record has its hash blanked, serializing as `"password": ""`.
    pub async fn register(&self, username: &str, password: &str) -> Result<User, AppError> {
        if username.is_empty() || password.is_empty() {
            return Err(AppError::Validation("fields cannot be empty".into()));
        }
        if password.len() > MAX_PASSWORD_BYTES {
            return Err(AppError::Validation(format!(
                "password must be at most {} bytes",
                MAX_PASSWORD_BYTES
            )));
        }

        if self.users.find_by_username(username).await?.is_some() {
            return Err(AppError::Conflict("username already taken".into()));
        }

        // The count is not synchronized with the insert: two concurrent first
        // registrations can each observe an empty store and both come out
        // admin. Accepted for a bootstrap-only window.
        let role = if self.users.count().await? == 0 {
            Role::Admin
        } else {
            Role::User
        };

        let password_hash = self.hasher.hash(password)?;
        let mut user = self
            .users
            .insert(NewUser {
                username: username.to_owned(),
                password_hash,
                role,
            })
            .await?;

        log::info!("registered account {} with role {}", user.username, user.role);
        user.password_hash.clear();
        Ok(user)
    }

    /// Exchanges credentials for a signed token.
    ///
    /// An unknown username and a wrong password both fail with
    /// [`AppError::InvalidCredentials`]; the response never says which.
    pub async fn login(&self, username: &str, password: &str) -> Result<LoginResponse, AppError> {
        if username.is_empty() {
            return Err(AppError::Validation("username is a required field".into()));
        }

        let user = match self.users.find_by_username(username).await? {
            Some(user) => user,
            None => {
                log::debug!("login rejected for {}: unknown username", username);
                return Err(AppError::InvalidCredentials);
            }
        };

        if !self.hasher.verify(password, &user.password_hash)? {
            log::debug!("login rejected for {}: wrong password", username);
            return Err(AppError::InvalidCredentials);
        }

        let token = self.tokens.issue(user.id, &user.username, user.role)?;
        log::info!("issued token for {}", user.username);
        Ok(LoginResponse {
            id: user.id,
            username: user.username,
            token,
        })
    }

    /// Looks up an account by username. The returned record keeps its stored
    /// hash; the caller decides whether to expose it.
    pub async fn get_by_username(&self, username: &str) -> Result<User, AppError> {
        self.users
            .find_by_username(username)
            .await?
            .ok_or_else(|| AppError::NotFound("user not found".into()))
    }

    /// Grants the admin role to the addressed account. Promoting an existing
    /// admin succeeds and changes nothing.
    ///
    /// The returned record has its hash blanked.
    pub async fn promote(&self, id: &str) -> Result<User, AppError> {
        let id =
            Uuid::parse_str(id).map_err(|_| AppError::Validation("invalid user id".into()))?;
        let mut user = self
            .users
            .promote(id)
            .await?
            .ok_or_else(|| AppError::NotFound("user not found".into()))?;

        log::info!("promoted {} to admin", user.username);
        user.password_hash.clear();
        Ok(user)
    }
}
