use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::AppError;
use crate::models::{NewUser, User};
use crate::store::{with_deadline, UserStore};

const USER_COLUMNS: &str = "id, username, password_hash, role";

/// Postgres-backed [`UserStore`].
///
/// Uniqueness of usernames rests on the `users.username` unique constraint;
/// the insert path translates that violation into [`AppError::Conflict`] so
/// callers racing past the service-level pre-check still get the right error.
pub struct PgUserStore {
    pool: PgPool,
}

impl PgUserStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db) if db.code().as_deref() == Some("23505"))
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, AppError> {
        with_deadline(
            sqlx::query_as::<_, User>(&format!(
                "SELECT {} FROM users WHERE username = $1",
                USER_COLUMNS
            ))
            .bind(username)
            .fetch_optional(&self.pool),
        )
        .await
    }

    async fn count(&self) -> Result<i64, AppError> {
        with_deadline(sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users").fetch_one(&self.pool))
            .await
    }

    async fn insert(&self, user: NewUser) -> Result<User, AppError> {
        let id = Uuid::new_v4();
        with_deadline(async {
            sqlx::query_as::<_, User>(&format!(
                "INSERT INTO users (id, username, password_hash, role) \
                 VALUES ($1, $2, $3, $4) RETURNING {}",
                USER_COLUMNS
            ))
            .bind(id)
            .bind(&user.username)
            .bind(&user.password_hash)
            .bind(user.role)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                if is_unique_violation(&e) {
                    AppError::Conflict("username already taken".into())
                } else {
                    AppError::from(e)
                }
            })
        })
        .await
    }

    async fn promote(&self, id: Uuid) -> Result<Option<User>, AppError> {
        with_deadline(
            sqlx::query_as::<_, User>(&format!(
                "UPDATE users SET role = 'admin' WHERE id = $1 RETURNING {}",
                USER_COLUMNS
            ))
            .bind(id)
            .fetch_optional(&self.pool),
        )
        .await
    }
}
