//!
//! # Persistence Layer
//!
//! Capability traits for user and task persistence, with two backends each: a
//! Postgres implementation used by the binary and an in-memory implementation
//! used by the test suites.
//!
//! Services depend only on the traits, so swapping backends never touches the
//! layers above. Every Postgres operation runs under [`STORE_DEADLINE`]; a call
//! that exceeds it fails as a storage error rather than hanging its request.

pub mod memory;
pub mod tasks;
pub mod users;

pub use memory::{MemoryTaskStore, MemoryUserStore};
pub use tasks::PgTaskStore;
pub use users::PgUserStore;

use async_trait::async_trait;
use std::future::Future;
use std::time::Duration;
use uuid::Uuid;

use crate::error::AppError;
use crate::models::{NewUser, Task, TaskInput, User};

/// Upper bound on any single backing-store operation.
pub(crate) const STORE_DEADLINE: Duration = Duration::from_secs(5);

/// Runs a store future under [`STORE_DEADLINE`].
///
/// The deadline is per operation, so one slow call failing never cancels work
/// owned by other requests. Timeouts surface as [`AppError::Storage`] and are
/// not retried.
pub(crate) async fn with_deadline<T, E>(
    fut: impl Future<Output = Result<T, E>>,
) -> Result<T, AppError>
where
    AppError: From<E>,
{
    match tokio::time::timeout(STORE_DEADLINE, fut).await {
        Ok(result) => result.map_err(AppError::from),
        Err(_) => Err(AppError::Storage("store operation timed out".into())),
    }
}

/// Persistence operations for user accounts.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Looks up an account by username; `None` when no such record exists.
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, AppError>;

    /// Number of stored accounts.
    async fn count(&self) -> Result<i64, AppError>;

    /// Persists a new account and returns it with its assigned id.
    /// A duplicate username fails with [`AppError::Conflict`].
    async fn insert(&self, user: NewUser) -> Result<User, AppError>;

    /// Sets an account's role to admin in a single store operation.
    /// `None` when no record matched the id. Promoting an admin is a no-op
    /// that still returns the record.
    async fn promote(&self, id: Uuid) -> Result<Option<User>, AppError>;
}

/// Persistence operations for tasks.
#[async_trait]
pub trait TaskStore: Send + Sync {
    async fn list(&self) -> Result<Vec<Task>, AppError>;

    async fn find(&self, id: Uuid) -> Result<Option<Task>, AppError>;

    /// Persists a new task and returns it with its assigned id.
    async fn insert(&self, input: TaskInput) -> Result<Task, AppError>;

    /// Replaces every mutable field of the addressed task. Returns the stored
    /// record, or `None` when no record matched the id.
    async fn update(&self, id: Uuid, input: TaskInput) -> Result<Option<Task>, AppError>;

    /// Removes a task; `false` when no record matched the id.
    async fn delete(&self, id: Uuid) -> Result<bool, AppError>;
}
