use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A task entity as stored and as returned by the API.
///
/// Every field besides the id is free-form text. Due dates and statuses are
/// caller-defined strings; the service attaches no meaning to their contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Task {
    /// Unique identifier (UUID v4), assigned by the store.
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub due_date: String,
    pub status: String,
}

/// Input payload for creating or replacing a task.
///
/// Fields absent from the request body default to the empty string, so a bare
/// `{}` is a valid, fully-blank task.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TaskInput {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub due_date: String,
    #[serde(default)]
    pub status: String,
}
