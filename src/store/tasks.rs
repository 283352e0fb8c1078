use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::AppError;
use crate::models::{Task, TaskInput};
use crate::store::{with_deadline, TaskStore};

const TASK_COLUMNS: &str = "id, title, description, due_date, status";

/// Postgres-backed [`TaskStore`].
pub struct PgTaskStore {
    pool: PgPool,
}

impl PgTaskStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TaskStore for PgTaskStore {
    async fn list(&self) -> Result<Vec<Task>, AppError> {
        with_deadline(
            sqlx::query_as::<_, Task>(&format!("SELECT {} FROM tasks", TASK_COLUMNS))
                .fetch_all(&self.pool),
        )
        .await
    }

    async fn find(&self, id: Uuid) -> Result<Option<Task>, AppError> {
        with_deadline(
            sqlx::query_as::<_, Task>(&format!(
                "SELECT {} FROM tasks WHERE id = $1",
                TASK_COLUMNS
            ))
            .bind(id)
            .fetch_optional(&self.pool),
        )
        .await
    }

    async fn insert(&self, input: TaskInput) -> Result<Task, AppError> {
        let id = Uuid::new_v4();
        with_deadline(
            sqlx::query_as::<_, Task>(&format!(
                "INSERT INTO tasks (id, title, description, due_date, status) \
                 VALUES ($1, $2, $3, $4, $5) RETURNING {}",
                TASK_COLUMNS
            ))
            .bind(id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.due_date)
            .bind(&input.status)
            .fetch_one(&self.pool),
        )
        .await
    }

    async fn update(&self, id: Uuid, input: TaskInput) -> Result<Option<Task>, AppError> {
        with_deadline(
            sqlx::query_as::<_, Task>(&format!(
                "UPDATE tasks SET title = $1, description = $2, due_date = $3, status = $4 \
                 WHERE id = $5 RETURNING {}",
                TASK_COLUMNS
            ))
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.due_date)
            .bind(&input.status)
            .bind(id)
            .fetch_optional(&self.pool),
        )
        .await
    }

    async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        let result = with_deadline(
            sqlx::query("DELETE FROM tasks WHERE id = $1")
                .bind(id)
                .execute(&self.pool),
        )
        .await?;
        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn connect() -> PgPool {
        dotenv::dotenv().ok();
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set for store tests");
        let pool = PgPool::connect(&url).await.expect("connect to database");
        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .expect("run migrations");
        pool
    }

    // Needs a running Postgres; excluded from the default run.
    #[tokio::test]
    #[ignore]
    async fn test_task_crud_round_trip() {
        let store = PgTaskStore::new(connect().await);

        let created = store
            .insert(TaskInput {
                title: "write report".to_string(),
                description: "quarterly numbers".to_string(),
                due_date: "2026-09-01".to_string(),
                status: "pending".to_string(),
            })
            .await
            .unwrap();

        let found = store.find(created.id).await.unwrap().unwrap();
        assert_eq!(found, created);

        let updated = store
            .update(
                created.id,
                TaskInput {
                    title: "write report".to_string(),
                    description: "final numbers".to_string(),
                    due_date: "2026-09-01".to_string(),
                    status: "done".to_string(),
                },
            )
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.status, "done");

        assert!(store.delete(created.id).await.unwrap());
        assert!(!store.delete(created.id).await.unwrap());
        assert!(store.find(created.id).await.unwrap().is_none());
    }

    // Needs a running Postgres; excluded from the default run.
    #[tokio::test]
    #[ignore]
    async fn test_update_of_absent_task_matches_nothing() {
        let store = PgTaskStore::new(connect().await);
        let result = store
            .update(Uuid::new_v4(), TaskInput::default())
            .await
            .unwrap();
        assert!(result.is_none());
    }
}
