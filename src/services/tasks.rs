//!
//! # Task Service
//!
//! CRUD over tasks. Path ids arrive as raw strings and are parsed here, so a
//! malformed id fails as a validation error before any store call, while a
//! well-formed id that matches nothing fails as not-found.

use std::sync::Arc;
use uuid::Uuid;

use crate::error::AppError;
use crate::models::{Task, TaskInput};
use crate::store::TaskStore;

#[derive(Clone)]
pub struct TaskService {
    tasks: Arc<dyn TaskStore>,
}

impl TaskService {
    pub fn new(tasks: Arc<dyn TaskStore>) -> Self {
        Self { tasks }
    }

    /// Every stored task; an empty store yields an empty list.
    pub async fn list(&self) -> Result<Vec<Task>, AppError> {
        self.tasks.list().await
    }

    pub async fn get(&self, id: &str) -> Result<Task, AppError> {
        let id = parse_task_id(id)?;
        self.tasks.find(id).await?.ok_or_else(task_not_found)
    }

    /// Stores a new task. No field is validated; blank and unknown values are
    /// stored verbatim.
    pub async fn create(&self, input: TaskInput) -> Result<Task, AppError> {
        let task = self.tasks.insert(input).await?;
        log::debug!("created task {}", task.id);
        Ok(task)
    }

    /// Replaces all fields of an existing task and returns the stored result.
    pub async fn update(&self, id: &str, input: TaskInput) -> Result<Task, AppError> {
        let id = parse_task_id(id)?;
        self.tasks.update(id, input).await?.ok_or_else(task_not_found)
    }

    pub async fn delete(&self, id: &str) -> Result<(), AppError> {
        let id = parse_task_id(id)?;
        if self.tasks.delete(id).await? {
            log::debug!("deleted task {}", id);
            Ok(())
        } else {
            Err(task_not_found())
        }
    }
}

fn parse_task_id(id: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(id).map_err(|_| AppError::Validation("invalid id format".into()))
}

fn task_not_found() -> AppError {
    AppError::NotFound("task not found".into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryTaskStore;
    use pretty_assertions::assert_eq;

    fn service() -> TaskService {
        TaskService::new(Arc::new(MemoryTaskStore::default()))
    }

    fn input(title: &str, status: &str) -> TaskInput {
        TaskInput {
            title: title.to_string(),
            description: String::new(),
            due_date: String::new(),
            status: status.to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_then_get_returns_the_same_task() {
        let service = service();
        let created = service.create(input("write report", "pending")).await.unwrap();
        let fetched = service.get(&created.id.to_string()).await.unwrap();
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn test_blank_and_unvalidated_fields_are_stored_verbatim() {
        let service = service();

        // Entirely blank input is storable.
        let blank = service.create(TaskInput::default()).await.unwrap();
        assert_eq!(blank.title, "");

        // Long titles and free-form statuses pass straight through.
        let long_title = "t".repeat(1000);
        let odd = service
            .create(TaskInput {
                title: long_title.clone(),
                description: "zażółć gęślą jaźń".to_string(),
                due_date: "whenever".to_string(),
                status: "blocked-on-vendor".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(odd.title, long_title);
        assert_eq!(odd.status, "blocked-on-vendor");
    }

    #[tokio::test]
    async fn test_malformed_id_fails_before_the_store() {
        let service = service();

        for op in ["get", "update", "delete"] {
            let err = match op {
                "get" => service.get("12345").await.unwrap_err(),
                "update" => service.update("12345", TaskInput::default()).await.unwrap_err(),
                _ => service.delete("12345").await.unwrap_err(),
            };
            match err {
                AppError::Validation(msg) => assert_eq!(msg, "invalid id format"),
                other => panic!("expected validation error, got {:?}", other),
            }
        }
    }

    #[tokio::test]
    async fn test_well_formed_but_absent_id_is_not_found() {
        let service = service();
        let absent = Uuid::new_v4().to_string();

        assert!(matches!(service.get(&absent).await, Err(AppError::NotFound(_))));
        assert!(matches!(
            service.update(&absent, TaskInput::default()).await,
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(service.delete(&absent).await, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_update_returns_the_stored_record() {
        let service = service();
        let created = service.create(input("draft", "open")).await.unwrap();

        let updated = service
            .update(&created.id.to_string(), input("final", "done"))
            .await
            .unwrap();
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.title, "final");
        assert_eq!(updated.status, "done");

        let fetched = service.get(&created.id.to_string()).await.unwrap();
        assert_eq!(fetched, updated);
    }

    #[tokio::test]
    async fn test_delete_removes_the_task() {
        let service = service();
        let created = service.create(input("ephemeral", "open")).await.unwrap();
        let id = created.id.to_string();

        service.delete(&id).await.unwrap();
        assert!(matches!(service.get(&id).await, Err(AppError::NotFound(_))));
        assert!(matches!(service.delete(&id).await, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_list_reflects_store_contents() {
        let service = service();
        assert!(service.list().await.unwrap().is_empty());

        service.create(input("one", "open")).await.unwrap();
        service.create(input("two", "open")).await.unwrap();
        assert_eq!(service.list().await.unwrap().len(), 2);
    }
}
