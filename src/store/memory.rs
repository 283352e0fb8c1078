//! In-memory store backends.
//!
//! Behaviorally equivalent to the Postgres backends, including the conflict on
//! duplicate usernames, so the HTTP and service test suites can run without a
//! database.

use async_trait::async_trait;
use std::sync::RwLock;
use uuid::Uuid;

use crate::error::AppError;
use crate::models::{NewUser, Role, Task, TaskInput, User};
use crate::store::{TaskStore, UserStore};

fn lock_error<E: std::fmt::Display>(e: E) -> AppError {
    AppError::Storage(format!("failed to acquire store lock: {}", e))
}

/// [`UserStore`] backend holding accounts in process memory.
#[derive(Default)]
pub struct MemoryUserStore {
    users: RwLock<Vec<User>>,
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, AppError> {
        let users = self.users.read().map_err(lock_error)?;
        Ok(users.iter().find(|u| u.username == username).cloned())
    }

    async fn count(&self) -> Result<i64, AppError> {
        let users = self.users.read().map_err(lock_error)?;
        Ok(users.len() as i64)
    }

    async fn insert(&self, user: NewUser) -> Result<User, AppError> {
        let mut users = self.users.write().map_err(lock_error)?;
        if users.iter().any(|u| u.username == user.username) {
            return Err(AppError::Conflict("username already taken".into()));
        }
        let record = User {
            id: Uuid::new_v4(),
            username: user.username,
            password_hash: user.password_hash,
            role: user.role,
        };
        users.push(record.clone());
        Ok(record)
    }

    async fn promote(&self, id: Uuid) -> Result<Option<User>, AppError> {
        let mut users = self.users.write().map_err(lock_error)?;
        match users.iter_mut().find(|u| u.id == id) {
            Some(user) => {
                user.role = Role::Admin;
                Ok(Some(user.clone()))
            }
            None => Ok(None),
        }
    }
}

/// [`TaskStore`] backend holding tasks in process memory.
#[derive(Default)]
pub struct MemoryTaskStore {
    tasks: RwLock<Vec<Task>>,
}

#[async_trait]
impl TaskStore for MemoryTaskStore {
    async fn list(&self) -> Result<Vec<Task>, AppError> {
        let tasks = self.tasks.read().map_err(lock_error)?;
        Ok(tasks.clone())
    }

    async fn find(&self, id: Uuid) -> Result<Option<Task>, AppError> {
        let tasks = self.tasks.read().map_err(lock_error)?;
        Ok(tasks.iter().find(|t| t.id == id).cloned())
    }

    async fn insert(&self, input: TaskInput) -> Result<Task, AppError> {
        let mut tasks = self.tasks.write().map_err(lock_error)?;
        let record = Task {
            id: Uuid::new_v4(),
            title: input.title,
            description: input.description,
            due_date: input.due_date,
            status: input.status,
        };
        tasks.push(record.clone());
        Ok(record)
    }

    async fn update(&self, id: Uuid, input: TaskInput) -> Result<Option<Task>, AppError> {
        let mut tasks = self.tasks.write().map_err(lock_error)?;
        match tasks.iter_mut().find(|t| t.id == id) {
            Some(task) => {
                task.title = input.title;
                task.description = input.description;
                task.due_date = input.due_date;
                task.status = input.status;
                Ok(Some(task.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        let mut tasks = self.tasks.write().map_err(lock_error)?;
        let before = tasks.len();
        tasks.retain(|t| t.id != id);
        Ok(tasks.len() < before)
    }
}
