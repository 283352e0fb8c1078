use actix_web::{delete, get, post, put, web, HttpResponse, Responder};

use crate::auth::AdminUser;
use crate::error::AppError;
use crate::models::TaskInput;
use crate::services::TaskService;

/// Lists every task. Visible to any authenticated caller.
///
/// ## Responses:
/// - `200 OK`: A JSON array, `[]` when no tasks exist.
/// - `401 Unauthorized`: No valid token.
#[get("")]
pub async fn list_tasks(tasks: web::Data<TaskService>) -> Result<impl Responder, AppError> {
    let tasks = tasks.list().await?;
    Ok(HttpResponse::Ok().json(tasks))
}

/// Retrieves a single task by id. Visible to any authenticated caller.
///
/// ## Responses:
/// - `200 OK`: The task.
/// - `400 Bad Request`: Malformed id.
/// - `401 Unauthorized`: No valid token.
/// - `404 Not Found`: No task with that id.
#[get("/{id}")]
pub async fn get_task(
    tasks: web::Data<TaskService>,
    id: web::Path<String>,
) -> Result<impl Responder, AppError> {
    let task = tasks.get(&id).await?;
    Ok(HttpResponse::Ok().json(task))
}

/// Creates a task. Admin only.
///
/// All fields are optional free-form strings; absent ones are stored empty.
///
/// ## Responses:
/// - `201 Created`: The stored task with its assigned id.
/// - `401 Unauthorized`: No valid token.
/// - `403 Forbidden`: Caller's token does not carry the admin role.
#[post("")]
pub async fn create_task(
    tasks: web::Data<TaskService>,
    admin: AdminUser,
    payload: web::Json<TaskInput>,
) -> Result<impl Responder, AppError> {
    let task = tasks.create(payload.into_inner()).await?;
    log::info!("{} created task {}", admin.0.username, task.id);
    Ok(HttpResponse::Created().json(task))
}

/// Replaces all fields of an existing task. Admin only.
///
/// ## Responses:
/// - `200 OK`: The stored task after the update.
/// - `400 Bad Request`: Malformed id.
/// - `401 Unauthorized`: No valid token.
/// - `403 Forbidden`: Caller's token does not carry the admin role.
/// - `404 Not Found`: No task with that id.
#[put("/{id}")]
pub async fn update_task(
    tasks: web::Data<TaskService>,
    admin: AdminUser,
    id: web::Path<String>,
    payload: web::Json<TaskInput>,
) -> Result<impl Responder, AppError> {
    let task = tasks.update(&id, payload.into_inner()).await?;
    log::info!("{} updated task {}", admin.0.username, task.id);
    Ok(HttpResponse::Ok().json(task))
}

/// Deletes a task. Admin only.
///
/// ## Responses:
/// - `204 No Content`: The task is gone.
/// - `400 Bad Request`: Malformed id.
/// - `401 Unauthorized`: No valid token.
/// - `403 Forbidden`: Caller's token does not carry the admin role.
/// - `404 Not Found`: No task with that id.
#[delete("/{id}")]
pub async fn delete_task(
    tasks: web::Data<TaskService>,
    admin: AdminUser,
    id: web::Path<String>,
) -> Result<impl Responder, AppError> {
    tasks.delete(&id).await?;
    log::info!("{} deleted task {}", admin.0.username, id.as_str());
    Ok(HttpResponse::NoContent().finish())
}
