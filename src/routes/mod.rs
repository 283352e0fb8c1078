pub mod auth;
pub mod health;
pub mod tasks;
pub mod users;

use actix_web::web;

use crate::auth::{AuthGate, TokenService};
use crate::error::AppError;
use crate::services::{AccountService, TaskService};

/// Everything the HTTP surface needs, wired once at startup.
#[derive(Clone)]
pub struct AppState {
    pub accounts: AccountService,
    pub tasks: TaskService,
    pub tokens: TokenService,
}

/// Builds the route configuration for the full HTTP surface.
///
/// Returned as a closure so the server factory and the test harness assemble
/// the exact same tree. Registration, login and health stay outside the
/// guarded scopes; `/tasks` and `/users` sit behind [`AuthGate`].
pub fn configure(state: AppState) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg| {
        cfg.app_data(web::Data::new(state.accounts))
            .app_data(web::Data::new(state.tasks))
            // Malformed JSON bodies get the same error envelope as everything else.
            .app_data(web::JsonConfig::default().error_handler(|err, _req| {
                AppError::Validation(err.to_string()).into()
            }))
            .service(health::health)
            .service(auth::register)
            .service(auth::login)
            .service(
                web::scope("/tasks")
                    .wrap(AuthGate::new(state.tokens.clone()))
                    .service(tasks::list_tasks)
                    .service(tasks::create_task)
                    .service(tasks::get_task)
                    .service(tasks::update_task)
                    .service(tasks::delete_task),
            )
            .service(
                web::scope("/users")
                    .wrap(AuthGate::new(state.tokens))
                    .service(users::promote_user)
                    .service(users::get_user),
            );
    }
}
