use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{middleware::Logger, App, HttpServer};
use sqlx::postgres::PgPoolOptions;

use taskwarden::auth::{PasswordHasher, TokenService};
use taskwarden::config::Config;
use taskwarden::routes::{self, AppState};
use taskwarden::services::{AccountService, TaskService};
use taskwarden::store::{PgTaskStore, PgUserStore};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init();

    let config = Config::from_env();

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&config.database_url)
        .await
        .expect("Failed to connect to database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run database migrations");

    let tokens = TokenService::new(&config.jwt_secret);
    let state = AppState {
        accounts: AccountService::new(
            Arc::new(PgUserStore::new(pool.clone())),
            PasswordHasher::default(),
            tokens.clone(),
        ),
        tasks: TaskService::new(Arc::new(PgTaskStore::new(pool))),
        tokens,
    };

    log::info!("Starting taskwarden server at {}", config.server_url());
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(3600),
            )
            .configure(routes::configure(state.clone()))
    })
    .bind((config.server_host.as_str(), config.server_port))?
    .run()
    .await
}
