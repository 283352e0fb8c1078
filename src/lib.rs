#![doc = "The `taskwarden` library crate."]
#![doc = ""]
#![doc = "Task tracking over HTTP with JWT authentication and role-based access"]
#![doc = "control. The crate is layered top to bottom as routes (transport),"]
#![doc = "services (account and task rules) and store (persistence behind"]
#![doc = "capability traits), with `auth` providing the password hasher, token"]
#![doc = "service and request gates shared across layers. The binary in"]
#![doc = "`main.rs` wires the Postgres backends; the test suites wire the"]
#![doc = "in-memory ones against the same route tree."]

pub mod auth;
pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;
pub mod store;

pub use routes::AppState;
