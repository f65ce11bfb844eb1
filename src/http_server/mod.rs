//! # HTTP Server Module
//!
//! Axum server exposing the user directory API.
//!
//! # Endpoints
//!
//! - `/health` - Health check
//! - `/api/users` - List and create users
//! - `/api/users/{id}` - Update-lookup and delete a user

pub mod config;
pub mod server;
pub mod user_routes;

pub use config::HttpServerConfig;
pub use server::HttpServer;
pub use user_routes::{user_routes, UsersState};
