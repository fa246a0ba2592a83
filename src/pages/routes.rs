// src/pages/routes.rs

use axum::{routing::get, Router};

use super::handlers;

/// Create the shell pages router
pub fn pages_routes() -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/home", get(handlers::index))
        .route("/about", get(handlers::about))
        .route("/dashboard", get(handlers::dashboard))
        .route("/statistics", get(handlers::statistics))
}
