// src/favorites/routes.rs

use axum::{
    routing::{delete, get},
    Router,
};

use super::handlers;

/// Create the favorites router
pub fn favorites_routes() -> Router {
    Router::new()
        .route(
            "/api/favorites",
            get(handlers::get_favorites).post(handlers::save_favorite),
        )
        .route("/api/favorites/:location_id", delete(handlers::remove_favorite))
}
