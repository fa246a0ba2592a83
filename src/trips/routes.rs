// src/trips/routes.rs

use axum::{routing::post, Router};

use super::handlers;

/// Create the trips router
pub fn trips_routes() -> Router {
    Router::new().route("/save_trip", post(handlers::save_trip))
}
