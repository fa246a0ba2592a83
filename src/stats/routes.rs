// src/stats/routes.rs

use axum::{routing::get, Router};

use super::handlers;

/// Create the statistics router
///
/// All three endpoints require an authenticated session and answer 403
/// otherwise.
pub fn stats_routes() -> Router {
    Router::new()
        .route("/api/trip_summary", get(handlers::trip_summary))
        .route("/api/carbon_footprint", get(handlers::carbon_footprint))
        .route(
            "/api/frequent_destinations",
            get(handlers::frequent_destinations),
        )
}
