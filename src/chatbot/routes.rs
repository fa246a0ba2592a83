// src/chatbot/routes.rs

use axum::{routing::post, Router};

use super::handlers;

/// Create the chatbot router
pub fn chatbot_routes() -> Router {
    Router::new().route("/ask", post(handlers::ask))
}
