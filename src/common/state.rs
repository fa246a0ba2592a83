// Application state shared across all modules

use sqlx::SqlitePool;
use std::sync::Arc;

use crate::chatbot::ChatbotResponder;

/// Application state containing the database pool and configuration
#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    pub session_secret: String,
    pub chatbot: Arc<ChatbotResponder>,
}
