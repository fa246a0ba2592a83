use axum::{
    extract::{Extension, Form},
    Json,
};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

use super::models::{AskRequest, ChatResponse};
use crate::common::AppState;

/// POST /ask - Answer a chat-widget query
///
/// Takes the form field `query` and returns `{"response": "..."}`. No auth;
/// the widget is available to anonymous visitors too.
pub async fn ask(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    Form(payload): Form<AskRequest>,
) -> Json<ChatResponse> {
    let state = state_lock.read().await.clone();

    let response = state.chatbot.respond(&payload.query);

    debug!(query = %payload.query, "Chatbot query answered");

    Json(ChatResponse { response })
}
