//! # Chatbot Module
//!
//! A stateless support widget: keyword match first, FAQ substring match
//! second, fixed fallback otherwise. No learning, no context, no
//! multi-turn state.

pub mod handlers;
pub mod models;
pub mod responder;
pub mod routes;

#[cfg(test)]
mod tests;

pub use responder::ChatbotResponder;
pub use routes::chatbot_routes;
