//! # Auth Module
//!
//! This module handles all authentication-related functionality including:
//! - Account registration with bcrypt password hashing
//! - Username/password login and session establishment
//! - Session token generation and validation
//! - AuthedUser extractor for protected routes

pub mod extractors;
pub mod handlers;
pub mod models;
pub mod password;
pub mod routes;
pub mod validators;

#[cfg(test)]
mod tests;

pub use extractors::AuthedUser;
pub use models::User;
pub use routes::auth_routes;
