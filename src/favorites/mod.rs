//! # Favorites Module
//!
//! Location bookmarking: users can favorite locations they travel to often
//! and list them back with their coordinates.

pub mod handlers;
pub mod models;
pub mod routes;

#[cfg(test)]
mod tests;

pub use routes::favorites_routes;
