//! # Pages Module
//!
//! Server-rendered shell pages: landing, about, dashboard, statistics.

pub mod handlers;
pub mod routes;

pub use routes::pages_routes;
