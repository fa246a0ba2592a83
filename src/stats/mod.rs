//! # Stats Module
//!
//! Read-only per-user aggregates over the trips table: trip summary,
//! carbon-footprint totals, and the most frequent destinations.

pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;


pub use routes::stats_routes;
pub use services::StatsService;
