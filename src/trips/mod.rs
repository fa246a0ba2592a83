//! # Trips Module
//!
//! Trip logging: resolves start/end locations (find-or-create keyed on the
//! exact coordinate pair) and persists the trip row.

pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;


pub use models::{Location, Trip};
pub use routes::trips_routes;
pub use services::TripsService;
