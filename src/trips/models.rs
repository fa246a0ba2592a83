use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Location database model
///
/// A location is identified by its exact (latitude, longitude) pair; the
/// type tag records which end of a trip first created it and is cosmetic.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Location {
    pub id: String,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub location_type: String,
    pub created_at: Option<String>,
}

/// Trip database model
///
/// `carbon_footprint` is the public-transport estimate; the private-vehicle
/// estimate is optional and only present when the client supplies it.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Trip {
    pub id: String,
    pub user_id: String,
    pub start_location_id: String,
    pub end_location_id: String,
    pub transport_mode: String,
    pub distance: f64,
    pub carbon_footprint: f64,
    pub carbon_footprint_private: Option<f64>,
    pub created_at: Option<String>,
}

/// One end of a trip as submitted by the client
#[derive(Debug, Clone, Deserialize)]
pub struct LocationPayload {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Deserialize)]
pub struct SaveTripRequest {
    pub start_location: Option<LocationPayload>,
    pub end_location: Option<LocationPayload>,
    pub transport_mode: String,
    pub distance: f64,
    pub carbon_footprint: f64,
    pub carbon_footprint_private: Option<f64>,
}

#[derive(Serialize)]
pub struct MessageResponse {
    pub message: String,
}
