use axum::{extract::Extension, Json};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{error, info};

use super::models::{MessageResponse, SaveTripRequest};
use super::services::TripsService;
use crate::auth::AuthedUser;
use crate::common::{ApiError, AppState};

/// POST /save_trip - Persist a trip for the authenticated user
///
/// # Request Body
/// ```json
/// {
///   "start_location": {"name": "...", "latitude": 52.52, "longitude": 13.40},
///   "end_location": {"name": "...", "latitude": 48.85, "longitude": 2.35},
///   "transport_mode": "train",
///   "distance": 878.0,
///   "carbon_footprint": 36.0,
///   "carbon_footprint_private": 150.2
/// }
/// ```
pub async fn save_trip(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    authed: AuthedUser,
    Json(payload): Json<SaveTripRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    let state = state_lock.read().await.clone();
    let trips_service = TripsService::new(state.db.clone());

    let trip = trips_service
        .save_trip(&authed.id, payload)
        .await
        .map_err(|e| match e {
            // Missing payload data keeps its 400; everything unexpected is
            // reported as a generic failure with no internal detail
            ApiError::BadRequest(msg) => ApiError::BadRequest(msg),
            other => {
                error!(error = %other, user_id = %authed.id, "Error saving trip");
                ApiError::InternalServer("An error occurred while saving the trip".to_string())
            }
        })?;

    info!(user_id = %authed.id, trip_id = %trip.id, "Trip saved successfully");

    Ok(Json(MessageResponse {
        message: "Trip saved successfully".to_string(),
    }))
}
