// src/stats/handlers.rs

use axum::{extract::Extension, response::Json};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::info;

use super::models::{CarbonFootprintSummary, FrequentDestinations, TripSummary};
use super::services::StatsService;
use crate::auth::AuthedUser;
use crate::common::{ApiError, AppState};

/// GET /api/trip_summary - Trip count, distance totals and mode breakdown
pub async fn trip_summary(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    authed: AuthedUser,
) -> Result<Json<TripSummary>, ApiError> {
    let state = state_lock.read().await.clone();
    let stats_service = StatsService::new(state.db.clone());

    let summary = stats_service.trip_summary(&authed.id).await?;

    info!(
        user_id = %authed.id,
        total_trips = summary.total_trips,
        "Trip summary fetched"
    );

    Ok(Json(summary))
}

/// GET /api/carbon_footprint - Carbon totals for the authenticated user
pub async fn carbon_footprint(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    authed: AuthedUser,
) -> Result<Json<CarbonFootprintSummary>, ApiError> {
    let state = state_lock.read().await.clone();
    let stats_service = StatsService::new(state.db.clone());

    let summary = stats_service.carbon_footprint_summary(&authed.id).await?;

    Ok(Json(summary))
}

/// GET /api/frequent_destinations - Top 5 end locations by trip count
pub async fn frequent_destinations(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    authed: AuthedUser,
) -> Result<Json<FrequentDestinations>, ApiError> {
    let state = state_lock.read().await.clone();
    let stats_service = StatsService::new(state.db.clone());

    let destinations = stats_service.frequent_destinations(&authed.id).await?;

    Ok(Json(destinations))
}
