// src/favorites/handlers.rs
//! Favorite-location handlers for user bookmarking functionality

use axum::{
    extract::{Extension, Path},
    Json,
};
use sqlx::SqlitePool;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::info;

use super::models::{FavoriteLocation, FavoriteRequest, FavoriteResponse};
use crate::auth::AuthedUser;
use crate::common::{generate_favorite_id, ApiError, AppState};

/// POST /api/favorites - Favorite a location for the authenticated user
pub async fn save_favorite(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    authed: AuthedUser,
    Json(payload): Json<FavoriteRequest>,
) -> Result<Json<FavoriteResponse>, ApiError> {
    let state = state_lock.read().await.clone();
    let response = favorite_location(&state.db, &authed.id, &payload.location_id).await?;
    Ok(Json(response))
}

/// DELETE /api/favorites/:location_id - Remove a favorited location
pub async fn remove_favorite(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    authed: AuthedUser,
    Path(location_id): Path<String>,
) -> Result<Json<FavoriteResponse>, ApiError> {
    let state = state_lock.read().await.clone();
    let response = unfavorite_location(&state.db, &authed.id, &location_id).await?;
    Ok(Json(response))
}

/// GET /api/favorites - List the user's favorited locations, newest first
pub async fn get_favorites(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    authed: AuthedUser,
) -> Result<Json<Vec<FavoriteLocation>>, ApiError> {
    let state = state_lock.read().await.clone();
    let favorites = list_favorites(&state.db, &authed.id).await?;
    Ok(Json(favorites))
}

// ---- Helper Functions ----

/// Favorite a location, refusing to add a duplicate row.
///
/// Nothing at the schema level prevents the same (user, location) pair from
/// appearing twice, so the existence check here is what keeps the list clean.
pub async fn favorite_location(
    pool: &SqlitePool,
    user_id: &str,
    location_id: &str,
) -> Result<FavoriteResponse, ApiError> {
    // Check if the location exists
    let location_exists: Option<(String,)> = sqlx::query_as("SELECT id FROM locations WHERE id = ?")
        .bind(location_id)
        .fetch_optional(pool)
        .await
        .map_err(ApiError::DatabaseError)?;

    if location_exists.is_none() {
        return Err(ApiError::NotFound("Location not found".to_string()));
    }

    let existing: Option<(String,)> =
        sqlx::query_as("SELECT id FROM favorites WHERE user_id = ? AND location_id = ?")
            .bind(user_id)
            .bind(location_id)
            .fetch_optional(pool)
            .await
            .map_err(ApiError::DatabaseError)?;

    if existing.is_some() {
        return Ok(FavoriteResponse {
            success: true,
            message: "Location already favorited".to_string(),
            favorited: true,
        });
    }

    let id = generate_favorite_id();
    sqlx::query("INSERT INTO favorites (id, user_id, location_id) VALUES (?, ?, ?)")
        .bind(&id)
        .bind(user_id)
        .bind(location_id)
        .execute(pool)
        .await
        .map_err(ApiError::DatabaseError)?;

    info!(user_id = %user_id, location_id = %location_id, "Location favorited");

    Ok(FavoriteResponse {
        success: true,
        message: "Location favorited successfully".to_string(),
        favorited: true,
    })
}

/// Remove a user's favorite rows for a location, reporting whether any existed
pub async fn unfavorite_location(
    pool: &SqlitePool,
    user_id: &str,
    location_id: &str,
) -> Result<FavoriteResponse, ApiError> {
    let result = sqlx::query("DELETE FROM favorites WHERE user_id = ? AND location_id = ?")
        .bind(user_id)
        .bind(location_id)
        .execute(pool)
        .await
        .map_err(ApiError::DatabaseError)?;

    if result.rows_affected() == 0 {
        return Ok(FavoriteResponse {
            success: true,
            message: "Location was not favorited".to_string(),
            favorited: false,
        });
    }

    info!(user_id = %user_id, location_id = %location_id, "Location unfavorited");

    Ok(FavoriteResponse {
        success: true,
        message: "Location removed from favorites".to_string(),
        favorited: false,
    })
}

/// List the user's favorited locations joined with their coordinates
pub async fn list_favorites(
    pool: &SqlitePool,
    user_id: &str,
) -> Result<Vec<FavoriteLocation>, ApiError> {
    let favorites = sqlx::query_as::<_, (String, String, String, f64, f64, Option<String>)>(
        r#"
        SELECT f.id, f.location_id, l.name, l.latitude, l.longitude, f.created_at
        FROM favorites f
        JOIN locations l ON f.location_id = l.id
        WHERE f.user_id = ?
        ORDER BY f.created_at DESC
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
    .map_err(ApiError::DatabaseError)?
    .into_iter()
    .map(
        |(id, location_id, name, latitude, longitude, favorited_at)| FavoriteLocation {
            id,
            location_id,
            name,
            latitude,
            longitude,
            favorited_at,
        },
    )
    .collect();

    Ok(favorites)
}
