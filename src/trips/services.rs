use sqlx::SqlitePool;
use tracing::{debug, info};

use super::models::{Location, LocationPayload, SaveTripRequest, Trip};
use crate::common::{generate_location_id, generate_trip_id, ApiError};

pub struct TripsService {
    db: SqlitePool,
}

impl TripsService {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }

    /// Resolve a location by its exact coordinate pair, creating it if absent.
    ///
    /// Matching is bit-exact on the stored floats; coordinates that differ by
    /// any rounding never deduplicate. When an existing row is reused its
    /// name and type tag are left as they were first written. The insert is
    /// conflict-tolerant: a concurrent request racing on the same new pair
    /// loses the insert silently and both resolve to the surviving row.
    pub async fn find_or_create_location(
        &self,
        payload: &LocationPayload,
        location_type: &str,
    ) -> Result<Location, ApiError> {
        if let Some(existing) = sqlx::query_as::<_, Location>(
            "SELECT * FROM locations WHERE latitude = ? AND longitude = ?",
        )
        .bind(payload.latitude)
        .bind(payload.longitude)
        .fetch_optional(&self.db)
        .await
        .map_err(ApiError::DatabaseError)?
        {
            debug!(
                location_id = %existing.id,
                latitude = payload.latitude,
                longitude = payload.longitude,
                "Reusing existing location"
            );
            return Ok(existing);
        }

        let id = generate_location_id();
        sqlx::query(
            r#"
            INSERT INTO locations (id, name, latitude, longitude, location_type)
            VALUES (?, ?, ?, ?, ?)
            ON CONFLICT(latitude, longitude) DO NOTHING
            "#,
        )
        .bind(&id)
        .bind(&payload.name)
        .bind(payload.latitude)
        .bind(payload.longitude)
        .bind(location_type)
        .execute(&self.db)
        .await
        .map_err(ApiError::DatabaseError)?;

        // Fetch back by coordinates rather than id: if the insert lost a race
        // this returns the row the other request created.
        sqlx::query_as::<_, Location>("SELECT * FROM locations WHERE latitude = ? AND longitude = ?")
            .bind(payload.latitude)
            .bind(payload.longitude)
            .fetch_one(&self.db)
            .await
            .map_err(ApiError::DatabaseError)
    }

    /// Persist a trip for the given user, resolving both locations first.
    pub async fn save_trip(
        &self,
        user_id: &str,
        request: SaveTripRequest,
    ) -> Result<Trip, ApiError> {
        let (start_payload, end_payload) = match (&request.start_location, &request.end_location) {
            (Some(start), Some(end)) => (start, end),
            _ => return Err(ApiError::BadRequest("Missing location data".to_string())),
        };

        let start = self.find_or_create_location(start_payload, "from").await?;
        let end = self.find_or_create_location(end_payload, "to").await?;

        let id = generate_trip_id();
        sqlx::query(
            r#"
            INSERT INTO trips (
                id, user_id, start_location_id, end_location_id,
                transport_mode, distance, carbon_footprint, carbon_footprint_private
            )
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&id)
        .bind(user_id)
        .bind(&start.id)
        .bind(&end.id)
        .bind(&request.transport_mode)
        .bind(request.distance)
        .bind(request.carbon_footprint)
        .bind(request.carbon_footprint_private)
        .execute(&self.db)
        .await
        .map_err(ApiError::DatabaseError)?;

        info!(
            trip_id = %id,
            user_id = %user_id,
            start_location_id = %start.id,
            end_location_id = %end.id,
            transport_mode = %request.transport_mode,
            "Trip recorded"
        );

        sqlx::query_as::<_, Trip>("SELECT * FROM trips WHERE id = ?")
            .bind(&id)
            .fetch_one(&self.db)
            .await
            .map_err(ApiError::DatabaseError)
    }
}
