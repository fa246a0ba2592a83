use sqlx::SqlitePool;
use std::collections::HashMap;

use super::models::{CarbonFootprintSummary, DestinationCount, FrequentDestinations, TripSummary};
use crate::common::ApiError;

pub struct StatsService {
    db: SqlitePool,
}

impl StatsService {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }

    /// Trip count, distance totals and the per-mode breakdown for one user.
    /// All figures are zero (and the breakdown empty) with no trips.
    pub async fn trip_summary(&self, user_id: &str) -> Result<TripSummary, ApiError> {
        let total_trips =
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM trips WHERE user_id = ?")
                .bind(user_id)
                .fetch_one(&self.db)
                .await
                .map_err(ApiError::DatabaseError)?;

        let total_distance = sqlx::query_scalar::<_, f64>(
            "SELECT CAST(COALESCE(SUM(distance), 0) AS REAL) FROM trips WHERE user_id = ?",
        )
        .bind(user_id)
        .fetch_one(&self.db)
        .await
        .map_err(ApiError::DatabaseError)?;

        let average_distance = sqlx::query_scalar::<_, f64>(
            "SELECT CAST(COALESCE(AVG(distance), 0) AS REAL) FROM trips WHERE user_id = ?",
        )
        .bind(user_id)
        .fetch_one(&self.db)
        .await
        .map_err(ApiError::DatabaseError)?;

        let modes: Vec<(String, i64)> = sqlx::query_as(
            r#"
            SELECT transport_mode, COUNT(*)
            FROM trips
            WHERE user_id = ?
            GROUP BY transport_mode
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.db)
        .await
        .map_err(ApiError::DatabaseError)?;

        let mut transport_mode_breakdown = HashMap::new();
        for (mode, count) in modes {
            transport_mode_breakdown.insert(mode, count);
        }

        Ok(TripSummary {
            total_trips,
            total_distance,
            average_distance,
            transport_mode_breakdown,
        })
    }

    /// Carbon totals for one user; zero with no trips.
    pub async fn carbon_footprint_summary(
        &self,
        user_id: &str,
    ) -> Result<CarbonFootprintSummary, ApiError> {
        let public_total = sqlx::query_scalar::<_, f64>(
            "SELECT CAST(COALESCE(SUM(carbon_footprint), 0) AS REAL) FROM trips WHERE user_id = ?",
        )
        .bind(user_id)
        .fetch_one(&self.db)
        .await
        .map_err(ApiError::DatabaseError)?;

        let average = sqlx::query_scalar::<_, f64>(
            "SELECT CAST(COALESCE(AVG(carbon_footprint), 0) AS REAL) FROM trips WHERE user_id = ?",
        )
        .bind(user_id)
        .fetch_one(&self.db)
        .await
        .map_err(ApiError::DatabaseError)?;

        let private_total = sqlx::query_scalar::<_, f64>(
            "SELECT CAST(COALESCE(SUM(carbon_footprint_private), 0) AS REAL) FROM trips WHERE user_id = ?",
        )
        .bind(user_id)
        .fetch_one(&self.db)
        .await
        .map_err(ApiError::DatabaseError)?;

        Ok(CarbonFootprintSummary {
            total_carbon_footprint: public_total,
            average_carbon_footprint: average,
            carbon_footprint_public: public_total,
            carbon_footprint_private: private_total,
        })
    }

    /// The user's top 5 end locations by trip count, descending; ties fall
    /// back to database ordering.
    pub async fn frequent_destinations(
        &self,
        user_id: &str,
    ) -> Result<FrequentDestinations, ApiError> {
        let rows: Vec<(String, i64)> = sqlx::query_as(
            r#"
            SELECT l.name, COUNT(t.id) as count
            FROM trips t
            JOIN locations l ON t.end_location_id = l.id
            WHERE t.user_id = ?
            GROUP BY l.id
            ORDER BY count DESC
            LIMIT 5
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.db)
        .await
        .map_err(ApiError::DatabaseError)?;

        let top_destinations = rows
            .into_iter()
            .map(|(name, count)| DestinationCount { name, count })
            .collect();

        Ok(FrequentDestinations { top_destinations })
    }
}
