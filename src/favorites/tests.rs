//! Tests for favorites module
//!
//! These tests verify bookmark behavior: duplicate suppression, removal
//! reporting, and the joined listing.

#[cfg(test)]
mod tests {
    use super::super::*;
    use crate::auth::handlers::create_user;
    use crate::common::migrations::run_migrations;
    use crate::trips::models::LocationPayload;
    use crate::trips::TripsService;
    use sqlx::SqlitePool;

    async fn setup() -> (SqlitePool, String, String) {
        let pool = SqlitePool::connect(":memory:").await.unwrap();
        run_migrations(&pool).await.unwrap();

        let user_id = create_user(&pool, "greta", "greta@example.com", "hash")
            .await
            .unwrap();

        let location = TripsService::new(pool.clone())
            .find_or_create_location(
                &LocationPayload {
                    name: "Central Station".to_string(),
                    latitude: 59.33,
                    longitude: 18.06,
                },
                "to",
            )
            .await
            .unwrap();

        (pool, user_id, location.id)
    }

    #[tokio::test]
    async fn test_favoriting_twice_keeps_a_single_row() {
        let (pool, user_id, location_id) = setup().await;

        let first = handlers::favorite_location(&pool, &user_id, &location_id)
            .await
            .unwrap();
        assert!(first.favorited);
        assert_eq!(first.message, "Location favorited successfully");

        let second = handlers::favorite_location(&pool, &user_id, &location_id)
            .await
            .unwrap();
        assert!(second.favorited);
        assert_eq!(second.message, "Location already favorited");

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM favorites")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(count, 1);
    }

    #[tokio::test]
    async fn test_favoriting_unknown_location_is_not_found() {
        let (pool, user_id, _) = setup().await;

        let result = handlers::favorite_location(&pool, &user_id, "L_MISSING").await;
        assert!(matches!(result, Err(crate::common::ApiError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_unfavorite_reports_whether_a_row_was_removed() {
        let (pool, user_id, location_id) = setup().await;

        handlers::favorite_location(&pool, &user_id, &location_id)
            .await
            .unwrap();

        let removed = handlers::unfavorite_location(&pool, &user_id, &location_id)
            .await
            .unwrap();
        assert!(!removed.favorited);
        assert_eq!(removed.message, "Location removed from favorites");

        let again = handlers::unfavorite_location(&pool, &user_id, &location_id)
            .await
            .unwrap();
        assert_eq!(again.message, "Location was not favorited");
    }

    #[tokio::test]
    async fn test_list_returns_joined_location_details() {
        let (pool, user_id, location_id) = setup().await;

        handlers::favorite_location(&pool, &user_id, &location_id)
            .await
            .unwrap();

        let favorites = handlers::list_favorites(&pool, &user_id).await.unwrap();
        assert_eq!(favorites.len(), 1);
        assert_eq!(favorites[0].location_id, location_id);
        assert_eq!(favorites[0].name, "Central Station");
        assert_eq!(favorites[0].latitude, 59.33);

        // Another user's list stays empty
        let other_id = create_user(&pool, "hans", "hans@example.com", "hash")
            .await
            .unwrap();
        let other = handlers::list_favorites(&pool, &other_id).await.unwrap();
        assert!(other.is_empty());
    }
}
