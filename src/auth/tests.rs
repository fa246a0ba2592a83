//! Tests for auth module
//!
//! These tests verify core authentication functionality including:
//! - Session token generation and validation
//! - Password hashing and verification
//! - Registration validation and duplicate-email handling
//! - Credential checks on login

#[cfg(test)]
mod tests {
    use super::super::*;
    use crate::common::migrations::run_migrations;
    use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
    use sqlx::SqlitePool;

    async fn setup_pool() -> SqlitePool {
        let pool = SqlitePool::connect(":memory:").await.unwrap();
        run_migrations(&pool).await.unwrap();
        pool
    }

    #[test]
    fn test_claims_structure() {
        let claims = models::Claims {
            sub: "U_TEST01".to_string(),
            exp: 1234567890,
        };

        assert_eq!(claims.sub, "U_TEST01");
        assert_eq!(claims.exp, 1234567890);
    }

    #[test]
    fn test_session_token_round_trip() {
        let secret = "test_secret_key";
        let token = handlers::issue_session_token("U_ABC123", secret).expect("token issued");

        let decoded = decode::<models::Claims>(
            &token,
            &DecodingKey::from_secret(secret.as_bytes()),
            &Validation::new(Algorithm::HS256),
        )
        .expect("token decodes");

        assert_eq!(decoded.claims.sub, "U_ABC123");
    }

    #[test]
    fn test_session_token_fails_with_wrong_secret() {
        let token = handlers::issue_session_token("U_ABC123", "right_secret").expect("token issued");

        let result = decode::<models::Claims>(
            &token,
            &DecodingKey::from_secret("wrong_secret".as_bytes()),
            &Validation::new(Algorithm::HS256),
        );

        assert!(
            result.is_err(),
            "Token validation should fail with wrong secret"
        );
    }

    #[tokio::test]
    async fn test_password_hash_and_verify() {
        let hash = password::hash_password("hunter2").await.unwrap();

        assert_ne!(hash, "hunter2", "Hash must not be the plain password");
        assert!(password::verify_password("hunter2", &hash).await.unwrap());
        assert!(!password::verify_password("wrong", &hash).await.unwrap());
    }

    #[test]
    fn test_registration_validation() {
        let valid = models::RegisterForm {
            username: "frieda".to_string(),
            email: "frieda@example.com".to_string(),
            password: "secret".to_string(),
        };
        assert!(validators::validate_registration(&valid).is_ok());

        let missing_username = models::RegisterForm {
            username: "  ".to_string(),
            email: "frieda@example.com".to_string(),
            password: "secret".to_string(),
        };
        assert!(validators::validate_registration(&missing_username).is_err());

        let bad_email = models::RegisterForm {
            username: "frieda".to_string(),
            email: "not-an-email".to_string(),
            password: "secret".to_string(),
        };
        assert!(validators::validate_registration(&bad_email).is_err());

        let empty_password = models::RegisterForm {
            username: "frieda".to_string(),
            email: "frieda@example.com".to_string(),
            password: String::new(),
        };
        assert!(validators::validate_registration(&empty_password).is_err());
    }

    #[tokio::test]
    async fn test_duplicate_email_is_detected_and_rejected() {
        let pool = setup_pool().await;

        handlers::create_user(&pool, "ana", "ana@example.com", "hash-a")
            .await
            .unwrap();

        // The pre-insert check sees the existing address
        assert!(handlers::email_exists(&pool, "ana@example.com")
            .await
            .unwrap());

        // A racing insert that skips the check hits the unique constraint
        let result = handlers::create_user(&pool, "ana2", "ana@example.com", "hash-b").await;
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("UNIQUE constraint failed"));

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE email = ?")
            .bind("ana@example.com")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(count, 1, "No second row may be created");
    }

    #[tokio::test]
    async fn test_duplicate_username_hits_unique_constraint() {
        let pool = setup_pool().await;

        handlers::create_user(&pool, "ben", "ben@example.com", "hash-a")
            .await
            .unwrap();

        let result = handlers::create_user(&pool, "ben", "other@example.com", "hash-b").await;
        assert!(result.is_err());
    }

    async fn test_state(pool: SqlitePool) -> std::sync::Arc<tokio::sync::RwLock<crate::common::AppState>> {
        std::sync::Arc::new(tokio::sync::RwLock::new(crate::common::AppState {
            db: pool,
            session_secret: "test_secret".to_string(),
            chatbot: std::sync::Arc::new(crate::chatbot::ChatbotResponder::with_defaults()),
        }))
    }

    #[tokio::test]
    async fn test_extractor_rejects_missing_session_as_forbidden() {
        use axum::extract::FromRequestParts;

        let pool = setup_pool().await;
        let shared = test_state(pool).await;

        let request = axum::http::Request::builder()
            .uri("/save_trip")
            .extension(shared)
            .body(())
            .unwrap();
        let (mut parts, _) = request.into_parts();

        match AuthedUser::from_request_parts(&mut parts, &()).await {
            Err(crate::common::ApiError::Forbidden(_)) => {}
            Err(e) => panic!("expected Forbidden rejection, got {:?}", e),
            Ok(_) => panic!("must not authenticate without a session"),
        }
    }

    #[tokio::test]
    async fn test_extractor_accepts_session_cookie() {
        use axum::extract::FromRequestParts;

        let pool = setup_pool().await;
        let user_id = handlers::create_user(&pool, "ida", "ida@example.com", "hash")
            .await
            .unwrap();
        let shared = test_state(pool).await;

        let token = handlers::issue_session_token(&user_id, "test_secret").unwrap();
        let request = axum::http::Request::builder()
            .uri("/api/trip_summary")
            .header("cookie", format!("session={}", token))
            .extension(shared)
            .body(())
            .unwrap();
        let (mut parts, _) = request.into_parts();

        let authed = AuthedUser::from_request_parts(&mut parts, &())
            .await
            .expect("valid session authenticates");
        assert_eq!(authed.id, user_id);
        assert_eq!(authed.username, "ida");
    }

    #[tokio::test]
    async fn test_authenticate_accepts_correct_password_only() {
        let pool = setup_pool().await;

        let hash = password::hash_password("correct horse").await.unwrap();
        handlers::create_user(&pool, "carol", "carol@example.com", &hash)
            .await
            .unwrap();

        let user = handlers::authenticate(&pool, "carol", "correct horse")
            .await
            .unwrap();
        assert!(user.is_some());
        assert_eq!(user.unwrap().username, "carol");

        // Wrong password and unknown user fail identically
        assert!(handlers::authenticate(&pool, "carol", "battery staple")
            .await
            .unwrap()
            .is_none());
        assert!(handlers::authenticate(&pool, "nobody", "correct horse")
            .await
            .unwrap()
            .is_none());
    }
}
