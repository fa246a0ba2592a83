//! Authentication extractors for Axum

use async_trait::async_trait;
use axum::{
    extract::{Extension, FromRequestParts},
    http::{
        header::{AUTHORIZATION, COOKIE},
        request::Parts,
    },
};
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, error, warn};

use super::models::{Claims, User};
use crate::common::helpers::safe_token_log;
use crate::common::{ApiError, AppState};

/// Name of the cookie carrying the session token
pub const SESSION_COOKIE: &str = "session";

/// Authenticated user extractor
///
/// Validates the session token (cookie or bearer header) and loads the user
/// from the database. Rejection is a 403 so the JSON endpoints report
/// unauthenticated callers the way the route contract requires; page
/// handlers take `Option<AuthedUser>` and redirect instead.
#[derive(Debug)]
pub struct AuthedUser {
    pub id: String,
    pub username: String,
    pub email: String,
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthedUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        // Extract the Extension containing the AppState
        let Extension(state_lock): Extension<Arc<RwLock<AppState>>> =
            Extension::from_request_parts(parts, state)
                .await
                .map_err(|_| ApiError::InternalServer("missing app state".to_string()))?;

        let app_state = state_lock.read().await.clone();

        let token = match session_token(parts) {
            Some(t) => t,
            None => {
                debug!("Authentication failed: no session token presented");
                return Err(ApiError::Forbidden("User is not logged in".to_string()));
            }
        };

        // Validate the session token
        let decoded = match decode::<Claims>(
            &token,
            &DecodingKey::from_secret(app_state.session_secret.as_bytes()),
            &Validation::new(Algorithm::HS256),
        ) {
            Ok(d) => d,
            Err(e) => {
                warn!(
                    error = %e,
                    token = %safe_token_log(&token),
                    "Session token validation failed"
                );
                return Err(ApiError::Forbidden("User is not logged in".to_string()));
            }
        };

        let user_id = decoded.claims.sub;

        // Look up user in database
        let user: Option<User> = sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = ?")
            .bind(&user_id)
            .fetch_optional(&app_state.db)
            .await
            .map_err(|e| {
                error!(
                    error = %e,
                    user_id = %user_id,
                    "Database error during user lookup in authentication"
                );
                ApiError::DatabaseError(e)
            })?;

        match user {
            Some(u) => Ok(AuthedUser {
                id: u.id,
                username: u.username,
                email: u.email,
            }),
            None => {
                warn!(user_id = %user_id, "Authentication failed: user not found in database");
                Err(ApiError::Forbidden("User is not logged in".to_string()))
            }
        }
    }
}

/// Pull the session token from the request, preferring the session cookie
/// and falling back to an Authorization header for non-browser clients.
fn session_token(parts: &Parts) -> Option<String> {
    if let Some(cookie_header) = parts.headers.get(COOKIE).and_then(|h| h.to_str().ok()) {
        for pair in cookie_header.split(';') {
            if let Some(value) = pair
                .trim()
                .strip_prefix(SESSION_COOKIE)
                .and_then(|rest| rest.strip_prefix('='))
            {
                if !value.is_empty() {
                    return Some(value.to_string());
                }
            }
        }
    }

    parts
        .headers
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .map(|s| s.strip_prefix("Bearer ").unwrap_or(s).to_string())
}
