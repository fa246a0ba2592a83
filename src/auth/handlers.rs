//! Authentication handlers

use axum::{
    extract::{Extension, Form, Query},
    http::header::SET_COOKIE,
    response::{AppendHeaders, Html, IntoResponse, Redirect, Response},
    Json,
};
use chrono::{Duration, Utc};
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use sqlx::SqlitePool;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{error, info, warn};

use super::extractors::{AuthedUser, SESSION_COOKIE};
use super::models::{Claims, LoginForm, RegisterForm, User};
use super::password;
use super::validators::validate_registration;
use crate::common::helpers::html_escape;
use crate::common::{generate_user_id, safe_email_log, ApiError, AppState};

/// GET /register
/// Renders the registration form; a `flash` query parameter carries the
/// message from a previous failed attempt.
pub async fn register_page(Query(params): Query<HashMap<String, String>>) -> Html<String> {
    Html(form_page(
        "Create an account",
        &flash_block(&params),
        r#"<form method="post" action="/register">
                <input type="text" name="username" placeholder="Username" required>
                <input type="text" name="email" placeholder="Email" required>
                <input type="password" name="password" placeholder="Password" required>
                <button type="submit">Register</button>
            </form>
            <p><a href="/login">Already have an account? Log in</a></p>"#,
    ))
}

/// POST /register
/// Creates an account: validates the form, flags an already-registered
/// email, hashes the password and inserts the user. A uniqueness violation
/// at commit time (two registrations racing) is rolled back by the driver
/// and surfaced as a retryable message.
pub async fn register(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    Form(form): Form<RegisterForm>,
) -> Result<Redirect, ApiError> {
    let state = state_lock.read().await.clone();

    if let Err(message) = validate_registration(&form) {
        return Ok(flash_redirect("/register", &message));
    }

    let username = form.username.trim();
    let email = form.email.trim();

    if email_exists(&state.db, email).await? {
        info!(
            email = %safe_email_log(email),
            "Registration rejected: email already registered"
        );
        return Ok(flash_redirect(
            "/register",
            "That email is already registered. Please log in instead.",
        ));
    }

    let password_hash = password::hash_password(&form.password).await.map_err(|e| {
        error!(error = %e, "Password hashing failed during registration");
        ApiError::InternalServer("registration failed".to_string())
    })?;

    match create_user(&state.db, username, email, &password_hash).await {
        Ok(user_id) => {
            info!(
                user_id = %user_id,
                email = %safe_email_log(email),
                "New user account created"
            );
            Ok(Redirect::to("/login"))
        }
        Err(e) if e.to_string().contains("UNIQUE constraint failed") => {
            warn!(
                email = %safe_email_log(email),
                "Registration hit a uniqueness conflict at commit"
            );
            Ok(flash_redirect(
                "/register",
                "That username or email was just taken. Please try again.",
            ))
        }
        Err(e) => {
            error!(error = %e, "Database error inserting new user");
            Err(ApiError::DatabaseError(e))
        }
    }
}

/// GET /login
pub async fn login_page(Query(params): Query<HashMap<String, String>>) -> Html<String> {
    Html(form_page(
        "Log in",
        &flash_block(&params),
        r#"<form method="post" action="/login">
                <input type="text" name="username" placeholder="Username" required>
                <input type="password" name="password" placeholder="Password" required>
                <button type="submit">Log in</button>
            </form>
            <p><a href="/register">Need an account? Register</a></p>"#,
    ))
}

/// POST /login
/// Verifies the credentials and establishes a session. Unknown usernames
/// and wrong passwords fail identically.
pub async fn login(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    Form(form): Form<LoginForm>,
) -> Result<Response, ApiError> {
    let state = state_lock.read().await.clone();

    match authenticate(&state.db, form.username.trim(), &form.password).await? {
        Some(user) => {
            let token = issue_session_token(&user.id, &state.session_secret)?;

            info!(
                user_id = %user.id,
                email = %safe_email_log(&user.email),
                "User login successful"
            );

            let cookie = format!(
                "{}={}; Path=/; HttpOnly; SameSite=Lax",
                SESSION_COOKIE, token
            );
            Ok((
                AppendHeaders([(SET_COOKIE, cookie)]),
                Redirect::to("/dashboard"),
            )
                .into_response())
        }
        None => {
            info!(username = %form.username.trim(), "Login attempt failed");
            Ok(
                flash_redirect("/login", "Login Failed! Please check Username and Password")
                    .into_response(),
            )
        }
    }
}

/// GET /logout
/// Clears the session cookie unconditionally.
pub async fn logout() -> impl IntoResponse {
    info!("User logged out");
    let cookie = format!("{}=; Path=/; HttpOnly; Max-Age=0", SESSION_COOKIE);
    (
        AppendHeaders([(SET_COOKIE, cookie)]),
        flash_redirect("/login", "You have been logged out."),
    )
}

/// GET /api/me
/// Returns the current authenticated user's information
pub async fn me_handler(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    authed: AuthedUser,
) -> Result<Json<serde_json::Value>, ApiError> {
    let state = state_lock.read().await.clone();

    let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = ?")
        .bind(&authed.id)
        .fetch_one(&state.db)
        .await
        .map_err(ApiError::DatabaseError)?;

    info!(
        user_id = %authed.id,
        email = %safe_email_log(&authed.email),
        "Current user fetched"
    );

    Ok(Json(serde_json::json!({ "user": user })))
}

// ---- Helper Functions ----

/// Create a session token for the given user id, valid for 24 hours
pub fn issue_session_token(user_id: &str, secret: &str) -> Result<String, ApiError> {
    let exp = (Utc::now() + Duration::hours(24)).timestamp() as usize;
    let claims = Claims {
        sub: user_id.to_string(),
        exp,
    };

    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| {
        error!(error = %e, user_id = %user_id, "Session token encoding failed");
        ApiError::InternalServer("session token error".to_string())
    })
}

/// Insert a new user row and return its id
pub async fn create_user(
    pool: &SqlitePool,
    username: &str,
    email: &str,
    password_hash: &str,
) -> Result<String, sqlx::Error> {
    let id = generate_user_id();

    sqlx::query("INSERT INTO users (id, username, email, password_hash) VALUES (?, ?, ?, ?)")
        .bind(&id)
        .bind(username)
        .bind(email)
        .bind(password_hash)
        .execute(pool)
        .await?;

    Ok(id)
}

/// Check whether an email address is already registered
pub async fn email_exists(pool: &SqlitePool, email: &str) -> Result<bool, ApiError> {
    let existing: Option<(String,)> = sqlx::query_as("SELECT id FROM users WHERE email = ?")
        .bind(email)
        .fetch_optional(pool)
        .await
        .map_err(ApiError::DatabaseError)?;

    Ok(existing.is_some())
}

/// Look up a user by username and verify the password against the stored
/// hash. Returns `None` for unknown usernames and bad passwords alike.
pub async fn authenticate(
    pool: &SqlitePool,
    username: &str,
    password: &str,
) -> Result<Option<User>, ApiError> {
    let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE username = ?")
        .bind(username)
        .fetch_optional(pool)
        .await
        .map_err(ApiError::DatabaseError)?;

    let user = match user {
        Some(u) => u,
        None => return Ok(None),
    };

    let valid = password::verify_password(password, &user.password_hash)
        .await
        .map_err(|e| {
            error!(error = %e, user_id = %user.id, "Password verification failed");
            ApiError::InternalServer("login failed".to_string())
        })?;

    Ok(if valid { Some(user) } else { None })
}

fn flash_redirect(path: &str, message: &str) -> Redirect {
    Redirect::to(&format!("{}?flash={}", path, message.replace(' ', "+")))
}

fn flash_block(params: &HashMap<String, String>) -> String {
    match params.get("flash") {
        Some(message) if !message.is_empty() => {
            format!(r#"<p class="flash">{}</p>"#, html_escape(message))
        }
        _ => String::new(),
    }
}

fn form_page(title: &str, flash: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <title>{title} - EcoTrip</title>
    <style>
        body {{ font-family: Arial, sans-serif; max-width: 400px; margin: 60px auto; padding: 20px; }}
        input {{ display: block; width: 100%; margin: 8px 0; padding: 8px; box-sizing: border-box; }}
        button {{ padding: 8px 16px; }}
        .flash {{ background: #fff3cd; border: 1px solid #ffeeba; padding: 10px; border-radius: 4px; }}
    </style>
</head>
<body>
    <h1>{title}</h1>
    {flash}
    {body}
</body>
</html>
"#
    )
}
