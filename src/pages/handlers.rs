//! Shell page handlers
//!
//! Pages carry no application logic; the dashboard and statistics pages
//! redirect to the login form when no session is present, everything else is
//! public.

use axum::response::{Html, IntoResponse, Redirect, Response};

use crate::auth::AuthedUser;
use crate::common::helpers::html_escape;

/// GET / and /home - Landing page, greets a logged-in user by name
pub async fn index(user: Option<AuthedUser>) -> Html<String> {
    let body = match &user {
        Some(user) => format!(
            r#"<p>Welcome back, {}!</p>
            <p><a href="/dashboard">Go to your dashboard</a> or <a href="/logout">log out</a>.</p>"#,
            html_escape(&user.username)
        ),
        None => r#"<p>Track your trips and see what they cost the planet.</p>
            <p><a href="/login">Log in</a> or <a href="/register">create an account</a>.</p>"#
            .to_string(),
    };

    Html(page_shell("EcoTrip", &body))
}

/// GET /about - Static page
pub async fn about() -> Html<String> {
    Html(page_shell(
        "About EcoTrip",
        r#"<p>EcoTrip is a small personal travel tracker. Log your trips with their
        start and end points, distance and transport mode, and see your carbon
        footprint add up over time.</p>
        <p><a href="/">Back to the home page</a></p>"#,
    ))
}

/// GET /dashboard - User home; redirects to the login form without a session
pub async fn dashboard(user: Option<AuthedUser>) -> Response {
    let user = match user {
        Some(user) => user,
        None => return Redirect::to("/login").into_response(),
    };

    let body = format!(
        r#"<p>Hello, {}.</p>
        <ul>
            <li><a href="/statistics">Your statistics</a></li>
            <li><a href="/logout">Log out</a></li>
        </ul>"#,
        html_escape(&user.username)
    );

    Html(page_shell("Dashboard", &body)).into_response()
}

/// GET /statistics - Stats page shell; the figures load from the JSON API
pub async fn statistics(user: Option<AuthedUser>) -> Response {
    if user.is_none() {
        return Redirect::to("/login").into_response();
    }

    Html(page_shell(
        "Your statistics",
        r#"<ul>
            <li><a href="/api/trip_summary">Trip summary</a></li>
            <li><a href="/api/carbon_footprint">Carbon footprint</a></li>
            <li><a href="/api/frequent_destinations">Frequent destinations</a></li>
        </ul>
        <p><a href="/dashboard">Back to the dashboard</a></p>"#,
    ))
    .into_response()
}

fn page_shell(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <title>{title}</title>
    <style>
        body {{ font-family: Arial, sans-serif; max-width: 600px; margin: 60px auto; padding: 20px; }}
    </style>
</head>
<body>
    <h1>{title}</h1>
    {body}
</body>
</html>
"#
    )
}
