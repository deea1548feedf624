// POST /api/admin/login - the only route that issues bearer credentials

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::auth::{self, Claims};
use crate::error::ApiError;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Authenticate the administrator and issue a signed, time-limited token.
///
/// A wrong username and a wrong password both produce the same
/// `401 { "message": "Invalid credentials" }` so the endpoint cannot be used
/// to probe for valid usernames. The hash comparison runs in either case.
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let Json(payload) = payload?;
    let security = state.auth.clone();

    let username_ok = payload.username == security.admin_username;

    // bcrypt is CPU-bound; keep it off the async executor
    let password = payload.password;
    let hash = security.admin_password_hash.clone();
    let password_ok = tokio::task::spawn_blocking(move || auth::verify_password(&password, &hash))
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "password verification task failed");
            ApiError::internal_server_error("Login failed")
        })?;

    if !username_ok || !password_ok {
        tracing::warn!("failed admin login attempt");
        return Err(ApiError::unauthorized("Invalid credentials"));
    }

    let claims = Claims::new(security.admin_username.clone(), security.jwt_expiry_hours);
    let token = auth::generate_token(&claims, &security.jwt_secret).map_err(|e| {
        tracing::error!(error = %e, "failed to issue admin token");
        ApiError::internal_server_error("Login failed")
    })?;

    tracing::info!(username = %claims.username, "admin login");
    Ok(Json(json!({ "token": token, "message": "Login successful" })))
}
