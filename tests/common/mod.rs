// Not every test binary uses every helper.
#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use weiscandle_api::config::SecurityConfig;
use weiscandle_api::storage::MemStorage;
use weiscandle_api::{app, AppState};

pub const ADMIN_USERNAME: &str = "admin";
pub const ADMIN_PASSWORD: &str = "workshop-secret";
pub const JWT_SECRET: &str = "integration-test-secret";

/// Fresh router over an empty store with known admin credentials. Each test
/// gets its own isolated instance; no state leaks between tests.
pub fn test_app() -> Router {
    let security = SecurityConfig {
        jwt_secret: JWT_SECRET.to_string(),
        jwt_expiry_hours: 24,
        admin_username: ADMIN_USERNAME.to_string(),
        // cost 4 keeps the test suite fast; production uses the default cost
        admin_password_hash: bcrypt::hash(ADMIN_PASSWORD, 4).expect("bcrypt hash"),
    };
    app(AppState::new(MemStorage::new(), security))
}

/// Drive one request through the router and decode the JSON response.
pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {}", token));
    }
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(&json).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, value)
}

/// Log in with the test credentials and return the bearer token.
pub async fn login(app: &Router) -> String {
    let (status, body) = send(
        app,
        "POST",
        "/api/admin/login",
        None,
        Some(json!({ "username": ADMIN_USERNAME, "password": ADMIN_PASSWORD })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "login failed: {}", body);
    body["token"].as_str().expect("token in login response").to_string()
}
