use axum::{
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};

use crate::auth;
use crate::error::ApiError;
use crate::AppState;

/// Authenticated administrator context extracted from the bearer token
#[derive(Clone, Debug)]
pub struct AdminUser {
    pub username: String,
}

/// Gate for every admin-prefixed route. Fails closed before any handler or
/// storage code runs: no header means "Access token required", a bad or
/// expired token means "Invalid or expired token" - both 401.
pub async fn require_admin(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = extract_bearer_token(request.headers())
        .ok_or_else(|| ApiError::unauthorized("Access token required"))?;

    let claims = auth::validate_token(&token, &state.auth.jwt_secret).map_err(|err| {
        tracing::debug!(path = %request.uri().path(), error = %err, "rejected admin request");
        ApiError::unauthorized("Invalid or expired token")
    })?;

    request.extensions_mut().insert(AdminUser { username: claims.username });
    Ok(next.run(request).await)
}

fn extract_bearer_token(headers: &HeaderMap) -> Option<String> {
    headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(|t| t.trim())
        .filter(|t| !t.is_empty())
        .map(|t| t.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers_with(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert("authorization", HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn extracts_bearer_token() {
        let headers = headers_with("Bearer abc.def.ghi");
        assert_eq!(extract_bearer_token(&headers).as_deref(), Some("abc.def.ghi"));
    }

    #[test]
    fn rejects_missing_or_malformed_header() {
        assert_eq!(extract_bearer_token(&HeaderMap::new()), None);
        assert_eq!(extract_bearer_token(&headers_with("Basic dXNlcg==")), None);
        assert_eq!(extract_bearer_token(&headers_with("Bearer ")), None);
    }
}
