//! Bearer-credential issuing and checking for the single administrator
//! identity. Tokens are self-contained signed JWTs; the server keeps no
//! session table, so early revocation is not supported.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub username: String,
    pub exp: i64,
    pub iat: i64,
}

impl Claims {
    pub fn new(username: impl Into<String>, expiry_hours: i64) -> Self {
        let now = Utc::now();
        Self {
            username: username.into(),
            exp: (now + Duration::hours(expiry_hours)).timestamp(),
            iat: now.timestamp(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("JWT generation error: {0}")]
    TokenGeneration(String),
    #[error("invalid or expired token")]
    InvalidToken,
    #[error("JWT secret not configured")]
    MissingSecret,
}

pub fn generate_token(claims: &Claims, secret: &str) -> Result<String, AuthError> {
    if secret.is_empty() {
        return Err(AuthError::MissingSecret);
    }
    let encoding_key = EncodingKey::from_secret(secret.as_bytes());
    encode(&Header::default(), claims, &encoding_key)
        .map_err(|e| AuthError::TokenGeneration(e.to_string()))
}

pub fn validate_token(token: &str, secret: &str) -> Result<Claims, AuthError> {
    if secret.is_empty() {
        return Err(AuthError::MissingSecret);
    }
    let decoding_key = DecodingKey::from_secret(secret.as_bytes());
    let token_data = decode::<Claims>(token, &decoding_key, &Validation::default())
        .map_err(|_| AuthError::InvalidToken)?;
    Ok(token_data.claims)
}

/// bcrypt comparison against the stored hash. Any verification failure is
/// treated as a mismatch so the caller sees one generic outcome.
pub fn verify_password(password: &str, hash: &str) -> bool {
    bcrypt::verify(password, hash).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "test-secret";

    #[test]
    fn round_trips_claims_through_a_signed_token() {
        let claims = Claims::new("admin", 24);
        let token = generate_token(&claims, SECRET).unwrap();
        let decoded = validate_token(&token, SECRET).unwrap();
        assert_eq!(decoded.username, "admin");
        assert_eq!(decoded.exp, claims.exp);
    }

    #[test]
    fn rejects_token_signed_with_a_different_secret() {
        let token = generate_token(&Claims::new("admin", 24), SECRET).unwrap();
        assert!(matches!(validate_token(&token, "other-secret"), Err(AuthError::InvalidToken)));
    }

    #[test]
    fn rejects_expired_token() {
        let token = generate_token(&Claims::new("admin", -1), SECRET).unwrap();
        assert!(matches!(validate_token(&token, SECRET), Err(AuthError::InvalidToken)));
    }

    #[test]
    fn empty_secret_is_refused_outright() {
        assert!(matches!(
            generate_token(&Claims::new("admin", 24), ""),
            Err(AuthError::MissingSecret)
        ));
    }

    #[test]
    fn verify_password_matches_known_bcrypt_hash() {
        let hash = bcrypt::hash("password", 4).unwrap();
        assert!(verify_password("password", &hash));
        assert!(!verify_password("wrong", &hash));
        assert!(!verify_password("password", "not-a-hash"));
    }
}
