use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::env;

// Development fallbacks only. Production deployments must supply
// JWT_SECRET and ADMIN_PASSWORD_HASH via the environment.
const DEV_JWT_SECRET: &str = "dev-secret-change-this-in-production";
// bcrypt hash of "password"
const DEV_ADMIN_PASSWORD_HASH: &str =
    "$2a$10$92IXUNpkjO0rOQ5byMi.Ye4oKoEa3Ro9llC/.og/at2.uheWG/igi";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub environment: Environment,
    pub server: ServerConfig,
    pub security: SecurityConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Environment {
    Development,
    Production,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecurityConfig {
    pub jwt_secret: String,
    pub jwt_expiry_hours: i64,
    pub admin_username: String,
    pub admin_password_hash: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let environment = match env::var("APP_ENV").as_deref() {
            Ok("production") | Ok("prod") => Environment::Production,
            _ => Environment::Development,
        };

        // Environment-specific defaults first, then specific env vars win
        match environment {
            Environment::Production => Self::production(),
            Environment::Development => Self::development(),
        }
        .with_env_overrides()
    }

    fn with_env_overrides(mut self) -> Self {
        if let Ok(v) = env::var("PORT") {
            self.server.port = v.parse().unwrap_or(self.server.port);
        }
        if let Ok(v) = env::var("JWT_SECRET") {
            self.security.jwt_secret = v;
        }
        if let Ok(v) = env::var("JWT_EXPIRY_HOURS") {
            self.security.jwt_expiry_hours = v.parse().unwrap_or(self.security.jwt_expiry_hours);
        }
        if let Ok(v) = env::var("ADMIN_USERNAME") {
            self.security.admin_username = v;
        }
        if let Ok(v) = env::var("ADMIN_PASSWORD_HASH") {
            self.security.admin_password_hash = v;
        }
        self
    }

    fn development() -> Self {
        Self {
            environment: Environment::Development,
            server: ServerConfig { port: 5000 },
            security: SecurityConfig {
                jwt_secret: DEV_JWT_SECRET.to_string(),
                jwt_expiry_hours: 24,
                admin_username: "admin".to_string(),
                admin_password_hash: DEV_ADMIN_PASSWORD_HASH.to_string(),
            },
        }
    }

    fn production() -> Self {
        Self {
            environment: Environment::Production,
            server: ServerConfig { port: 5000 },
            security: SecurityConfig {
                // Empty on purpose: production refuses to start without the
                // env overrides, see main.rs
                jwt_secret: String::new(),
                jwt_expiry_hours: 24,
                admin_username: "admin".to_string(),
                admin_password_hash: String::new(),
            },
        }
    }

    /// True when the security settings still carry development fallbacks
    /// (or nothing at all) and must not be served publicly.
    pub fn has_insecure_secrets(&self) -> bool {
        self.security.jwt_secret.is_empty()
            || self.security.jwt_secret == DEV_JWT_SECRET
            || self.security.admin_password_hash.is_empty()
            || self.security.admin_password_hash == DEV_ADMIN_PASSWORD_HASH
    }
}

// Global singleton config - initialized once at startup
pub static CONFIG: Lazy<AppConfig> = Lazy::new(AppConfig::from_env);

// Convenience function for accessing config
pub fn config() -> &'static AppConfig {
    &CONFIG
}
