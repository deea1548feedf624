use weiscandle_api::storage::MemStorage;
use weiscandle_api::{app, config, AppState};

#[tokio::main]
async fn main() {
    // Load .env if present so cargo run picks up JWT_SECRET, PORT, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    let config = config::config();
    tracing::info!("Starting WeisCandle API in {:?} mode", config.environment);

    if config.has_insecure_secrets() {
        if config.environment == config::Environment::Production {
            panic!("JWT_SECRET and ADMIN_PASSWORD_HASH must be set in production");
        }
        tracing::warn!(
            "running with development credentials; set JWT_SECRET, ADMIN_USERNAME and ADMIN_PASSWORD_HASH before deploying"
        );
    }

    let state = AppState::new(MemStorage::with_sample_posts(), config.security.clone());
    let app = app(state);

    let bind_addr = format!("0.0.0.0:{}", config.server.port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {}: {}", bind_addr, e));

    println!("🕯️  WeisCandle API listening on http://{}", bind_addr);

    axum::serve(listener, app).await.expect("server");
}
