use std::sync::Arc;

use axum::{routing::get, Router};
use serde_json::{json, Value};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod schema;
pub mod storage;

use config::SecurityConfig;
use storage::MemStorage;

/// Shared per-process state: the record store plus the credentials/secret
/// used by the auth gate. Constructed once in `main`, or per test case for
/// isolated instances.
#[derive(Clone)]
pub struct AppState {
    pub storage: Arc<MemStorage>,
    pub auth: Arc<SecurityConfig>,
}

impl AppState {
    pub fn new(storage: MemStorage, security: SecurityConfig) -> Self {
        Self { storage: Arc::new(storage), auth: Arc::new(security) }
    }
}

pub fn app(state: AppState) -> Router {
    Router::new()
        // Service info
        .route("/", get(root))
        .route("/health", get(health))
        // Public site + token acquisition
        .merge(public_routes())
        // Admin surface, bearer-gated
        .merge(admin_routes(state.clone()))
        // Global middleware
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn public_routes() -> Router<AppState> {
    use axum::routing::post;
    use handlers::public::{auth, blog, contact, site};

    Router::new()
        .route("/api/blog", get(blog::list))
        .route("/api/blog/:slug", get(blog::get_by_slug))
        .route("/api/contact", post(contact::submit))
        .route("/api/admin/login", post(auth::login))
        // Public-facing content subsets for the marketing pages
        .route("/api/promos/active", get(site::active_promos))
        .route("/api/testimonials", get(site::testimonials))
        .route("/api/workshop-packages", get(site::workshop_packages))
        .route("/api/team", get(site::team))
        .route("/api/export-categories", get(site::export_categories))
        .route("/api/settings", get(site::settings))
}

fn admin_routes(state: AppState) -> Router<AppState> {
    use axum::routing::{post, put};
    use handlers::protected::{
        blog, contacts, export, packages, promos, settings, team, testimonials,
    };

    Router::new()
        .route("/api/admin/contacts", get(contacts::list))
        // Blog management
        .route("/api/admin/blog", post(blog::create))
        .route("/api/admin/blog/:id", put(blog::update).delete(blog::delete))
        // Testimonials
        .route(
            "/api/admin/testimonials",
            get(testimonials::list).post(testimonials::create),
        )
        .route(
            "/api/admin/testimonials/:id",
            put(testimonials::update).delete(testimonials::delete),
        )
        // Workshop packages
        .route(
            "/api/admin/workshop-packages",
            get(packages::list).post(packages::create),
        )
        .route(
            "/api/admin/workshop-packages/:id",
            put(packages::update).delete(packages::delete),
        )
        // Team members
        .route("/api/admin/team", get(team::list).post(team::create))
        .route("/api/admin/team/:id", put(team::update).delete(team::delete))
        // Promo popups
        .route("/api/admin/promos", get(promos::list).post(promos::create))
        .route("/api/admin/promos/:id", put(promos::update).delete(promos::delete))
        // Export categories
        .route(
            "/api/admin/export-categories",
            get(export::list).post(export::create),
        )
        .route(
            "/api/admin/export-categories/:id",
            put(export::update).delete(export::delete),
        )
        // Site settings (upsert-by-key, no delete)
        .route("/api/admin/settings", get(settings::list).post(settings::upsert))
        .route_layer(axum::middleware::from_fn_with_state(state, middleware::require_admin))
}

async fn root() -> axum::response::Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    axum::response::Json(json!({
        "name": "WeisCandle API",
        "version": version,
        "description": "Content and contact API for the WeisCandle workshop site",
        "endpoints": {
            "home": "/ (public)",
            "blog": "/api/blog[/:slug] (public)",
            "contact": "/api/contact (public)",
            "site": "/api/testimonials, /api/workshop-packages, /api/team, /api/export-categories, /api/settings, /api/promos/active (public)",
            "login": "/api/admin/login (public - token acquisition)",
            "admin": "/api/admin/* (protected - content management)",
        }
    }))
}

async fn health() -> axum::response::Json<Value> {
    axum::response::Json(json!({
        "status": "ok",
        "timestamp": chrono::Utc::now(),
    }))
}
