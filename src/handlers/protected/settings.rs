// Site settings under /api/admin/settings: list plus upsert-by-key. There is
// no delete; a setting is replaced by writing its key again.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde_json::Value;

use crate::error::ApiError;
use crate::schema::{InsertSiteSetting, SiteSetting};
use crate::AppState;

pub async fn list(State(state): State<AppState>) -> Json<Vec<SiteSetting>> {
    Json(state.storage.site_settings())
}

pub async fn upsert(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<SiteSetting>, ApiError> {
    let Json(body) = body?;
    let insert = InsertSiteSetting::from_json(body)?;
    let setting = state.storage.upsert_site_setting(insert);
    tracing::info!(key = %setting.key, "upserted site setting");
    Ok(Json(setting))
}
