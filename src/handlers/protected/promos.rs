// Admin promo-popup management under /api/admin/promos

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::schema::{InsertPromoPopup, PromoPopup, PromoPopupPatch};
use crate::AppState;

/// Every promo regardless of flag or window; the public display query lives
/// at GET /api/promos/active.
pub async fn list(State(state): State<AppState>) -> Json<Vec<PromoPopup>> {
    Json(state.storage.promos())
}

pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<PromoPopup>), ApiError> {
    let Json(body) = body?;
    let insert = InsertPromoPopup::from_json(body)?;
    let promo = state.storage.create_promo(insert);
    tracing::info!(id = promo.id, "created promo");
    Ok((StatusCode::CREATED, Json(promo)))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<PromoPopup>, ApiError> {
    let Json(body) = body?;
    let patch = PromoPopupPatch::from_json(body)?;
    let promo = state.storage.update_promo(id, patch)?;
    tracing::info!(id, "updated promo");
    Ok(Json(promo))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, ApiError> {
    state.storage.delete_promo(id)?;
    tracing::info!(id, "deleted promo");
    Ok(Json(json!({ "message": "Promo deleted successfully" })))
}
