// Admin export-category management under /api/admin/export-categories

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::schema::{ExportCategory, ExportCategoryPatch, InsertExportCategory};
use crate::AppState;

pub async fn list(State(state): State<AppState>) -> Json<Vec<ExportCategory>> {
    Json(state.storage.export_categories())
}

pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<ExportCategory>), ApiError> {
    let Json(body) = body?;
    let insert = InsertExportCategory::from_json(body)?;
    let category = state.storage.create_export_category(insert);
    tracing::info!(id = category.id, name = %category.name, "created export category");
    Ok((StatusCode::CREATED, Json(category)))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<ExportCategory>, ApiError> {
    let Json(body) = body?;
    let patch = ExportCategoryPatch::from_json(body)?;
    let category = state.storage.update_export_category(id, patch)?;
    tracing::info!(id, "updated export category");
    Ok(Json(category))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, ApiError> {
    state.storage.delete_export_category(id)?;
    tracing::info!(id, "deleted export category");
    Ok(Json(json!({ "message": "Export category deleted successfully" })))
}
