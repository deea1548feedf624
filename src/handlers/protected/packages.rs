// Admin workshop-package management under /api/admin/workshop-packages

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::schema::{InsertWorkshopPackage, WorkshopPackage, WorkshopPackagePatch};
use crate::AppState;

pub async fn list(State(state): State<AppState>) -> Json<Vec<WorkshopPackage>> {
    Json(state.storage.workshop_packages())
}

pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<WorkshopPackage>), ApiError> {
    let Json(body) = body?;
    let insert = InsertWorkshopPackage::from_json(body)?;
    let package = state.storage.create_workshop_package(insert);
    tracing::info!(id = package.id, name = %package.name, "created workshop package");
    Ok((StatusCode::CREATED, Json(package)))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<WorkshopPackage>, ApiError> {
    let Json(body) = body?;
    let patch = WorkshopPackagePatch::from_json(body)?;
    let package = state.storage.update_workshop_package(id, patch)?;
    tracing::info!(id, "updated workshop package");
    Ok(Json(package))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, ApiError> {
    state.storage.delete_workshop_package(id)?;
    tracing::info!(id, "deleted workshop package");
    Ok(Json(json!({ "message": "Workshop package deleted successfully" })))
}
