// Admin team-member management under /api/admin/team

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::schema::{InsertTeamMember, TeamMember, TeamMemberPatch};
use crate::AppState;

pub async fn list(State(state): State<AppState>) -> Json<Vec<TeamMember>> {
    Json(state.storage.team_members())
}

pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<TeamMember>), ApiError> {
    let Json(body) = body?;
    let insert = InsertTeamMember::from_json(body)?;
    let member = state.storage.create_team_member(insert);
    tracing::info!(id = member.id, name = %member.name, "created team member");
    Ok((StatusCode::CREATED, Json(member)))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<TeamMember>, ApiError> {
    let Json(body) = body?;
    let patch = TeamMemberPatch::from_json(body)?;
    let member = state.storage.update_team_member(id, patch)?;
    tracing::info!(id, "updated team member");
    Ok(Json(member))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, ApiError> {
    state.storage.delete_team_member(id)?;
    tracing::info!(id, "deleted team member");
    Ok(Json(json!({ "message": "Team member deleted successfully" })))
}
