// Admin testimonial management under /api/admin/testimonials

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::schema::{InsertTestimonial, Testimonial, TestimonialPatch};
use crate::AppState;

pub async fn list(State(state): State<AppState>) -> Json<Vec<Testimonial>> {
    Json(state.storage.testimonials())
}

pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<Testimonial>), ApiError> {
    let Json(body) = body?;
    let insert = InsertTestimonial::from_json(body)?;
    let testimonial = state.storage.create_testimonial(insert);
    tracing::info!(id = testimonial.id, "created testimonial");
    Ok((StatusCode::CREATED, Json(testimonial)))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Testimonial>, ApiError> {
    let Json(body) = body?;
    let patch = TestimonialPatch::from_json(body)?;
    let testimonial = state.storage.update_testimonial(id, patch)?;
    tracing::info!(id, "updated testimonial");
    Ok(Json(testimonial))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, ApiError> {
    state.storage.delete_testimonial(id)?;
    tracing::info!(id, "deleted testimonial");
    Ok(Json(json!({ "message": "Testimonial deleted successfully" })))
}
