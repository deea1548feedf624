// Admin blog management: POST /api/admin/blog, PUT/DELETE /api/admin/blog/:id

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::schema::{BlogPost, BlogPostPatch, InsertBlogPost};
use crate::AppState;

pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<BlogPost>), ApiError> {
    let Json(body) = body?;
    let insert = InsertBlogPost::from_json(body)?;
    let post = state.storage.create_blog_post(insert)?;
    tracing::info!(id = post.id, slug = %post.slug, "created blog post");
    Ok((StatusCode::CREATED, Json(post)))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<BlogPost>, ApiError> {
    let Json(body) = body?;
    let patch = BlogPostPatch::from_json(body)?;
    let post = state.storage.update_blog_post(id, patch)?;
    tracing::info!(id, "updated blog post");
    Ok(Json(post))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, ApiError> {
    state.storage.delete_blog_post(id)?;
    tracing::info!(id, "deleted blog post");
    Ok(Json(json!({ "message": "Blog post deleted successfully" })))
}
