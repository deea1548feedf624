// Public blog reads: GET /api/blog and GET /api/blog/:slug

use axum::extract::{Path, State};
use axum::Json;

use crate::error::ApiError;
use crate::schema::BlogPost;
use crate::AppState;

/// All posts, most recent first.
pub async fn list(State(state): State<AppState>) -> Json<Vec<BlogPost>> {
    Json(state.storage.blog_posts())
}

pub async fn get_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<BlogPost>, ApiError> {
    state
        .storage
        .blog_post_by_slug(&slug)
        .map(Json)
        .ok_or_else(|| ApiError::not_found("Blog post not found"))
}
