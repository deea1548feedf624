// POST /api/contact - public contact-form submissions, append-only

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::schema::InsertContact;
use crate::AppState;

pub async fn submit(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let Json(body) = body?;
    let insert = InsertContact::from_json(body)?;
    let contact = state.storage.create_contact(insert);

    tracing::info!(id = contact.id, subject = %contact.subject, "new contact message received");

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "Pesan berhasil dikirim! Kami akan menghubungi Anda segera.",
            "contact": { "id": contact.id }
        })),
    ))
}
