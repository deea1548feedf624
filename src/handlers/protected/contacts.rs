// GET /api/admin/contacts - inbox view, newest first

use axum::extract::State;
use axum::Json;

use crate::schema::Contact;
use crate::AppState;

pub async fn list(State(state): State<AppState>) -> Json<Vec<Contact>> {
    Json(state.storage.contacts())
}
