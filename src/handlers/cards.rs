use crate::core::state::AppState;
use axum::{extract::State, response::IntoResponse, Json};
use std::sync::Arc;

/// Full card catalog, as a bare JSON array
///
/// GET /cards
pub async fn cards_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(state.cards.all())
}
