use crate::core::error::ApiError;
use crate::core::state::AppState;
use crate::models::user::PublicUser;
use crate::utils::object_id::is_valid_object_id;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;

/// Public profile lookup by id
///
/// GET /users/{id}
pub async fn user_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    if !is_valid_object_id(&id) {
        return Err(ApiError::BadRequest("Invalid user ID format".to_string()));
    }

    let user = state
        .users
        .get(&id)
        .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

    Ok((StatusCode::OK, Json(PublicUser::from(&*user))).into_response())
}
