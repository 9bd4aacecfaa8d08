use crate::auth::password::{hash_password, verify_password};
use crate::auth::{bearer_token, token};
use crate::core::error::ApiError;
use crate::core::state::AppState;
use crate::models::auth::{AuthResponse, SessionResponse, SuccessResponse};
use crate::models::user::{starter_inventory, PublicUser, Role, User};
use crate::utils::object_id::new_object_id;
use crate::validation::params::{LoginRequest, RegisterRequest};
use axum::{
    extract::rejection::JsonRejection,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;
use tracing::{info, warn};

/// Create an account and start its first session
///
/// POST /api/auth/register
pub async fn register_handler(
    State(state): State<Arc<AppState>>,
    body: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(request) =
        body.map_err(|_| ApiError::BadRequest("Invalid request format".to_string()))?;
    let params = request
        .validate()
        .map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let user = User {
        id: new_object_id(),
        username: params.username,
        email: params.email,
        password_hash: hash_password(&params.password, state.config.auth.bcrypt_cost)?,
        role: Role::User,
        inventory: starter_inventory(),
    };

    let user = state.users.insert_unique(user).map_err(|_| {
        warn!("Registration rejected, user exists");
        ApiError::Conflict("User already exists".to_string())
    })?;

    let session = token::issue(&state.tokens, &user.id, state.config.auth.token_ttl_secs);

    info!(user_id = %user.id, username = %user.username, "User registered");

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            success: true,
            message: "User registered successfully".to_string(),
            token: session.token,
            user: PublicUser::from(&*user),
        }),
    )
        .into_response())
}

/// Authenticate and start a session
///
/// POST /api/auth/login
pub async fn login_handler(
    State(state): State<Arc<AppState>>,
    body: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(request) =
        body.map_err(|_| ApiError::BadRequest("Invalid request format".to_string()))?;
    let params = request
        .validate()
        .map_err(|e| ApiError::BadRequest(e.to_string()))?;

    // Unknown email and wrong password answer identically
    let user = state.users.find_by_email(&params.email).ok_or_else(|| {
        warn!("Login failed, unknown email");
        ApiError::Unauthorized("Invalid email or password".to_string())
    })?;

    if !verify_password(&params.password, &user.password_hash) {
        warn!(user_id = %user.id, "Login failed, wrong password");
        return Err(ApiError::Unauthorized(
            "Invalid email or password".to_string(),
        ));
    }

    let session = token::issue(&state.tokens, &user.id, state.config.auth.token_ttl_secs);

    info!(user_id = %user.id, "User logged in");

    Ok((
        StatusCode::OK,
        Json(AuthResponse {
            success: true,
            message: "Login successful".to_string(),
            token: session.token,
            user: PublicUser::from(&*user),
        }),
    )
        .into_response())
}

/// End a session. Deleting an already-dead token still succeeds.
///
/// POST /api/auth/logout
pub async fn logout_handler(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Response, ApiError> {
    let token = bearer_token(&headers)
        .ok_or_else(|| ApiError::Unauthorized("No token provided".to_string()))?;

    let removed = token::revoke(&state.tokens, token);

    info!(removed, "User logged out");

    Ok((
        StatusCode::OK,
        Json(SuccessResponse::new("Logged out successfully")),
    )
        .into_response())
}

/// Resolve the session's account
///
/// GET /api/auth/me
pub async fn me_handler(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Response, ApiError> {
    let token = bearer_token(&headers)
        .ok_or_else(|| ApiError::Unauthorized("No token provided".to_string()))?;

    let user_id = token::resolve_user_id(&state.tokens, token)
        .ok_or_else(|| ApiError::Unauthorized("Invalid or expired token".to_string()))?;

    let user = state
        .users
        .get(&user_id)
        .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

    Ok((
        StatusCode::OK,
        Json(SessionResponse {
            success: true,
            user: PublicUser::from(&*user),
        }),
    )
        .into_response())
}
