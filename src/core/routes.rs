// HTTP routes configuration

use crate::core::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Auth endpoints
        .route("/api/auth/register", post(crate::handlers::auth::register_handler))
        .route("/api/auth/login", post(crate::handlers::auth::login_handler))
        .route("/api/auth/logout", post(crate::handlers::auth::logout_handler))
        .route("/api/auth/me", get(crate::handlers::auth::me_handler))

        // Catalog and profile endpoints
        .route("/cards", get(crate::handlers::cards::cards_handler))
        .route("/users/{id}", get(crate::handlers::users::user_handler))

        .route("/health", get(crate::handlers::health::health_handler))

        // 404 fallback for all unmatched routes
        .fallback(crate::handlers::fallback::fallback_handler)

        .with_state(state)
}
