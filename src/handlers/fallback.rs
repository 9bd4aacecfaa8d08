use crate::core::error::ApiError;
use axum::response::{IntoResponse, Response};

/// JSON 404 for any unmatched route
pub async fn fallback_handler() -> Response {
    ApiError::NotFound("Route not found".to_string()).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use http_body_util::BodyExt;

    #[tokio::test]
    async fn test_fallback_is_json_404() {
        let response = fallback_handler().await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "Route not found");
    }
}
