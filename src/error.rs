use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Unknown zone identifier: {0}")]
    InvalidZone(String),

    #[error("Response encode error: {0}")]
    Encode(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::InvalidZone(_) => (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()),
            ApiError::Encode(_) => (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()),
        };

        let body = Json(json!({
            "status": status.as_u16(),
            "error": message,
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_invalid_zone() {
        let error = ApiError::InvalidZone("Atlantis/Lemuria".to_string());
        assert_eq!(
            error.to_string(),
            "Unknown zone identifier: Atlantis/Lemuria"
        );
    }

    #[test]
    fn test_api_error_encode() {
        let error = ApiError::Encode("key must be a string".to_string());
        assert_eq!(
            error.to_string(),
            "Response encode error: key must be a string"
        );
    }

    #[test]
    fn test_api_error_into_response_status_codes() {
        use axum::response::IntoResponse;

        // InvalidZone -> INTERNAL_SERVER_ERROR
        let response = ApiError::InvalidZone("MET".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        // Encode -> INTERNAL_SERVER_ERROR
        let response = ApiError::Encode("error".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
