use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde_json::json;
use thiserror::Error;

use crate::handlers::photo_handlers::DEFAULT_AVATAR_URL;
use crate::utils::phone::InvalidPhone;

/// One attempt against the lookup webhook failing. Both variants are
/// transient from the proxy's point of view and go through the retry path.
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("request to photo lookup service failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("photo lookup service returned {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    InvalidInput(#[from] InvalidPhone),
    #[error("could not fetch the profile photo: {0}")]
    UpstreamFailure(#[from] UpstreamError),
    #[error("photo lookup service returned a response that was not valid JSON")]
    InvalidUpstreamResponse(#[source] reqwest::Error),
}

impl ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            ApiError::UpstreamFailure(_) => StatusCode::BAD_GATEWAY,
            ApiError::InvalidUpstreamResponse(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Every error body still carries a loadable image URL so the
        // frontend thumbnail never breaks.
        let body = json!({
            "success": false,
            "error": self.to_string(),
            "result": DEFAULT_AVATAR_URL,
            "is_photo_private": true,
        });
        (self.status_code(), Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_taxonomy_to_status_codes() {
        assert_eq!(
            ApiError::InvalidInput(InvalidPhone::TooShort).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::UpstreamFailure(UpstreamError::Status {
                status: reqwest::StatusCode::INTERNAL_SERVER_ERROR,
                body: String::new(),
            })
            .status_code(),
            StatusCode::BAD_GATEWAY
        );
    }
}
