//! Application error type mapping to HTTP status codes and the error body.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use parley_types::error::ChatError;

/// Application-level error that maps to HTTP responses.
#[derive(Debug)]
pub enum AppError {
    /// Chat-related errors from validation or the service.
    Chat(ChatError),
}

impl From<ChatError> for AppError {
    fn from(e: ChatError) -> Self {
        AppError::Chat(e)
    }
}

impl AppError {
    /// Status code and client-facing message for this error.
    ///
    /// Storage failures are reported as a generic `internal error`; the
    /// detail only goes to the log.
    pub fn status_and_message(&self) -> (StatusCode, String) {
        match self {
            AppError::Chat(ChatError::ChatNotFound) => {
                (StatusCode::NOT_FOUND, ChatError::ChatNotFound.to_string())
            }
            AppError::Chat(ChatError::Storage(_)) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "internal error".to_string())
            }
            AppError::Chat(e) => (StatusCode::BAD_REQUEST, e.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let AppError::Chat(ChatError::Storage(e)) = &self {
            tracing::error!(error = %e, "Request failed on storage error");
        }

        let (status, message) = self.status_and_message();
        (status, Json(json!({ "error": message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parley_types::error::RepositoryError;

    #[test]
    fn test_validation_errors_map_to_bad_request() {
        let cases = [
            (ChatError::InvalidBody, "invalid body"),
            (ChatError::InvalidTitleLength, "invalid title length"),
            (ChatError::InvalidTextLength, "invalid text length"),
            (ChatError::InvalidChatId, "invalid chat id"),
        ];

        for (err, expected) in cases {
            let (status, message) = AppError::from(err).status_and_message();
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(message, expected);
        }
    }

    #[test]
    fn test_not_found_maps_to_404() {
        let (status, message) = AppError::from(ChatError::ChatNotFound).status_and_message();
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(message, "chat not found");
    }

    #[test]
    fn test_storage_error_hides_detail() {
        let err = ChatError::Storage(RepositoryError::Query("disk I/O error".to_string()));
        let (status, message) = AppError::from(err).status_and_message();
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(message, "internal error");
    }
}
