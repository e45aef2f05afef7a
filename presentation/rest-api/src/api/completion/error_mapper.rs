use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::completion::errors::CompletionError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for CompletionError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            CompletionError::InvalidPerformanceScore => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "completion.invalid_performance_score",
            ),
            CompletionError::CourseNotFound => (
                StatusCode::NOT_FOUND,
                "NotFound",
                "completion.course_not_found",
            ),
            CompletionError::NotFound => {
                (StatusCode::NOT_FOUND, "NotFound", "completion.not_found")
            }
            CompletionError::Forbidden => {
                (StatusCode::FORBIDDEN, "Forbidden", "completion.forbidden")
            }
            CompletionError::Repository(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "repository.persistence",
            ),
        };

        (
            status,
            Json(ErrorResponse {
                name: name.to_string(),
                message: message.to_string(),
            }),
        )
    }
}
