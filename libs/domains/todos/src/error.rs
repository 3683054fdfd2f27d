use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TodoError {
    #[error("TodoTask with ID {0} not found.")]
    TaskNotFound(i32),

    #[error("TodoSubtask with ID {0} not found.")]
    SubtaskNotFound(i32),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type TodoResult<T> = Result<T, TodoError>;

/// Convert TodoError to AppError for standardized error responses
impl From<TodoError> for AppError {
    fn from(err: TodoError) -> Self {
        match err {
            TodoError::TaskNotFound(_) | TodoError::SubtaskNotFound(_) => {
                AppError::NotFound(err.to_string())
            }
            TodoError::Validation(msg) => AppError::BadRequest(msg),
            TodoError::Internal(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for TodoError {
    fn into_response(self) -> Response {
        // Convert to AppError for standardized error response format
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message_format() {
        assert_eq!(
            TodoError::TaskNotFound(42).to_string(),
            "TodoTask with ID 42 not found."
        );
        assert_eq!(
            TodoError::SubtaskNotFound(7).to_string(),
            "TodoSubtask with ID 7 not found."
        );
    }
}
