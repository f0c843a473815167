use serde_json::{json, Value};
use thiserror::Error;

use crate::llm_client::LlmError;

/// Application-level error type.
///
/// The prompt engine itself is total and never produces one of these; they
/// come from job validation, I/O around the entrypoint, and the model call.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// Stable machine-readable code for the error body.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::Llm(_) => "LLM_ERROR",
            AppError::Json(_) => "INVALID_JSON",
            AppError::Io(_) => "IO_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Error body printed by the entrypoint. Internal details go to the log,
    /// not the body.
    pub fn to_body(&self) -> Value {
        let message = match self {
            AppError::Validation(msg) => msg.clone(),
            AppError::Json(e) => format!("Draft job is not valid JSON: {e}"),
            AppError::Llm(e) => {
                tracing::error!("LLM error: {e}");
                "An AI processing error occurred".to_string()
            }
            AppError::Io(e) => {
                tracing::error!("I/O error: {e}");
                "Failed to read the draft job".to_string()
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                "An internal error occurred".to_string()
            }
        };

        json!({
            "error": {
                "code": self.code(),
                "message": message
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_body_keeps_message() {
        let body = AppError::Validation("document_text cannot be empty".to_string()).to_body();
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert_eq!(body["error"]["message"], "document_text cannot be empty");
    }

    #[test]
    fn test_llm_body_hides_details() {
        let err = AppError::from(LlmError::Api {
            status: 401,
            message: "invalid x-api-key".to_string(),
        });
        let body = err.to_body();
        assert_eq!(body["error"]["code"], "LLM_ERROR");
        assert!(!body["error"]["message"]
            .as_str()
            .unwrap()
            .contains("x-api-key"));
    }

    #[test]
    fn test_json_errors_convert() {
        let err: AppError = serde_json::from_str::<Value>("{").unwrap_err().into();
        assert_eq!(err.code(), "INVALID_JSON");
    }
}
