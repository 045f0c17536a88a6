use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

pub type Result<T> = std::result::Result<T, GateError>;

#[derive(Debug, Error)]
pub enum GateError {
    #[error("validation failed: {0}")]
    Validation(String),

    #[error("invalid gate policy: {0}")]
    InvalidPolicy(String),

    #[error("invalid build selection: {0}")]
    InvalidBuildSelection(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Toml(#[from] toml::de::Error),

    #[error("internal error: {0}")]
    Internal(String),
}

#[derive(Debug, Clone, Serialize)]
pub struct ErrorPayload {
    pub code: String,
    pub message: String,
    pub operation: String,
    pub trace_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl GateError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION_FAILED",
            Self::InvalidPolicy(_) => "INVALID_POLICY",
            Self::InvalidBuildSelection(_) => "INVALID_BUILD_SELECTION",
            Self::Io(_) => "IO_ERROR",
            Self::Json(_) => "JSON_ERROR",
            Self::Toml(_) => "TOML_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    pub fn to_payload(&self, operation: impl Into<String>) -> ErrorPayload {
        ErrorPayload {
            code: self.code().to_string(),
            message: self.to_string(),
            operation: operation.into(),
            trace_id: Uuid::new_v4().to_string(),
            details: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_carries_stable_code_and_message() {
        let err = GateError::validation("subtasks.accepted (3) exceeds subtasks.total (2)");
        let payload = err.to_payload("evaluate");
        assert_eq!(payload.code, "VALIDATION_FAILED");
        assert_eq!(payload.operation, "evaluate");
        assert!(payload.message.contains("exceeds subtasks.total"));
        assert!(Uuid::parse_str(&payload.trace_id).is_ok());
    }

    #[test]
    fn json_errors_map_to_json_code() {
        let err: GateError = serde_json::from_str::<serde_json::Value>("{")
            .expect_err("truncated json")
            .into();
        assert_eq!(err.code(), "JSON_ERROR");
    }
}
