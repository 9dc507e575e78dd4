use serde_json::Value;
use thiserror::Error;

/// Shown whenever the service gave no usable message
pub const GENERIC_ERROR: &str = "Server error!";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("server answered {status}: {}", .message.as_deref().unwrap_or(GENERIC_ERROR))]
    Server { status: u16, message: Option<String> },
    #[error("network error: {0}")]
    Network(String),
    #[error("unexpected response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Build from a failed response's status and raw body
    pub fn from_response(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<Value>(body)
            .ok()
            .and_then(|json| json.get("message").and_then(Value::as_str).map(str::to_string));
        ApiError::Server { status, message }
    }

    /// Text for the status slot
    pub fn flash_message(&self) -> String {
        match self {
            ApiError::Server { message: Some(message), .. } => message.clone(),
            _ => GENERIC_ERROR.to_string(),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}
