// Shared HTTP response types for control requests.

use serde::Serialize;

/// Body returned for every control request, successful or not.
#[derive(Debug, Clone, Serialize)]
pub struct ControlResponse {
    // Either "success" or "error".
    pub status: &'static str,
    // Human-readable outcome shown to the player.
    pub message: String,
}

impl ControlResponse {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            status: "success",
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: "error",
            message: message.into(),
        }
    }
}
