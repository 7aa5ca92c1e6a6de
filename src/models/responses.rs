use serde::{Deserialize, Serialize};

/// Error response body
///
/// Matches the wire contract of the public endpoints: a single `error` field
/// with a caller-facing message. Upstream diagnostics are logged server-side
/// and never included here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self { error: message.into() }
    }
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}
