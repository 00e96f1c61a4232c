use reqwest::StatusCode;

/// Failures surfaced by the HTTP gateway.
///
/// The client only distinguishes what it acts on: an unauthorized
/// response (credential clearance + login redirect) versus everything
/// else (rendered as a banner string on the owning state slice).
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("unauthorized")]
    Unauthorized,

    #[error("{status}: {}", message.as_deref().unwrap_or("request failed"))]
    Status {
        status: StatusCode,
        message: Option<String>,
    },

    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("unexpected response body: {0}")]
    Decode(#[source] serde_json::Error),
}

impl ApiError {
    /// The banner text for this failure: the backend-provided message
    /// when there is one, otherwise the caller's fixed fallback.
    pub fn banner(&self, fallback: &str) -> String {
        match self {
            ApiError::Status {
                message: Some(message),
                ..
            } => message.clone(),
            _ => fallback.to_string(),
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized)
    }
}
