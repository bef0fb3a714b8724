use reqwest::StatusCode;
use thiserror::Error;

/// Errors that can occur while fetching the project list.
///
/// Every variant ends the request in the failure state.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Server answered with a non-2xx status
    #[error("Projects endpoint returned {status}")]
    Status { status: StatusCode },

    /// Request never produced a response (DNS, refused, reset)
    #[error("Request failed: {0}")]
    Transport(#[source] reqwest::Error),

    /// Response body was not the expected JSON
    #[error("Failed to decode projects response: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("Invalid projects URL '{url}'")]
    InvalidUrl { url: String },
}

impl FetchError {
    /// Short label for log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            FetchError::Status { .. } => "http_status",
            FetchError::Transport(_) => "transport",
            FetchError::Decode(_) => "decode",
            FetchError::InvalidUrl { .. } => "invalid_url",
        }
    }

    pub fn status(&self) -> Option<StatusCode> {
        match self {
            FetchError::Status { status } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_kind_and_code() {
        let err = FetchError::Status {
            status: StatusCode::NOT_FOUND,
        };
        assert_eq!(err.kind(), "http_status");
        assert_eq!(err.status(), Some(StatusCode::NOT_FOUND));
        assert_eq!(err.to_string(), "Projects endpoint returned 404 Not Found");
    }

    #[test]
    fn decode_error_has_no_status() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = FetchError::Decode(source);
        assert_eq!(err.kind(), "decode");
        assert_eq!(err.status(), None);
    }
}
