use serde::Deserialize;
use thiserror::Error;

/// How a transport call failed.
///
/// Closed set: the error classifier matches on it exhaustively.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportFailure {
    /// The server answered with a non-success status
    #[error("HTTP {status}: {}", .message.as_deref().unwrap_or("no message"))]
    Http { status: u16, message: Option<String> },

    /// No response at all: connect error, timeout, aborted request
    #[error("Network failure: {reason}")]
    Network { reason: String },

    /// A response arrived but did not have the expected shape
    #[error("Malformed response: {detail}")]
    Malformed { detail: String },
}

impl TransportFailure {
    pub fn http<S: Into<String>>(status: u16, message: Option<S>) -> Self {
        Self::Http {
            status,
            message: message.map(Into::into),
        }
    }

    pub fn network<S: Into<String>>(reason: S) -> Self {
        Self::Network {
            reason: reason.into(),
        }
    }

    pub fn malformed<S: Into<String>>(detail: S) -> Self {
        Self::Malformed {
            detail: detail.into(),
        }
    }

    /// Status code, when the failure carries one
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            Self::Network { .. } | Self::Malformed { .. } => None,
        }
    }

    /// Server-provided human readable message, when there is one
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Http { message, .. } => message.as_deref().filter(|m| !m.trim().is_empty()),
            Self::Network { .. } | Self::Malformed { .. } => None,
        }
    }
}

/// Error body returned by the API.
///
/// The API's own handler sends `message`/`code`; responses produced before it
/// runs use the framework default `{"detail": ...}`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorEnvelope {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub request_id: Option<String>,
    #[serde(default)]
    pub detail: Option<String>,
    #[serde(default)]
    pub details: Option<serde_json::Value>,
}

impl ErrorEnvelope {
    /// Parse an error body; `None` when it is not a JSON object
    pub fn parse(body: &str) -> Option<Self> {
        serde_json::from_str::<Self>(body.trim()).ok()
    }

    /// Best message to show a user
    pub fn into_message(self) -> Option<String> {
        self.message
            .or(self.detail)
            .map(|m| m.trim().to_string())
            .filter(|m| !m.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_prefers_message_over_detail() {
        let envelope = ErrorEnvelope::parse(
            r#"{"message": "Invalid slug", "code": "invalid", "request_id": "abc12345", "detail": "other"}"#,
        )
        .unwrap();
        assert_eq!(envelope.request_id.as_deref(), Some("abc12345"));
        assert_eq!(envelope.into_message().as_deref(), Some("Invalid slug"));

        let envelope = ErrorEnvelope::parse(r#"{"detail": "Not found."}"#).unwrap();
        assert_eq!(envelope.into_message().as_deref(), Some("Not found."));
    }

    #[test]
    fn test_envelope_rejects_non_json() {
        assert!(ErrorEnvelope::parse("<html>502 Bad Gateway</html>").is_none());
        assert!(ErrorEnvelope::parse("[1, 2]").is_none());
    }

    #[test]
    fn test_failure_accessors() {
        let failure = TransportFailure::http(400, Some("Invalid slug"));
        assert_eq!(failure.status(), Some(400));
        assert_eq!(failure.message(), Some("Invalid slug"));
        assert_eq!(failure.to_string(), "HTTP 400: Invalid slug");

        let blank = TransportFailure::http(400, Some("   "));
        assert_eq!(blank.message(), None);

        let network = TransportFailure::network("connection refused");
        assert_eq!(network.status(), None);
        assert_eq!(network.message(), None);
    }
}
