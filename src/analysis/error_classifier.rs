//! Pure classification of transport failures

use crate::http::TransportFailure;
use serde::Serialize;

/// Semantic kind of a failed fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ErrorKind {
    /// 404: the resource simply has nothing yet
    NotFound,
    /// 5xx, or no response at all
    ServerError,
    /// Any other 4xx
    ClientError,
    /// Anything that does not fit the expected failure shapes
    Unknown,
}

/// Where a failure kind is presented to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ErrorTreatment {
    /// Looks exactly like an empty result
    Silent,
    /// Empty result plus a global, auto-dismissing notification
    Toast,
    /// Error message held next to the affected region
    Inline,
}

impl ErrorKind {
    pub fn treatment(self) -> ErrorTreatment {
        match self {
            Self::NotFound => ErrorTreatment::Silent,
            Self::ServerError => ErrorTreatment::Toast,
            Self::ClientError | Self::Unknown => ErrorTreatment::Inline,
        }
    }
}

/// Classify a transport failure. Total: every failure maps to exactly one kind.
pub fn classify(failure: &TransportFailure) -> ErrorKind {
    match failure {
        TransportFailure::Http { status: 404, .. } => ErrorKind::NotFound,
        TransportFailure::Http { status: 500..=599, .. } => ErrorKind::ServerError,
        TransportFailure::Http { status: 400..=499, .. } => ErrorKind::ClientError,
        TransportFailure::Http { .. } => ErrorKind::Unknown,
        TransportFailure::Network { .. } => ErrorKind::ServerError,
        TransportFailure::Malformed { .. } => ErrorKind::Unknown,
    }
}
