use crate::http::failure::{ErrorEnvelope, TransportFailure};
use reqwest::Response;
use serde::de::DeserializeOwned;

/// Turns a raw reqwest response into a typed payload or a tagged failure
#[derive(Debug, Clone, Copy, Default)]
pub struct ResponseConverter;

impl ResponseConverter {
    /// Create a new response converter
    pub fn new() -> Self {
        Self
    }

    pub async fn convert_response<P>(&self, response: Response) -> Result<P, TransportFailure>
    where
        P: DeserializeOwned,
    {
        let status = response.status().as_u16();

        // A body that stops arriving halfway is a network problem, not a shape problem
        let body = response
            .text()
            .await
            .map_err(|e| TransportFailure::network(format!("Failed to read response body: {}", e)))?;

        self.convert_body(status, &body)
    }

    /// Decode an already-read body for the given status
    pub fn convert_body<P>(&self, status: u16, body: &str) -> Result<P, TransportFailure>
    where
        P: DeserializeOwned,
    {
        if (200..300).contains(&status) {
            return serde_json::from_str::<P>(body).map_err(|e| {
                TransportFailure::malformed(format!("Unexpected payload shape: {}", e))
            });
        }

        let message = ErrorEnvelope::parse(body).and_then(ErrorEnvelope::into_message);
        Err(TransportFailure::Http { status, message })
    }
}
