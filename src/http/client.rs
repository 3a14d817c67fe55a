use crate::config::CafeDataConfig;
use crate::context::RequestContext;
use crate::error::Result;
use crate::http::failure::TransportFailure;
use crate::http::response_converter::ResponseConverter;
use crate::traits::Transport;
use reqwest::header::{ACCEPT, ACCEPT_LANGUAGE};
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use url::Url;

/// reqwest-backed transport talking to the cafe API
#[derive(Clone)]
pub struct HttpTransport {
    client: Client,
    base_url: Url,
    response_converter: ResponseConverter,
}

impl HttpTransport {
    /// Create a new HTTP transport with configuration
    pub fn new(config: &CafeDataConfig) -> Result<Self> {
        let mut builder = Client::builder().timeout(Duration::from_secs(config.timeout_seconds()));

        if let Some(user_agent) = &config.api.user_agent {
            builder = builder.user_agent(user_agent.clone());
        }

        let client = builder.build()?;
        let base_url = Url::parse(&config.normalized_base_url())?;

        Ok(Self {
            client,
            base_url,
            response_converter: ResponseConverter::new(),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Join a resource path beneath the API root
    fn resolve(&self, path: &str) -> std::result::Result<Url, TransportFailure> {
        self.base_url
            .join(path.trim_start_matches('/'))
            .map_err(|e| TransportFailure::malformed(format!("Invalid request path '{}': {}", path, e)))
    }
}

/// Map a send error onto the failure taxonomy
fn failure_from_send_error(error: reqwest::Error) -> TransportFailure {
    if error.is_builder() {
        TransportFailure::malformed(format!("Request could not be built: {}", error))
    } else if error.is_timeout() {
        TransportFailure::network(format!("Request timed out: {}", error))
    } else {
        TransportFailure::network(format!("Request failed: {}", error))
    }
}

impl Transport for HttpTransport {
    async fn get<P>(&self, path: &str, ctx: &RequestContext) -> std::result::Result<P, TransportFailure>
    where
        P: DeserializeOwned + Send + 'static,
    {
        let url = self.resolve(path)?;
        tracing::debug!(%url, locale = %ctx.locale, authenticated = ctx.is_authenticated(), "GET");

        let mut request = self
            .client
            .get(url)
            .header(ACCEPT, "application/json")
            .header(ACCEPT_LANGUAGE, ctx.locale.as_str());

        if let Some(user) = &ctx.user {
            request = request.bearer_auth(&user.access_token);
        }

        let response = request.send().await.map_err(failure_from_send_error)?;

        self.response_converter.convert_response(response).await
    }
}
