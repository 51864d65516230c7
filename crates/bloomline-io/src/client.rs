//! HTTP client for the decoration service.
//!
//! Requests are sent with `gloo-net` (the browser `fetch` API). The
//! status and body are handed to [`interpret_response`] unchanged, so
//! error reporting is identical to what the core crate tests.

use std::fmt::Display;

use bloomline_shapes::{
    ClientConfig, Decorate, DecorateError, DecorationRequest, DecorationResponse,
    interpret_response,
};

/// [`Decorate`] implementation that POSTs JSON to a fixed endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpDecorator {
    endpoint: String,
}

impl HttpDecorator {
    /// Client for the given endpoint URL or path.
    #[must_use]
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }

    /// Client for the decoration endpoint named in `config`.
    #[must_use]
    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(config.decorate_endpoint.clone())
    }

    /// Endpoint this client posts to.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Decorate for HttpDecorator {
    async fn decorate(
        &self,
        request: &DecorationRequest,
    ) -> Result<DecorationResponse, DecorateError> {
        log::debug!("POST {}", self.endpoint);
        let resp = gloo_net::http::Request::post(&self.endpoint)
            .json(request)
            .map_err(transport_error)?
            .send()
            .await
            .map_err(transport_error)?;

        let status = resp.status();
        let body = resp.text().await.map_err(transport_error)?;
        log::debug!("{} answered {status} ({} bytes)", self.endpoint, body.len());

        interpret_response(status, &body)
    }
}

/// A request that never produced a readable response.
fn transport_error(e: impl Display) -> DecorateError {
    DecorateError::Transport(e.to_string())
}
