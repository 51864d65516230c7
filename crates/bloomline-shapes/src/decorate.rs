//! The decoration service seam.
//!
//! Transport lives in `bloomline-io`; this module owns the contract and
//! the interpretation of whatever the service sends back.

use crate::types::{DecorateError, DecorationRequest, DecorationResponse};

/// Sends a decoration request and returns the decorated result.
#[allow(async_fn_in_trait)] // WASM is single-threaded; futures need not be Send
pub trait Decorate {
    /// Perform one request/response exchange with the service.
    ///
    /// # Errors
    ///
    /// [`DecorateError::Remote`] for a non-success status,
    /// [`DecorateError::ResponseFormat`] for an unreadable success body,
    /// [`DecorateError::Transport`] when no response arrived.
    async fn decorate(
        &self,
        request: &DecorationRequest,
    ) -> Result<DecorationResponse, DecorateError>;
}

/// Turn an HTTP status and body into a decoration result.
///
/// Any 2xx status is a success and the body must be a
/// [`DecorationResponse`]. Anything else is a remote failure whose
/// message is the body text, untouched.
///
/// # Errors
///
/// [`DecorateError::Remote`] for non-2xx statuses,
/// [`DecorateError::ResponseFormat`] for malformed success bodies.
pub fn interpret_response(status: u16, body: &str) -> Result<DecorationResponse, DecorateError> {
    if !(200..300).contains(&status) {
        return Err(DecorateError::Remote(body.to_owned()));
    }
    serde_json::from_str(body).map_err(|e| DecorateError::ResponseFormat(e.to_string()))
}
