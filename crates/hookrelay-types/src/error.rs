//! Error taxonomy shared across the gateway.

use thiserror::Error;

/// Errors from the downstream workflow/chat engines.
///
/// Engine failures are never retried by the gateway; they propagate to the
/// caller as a failed invocation.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The engine answered with a non-success HTTP status.
    #[error("upstream engine returned status {status}: {message}")]
    Upstream { status: u16, message: String },

    /// The request never completed (connect, timeout, I/O).
    #[error("upstream transport error: {0}")]
    Transport(String),

    /// The engine answered 2xx but the body was not valid JSON.
    #[error("malformed engine response: {0}")]
    MalformedResponse(String),
}

/// Errors from inbound API-key validation.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The provided key did not match, or no key was provided.
    #[error("invalid API key")]
    Invalid,

    /// Validation is required but the endpoint settings are incomplete.
    #[error("API key validation misconfigured: {0}")]
    Misconfigured(String),
}

/// Errors raised while running the middleware chain.
///
/// Distinct from a middleware *rejection* (which is an early response,
/// not an error): these mean the chain itself could not run.
#[derive(Debug, Error)]
pub enum MiddlewareError {
    /// The selected middleware cannot be constructed from the settings.
    #[error("middleware misconfigured: {0}")]
    Misconfigured(String),

    /// The middleware failed while processing the request.
    #[error("middleware error: {0}")]
    Internal(String),
}
