//! Request middleware chain.
//!
//! Middleware runs before API-key validation and dispatch. A middleware
//! may short-circuit the whole invocation with an [`EarlyResponse`]
//! (returned to the caller verbatim), or contribute artifacts consumed
//! later in dispatch (the default middleware's `json_string`).
//!
//! Selection is settings-driven: `middleware = "discord"` runs the Discord
//! interaction middleware first; the default middleware always runs unless
//! an earlier middleware short-circuited.

pub mod default;
pub mod discord;

use serde_json::Value;

use hookrelay_types::error::MiddlewareError;
use hookrelay_types::settings::{Settings, keys};

use crate::request::InboundRequest;

use default::DefaultMiddleware;
use discord::DiscordMiddleware;

/// A response a middleware returns in place of the full invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct EarlyResponse {
    /// HTTP status code.
    pub status: u16,
    /// JSON body; `None` means an empty body (e.g. 204).
    pub body: Option<Value>,
}

impl EarlyResponse {
    /// A JSON response with the given status.
    pub fn json(status: u16, body: Value) -> Self {
        Self {
            status,
            body: Some(body),
        }
    }

    /// An empty-bodied response with the given status.
    pub fn empty(status: u16) -> Self {
        Self { status, body: None }
    }
}

/// The outcome of running the middleware chain.
#[derive(Debug, Default)]
pub struct MiddlewareOutput {
    /// Set when a middleware short-circuited the invocation.
    pub early: Option<EarlyResponse>,
    /// The default middleware's serialized-body artifact, when
    /// `json_string_input` is enabled and the body parsed.
    pub json_string: Option<String>,
}

/// Run the middleware chain for a request.
///
/// Selection errors (e.g. the Discord middleware without its verification
/// key) are [`MiddlewareError`]s, surfaced as server-side failures before
/// dispatch. A short-circuit is not an error.
pub fn apply_middleware(
    request: &InboundRequest,
    settings: &Settings,
) -> Result<MiddlewareOutput, MiddlewareError> {
    if settings.text(keys::MIDDLEWARE) == Some("discord") {
        let discord = DiscordMiddleware::from_settings(settings)?;
        if let Some(early) = discord.invoke(request) {
            tracing::debug!(status = early.status, "discord middleware short-circuited");
            return Ok(MiddlewareOutput {
                early: Some(early),
                json_string: None,
            });
        }
    }

    let json_string = DefaultMiddleware.invoke(request, settings);
    Ok(MiddlewareOutput {
        early: None,
        json_string,
    })
}
