//! Business logic for the Hookrelay webhook gateway.
//!
//! The core is transport-agnostic: it consumes an [`request::InboundRequest`]
//! view of the webhook call plus the endpoint [`Settings`], and talks to the
//! downstream engines through the narrow traits in [`engine`]. The api crate
//! adapts axum to this surface; infra provides the reqwest-backed engines.
//!
//! [`Settings`]: hookrelay_types::settings::Settings

pub mod auth;
pub mod dispatch;
pub mod engine;
pub mod middleware;
pub mod request;
pub mod settings;
