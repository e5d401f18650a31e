//! Axum HTTP surface for the gateway.

pub mod error;
pub mod handlers;
pub mod response;
pub mod router;
