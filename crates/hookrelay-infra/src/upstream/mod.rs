//! Upstream engine API client.

mod client;

pub use client::UpstreamClient;
