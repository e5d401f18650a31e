//! Infrastructure for the Hookrelay gateway: the reqwest-backed upstream
//! engine client and the TOML config loader.

pub mod config;
pub mod upstream;
