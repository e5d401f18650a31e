//! Shared domain types for Hookrelay.
//!
//! This crate contains the types used across the Hookrelay gateway:
//! the loosely-typed endpoint settings map, the downstream invocation
//! result, configuration, and the error taxonomy.
//!
//! Zero infrastructure dependencies -- only serde, serde_json, secrecy,
//! thiserror.

pub mod config;
pub mod error;
pub mod invocation;
pub mod settings;
