//! Request handlers.

pub mod invoke;
