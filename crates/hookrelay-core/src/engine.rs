//! Downstream engine traits.
//!
//! The two invocation targets are modeled as single-method traits so the
//! dispatcher can be tested against recording fakes. Uses native async fn
//! in traits (RPITIT, Rust 2024 edition); the dispatcher is generic over
//! the engines rather than boxing them.
//!
//! Implementations live in hookrelay-infra (`UpstreamClient`).

use std::future::Future;

use serde_json::{Map, Value};

use hookrelay_types::error::EngineError;
use hookrelay_types::invocation::{InvocationResult, ResponseMode};

/// The workflow engine target.
pub trait WorkflowEngine: Send + Sync {
    /// Run the workflow application identified by `app_id` with the given
    /// inputs, blocking until the engine returns a complete result.
    fn invoke(
        &self,
        app_id: &str,
        inputs: &Map<String, Value>,
        response_mode: ResponseMode,
    ) -> impl Future<Output = Result<InvocationResult, EngineError>> + Send;
}

/// Parameters for a chat engine invocation.
#[derive(Debug, Clone)]
pub struct ChatInvocation {
    /// Application identifier.
    pub app_id: String,
    /// The user query. Required.
    pub query: String,
    /// Continues an existing conversation when set.
    pub conversation_id: Option<String>,
    /// Input variables for the chat application.
    pub inputs: Map<String, Value>,
    /// Always blocking in this gateway.
    pub response_mode: ResponseMode,
}

/// The chat engine target.
pub trait ChatEngine: Send + Sync {
    /// Send a chat message, blocking until the engine returns a complete
    /// result.
    fn invoke(
        &self,
        invocation: ChatInvocation,
    ) -> impl Future<Output = Result<InvocationResult, EngineError>> + Send;
}

// One client instance can serve both dispatcher slots through Arc.

impl<T: WorkflowEngine> WorkflowEngine for std::sync::Arc<T> {
    fn invoke(
        &self,
        app_id: &str,
        inputs: &Map<String, Value>,
        response_mode: ResponseMode,
    ) -> impl Future<Output = Result<InvocationResult, EngineError>> + Send {
        (**self).invoke(app_id, inputs, response_mode)
    }
}

impl<T: ChatEngine> ChatEngine for std::sync::Arc<T> {
    fn invoke(
        &self,
        invocation: ChatInvocation,
    ) -> impl Future<Output = Result<InvocationResult, EngineError>> + Send {
        (**self).invoke(invocation)
    }
}
