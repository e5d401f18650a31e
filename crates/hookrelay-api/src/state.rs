//! Shared application state for the HTTP layer.

use std::sync::Arc;

use hookrelay_core::dispatch::Dispatcher;
use hookrelay_core::engine::{ChatEngine, WorkflowEngine};
use hookrelay_types::settings::Settings;

/// State handed to every handler. Cheap to clone; holds no per-request
/// data.
pub struct AppState<W, C> {
    /// The dispatch pipeline over the configured engines.
    pub dispatcher: Arc<Dispatcher<W, C>>,
    /// Endpoint settings from configuration, raw (coercion happens per
    /// dispatch).
    pub settings: Arc<Settings>,
}

impl<W: WorkflowEngine, C: ChatEngine> AppState<W, C> {
    /// Create state from a dispatcher and the endpoint settings.
    pub fn new(dispatcher: Dispatcher<W, C>, settings: Settings) -> Self {
        Self {
            dispatcher: Arc::new(dispatcher),
            settings: Arc::new(settings),
        }
    }
}

impl<W, C> Clone for AppState<W, C> {
    fn clone(&self) -> Self {
        Self {
            dispatcher: Arc::clone(&self.dispatcher),
            settings: Arc::clone(&self.settings),
        }
    }
}
