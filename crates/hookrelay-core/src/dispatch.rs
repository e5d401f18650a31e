//! Request dispatch: mode selection, input resolution, engine invocation,
//! and response shaping.
//!
//! `Dispatcher::dispatch` is the whole invocation pipeline, in order:
//! middleware chain, API-key validation, settings coercion, path-based
//! mode selection, input resolution, a single blocking engine call, and
//! raw-vs-enveloped response shaping. Each step is gated on the previous
//! one; engine failures propagate without retry.

use serde_json::{Map, Value};

use hookrelay_types::error::{AuthError, EngineError, MiddlewareError};
use hookrelay_types::invocation::ResponseMode;
use hookrelay_types::settings::{Settings, keys};

use crate::auth::validate_api_key;
use crate::engine::{ChatEngine, ChatInvocation, WorkflowEngine};
use crate::middleware::{EarlyResponse, apply_middleware};
use crate::request::InboundRequest;
use crate::settings::{coerce_boolean_settings, setting_enabled};

/// The downstream target, resolved once from the request path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvokeMode {
    /// The workflow engine.
    SingleWorkflow,
    /// The chat engine (the default for any other path).
    Chat,
}

impl InvokeMode {
    /// Resolve the mode from a URL path. A path whose last segment is
    /// `single-workflow` selects the workflow engine; everything else is
    /// chat.
    pub fn from_path(path: &str) -> Self {
        if path.trim_end_matches('/').rsplit('/').next() == Some("single-workflow") {
            InvokeMode::SingleWorkflow
        } else {
            InvokeMode::Chat
        }
    }
}

/// What the dispatcher hands back to the HTTP layer.
#[derive(Debug)]
pub enum DispatchOutcome {
    /// A middleware short-circuited; return this response verbatim.
    Early(EarlyResponse),
    /// Raw-output mode: the body is exactly the engine's `data.outputs`.
    Raw(Value),
    /// Default mode: the full engine result, to be wrapped in the
    /// standard response envelope.
    Wrapped(Value),
}

/// Failures of the dispatch pipeline.
#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    #[error(transparent)]
    Middleware(#[from] MiddlewareError),

    #[error(transparent)]
    Auth(#[from] AuthError),

    /// No application id in settings or body.
    #[error("app_id is required")]
    MissingAppId,

    /// Chat mode without a query.
    #[error("query is required")]
    MissingQuery,

    #[error(transparent)]
    Engine(#[from] EngineError),
}

/// Dispatches inbound webhook requests to one of the two engines.
///
/// Holds no per-request state; concurrent dispatches are independent.
pub struct Dispatcher<W, C> {
    workflow: W,
    chat: C,
}

impl<W: WorkflowEngine, C: ChatEngine> Dispatcher<W, C> {
    /// Create a dispatcher over the two engine collaborators.
    pub fn new(workflow: W, chat: C) -> Self {
        Self { workflow, chat }
    }

    /// Run the full invocation pipeline for one request.
    pub async fn dispatch(
        &self,
        request: &InboundRequest,
        settings: &Settings,
    ) -> Result<DispatchOutcome, DispatchError> {
        let middleware = apply_middleware(request, settings)?;
        if let Some(early) = middleware.early {
            return Ok(DispatchOutcome::Early(early));
        }

        validate_api_key(request, settings)?;

        let settings = coerce_boolean_settings(settings);
        let mode = InvokeMode::from_path(request.path());
        let inputs = resolve_inputs(request, &settings, middleware.json_string);

        tracing::debug!(?mode, input_keys = inputs.len(), "dispatching invocation");

        let result = match mode {
            InvokeMode::SingleWorkflow => {
                let app_id = resolve_app_id(request, &settings)?;
                self.workflow
                    .invoke(&app_id, &inputs, ResponseMode::Blocking)
                    .await?
            }
            InvokeMode::Chat => {
                let app_id = resolve_app_id(request, &settings)?;
                let body = request.json_object();
                let query = body
                    .and_then(|b| b.get("query"))
                    .and_then(Value::as_str)
                    .filter(|q| !q.is_empty())
                    .ok_or(DispatchError::MissingQuery)?
                    .to_string();
                let conversation_id = body
                    .and_then(|b| b.get("conversation_id"))
                    .and_then(Value::as_str)
                    .map(str::to_string);
                self.chat
                    .invoke(ChatInvocation {
                        app_id,
                        query,
                        conversation_id,
                        inputs,
                        response_mode: ResponseMode::Blocking,
                    })
                    .await?
            }
        };

        if setting_enabled(&settings, keys::RAW_DATA_OUTPUT) {
            Ok(DispatchOutcome::Raw(result.outputs()))
        } else {
            Ok(DispatchOutcome::Wrapped(result.into_value()))
        }
    }
}

/// Resolve the inputs map passed downstream.
///
/// Precedence:
/// 1. the default middleware's `json_string` artifact becomes the single
///    `json_string` input;
/// 2. `explicit_inputs` enabled: the entire parsed body is the inputs map;
/// 3. otherwise the body's `inputs` sub-object when present, falling back
///    to the whole body for callers that post inputs at the top level.
///
/// A missing or non-object body always degrades to an empty map.
fn resolve_inputs(
    request: &InboundRequest,
    settings: &Settings,
    json_string: Option<String>,
) -> Map<String, Value> {
    if let Some(serialized) = json_string {
        let mut inputs = Map::new();
        inputs.insert("json_string".to_string(), Value::String(serialized));
        return inputs;
    }

    let Some(body) = request.json_object() else {
        return Map::new();
    };

    if setting_enabled(settings, keys::EXPLICIT_INPUTS) {
        return body.clone();
    }

    match body.get("inputs").and_then(Value::as_object) {
        Some(inner) => inner.clone(),
        None => body.clone(),
    }
}

/// Resolve the downstream application id: `static_app_id` from settings,
/// falling back to an `app_id` field in the body.
fn resolve_app_id(
    request: &InboundRequest,
    settings: &Settings,
) -> Result<String, DispatchError> {
    settings
        .text(keys::STATIC_APP_ID)
        .or_else(|| {
            request
                .json_object()
                .and_then(|body| body.get("app_id"))
                .and_then(Value::as_str)
        })
        .filter(|id| !id.is_empty())
        .map(str::to_string)
        .ok_or(DispatchError::MissingAppId)
}
