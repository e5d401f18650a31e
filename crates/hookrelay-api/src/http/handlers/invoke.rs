//! Webhook invoke handler.
//!
//! One handler serves both endpoint paths; the core resolves workflow vs
//! chat from the path itself. The handler only adapts axum parts to the
//! core's [`InboundRequest`] and maps the [`DispatchOutcome`] back to an
//! HTTP response.

use std::collections::BTreeMap;
use std::time::Instant;

use axum::Json;
use axum::body::Bytes;
use axum::extract::{Query, State};
use axum::http::{HeaderMap, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use uuid::Uuid;

use hookrelay_core::dispatch::DispatchOutcome;
use hookrelay_core::engine::{ChatEngine, WorkflowEngine};
use hookrelay_core::request::InboundRequest;

use crate::http::error::AppError;
use crate::http::response::ApiResponse;
use crate::state::AppState;

/// POST /e/single-workflow, POST /e/chat - Receive a webhook invocation.
pub async fn invoke_webhook<W, C>(
    State(state): State<AppState<W, C>>,
    uri: Uri,
    Query(query): Query<BTreeMap<String, String>>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, AppError>
where
    W: WorkflowEngine + 'static,
    C: ChatEngine + 'static,
{
    let start = Instant::now();
    let request_id = Uuid::now_v7().to_string();

    let header_map: BTreeMap<String, String> = headers
        .iter()
        .filter_map(|(name, value)| {
            value
                .to_str()
                .ok()
                .map(|v| (name.as_str().to_string(), v.to_string()))
        })
        .collect();

    let request = InboundRequest::new(uri.path(), header_map, query, body.to_vec());

    tracing::debug!(request_id = %request_id, path = %uri.path(), "webhook received");

    let outcome = state
        .dispatcher
        .dispatch(&request, &state.settings)
        .await?;

    let response = match outcome {
        DispatchOutcome::Early(early) => {
            let status =
                StatusCode::from_u16(early.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            match early.body {
                Some(body) => (status, Json(body)).into_response(),
                None => status.into_response(),
            }
        }
        DispatchOutcome::Raw(outputs) => (StatusCode::OK, Json(outputs)).into_response(),
        DispatchOutcome::Wrapped(result) => {
            let elapsed = start.elapsed().as_millis() as u64;
            Json(ApiResponse::success(result, request_id, elapsed)).into_response()
        }
    };

    Ok(response)
}
