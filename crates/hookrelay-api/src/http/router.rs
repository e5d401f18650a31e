//! Axum router configuration with middleware.
//!
//! Webhook endpoints live under `/e/`; the invoke handler serves both
//! paths and any additional operator-registered path (core treats non
//! single-workflow paths as chat mode).
//! Middleware: CORS, request tracing.

use axum::Router;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use hookrelay_core::engine::{ChatEngine, WorkflowEngine};

use crate::http::handlers;
use crate::state::AppState;

/// Build the complete router with all routes and middleware.
pub fn build_router<W, C>(state: AppState<W, C>) -> Router
where
    W: WorkflowEngine + 'static,
    C: ChatEngine + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(
            "/e/single-workflow",
            post(handlers::invoke::invoke_webhook::<W, C>),
        )
        .route("/e/chat", post(handlers::invoke::invoke_webhook::<W, C>))
        .route("/e/{*path}", post(handlers::invoke::invoke_webhook::<W, C>))
        .route("/health", get(health_check))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// GET /health - Simple health check endpoint.
async fn health_check() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use serde_json::{Map, Value, json};
    use tower::ServiceExt;

    use hookrelay_core::dispatch::Dispatcher;
    use hookrelay_core::engine::ChatInvocation;
    use hookrelay_types::error::EngineError;
    use hookrelay_types::invocation::{InvocationResult, ResponseMode};
    use hookrelay_types::settings::{Settings, keys};

    struct StubWorkflow {
        result: Value,
    }

    impl WorkflowEngine for StubWorkflow {
        async fn invoke(
            &self,
            _app_id: &str,
            _inputs: &Map<String, Value>,
            _response_mode: ResponseMode,
        ) -> Result<InvocationResult, EngineError> {
            Ok(InvocationResult(self.result.clone()))
        }
    }

    struct StubChat {
        result: Value,
    }

    impl ChatEngine for StubChat {
        async fn invoke(
            &self,
            _invocation: ChatInvocation,
        ) -> Result<InvocationResult, EngineError> {
            Ok(InvocationResult(self.result.clone()))
        }
    }

    fn router_with_settings(settings: Settings) -> Router {
        let workflow = StubWorkflow {
            result: json!({ "data": { "outputs": { "result": "X" } } }),
        };
        let chat = StubChat {
            result: json!({ "data": { "answer": "hello" } }),
        };
        build_router(AppState::new(Dispatcher::new(workflow, chat), settings))
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn post_json(path: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(path)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_health_check() {
        let app = router_with_settings(Settings::new());
        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_raw_output_mode_returns_outputs_verbatim() {
        let settings: Settings = [
            (keys::RAW_DATA_OUTPUT, "true"),
            (keys::STATIC_APP_ID, "app-1"),
        ]
        .into_iter()
        .collect();
        let app = router_with_settings(settings);

        let response = app
            .oneshot(post_json("/e/single-workflow", json!({})))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, json!({ "result": "X" }));
    }

    #[tokio::test]
    async fn test_default_mode_wraps_result_in_envelope() {
        let settings: Settings = [(keys::STATIC_APP_ID, "app-1")].into_iter().collect();
        let app = router_with_settings(settings);

        let response = app
            .oneshot(post_json("/e/single-workflow", json!({})))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["data"], json!({ "data": { "outputs": { "result": "X" } } }));
        assert!(body["meta"]["request_id"].is_string());
    }

    #[tokio::test]
    async fn test_chat_path_hits_chat_engine() {
        let settings: Settings = [(keys::STATIC_APP_ID, "app-1")].into_iter().collect();
        let app = router_with_settings(settings);

        let response = app
            .oneshot(post_json("/e/chat", json!({ "query": "hi" })))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["data"], json!({ "data": { "answer": "hello" } }));
    }

    #[tokio::test]
    async fn test_invalid_api_key_rejected_403() {
        let settings: Settings = [
            (keys::STATIC_APP_ID, "app-1"),
            (keys::API_KEY, "secret"),
            (keys::API_KEY_LOCATION, "api_key_header"),
        ]
        .into_iter()
        .collect();
        let app = router_with_settings(settings);

        let response = app
            .oneshot(post_json("/e/single-workflow", json!({})))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
        let body = body_json(response).await;
        assert_eq!(body["errors"][0]["code"], "FORBIDDEN");
    }

    #[tokio::test]
    async fn test_missing_query_is_validation_error() {
        let settings: Settings = [(keys::STATIC_APP_ID, "app-1")].into_iter().collect();
        let app = router_with_settings(settings);

        let response = app
            .oneshot(post_json("/e/chat", json!({})))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["errors"][0]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_unregistered_e_path_falls_back_to_chat() {
        let settings: Settings = [(keys::STATIC_APP_ID, "app-1")].into_iter().collect();
        let app = router_with_settings(settings);

        let response = app
            .oneshot(post_json("/e/custom-hook", json!({ "query": "hi" })))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
