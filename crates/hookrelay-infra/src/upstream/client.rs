//! `UpstreamClient` -- concrete [`WorkflowEngine`] and [`ChatEngine`]
//! implementation over the engine's HTTP API.
//!
//! Workflow runs go to `POST {base}/apps/{app_id}/workflows/run`, chat
//! messages to `POST {base}/apps/{app_id}/chat-messages`, both with bearer
//! authentication and a JSON body carrying the inputs and the blocking
//! response mode.
//!
//! The API key is wrapped in [`secrecy::SecretString`] and is never logged
//! or included in `Debug` output.

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use serde_json::{Map, Value, json};

use hookrelay_core::engine::{ChatEngine, ChatInvocation, WorkflowEngine};
use hookrelay_types::config::UpstreamConfig;
use hookrelay_types::error::EngineError;
use hookrelay_types::invocation::{InvocationResult, ResponseMode};

/// HTTP client for the upstream workflow/chat engine API.
pub struct UpstreamClient {
    http: reqwest::Client,
    base_url: String,
    api_key: SecretString,
}

impl UpstreamClient {
    /// Create a client from the upstream configuration.
    pub fn new(config: UpstreamConfig) -> Self {
        let http = reqwest::Client::builder()
            // Blocking workflow runs can be slow; leave generous room.
            .timeout(Duration::from_secs(300))
            .build()
            .expect("failed to create reqwest client");

        Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key,
        }
    }

    /// Build the full API URL for an app-scoped endpoint.
    fn url(&self, app_id: &str, endpoint: &str) -> String {
        format!("{}/apps/{}/{}", self.base_url, app_id, endpoint)
    }

    /// POST a JSON body and parse the engine response.
    async fn post(&self, url: String, body: Value) -> Result<InvocationResult, EngineError> {
        let response = self
            .http
            .post(&url)
            .bearer_auth(self.api_key.expose_secret())
            .json(&body)
            .send()
            .await
            .map_err(|e| EngineError::Transport(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| EngineError::Transport(e.to_string()))?;

        if !status.is_success() {
            tracing::warn!(%url, status = status.as_u16(), "upstream engine call failed");
            return Err(EngineError::Upstream {
                status: status.as_u16(),
                message: text.chars().take(512).collect(),
            });
        }

        serde_json::from_str(&text)
            .map(InvocationResult)
            .map_err(|e| EngineError::MalformedResponse(e.to_string()))
    }
}

impl WorkflowEngine for UpstreamClient {
    async fn invoke(
        &self,
        app_id: &str,
        inputs: &Map<String, Value>,
        response_mode: ResponseMode,
    ) -> Result<InvocationResult, EngineError> {
        let body = json!({
            "inputs": inputs,
            "response_mode": response_mode,
        });
        self.post(self.url(app_id, "workflows/run"), body).await
    }
}

impl ChatEngine for UpstreamClient {
    async fn invoke(&self, invocation: ChatInvocation) -> Result<InvocationResult, EngineError> {
        let mut body = json!({
            "query": invocation.query,
            "inputs": invocation.inputs,
            "response_mode": invocation.response_mode,
        });
        if let Some(conversation_id) = invocation.conversation_id {
            body["conversation_id"] = Value::String(conversation_id);
        }
        self.post(self.url(&invocation.app_id, "chat-messages"), body)
            .await
    }
}
