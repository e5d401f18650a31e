//! Downstream invocation types.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Response mode requested from the downstream engine.
///
/// The gateway only supports blocking invocations: the dispatcher suspends
/// until the engine returns a complete result. Serialized as the wire
/// string `"blocking"`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseMode {
    #[default]
    Blocking,
}

/// The downstream engine's response.
///
/// Engines return a JSON document containing at minimum a `data.outputs`
/// object. The gateway either forwards the whole document (enveloped) or
/// extracts the outputs (raw mode); it never interprets the rest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InvocationResult(pub Value);

impl InvocationResult {
    /// The `data.outputs` object of the result.
    ///
    /// Falls back to an empty object when the engine response does not
    /// carry one, so raw-output shaping stays total.
    pub fn outputs(&self) -> Value {
        self.0
            .get("data")
            .and_then(|data| data.get("outputs"))
            .cloned()
            .unwrap_or_else(|| Value::Object(serde_json::Map::new()))
    }

    /// Consume the wrapper, yielding the full engine response.
    pub fn into_value(self) -> Value {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_response_mode_serializes_as_blocking() {
        assert_eq!(
            serde_json::to_value(ResponseMode::Blocking).unwrap(),
            json!("blocking")
        );
    }

    #[test]
    fn test_outputs_extracts_data_outputs() {
        let result = InvocationResult(json!({
            "data": { "outputs": { "result": "X" } },
            "task_id": "t-1",
        }));
        assert_eq!(result.outputs(), json!({ "result": "X" }));
    }

    #[test]
    fn test_outputs_missing_falls_back_to_empty_object() {
        let result = InvocationResult(json!({ "data": {} }));
        assert_eq!(result.outputs(), json!({}));

        let result = InvocationResult(json!("not an object"));
        assert_eq!(result.outputs(), json!({}));
    }
}
