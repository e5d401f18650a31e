//! Default middleware: JSON-string body transform.
//!
//! When the `json_string_input` setting is enabled, the parsed request
//! body is re-serialized to a compact JSON string and handed to dispatch
//! as an artifact; the dispatcher delivers it downstream as the single
//! `json_string` input. Useful for workflow applications that take the
//! whole payload as one string variable.

use serde_json::Value;

use hookrelay_types::settings::{Settings, keys};

use crate::request::InboundRequest;
use crate::settings::setting_enabled;

/// The always-on tail of the middleware chain. Never short-circuits.
pub struct DefaultMiddleware;

impl DefaultMiddleware {
    /// Produce the `json_string` artifact when enabled and the body
    /// parsed as JSON; `None` otherwise.
    pub fn invoke(&self, request: &InboundRequest, settings: &Settings) -> Option<String> {
        if !setting_enabled(settings, keys::JSON_STRING_INPUT) {
            return None;
        }
        self.transform_request_body(request)
    }

    /// Serialize the parsed JSON body to a compact string.
    ///
    /// A body that failed to parse yields nothing; the request proceeds
    /// without the artifact.
    pub fn transform_request_body(&self, request: &InboundRequest) -> Option<String> {
        request.json().map(Value::to_string)
    }
}
