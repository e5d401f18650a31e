//! Transport-agnostic view of an inbound webhook request.
//!
//! The api crate builds this from axum parts; tests build it directly via
//! the builder. The body is parsed as JSON once at construction,
//! best-effort: a missing or invalid JSON body is `None`, never an error
//! (malformed bodies degrade to empty inputs downstream).

use std::collections::BTreeMap;

use serde_json::{Map, Value};

/// An inbound webhook call: path, headers, query, and body.
#[derive(Debug, Clone)]
pub struct InboundRequest {
    path: String,
    headers: BTreeMap<String, String>,
    query: BTreeMap<String, String>,
    body: Vec<u8>,
    json: Option<Value>,
}

impl InboundRequest {
    /// Build a request from raw parts. Header names are lowercased for
    /// case-insensitive lookup; the body is parsed as JSON best-effort.
    pub fn new(
        path: impl Into<String>,
        headers: BTreeMap<String, String>,
        query: BTreeMap<String, String>,
        body: Vec<u8>,
    ) -> Self {
        let headers = headers
            .into_iter()
            .map(|(name, value)| (name.to_ascii_lowercase(), value))
            .collect();
        let json = serde_json::from_slice(&body).ok();
        Self {
            path: path.into(),
            headers,
            query,
            body,
            json,
        }
    }

    /// Start building a request for the given path.
    pub fn builder(path: impl Into<String>) -> InboundRequestBuilder {
        InboundRequestBuilder {
            path: path.into(),
            headers: BTreeMap::new(),
            query: BTreeMap::new(),
            body: Vec::new(),
        }
    }

    /// The URL path of the request.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Header value by case-insensitive name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }

    /// Query parameter value by name.
    pub fn query_param(&self, name: &str) -> Option<&str> {
        self.query.get(name).map(String::as_str)
    }

    /// The raw body bytes.
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// The parsed JSON body, if the body was valid JSON.
    pub fn json(&self) -> Option<&Value> {
        self.json.as_ref()
    }

    /// The parsed JSON body as an object, if it is one.
    pub fn json_object(&self) -> Option<&Map<String, Value>> {
        self.json.as_ref().and_then(Value::as_object)
    }
}

/// Builder for [`InboundRequest`], used by tests and the api adapter.
pub struct InboundRequestBuilder {
    path: String,
    headers: BTreeMap<String, String>,
    query: BTreeMap<String, String>,
    body: Vec<u8>,
}

impl InboundRequestBuilder {
    /// Add a header.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Add a query parameter.
    pub fn query_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.insert(name.into(), value.into());
        self
    }

    /// Set the body to the serialization of a JSON value.
    pub fn json_body(mut self, value: &Value) -> Self {
        self.body = serde_json::to_vec(value).unwrap_or_default();
        self
    }

    /// Set the raw body bytes.
    pub fn body(mut self, body: Vec<u8>) -> Self {
        self.body = body;
        self
    }

    /// Finish building.
    pub fn build(self) -> InboundRequest {
        InboundRequest::new(self.path, self.headers, self.query, self.body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_header_lookup_is_case_insensitive() {
        let request = InboundRequest::builder("/e/chat")
            .header("X-Api-Key", "k-1")
            .build();
        assert_eq!(request.header("x-api-key"), Some("k-1"));
        assert_eq!(request.header("X-API-KEY"), Some("k-1"));
        assert_eq!(request.header("missing"), None);
    }

    #[test]
    fn test_json_body_parsed_once() {
        let request = InboundRequest::builder("/e/single-workflow")
            .json_body(&json!({ "inputs": { "a": 1 } }))
            .build();
        assert!(request.json_object().unwrap().contains_key("inputs"));
    }

    #[test]
    fn test_invalid_json_body_is_none() {
        let request = InboundRequest::builder("/e/chat")
            .body(b"not json".to_vec())
            .build();
        assert!(request.json().is_none());
        assert_eq!(request.body(), b"not json");
    }

    #[test]
    fn test_non_object_json_has_no_object_view() {
        let request = InboundRequest::builder("/e/chat")
            .json_body(&json!([1, 2, 3]))
            .build();
        assert!(request.json().is_some());
        assert!(request.json_object().is_none());
    }
}
