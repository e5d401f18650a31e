//! Loosely-typed endpoint settings.
//!
//! Operators configure webhook endpoints through a string-keyed map whose
//! values arrive with mixed types: real booleans, strings that spell
//! booleans ("true", "FALSE"), plain strings, or anything else TOML/JSON
//! can express. [`SettingValue`] models that as a small closed variant so
//! the core can normalize the boolean-semantics keys without guessing at
//! runtime types.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Well-known settings keys recognized by the gateway.
pub mod keys {
    /// When true, the entire request body is used as the downstream inputs map.
    pub const EXPLICIT_INPUTS: &str = "explicit_inputs";
    /// When true, the response body is the raw `data.outputs` map without an envelope.
    pub const RAW_DATA_OUTPUT: &str = "raw_data_output";
    /// When true, the default middleware serializes the body to a JSON string input.
    pub const JSON_STRING_INPUT: &str = "json_string_input";
    /// Application identifier passed to the downstream engine.
    pub const STATIC_APP_ID: &str = "static_app_id";
    /// Middleware selector (e.g. "discord").
    pub const MIDDLEWARE: &str = "middleware";
    /// Hex-encoded ed25519 public key for Discord signature verification.
    pub const SIGNATURE_VERIFICATION_KEY: &str = "signature_verification_key";
    /// Gate for the inbound API-key check.
    pub const API_KEY_REQUIRED: &str = "api_key_required";
    /// Where the inbound API key is read from ("api_key_header" or "api_key_query_param").
    pub const API_KEY_LOCATION: &str = "api_key_location";
    /// The expected inbound API key.
    pub const API_KEY: &str = "api_key";
}

/// A single settings value.
///
/// Untagged: JSON/TOML booleans deserialize as `Bool`, strings as `Text`,
/// and everything else (numbers, arrays, tables) falls through to `Other`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SettingValue {
    /// A real boolean.
    Bool(bool),
    /// A string, possibly spelling a boolean.
    Text(String),
    /// Any other scalar or structured value, passed through untouched.
    Other(serde_json::Value),
}

impl From<bool> for SettingValue {
    fn from(b: bool) -> Self {
        SettingValue::Bool(b)
    }
}

impl From<&str> for SettingValue {
    fn from(s: &str) -> Self {
        SettingValue::Text(s.to_string())
    }
}

impl From<String> for SettingValue {
    fn from(s: String) -> Self {
        SettingValue::Text(s)
    }
}

/// The settings map for a webhook endpoint.
///
/// Ordered so serialized output is deterministic. Unrecognized keys are
/// retained and passed through to collaborators unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Settings(BTreeMap<String, SettingValue>);

impl Settings {
    /// Create an empty settings map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a value by key.
    pub fn get(&self, key: &str) -> Option<&SettingValue> {
        self.0.get(key)
    }

    /// Insert a value, replacing any existing entry.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<SettingValue>) {
        self.0.insert(key.into(), value.into());
    }

    /// Whether the key is present at all.
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Iterate over all entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &SettingValue)> {
        self.0.iter()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the map is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The string content of a `Text` value, if the key holds one.
    pub fn text(&self, key: &str) -> Option<&str> {
        match self.get(key) {
            Some(SettingValue::Text(s)) => Some(s.as_str()),
            _ => None,
        }
    }
}

impl<K: Into<String>, V: Into<SettingValue>> FromIterator<(K, V)> for Settings {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Settings(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}
