//! Boolean settings coercion.
//!
//! Operator settings arrive loosely typed: the three boolean-semantics keys
//! may carry real booleans or strings like `"true"` / `"FALSE"`. Coercion
//! normalizes exactly those keys and leaves every other entry untouched.
//!
//! The policy is deliberately total: any string other than a
//! case-insensitive `"true"` (including `"yes"` and `"1"`) maps to `false`.
//! There is no unrecognized-value error path.

use hookrelay_types::settings::{Settings, SettingValue, keys};

/// The settings keys that carry boolean semantics.
pub const BOOLEAN_SETTING_KEYS: [&str; 3] = [
    keys::EXPLICIT_INPUTS,
    keys::RAW_DATA_OUTPUT,
    keys::JSON_STRING_INPUT,
];

/// Normalize the boolean-semantics settings keys.
///
/// Returns a new map; the input is never mutated. For each reserved key
/// present:
/// - a `Bool` is kept as-is;
/// - a `Text` equal to `"true"` case-insensitively becomes `Bool(true)`,
///   any other string becomes `Bool(false)`;
/// - other value types are left unchanged.
///
/// Absent reserved keys remain absent; non-reserved entries are copied
/// through with their original type and value.
pub fn coerce_boolean_settings(settings: &Settings) -> Settings {
    settings
        .iter()
        .map(|(key, value)| {
            let value = if BOOLEAN_SETTING_KEYS.contains(&key.as_str()) {
                match value {
                    SettingValue::Bool(b) => SettingValue::Bool(*b),
                    SettingValue::Text(s) => SettingValue::Bool(s.eq_ignore_ascii_case("true")),
                    other => other.clone(),
                }
            } else {
                value.clone()
            };
            (key.clone(), value)
        })
        .collect()
}

/// Whether a boolean-ish setting is enabled.
///
/// Accepts both a real `Bool(true)` and the string spelling, so callers
/// that run before coercion (the middleware chain) see the same answer as
/// callers that run after it.
pub fn setting_enabled(settings: &Settings, key: &str) -> bool {
    match settings.get(key) {
        Some(SettingValue::Bool(b)) => *b,
        Some(SettingValue::Text(s)) => s.eq_ignore_ascii_case("true"),
        _ => false,
    }
}

/// Whether a boolean-ish setting is explicitly disabled.
///
/// True only when the key is present and carries a falsy value under the
/// coercion law: `Bool(false)` or any string other than a case-insensitive
/// `"true"`. An absent key is not disabled, it is merely unset.
pub fn setting_disabled(settings: &Settings, key: &str) -> bool {
    match settings.get(key) {
        Some(SettingValue::Bool(b)) => !*b,
        Some(SettingValue::Text(s)) => !s.eq_ignore_ascii_case("true"),
        _ => false,
    }
}
