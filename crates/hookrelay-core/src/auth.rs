//! Inbound API-key validation.
//!
//! Validation is driven entirely by the endpoint settings:
//! `api_key_location` selects where the key is read from, `api_key` holds
//! the expected value, and an explicit `api_key_required = false` (any
//! falsy spelling) disables the check. Comparison is constant-time.

use hookrelay_types::error::AuthError;
use hookrelay_types::settings::{Settings, keys};

use crate::request::InboundRequest;
use crate::settings::setting_disabled;

/// Header carrying the inbound API key.
const API_KEY_HEADER: &str = "x-api-key";
/// Query parameter carrying the inbound API key.
const API_KEY_QUERY_PARAM: &str = "api_key";

/// Validate the request's API key against the endpoint settings.
///
/// - Skipped entirely when `api_key_required` is explicitly false (boolean
///   or string spelling, per the coercion law), or when no
///   `api_key_location` is configured.
/// - A configured location without a configured (non-empty) `api_key` is a
///   [`AuthError::Misconfigured`] server-side failure.
/// - A missing or mismatching key is [`AuthError::Invalid`].
pub fn validate_api_key(request: &InboundRequest, settings: &Settings) -> Result<(), AuthError> {
    if setting_disabled(settings, keys::API_KEY_REQUIRED) {
        return Ok(());
    }

    let Some(location) = settings.text(keys::API_KEY_LOCATION) else {
        return Ok(());
    };

    let expected = settings
        .text(keys::API_KEY)
        .filter(|key| !key.is_empty())
        .ok_or_else(|| AuthError::Misconfigured("api_key is not configured".to_string()))?;

    let provided = match location {
        "api_key_header" => request.header(API_KEY_HEADER),
        "api_key_query_param" => request.query_param(API_KEY_QUERY_PARAM),
        other => {
            return Err(AuthError::Misconfigured(format!(
                "unknown api_key_location: {other}"
            )));
        }
    };

    match provided {
        Some(key) if constant_time_eq(expected.as_bytes(), key.as_bytes()) => Ok(()),
        _ => {
            tracing::warn!("inbound API key validation failed");
            Err(AuthError::Invalid)
        }
    }
}

/// Constant-time byte comparison to prevent timing attacks.
fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b.iter()).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}
