//! Discord interaction middleware.
//!
//! Discord signs every interaction request with ed25519 over
//! `timestamp || body` and expects unauthenticated requests to be rejected
//! with 401, PING interactions (`type: 1`) to be acknowledged with
//! `{"type": 1}`, and `type: 0` probes to get an empty 204.
//!
//! The verification key is the application's hex-encoded public key from
//! the `signature_verification_key` setting.

use ed25519_dalek::{Signature, Verifier, VerifyingKey};
use serde_json::{Value, json};

use hookrelay_types::error::MiddlewareError;
use hookrelay_types::settings::{Settings, keys};

use crate::request::InboundRequest;

use super::EarlyResponse;

const SIGNATURE_HEADER: &str = "x-signature-ed25519";
const TIMESTAMP_HEADER: &str = "x-signature-timestamp";

/// Verifies Discord interaction signatures and answers ping probes.
pub struct DiscordMiddleware {
    verify_key: VerifyingKey,
}

impl DiscordMiddleware {
    /// Build from a hex-encoded 32-byte ed25519 public key.
    pub fn new(signature_verification_key: &str) -> Result<Self, MiddlewareError> {
        let bytes = hex::decode(signature_verification_key).map_err(|e| {
            MiddlewareError::Misconfigured(format!("signature_verification_key is not hex: {e}"))
        })?;
        let bytes: [u8; 32] = bytes.try_into().map_err(|_| {
            MiddlewareError::Misconfigured(
                "signature_verification_key must be 32 bytes".to_string(),
            )
        })?;
        let verify_key = VerifyingKey::from_bytes(&bytes).map_err(|e| {
            MiddlewareError::Misconfigured(format!("invalid ed25519 public key: {e}"))
        })?;
        Ok(Self { verify_key })
    }

    /// Build from the endpoint settings.
    pub fn from_settings(settings: &Settings) -> Result<Self, MiddlewareError> {
        let key = settings
            .text(keys::SIGNATURE_VERIFICATION_KEY)
            .ok_or_else(|| {
                MiddlewareError::Misconfigured(
                    "signature_verification_key is required for the discord middleware"
                        .to_string(),
                )
            })?;
        Self::new(key)
    }

    /// Process a request.
    ///
    /// Returns an early response for unsigned/invalid requests and for
    /// ping probes; `None` lets the invocation proceed.
    pub fn invoke(&self, request: &InboundRequest) -> Option<EarlyResponse> {
        if !self.verify_request(request) {
            tracing::warn!("invalid discord request signature");
            return Some(EarlyResponse::json(
                401,
                json!({ "error": "invalid request signature" }),
            ));
        }

        match request
            .json()
            .and_then(|body| body.get("type"))
            .and_then(Value::as_i64)
        {
            Some(1) => {
                tracing::debug!("discord ping, acknowledging");
                Some(EarlyResponse::json(200, json!({ "type": 1 })))
            }
            Some(0) => Some(EarlyResponse::empty(204)),
            _ => None,
        }
    }

    /// Check the ed25519 signature headers against `timestamp || body`.
    fn verify_request(&self, request: &InboundRequest) -> bool {
        let (Some(signature_hex), Some(timestamp)) = (
            request.header(SIGNATURE_HEADER),
            request.header(TIMESTAMP_HEADER),
        ) else {
            return false;
        };

        let Ok(signature_bytes) = hex::decode(signature_hex) else {
            return false;
        };
        let Ok(signature) = Signature::from_slice(&signature_bytes) else {
            return false;
        };

        let mut message = timestamp.as_bytes().to_vec();
        message.extend_from_slice(request.body());
        self.verify_key.verify(&message, &signature).is_ok()
    }
}
