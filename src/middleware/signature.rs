// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Discord interaction signature verification.
//!
//! Discord signs every interaction with Ed25519 over
//! `X-Signature-Timestamp || body`. Requests that fail verification are
//! rejected before the body is parsed.

use crate::AppState;
use axum::{
    body::Body,
    extract::{Request, State},
    http::{HeaderMap, StatusCode},
    middleware::Next,
    response::Response,
};
use ring::signature::{UnparsedPublicKey, ED25519};
use std::sync::Arc;

pub const SIGNATURE_HEADER: &str = "x-signature-ed25519";
pub const TIMESTAMP_HEADER: &str = "x-signature-timestamp";

/// Interactions are small; anything bigger is not from Discord.
const MAX_BODY_BYTES: usize = 64 * 1024;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SignatureError {
    #[error("missing header {0}")]
    MissingHeader(&'static str),

    #[error("signature is not valid hex")]
    InvalidHex,

    #[error("signature does not match")]
    Mismatch,
}

/// Verify an Ed25519 signature over `timestamp || body`.
pub fn verify_signature(
    public_key: &[u8],
    signature_hex: &str,
    timestamp: &str,
    body: &[u8],
) -> Result<(), SignatureError> {
    let signature = hex::decode(signature_hex).map_err(|_| SignatureError::InvalidHex)?;

    let mut message = Vec::with_capacity(timestamp.len() + body.len());
    message.extend_from_slice(timestamp.as_bytes());
    message.extend_from_slice(body);

    UnparsedPublicKey::new(&ED25519, public_key)
        .verify(&message, &signature)
        .map_err(|_| SignatureError::Mismatch)
}

fn header<'a>(headers: &'a HeaderMap, name: &'static str) -> Result<&'a str, SignatureError> {
    headers
        .get(name)
        .and_then(|h| h.to_str().ok())
        .ok_or(SignatureError::MissingHeader(name))
}

/// Middleware that requires a valid Discord signature.
pub async fn require_discord_signature(
    State(state): State<Arc<AppState>>,
    request: Request,
    next: Next,
) -> Result<Response, StatusCode> {
    let (parts, body) = request.into_parts();

    let bytes = axum::body::to_bytes(body, MAX_BODY_BYTES)
        .await
        .map_err(|_| StatusCode::PAYLOAD_TOO_LARGE)?;

    let verified = header(&parts.headers, SIGNATURE_HEADER).and_then(|signature| {
        let timestamp = header(&parts.headers, TIMESTAMP_HEADER)?;
        verify_signature(&state.config.discord_public_key, signature, timestamp, &bytes)
    });

    if let Err(e) = verified {
        tracing::warn!(reason = %e, "Blocked interaction with invalid signature");
        return Err(StatusCode::UNAUTHORIZED);
    }

    Ok(next.run(Request::from_parts(parts, Body::from(bytes))).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ring::rand::SystemRandom;
    use ring::signature::{Ed25519KeyPair, KeyPair};

    fn key_pair() -> Ed25519KeyPair {
        let pkcs8 = Ed25519KeyPair::generate_pkcs8(&SystemRandom::new()).unwrap();
        Ed25519KeyPair::from_pkcs8(pkcs8.as_ref()).unwrap()
    }

    #[test]
    fn test_valid_signature() {
        let kp = key_pair();
        let body: &[u8] = br#"{"type":1}"#;
        let signature = kp.sign(&[b"1700000000".as_slice(), body].concat());

        let result = verify_signature(
            kp.public_key().as_ref(),
            &hex::encode(signature.as_ref()),
            "1700000000",
            body,
        );
        assert_eq!(result, Ok(()));
    }

    #[test]
    fn test_tampered_body_rejected() {
        let kp = key_pair();
        let signature = kp.sign(b"1700000000{\"type\":1}");

        let result = verify_signature(
            kp.public_key().as_ref(),
            &hex::encode(signature.as_ref()),
            "1700000000",
            b"{\"type\":2}",
        );
        assert_eq!(result, Err(SignatureError::Mismatch));
    }

    #[test]
    fn test_non_hex_signature_rejected() {
        let kp = key_pair();
        let result = verify_signature(kp.public_key().as_ref(), "not-hex", "1", b"{}");
        assert_eq!(result, Err(SignatureError::InvalidHex));
    }
}
