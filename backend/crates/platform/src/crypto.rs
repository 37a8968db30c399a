//! Cryptographic Utilities
//!
//! Random secrets and HMAC-SHA256 signed tokens of the form
//! `<payload>.<base64url(signature)>`.

use base64::{Engine, engine::general_purpose};
use hmac::{Hmac, Mac};
use rand::{RngCore, rngs::OsRng};
use sha2::Sha256;
use thiserror::Error;

type HmacSha256 = Hmac<Sha256>;

/// Length of generated signing secrets
pub const SECRET_LENGTH: usize = 32;

/// Token signing / verification errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    #[error("Signing key rejected")]
    InvalidKey,

    #[error("Token is malformed")]
    Malformed,

    #[error("Token signature mismatch")]
    BadSignature,
}

/// Generate a fresh signing secret
pub fn random_secret() -> [u8; SECRET_LENGTH] {
    let mut secret = [0u8; SECRET_LENGTH];
    OsRng.fill_bytes(&mut secret);
    secret
}

/// Decode standard (padded) base64, e.g. a configured secret
pub fn from_base64(s: &str) -> Result<Vec<u8>, base64::DecodeError> {
    general_purpose::STANDARD.decode(s)
}

fn mac_for(secret: &[u8], payload: &str) -> Result<HmacSha256, TokenError> {
    let mut mac = HmacSha256::new_from_slice(secret).map_err(|_| TokenError::InvalidKey)?;
    mac.update(payload.as_bytes());
    Ok(mac)
}

/// Sign `payload`, producing `<payload>.<signature>`
///
/// `payload` must not contain `.`.
pub fn sign_token(secret: &[u8], payload: &str) -> Result<String, TokenError> {
    if payload.contains('.') {
        return Err(TokenError::Malformed);
    }
    let signature = mac_for(secret, payload)?.finalize().into_bytes();
    Ok(format!(
        "{}.{}",
        payload,
        general_purpose::URL_SAFE_NO_PAD.encode(signature)
    ))
}

/// Verify a signed token and return its payload
///
/// Signature comparison is constant-time.
pub fn verify_token<'a>(secret: &[u8], token: &'a str) -> Result<&'a str, TokenError> {
    let (payload, signature_b64) = token.split_once('.').ok_or(TokenError::Malformed)?;
    if payload.is_empty() || signature_b64.contains('.') {
        return Err(TokenError::Malformed);
    }

    let signature = general_purpose::URL_SAFE_NO_PAD
        .decode(signature_b64)
        .map_err(|_| TokenError::Malformed)?;

    mac_for(secret, payload)?
        .verify_slice(&signature)
        .map_err(|_| TokenError::BadSignature)?;

    Ok(payload)
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEY: &[u8] = b"0123456789abcdef0123456789abcdef";

    #[test]
    fn test_random_secret() {
        assert_ne!(random_secret(), random_secret());
    }

    #[test]
    fn test_sign_and_verify() {
        let token = sign_token(KEY, "c0ffee").unwrap();
        assert!(token.starts_with("c0ffee."));
        assert_eq!(verify_token(KEY, &token), Ok("c0ffee"));
    }

    #[test]
    fn test_wrong_key_rejected() {
        let token = sign_token(KEY, "c0ffee").unwrap();
        assert_eq!(
            verify_token(b"another-key", &token),
            Err(TokenError::BadSignature)
        );
    }

    #[test]
    fn test_tampered_payload_rejected() {
        let token = sign_token(KEY, "c0ffee").unwrap();
        let tampered = token.replacen("c0ffee", "decade", 1);
        assert_eq!(verify_token(KEY, &tampered), Err(TokenError::BadSignature));
    }

    #[test]
    fn test_malformed_tokens() {
        assert_eq!(verify_token(KEY, "no-dot"), Err(TokenError::Malformed));
        assert_eq!(verify_token(KEY, ".sig"), Err(TokenError::Malformed));
        assert_eq!(verify_token(KEY, "a.b.c"), Err(TokenError::Malformed));
        assert_eq!(verify_token(KEY, "a.!!!"), Err(TokenError::Malformed));
        assert_eq!(sign_token(KEY, "a.b"), Err(TokenError::Malformed));
    }

    #[test]
    fn test_from_base64() {
        assert_eq!(from_base64("aGVsbG8gd29ybGQ=").unwrap(), b"hello world");
        assert!(from_base64("not base64!").is_err());
    }
}
