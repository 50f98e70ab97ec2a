//! JWT Core Algorithm Operations - key parsing, payload validation, signing
//!
//! Signing is all-or-nothing: every failure is returned before any part of
//! the token escapes.

use super::ecdsa::sign_ecdsa;
use super::hmac::{sign_hs256, sign_hs384, sign_hs512};
use super::rsa::{sign_rs256, sign_rs384, sign_rs512};
use super::utils::{encode_segment, join_signature, signing_input};
use crate::algorithms::SigningMethod;
use crate::api::keys::{SigningKey, parse_key};
use crate::claims::ClaimsDocument;
use crate::error::{JwtError, JwtResult};
use crate::types::{JwtHeader, JwtToken};
use zeroize::Zeroizing;

/// Build and sign a compact token.
///
/// # Errors
/// - [`JwtError::KeyParse`] when `key_text` does not fit the method's key family
/// - [`JwtError::InvalidClaimType`] when a registered claim has the wrong shape
/// - [`JwtError::SigningFailed`] when the primitive rejects key or input
pub fn sign_jwt(
    method: SigningMethod,
    claims: &ClaimsDocument,
    key_text: &str,
) -> JwtResult<JwtToken> {
    let key = parse_key(method, key_text)?;
    claims.validate()?;

    let header_b64 = encode_segment(&JwtHeader::new(method))?;
    let payload_b64 = encode_segment(claims)?;
    let message = signing_input(&header_b64, &payload_b64);

    let signature = compute_signature(method, key, &message)?;

    tracing::debug!(%method, claims = claims.len(), "signed token");
    Ok(JwtToken(join_signature(message, &signature)))
}

/// Same as [`sign_jwt`] on tokio's blocking pool.
///
/// # Errors
/// As [`sign_jwt`], plus [`JwtError::TaskFailed`] if the task is cancelled
/// or panics.
pub async fn sign_jwt_async(
    method: SigningMethod,
    claims: ClaimsDocument,
    key_text: String,
) -> JwtResult<JwtToken> {
    let key_text = Zeroizing::new(key_text);
    tokio::task::spawn_blocking(move || sign_jwt(method, &claims, &key_text))
        .await
        .map_err(|e| {
            tracing::error!(%method, error = %e, "JWT signing task failed");
            JwtError::TaskFailed
        })?
}

fn compute_signature(method: SigningMethod, key: SigningKey, message: &str) -> JwtResult<Vec<u8>> {
    match (method, key) {
        (SigningMethod::HS256, SigningKey::Secret(secret)) => sign_hs256(message, &secret),
        (SigningMethod::HS384, SigningKey::Secret(secret)) => sign_hs384(message, &secret),
        (SigningMethod::HS512, SigningKey::Secret(secret)) => sign_hs512(message, &secret),
        (SigningMethod::RS256, SigningKey::Rsa(key)) => sign_rs256(message, *key),
        (SigningMethod::RS384, SigningKey::Rsa(key)) => sign_rs384(message, *key),
        (SigningMethod::RS512, SigningKey::Rsa(key)) => sign_rs512(message, *key),
        (
            SigningMethod::ES256 | SigningMethod::ES384 | SigningMethod::ES512,
            SigningKey::Ec(key),
        ) => sign_ecdsa(method, message, &key),
        (SigningMethod::None, SigningKey::Unsecured) => Ok(Vec::new()),
        (method, _) => Err(JwtError::signing_failed(
            method,
            "key family does not match signing method",
        )),
    }
}
