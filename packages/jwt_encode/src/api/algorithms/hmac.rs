//! HMAC-based JWT Algorithm Implementations
//!
//! HS256, HS384 and HS512 over the raw bytes of the shared secret.

use crate::algorithms::SigningMethod;
use crate::error::{JwtError, JwtResult};
use hmac::{Hmac, Mac};
use sha2::{Sha256, Sha384, Sha512};

type HmacSha256 = Hmac<Sha256>;
type HmacSha384 = Hmac<Sha384>;
type HmacSha512 = Hmac<Sha512>;

/// Sign with HMAC-SHA256 (HS256)
#[inline]
pub(crate) fn sign_hs256(message: &str, secret: &[u8]) -> JwtResult<Vec<u8>> {
    let mut mac = HmacSha256::new_from_slice(secret)
        .map_err(|e| JwtError::signing_failed(SigningMethod::HS256, e))?;
    mac.update(message.as_bytes());
    Ok(mac.finalize().into_bytes().to_vec())
}

/// Sign with HMAC-SHA384 (HS384)
#[inline]
pub(crate) fn sign_hs384(message: &str, secret: &[u8]) -> JwtResult<Vec<u8>> {
    let mut mac = HmacSha384::new_from_slice(secret)
        .map_err(|e| JwtError::signing_failed(SigningMethod::HS384, e))?;
    mac.update(message.as_bytes());
    Ok(mac.finalize().into_bytes().to_vec())
}

/// Sign with HMAC-SHA512 (HS512)
#[inline]
pub(crate) fn sign_hs512(message: &str, secret: &[u8]) -> JwtResult<Vec<u8>> {
    let mut mac = HmacSha512::new_from_slice(secret)
        .map_err(|e| JwtError::signing_failed(SigningMethod::HS512, e))?;
    mac.update(message.as_bytes());
    Ok(mac.finalize().into_bytes().to_vec())
}
