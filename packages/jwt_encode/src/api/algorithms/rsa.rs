//! RSA-based JWT Algorithm Implementations
//!
//! RSASSA-PKCS1-v1_5 signing (RS256, RS384, RS512). PKCS#1 v1.5 padding is
//! deterministic, so a given key and message always yield the same signature.

use crate::algorithms::SigningMethod;
use crate::error::{JwtError, JwtResult};
use rsa::RsaPrivateKey;
use rsa::pkcs1v15::SigningKey;
use rsa::sha2::{Sha256, Sha384, Sha512};
use rsa::signature::{SignatureEncoding, Signer};

/// Sign with RSA-SHA256 (RS256)
#[inline]
pub(crate) fn sign_rs256(message: &str, private_key: RsaPrivateKey) -> JwtResult<Vec<u8>> {
    let signing_key = SigningKey::<Sha256>::new(private_key);
    let signature = signing_key
        .try_sign(message.as_bytes())
        .map_err(|e| JwtError::signing_failed(SigningMethod::RS256, e))?;
    Ok(signature.to_vec())
}

/// Sign with RSA-SHA384 (RS384)
#[inline]
pub(crate) fn sign_rs384(message: &str, private_key: RsaPrivateKey) -> JwtResult<Vec<u8>> {
    let signing_key = SigningKey::<Sha384>::new(private_key);
    let signature = signing_key
        .try_sign(message.as_bytes())
        .map_err(|e| JwtError::signing_failed(SigningMethod::RS384, e))?;
    Ok(signature.to_vec())
}

/// Sign with RSA-SHA512 (RS512)
#[inline]
pub(crate) fn sign_rs512(message: &str, private_key: RsaPrivateKey) -> JwtResult<Vec<u8>> {
    let signing_key = SigningKey::<Sha512>::new(private_key);
    let signature = signing_key
        .try_sign(message.as_bytes())
        .map_err(|e| JwtError::signing_failed(SigningMethod::RS512, e))?;
    Ok(signature.to_vec())
}
