//! ECDSA-based JWT Algorithm Implementations
//!
//! ES256, ES384 and ES512. Nonces are derived per RFC 6979, and signatures are
//! emitted in the fixed-size `r || s` form JWS requires (RFC 7518 section 3.4),
//! not ASN.1 DER.

use crate::algorithms::SigningMethod;
use crate::api::keys::EcPrivateKey;
use crate::error::{JwtError, JwtResult};
use ecdsa::hazmat::{SignPrimitive, bits2field};
use p256::ecdsa::signature::Signer;
use p521::NistP521;
use sha2::{Digest, Sha512};

/// Sign with the curve matching `method`
///
/// # Errors
/// [`JwtError::SigningFailed`] when the key's curve does not belong to the
/// method, or the primitive fails.
pub(crate) fn sign_ecdsa(
    method: SigningMethod,
    message: &str,
    private_key: &EcPrivateKey,
) -> JwtResult<Vec<u8>> {
    match (method, private_key) {
        (SigningMethod::ES256, EcPrivateKey::P256(key)) => sign_es256(message, key),
        (SigningMethod::ES384, EcPrivateKey::P384(key)) => sign_es384(message, key),
        (SigningMethod::ES512, EcPrivateKey::P521(key)) => sign_es512(message, key),
        (method, key) => Err(JwtError::signing_failed(
            method,
            format!("key is on curve {}", key.curve_name()),
        )),
    }
}

/// Sign with ECDSA P-256 (ES256), 64-byte signature
#[inline]
fn sign_es256(message: &str, private_key: &p256::SecretKey) -> JwtResult<Vec<u8>> {
    let signing_key = p256::ecdsa::SigningKey::from(private_key);
    let signature: p256::ecdsa::Signature = signing_key
        .try_sign(message.as_bytes())
        .map_err(|e| JwtError::signing_failed(SigningMethod::ES256, e))?;
    Ok(signature.to_bytes().to_vec())
}

/// Sign with ECDSA P-384 (ES384), 96-byte signature
#[inline]
fn sign_es384(message: &str, private_key: &p384::SecretKey) -> JwtResult<Vec<u8>> {
    let signing_key = p384::ecdsa::SigningKey::from(private_key);
    let signature: p384::ecdsa::Signature = signing_key
        .try_sign(message.as_bytes())
        .map_err(|e| JwtError::signing_failed(SigningMethod::ES384, e))?;
    Ok(signature.to_bytes().to_vec())
}

/// Sign with ECDSA P-521 (ES512), 132-byte signature
///
/// `p521::ecdsa::SigningKey` draws its nonce from the OS RNG, so the RFC 6979
/// nonce is derived here over the SHA-512 prehash instead.
#[inline]
fn sign_es512(message: &str, private_key: &p521::SecretKey) -> JwtResult<Vec<u8>> {
    let prehash = Sha512::digest(message.as_bytes());
    let z = bits2field::<NistP521>(&prehash)
        .map_err(|e| JwtError::signing_failed(SigningMethod::ES512, e))?;
    let scalar = private_key.to_nonzero_scalar();
    let (signature, _) =
        SignPrimitive::<NistP521>::try_sign_prehashed_rfc6979::<Sha512>(&*scalar, &z, &[])
            .map_err(|e| JwtError::signing_failed(SigningMethod::ES512, e))?;
    Ok(signature.to_bytes().to_vec())
}
