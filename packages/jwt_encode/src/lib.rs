//! Signed JSON Web Token construction
//!
//! This crate turns an untyped claims document, a signing method and key
//! text into a compact JWS token:
//! - HS256/384/512 over a raw shared secret
//! - RS256/384/512 with a PEM RSA private key (PKCS#1 or PKCS#8)
//! - ES256/384/512 with a PEM EC private key (SEC1 or PKCS#8)
//! - unsecured tokens with an empty signature
//!
//! Output is deterministic: identical inputs produce byte-identical tokens.
//! Verification is out of scope.

pub mod algorithms;
pub mod api;
pub mod claims;
mod error;
mod types;

pub use algorithms::{DigestAlgorithm, KeyFamily, SigningMethod};
pub use api::{builder, encoder, keys};
pub use api::{
    EncodeError, EncodeOutcome, EncodeRequest, EncodeResponse, EncoderSettings, Jwt, JwtBuilder,
    JwtEncoder, recommended_key_size,
};
pub use claims::{ClaimsDocument, NumericDate};
pub use error::*;
pub use types::*;

/// Sign `claims` with `method` using `key_text`.
///
/// # Errors
/// [`JwtError::KeyParse`], [`JwtError::InvalidClaimType`] or
/// [`JwtError::SigningFailed`]; no partial token is produced.
pub fn sign(method: SigningMethod, claims: &ClaimsDocument, key_text: &str) -> JwtResult<JwtToken> {
    api::sign_jwt(method, claims, key_text)
}

/// Async [`sign`] on tokio's blocking pool.
///
/// # Errors
/// As [`sign`], plus [`JwtError::TaskFailed`].
pub async fn sign_async(
    method: SigningMethod,
    claims: ClaimsDocument,
    key_text: String,
) -> JwtResult<JwtToken> {
    api::sign_jwt_async(method, claims, key_text).await
}
