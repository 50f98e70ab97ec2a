//! Signing method registry
//!
//! Each [`SigningMethod`] is bound to exactly one [`KeyFamily`] and one
//! [`DigestAlgorithm`]. Every dispatch in the crate matches exhaustively on
//! the method, so adding or removing one is a compile-checked change.

use crate::error::JwtError;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use std::fmt;
use std::str::FromStr;

/// Supported JWS signing methods
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SigningMethod {
    /// ECDSA using P-256 and SHA-256
    ES256,
    /// ECDSA using P-384 and SHA-384
    ES384,
    /// ECDSA using P-521 and SHA-512
    ES512,
    /// HMAC using SHA-256
    #[default]
    HS256,
    /// HMAC using SHA-384
    HS384,
    /// HMAC using SHA-512
    HS512,
    /// RSASSA-PKCS1-v1_5 using SHA-256
    RS256,
    /// RSASSA-PKCS1-v1_5 using SHA-384
    RS384,
    /// RSASSA-PKCS1-v1_5 using SHA-512
    RS512,
    /// Unsecured token, empty signature
    None,
}

/// Category of key material a signing method consumes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyFamily {
    /// PEM encoded EC private key (SEC1 or PKCS#8)
    EllipticCurve,
    /// Raw bytes of the key text
    SharedSecret,
    /// PEM encoded RSA private key (PKCS#1 or PKCS#8)
    Rsa,
    /// No key at all
    Unsecured,
}

/// Digest underlying a signing method
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DigestAlgorithm {
    /// SHA-256
    Sha256,
    /// SHA-384
    Sha384,
    /// SHA-512
    Sha512,
}

impl DigestAlgorithm {
    /// Digest output size in bytes
    #[must_use]
    pub const fn output_size(self) -> usize {
        match self {
            DigestAlgorithm::Sha256 => 32,
            DigestAlgorithm::Sha384 => 48,
            DigestAlgorithm::Sha512 => 64,
        }
    }
}

impl SigningMethod {
    /// All methods in selector order
    pub const ALL: [SigningMethod; 10] = [
        SigningMethod::ES256,
        SigningMethod::ES384,
        SigningMethod::ES512,
        SigningMethod::HS256,
        SigningMethod::HS384,
        SigningMethod::HS512,
        SigningMethod::RS256,
        SigningMethod::RS384,
        SigningMethod::RS512,
        SigningMethod::None,
    ];

    /// Selector name as accepted from callers
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            SigningMethod::ES256 => "ES256",
            SigningMethod::ES384 => "ES384",
            SigningMethod::ES512 => "ES512",
            SigningMethod::HS256 => "HS256",
            SigningMethod::HS384 => "HS384",
            SigningMethod::HS512 => "HS512",
            SigningMethod::RS256 => "RS256",
            SigningMethod::RS384 => "RS384",
            SigningMethod::RS512 => "RS512",
            SigningMethod::None => "None",
        }
    }

    /// Header `alg` value (RFC 7518 section 3.1)
    #[must_use]
    pub const fn alg(self) -> &'static str {
        match self {
            SigningMethod::None => "none",
            other => other.name(),
        }
    }

    /// Key family this method parses its key text as
    #[must_use]
    pub const fn family(self) -> KeyFamily {
        match self {
            SigningMethod::ES256 | SigningMethod::ES384 | SigningMethod::ES512 => {
                KeyFamily::EllipticCurve
            }
            SigningMethod::HS256 | SigningMethod::HS384 | SigningMethod::HS512 => {
                KeyFamily::SharedSecret
            }
            SigningMethod::RS256 | SigningMethod::RS384 | SigningMethod::RS512 => KeyFamily::Rsa,
            SigningMethod::None => KeyFamily::Unsecured,
        }
    }

    /// Digest used by the signature primitive, `None` for unsecured tokens
    #[must_use]
    pub const fn digest(self) -> Option<DigestAlgorithm> {
        match self {
            SigningMethod::ES256 | SigningMethod::HS256 | SigningMethod::RS256 => {
                Some(DigestAlgorithm::Sha256)
            }
            SigningMethod::ES384 | SigningMethod::HS384 | SigningMethod::RS384 => {
                Some(DigestAlgorithm::Sha384)
            }
            SigningMethod::ES512 | SigningMethod::HS512 | SigningMethod::RS512 => {
                Some(DigestAlgorithm::Sha512)
            }
            SigningMethod::None => None,
        }
    }

    /// Resolve a caller-supplied selector, falling back to HS256
    ///
    /// Unknown selectors are not rejected here; use [`FromStr`] for strict
    /// parsing.
    #[must_use]
    pub fn resolve(selector: &str) -> Self {
        selector.parse().unwrap_or_else(|_| {
            tracing::warn!(
                selector,
                fallback = SigningMethod::default().name(),
                "unrecognized signing method, using fallback"
            );
            SigningMethod::default()
        })
    }

    /// JSON schema describing the selector
    #[must_use]
    pub fn schema() -> Value {
        let options: Vec<&str> = Self::ALL.iter().map(|m| m.name()).collect();
        json!({
            "type": "string",
            "title": "Signing Method",
            "default": SigningMethod::default().name(),
            "enum": options,
        })
    }
}

impl FromStr for SigningMethod {
    type Err = JwtError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|m| m.name() == s)
            .ok_or_else(|| JwtError::unsupported_algorithm(s))
    }
}

impl fmt::Display for SigningMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
