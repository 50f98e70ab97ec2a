//! JWT encoding error types

use crate::algorithms::SigningMethod;
use thiserror::Error;

/// JWT operation result type
pub type JwtResult<T> = Result<T, JwtError>;

/// JWT encoding errors
///
/// Every variant is terminal for the call that produced it. Signing is
/// all-or-nothing, so no partial token accompanies any of these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JwtError {
    /// A registered claim holds a value of the wrong JSON type
    #[error("token has invalid claims: {claim} is invalid")]
    InvalidClaimType {
        /// Name of the offending claim
        claim: String,
    },

    /// Key text does not have the structure the signing method requires
    #[error("key is invalid for {method}: {reason}")]
    KeyParse {
        /// Method the key was parsed for
        method: SigningMethod,
        /// Underlying parse failure
        reason: String,
    },

    /// The signature primitive rejected the key or input
    #[error("{method} signing failed: {reason}")]
    SigningFailed {
        /// Method that was signing
        method: SigningMethod,
        /// Underlying primitive failure
        reason: String,
    },

    /// Signing method selector outside the supported set
    #[error("Unsupported algorithm: {0}")]
    UnsupportedAlgorithm(String),

    /// Claims value is not a JSON object
    #[error("Invalid claims: {0}")]
    InvalidClaims(String),

    /// JSON encoding failed
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Background signing task failed
    #[error("Background task failed")]
    TaskFailed,
}

/// Coarse classification of [`JwtError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// See [`JwtError::InvalidClaimType`]
    InvalidClaimType,
    /// See [`JwtError::KeyParse`]
    KeyParse,
    /// See [`JwtError::SigningFailed`]
    SigningFailed,
    /// Anything else
    Other,
}

impl JwtError {
    /// Create an invalid claim type error
    #[inline]
    #[must_use]
    pub fn invalid_claim_type(claim: &str) -> Self {
        JwtError::InvalidClaimType {
            claim: claim.to_string(),
        }
    }

    /// Create a key parse error
    #[inline]
    #[must_use]
    pub fn key_parse(method: SigningMethod, reason: impl std::fmt::Display) -> Self {
        JwtError::KeyParse {
            method,
            reason: reason.to_string(),
        }
    }

    /// Create a signing failure error
    #[inline]
    #[must_use]
    pub fn signing_failed(method: SigningMethod, reason: impl std::fmt::Display) -> Self {
        JwtError::SigningFailed {
            method,
            reason: reason.to_string(),
        }
    }

    /// Create an unsupported algorithm error
    #[inline]
    #[must_use]
    pub fn unsupported_algorithm(alg: &str) -> Self {
        JwtError::UnsupportedAlgorithm(alg.to_string())
    }

    /// Create an invalid claims error
    #[inline]
    #[must_use]
    pub fn invalid_claims(msg: &str) -> Self {
        JwtError::InvalidClaims(msg.to_string())
    }

    /// Classify this error
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            JwtError::InvalidClaimType { .. } => ErrorKind::InvalidClaimType,
            JwtError::KeyParse { .. } => ErrorKind::KeyParse,
            JwtError::SigningFailed { .. } => ErrorKind::SigningFailed,
            JwtError::UnsupportedAlgorithm(_)
            | JwtError::InvalidClaims(_)
            | JwtError::Serialization(_)
            | JwtError::TaskFailed => ErrorKind::Other,
        }
    }
}

impl From<serde_json::Error> for JwtError {
    fn from(err: serde_json::Error) -> Self {
        JwtError::Serialization(err.to_string())
    }
}
