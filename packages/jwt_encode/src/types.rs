//! JWT header and token types

use crate::algorithms::SigningMethod;
use serde::{Deserialize, Serialize};

/// JOSE header of an emitted token; fields serialize as `alg`, `typ`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JwtHeader {
    /// Signature algorithm identifier
    pub alg: String,
    /// Token type, always `JWT`
    pub typ: String,
}

impl JwtHeader {
    /// Header for the given method
    #[must_use]
    pub fn new(method: SigningMethod) -> Self {
        Self {
            alg: method.alg().to_string(),
            typ: "JWT".to_string(),
        }
    }
}

/// Compact serialized token: `header.payload.signature`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct JwtToken(pub String);

impl JwtToken {
    /// The three base64url segments, `None` if the token is not three segments
    #[must_use]
    pub fn parts(&self) -> Option<(&str, &str, &str)> {
        let mut segments = self.0.splitn(3, '.');
        let header = segments.next()?;
        let payload = segments.next()?;
        let signature = segments.next()?;
        if signature.contains('.') {
            return None;
        }
        Some((header, payload, signature))
    }

    /// Token text
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume into the token text
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl From<String> for JwtToken {
    fn from(token: String) -> Self {
        Self(token)
    }
}

impl AsRef<str> for JwtToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for JwtToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
