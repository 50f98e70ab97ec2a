//! Request/response boundary of the JWT encoder component
//!
//! The surrounding routing system delivers an [`EncodeRequest`] and receives
//! either a token or, when the error port is enabled, an error message. The
//! request context is opaque here: it is echoed back untouched.

use crate::algorithms::SigningMethod;
use crate::api::algorithms::{sign_jwt, sign_jwt_async};
use crate::claims::ClaimsDocument;
use crate::error::{JwtError, JwtResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Component name as registered with the routing system
pub const COMPONENT_NAME: &str = "jwt_encode";
/// Inbound requests
pub const REQUEST_PORT: &str = "request";
/// Outbound tokens
pub const RESPONSE_PORT: &str = "response";
/// Outbound errors, only when enabled
pub const ERROR_PORT: &str = "error";
/// Inbound settings
pub const SETTINGS_PORT: &str = "_settings";

/// Encoder settings, delivered by the routing system
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EncoderSettings {
    /// Emit failures on the error port instead of failing the call
    #[serde(default)]
    pub enable_error_port: bool,
    /// Reject unknown signing method selectors instead of falling back to HS256
    #[serde(default)]
    pub strict_signing_method: bool,
}

fn default_signing_method() -> String {
    SigningMethod::default().name().to_string()
}

/// Signing request
#[derive(Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EncodeRequest {
    /// Arbitrary value sent back alongside the result
    #[serde(default)]
    pub context: Value,
    /// Signing method selector, e.g. `RS256`
    #[serde(default = "default_signing_method")]
    pub signing_method: String,
    /// Token claims
    #[serde(default)]
    pub claims: ClaimsDocument,
    /// Plain text secret or PEM formatted private key
    #[serde(default)]
    pub key: String,
}

impl fmt::Debug for EncodeRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EncodeRequest")
            .field("context", &self.context)
            .field("signing_method", &self.signing_method)
            .field("claims", &self.claims)
            .field("key", &format_args!("<redacted {} bytes>", self.key.len()))
            .finish()
    }
}

/// Successful signing result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EncodeResponse {
    /// Request context, unchanged
    pub context: Value,
    /// Compact token
    pub token: String,
}

/// Error port message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EncodeError {
    /// Request context, unchanged
    pub context: Value,
    /// Error description
    pub error: String,
}

/// Where a handled request goes
#[derive(Debug, Clone, PartialEq)]
pub enum EncodeOutcome {
    /// Deliver on [`RESPONSE_PORT`]
    Token(EncodeResponse),
    /// Deliver on [`ERROR_PORT`]
    Error(EncodeError),
}

impl EncodeOutcome {
    /// Port this outcome is delivered on
    #[must_use]
    pub fn port(&self) -> &'static str {
        match self {
            EncodeOutcome::Token(_) => RESPONSE_PORT,
            EncodeOutcome::Error(_) => ERROR_PORT,
        }
    }
}

/// Stateless JWT encoder; only the settings persist between requests
#[derive(Debug, Clone, Default)]
pub struct JwtEncoder {
    settings: EncoderSettings,
}

impl JwtEncoder {
    /// Encoder with the given settings
    #[must_use]
    pub fn new(settings: EncoderSettings) -> Self {
        Self { settings }
    }

    /// Current settings
    #[must_use]
    pub fn settings(&self) -> EncoderSettings {
        self.settings
    }

    /// Replace settings, as delivered on [`SETTINGS_PORT`]
    pub fn apply_settings(&mut self, settings: EncoderSettings) {
        tracing::debug!(?settings, "encoder settings updated");
        self.settings = settings;
    }

    /// Ports the routing system should wire for the current settings
    #[must_use]
    pub fn ports(&self) -> Vec<&'static str> {
        let mut ports = vec![REQUEST_PORT, RESPONSE_PORT, SETTINGS_PORT];
        if self.settings.enable_error_port {
            ports.push(ERROR_PORT);
        }
        ports
    }

    /// Resolve the request's selector under the current settings
    ///
    /// # Errors
    /// [`JwtError::UnsupportedAlgorithm`] for an unknown selector in strict mode.
    pub fn resolve_method(&self, selector: &str) -> JwtResult<SigningMethod> {
        if self.settings.strict_signing_method {
            selector.parse()
        } else {
            Ok(SigningMethod::resolve(selector))
        }
    }

    /// Sign the request's claims.
    ///
    /// # Errors
    /// The signing error itself when the error port is disabled; with the port
    /// enabled failures become [`EncodeOutcome::Error`] instead.
    pub fn handle(&self, request: EncodeRequest) -> JwtResult<EncodeOutcome> {
        tracing::debug!(?request, "jwt encode request");

        let result = self
            .resolve_method(&request.signing_method)
            .and_then(|method| sign_jwt(method, &request.claims, &request.key));

        self.route(request.context, result.map(|token| token.into_string()))
    }

    /// Async counterpart of [`JwtEncoder::handle`]
    ///
    /// # Errors
    /// As [`JwtEncoder::handle`], plus [`JwtError::TaskFailed`].
    pub async fn handle_async(&self, request: EncodeRequest) -> JwtResult<EncodeOutcome> {
        tracing::debug!(?request, "jwt encode request");

        let EncodeRequest {
            context,
            signing_method,
            claims,
            key,
        } = request;

        let result = match self.resolve_method(&signing_method) {
            Ok(method) => sign_jwt_async(method, claims, key).await,
            Err(err) => Err(err),
        };

        self.route(context, result.map(|token| token.into_string()))
    }

    fn route(&self, context: Value, result: JwtResult<String>) -> JwtResult<EncodeOutcome> {
        match result {
            Ok(token) => Ok(EncodeOutcome::Token(EncodeResponse { context, token })),
            Err(err) if self.settings.enable_error_port => {
                tracing::warn!(error = %err, "jwt encode failed, routing to error port");
                Ok(EncodeOutcome::Error(EncodeError {
                    context,
                    error: err.to_string(),
                }))
            }
            Err(err) => Err(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_deserializes_with_defaults() {
        let request: EncodeRequest =
            serde_json::from_value(json!({ "claims": { "sub": "user1" }, "key": "secret" }))
                .expect("request");
        assert_eq!(request.signing_method, "HS256");
        assert_eq!(request.context, Value::Null);
        assert_eq!(request.claims.subject().as_deref(), Ok("user1"));
    }

    #[test]
    fn debug_output_redacts_key() {
        let request = EncodeRequest {
            context: json!("ctx"),
            signing_method: "HS256".into(),
            claims: ClaimsDocument::new(),
            key: "super-secret-value".into(),
        };
        let rendered = format!("{request:?}");
        assert!(!rendered.contains("super-secret-value"));
        assert!(rendered.contains("redacted 18 bytes"));
    }

    #[test]
    fn error_port_is_listed_only_when_enabled() {
        assert!(!JwtEncoder::default().ports().contains(&ERROR_PORT));
        let encoder = JwtEncoder::new(EncoderSettings {
            enable_error_port: true,
            ..EncoderSettings::default()
        });
        assert!(encoder.ports().contains(&ERROR_PORT));
    }

    #[test]
    fn settings_use_camel_case() {
        let settings: EncoderSettings =
            serde_json::from_value(json!({ "enableErrorPort": true })).expect("settings");
        assert!(settings.enable_error_port);
        assert!(!settings.strict_signing_method);
    }
}
