//! JWT Builder API - fluent entry point over the signing engine

use crate::algorithms::SigningMethod;
use crate::api::algorithms::{sign_jwt, sign_jwt_async};
use crate::claims::ClaimsDocument;
use crate::error::{JwtError, JwtResult};
use crate::types::JwtToken;
use serde_json::Value;
use zeroize::Zeroizing;

/// Direct builder entry point
pub struct Jwt;

impl Jwt {
    /// Create new JWT builder
    #[inline]
    #[must_use]
    pub fn builder() -> JwtBuilder {
        JwtBuilder::new()
    }

    /// Builder preset for HS256
    #[inline]
    #[must_use]
    pub fn hs256() -> JwtBuilder {
        JwtBuilder::new().with_algorithm(SigningMethod::HS256)
    }

    /// Builder preset for RS256
    #[inline]
    #[must_use]
    pub fn rs256() -> JwtBuilder {
        JwtBuilder::new().with_algorithm(SigningMethod::RS256)
    }

    /// Builder preset for ES256
    #[inline]
    #[must_use]
    pub fn es256() -> JwtBuilder {
        JwtBuilder::new().with_algorithm(SigningMethod::ES256)
    }
}

/// Unified JWT builder
///
/// Missing algorithm defaults to HS256; missing key is empty text, which
/// only the unsecured method accepts.
#[derive(Default)]
pub struct JwtBuilder {
    pub(crate) algorithm: Option<SigningMethod>,
    pub(crate) key: Option<Zeroizing<String>>,
    pub(crate) claims: ClaimsDocument,
}

/// JWT builder with error handler
pub struct JwtBuilderWithError<E> {
    inner: JwtBuilder,
    error_handler: E,
}

impl JwtBuilder {
    /// Create new JWT builder
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set signing method
    #[inline]
    #[must_use]
    pub fn with_algorithm(mut self, algorithm: SigningMethod) -> Self {
        self.algorithm = Some(algorithm);
        self
    }

    /// Set signing method from a selector string, falling back to HS256
    #[inline]
    #[must_use]
    pub fn with_selector(self, selector: &str) -> Self {
        self.with_algorithm(SigningMethod::resolve(selector))
    }

    /// Set key text: a shared secret or a PEM private key
    #[inline]
    #[must_use]
    pub fn with_key(mut self, key: &str) -> Self {
        self.key = Some(Zeroizing::new(key.to_string()));
        self
    }

    /// Replace all claims
    #[inline]
    #[must_use]
    pub fn with_claims(mut self, claims: ClaimsDocument) -> Self {
        self.claims = claims;
        self
    }

    /// Add a single claim
    #[inline]
    #[must_use]
    pub fn with_claim(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.claims.insert(key, value);
        self
    }

    /// Add `on_error` handler - transforms errors but passes through success
    #[inline]
    #[must_use]
    pub fn on_error<E>(self, handler: E) -> JwtBuilderWithError<E>
    where
        E: Fn(JwtError) -> JwtError + Send + Sync + 'static,
    {
        JwtBuilderWithError {
            inner: self,
            error_handler: handler,
        }
    }

    /// Sign the configured claims
    ///
    /// # Errors
    /// Any [`JwtError`] raised by [`sign_jwt`].
    pub fn sign(&self) -> JwtResult<JwtToken> {
        sign_jwt(self.get_algorithm(), &self.claims, self.key_text())
    }

    /// Sign the configured claims on tokio's blocking pool
    ///
    /// # Errors
    /// Any [`JwtError`] raised by [`sign_jwt_async`].
    pub async fn sign_async(self) -> JwtResult<JwtToken> {
        let algorithm = self.get_algorithm();
        let key = self.key_text().to_string();
        sign_jwt_async(algorithm, self.claims, key).await
    }

    /// Get algorithm with default fallback
    #[inline]
    #[must_use]
    pub(crate) fn get_algorithm(&self) -> SigningMethod {
        self.algorithm.unwrap_or_default()
    }

    fn key_text(&self) -> &str {
        self.key.as_deref().map_or("", String::as_str)
    }
}

impl<E> JwtBuilderWithError<E>
where
    E: Fn(JwtError) -> JwtError + Send + Sync + 'static,
{
    /// Sign, passing any error through the handler
    ///
    /// # Errors
    /// The handler's output for any signing error.
    pub fn sign(&self) -> JwtResult<JwtToken> {
        self.inner.sign().map_err(&self.error_handler)
    }

    /// Async sign, passing any error through the handler
    ///
    /// # Errors
    /// The handler's output for any signing error.
    pub async fn sign_async(self) -> JwtResult<JwtToken> {
        let Self {
            inner,
            error_handler,
        } = self;
        inner.sign_async().await.map_err(error_handler)
    }
}
