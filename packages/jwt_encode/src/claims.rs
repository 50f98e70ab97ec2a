//! Untyped claims document with typed accessors for the registered claims.

use crate::error::{JwtError, JwtResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

const NANOS_PER_SEC: i64 = 1_000_000_000;

/// Seconds since the Unix epoch with sub-second precision.
///
/// `subsec_nanos` is always in `[0, 1e9)`; negative fractional inputs borrow
/// one second.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NumericDate {
    seconds: i64,
    nanos: u32,
}

impl NumericDate {
    /// Build from whole seconds and nanoseconds, normalizing out-of-range nanos.
    #[must_use]
    pub fn new(seconds: i64, nanos: i64) -> Self {
        let seconds = seconds.saturating_add(nanos.div_euclid(NANOS_PER_SEC));
        let nanos = nanos.rem_euclid(NANOS_PER_SEC);
        Self {
            seconds,
            nanos: u32::try_from(nanos).unwrap_or_default(),
        }
    }

    /// Split a fractional seconds value into whole seconds and truncated nanoseconds.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn from_seconds_f64(value: f64) -> Self {
        let whole = value.trunc();
        let frac = value - whole;
        Self::new(whole as i64, (frac * 1e9) as i64)
    }

    /// Whole seconds since the epoch
    #[must_use]
    pub fn seconds(&self) -> i64 {
        self.seconds
    }

    /// Fractional part in nanoseconds
    #[must_use]
    pub fn subsec_nanos(&self) -> u32 {
        self.nanos
    }

    /// Convert to a UTC timestamp, `None` when outside chrono's range
    #[must_use]
    pub fn to_datetime(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.seconds, self.nanos)
    }
}

impl From<DateTime<Utc>> for NumericDate {
    fn from(dt: DateTime<Utc>) -> Self {
        Self::new(dt.timestamp(), i64::from(dt.timestamp_subsec_nanos()))
    }
}

/// Caller-supplied claims, serialized verbatim as the token payload.
///
/// Registered claims are read on demand through the typed accessors; nothing
/// is materialized or rewritten.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClaimsDocument(Map<String, Value>);

impl ClaimsDocument {
    /// Empty claims document
    #[must_use]
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Add a claim, replacing any previous value under the same key
    #[must_use]
    pub fn with_claim(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Insert a claim, returning the value it replaced
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(key.into(), value.into())
    }

    /// Raw claim value
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Number of claims
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the document holds no claims
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Backing map
    #[must_use]
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Consume into the backing map
    #[must_use]
    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }

    /// `exp` claim
    ///
    /// # Errors
    /// [`JwtError::InvalidClaimType`] when present and not a number.
    pub fn expiration_time(&self) -> JwtResult<Option<NumericDate>> {
        self.numeric_date("exp")
    }

    /// `nbf` claim
    ///
    /// # Errors
    /// [`JwtError::InvalidClaimType`] when present and not a number.
    pub fn not_before(&self) -> JwtResult<Option<NumericDate>> {
        self.numeric_date("nbf")
    }

    /// `iat` claim
    ///
    /// # Errors
    /// [`JwtError::InvalidClaimType`] when present and not a number.
    pub fn issued_at(&self) -> JwtResult<Option<NumericDate>> {
        self.numeric_date("iat")
    }

    /// `aud` claim, a single string is widened to a one-element list
    ///
    /// # Errors
    /// [`JwtError::InvalidClaimType`] for a list holding a non-string.
    pub fn audience(&self) -> JwtResult<Vec<String>> {
        self.string_list("aud")
    }

    /// `iss` claim, empty when absent
    ///
    /// # Errors
    /// [`JwtError::InvalidClaimType`] when present and not a string.
    pub fn issuer(&self) -> JwtResult<String> {
        self.string_claim("iss")
    }

    /// `sub` claim, empty when absent
    ///
    /// # Errors
    /// [`JwtError::InvalidClaimType`] when present and not a string.
    pub fn subject(&self) -> JwtResult<String> {
        self.string_claim("sub")
    }

    /// `jti` claim, empty when absent
    ///
    /// # Errors
    /// [`JwtError::InvalidClaimType`] when present and not a string.
    pub fn jwt_id(&self) -> JwtResult<String> {
        self.string_claim("jti")
    }

    /// Read `key` as a numeric date.
    ///
    /// Absent keys and a numeric value of exactly zero both read as `None`.
    ///
    /// # Errors
    /// [`JwtError::InvalidClaimType`] for any non-numeric value, `null` included.
    pub fn numeric_date(&self, key: &str) -> JwtResult<Option<NumericDate>> {
        match self.0.get(key) {
            None => Ok(None),
            Some(Value::Number(n)) => match n.as_f64() {
                Some(secs) if secs == 0.0 => Ok(None),
                Some(secs) => Ok(Some(NumericDate::from_seconds_f64(secs))),
                None => Err(JwtError::invalid_claim_type(key)),
            },
            Some(_) => Err(JwtError::invalid_claim_type(key)),
        }
    }

    /// Read `key` as a string or list of strings.
    ///
    /// Any other JSON type, `null` included, reads as an empty list.
    ///
    /// # Errors
    /// [`JwtError::InvalidClaimType`] for a list holding a non-string.
    pub fn string_list(&self, key: &str) -> JwtResult<Vec<String>> {
        match self.0.get(key) {
            None => Ok(Vec::new()),
            Some(Value::String(s)) => Ok(vec![s.clone()]),
            Some(Value::Array(items)) => items
                .iter()
                .map(|item| {
                    item.as_str()
                        .map(str::to_string)
                        .ok_or_else(|| JwtError::invalid_claim_type(key))
                })
                .collect(),
            Some(_) => Ok(Vec::new()),
        }
    }

    /// Read `key` as a string, empty when absent.
    ///
    /// # Errors
    /// [`JwtError::InvalidClaimType`] when present and not a string.
    pub fn string_claim(&self, key: &str) -> JwtResult<String> {
        match self.0.get(key) {
            None => Ok(String::new()),
            Some(Value::String(s)) => Ok(s.clone()),
            Some(_) => Err(JwtError::invalid_claim_type(key)),
        }
    }

    /// Check every registered claim has an acceptable shape.
    ///
    /// # Errors
    /// The first [`JwtError::InvalidClaimType`] found, in `exp`, `nbf`, `iat`,
    /// `aud`, `iss`, `sub`, `jti` order.
    pub fn validate(&self) -> JwtResult<()> {
        self.expiration_time()?;
        self.not_before()?;
        self.issued_at()?;
        self.audience()?;
        self.issuer()?;
        self.subject()?;
        self.jwt_id()?;
        Ok(())
    }

    /// JSON schema of the registered claims, used by editors of the document
    #[must_use]
    pub fn schema() -> Value {
        json!({
            "type": "object",
            "properties": {
                "sub": { "title": "Subject", "type": "string" },
                "iss": { "title": "Issuer", "type": "string" },
                "aud": {
                    "title": "Audience",
                    "type": "array",
                    "items": { "type": "string" }
                },
                "exp": {
                    "title": "ExpiresAt",
                    "type": "integer",
                    "description": "Expiration time"
                },
                "nbf": { "title": "NotBefore", "type": "integer" },
                "iat": { "title": "IssuedAt", "type": "integer" },
                "jti": { "title": "ID", "type": "string" }
            }
        })
    }
}

impl From<Map<String, Value>> for ClaimsDocument {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl TryFrom<Value> for ClaimsDocument {
    type Error = JwtError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            other => Err(JwtError::invalid_claims(&format!(
                "claims must be a JSON object, got {}",
                json_type_name(&other)
            ))),
        }
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(value: Value) -> ClaimsDocument {
        ClaimsDocument::try_from(value).expect("object literal")
    }

    #[test]
    fn zero_date_reads_as_absent() {
        let claims = doc(json!({ "exp": 0, "nbf": 0.0 }));
        assert_eq!(claims.expiration_time(), Ok(None));
        assert_eq!(claims.not_before(), Ok(None));
        assert_eq!(claims.issued_at(), Ok(None));
    }

    #[test]
    fn fractional_date_is_split() {
        let claims = doc(json!({ "exp": 1_700_000_000.5 }));
        let exp = claims.expiration_time().expect("numeric").expect("present");
        assert_eq!(exp.seconds(), 1_700_000_000);
        assert_eq!(exp.subsec_nanos(), 500_000_000);
    }

    #[test]
    fn negative_fraction_borrows_a_second() {
        let date = NumericDate::from_seconds_f64(-1.5);
        assert_eq!(date.seconds(), -2);
        assert_eq!(date.subsec_nanos(), 500_000_000);
    }

    #[test]
    fn non_numeric_date_is_rejected() {
        for bad in [json!("1700000000"), json!(null), json!(true), json!([1])] {
            let claims = doc(json!({ "iat": bad }));
            assert_eq!(
                claims.issued_at(),
                Err(JwtError::InvalidClaimType { claim: "iat".into() })
            );
        }
    }

    #[test]
    fn audience_shapes() {
        assert_eq!(doc(json!({ "aud": "api" })).audience(), Ok(vec!["api".into()]));
        assert_eq!(
            doc(json!({ "aud": ["a", "b"] })).audience(),
            Ok(vec!["a".into(), "b".into()])
        );
        assert_eq!(doc(json!({})).audience(), Ok(vec![]));
        assert_eq!(doc(json!({ "aud": [] })).audience(), Ok(vec![]));
        assert_eq!(
            doc(json!({ "aud": [1, 2] })).audience(),
            Err(JwtError::invalid_claim_type("aud"))
        );
        assert_eq!(
            doc(json!({ "aud": ["a", 2] })).audience(),
            Err(JwtError::invalid_claim_type("aud"))
        );
        // scalars, objects and null carry no audience
        assert_eq!(doc(json!({ "aud": 7 })).audience(), Ok(vec![]));
        assert_eq!(doc(json!({ "aud": null })).audience(), Ok(vec![]));
        assert_eq!(doc(json!({ "aud": { "a": "b" } })).audience(), Ok(vec![]));
    }

    #[test]
    fn string_claims_default_to_empty() {
        let claims = doc(json!({ "sub": "user1" }));
        assert_eq!(claims.subject().as_deref(), Ok("user1"));
        assert_eq!(claims.issuer().as_deref(), Ok(""));
        assert_eq!(claims.jwt_id().as_deref(), Ok(""));

        let claims = doc(json!({ "iss": 42 }));
        assert_eq!(claims.issuer(), Err(JwtError::invalid_claim_type("iss")));
    }

    #[test]
    fn validate_reports_first_bad_claim() {
        let claims = doc(json!({ "sub": 1, "exp": "soon" }));
        assert_eq!(claims.validate(), Err(JwtError::invalid_claim_type("exp")));

        let claims = doc(json!({ "sub": "user1", "custom": { "nested": [1, null] } }));
        assert_eq!(claims.validate(), Ok(()));
    }

    #[test]
    fn non_object_claims_are_rejected() {
        let err = ClaimsDocument::try_from(json!(["sub"])).expect_err("array");
        assert!(matches!(err, JwtError::InvalidClaims(_)));
    }

    #[test]
    fn datetime_conversion() {
        let date = NumericDate::new(1_700_000_000, 250);
        let dt = date.to_datetime().expect("in range");
        assert_eq!(NumericDate::from(dt), date);
    }
}
