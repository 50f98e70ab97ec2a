//! JWT Algorithm Utilities - base64url segments and compact joining

use crate::error::JwtResult;
use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use serde::Serialize;

/// Base64 URL-safe encoding without padding (RFC 7515)
#[inline]
pub(crate) fn base64_url_encode(input: &[u8]) -> String {
    URL_SAFE_NO_PAD.encode(input)
}

/// Compact JSON, then base64url
pub(crate) fn encode_segment<T: Serialize + ?Sized>(value: &T) -> JwtResult<String> {
    let json = serde_json::to_vec(value)?;
    Ok(base64_url_encode(&json))
}

/// `header.payload`, the bytes every signature covers
pub(crate) fn signing_input(header_b64: &str, payload_b64: &str) -> String {
    let mut input = String::with_capacity(header_b64.len() + 1 + payload_b64.len());
    input.push_str(header_b64);
    input.push('.');
    input.push_str(payload_b64);
    input
}

/// Append the encoded signature; an empty signature leaves a trailing `.`
pub(crate) fn join_signature(signing_input: String, signature: &[u8]) -> String {
    let signature_b64 = base64_url_encode(signature);
    let mut jwt = signing_input;
    jwt.reserve(1 + signature_b64.len());
    jwt.push('.');
    jwt.push_str(&signature_b64);
    jwt
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn segments_have_no_padding() {
        // 16 bytes of JSON would need `==` padding in standard base64
        let encoded = encode_segment(&json!({ "sub": "user1" })).expect("encode");
        assert_eq!(encoded, "eyJzdWIiOiJ1c2VyMSJ9");
        assert!(!base64_url_encode(&[0xfb, 0xff]).contains(['=', '+', '/']));
    }

    #[test]
    fn joins_three_segments() {
        let input = signing_input("aGVhZA", "Ym9keQ");
        assert_eq!(join_signature(input.clone(), b"sig"), "aGVhZA.Ym9keQ.c2ln");
        assert_eq!(join_signature(input, b""), "aGVhZA.Ym9keQ.");
    }
}
