//! Unverified decoding of the bearer token payload.
//!
//! The portal API issues a three-segment signed token (`header.payload.signature`).
//! Only the payload is decoded here and the signature is never checked; the
//! server remains the sole authority. The result is a UI hint (for example to
//! prompt a password change) and must never drive an authorization decision.

use base64ct::{Base64UrlUnpadded, Encoding};
use serde_json::{Map, Value};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("invalid token format")]
    TokenFormat,
    #[error("invalid base64url encoding")]
    Base64,
    #[error("invalid json")]
    Json(#[from] serde_json::Error),
}

/// Claims read from the token payload.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Claims {
    /// Server asks the student to replace their password.
    pub change_password: bool,
    /// Student number the token was issued for.
    pub student_no: String,
    /// Expiry as reported by the server, informational only.
    pub exp: Option<i64>,
}

impl Claims {
    fn from_payload(payload: &Map<String, Value>) -> Self {
        let change_password = payload.get("change_password").is_some_and(is_truthy);

        let student_no = ["student_no", "sub"]
            .iter()
            .find_map(|key| payload.get(*key).and_then(claim_to_string))
            .unwrap_or_default();

        Self {
            change_password,
            student_no,
            exp: payload.get("exp").and_then(Value::as_i64),
        }
    }
}

// Issuers are loose with flag types: `1` and `"true"` both mean set.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n.abs() > 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
        Value::Null => false,
    }
}

// Student numbers are sometimes emitted as JSON numbers.
fn claim_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Decode the payload segment of `token` without verifying its signature.
///
/// UI hint only: never use the result to grant access to anything.
///
/// # Errors
///
/// Returns [`DecodeError`] when the token does not have exactly three segments,
/// the payload is not base64url, or the payload is not a JSON object.
pub fn decode_unverified(token: &str) -> Result<Claims, DecodeError> {
    let mut parts = token.trim().split('.');
    let _header = parts.next().ok_or(DecodeError::TokenFormat)?;
    let payload_b64 = parts.next().ok_or(DecodeError::TokenFormat)?;
    let _signature = parts.next().ok_or(DecodeError::TokenFormat)?;
    if parts.next().is_some() || payload_b64.is_empty() {
        return Err(DecodeError::TokenFormat);
    }

    let bytes = Base64UrlUnpadded::decode_vec(payload_b64.trim_end_matches('='))
        .map_err(|_| DecodeError::Base64)?;
    let payload: Map<String, Value> = serde_json::from_slice(&bytes)?;

    Ok(Claims::from_payload(&payload))
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use serde_json::json;

    /// Builds an unsigned test token around `payload`.
    pub(crate) fn token_with(payload: &Value) -> String {
        let header = Base64UrlUnpadded::encode_string(br#"{"alg":"HS256","typ":"JWT"}"#);
        let body = Base64UrlUnpadded::encode_string(payload.to_string().as_bytes());
        format!("{header}.{body}.c2lnbmF0dXJl")
    }

    #[test]
    fn decodes_change_password_and_student_no() -> Result<(), DecodeError> {
        let token = token_with(&json!({
            "change_password": true,
            "student_no": "2000100121",
            "exp": 1_700_000_000
        }));

        let claims = decode_unverified(&token)?;
        assert!(claims.change_password);
        assert_eq!(claims.student_no, "2000100121");
        assert_eq!(claims.exp, Some(1_700_000_000));
        Ok(())
    }

    #[test]
    fn missing_change_password_defaults_to_false() -> Result<(), DecodeError> {
        let token = token_with(&json!({ "student_no": "2000100121" }));
        let claims = decode_unverified(&token)?;
        assert!(!claims.change_password);
        Ok(())
    }

    #[test]
    fn change_password_follows_truthiness() -> Result<(), DecodeError> {
        let cases = [
            (json!(true), true),
            (json!(false), false),
            (json!(1), true),
            (json!(0), false),
            (json!(0.0), false),
            (json!("true"), true),
            (json!("false"), true),
            (json!(""), false),
            (json!(null), false),
            (json!({}), true),
        ];
        for (value, expected) in cases {
            let token = token_with(&json!({ "change_password": value, "student_no": "1" }));
            assert_eq!(
                decode_unverified(&token)?.change_password,
                expected,
                "change_password = {value}"
            );
        }
        Ok(())
    }

    #[test]
    fn falls_back_to_sub_for_student_no() -> Result<(), DecodeError> {
        let token = token_with(&json!({ "sub": "2100200300" }));
        assert_eq!(decode_unverified(&token)?.student_no, "2100200300");
        Ok(())
    }

    #[test]
    fn numeric_student_no_is_stringified() -> Result<(), DecodeError> {
        let token = token_with(&json!({ "student_no": 2_000_100_121_u64 }));
        assert_eq!(decode_unverified(&token)?.student_no, "2000100121");
        Ok(())
    }

    #[test]
    fn tolerates_padded_payload() -> Result<(), DecodeError> {
        // "{\"a\":1}" encodes to 10 chars, so padding is appended.
        let token = "e30.eyJhIjoxfQ==.sig";
        let claims = decode_unverified(token)?;
        assert_eq!(claims, Claims::default());
        Ok(())
    }

    #[test]
    fn rejects_wrong_segment_count() {
        for token in ["", "abc", "a.b", "a.b.c.d", "a..c"] {
            assert!(
                matches!(decode_unverified(token), Err(DecodeError::TokenFormat)),
                "expected format error for {token:?}"
            );
        }
    }

    #[test]
    fn rejects_invalid_base64() {
        assert!(matches!(
            decode_unverified("hdr.!!not-base64!!.sig"),
            Err(DecodeError::Base64)
        ));
    }

    #[test]
    fn rejects_non_object_payload() {
        let body = Base64UrlUnpadded::encode_string(b"[1,2,3]");
        let token = format!("hdr.{body}.sig");
        assert!(matches!(decode_unverified(&token), Err(DecodeError::Json(_))));

        let body = Base64UrlUnpadded::encode_string(b"not json");
        let token = format!("hdr.{body}.sig");
        assert!(matches!(decode_unverified(&token), Err(DecodeError::Json(_))));
    }
}
