//! Minimal JWT payload inspection.
//!
//! The login response carries only the access token; the user id needed
//! for the weather endpoint lives in the token's claims. The signature is
//! the backend's concern, so only the payload segment is decoded here.

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use serde_json::Value;

use crate::error::AuthError;

const ID_CLAIMS: [&str; 3] = ["userId", "id", "sub"];

/// Extract the numeric user id from an access token's payload claims.
pub fn user_id_from_token(token: &str) -> Result<i64, AuthError> {
    let mut segments = token.split('.');
    let payload = match (segments.next(), segments.next()) {
        (Some(_header), Some(payload)) => payload,
        _ => return Err(AuthError::InvalidToken("not a JWT".to_string())),
    };

    let raw = URL_SAFE_NO_PAD
        .decode(payload)
        .map_err(|e| AuthError::InvalidToken(format!("payload is not base64url: {}", e)))?;
    let claims: Value = serde_json::from_slice(&raw)
        .map_err(|e| AuthError::InvalidToken(format!("payload is not JSON: {}", e)))?;

    for claim in ID_CLAIMS {
        match claims.get(claim) {
            Some(Value::Number(n)) => {
                if let Some(id) = n.as_i64() {
                    return Ok(id);
                }
            }
            Some(Value::String(s)) => {
                if let Ok(id) = s.parse::<i64>() {
                    return Ok(id);
                }
            }
            _ => {}
        }
    }

    Err(AuthError::InvalidToken(
        "no user id claim in payload".to_string(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token_with_payload(payload: &str) -> String {
        let header = URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256","typ":"JWT"}"#);
        let payload = URL_SAFE_NO_PAD.encode(payload);
        format!("{}.{}.signature", header, payload)
    }

    #[test]
    fn test_numeric_user_id_claim() {
        let token = token_with_payload(r#"{"userId":7,"email":"a@b.c"}"#);
        assert_eq!(user_id_from_token(&token).unwrap(), 7);
    }

    #[test]
    fn test_string_sub_claim() {
        let token = token_with_payload(r#"{"sub":"42"}"#);
        assert_eq!(user_id_from_token(&token).unwrap(), 42);
    }

    #[test]
    fn test_user_id_claim_wins_over_sub() {
        let token = token_with_payload(r#"{"sub":"1","userId":7}"#);
        assert_eq!(user_id_from_token(&token).unwrap(), 7);
    }

    #[test]
    fn test_missing_claim_is_an_error() {
        let token = token_with_payload(r#"{"email":"a@b.c"}"#);
        assert!(matches!(
            user_id_from_token(&token),
            Err(AuthError::InvalidToken(_))
        ));
    }

    #[test]
    fn test_opaque_token_is_an_error() {
        assert!(matches!(
            user_id_from_token("not-a-jwt"),
            Err(AuthError::InvalidToken(_))
        ));
    }
}
