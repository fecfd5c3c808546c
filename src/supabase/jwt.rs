//! Access-token payload decoding
//!
//! Supabase issues JWT access tokens. The callers of this crate only ever
//! need one claim out of them: `sub`, the authenticated user's id. This
//! module extracts it without verifying the signature or expiry; trust in
//! the token's contents is delegated to the issuing backend over TLS.

use base64::engine::general_purpose::URL_SAFE;
use base64::Engine;
use uuid::Uuid;

/// Extract the subject user id from a compact JWT.
///
/// Splits the token on `.`, base64-decodes the payload segment with the
/// URL-safe alphabet (padding it to a multiple of four first), and parses
/// the `sub` claim as a UUID. Anything that is not a well-formed token
/// carrying a UUID subject yields `None`: fewer than two segments,
/// malformed base64, a payload that is not a JSON object, a missing or
/// non-string `sub`, or a `sub` that does not parse as a UUID.
///
/// No cryptographic verification is performed, so this value must never be
/// the basis of a security decision on its own.
///
/// # Examples
///
/// ```
/// use base64::engine::general_purpose::URL_SAFE_NO_PAD;
/// use base64::Engine;
/// use uuid::Uuid;
/// use supatask::supabase::jwt::user_id_from_token;
///
/// let user_id = Uuid::new_v4();
/// let payload = URL_SAFE_NO_PAD.encode(format!(r#"{{"sub":"{}"}}"#, user_id));
/// let token = format!("header.{}.signature", payload);
///
/// assert_eq!(user_id_from_token(&token), Some(user_id));
/// assert_eq!(user_id_from_token("not-a-token"), None);
/// ```
pub fn user_id_from_token(token: &str) -> Option<Uuid> {
    let mut segments = token.split('.');
    let _header = segments.next()?;
    let payload = segments.next()?;

    let bytes = decode_segment(payload)?;
    let claims: serde_json::Map<String, serde_json::Value> =
        serde_json::from_slice(&bytes).ok()?;

    let sub = claims.get("sub")?.as_str()?;
    Uuid::parse_str(sub).ok()
}

/// Decode one JWT segment: URL-safe alphabet, `=`-padded to a multiple of
/// four before decoding.
fn decode_segment(segment: &str) -> Option<Vec<u8>> {
    let mut padded = segment.to_string();
    while padded.len() % 4 != 0 {
        padded.push('=');
    }
    URL_SAFE.decode(padded).ok()
}
