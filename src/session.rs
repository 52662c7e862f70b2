//! Session token access.
//!
//! The backend issues a JWT at login; the page keeps it in a script-readable
//! cookie. This module parses that cookie, peeks at the token's claims to find
//! the current user's id, and builds the cookie strings for login and logout.
//! Nothing here verifies signatures: the backend enforces auth.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use data_encoding::BASE64URL_NOPAD;
use serde_json::Value;

use crate::error::ClientError;

/// The session as seen by one page load.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    token: Option<String>,
}

impl Session {
    /// Read the session from a `document.cookie` string.
    pub fn from_cookies(cookies: &str, cookie_name: &str) -> Self {
        Self { token: read_token(cookies, cookie_name) }
    }

    pub fn is_logged_in(&self) -> bool {
        self.token.is_some()
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Subject id embedded in the token, if the token decodes.
    pub fn subject(&self) -> Option<String> {
        self.token.as_deref().and_then(subject_from_token)
    }
}

/// Find `cookie_name` in a `name=value; name2=value2` cookie string.
///
/// When the name repeats (same cookie set on several paths) the last pair
/// wins. Empty values count as absent so a cleared cookie reads as logged out.
pub fn read_token(cookies: &str, cookie_name: &str) -> Option<String> {
    cookies
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .rfind(|(key, _)| *key == cookie_name)
        .map(|(_, value)| value.trim())
        .filter(|value| !value.is_empty())
        .map(str::to_owned)
}

/// Extract the subject identifier from a JWT without verifying it.
///
/// Accepts `user_id` or `sub`, each either a string or an object carrying an
/// `id`. Returns `None` on any decode failure, including an explicit `null`
/// in whichever claim is consulted.
pub fn subject_from_token(token: &str) -> Option<String> {
    let claims = match decode_claims(token) {
        Ok(claims) => claims,
        Err(err) => {
            log::error!("failed to decode token: {err}");
            return None;
        }
    };
    log::debug!("decoded token claims: {claims}");

    let subject = subject_claim(&claims);
    if subject.is_none() {
        log::warn!("no user id in token claims: {claims}");
    }
    subject
}

/// Cookie string that stores a freshly issued token.
pub fn login_cookie(cookie_name: &str, token: &str) -> String {
    format!("{cookie_name}={token}; path=/; Secure; SameSite=Strict")
}

/// Cookie string that expires the token immediately.
pub fn logout_cookie(cookie_name: &str) -> String {
    format!("{cookie_name}=; expires=Thu, 01 Jan 1970 00:00:00 UTC; path=/;")
}

fn decode_claims(token: &str) -> Result<Value, ClientError> {
    let payload = token
        .split('.')
        .nth(1)
        .filter(|segment| !segment.is_empty())
        .ok_or_else(|| ClientError::Parse("token has no payload segment".to_owned()))?;

    // Tokens in the wild use both alphabets, padded or not.
    let normalized: String = payload
        .trim_end_matches('=')
        .chars()
        .map(|c| match c {
            '+' => '-',
            '/' => '_',
            other => other,
        })
        .collect();
    let bytes = BASE64URL_NOPAD
        .decode(normalized.as_bytes())
        .map_err(|e| ClientError::Parse(e.to_string()))?;

    let claims: Value = serde_json::from_slice(&bytes)?;
    if claims.is_object() {
        Ok(claims)
    } else {
        Err(ClientError::Parse("token payload is not an object".to_owned()))
    }
}

/// `user_id` first, then `sub`. A `null` claim stops the search.
fn subject_claim(claims: &Value) -> Option<String> {
    for name in ["user_id", "sub"] {
        match claims.get(name) {
            Some(Value::Null) => {
                log::error!("token claim {name} is null");
                return None;
            }
            claim => {
                if let Some(id) = claim_id(claim) {
                    return Some(id);
                }
            }
        }
    }
    None
}

fn claim_id(claim: Option<&Value>) -> Option<String> {
    match claim? {
        Value::String(id) if !id.is_empty() => Some(id.clone()),
        Value::Object(fields) => match fields.get("id")? {
            Value::String(id) if !id.is_empty() => Some(id.clone()),
            Value::Number(id) => Some(id.to_string()),
            _ => None,
        },
        _ => None,
    }
}
