use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use serde_json::Value;
use thiserror::Error;

use crate::utils::cookies;

pub const TOKEN_COOKIE: &str = "token";
const USER_ID_CLAIM: &str = "nameid";

/// Identity of the signed-in employee for the lifetime of one page.
///
/// Built when a page mounts and handed to every view model and API call that
/// needs it; dropped together with the page's reactive owner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub user_id: String,
    pub token: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("Token not found")]
    MissingToken,
    #[error("Token could not be decoded")]
    MalformedToken,
    #[error("User ID not found in token payload")]
    MissingUserId,
}

impl Session {
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.token)
    }
}

pub fn decode_session(token: &str) -> Result<Session, SessionError> {
    let token = token.trim();
    if token.is_empty() {
        return Err(SessionError::MissingToken);
    }
    let claims = decode_claims(token).ok_or(SessionError::MalformedToken)?;
    let user_id = match claims.get(USER_ID_CLAIM) {
        Some(Value::String(id)) if !id.trim().is_empty() => id.clone(),
        Some(Value::Number(id)) => id.to_string(),
        _ => return Err(SessionError::MissingUserId),
    };
    Ok(Session {
        user_id,
        token: token.to_string(),
    })
}

/// Reads the session from the browser cookie store.
pub fn read_session() -> Result<Session, SessionError> {
    let token = cookies::read_cookie(TOKEN_COOKIE).ok_or(SessionError::MissingToken)?;
    decode_session(&token)
}

fn decode_claims(token: &str) -> Option<Value> {
    let mut parts = token.split('.');
    parts.next()?;
    let payload = parts.next()?.trim_end_matches('=');
    let decoded = URL_SAFE_NO_PAD.decode(payload).ok()?;
    let value: Value = serde_json::from_slice(&decoded).ok()?;
    value.is_object().then_some(value)
}
