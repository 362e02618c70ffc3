//! Browser session context: token, display username and selected appointment.
//!
//! SYSTEM CONTEXT
//! ==============
//! The App root loads this once from `sessionStorage` and provides it as an
//! `RwSignal<SessionContext>`; pages and the navbar read it from context
//! instead of reaching into storage themselves.
//!
//! The token is a JWT. Its payload is decoded for display only; the signature
//! is never checked here and nothing client-side trusts the claims.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::Deserialize;

use crate::net::types::Role;
use crate::util::storage;

/// `sessionStorage` key holding the session JWT.
pub const TOKEN_KEY: &str = "token";
/// `sessionStorage` key holding the appointment a doctor is acting on.
pub const APPOINTMENT_KEY: &str = "appointmentId";

/// Why a token payload could not be read.
#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    #[error("token is not a three-part JWT")]
    Malformed,
    #[error("token payload is not base64url: {0}")]
    Encoding(#[from] base64::DecodeError),
    #[error("token payload is not JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("token payload has no username claim")]
    MissingUsername,
}

/// Claims the UI cares about.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct TokenClaims {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub role: Option<Role>,
}

/// Decode the payload segment of a JWT without verifying it.
///
/// # Errors
///
/// Returns [`TokenError`] when the token does not have three segments or the
/// payload is not base64url-encoded JSON.
pub fn decode_claims(token: &str) -> Result<TokenClaims, TokenError> {
    let mut parts = token.split('.');
    let (Some(_header), Some(payload), Some(_signature), None) = (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(TokenError::Malformed);
    };
    let bytes = URL_SAFE_NO_PAD.decode(payload.trim_end_matches('='))?;
    Ok(serde_json::from_slice(&bytes)?)
}

/// Decode just the `username` claim.
///
/// # Errors
///
/// Same as [`decode_claims`], plus [`TokenError::MissingUsername`] when the
/// claim is absent or blank.
pub fn decode_username(token: &str) -> Result<String, TokenError> {
    decode_claims(token)?
        .username
        .filter(|name| !name.trim().is_empty())
        .ok_or(TokenError::MissingUsername)
}

/// Session values shared through Leptos context.
///
/// `Default` is the placeholder provided before storage has been read;
/// `loaded` flips once a real snapshot replaces it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionContext {
    pub token: Option<String>,
    pub username: Option<String>,
    pub role: Option<Role>,
    pub appointment_id: Option<String>,
    loaded: bool,
}

impl SessionContext {
    /// Build from raw storage values; blank values count as absent.
    pub fn from_parts(token: Option<String>, appointment_id: Option<String>) -> Self {
        let token = token.filter(|t| !t.trim().is_empty());
        let appointment_id = appointment_id.filter(|id| !id.trim().is_empty());
        let claims = match token.as_deref().map(decode_claims) {
            Some(Ok(claims)) => claims,
            Some(Err(err)) => {
                leptos::logging::warn!("session token unreadable: {err}");
                TokenClaims::default()
            }
            None => TokenClaims::default(),
        };
        Self {
            token,
            username: claims.username.filter(|name| !name.trim().is_empty()),
            role: claims.role,
            appointment_id,
            loaded: true,
        }
    }

    /// Read the session from `sessionStorage`.
    pub fn load() -> Self {
        Self::from_parts(storage::read(TOKEN_KEY), storage::read(APPOINTMENT_KEY))
    }

    /// Whether storage has been read. Mount-time loaders wait for this.
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn is_signed_in(&self) -> bool {
        self.token.is_some()
    }

    /// Username for display, or an empty string when unknown.
    pub fn display_name(&self) -> &str {
        self.username.as_deref().unwrap_or_default()
    }

    /// Forget the selected appointment, here and in storage.
    pub fn clear_appointment(&mut self) {
        self.appointment_id = None;
        storage::remove(APPOINTMENT_KEY);
    }

    /// Drop every session value, here and in storage.
    pub fn sign_out(&mut self) {
        *self = Self { loaded: true, ..Self::default() };
        storage::remove(TOKEN_KEY);
        storage::remove(APPOINTMENT_KEY);
    }
}
