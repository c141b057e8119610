//! Registry credentials and authorization token decoding.

use std::fmt;

use base64::Engine;
use chrono::{DateTime, Utc};
use tracing::trace;
use zeroize::Zeroizing;

use crate::error::ExchangeError;

/// A short-lived registry login.
///
/// The password is wiped from memory when the credential is dropped.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential {
    username: String,
    password: Zeroizing<String>,
    endpoint: String,
    expires_at: DateTime<Utc>,
}

impl Credential {
    /// Decode a base64 `username:password` token into a credential.
    ///
    /// The payload is split on the first colon only, so the password may
    /// itself contain colons.
    ///
    /// # Errors
    ///
    /// - `ExchangeError::MalformedToken` if the token is not valid base64
    ///   or does not decode to UTF-8.
    /// - `ExchangeError::WrongFormat` if the payload has no colon.
    pub fn from_token(
        token: &str,
        endpoint: impl Into<String>,
        expires_at: DateTime<Utc>,
    ) -> Result<Self, ExchangeError> {
        let (username, password) = decode_token(token)?;
        let endpoint = endpoint.into();

        trace!(username = %username, endpoint = %endpoint, "decoded authorization token");

        Ok(Self {
            username,
            password,
            endpoint,
            expires_at,
        })
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        self.password.as_str()
    }

    /// Registry proxy endpoint this credential logs into.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn expires_at(&self) -> DateTime<Utc> {
        self.expires_at
    }

    /// Whether the credential has expired at `now`.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at <= now
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("endpoint", &self.endpoint)
            .field("expires_at", &self.expires_at)
            .finish()
    }
}

fn decode_token(token: &str) -> Result<(String, Zeroizing<String>), ExchangeError> {
    let bytes = Zeroizing::new(
        base64::engine::general_purpose::STANDARD
            .decode(token)
            .map_err(|e| ExchangeError::MalformedToken(format!("invalid base64: {}", e)))?,
    );

    let payload = std::str::from_utf8(&bytes)
        .map_err(|e| ExchangeError::MalformedToken(format!("UTF-8 error: {}", e)))?;

    let (username, password) = payload
        .split_once(':')
        .ok_or(ExchangeError::WrongFormat)?;

    Ok((username.to_string(), Zeroizing::new(password.to_string())))
}
