//! Registry authorization services.
//!
//! - `AuthorizationService`: the seam between the exchanger and the
//!   remote service, implemented by ECR and by test doubles
//! - `ecr`: AWS ECR implementation

pub mod ecr;

pub use ecr::EcrRegistry;

use chrono::{DateTime, Utc};

use crate::error::ExchangeError;

/// One authorization entry as returned by the remote service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorizationEntry {
    /// Base64-encoded `username:password`.
    pub token: String,
    pub proxy_endpoint: String,
    pub expires_at: DateTime<Utc>,
}

impl AuthorizationEntry {
    pub fn new(
        token: impl Into<String>,
        proxy_endpoint: impl Into<String>,
        expires_at: DateTime<Utc>,
    ) -> Self {
        Self {
            token: token.into(),
            proxy_endpoint: proxy_endpoint.into(),
            expires_at,
        }
    }
}

/// A remote service that issues registry authorization tokens.
pub trait AuthorizationService {
    /// Request authorization for a single registry id.
    ///
    /// Entries are returned in the order the service produced them.
    ///
    /// # Errors
    ///
    /// Returns `ExchangeError::NoToken` if the request fails, or
    /// `ExchangeError::IncompleteEntry` if the response is missing data.
    fn authorization_token(
        &self,
        registry_id: &str,
    ) -> Result<Vec<AuthorizationEntry>, ExchangeError>;

    /// Service name for logging.
    fn name(&self) -> &'static str;
}

impl<T: AuthorizationService + ?Sized> AuthorizationService for &T {
    fn authorization_token(
        &self,
        registry_id: &str,
    ) -> Result<Vec<AuthorizationEntry>, ExchangeError> {
        (**self).authorization_token(registry_id)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

/// Canned authorization service for unit tests.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MockRegistry {
    pub response: Option<Vec<AuthorizationEntry>>,
    pub calls: std::cell::RefCell<Vec<String>>,
}

#[cfg(test)]
impl MockRegistry {
    pub fn returning(entries: Vec<AuthorizationEntry>) -> Self {
        Self {
            response: Some(entries),
            calls: Default::default(),
        }
    }

    pub fn failing() -> Self {
        Self::default()
    }
}

#[cfg(test)]
impl AuthorizationService for MockRegistry {
    fn authorization_token(
        &self,
        registry_id: &str,
    ) -> Result<Vec<AuthorizationEntry>, ExchangeError> {
        self.calls.borrow_mut().push(registry_id.to_string());
        self.response
            .clone()
            .ok_or_else(|| ExchangeError::NoToken("access denied".into()))
    }

    fn name(&self) -> &'static str {
        "mock"
    }
}
