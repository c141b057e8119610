//! Credential exchange.
//!
//! Turns a validated [`Config`] into registry credentials: one request to
//! the authorization service, then every returned token is decoded. The
//! first entry that fails to decode aborts the whole exchange.

use tracing::debug;

use super::config::Config;
use super::credential::Credential;
use super::registry::{AuthorizationService, EcrRegistry};
use crate::error::ExchangeError;

/// Exchange `config` for credentials using AWS ECR.
///
/// # Errors
///
/// Returns `ExchangeError::Session` if the ECR session cannot be set up,
/// otherwise whatever [`exchange_with`] returns.
pub fn exchange(config: &Config) -> Result<Vec<Credential>, ExchangeError> {
    let registry = EcrRegistry::connect(config)?;
    exchange_with(config, &registry)
}

/// Exchange `config` for credentials using `service`.
///
/// Credentials come back in the order the service returned them. Choosing
/// one is left to the caller.
///
/// # Errors
///
/// - `ExchangeError::NoToken` if the request fails
/// - `ExchangeError::MalformedToken` / `ExchangeError::WrongFormat` for the
///   first entry whose token cannot be decoded
/// - `ExchangeError::NoAuths` if the service returned no entries
pub fn exchange_with<S>(config: &Config, service: &S) -> Result<Vec<Credential>, ExchangeError>
where
    S: AuthorizationService + ?Sized,
{
    debug!(
        service = service.name(),
        registry_id = %config.registry_id(),
        "exchanging credentials"
    );

    let entries = service.authorization_token(config.registry_id())?;

    let credentials = entries
        .into_iter()
        .map(|entry| Credential::from_token(&entry.token, entry.proxy_endpoint, entry.expires_at))
        .collect::<Result<Vec<_>, _>>()?;

    if credentials.is_empty() {
        return Err(ExchangeError::NoAuths);
    }

    debug!(count = credentials.len(), "credentials decoded");
    Ok(credentials)
}
