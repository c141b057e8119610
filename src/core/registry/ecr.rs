//! AWS ECR authorization service.
//!
//! Requests registry login tokens with ECR `GetAuthorizationToken`.
//!
//! The session signs with the static key pair and region from [`Config`]
//! rather than the default credential provider chain, so credentials in
//! `AWS_*` variables or profile files never change which identity is used.
//! Other shared settings the SDK loads, such as `AWS_ENDPOINT_URL`, still
//! apply.

use aws_config::retry::RetryConfig;
use aws_config::{BehaviorVersion, Region};
use aws_sdk_ecr::config::Credentials;
use aws_sdk_ecr::error::DisplayErrorContext;
use aws_sdk_ecr::types::AuthorizationData;
use aws_sdk_ecr::Client;
use chrono::{DateTime, Utc};
use tracing::{debug, trace};

use super::{AuthorizationEntry, AuthorizationService};
use crate::core::config::Config;
use crate::core::constants::CREDENTIALS_PROVIDER;
use crate::error::ExchangeError;

/// ECR client bound to one identity and region.
///
/// Owns a current-thread tokio runtime so callers stay synchronous.
pub struct EcrRegistry {
    runtime: tokio::runtime::Runtime,
    client: Client,
}

impl EcrRegistry {
    /// Establish a session for the identity and region in `config`.
    ///
    /// Transient request failures are retried up to `config.max_retries()`
    /// times by the SDK.
    ///
    /// # Errors
    ///
    /// Returns `ExchangeError::InvalidRegion` if the region is malformed, or
    /// `ExchangeError::Session` if the runtime cannot be created.
    pub fn connect(config: &Config) -> Result<Self, ExchangeError> {
        validate_region(config.region())?;

        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| ExchangeError::Session(format!("failed to create runtime: {}", e)))?;

        let credentials = Credentials::new(
            config.access_key(),
            config.secret_key(),
            None,
            None,
            CREDENTIALS_PROVIDER,
        );
        let retry = RetryConfig::standard().with_max_attempts(config.max_retries() + 1);

        let sdk_config = runtime.block_on(
            aws_config::defaults(BehaviorVersion::latest())
                .region(Region::new(config.region().to_string()))
                .credentials_provider(credentials)
                .retry_config(retry)
                .load(),
        );
        let client = Client::new(&sdk_config);

        debug!(region = %config.region(), "ECR session established");
        Ok(Self { runtime, client })
    }
}

impl AuthorizationService for EcrRegistry {
    fn authorization_token(
        &self,
        registry_id: &str,
    ) -> Result<Vec<AuthorizationEntry>, ExchangeError> {
        debug!(registry_id = %registry_id, "requesting ECR authorization token");

        let output = self
            .runtime
            .block_on(
                self.client
                    .get_authorization_token()
                    .registry_ids(registry_id)
                    .send(),
            )
            .map_err(|e| ExchangeError::NoToken(DisplayErrorContext(&e).to_string()))?;

        let entries = output
            .authorization_data()
            .iter()
            .map(entry_from_sdk)
            .collect::<Result<Vec<_>, _>>()?;

        trace!(entries = entries.len(), "received ECR authorization data");
        Ok(entries)
    }

    fn name(&self) -> &'static str {
        "ecr"
    }
}

/// Convert one SDK authorization record, rejecting records with missing fields.
fn entry_from_sdk(data: &AuthorizationData) -> Result<AuthorizationEntry, ExchangeError> {
    let token = data
        .authorization_token()
        .ok_or(ExchangeError::IncompleteEntry("authorization token"))?;
    let proxy_endpoint = data
        .proxy_endpoint()
        .ok_or(ExchangeError::IncompleteEntry("proxy endpoint"))?;
    let expires = data
        .expires_at()
        .ok_or(ExchangeError::IncompleteEntry("expiration"))?;
    let expires_at = DateTime::<Utc>::from_timestamp(expires.secs(), expires.subsec_nanos())
        .ok_or(ExchangeError::IncompleteEntry("expiration"))?;

    Ok(AuthorizationEntry::new(token, proxy_endpoint, expires_at))
}

/// Region ids look like `us-east-1`: lowercase letters, digits and dashes.
fn validate_region(region: &str) -> Result<(), ExchangeError> {
    let starts_with_letter = region
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_lowercase());
    let allowed = region
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');

    if starts_with_letter && allowed {
        Ok(())
    } else {
        Err(ExchangeError::InvalidRegion(region.to_string()))
    }
}
