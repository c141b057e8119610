//! Constants used throughout ecr-login.
//!
//! Centralizes environment variable names and fixed client settings.

/// Environment variable holding the access key id.
pub const ENV_KEY: &str = "KEY";

/// Environment variable holding the secret access key.
pub const ENV_SECRET: &str = "SECRET";

/// Environment variable holding the service region.
pub const ENV_REGION: &str = "REGION";

/// Environment variable holding the target registry id.
pub const ENV_REGISTRY: &str = "REGISTRY";

/// Environment variable holding a tracing filter directive.
pub const ENV_LOG: &str = "ECR_LOGIN_LOG";

/// Retries allowed for the authorization request (attempts = retries + 1).
pub const MAX_RETRIES: u32 = 1;

/// Provider name attached to the static credentials handed to the SDK.
pub const CREDENTIALS_PROVIDER: &str = "ecr-login";
