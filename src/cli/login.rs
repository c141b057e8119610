//! Login command formatting.

use crate::core::Credential;

/// Format a `docker login` invocation for `credential`.
///
/// Example: `docker login -u AWS -p <password> https://123456789.dkr.ecr.us-east-1.amazonaws.com`
pub fn docker_login(credential: &Credential) -> String {
    format!(
        "docker login -u {} -p {} {}",
        credential.username(),
        credential.password(),
        credential.endpoint()
    )
}
