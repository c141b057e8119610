//! Command-line interface.

pub mod login;
pub mod output;

use std::io::{self, Write};

use chrono::Utc;
use clap::Parser;
use tracing::debug;

use crate::core::{exchange_with, AuthorizationService, Config, Credential, EcrRegistry};
use crate::error::{ConfigError, Error, ExchangeError, Result};

/// Print a `docker login` command for a short-lived ECR credential.
///
/// Reads KEY, SECRET, REGION and REGISTRY from the environment.
#[derive(Parser)]
#[command(
    name = "ecr-login",
    about = "Print a docker login command for an ECR registry",
    version,
    after_help = "Environment: KEY, SECRET, REGION, REGISTRY (all required)\n\
                  Logging:     ECR_LOGIN_LOG=<filter> or --verbose"
)]
pub struct Cli {
    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

/// Resolve configuration from the environment, exchange it with ECR and
/// print the login command on stdout.
pub fn execute() -> Result<()> {
    execute_with(
        |name| std::env::var(name).ok(),
        EcrRegistry::connect,
        &mut io::stdout().lock(),
        &mut io::stderr(),
    )
}

/// Run the login pipeline against any authorization service.
///
/// `connect` is only called once configuration has resolved. The login
/// command is written to `out` as a single line; warnings go to `err`.
pub fn execute_with<F, C, S, O, E>(
    lookup: F,
    connect: C,
    out: &mut O,
    err: &mut E,
) -> Result<()>
where
    F: Fn(&str) -> Option<String>,
    C: FnOnce(&Config) -> std::result::Result<S, ExchangeError>,
    S: AuthorizationService,
    O: Write,
    E: Write,
{
    let config = Config::resolve(lookup)?;
    let service = connect(&config)?;
    let credentials = exchange_with(&config, &service)?;
    let credential = select(credentials)?;

    if credential.is_expired_at(Utc::now()) {
        output::write_warn(
            err,
            &format!(
                "credential for {} expired at {}",
                credential.endpoint(),
                credential.expires_at()
            ),
        )?;
    }

    writeln!(out, "{}", login::docker_login(&credential))?;
    Ok(())
}

/// Suggested next step for an error, if there is one.
pub fn hint(error: &Error) -> Option<String> {
    match error {
        Error::Config(ConfigError::Missing(field)) => {
            Some(format!("export {} before running", field))
        }
        Error::Exchange(ExchangeError::NoToken(_)) => {
            Some("check the key pair and that it may read REGISTRY".to_string())
        }
        Error::Exchange(ExchangeError::InvalidRegion(_)) => {
            Some("REGION must look like us-east-1".to_string())
        }
        _ => None,
    }
}

/// Pick the credential to log in with: the first one returned.
pub fn select(credentials: Vec<Credential>) -> std::result::Result<Credential, ExchangeError> {
    let total = credentials.len();
    let credential = credentials.into_iter().next().ok_or(ExchangeError::NoAuths)?;

    debug!(
        endpoint = %credential.endpoint(),
        expires_at = %credential.expires_at(),
        total,
        "selected credential"
    );
    Ok(credential)
}
