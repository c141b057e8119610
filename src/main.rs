//! ecr-login - print a docker login command for an ECR registry.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use ecr_login::cli::output;
use ecr_login::cli::{execute, hint, Cli};
use ecr_login::core::constants::ENV_LOG;

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env(ENV_LOG).unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("ecr_login=debug")
        } else {
            EnvFilter::new("ecr_login=warn")
        }
    });

    // Logs go to stderr; stdout carries only the login command
    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    if let Err(e) = execute() {
        output::error(&e.to_string());
        if let Some(hint) = hint(&e) {
            output::hint(&hint);
        }
        std::process::exit(1);
    }
}
