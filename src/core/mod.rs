//! Core library components.
//!
//! Configuration resolution, token decoding and the credential exchange.
//! Nothing here prints; the `cli` module owns all terminal output.

pub mod config;
pub mod constants;
pub mod credential;
pub mod exchange;
pub mod registry;

pub use config::Config;
pub use credential::Credential;
pub use exchange::{exchange, exchange_with};
pub use registry::{AuthorizationEntry, AuthorizationService, EcrRegistry};
