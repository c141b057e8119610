use thiserror::Error;

/// Top-level error for ecr-login.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Exchange(#[from] ExchangeError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration errors. Each names exactly one environment variable.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid parameter for {0}")]
    Missing(&'static str),
}

impl ConfigError {
    /// Name of the variable that failed validation.
    pub fn field(&self) -> &'static str {
        match self {
            Self::Missing(field) => *field,
        }
    }
}

/// Errors raised while exchanging configuration for registry credentials.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExchangeError {
    #[error("session failure: {0}")]
    Session(String),

    #[error("session failure: invalid region '{0}'")]
    InvalidRegion(String),

    #[error("no token: {0}")]
    NoToken(String),

    #[error("malformed token encoding: {0}")]
    MalformedToken(String),

    #[error("wrong format")]
    WrongFormat,

    #[error("no auths")]
    NoAuths,

    #[error("incomplete authorization data: missing {0}")]
    IncompleteEntry(&'static str),
}

pub type Result<T> = std::result::Result<T, Error>;
