//! ecr-login - exchange AWS credentials for a short-lived ECR login.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── login         # docker login formatting
//! │   └── output        # stderr messages
//! └── core/             # Core library components
//!     ├── config        # KEY / SECRET / REGION / REGISTRY resolution
//!     ├── credential    # Token decoding
//!     ├── exchange      # Config -> credentials
//!     └── registry/     # Authorization services
//!         ├── mod       # AuthorizationService trait
//!         └── ecr       # AWS ECR implementation
//! ```
//!
//! # Example
//!
//! ```no_run
//! use ecr_login::core::{exchange, Config};
//!
//! let config = Config::from_env()?;
//! let credentials = exchange(&config)?;
//! println!("{}", credentials[0].endpoint());
//! # Ok::<(), ecr_login::error::Error>(())
//! ```

pub mod cli;
pub mod core;
pub mod error;
