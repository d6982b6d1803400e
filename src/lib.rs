//! Readsync: startup configuration and HTTP bootstrap for the Readsync API.
//!
//! The service refuses to start unless its environment is complete. Loading
//! gathers every variable the service needs, validates all of them in one
//! pass, and reports every missing variable in a single error, so operators
//! fix their deployment in one round instead of one variable at a time.
//!
//! # Quick Start
//!
//! ```ignore
//! use readsync::prelude::*;
//!
//! fn main() {
//!     let config = match Config::<AppConfig>::load() {
//!         Ok(config) => config,
//!         Err(errors) => {
//!             // required environment variables are not set: PORT, DB_HOST
//!             eprintln!("failed to load config: {}", errors);
//!             std::process::exit(1);
//!         }
//!     };
//!
//!     println!("connecting with {}", config.database.dsn());
//! }
//! ```
//!
//! # Architecture
//!
//! Loading follows a "pure core, imperative shell" split:
//!
//! - **Imperative Shell**: variables are read through the [`ConfigEnv`]
//!   trait; [`RealEnv`] in production, [`MockEnv`] in tests.
//! - **Pure Core**: assembly ([`FromEnv`]), validation ([`Validate`]) and DSN
//!   formatting are pure functions of the values read.
//!
//! # Module Structure
//!
//! - [`prelude`]: Convenient re-exports for common usage
//! - [`config`]: `Config` wrapper and the loader
//! - [`app`] / [`database`]: the settings types
//! - [`error`]: `ConfigError`, `ConfigErrors`, `ConfigValidation`
//! - [`mod@env`]: `ConfigEnv` trait and `MockEnv` for testing
//! - [`validate`]: `Validate` trait and presence checks
//! - [`vars`]: environment variable names
//! - `server`: axum router and listener (feature `server`)

pub mod app;
pub mod config;
pub mod database;
pub mod env;
pub mod error;
pub mod prelude;
#[cfg(feature = "server")]
pub mod server;
pub mod validate;
pub mod vars;

// Re-exports for convenience
pub use app::AppConfig;
pub use config::{Config, FromEnv};
pub use database::DatabaseConfig;
pub use env::{ConfigEnv, MockEnv, RealEnv};
pub use error::{ConfigError, ConfigErrors, ConfigValidation, ConfigValidationExt};
pub use validate::{missing_variables, Validate};

// Re-export stillwater types that are commonly used
pub use stillwater::{NonEmptyVec, Semigroup, Validation};
