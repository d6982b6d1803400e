//! Convenient re-exports for common readsync usage.
//!
//! ```ignore
//! use readsync::prelude::*;
//!
//! let config = Config::<AppConfig>::load()?;
//! let dsn = config.database.dsn();
//! ```

// ============================================================================
// Stillwater re-exports
// ============================================================================

/// Result type with error accumulation. `Validate::validate` returns
/// `Validation<(), ConfigErrors>`.
pub use stillwater::Validation;

/// Trait for combining values. `ConfigErrors` implements this for error accumulation.
pub use stillwater::Semigroup;

/// Guaranteed non-empty collection. Underlying type for `ConfigErrors`.
pub use stillwater::NonEmptyVec;

// ============================================================================
// Error types
// ============================================================================

/// A single missing-variable error.
pub use crate::error::ConfigError;

/// Non-empty collection of errors. Implements `Semigroup` for accumulation.
pub use crate::error::ConfigErrors;

/// Type alias: `Validation<T, ConfigErrors>`.
pub use crate::error::ConfigValidation;

/// Extension trait for creating failing validations easily.
pub use crate::error::ConfigValidationExt;

// ============================================================================
// Configuration
// ============================================================================

/// Validated configuration wrapper; `Config::<T>::load()` builds one.
pub use crate::config::Config;

/// Assembly from an environment.
pub use crate::config::FromEnv;

pub use crate::app::AppConfig;
pub use crate::database::DatabaseConfig;

// ============================================================================
// Environment abstractions
// ============================================================================

/// Trait for environment lookups. Enables testable configuration loading.
pub use crate::env::ConfigEnv;

/// Real environment implementation for production use.
pub use crate::env::RealEnv;

/// Mock environment for testing.
pub use crate::env::MockEnv;

// ============================================================================
// Validation
// ============================================================================

/// Trait for types that can be validated.
pub use crate::validate::Validate;

pub use crate::validate::{missing_variables, require, require_list, validate_all};
