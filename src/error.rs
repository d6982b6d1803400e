//! Error types for configuration loading.
//!
//! Every failure is a [`ConfigError`]; failures are accumulated into a
//! [`ConfigErrors`], which integrates with stillwater's `Validation` type and
//! `Semigroup` trait so that validators can report everything in one pass.

use std::fmt;

use stillwater::{NonEmptyVec, Semigroup, Validation};

/// Prefix of the aggregated error message.
pub const MISSING_VARIABLES_MESSAGE: &str = "required environment variables are not set";

/// A single configuration failure.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A required environment variable is unset or empty.
    #[error("required environment variable is not set: {name}")]
    MissingVariable { name: &'static str },
}

impl ConfigError {
    /// Name of the environment variable this error relates to.
    pub fn variable(&self) -> &'static str {
        match self {
            ConfigError::MissingVariable { name } => *name,
        }
    }

    /// Get a suggestion for fixing this error.
    pub fn suggestion(&self) -> String {
        match self {
            ConfigError::MissingVariable { name } => {
                format!("Set '{}' in the process environment", name)
            }
        }
    }
}

/// A non-empty collection of configuration errors.
///
/// Uses `NonEmptyVec` from stillwater, so an empty error set cannot be
/// constructed and `first()` is always safe.
#[derive(Debug, Clone)]
pub struct ConfigErrors(pub NonEmptyVec<ConfigError>);

impl ConfigErrors {
    /// Create from a single error.
    pub fn single(error: ConfigError) -> Self {
        Self(NonEmptyVec::singleton(error))
    }

    /// Try to create from a vec, returning None if empty.
    pub fn from_vec(errors: Vec<ConfigError>) -> Option<Self> {
        NonEmptyVec::from_vec(errors).map(Self)
    }

    /// Get the first error (always exists).
    pub fn first(&self) -> &ConfigError {
        self.0.head()
    }

    /// Number of errors.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if empty (always false, but required for API consistency).
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Iterate over errors.
    pub fn iter(&self) -> impl Iterator<Item = &ConfigError> {
        self.0.iter()
    }

    /// Names of the variables that caused the errors, in report order.
    pub fn variables(&self) -> Vec<&'static str> {
        self.iter().map(ConfigError::variable).collect()
    }
}

impl Semigroup for ConfigErrors {
    fn combine(self, other: Self) -> Self {
        Self(self.0.combine(other.0))
    }
}

impl PartialEq for ConfigErrors {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl Eq for ConfigErrors {}

impl fmt::Display for ConfigErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {}",
            MISSING_VARIABLES_MESSAGE,
            self.variables().join(", ")
        )
    }
}

impl std::error::Error for ConfigErrors {}

/// The standard validation result type.
pub type ConfigValidation<T> = Validation<T, ConfigErrors>;

/// Extension trait for creating failing validations easily.
pub trait ConfigValidationExt<T> {
    /// Create a failing validation with a single error.
    fn fail_with(error: ConfigError) -> ConfigValidation<T>;
}

impl<T> ConfigValidationExt<T> for ConfigValidation<T> {
    fn fail_with(error: ConfigError) -> ConfigValidation<T> {
        Validation::Failure(ConfigErrors::single(error))
    }
}
