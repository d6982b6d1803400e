//! Validation trait and presence checks for configuration types.
//!
//! Checks never short-circuit: each one yields its own `ConfigValidation`,
//! and [`validate_all`] folds them together with `Semigroup::combine`, so a
//! failed validation names every missing variable in declaration order.

use stillwater::{Semigroup, Validation};

use crate::error::{ConfigError, ConfigValidation, ConfigValidationExt};

/// Trait for validating assembled configuration values.
///
/// # Example
///
/// ```
/// use readsync::validate::{require, validate_all, Validate};
/// use readsync::ConfigValidation;
///
/// struct CacheConfig {
///     url: String,
/// }
///
/// impl Validate for CacheConfig {
///     fn validate(&self) -> ConfigValidation<()> {
///         validate_all([require(&self.url, "CACHE_URL")])
///     }
/// }
///
/// let cache = CacheConfig { url: String::new() };
/// assert!(cache.validate().is_failure());
/// ```
pub trait Validate {
    /// Validate this configuration value.
    ///
    /// Returns `Success(())` if validation passes, or `Failure(ConfigErrors)`
    /// with every accumulated error.
    fn validate(&self) -> ConfigValidation<()>;
}

/// A required scalar variable: fails when `value` is empty.
pub fn require(value: &str, name: &'static str) -> ConfigValidation<()> {
    if value.is_empty() {
        ConfigValidation::fail_with(ConfigError::MissingVariable { name })
    } else {
        Validation::Success(())
    }
}

/// A required list variable: fails when the list is empty or is the single
/// empty string produced by splitting an unset variable.
pub fn require_list(values: &[String], name: &'static str) -> ConfigValidation<()> {
    match values {
        [] => ConfigValidation::fail_with(ConfigError::MissingVariable { name }),
        [only] if only.is_empty() => {
            ConfigValidation::fail_with(ConfigError::MissingVariable { name })
        }
        _ => Validation::Success(()),
    }
}

/// Combine independent checks, accumulating every failure in order.
pub fn validate_all<I>(checks: I) -> ConfigValidation<()>
where
    I: IntoIterator<Item = ConfigValidation<()>>,
{
    checks
        .into_iter()
        .fold(Validation::Success(()), |acc, next| match (acc, next) {
            (Validation::Success(()), next) => next,
            (Validation::Failure(errors), Validation::Success(())) => Validation::Failure(errors),
            (Validation::Failure(errors), Validation::Failure(more)) => {
                Validation::Failure(errors.combine(more))
            }
        })
}

/// Names of the required variables that `config` is missing, in report
/// order. Empty means the value is valid.
pub fn missing_variables<T: Validate + ?Sized>(config: &T) -> Vec<&'static str> {
    match config.validate() {
        Validation::Success(()) => Vec::new(),
        Validation::Failure(errors) => errors.variables(),
    }
}
