//! Core `Config` type and the environment loader.
//!
//! Loading is a two-step pipeline: assemble a value from the environment
//! ([`FromEnv`], never fails), then validate it ([`Validate`], accumulates
//! every error). Only values that pass both steps are wrapped in [`Config`].

use stillwater::Validation;

use crate::env::{ConfigEnv, RealEnv};
use crate::error::ConfigErrors;
use crate::validate::Validate;

/// Assemble a configuration value from an environment.
///
/// Assembly is total: absent variables become empty values, and deciding
/// whether that is acceptable is left to [`Validate`].
pub trait FromEnv: Sized {
    fn from_env(env: &dyn ConfigEnv) -> Self;
}

/// Wrapper around a validated configuration value.
///
/// Holding a `Config<T>` proves that `T` was assembled and validated. It
/// implements `Deref` for transparent access to the inner type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config<T> {
    inner: T,
}

impl<T> Config<T> {
    /// Get a reference to the inner configuration value.
    pub fn get(&self) -> &T {
        &self.inner
    }

    /// Consume this Config and return the inner value.
    pub fn into_inner(self) -> T {
        self.inner
    }
}

impl<T: FromEnv + Validate> Config<T> {
    /// Load and validate from the process environment.
    ///
    /// This is the main entry point for production use.
    ///
    /// ```ignore
    /// let config = Config::<AppConfig>::load()?;
    /// println!("listening on {}", config.port);
    /// ```
    pub fn load() -> Result<Self, ConfigErrors> {
        Self::load_with_env(&RealEnv::new())
    }

    /// Load and validate from a custom environment.
    ///
    /// This enables dependency injection for testing.
    pub fn load_with_env(env: &dyn ConfigEnv) -> Result<Self, ConfigErrors> {
        let value = T::from_env(env);

        match value.validate() {
            Validation::Success(()) => {
                tracing::debug!(config = std::any::type_name::<T>(), "configuration loaded");
                Ok(Self { inner: value })
            }
            Validation::Failure(errors) => {
                tracing::warn!(missing = ?errors.variables(), "configuration is incomplete");
                Err(errors)
            }
        }
    }
}

impl<T> std::ops::Deref for Config<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl<T> AsRef<T> for Config<T> {
    fn as_ref(&self) -> &T {
        &self.inner
    }
}
