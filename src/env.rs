//! ConfigEnv trait for testable environment access.
//!
//! Configuration is read exclusively through the `ConfigEnv` trait, so the
//! loader never touches `std::env` directly and tests can hand it a `MockEnv`
//! instead of mutating the real process environment.

use std::collections::HashMap;
use std::sync::RwLock;

/// Key/value lookup over an environment.
///
/// # Example
///
/// ```
/// use readsync::env::{ConfigEnv, MockEnv};
///
/// let env = MockEnv::new().with_env("DB_SSLMODE", "require");
///
/// assert_eq!(env.get_env("DB_SSLMODE").as_deref(), Some("require"));
/// assert_eq!(env.get_env_or("TEST_DB_PORT", "5433"), "5433");
/// ```
pub trait ConfigEnv: Send + Sync {
    /// Get an environment variable by name.
    ///
    /// Returns `None` if the variable is not set.
    fn get_env(&self, name: &str) -> Option<String>;

    /// Get an environment variable, falling back to `default` when the
    /// variable is unset or set to the empty string.
    fn get_env_or(&self, name: &str, default: &str) -> String {
        match self.get_env(name) {
            Some(value) if !value.is_empty() => value,
            _ => {
                tracing::debug!(variable = name, fallback = default, "using default value");
                default.to_string()
            }
        }
    }
}

/// Production environment backed by the process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct RealEnv;

impl RealEnv {
    /// Create a new real environment.
    pub fn new() -> Self {
        Self
    }
}

impl ConfigEnv for RealEnv {
    fn get_env(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

/// In-memory environment for tests.
///
/// # Example
///
/// ```
/// use readsync::env::MockEnv;
///
/// let env = MockEnv::new()
///     .with_env("PORT", "8080")
///     .with_envs([("DB_HOST", "localhost"), ("DB_PORT", "5432")]);
/// ```
#[derive(Debug, Default)]
pub struct MockEnv {
    env_vars: RwLock<HashMap<String, String>>,
}

impl MockEnv {
    /// Create a new empty mock environment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an environment variable.
    pub fn with_env(self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.env_vars
            .write()
            .unwrap()
            .insert(name.into(), value.into());
        self
    }

    /// Set multiple environment variables from an iterator.
    pub fn with_envs<I, K, V>(self, vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut env_vars = self.env_vars.write().unwrap();
        for (k, v) in vars {
            env_vars.insert(k.into(), v.into());
        }
        drop(env_vars);
        self
    }

    /// Update an environment variable after creation.
    pub fn set_env(&self, name: impl Into<String>, value: impl Into<String>) {
        self.env_vars
            .write()
            .unwrap()
            .insert(name.into(), value.into());
    }

    /// Remove an environment variable.
    pub fn remove_env(&self, name: &str) {
        self.env_vars.write().unwrap().remove(name);
    }
}

impl ConfigEnv for MockEnv {
    fn get_env(&self, name: &str) -> Option<String> {
        self.env_vars.read().unwrap().get(name).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_real_env_missing_var() {
        let env = RealEnv::new();
        assert_eq!(env.get_env("READSYNC_SURELY_NOT_SET_ANYWHERE"), None);
    }

    #[test]
    fn test_mock_env_vars() {
        let env = MockEnv::new()
            .with_env("DB_HOST", "localhost")
            .with_env("DB_PORT", "5432");

        assert_eq!(env.get_env("DB_HOST"), Some("localhost".to_string()));
        assert_eq!(env.get_env("DB_PORT"), Some("5432".to_string()));
        assert_eq!(env.get_env("MISSING"), None);
    }

    #[test]
    fn test_mock_env_is_case_sensitive() {
        let env = MockEnv::new().with_env("PORT", "8080");
        assert_eq!(env.get_env("port"), None);
    }

    #[test]
    fn test_get_env_or_unset_and_empty_take_default() {
        let env = MockEnv::new().with_env("EMPTY", "");

        assert_eq!(env.get_env_or("UNSET", "disable"), "disable");
        assert_eq!(env.get_env_or("EMPTY", "disable"), "disable");
    }

    #[test]
    fn test_get_env_or_keeps_set_value() {
        let env = MockEnv::new().with_env("DB_SSLMODE", "verify-full");
        assert_eq!(env.get_env_or("DB_SSLMODE", "disable"), "verify-full");
    }

    #[test]
    fn test_mock_env_mutations() {
        let env = MockEnv::new().with_envs([("VAR", "original")]);

        env.set_env("VAR", "modified");
        assert_eq!(env.get_env("VAR"), Some("modified".to_string()));

        env.remove_env("VAR");
        assert_eq!(env.get_env("VAR"), None);
    }
}
