//! Database connection settings and DSN formatting.

use std::fmt;

use serde::Serialize;

use crate::config::FromEnv;
use crate::env::ConfigEnv;
use crate::error::ConfigValidation;
use crate::validate::{require, validate_all, Validate};
use crate::vars;

/// Database name used by [`DatabaseConfig::from_test_env`] when
/// `TEST_DB_NAME` is not set.
pub const DEFAULT_TEST_DB_NAME: &str = "readsync_test";

/// Connection settings for the PostgreSQL database.
///
/// All fields are kept as strings, exactly as read from the environment.
/// The password is skipped when serializing and redacted from `Debug`.
#[derive(Clone, Default, PartialEq, Eq, Serialize)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: String,
    pub user: String,
    #[serde(skip_serializing)]
    pub password: String,
    pub name: String,
    pub ssl_mode: String,
}

impl DatabaseConfig {
    /// Settings for test databases.
    ///
    /// Reads the `TEST_DB_*` variables, substituting a default for each one
    /// that is unset or empty. Never fails and never validates.
    pub fn from_test_env(env: &dyn ConfigEnv) -> Self {
        Self {
            host: env.get_env_or(vars::TEST_DB_HOST, "localhost"),
            port: env.get_env_or(vars::TEST_DB_PORT, "5433"),
            user: env.get_env_or(vars::TEST_DB_USER, "postgres"),
            password: env.get_env_or(vars::TEST_DB_PASSWORD, "password"),
            name: env.get_env_or(vars::TEST_DB_NAME, DEFAULT_TEST_DB_NAME),
            ssl_mode: env.get_env_or(vars::TEST_DB_SSLMODE, vars::DEFAULT_SSL_MODE),
        }
    }

    /// [`from_test_env`](Self::from_test_env) over the process environment.
    pub fn for_tests() -> Self {
        Self::from_test_env(&crate::env::RealEnv::new())
    }

    /// SSL mode to connect with; `disable` when none is configured.
    pub fn ssl_mode_or_default(&self) -> &str {
        if self.ssl_mode.is_empty() {
            vars::DEFAULT_SSL_MODE
        } else {
            &self.ssl_mode
        }
    }

    /// Key/value connection string understood by libpq-style drivers.
    ///
    /// Values are substituted verbatim, without quoting or escaping, and the
    /// settings are not re-validated.
    ///
    /// ```
    /// use readsync::DatabaseConfig;
    ///
    /// let db = DatabaseConfig {
    ///     host: "h".into(),
    ///     port: "5432".into(),
    ///     user: "u".into(),
    ///     password: "p".into(),
    ///     name: "d".into(),
    ///     ssl_mode: String::new(),
    /// };
    /// assert_eq!(
    ///     db.dsn(),
    ///     "host=h port=5432 dbname=d user=u password=p sslmode=disable"
    /// );
    /// ```
    pub fn dsn(&self) -> String {
        format!(
            "host={} port={} dbname={} user={} password={} sslmode={}",
            self.host,
            self.port,
            self.name,
            self.user,
            self.password,
            self.ssl_mode_or_default()
        )
    }
}

impl FromEnv for DatabaseConfig {
    fn from_env(env: &dyn ConfigEnv) -> Self {
        Self {
            host: env.get_env(vars::DB_HOST).unwrap_or_default(),
            port: env.get_env(vars::DB_PORT).unwrap_or_default(),
            user: env.get_env(vars::DB_USER).unwrap_or_default(),
            password: env.get_env(vars::DB_PASSWORD).unwrap_or_default(),
            name: env.get_env(vars::DB_NAME).unwrap_or_default(),
            ssl_mode: env.get_env_or(vars::DB_SSLMODE, vars::DEFAULT_SSL_MODE),
        }
    }
}

impl Validate for DatabaseConfig {
    fn validate(&self) -> ConfigValidation<()> {
        validate_all([
            require(&self.host, vars::DB_HOST),
            require(&self.port, vars::DB_PORT),
            require(&self.user, vars::DB_USER),
            require(&self.password, vars::DB_PASSWORD),
            require(&self.name, vars::DB_NAME),
        ])
    }
}

impl fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let password = if self.password.is_empty() {
            ""
        } else {
            "[REDACTED]"
        };
        f.debug_struct("DatabaseConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &password)
            .field("name", &self.name)
            .field("ssl_mode", &self.ssl_mode)
            .finish()
    }
}
