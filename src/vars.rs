//! Names of the environment variables read at startup.
//!
//! Names are case-sensitive.

/// Port the HTTP server listens on.
pub const PORT: &str = "PORT";
/// Deployment environment name (e.g. `development`, `production`).
pub const APP_ENV: &str = "APP_ENV";
/// Comma-separated list of origins allowed by CORS.
pub const CORS_ORIGINS: &str = "CORS_ORIGINS";

pub const DB_HOST: &str = "DB_HOST";
pub const DB_PORT: &str = "DB_PORT";
pub const DB_USER: &str = "DB_USER";
pub const DB_PASSWORD: &str = "DB_PASSWORD";
pub const DB_NAME: &str = "DB_NAME";
/// Optional; defaults to [`DEFAULT_SSL_MODE`].
pub const DB_SSLMODE: &str = "DB_SSLMODE";

/// Test database variables. Each one has a default, see
/// [`DatabaseConfig::from_test_env`](crate::DatabaseConfig::from_test_env).
pub const TEST_DB_HOST: &str = "TEST_DB_HOST";
pub const TEST_DB_PORT: &str = "TEST_DB_PORT";
pub const TEST_DB_USER: &str = "TEST_DB_USER";
pub const TEST_DB_PASSWORD: &str = "TEST_DB_PASSWORD";
pub const TEST_DB_NAME: &str = "TEST_DB_NAME";
pub const TEST_DB_SSLMODE: &str = "TEST_DB_SSLMODE";

/// SSL mode used when none is configured.
pub const DEFAULT_SSL_MODE: &str = "disable";

/// Required variables in the order they are reported when missing.
pub const REQUIRED: [&str; 8] = [
    PORT,
    APP_ENV,
    CORS_ORIGINS,
    DB_HOST,
    DB_PORT,
    DB_USER,
    DB_PASSWORD,
    DB_NAME,
];
