//! Top-level application settings.

use serde::Serialize;

use crate::config::FromEnv;
use crate::database::DatabaseConfig;
use crate::env::ConfigEnv;
use crate::error::ConfigValidation;
use crate::validate::{require, require_list, validate_all, Validate};
use crate::vars;

/// Settings the service needs before it can start.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AppConfig {
    /// Listen port, kept as the raw string from `PORT`.
    pub port: String,
    /// Deployment environment from `APP_ENV`.
    pub environment: String,
    /// `CORS_ORIGINS` split on `,`, items untrimmed.
    pub allowed_origins: Vec<String>,
    pub database: DatabaseConfig,
}

impl FromEnv for AppConfig {
    fn from_env(env: &dyn ConfigEnv) -> Self {
        Self {
            port: env.get_env(vars::PORT).unwrap_or_default(),
            environment: env.get_env(vars::APP_ENV).unwrap_or_default(),
            allowed_origins: split_origins(&env.get_env(vars::CORS_ORIGINS).unwrap_or_default()),
            database: DatabaseConfig::from_env(env),
        }
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> ConfigValidation<()> {
        validate_all([
            require(&self.port, vars::PORT),
            require(&self.environment, vars::APP_ENV),
            require_list(&self.allowed_origins, vars::CORS_ORIGINS),
            self.database.validate(),
        ])
    }
}

/// Split a comma-separated origin list. An empty input yields `[""]`.
fn split_origins(raw: &str) -> Vec<String> {
    raw.split(',').map(str::to_string).collect()
}
