//! Integration tests for required environment variable validation.
//!
//! These tests drive `Config::<AppConfig>::load_with_env` end to end through
//! the public API, including error accumulation and message formatting.

use readsync::prelude::*;
use readsync::vars;

fn complete_env() -> MockEnv {
    MockEnv::new().with_envs([
        (vars::PORT, "8080"),
        (vars::APP_ENV, "production"),
        (vars::CORS_ORIGINS, "https://readsync.app"),
        (vars::DB_HOST, "db.internal"),
        (vars::DB_PORT, "5432"),
        (vars::DB_USER, "readsync"),
        (vars::DB_PASSWORD, "hunter2"),
        (vars::DB_NAME, "readsync"),
    ])
}

#[test]
fn test_all_required_vars_present() {
    let config = Config::<AppConfig>::load_with_env(&complete_env()).unwrap();

    assert_eq!(config.port, "8080");
    assert_eq!(config.environment, "production");
    assert_eq!(config.allowed_origins, vec!["https://readsync.app"]);
    assert_eq!(
        config.database.dsn(),
        "host=db.internal port=5432 dbname=readsync user=readsync password=hunter2 sslmode=disable"
    );
}

#[test]
fn test_single_required_var_missing() {
    let env = complete_env();
    env.remove_env(vars::DB_PASSWORD);

    let errors = Config::<AppConfig>::load_with_env(&env).unwrap_err();

    assert_eq!(errors.len(), 1);
    assert!(matches!(
        errors.first(),
        ConfigError::MissingVariable { name: "DB_PASSWORD" }
    ));
    assert_eq!(
        errors.to_string(),
        "required environment variables are not set: DB_PASSWORD"
    );
}

#[test]
fn test_empty_value_counts_as_missing() {
    let env = complete_env();
    env.set_env(vars::APP_ENV, "");

    let errors = Config::<AppConfig>::load_with_env(&env).unwrap_err();
    assert_eq!(errors.variables(), vec!["APP_ENV"]);
}

#[test]
fn test_each_required_var_individually() {
    for name in vars::REQUIRED {
        let env = complete_env();
        env.remove_env(name);

        let errors = Config::<AppConfig>::load_with_env(&env).unwrap_err();
        let message = errors.to_string();

        assert_eq!(errors.variables(), vec![name], "unsetting {}", name);
        assert!(message.contains(name), "{} not in '{}'", name, message);
    }
}

#[test]
fn test_all_required_vars_missing() {
    let errors = Config::<AppConfig>::load_with_env(&MockEnv::new()).unwrap_err();

    assert_eq!(errors.len(), 8);
    assert_eq!(
        errors.to_string(),
        "required environment variables are not set: PORT, APP_ENV, CORS_ORIGINS, \
         DB_HOST, DB_PORT, DB_USER, DB_PASSWORD, DB_NAME"
    );
}

#[test]
fn test_cors_origins_empty_is_same_as_unset() {
    let unset = complete_env();
    unset.remove_env(vars::CORS_ORIGINS);

    let empty = complete_env();
    empty.set_env(vars::CORS_ORIGINS, "");

    let unset_errors = Config::<AppConfig>::load_with_env(&unset).unwrap_err();
    let empty_errors = Config::<AppConfig>::load_with_env(&empty).unwrap_err();

    assert_eq!(unset_errors.variables(), vec!["CORS_ORIGINS"]);
    assert_eq!(unset_errors, empty_errors);
}

#[test]
fn test_cors_origins_list() {
    let env = complete_env();
    env.set_env(vars::CORS_ORIGINS, "http://a.com,http://b.com");

    let config = Config::<AppConfig>::load_with_env(&env).unwrap();
    assert_eq!(config.allowed_origins, vec!["http://a.com", "http://b.com"]);
}

#[test]
fn test_ssl_mode_is_optional() {
    let env = complete_env();
    env.set_env(vars::DB_SSLMODE, "require");

    let config = Config::<AppConfig>::load_with_env(&env).unwrap();
    assert_eq!(config.database.ssl_mode, "require");
    assert!(config.database.dsn().ends_with("sslmode=require"));

    env.set_env(vars::DB_SSLMODE, "");
    let config = Config::<AppConfig>::load_with_env(&env).unwrap();
    assert_eq!(config.database.ssl_mode, "disable");
}

#[test]
fn test_loading_is_idempotent() {
    let env = complete_env();

    let first = Config::<AppConfig>::load_with_env(&env).unwrap();
    let second = Config::<AppConfig>::load_with_env(&env).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_database_section_loads_alone() {
    let env = complete_env();
    env.remove_env(vars::PORT);
    env.remove_env(vars::CORS_ORIGINS);

    let db = Config::<DatabaseConfig>::load_with_env(&env).unwrap();
    assert_eq!(db.host, "db.internal");
}

#[test]
fn test_test_database_defaults_need_no_env() {
    let db = DatabaseConfig::from_test_env(&MockEnv::new());

    assert_eq!(db.host, "localhost");
    assert_eq!(db.port, "5433");
    assert_eq!(db.user, "postgres");
    assert_eq!(db.password, "password");
    assert_eq!(db.name, "readsync_test");
    assert_eq!(db.ssl_mode, "disable");
    assert_eq!(
        db.dsn(),
        "host=localhost port=5433 dbname=readsync_test user=postgres password=password sslmode=disable"
    );
}
