//! Tests for `Configuration::from_env`.
//!
//! These mutate process environment variables, so they run serially.

use std::time::Duration;

use serial_test::serial;
use yabadu_lib::{ConfigError, Configuration, Credentials};

const VARS: [&str; 7] = [
    "YABADU_BASE_PATH",
    "YABADU_ACCESS_TOKEN",
    "YABADU_API_KEY",
    "YABADU_API_KEY_HEADER",
    "YABADU_USERNAME",
    "YABADU_PASSWORD",
    "YABADU_TIMEOUT_SECS",
];

fn set_env(pairs: &[(&str, &str)]) {
    // SAFETY: tests in this file are serialized, no other thread touches the environment
    unsafe {
        for var in VARS {
            std::env::remove_var(var);
        }
        for (key, value) in pairs {
            std::env::set_var(key, value);
        }
    }
}

#[test]
#[serial]
fn test_from_env_with_basic_auth() {
    set_env(&[
        ("YABADU_BASE_PATH", "https://api.yabadu.com"),
        ("YABADU_USERNAME", "alice"),
        ("YABADU_PASSWORD", "hunter2"),
        ("YABADU_TIMEOUT_SECS", "12"),
    ]);

    let config = Configuration::from_env().unwrap();
    assert_eq!(config.base_path(), "https://api.yabadu.com");
    assert_eq!(config.timeout(), Duration::from_secs(12));
    assert_eq!(
        config.credentials(),
        Some(&Credentials::Basic {
            username: "alice".to_string(),
            password: "hunter2".to_string(),
        })
    );
}

#[test]
#[serial]
fn test_from_env_requires_base_path() {
    set_env(&[("YABADU_ACCESS_TOKEN", "t")]);

    let err = Configuration::from_env().unwrap_err();
    assert!(matches!(
        err,
        ConfigError::MissingField {
            field: "base_path"
        }
    ));
}

#[test]
#[serial]
fn test_from_env_rejects_two_schemes() {
    set_env(&[
        ("YABADU_BASE_PATH", "https://api.yabadu.com"),
        ("YABADU_ACCESS_TOKEN", "t"),
        ("YABADU_USERNAME", "alice"),
        ("YABADU_PASSWORD", "hunter2"),
    ]);

    let err = Configuration::from_env().unwrap_err();
    assert!(matches!(err, ConfigError::ConflictingCredentials { .. }));
}
