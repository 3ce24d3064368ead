use std::collections::HashMap;
use std::env::VarError;

use super::*;

fn lookup_from_map<'a>(
    map: &'a HashMap<&'a str, &'a str>,
) -> impl Fn(&str) -> Result<String, VarError> + 'a {
    move |key| {
        map.get(key)
            .map(|v| (*v).to_string())
            .ok_or(VarError::NotPresent)
    }
}

#[test]
fn parse_environment_development() {
    assert_eq!(
        parse_environment("development").unwrap(),
        Environment::Development
    );
}

#[test]
fn parse_environment_test() {
    assert_eq!(parse_environment("test").unwrap(), Environment::Test);
}

#[test]
fn parse_environment_production() {
    assert_eq!(
        parse_environment("production").unwrap(),
        Environment::Production
    );
}

#[test]
fn parse_environment_unknown_fails() {
    let err = parse_environment("staging").unwrap_err();
    assert!(matches!(err, ConfigError::InvalidEnvVar { ref var, .. } if var == "SWATCH_ENV"));
}

#[test]
fn build_app_config_uses_defaults_with_empty_env() {
    let map: HashMap<&str, &str> = HashMap::new();
    let result = build_app_config(lookup_from_map(&map));
    assert!(result.is_ok(), "expected Ok, got: {result:?}");
    let cfg = result.unwrap();
    assert_eq!(cfg.env, Environment::Development);
    assert_eq!(cfg.log_level, "info");
    assert!(cfg.storefront_url.is_none());
    assert_eq!(cfg.cards_path.to_str(), Some("./config/cards.yaml"));
    assert_eq!(cfg.low_stock_threshold, 5);
    assert_eq!(cfg.request_timeout_secs, 30);
    assert_eq!(cfg.user_agent, "swatch/0.1 (variant-picker)");
}

#[test]
fn build_app_config_reads_overrides() {
    let mut map = HashMap::new();
    map.insert("SWATCH_ENV", "production");
    map.insert("SWATCH_LOG_LEVEL", "debug");
    map.insert("SWATCH_STOREFRONT_URL", "https://shop.example.com");
    map.insert("SWATCH_LOW_STOCK_THRESHOLD", "3");
    map.insert("SWATCH_REQUEST_TIMEOUT_SECS", "10");
    map.insert("SWATCH_USER_AGENT", "custom-agent/2.0");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.env, Environment::Production);
    assert_eq!(cfg.log_level, "debug");
    assert_eq!(
        cfg.storefront_url.as_deref(),
        Some("https://shop.example.com")
    );
    assert_eq!(cfg.low_stock_threshold, 3);
    assert_eq!(cfg.request_timeout_secs, 10);
    assert_eq!(cfg.user_agent, "custom-agent/2.0");
}

#[test]
fn build_app_config_blank_storefront_url_is_none() {
    let mut map = HashMap::new();
    map.insert("SWATCH_STOREFRONT_URL", "   ");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert!(cfg.storefront_url.is_none());
}

#[test]
fn build_app_config_low_stock_threshold_invalid() {
    let mut map = HashMap::new();
    map.insert("SWATCH_LOW_STOCK_THRESHOLD", "not-a-number");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "SWATCH_LOW_STOCK_THRESHOLD"),
        "expected InvalidEnvVar(SWATCH_LOW_STOCK_THRESHOLD), got: {result:?}"
    );
}

#[test]
fn build_app_config_request_timeout_invalid() {
    let mut map = HashMap::new();
    map.insert("SWATCH_REQUEST_TIMEOUT_SECS", "-1");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "SWATCH_REQUEST_TIMEOUT_SECS"),
        "expected InvalidEnvVar(SWATCH_REQUEST_TIMEOUT_SECS), got: {result:?}"
    );
}
