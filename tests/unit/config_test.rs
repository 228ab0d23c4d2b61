//! Unit tests for configuration loading and validation

use portfolio_api::config::{LogFormat, Settings};
use std::collections::HashMap;
use std::io::Write;
use tempfile::NamedTempFile;

fn env(vars: &[(&str, &str)]) -> Option<HashMap<String, String>> {
    Some(
        vars.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect(),
    )
}

fn yaml_file(content: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_defaults_without_file() {
    let settings = Settings::load_with_env("does/not/exist.yaml", env(&[])).unwrap();

    assert_eq!(settings.server.host, "0.0.0.0");
    assert_eq!(settings.server.port, 8000);
    assert_eq!(settings.cors.allowed_origins, vec!["http://localhost:3000"]);
    assert_eq!(settings.redis.port, 6379);
    assert_eq!(settings.redis.db, 0);
    assert_eq!(settings.redis.ttl_secs, 3600);
    assert!(settings.chatbot.endpoint.is_empty());
    assert_eq!(settings.logging.level, "info");
    assert_eq!(settings.logging.format, LogFormat::Json);
    assert!(settings.validate().is_ok());
}

#[test]
fn test_load_yaml_file() {
    let file = yaml_file(
        r#"
server:
  port: 9000
cors:
  allowed_origins:
    - "https://portfolio.example.com"
    - "http://localhost:3000"
redis:
  host: redis
  db: 3
logging:
  format: pretty
"#,
    );

    let settings = Settings::load_with_env(file.path(), env(&[])).unwrap();

    assert_eq!(settings.server.port, 9000);
    assert_eq!(settings.server.host, "0.0.0.0");
    assert_eq!(settings.cors.allowed_origins.len(), 2);
    assert_eq!(settings.redis.connection_url(), "redis://redis:6379/3");
    assert_eq!(settings.logging.format, LogFormat::Pretty);
}

#[test]
fn test_prefixed_env_overrides_file() {
    let file = yaml_file("server:\n  port: 9000\n");

    let settings = Settings::load_with_env(
        file.path(),
        env(&[
            ("PORTFOLIO__SERVER__PORT", "9100"),
            (
                "PORTFOLIO__CORS__ALLOWED_ORIGINS",
                "https://a.example.com,https://b.example.com",
            ),
        ]),
    )
    .unwrap();

    assert_eq!(settings.server.port, 9100);
    assert_eq!(
        settings.cors.allowed_origins,
        vec!["https://a.example.com", "https://b.example.com"]
    );
}

#[test]
fn test_flat_env_names() {
    let settings = Settings::load_with_env(
        "does/not/exist.yaml",
        env(&[
            ("REDIS_HOST", "cache.internal"),
            ("REDIS_PORT", "6380"),
            ("CHATBOT_ENDPOINT", "https://bot.example.com/chat"),
            ("CHATBOT_API_KEY", "secret"),
        ]),
    )
    .unwrap();

    assert_eq!(settings.redis.host, "cache.internal");
    assert_eq!(settings.redis.port, 6380);
    assert_eq!(settings.chatbot.endpoint, "https://bot.example.com/chat");
    assert_eq!(settings.chatbot.api_key, "secret");
    assert!(settings.chatbot.is_configured());
}

#[test]
fn test_flat_env_invalid_redis_port() {
    let result = Settings::load_with_env(
        "does/not/exist.yaml",
        env(&[("REDIS_PORT", "not-a-port")]),
    );
    assert!(result.is_err());
}

#[test]
fn test_settings_validation_invalid_port() {
    let mut settings = Settings::default();
    settings.server.port = 0;
    assert!(settings.validate().is_err());
}

#[test]
fn test_settings_validation_empty_origins() {
    let mut settings = Settings::default();
    settings.cors.allowed_origins.clear();
    assert!(settings.validate().is_err());
}

#[test]
fn test_settings_validation_mixed_wildcard() {
    let mut settings = Settings::default();
    settings.cors.allow_credentials = false;
    settings.cors.allowed_origins = vec!["*".to_string(), "http://localhost:3000".to_string()];
    assert!(settings.validate().is_err());
}

#[test]
fn test_settings_validation_redis() {
    let mut settings = Settings::default();
    settings.redis.ttl_secs = 0;
    assert!(settings.validate().is_err());

    let mut settings = Settings::default();
    settings.redis.port = 0;
    assert!(settings.validate().is_err());
}
