//! Application settings and configuration management

use crate::error::{AppError, Result};
use axum::http::HeaderValue;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::path::Path;

/// Default location of the optional configuration file
pub const DEFAULT_CONFIG_PATH: &str = "config/portfolio.yaml";

/// Prefix for structured environment overrides (`PORTFOLIO__SERVER__PORT`)
pub const ENV_PREFIX: &str = "PORTFOLIO";

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    pub server: ServerConfig,
    pub cors: CorsConfig,
    pub redis: RedisConfig,
    pub chatbot: ChatbotConfig,
    pub logging: LoggingConfig,
}

/// Server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

impl ServerConfig {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Cross-origin configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CorsConfig {
    /// Allowed origins; the single entry `*` allows any origin
    #[serde(default = "default_allowed_origins")]
    pub allowed_origins: Vec<String>,
    #[serde(default = "default_true")]
    pub allow_credentials: bool,
}

fn default_allowed_origins() -> Vec<String> {
    vec!["http://localhost:3000".to_string()]
}

fn default_true() -> bool {
    true
}

impl CorsConfig {
    pub fn allows_any_origin(&self) -> bool {
        self.allowed_origins.iter().any(|o| o == "*")
    }
}

/// Redis connection settings. Loaded and validated but no handler uses a
/// connection yet.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RedisConfig {
    #[serde(default = "default_redis_host")]
    pub host: String,
    #[serde(default = "default_redis_port")]
    pub port: u16,
    #[serde(default)]
    pub db: u32,
    #[serde(default = "default_redis_ttl")]
    pub ttl_secs: u64,
}

fn default_redis_host() -> String {
    "localhost".to_string()
}

fn default_redis_port() -> u16 {
    6379
}

fn default_redis_ttl() -> u64 {
    3600
}

impl RedisConfig {
    /// Connection URL in the `redis://host:port/db` form
    pub fn connection_url(&self) -> String {
        format!("redis://{}:{}/{}", self.host, self.port, self.db)
    }
}

/// External chatbot service settings
#[derive(Clone, Default, Deserialize, Serialize)]
pub struct ChatbotConfig {
    #[serde(default)]
    pub endpoint: String,
    #[serde(default)]
    pub api_key: String,
}

impl ChatbotConfig {
    pub fn is_configured(&self) -> bool {
        !self.endpoint.is_empty()
    }
}

impl fmt::Debug for ChatbotConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChatbotConfig")
            .field("endpoint", &self.endpoint)
            .field(
                "api_key",
                &if self.api_key.is_empty() { "" } else { "<redacted>" },
            )
            .finish()
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: LogFormat,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> LogFormat {
    LogFormat::Json
}

/// Log output format
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Json,
    #[serde(alias = "text")]
    Pretty,
}

impl Settings {
    /// Load settings from the default file, `.env`, and the process environment
    pub fn load() -> Result<Self> {
        Self::load_from_path(DEFAULT_CONFIG_PATH)
    }

    /// Load settings from a specific configuration file path
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::load_with_env(path, None)
    }

    /// Load settings with an explicit environment map instead of the process
    /// environment. `None` reads the real environment.
    pub fn load_with_env<P: AsRef<Path>>(
        path: P,
        env: Option<HashMap<String, String>>,
    ) -> Result<Self> {
        let path = path.as_ref();

        let format = if path
            .extension()
            .map_or(false, |ext| ext == "yaml" || ext == "yml")
        {
            FileFormat::Yaml
        } else {
            FileFormat::Toml
        };

        let lookup = |key: &str| -> Option<String> {
            let value = match &env {
                Some(vars) => vars.get(key).cloned(),
                None => std::env::var(key).ok(),
            };
            value.filter(|value| !value.is_empty())
        };

        let redis_port = lookup("REDIS_PORT")
            .map(|port| {
                port.parse::<u16>()
                    .map(i64::from)
                    .map_err(|e| AppError::config(format!("Invalid REDIS_PORT '{}': {}", port, e)))
            })
            .transpose()?;

        let mut builder = Config::builder()
            .set_default("server.host", default_host())?
            .set_default("server.port", i64::from(default_port()))?
            .set_default("cors.allowed_origins", default_allowed_origins())?
            .set_default("cors.allow_credentials", true)?
            .set_default("redis.host", default_redis_host())?
            .set_default("redis.port", i64::from(default_redis_port()))?
            .set_default("redis.db", 0)?
            .set_default("redis.ttl_secs", 3600)?
            .set_default("chatbot.endpoint", "")?
            .set_default("chatbot.api_key", "")?
            .set_default("logging.level", default_log_level())?
            .set_default("logging.format", "json")?;

        if path.exists() {
            builder = builder.add_source(File::from(path).format(format));
        }

        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .list_separator(",")
                .with_list_parse_key("cors.allowed_origins")
                .try_parsing(true)
                .source(env.clone()),
        );

        // Flat variable names used by earlier deployments take precedence
        builder = builder
            .set_override_option("redis.host", lookup("REDIS_HOST"))?
            .set_override_option("redis.port", redis_port)?
            .set_override_option("chatbot.endpoint", lookup("CHATBOT_ENDPOINT"))?
            .set_override_option("chatbot.api_key", lookup("CHATBOT_API_KEY"))?;

        let settings: Settings = builder.build()?.try_deserialize()?;
        Ok(settings)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(AppError::config("Server port cannot be 0"));
        }

        if self.cors.allowed_origins.is_empty() {
            return Err(AppError::config(
                "At least one CORS origin must be configured",
            ));
        }

        if self.cors.allows_any_origin() {
            if self.cors.allowed_origins.len() > 1 {
                return Err(AppError::config(
                    "CORS origin '*' cannot be combined with other origins",
                ));
            }
            if self.cors.allow_credentials {
                return Err(AppError::config(
                    "CORS credentials cannot be allowed for any origin ('*')",
                ));
            }
        } else {
            for origin in &self.cors.allowed_origins {
                HeaderValue::from_str(origin).map_err(|_| {
                    AppError::config(format!("Invalid CORS origin '{}'", origin))
                })?;
            }
        }

        if self.redis.port == 0 {
            return Err(AppError::config("Redis port cannot be 0"));
        }

        if self.redis.ttl_secs == 0 {
            return Err(AppError::config("Redis TTL must be greater than 0"));
        }

        Ok(())
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: default_host(),
                port: default_port(),
            },
            cors: CorsConfig {
                allowed_origins: default_allowed_origins(),
                allow_credentials: true,
            },
            redis: RedisConfig {
                host: default_redis_host(),
                port: default_redis_port(),
                db: 0,
                ttl_secs: default_redis_ttl(),
            },
            chatbot: ChatbotConfig::default(),
            logging: LoggingConfig {
                level: default_log_level(),
                format: default_log_format(),
            },
        }
    }
}
