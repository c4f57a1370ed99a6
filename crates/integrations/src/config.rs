//! Broadcast configuration, read from environment variables.
//!
//! | Variable                   | Default               |
//! |----------------------------|-----------------------|
//! | `BROADCASTS_ENABLED`       | `false`               |
//! | `APP_ENV`                  | `production`          |
//! | `SOURCE_SYSTEM_ID`         | `back-office-appeals` |
//! | `SCHEMA_DIR`               | bundled schemas       |
//! | `REDIS_URL`                | unset                 |
//! | `BROADCAST_CHANNEL_PREFIX` | empty                 |

use std::path::PathBuf;
use std::sync::Arc;

use thiserror::Error;

use appeals_events::DEFAULT_SOURCE_SYSTEM_ID;

use crate::schema::{
    BundledSchemas, DirectorySchemaSource, InMemorySchemaCache, SchemaCache, SchemaSource,
    SchemaValidator,
};

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{name} must be a boolean (true/false/1/0), got '{value}'")]
    InvalidBool { name: &'static str, value: String },
    #[error("{name} must not be empty")]
    Empty { name: &'static str },
}

/// Deployment environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    #[default]
    Production,
    Other(String),
}

impl Environment {
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "development" => Environment::Development,
            "test" => Environment::Test,
            "production" | "prod" => Environment::Production,
            other => Environment::Other(other.to_string()),
        }
    }

    pub fn is_development(&self) -> bool {
        matches!(self, Environment::Development)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BroadcastConfig {
    pub broadcasts_enabled: bool,
    pub environment: Environment,
    pub source_system_id: String,
    /// Load schemas from `<dir>/events` and `<dir>/commands` instead of the
    /// bundled copies.
    pub schema_dir: Option<PathBuf>,
    pub redis_url: Option<String>,
    pub channel_prefix: String,
}

impl Default for BroadcastConfig {
    fn default() -> Self {
        Self {
            broadcasts_enabled: false,
            environment: Environment::default(),
            source_system_id: DEFAULT_SOURCE_SYSTEM_ID.to_string(),
            schema_dir: None,
            redis_url: None,
            channel_prefix: String::new(),
        }
    }
}

impl BroadcastConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from an arbitrary variable lookup (tests pass a map).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup("BROADCASTS_ENABLED") {
            config.broadcasts_enabled = parse_bool("BROADCASTS_ENABLED", &value)?;
        }

        match lookup("APP_ENV") {
            Some(value) => config.environment = Environment::parse(&value),
            None => tracing::warn!("APP_ENV not set, assuming production"),
        }

        if let Some(value) = lookup("SOURCE_SYSTEM_ID") {
            let value = value.trim();
            if value.is_empty() {
                return Err(ConfigError::Empty {
                    name: "SOURCE_SYSTEM_ID",
                });
            }
            config.source_system_id = value.to_string();
        }

        config.schema_dir = lookup("SCHEMA_DIR")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);
        config.redis_url = lookup("REDIS_URL").filter(|v| !v.trim().is_empty());
        config.channel_prefix = lookup("BROADCAST_CHANNEL_PREFIX").unwrap_or_default();

        Ok(config)
    }

    pub fn with_broadcasts_enabled(mut self, enabled: bool) -> Self {
        self.broadcasts_enabled = enabled;
        self
    }

    pub fn with_environment(mut self, environment: Environment) -> Self {
        self.environment = environment;
        self
    }

    pub fn with_source_system_id(mut self, id: impl Into<String>) -> Self {
        self.source_system_id = id.into();
        self
    }

    pub fn with_schema_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.schema_dir = Some(dir.into());
        self
    }

    pub fn with_redis_url(mut self, url: impl Into<String>) -> Self {
        self.redis_url = Some(url.into());
        self
    }

    pub fn with_channel_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.channel_prefix = prefix.into();
        self
    }

    /// Broadcasting runs when enabled, and always in development.
    pub fn broadcasts_active(&self) -> bool {
        self.broadcasts_enabled || self.environment.is_development()
    }

    /// Schema source selected by `schema_dir`.
    pub fn schema_source(&self) -> Arc<dyn SchemaSource> {
        match &self.schema_dir {
            Some(dir) => Arc::new(DirectorySchemaSource::new(dir.clone())),
            None => Arc::new(BundledSchemas),
        }
    }
}

impl SchemaValidator {
    /// Validator over the configured schema source with the given cache.
    pub fn from_config(config: &BroadcastConfig, cache: Arc<dyn SchemaCache>) -> Self {
        Self::new(config.schema_source(), cache)
    }

    /// Validator over the configured schema source with a private cache.
    pub fn from_config_in_memory(config: &BroadcastConfig) -> Self {
        Self::from_config(config, Arc::new(InMemorySchemaCache::new()))
    }
}

fn parse_bool(name: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" => Ok(true),
        "false" | "0" | "" => Ok(false),
        _ => Err(ConfigError::InvalidBool {
            name,
            value: value.to_string(),
        }),
    }
}
