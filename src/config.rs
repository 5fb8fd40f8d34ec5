//! Configuration management for the RAX login core
//!
//! Loads `config.toml` with environment overrides and checks the values before
//! anything is wired from them.

use config::{Config, Environment, File, FileFormat};
use serde::Deserialize;
use std::time::Duration;

/// Complete login core configuration
#[derive(Debug, Deserialize, Clone)]
pub struct AuthConfig {
    /// Default log filter, overridden by RUST_LOG
    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default)]
    pub validation: ValidationConfig,

    #[serde(default)]
    pub lookup: LookupConfig,

    #[serde(default)]
    pub hashing: HashingConfig,

    #[serde(default)]
    pub token: TokenConfig,

    #[serde(default)]
    pub exposure: ExposureConfig,

    /// Credentials served by the in-process credential source
    #[serde(default)]
    pub users: Vec<SeedUser>,
}

/// Structural rules applied to a login request before any lookup
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ValidationConfig {
    pub min_login_length: usize,
    pub max_login_length: usize,
    pub min_password_length: usize,
    pub max_password_length: usize,
}

/// Credential lookup exchange settings
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LookupConfig {
    /// Time to wait for the credential store to answer one request
    pub request_timeout_ms: u64,

    /// Capacity of the request queue feeding the responder
    pub channel_capacity: usize,
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct HashingConfig {
    /// Service-wide secret appended to every password before hashing
    pub pepper: String,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct TokenConfig {
    pub secret: String,
}

/// How failures are presented to callers outside the core
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ExposureConfig {
    /// Render "not found" and "forbidden" with one generic message
    pub collapse_denials: bool,
}

/// A credential entry for the in-process credential source
#[derive(Debug, Deserialize, Clone)]
pub struct SeedUser {
    pub login: String,
    pub password: String,
    pub salt: String,
    #[serde(default)]
    pub user_id: Option<uuid::Uuid>,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            min_login_length: 1,
            max_login_length: 255,
            min_password_length: 1,
            max_password_length: 128,
        }
    }
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            request_timeout_ms: 5_000,
            channel_capacity: 64,
        }
    }
}

impl Default for TokenConfig {
    fn default() -> Self {
        Self {
            secret: "change-me".to_string(),
        }
    }
}

impl Default for ExposureConfig {
    fn default() -> Self {
        Self {
            collapse_denials: true,
        }
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            validation: ValidationConfig::default(),
            lookup: LookupConfig::default(),
            hashing: HashingConfig::default(),
            token: TokenConfig::default(),
            exposure: ExposureConfig::default(),
            users: Vec::new(),
        }
    }
}

impl AuthConfig {
    /// Load configuration from config.toml with environment overrides
    pub fn load() -> Result<Self, config::ConfigError> {
        // Packaged layout first, then the working directory
        let config_paths = ["rax-login/config", "config"];

        let mut last_error = None;

        for config_path in &config_paths {
            match Config::builder()
                .add_source(File::with_name(config_path))
                .add_source(Environment::with_prefix("RAX_LOGIN").separator("__"))
                .build()
            {
                Ok(settings) => {
                    let config: AuthConfig = settings.try_deserialize()?;
                    config.validate()?;
                    return Ok(config);
                }
                Err(e) => {
                    last_error = Some(e);
                    continue;
                }
            }
        }

        Err(config::ConfigError::Message(format!(
            "Failed to load config.toml from any location. Tried: {config_paths:?}. Last error: {last_error:?}"
        )))
    }

    /// Parse configuration from TOML text, without environment overrides
    pub fn from_toml_str(toml: &str) -> Result<Self, config::ConfigError> {
        let config: AuthConfig = Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()?
            .try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validation for all configuration values
    pub fn validate(&self) -> Result<(), config::ConfigError> {
        let v = &self.validation;

        if v.min_login_length == 0 || v.min_password_length == 0 {
            return Err(config::ConfigError::Message(
                "minimum login and password lengths must be at least 1".into(),
            ));
        }

        if v.min_login_length > v.max_login_length {
            return Err(config::ConfigError::Message(
                "min_login_length must not exceed max_login_length".into(),
            ));
        }

        if v.min_password_length > v.max_password_length {
            return Err(config::ConfigError::Message(
                "min_password_length must not exceed max_password_length".into(),
            ));
        }

        if self.lookup.request_timeout_ms == 0 {
            return Err(config::ConfigError::Message(
                "request_timeout_ms must be greater than 0".into(),
            ));
        }

        if self.lookup.channel_capacity == 0 {
            return Err(config::ConfigError::Message(
                "channel_capacity must be greater than 0".into(),
            ));
        }

        if self.token.secret.is_empty() {
            return Err(config::ConfigError::Message(
                "token secret cannot be empty".into(),
            ));
        }

        Ok(())
    }
}

impl LookupConfig {
    /// Get the lookup timeout as Duration
    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(AuthConfig::default().validate().is_ok());
    }

    #[test]
    fn test_parse_partial_toml() {
        let config = AuthConfig::from_toml_str(
            r#"
            log_level = "debug"

            [validation]
            max_login_length = 64

            [lookup]
            request_timeout_ms = 250

            [[users]]
            login = "alice"
            password = "alice123"
            salt = "s1"
            "#,
        )
        .unwrap();

        assert_eq!(config.log_level, "debug");
        assert_eq!(config.validation.max_login_length, 64);
        assert_eq!(config.validation.min_login_length, 1);
        assert_eq!(config.lookup.request_timeout(), Duration::from_millis(250));
        assert_eq!(config.lookup.channel_capacity, 64);
        assert!(config.exposure.collapse_denials);
        assert_eq!(config.users.len(), 1);
        assert!(config.users[0].user_id.is_none());
    }

    #[test]
    fn test_rejects_inverted_bounds() {
        let result = AuthConfig::from_toml_str(
            r#"
            [validation]
            min_password_length = 20
            max_password_length = 8
            "#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_rejects_zero_timeout() {
        let mut config = AuthConfig::default();
        config.lookup.request_timeout_ms = 0;
        assert!(config.validate().is_err());
    }
}
