//! Configuration management for the Framez auth core
//!
//! All values have working defaults; an optional `config.toml` and
//! `FRAMEZ_`-prefixed environment variables override them.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Tunables for the auth core and its demo data.
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    /// Minimum accepted password length, in characters
    pub min_password_length: usize,

    /// Number of avatar images available in the external avatar service
    pub avatar_pool_size: u32,

    /// Avatar URL template; `{}` is replaced with a random pool index
    pub avatar_url_template: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            min_password_length: 6,
            avatar_pool_size: 70,
            avatar_url_template: "https://i.pravatar.cc/150?img={}".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from config.toml (if present) with environment
    /// overrides, on top of built-in defaults.
    pub fn load() -> Result<Self, ConfigError> {
        let defaults = AppConfig::default();

        let settings = Config::builder()
            .set_default("min_password_length", defaults.min_password_length as u64)?
            .set_default("avatar_pool_size", u64::from(defaults.avatar_pool_size))?
            .set_default("avatar_url_template", defaults.avatar_url_template)?
            .add_source(File::with_name("config").required(false))
            .add_source(Environment::with_prefix("FRAMEZ"))
            .build()?;

        let config: AppConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validation for all configuration values
    fn validate(&self) -> Result<(), ConfigError> {
        if self.min_password_length == 0 {
            return Err(ConfigError::Message(
                "min_password_length must be greater than 0".into(),
            ));
        }

        if self.avatar_pool_size == 0 {
            return Err(ConfigError::Message(
                "avatar_pool_size must be greater than 0".into(),
            ));
        }

        if !self.avatar_url_template.contains("{}") {
            return Err(ConfigError::Message(
                "avatar_url_template must contain a {} placeholder".into(),
            ));
        }

        Ok(())
    }
}
