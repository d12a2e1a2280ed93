use std::path::Path;

use crate::config::env_overlay;
use crate::config::openai_config::OpenAIConfig;
use crate::domain::errors::ConfigError;

/// Process-wide application configuration.
///
/// Built once by the entry point, then shared by reference with whichever
/// components need it. Nothing mutates it after load.
#[derive(Debug)]
pub struct AppConfig {
    pub openai: OpenAIConfig,
}

impl AppConfig {
    /// Build the configuration from the current process environment.
    ///
    /// # Errors
    /// Returns [`ConfigError::ApiKeyMissing`] when the API key is unset or
    /// empty.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            openai: OpenAIConfig::from_env()?,
        })
    }

    /// Startup entry point: apply the `.env` overlay, then build the
    /// configuration. Call once from `main` and abort with `?` on failure.
    pub fn load() -> anyhow::Result<Self> {
        env_overlay::load_environment_overlay()?;
        let config = Self::from_env()?;
        Ok(config)
    }

    /// Same as [`AppConfig::load`], reading the overlay from an explicit
    /// `.env` path.
    pub fn load_from(env_file: impl AsRef<Path>) -> anyhow::Result<Self> {
        env_overlay::load_environment_overlay_from(env_file)?;
        let config = Self::from_env()?;
        Ok(config)
    }
}
