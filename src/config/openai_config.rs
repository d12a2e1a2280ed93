use std::env;

use crate::domain::errors::ConfigError;
use crate::domain::value_objects::ApiKey;

/// Environment variable holding the OpenAI API key.
pub const OPENAI_API_KEY_VAR: &str = "OPENAI_API_KEY";

/// Read the API key from the process environment.
///
/// A variable that is unset, or set to the empty string, counts as absent.
/// No side effects.
pub fn api_key_from_env() -> Option<ApiKey> {
    env::var(OPENAI_API_KEY_VAR)
        .ok()
        .filter(|value| !value.is_empty())
        .map(ApiKey::new)
}

/// Configuration for OpenAI API access.
#[derive(Debug)]
pub struct OpenAIConfig {
    api_key: ApiKey,
}

impl OpenAIConfig {
    /// Wraps an already-obtained key. Lets tests inject a value without
    /// touching the process environment.
    pub fn new(api_key: ApiKey) -> Self {
        Self { api_key }
    }

    /// Load the configuration from environment variables.
    ///
    /// Environment variables:
    /// - OPENAI_API_KEY: key for the OpenAI API (required, non-empty)
    ///
    /// # Errors
    /// Returns [`ConfigError::ApiKeyMissing`] when the variable is unset or
    /// empty.
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = api_key_from_env().ok_or(ConfigError::ApiKeyMissing)?;
        Ok(Self { api_key })
    }

    /// The validated API key.
    pub fn api_key(&self) -> &ApiKey {
        &self.api_key
    }
}
