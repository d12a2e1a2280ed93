/// Errors produced while loading startup configuration.
///
/// Failures from parsing the `.env` file itself are not represented here;
/// they propagate unmodified as [`dotenvy::Error`] from the overlay step.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("API key not found! Set OPENAI_API_KEY in .env file")]
    ApiKeyMissing,
}
