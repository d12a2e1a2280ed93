//! Startup configuration for OpenAI-backed services.
//!
//! Merges an optional `.env` overlay into the process environment, reads
//! `OPENAI_API_KEY`, and fails fast when it is missing. Entry points call
//! [`config::app_config::AppConfig::load`] once and abort with `?` on
//! failure.

pub mod config {
    pub mod app_config;
    pub mod env_overlay;
    pub mod openai_config;
}

pub mod domain {
    pub mod errors;
    pub mod value_objects;
}

#[cfg(test)]
pub(crate) mod test_env;
