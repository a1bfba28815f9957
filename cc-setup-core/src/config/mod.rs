//! Configuration record, constants and platform detection
//!
//! [`ClaudeEnv`] holds the six values the Claude Code CLI reads from its environment.
//! It is loaded through an [`EnvStore`] at startup, edited by the wizard, and written
//! back once at the end.

pub mod constants;
pub mod platform;

pub use platform::{Platform, UnixFlavor};

use crate::env::EnvStore;
use constants::{env_vars, models};

/// The values managed by the setup tool. Empty strings mean "unset".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClaudeEnv {
    pub base_url: String,
    pub auth_token: String,
    pub model: String,
    pub haiku_model: String,
    pub sonnet_model: String,
    pub opus_model: String,
}

impl ClaudeEnv {
    /// Read the current values from a store; unset variables become empty fields
    pub fn load<S: EnvStore + ?Sized>(store: &S) -> Self {
        let read = |key: &str| store.get(key).unwrap_or_default();
        Self {
            base_url: read(env_vars::BASE_URL),
            auth_token: read(env_vars::AUTH_TOKEN),
            model: read(env_vars::MODEL),
            haiku_model: read(env_vars::HAIKU_MODEL),
            sonnet_model: read(env_vars::SONNET_MODEL),
            opus_model: read(env_vars::OPUS_MODEL),
        }
    }

    /// Variable name / value pairs in persistence order
    pub fn entries(&self) -> [(&'static str, &str); 6] {
        [
            (env_vars::BASE_URL, self.base_url.as_str()),
            (env_vars::AUTH_TOKEN, self.auth_token.as_str()),
            (env_vars::MODEL, self.model.as_str()),
            (env_vars::HAIKU_MODEL, self.haiku_model.as_str()),
            (env_vars::SONNET_MODEL, self.sonnet_model.as_str()),
            (env_vars::OPUS_MODEL, self.opus_model.as_str()),
        ]
    }

    /// Model variable name / value pairs, used for display
    pub fn model_entries(&self) -> [(&'static str, &str); 4] {
        [
            (env_vars::MODEL, self.model.as_str()),
            (env_vars::HAIKU_MODEL, self.haiku_model.as_str()),
            (env_vars::SONNET_MODEL, self.sonnet_model.as_str()),
            (env_vars::OPUS_MODEL, self.opus_model.as_str()),
        ]
    }

    pub fn has_credentials(&self) -> bool {
        !self.base_url.is_empty() && !self.auth_token.is_empty()
    }

    /// Fill every empty model tier with its built-in default
    pub fn apply_model_defaults(&mut self) {
        fill(&mut self.model, models::DEFAULT_MODEL);
        fill(&mut self.haiku_model, models::DEFAULT_HAIKU_MODEL);
        fill(&mut self.sonnet_model, models::DEFAULT_SONNET_MODEL);
        fill(&mut self.opus_model, models::DEFAULT_OPUS_MODEL);
    }
}

fn fill(slot: &mut String, default: &str) {
    if slot.is_empty() {
        *slot = default.to_string();
    }
}
