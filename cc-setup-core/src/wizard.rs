//! Interactive setup flow.
//!
//! The wizard walks through:
//! 1. Mode selection (full configuration or models only)
//! 2. Base URL and auth token (full mode)
//! 3. Connectivity validation, repeated until it succeeds (full mode)
//! 4. Model identifiers
//! 5. Persistence through the [`EnvStore`] and a masked summary

use crate::config::constants::{env_vars, ui as ui_consts, urls};
use crate::config::{ClaudeEnv, Platform};
use crate::env::{EnvStore, PersistenceError};
use crate::probe::Prober;
use crate::ui::{
    PromptError, PromptResult, Prompter, format_entry, print_banner, print_entry, print_error,
    print_info, print_rule, print_success, print_warning,
};
use crate::utils::{extract_host, mask_token, normalize_url};
use tracing::{debug, info};

#[derive(Debug, thiserror::Error)]
pub enum SetupError {
    #[error("terminal input failed")]
    Prompt(#[from] PromptError),
    #[error("failed to save configuration: setting {key} failed")]
    Persistence {
        key: String,
        #[source]
        source: PersistenceError,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupMode {
    /// Base URL, token and models
    Full,
    /// Models only; existing URL and token are reused untouched
    ModelsOnly,
}

impl SetupMode {
    pub fn from_choice(choice: &str) -> Option<Self> {
        match choice.trim() {
            "1" => Some(Self::Full),
            "2" => Some(Self::ModelsOnly),
            _ => None,
        }
    }
}

/// What to re-enter after a failed connectivity check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixChoice {
    BaseUrl,
    Token,
    Both,
}

impl FixChoice {
    pub fn from_choice(choice: &str) -> Option<Self> {
        match choice.trim() {
            "1" => Some(Self::BaseUrl),
            "2" => Some(Self::Token),
            "3" => Some(Self::Both),
            _ => None,
        }
    }

    fn fixes_url(self) -> bool {
        matches!(self, Self::BaseUrl | Self::Both)
    }

    fn fixes_token(self) -> bool {
        matches!(self, Self::Token | Self::Both)
    }
}

/// Drives the setup session over a prompter, an environment store and a prober
pub struct SetupWizard<P, S, V> {
    prompter: P,
    store: S,
    prober: V,
    config: ClaudeEnv,
}

impl<P, S, V> SetupWizard<P, S, V>
where
    P: Prompter,
    S: EnvStore,
    V: Prober,
{
    pub fn new(prompter: P, store: S, prober: V) -> Self {
        Self {
            prompter,
            store,
            prober,
            config: ClaudeEnv::default(),
        }
    }

    pub fn config(&self) -> &ClaudeEnv {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn prompter(&self) -> &P {
        &self.prompter
    }

    pub fn prober(&self) -> &V {
        &self.prober
    }

    /// Run the whole session and return what was saved
    pub async fn run(&mut self) -> Result<ClaudeEnv, SetupError> {
        print_banner(ui_consts::APP_NAME, &Platform::describe_host());

        let mode = self.select_mode()?;
        self.config = ClaudeEnv::load(&self.store);
        debug!(
            ?mode,
            has_credentials = self.config.has_credentials(),
            "loaded existing configuration"
        );

        match mode {
            SetupMode::Full => {
                self.step_base_url()?;
                self.step_auth_token()?;
                self.validate_connection().await?;
            }
            SetupMode::ModelsOnly => self.report_existing_credentials(),
        }

        self.step_models()?;
        self.save()?;
        self.print_summary();

        Ok(self.config.clone())
    }

    fn select_mode(&mut self) -> PromptResult<SetupMode> {
        println!("Select a configuration mode:");
        println!("  1. Full configuration (base URL, token and models)");
        println!("  2. Models only (skip base URL and token)");
        println!();

        loop {
            let choice = self.prompter.input("Enter option (1/2)")?;
            match SetupMode::from_choice(&choice) {
                Some(mode) => return Ok(mode),
                None => print_error("Invalid option, enter 1 or 2"),
            }
        }
    }

    fn step_base_url(&mut self) -> PromptResult<()> {
        println!();
        print_info("Configure the API base URL");
        println!("  Example: {}", urls::EXAMPLE_BASE_URL);

        let existing = self.config.base_url.clone();
        if !existing.is_empty() {
            println!("  Current value: {existing}");
            if !self.prompter.confirm("Change the base URL?")? {
                return Ok(());
            }
        }

        loop {
            let input = self.prompter.input("Enter base URL")?;
            if input.is_empty() && !existing.is_empty() {
                return Ok(());
            }
            match normalize_url(&input) {
                Ok(url) => {
                    self.config.base_url = url;
                    return Ok(());
                }
                Err(err) => print_error(&err.to_string()),
            }
        }
    }

    fn step_auth_token(&mut self) -> PromptResult<()> {
        println!();
        print_info("Configure the API auth token");
        self.print_token_portal_hint();

        let existing = self.config.auth_token.clone();
        if !existing.is_empty() {
            println!("  A token is already configured");
            if !self.prompter.confirm("Update the token?")? {
                return Ok(());
            }
        }

        loop {
            let input = self.prompter.secret("Enter auth token")?;
            if !input.is_empty() {
                self.config.auth_token = input;
                return Ok(());
            }
            if !existing.is_empty() {
                return Ok(());
            }
            print_error("Token cannot be empty");
        }
    }

    fn print_token_portal_hint(&self) {
        let host = extract_host(&self.config.base_url);
        if !host.is_empty() {
            println!(
                "  Get a token at: {}{host}{}",
                urls::DEFAULT_SCHEME,
                urls::TOKEN_PORTAL_PATH
            );
        }
    }

    /// Probe until the endpoint accepts the token. There is no attempt limit; the user
    /// keeps fixing values until it works or interrupts the process.
    async fn validate_connection(&mut self) -> PromptResult<()> {
        println!();
        let mut attempt = 0u32;
        loop {
            attempt += 1;
            print_info("Validating API connection...");
            let outcome = self
                .prober
                .probe(&self.config.base_url, &self.config.auth_token)
                .await;

            let err = match outcome {
                Ok(()) => {
                    info!(attempt, "connectivity probe succeeded");
                    print_success("API connection verified!");
                    return Ok(());
                }
                Err(err) => err,
            };

            info!(attempt, status = ?err.status(), error = %err, "connectivity probe failed");
            print_error(&format!("API connection check failed: {err}"));
            println!();
            print_info("Current configuration:");
            println!("  Base URL: {}", self.config.base_url);
            println!("  API Key:  {}", self.config.auth_token);
            println!();

            let choice = self.select_fix()?;
            if choice.fixes_url() {
                self.config.base_url = self.prompt_new_base_url()?;
            }
            if choice.fixes_token() {
                self.print_token_portal_hint();
                self.config.auth_token = self.prompt_new_auth_token()?;
            }
            println!();
        }
    }

    fn select_fix(&mut self) -> PromptResult<FixChoice> {
        println!("What needs fixing?");
        println!("  1. The base URL");
        println!("  2. The token");
        println!("  3. Both");

        loop {
            let choice = self.prompter.input("Enter option (1/2/3)")?;
            match FixChoice::from_choice(&choice) {
                Some(fix) => return Ok(fix),
                None => print_error("Invalid option, enter 1, 2 or 3"),
            }
        }
    }

    fn prompt_new_base_url(&mut self) -> PromptResult<String> {
        loop {
            let input = self.prompter.input("Enter new base URL")?;
            match normalize_url(&input) {
                Ok(url) => return Ok(url),
                Err(err) => print_error(&err.to_string()),
            }
        }
    }

    fn prompt_new_auth_token(&mut self) -> PromptResult<String> {
        loop {
            let input = self.prompter.secret("Enter new auth token")?;
            if !input.is_empty() {
                return Ok(input);
            }
            print_error("Token cannot be empty");
        }
    }

    fn report_existing_credentials(&self) {
        if self.config.has_credentials() {
            print_info("Using the existing base URL and token");
            println!("  Base URL: {}", self.config.base_url);
            println!("  Token: {}", mask_token(&self.config.auth_token));
        } else {
            print_warning("No existing base URL or token found");
            print_info("Skipping API validation and configuring models only");
        }
        println!();
    }

    fn step_models(&mut self) -> PromptResult<()> {
        println!();
        print_info("Configure models");

        self.config.apply_model_defaults();

        println!();
        println!("Current model configuration:");
        for (key, value) in self.config.model_entries() {
            print_entry(key, value);
        }
        println!();

        if !self.prompter.confirm("Edit the model configuration?")? {
            return Ok(());
        }

        println!();
        let prompter = &mut self.prompter;
        let config = &mut self.config;
        edit_with_default(prompter, "Default model", &mut config.model)?;
        edit_with_default(prompter, "Haiku model", &mut config.haiku_model)?;
        edit_with_default(prompter, "Sonnet model", &mut config.sonnet_model)?;
        edit_with_default(prompter, "Opus model", &mut config.opus_model)?;
        Ok(())
    }

    fn save(&mut self) -> Result<(), SetupError> {
        println!();
        print_info("Saving configuration...");

        for (key, value) in self.config.entries() {
            if value.is_empty() {
                debug!(key, "skipping empty value");
                continue;
            }
            self.store
                .set(key, value)
                .map_err(|source| SetupError::Persistence {
                    key: key.to_string(),
                    source,
                })?;
            debug!(key, "saved");
        }

        info!(location = %self.store.location(), "configuration saved");
        Ok(())
    }

    fn print_summary(&self) {
        println!();
        print_rule();
        print_success("Configuration complete!");
        print_rule();
        println!();

        for line in summary_lines(&self.config) {
            println!("{line}");
        }
        println!();

        print_info(&format!("Configuration saved to {}", self.store.location()));
        if let Some(hint) = self.store.activation_hint() {
            print_info(&hint);
        }
    }
}

/// Summary table rows for every variable, with the token masked
pub fn summary_lines(config: &ClaudeEnv) -> Vec<String> {
    config
        .entries()
        .into_iter()
        .map(|(key, value)| {
            if key == env_vars::AUTH_TOKEN {
                format_entry(key, &mask_token(value))
            } else {
                format_entry(key, value)
            }
        })
        .collect()
}

/// Prompt for a field showing its current value; empty input keeps it
fn edit_with_default<P: Prompter>(
    prompter: &mut P,
    label: &str,
    current: &mut String,
) -> PromptResult<()> {
    let input = prompter.input(&format!("{label} [{current}]"))?;
    if !input.is_empty() {
        *current = input;
    }
    Ok(())
}
