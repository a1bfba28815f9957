//! # cc-setup-core - Runtime for cc-setup
//!
//! `cc-setup-core` powers the `cc-setup` interactive configurator. It collects the
//! endpoint, auth token and model identifiers used by the Claude Code CLI, checks that
//! the endpoint accepts the token, and persists everything as user environment
//! variables on Windows, Linux and macOS.
//!
//! ## Architecture Overview
//!
//! - `config/`: the six-variable [`ClaudeEnv`](config::ClaudeEnv) record, constants and
//!   platform detection.
//! - `env/`: the [`EnvStore`](env::EnvStore) abstraction with the process-env + durable
//!   store implementation and an in-memory double.
//! - `probe`: the connectivity check against `{base}/v1/messages`.
//! - `ui/`: prompts and styled console output.
//! - `utils/`: URL normalization and token masking.
//! - `wizard`: the interactive setup flow tying everything together.
//!
//! ## Quickstart
//!
//! ```rust,ignore
//! use cc_setup_core::env::SystemEnvStore;
//! use cc_setup_core::probe::HttpProber;
//! use cc_setup_core::ui::prompt::TerminalPrompter;
//! use cc_setup_core::wizard::SetupWizard;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), anyhow::Error> {
//!     let store = SystemEnvStore::for_current_platform();
//!     let mut wizard = SetupWizard::new(TerminalPrompter::new(), store, HttpProber::new());
//!     wizard.run().await?;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod env;
pub mod probe;
pub mod ui;
pub mod utils;
pub mod wizard;

pub use config::ClaudeEnv;
pub use env::{EnvStore, PersistenceError};
pub use probe::{ProbeError, Prober};
pub use wizard::{SetupError, SetupMode, SetupWizard};
