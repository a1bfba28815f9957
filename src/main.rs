use anyhow::{Context, Result};
use cc_setup_core::env::SystemEnvStore;
use cc_setup_core::probe::HttpProber;
use cc_setup_core::ui::{TerminalPrompter, print_error};
use cc_setup_core::wizard::SetupWizard;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "warn";

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    init_tracing();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            debug!("setup aborted: {err:#}");
            print_error(&format!("{err:#}"));
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<()> {
    let store = SystemEnvStore::for_current_platform();
    let mut wizard = SetupWizard::new(TerminalPrompter::new(), store, HttpProber::new());
    wizard.run().await.context("setup did not complete")?;
    Ok(())
}

/// Logs go to stderr so they never mix with prompts; `RUST_LOG` overrides the level
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
