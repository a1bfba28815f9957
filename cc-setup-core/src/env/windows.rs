use super::{DurableStore, PersistenceError};
use std::process::{Command, Stdio};
use tracing::debug;

const POWERSHELL: &str = "powershell";

/// Persists variables as per-user Windows environment variables through PowerShell
#[derive(Debug, Clone, Default)]
pub struct WindowsUserStore;

impl WindowsUserStore {
    pub fn new() -> Self {
        Self
    }
}

/// PowerShell statement setting a user-scope variable; single quotes are doubled
pub fn powershell_script(key: &str, value: &str) -> String {
    format!(
        "[Environment]::SetEnvironmentVariable('{}', '{}', 'User')",
        key.replace('\'', "''"),
        value.replace('\'', "''")
    )
}

impl DurableStore for WindowsUserStore {
    fn persist(&self, key: &str, value: &str) -> Result<(), PersistenceError> {
        let script = powershell_script(key, value);
        let output = Command::new(POWERSHELL)
            .args(["-NoProfile", "-Command", script.as_str()])
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .output()
            .map_err(|err| {
                PersistenceError::Command(format!("failed to run {POWERSHELL}: {err}"))
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(PersistenceError::Command(format!(
                "{POWERSHELL} exited with {}: {}",
                output.status,
                stderr.trim()
            )));
        }

        debug!(key, "user environment variable set");
        Ok(())
    }

    fn description(&self) -> String {
        "user environment variables".to_string()
    }

    fn activation_hint(&self) -> String {
        "Open a new terminal window for the changes to take effect".to_string()
    }
}
