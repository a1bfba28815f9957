//! Environment variable persistence
//!
//! Every read and write of the managed variables goes through [`EnvStore`], so the
//! wizard never touches ambient process state directly:
//!
//! - [`SystemEnvStore`] updates the running process and then hands the pair to a
//!   [`DurableStore`] so future shells see it. The durable backend is picked once per
//!   [`Platform`]: [`ShellRcStore`] on Unix, [`WindowsUserStore`] on Windows.
//! - [`MemoryEnvStore`] keeps everything in memory and records writes, for tests.

pub mod durable;
pub mod shell_rc;
pub mod windows;

pub use durable::DurableStore;
pub use shell_rc::ShellRcStore;
pub use windows::WindowsUserStore;

use crate::config::Platform;
use std::collections::HashMap;
use std::path::PathBuf;
use tracing::debug;

/// Failures while writing a variable to the process or a durable store
#[derive(Debug, thiserror::Error)]
pub enum PersistenceError {
    #[error("cannot determine the home directory")]
    HomeDirUnavailable,
    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{0}")]
    Command(String),
    #[error("cannot set process variable: {0}")]
    ProcessEnv(String),
}

/// Key-value access to the environment the CLI reads its settings from
pub trait EnvStore {
    fn get(&self, key: &str) -> Option<String>;

    /// Make `value` visible to this process and to future processes
    fn set(&mut self, key: &str, value: &str) -> Result<(), PersistenceError>;

    /// Where persisted values end up, for the summary
    fn location(&self) -> String {
        "process environment".to_string()
    }

    /// How a user makes an already running shell pick up the change
    fn activation_hint(&self) -> Option<String> {
        None
    }
}

/// Process environment backed by a platform-specific durable store
pub struct SystemEnvStore {
    durable: Box<dyn DurableStore>,
}

impl SystemEnvStore {
    pub fn new(durable: Box<dyn DurableStore>) -> Self {
        Self { durable }
    }

    pub fn for_platform(platform: Platform) -> Self {
        let durable: Box<dyn DurableStore> = match platform {
            Platform::Windows => Box::new(WindowsUserStore::new()),
            Platform::Unix(flavor) => Box::new(ShellRcStore::new(flavor)),
        };
        debug!(%platform, store = %durable.description(), "selected durable store");
        Self::new(durable)
    }

    pub fn for_current_platform() -> Self {
        Self::for_platform(Platform::current())
    }
}

impl EnvStore for SystemEnvStore {
    fn get(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PersistenceError> {
        set_process_var(key, value)?;
        self.durable.persist(key, value)
    }

    fn location(&self) -> String {
        self.durable.description()
    }

    fn activation_hint(&self) -> Option<String> {
        Some(self.durable.activation_hint())
    }
}

fn set_process_var(key: &str, value: &str) -> Result<(), PersistenceError> {
    if key.is_empty() || key.contains(['=', '\0']) {
        return Err(PersistenceError::ProcessEnv(format!("invalid name '{key}'")));
    }
    if value.contains('\0') {
        return Err(PersistenceError::ProcessEnv(format!(
            "value for {key} contains a NUL byte"
        )));
    }
    // SAFETY: the setup flow is sequential and no other thread reads or writes the
    // environment while the wizard persists its values.
    unsafe {
        std::env::set_var(key, value);
    }
    Ok(())
}

/// In-memory store that records every successful write
#[derive(Debug, Default, Clone)]
pub struct MemoryEnvStore {
    values: HashMap<String, String>,
    writes: Vec<(String, String)>,
    fail_on: Option<String>,
}

impl MemoryEnvStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_values<I, K, V>(values: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            values: values
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
            ..Self::default()
        }
    }

    /// Make every write to `key` fail, to exercise persistence errors
    pub fn failing_on(mut self, key: &str) -> Self {
        self.fail_on = Some(key.to_string());
        self
    }

    pub fn writes(&self) -> &[(String, String)] {
        &self.writes
    }
}

impl EnvStore for MemoryEnvStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PersistenceError> {
        if self.fail_on.as_deref() == Some(key) {
            return Err(PersistenceError::Command(format!(
                "simulated failure writing {key}"
            )));
        }
        self.values.insert(key.to_string(), value.to_string());
        self.writes.push((key.to_string(), value.to_string()));
        Ok(())
    }

    fn location(&self) -> String {
        "in-memory store".to_string()
    }
}
