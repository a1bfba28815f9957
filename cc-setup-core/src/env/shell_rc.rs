//! `export KEY='VALUE'` lines in shell startup files

use super::{DurableStore, PersistenceError};
use crate::config::UnixFlavor;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Persists variables by editing existing shell startup files under the home directory
#[derive(Debug, Clone)]
pub struct ShellRcStore {
    home: Option<PathBuf>,
    files: Vec<String>,
}

impl ShellRcStore {
    pub fn new(flavor: UnixFlavor) -> Self {
        Self {
            home: dirs::home_dir(),
            files: flavor.rc_files().iter().map(|f| f.to_string()).collect(),
        }
    }

    /// Store rooted at an explicit home directory
    pub fn with_home(home: impl Into<PathBuf>, files: &[&str]) -> Self {
        Self {
            home: Some(home.into()),
            files: files.iter().map(|f| f.to_string()).collect(),
        }
    }

    fn home(&self) -> Result<&Path, PersistenceError> {
        self.home
            .as_deref()
            .ok_or(PersistenceError::HomeDirUnavailable)
    }

    fn paths(&self) -> Result<Vec<PathBuf>, PersistenceError> {
        let home = self.home()?;
        Ok(self.files.iter().map(|file| home.join(file)).collect())
    }

    fn update_file(
        &self,
        path: &Path,
        key: &str,
        value: &str,
    ) -> Result<bool, PersistenceError> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "startup file missing, skipping");
                return Ok(false);
            }
            Err(source) => {
                return Err(PersistenceError::Read {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        let updated = upsert_export(&content, key, value);
        fs::write(path, updated).map_err(|source| PersistenceError::Write {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), key, "export line written");
        Ok(true)
    }
}

impl DurableStore for ShellRcStore {
    fn persist(&self, key: &str, value: &str) -> Result<(), PersistenceError> {
        let mut written = 0;
        for path in self.paths()? {
            if self.update_file(&path, key, value)? {
                written += 1;
            }
        }
        if written == 0 {
            warn!(
                key,
                files = ?self.files,
                "no shell startup file exists; value only set for this process"
            );
        }
        Ok(())
    }

    fn description(&self) -> String {
        format!("shell startup files ({})", self.files.join(", "))
    }

    fn activation_hint(&self) -> String {
        let target = self
            .paths()
            .ok()
            .and_then(|paths| {
                paths
                    .iter()
                    .position(|path| path.exists())
                    .map(|index| self.files[index].clone())
            })
            .or_else(|| self.files.first().cloned())
            .unwrap_or_else(|| ".profile".to_string());
        format!("Run 'source ~/{target}' or open a new terminal for the changes to take effect")
    }
}

/// Quote a value for a single-quoted shell string: `'` becomes `'\''`
pub fn escape_single_quoted(value: &str) -> String {
    value.replace('\'', r"'\''")
}

pub fn export_line(key: &str, value: &str) -> String {
    format!("export {key}='{}'", escape_single_quoted(value))
}

/// Replace every `export KEY=` line in `content` with the new assignment, or append one.
///
/// Matching ignores leading whitespace and includes the `=`, so `KEY_SUFFIX` is never
/// mistaken for `KEY`. All other lines, and their line endings, are kept verbatim.
pub fn upsert_export(content: &str, key: &str, value: &str) -> String {
    let marker = format!("export {key}=");
    let line = export_line(key, value);
    let mut found = false;
    let mut out = String::with_capacity(content.len() + line.len() + 1);

    for segment in content.split_inclusive('\n') {
        let (body, ending) = split_line_ending(segment);
        if body.trim_start().starts_with(&marker) {
            out.push_str(&line);
            out.push_str(ending);
            found = true;
        } else {
            out.push_str(segment);
        }
    }

    if !found {
        if !out.is_empty() && !out.ends_with('\n') {
            out.push('\n');
        }
        out.push_str(&line);
        out.push('\n');
    }

    out
}

fn split_line_ending(segment: &str) -> (&str, &str) {
    if let Some(body) = segment.strip_suffix("\r\n") {
        (body, "\r\n")
    } else if let Some(body) = segment.strip_suffix('\n') {
        (body, "\n")
    } else {
        (segment, "")
    }
}
