use super::constants::rc_files;
use std::fmt;

/// Flavor of a Unix-family target; decides which shell startup files are edited
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnixFlavor {
    MacOs,
    Other,
}

impl UnixFlavor {
    pub fn rc_files(self) -> &'static [&'static str] {
        match self {
            Self::MacOs => rc_files::MACOS,
            Self::Other => rc_files::LINUX,
        }
    }
}

/// Operating system family the durable store is selected for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Windows,
    Unix(UnixFlavor),
}

impl Platform {
    pub fn current() -> Self {
        if cfg!(windows) {
            Self::Windows
        } else if cfg!(target_os = "macos") {
            Self::Unix(UnixFlavor::MacOs)
        } else {
            Self::Unix(UnixFlavor::Other)
        }
    }

    /// `os/arch` label shown in the banner
    pub fn describe_host() -> String {
        format!("{}/{}", std::env::consts::OS, std::env::consts::ARCH)
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Windows => write!(f, "windows"),
            Self::Unix(UnixFlavor::MacOs) => write!(f, "macos"),
            Self::Unix(UnixFlavor::Other) => write!(f, "unix"),
        }
    }
}
