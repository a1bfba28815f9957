/// Environment variable names read by the Claude Code CLI
pub mod env_vars {
    pub const BASE_URL: &str = "ANTHROPIC_BASE_URL";
    pub const AUTH_TOKEN: &str = "ANTHROPIC_AUTH_TOKEN";
    pub const MODEL: &str = "ANTHROPIC_MODEL";
    pub const HAIKU_MODEL: &str = "ANTHROPIC_DEFAULT_HAIKU_MODEL";
    pub const SONNET_MODEL: &str = "ANTHROPIC_DEFAULT_SONNET_MODEL";
    pub const OPUS_MODEL: &str = "ANTHROPIC_DEFAULT_OPUS_MODEL";

    /// All managed variables, in persistence order
    pub const ALL: &[&str] = &[
        BASE_URL,
        AUTH_TOKEN,
        MODEL,
        HAIKU_MODEL,
        SONNET_MODEL,
        OPUS_MODEL,
    ];
}

/// Model identifiers used when a tier has no configured value
pub mod models {
    pub const DEFAULT_MODEL: &str = "claude-opus-4-5-20251101-cc";
    pub const DEFAULT_HAIKU_MODEL: &str = "claude-haiku-4-5-20251001-cc";
    pub const DEFAULT_SONNET_MODEL: &str = "claude-sonnet-4-5-20250929-cc";
    pub const DEFAULT_OPUS_MODEL: &str = "claude-opus-4-5-20251101-cc";
}

pub mod urls {
    pub const DEFAULT_SCHEME: &str = "https://";
    pub const INSECURE_SCHEME: &str = "http://";
    pub const EXAMPLE_BASE_URL: &str = "https://www.dmxapi.cn";
    /// Path appended to the host when pointing users at the token portal
    pub const TOKEN_PORTAL_PATH: &str = "/token";
}

/// Connectivity probe request shape
pub mod probe {
    pub const MESSAGES_PATH: &str = "/v1/messages";
    pub const ANTHROPIC_VERSION: &str = "2023-06-01";
    pub const PROBE_MODEL: &str = "claude-haiku-4-5-20251001";
    pub const PROBE_PROMPT: &str = "Hi";
    pub const PROBE_MAX_TOKENS: u32 = 1;
    pub const TIMEOUT_SECS: u64 = 30;
}

/// Shell startup files that receive `export` lines, relative to the home directory
pub mod rc_files {
    pub const MACOS: &[&str] = &[".zshrc", ".bash_profile"];
    pub const LINUX: &[&str] = &[".bashrc", ".profile"];
}

pub mod ui {
    pub const APP_NAME: &str = "Anthropic Claude Code CLI";
    pub const RULE_WIDTH: usize = 50;
    /// Width of the variable-name column in tables
    pub const KEY_COLUMN_WIDTH: usize = 35;
    pub const TOKEN_MASK: &str = "********";
}
