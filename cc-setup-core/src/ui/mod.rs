//! Terminal prompts and styled console output

pub mod messages;
pub mod prompt;

pub use messages::*;
pub use prompt::{PromptError, PromptResult, Prompter, ScriptedPrompter, TerminalPrompter};
