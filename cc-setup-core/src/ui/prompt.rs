//! Line, secret and yes/no prompts
//!
//! [`TerminalPrompter`] uses `dialoguer` when stdin is a terminal and falls back to
//! plain line reads otherwise, so the tool also works with piped input.
//! [`ScriptedPrompter`] replays canned answers for tests.

use dialoguer::{Confirm, Input, Password};
use std::collections::VecDeque;
use std::io::{self, BufRead, IsTerminal, Write};

#[derive(Debug, thiserror::Error)]
pub enum PromptError {
    #[error(transparent)]
    Terminal(#[from] dialoguer::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type PromptResult<T> = Result<T, PromptError>;

/// Source of user answers. Returned strings are trimmed.
pub trait Prompter {
    fn input(&mut self, prompt: &str) -> PromptResult<String>;

    /// Like [`Prompter::input`] but without echoing what is typed
    fn secret(&mut self, prompt: &str) -> PromptResult<String>;

    /// Yes/no question; anything but an explicit yes is "no"
    fn confirm(&mut self, prompt: &str) -> PromptResult<bool>;
}

/// `y` or `yes`, case-insensitive
pub fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

#[derive(Debug, Default)]
pub struct TerminalPrompter {
    interactive: bool,
}

impl TerminalPrompter {
    pub fn new() -> Self {
        Self {
            interactive: io::stdin().is_terminal() && io::stderr().is_terminal(),
        }
    }

    fn read_plain_line(prompt: &str) -> PromptResult<String> {
        let mut stderr = io::stderr();
        write!(stderr, "{prompt}: ")?;
        stderr.flush()?;

        let mut line = String::new();
        let read = io::stdin().lock().read_line(&mut line)?;
        if read == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed").into());
        }
        Ok(line.trim().to_string())
    }
}

impl Prompter for TerminalPrompter {
    fn input(&mut self, prompt: &str) -> PromptResult<String> {
        if !self.interactive {
            return Self::read_plain_line(prompt);
        }
        let value: String = Input::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()?;
        Ok(value.trim().to_string())
    }

    fn secret(&mut self, prompt: &str) -> PromptResult<String> {
        if !self.interactive {
            return Self::read_plain_line(prompt);
        }
        let value = Password::new()
            .with_prompt(prompt)
            .allow_empty_password(true)
            .interact()?;
        Ok(value.trim().to_string())
    }

    fn confirm(&mut self, prompt: &str) -> PromptResult<bool> {
        if !self.interactive {
            let answer = Self::read_plain_line(&format!("{prompt} (y/N)"))?;
            return Ok(is_yes(&answer));
        }
        Ok(Confirm::new()
            .with_prompt(prompt)
            .default(false)
            .interact()?)
    }
}

/// Replays a fixed list of answers and records every prompt it was asked
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: VecDeque<String>,
    asked: Vec<String>,
}

impl ScriptedPrompter {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            asked: Vec::new(),
        }
    }

    pub fn asked(&self) -> &[String] {
        &self.asked
    }

    pub fn remaining(&self) -> usize {
        self.answers.len()
    }

    fn next(&mut self, prompt: &str) -> PromptResult<String> {
        self.asked.push(prompt.to_string());
        self.answers
            .pop_front()
            .map(|answer| answer.trim().to_string())
            .ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    format!("no scripted answer for '{prompt}'"),
                )
                .into()
            })
    }
}

impl Prompter for ScriptedPrompter {
    fn input(&mut self, prompt: &str) -> PromptResult<String> {
        self.next(prompt)
    }

    fn secret(&mut self, prompt: &str) -> PromptResult<String> {
        self.next(prompt)
    }

    fn confirm(&mut self, prompt: &str) -> PromptResult<bool> {
        self.next(prompt).map(|answer| is_yes(&answer))
    }
}
