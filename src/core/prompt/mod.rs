mod types;

pub use types::*;

use crate::core::error::{Error, Result};
use crate::core::tty;
use std::io::{self, BufRead, Write};

/// Data-driven interactive prompt engine.
/// Handles TTY detection and provides consistent prompting behavior.
///
/// Prompts render on stderr so stdout stays reserved for the JSON
/// envelope. A closed stdin surfaces as `prompt.aborted` instead of
/// being answered with defaults, so interactive retry loops terminate.
pub struct PromptEngine {
    interactive: bool,
}

impl PromptEngine {
    /// Create engine with automatic TTY detection.
    pub fn new() -> Self {
        Self {
            interactive: tty::require_tty_for_interactive(),
        }
    }

    /// Create engine with explicit interactive mode.
    pub fn with_interactive(interactive: bool) -> Self {
        Self { interactive }
    }

    /// Force non-interactive mode.
    pub fn non_interactive() -> Self {
        Self { interactive: false }
    }

    pub fn is_interactive(&self) -> bool {
        self.interactive
    }

    /// Run a free-text prompt. Returns the default (or an empty string)
    /// if non-interactive or if the user just presses enter.
    pub fn text(&self, prompt: &TextPrompt) -> Result<String> {
        if !self.interactive {
            return Ok(prompt.default.clone().unwrap_or_default());
        }

        match &prompt.default {
            Some(default) => eprint!("{} [{}]: ", prompt.question, default),
            None => eprint!("{}: ", prompt.question),
        }
        io::stderr().flush().ok();

        let mut input = String::new();
        let read = io::stdin()
            .lock()
            .read_line(&mut input)
            .map_err(|_| Error::prompt_aborted())?;
        if read == 0 {
            return Err(Error::prompt_aborted());
        }

        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Ok(prompt.default.clone().unwrap_or_default());
        }

        Ok(trimmed.to_string())
    }

    /// Run a yes/no prompt. Returns the default if non-interactive.
    pub fn yes_no(&self, prompt: &YesNoPrompt) -> Result<bool> {
        if !self.interactive {
            return Ok(prompt.default);
        }

        let suffix = if prompt.default { "[Y/n]" } else { "[y/N]" };
        eprint!("{} {}: ", prompt.question, suffix);
        io::stderr().flush().ok();

        let mut input = String::new();
        let read = io::stdin()
            .lock()
            .read_line(&mut input)
            .map_err(|_| Error::prompt_aborted())?;
        if read == 0 {
            return Err(Error::prompt_aborted());
        }

        let trimmed = input.trim().to_lowercase();
        if trimmed.is_empty() {
            return Ok(prompt.default);
        }

        Ok(trimmed.starts_with('y'))
    }

    /// Display a message to stderr (only in interactive mode).
    pub fn message(&self, msg: &str) {
        if self.interactive {
            eprintln!("{}", msg);
        }
    }

    /// Render rows as a bordered table on stderr (only in interactive mode).
    pub fn table(&self, headers: &[&str], rows: &[Vec<String>]) {
        if !self.interactive {
            return;
        }

        let mut widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();
        for row in rows {
            for (i, cell) in row.iter().enumerate() {
                if i < widths.len() && cell.len() > widths[i] {
                    widths[i] = cell.len();
                }
            }
        }

        let border = widths
            .iter()
            .map(|w| format!("+{}", "-".repeat(w + 2)))
            .collect::<String>()
            + "+";

        eprintln!("{}", border);
        let header_row = headers
            .iter()
            .zip(&widths)
            .map(|(h, w)| format!("| {:<width$} ", h, width = w))
            .collect::<String>()
            + "|";
        eprintln!("{}", header_row);
        eprintln!("{}", border);

        for row in rows {
            let line = row
                .iter()
                .zip(&widths)
                .map(|(cell, w)| format!("| {:<width$} ", cell, width = w))
                .collect::<String>()
                + "|";
            eprintln!("{}", line);
        }
        eprintln!("{}", border);
    }
}

impl Default for PromptEngine {
    fn default() -> Self {
        Self::new()
    }
}
