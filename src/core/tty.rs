use std::io;
use std::io::IsTerminal;

pub fn is_stdin_tty() -> bool {
    io::stdin().is_terminal()
}

pub fn is_stderr_tty() -> bool {
    io::stderr().is_terminal()
}

/// Prompts are rendered on stderr and answers read from stdin, so both
/// must be terminals before the engine goes interactive.
pub fn require_tty_for_interactive() -> bool {
    is_stdin_tty() && is_stderr_tty()
}
