//! Line buffer behind the terminal prompt.

/// Longest line the prompt accepts, in characters.
pub const MAX_INPUT_CHARS: usize = 100;

/// Commands the terminal recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminalCommand {
    /// Close the terminal window.
    Exit,
}

/// Recognizes `exit`, ignoring case and surrounding whitespace. Everything else is inert.
pub fn parse_command(line: &str) -> Option<TerminalCommand> {
    line.trim()
        .eq_ignore_ascii_case("exit")
        .then_some(TerminalCommand::Exit)
}

/// Single-line input buffer capped at [`MAX_INPUT_CHARS`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TerminalInput {
    line: String,
}

impl TerminalInput {
    /// Current buffer contents.
    pub fn as_str(&self) -> &str {
        &self.line
    }

    /// Replaces the buffer. An over-long edit is refused and the previous value kept.
    pub fn set(&mut self, value: String) -> bool {
        if value.chars().count() > MAX_INPUT_CHARS {
            return false;
        }
        self.line = value;
        true
    }

    /// Evaluates and clears the buffer.
    pub fn submit(&mut self) -> Option<TerminalCommand> {
        parse_command(&std::mem::take(&mut self.line))
    }
}
