//! Input line parsing.

use crate::error::{AssistantError, AssistantResult};
use std::str::FromStr;

/// Commands understood by the assistant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Hello,
    Add,
    Change,
    Phone,
    All,
    Delete,
    Exit,
}

impl FromStr for Command {
    type Err = ();

    /// Match an already-lowercased keyword.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hello" => Ok(Self::Hello),
            "add" => Ok(Self::Add),
            "change" => Ok(Self::Change),
            "phone" => Ok(Self::Phone),
            "all" => Ok(Self::All),
            "delete" => Ok(Self::Delete),
            "exit" | "close" => Ok(Self::Exit),
            _ => Err(()),
        }
    }
}

/// A line split into its command keyword and positional arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedInput {
    /// First token, lowercased
    pub keyword: String,

    /// Remaining tokens, verbatim
    pub args: Vec<String>,
}

impl ParsedInput {
    /// The recognised command, or `None` for an unknown keyword.
    pub fn command(&self) -> Option<Command> {
        self.keyword.parse().ok()
    }
}

/// Split `line` on whitespace into a keyword and arguments.
///
/// # Errors
///
/// Returns `AssistantError::EmptyInput` if the line has no tokens.
pub fn parse_input(line: &str) -> AssistantResult<ParsedInput> {
    let mut parts = line.split_whitespace();
    let keyword = parts.next().ok_or(AssistantError::EmptyInput)?.to_lowercase();
    let args = parts.map(str::to_string).collect();

    Ok(ParsedInput { keyword, args })
}
