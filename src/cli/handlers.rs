//! Command handlers for the assistant.
//!
//! Each handler checks its argument count, calls into the contact service
//! and turns the result, success or typed error, into the line shown to
//! the user.

use super::parser::{parse_input, Command, ParsedInput};
use crate::error::AssistantResult;
use crate::repositories::{AddressBook, ContactRepository};
use crate::services::ContactService;

pub const GREETING: &str = "How can I help you?";
pub const GOODBYE: &str = "Exiting program...";
pub const INVALID_COMMAND: &str = "Invalid command. Please try again.";
pub const NO_CONTACTS: &str = "No contacts found.";

const ADD_USAGE: &str = "Give me name and phone please.";
const CHANGE_USAGE: &str = "Give me name, old phone, and new phone please.";
const NAME_USAGE: &str = "Give me name please.";

/// What the loop should do after a line has been handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Print the text and keep reading
    Reply(String),

    /// Print the text and stop
    Exit(String),
}

impl Outcome {
    pub fn text(&self) -> &str {
        match self {
            Self::Reply(text) | Self::Exit(text) => text,
        }
    }
}

/// Dispatches parsed input lines to the contact service.
#[derive(Debug, Default)]
pub struct CommandHandler<R = AddressBook> {
    service: ContactService<R>,
}

impl<R: ContactRepository> CommandHandler<R> {
    pub fn new(service: ContactService<R>) -> Self {
        Self { service }
    }

    pub fn service(&self) -> &ContactService<R> {
        &self.service
    }

    /// Handle one raw input line.
    pub fn handle_line(&mut self, line: &str) -> Outcome {
        match parse_input(line) {
            Ok(input) => self.dispatch(&input),
            Err(e) => {
                tracing::debug!("Rejected input line: {}", e);
                Outcome::Reply(e.to_string())
            }
        }
    }

    /// Run an already parsed command.
    pub fn dispatch(&mut self, input: &ParsedInput) -> Outcome {
        tracing::debug!(keyword = %input.keyword, args = ?input.args, "Dispatching command");

        let args = input.args.as_slice();
        let result = match input.command() {
            Some(Command::Exit) if args.is_empty() => return Outcome::Exit(GOODBYE.to_string()),
            Some(Command::Hello) if args.is_empty() => Ok(GREETING.to_string()),
            Some(Command::Add) => self.add(args),
            Some(Command::Change) => self.change(args),
            Some(Command::Phone) => self.phone(args),
            Some(Command::All) => Ok(self.all()),
            Some(Command::Delete) => Ok(self.delete(args)),
            _ => Ok(INVALID_COMMAND.to_string()),
        };

        Outcome::Reply(result.unwrap_or_else(|e| {
            tracing::debug!(keyword = %input.keyword, error = ?e, "Command failed");
            e.to_string()
        }))
    }

    fn add(&mut self, args: &[String]) -> AssistantResult<String> {
        let [name, phone] = args else {
            return Ok(ADD_USAGE.to_string());
        };
        self.service.add_phone(name, phone)?;
        Ok(format!("Contact '{}' added with phone number {}.", name, phone))
    }

    fn change(&mut self, args: &[String]) -> AssistantResult<String> {
        let [name, old, new] = args else {
            return Ok(CHANGE_USAGE.to_string());
        };
        self.service.change_phone(name, old, new)?;
        Ok(format!(
            "Phone number for '{}' updated from {} to {}.",
            name, old, new
        ))
    }

    fn phone(&self, args: &[String]) -> AssistantResult<String> {
        let [name] = args else {
            return Ok(NAME_USAGE.to_string());
        };
        let record = self.service.find(name)?;
        Ok(format!(
            "Phone numbers for '{}': {}",
            name,
            record.phones_joined()
        ))
    }

    fn all(&self) -> String {
        let records = self.service.all();
        if records.is_empty() {
            return NO_CONTACTS.to_string();
        }
        records
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn delete(&mut self, args: &[String]) -> String {
        let [name] = args else {
            return NAME_USAGE.to_string();
        };
        self.service.delete(name);
        format!("Contact '{}' deleted.", name)
    }
}
