//! Search commands over the address book.
//!
//! A raw `search` argument string is classified by [`parser::parse`] into one
//! of the concrete search commands; executing a command replaces the book's
//! filtered view with the matching contacts.

pub mod parser;

mod appointment;
mod birthday;

pub use appointment::SearchAppointmentCommand;
pub use birthday::SearchBirthdayCommand;

use crate::address_book::AddressBook;

/// User-input failures raised while turning a `search` argument string into
/// an executable command. None of these are fatal; they are displayed to the
/// user and the session continues.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum SearchParseError {
    #[error("Search command cannot be empty.")]
    EmptyInput,
    #[error("Invalid prefix. Use 'b/' for birthday or 'a/' for appointment.")]
    UnrecognizedPrefix,
    #[error("Invalid command format!\n{usage}")]
    MissingArgument { usage: String },
    #[error("The date format is invalid. Please use {expected} format.")]
    InvalidDateFormat { expected: &'static str },
}

/// Feedback returned by a successfully executed search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    message: String,
}

impl CommandResult {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// A parsed, ready-to-execute search command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchCommand {
    Birthday(SearchBirthdayCommand),
    Appointment(SearchAppointmentCommand),
}

impl SearchCommand {
    /// Replace the book's filtered view with this search's matches.
    ///
    /// Never fails: filtering down to an empty view is a valid outcome.
    pub fn execute(&self, book: &mut AddressBook) -> CommandResult {
        match self {
            SearchCommand::Birthday(command) => command.execute(book),
            SearchCommand::Appointment(command) => command.execute(book),
        }
    }
}
