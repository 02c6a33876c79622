//! Appointment search: exact match on the canonical `yyyy-MM-dd HH:mm` form.

use log::debug;

use super::{CommandResult, SearchParseError};
use crate::address_book::AddressBook;
use crate::validation::validate_date_time_format;

/// Searches for clients who have appointments on a specific date and time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchAppointmentCommand {
    date_time: String,
}

impl SearchAppointmentCommand {
    pub const USAGE: &'static str = "search a/: Searches for clients who have appointments on \
        the specified date and time.\n\
        Parameters: DATE TIME (must be in yyyy-MM-dd HH:mm format)\n\
        Example: search a/2023-12-31 14:30";

    const EXPECTED_FORMAT: &'static str = "yyyy-MM-dd HH:mm";

    /// Build the command from a user-supplied date/time string.
    ///
    /// The string is stored verbatim for the later comparison; it is checked
    /// here, never re-normalized.
    pub fn new(date_time: &str) -> Result<Self, SearchParseError> {
        if !validate_date_time_format(date_time) {
            return Err(SearchParseError::InvalidDateFormat { expected: Self::EXPECTED_FORMAT });
        }
        Ok(Self { date_time: date_time.to_string() })
    }

    pub fn date_time(&self) -> &str {
        &self.date_time
    }

    /// Filter the book down to contacts whose appointment renders to exactly
    /// the searched string. Contacts without an appointment never match.
    pub fn execute(&self, book: &mut AddressBook) -> CommandResult {
        debug!("searching appointments matching '{}'", self.date_time);
        book.update_filtered_view(|contact| {
            contact
                .appointment
                .as_ref()
                .map_or(false, |appointment| appointment.to_string() == self.date_time)
        });
        CommandResult::new(format!("Listed all clients with appointments on {}", self.date_time))
    }
}
