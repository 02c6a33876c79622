//! Birthday search: exact match on the canonical `yyyy-MM-dd` form.

use log::debug;

use super::{CommandResult, SearchParseError};
use crate::address_book::AddressBook;
use crate::validation::validate_date_format;

/// Searches for clients whose birthday falls on a specific date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchBirthdayCommand {
    date: String,
}

impl SearchBirthdayCommand {
    pub const USAGE: &'static str = "search b/: Searches for clients whose birthday falls on \
        the specified date.\n\
        Parameters: DATE (must be in yyyy-MM-dd format)\n\
        Example: search b/1990-01-01";

    const EXPECTED_FORMAT: &'static str = "yyyy-MM-dd";

    pub fn new(date: &str) -> Result<Self, SearchParseError> {
        if !validate_date_format(date) {
            return Err(SearchParseError::InvalidDateFormat { expected: Self::EXPECTED_FORMAT });
        }
        Ok(Self { date: date.to_string() })
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    /// Filter the book down to contacts whose birthday renders to exactly
    /// the searched string. Contacts without a birthday never match.
    pub fn execute(&self, book: &mut AddressBook) -> CommandResult {
        debug!("searching birthdays matching '{}'", self.date);
        book.update_filtered_view(|contact| {
            contact.birthday.as_ref().map_or(false, |birthday| birthday.to_string() == self.date)
        });
        CommandResult::new(format!("Listed all clients with birthdays on {}", self.date))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::Contact;
    use pretty_assertions::assert_eq;

    fn contact_with_birthday(name: &str, date: &str) -> Contact {
        let mut contact = Contact::new(name);
        contact.birthday = Some(date.parse().unwrap());
        contact
    }

    #[test]
    fn construction_rejects_malformed_input() {
        for input in ["1990-13-01", "01-01-1990", "", "1990-01-01 10:00"] {
            assert_eq!(
                SearchBirthdayCommand::new(input),
                Err(SearchParseError::InvalidDateFormat { expected: "yyyy-MM-dd" }),
                "expected '{}' to be rejected",
                input
            );
        }
    }

    #[test]
    fn execute_selects_exact_matches_only() {
        let mut book = AddressBook::from_contacts(vec![
            contact_with_birthday("Alice", "1990-01-01"),
            Contact::new("Bob"),
            contact_with_birthday("Carol", "1985-06-15"),
        ]);

        let command = SearchBirthdayCommand::new("1990-01-01").unwrap();
        let result = command.execute(&mut book);

        assert_eq!(result.message(), "Listed all clients with birthdays on 1990-01-01");
        let names: Vec<_> = book.visible_contacts().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Alice"]);
    }

    #[test]
    fn commands_are_equal_iff_their_stored_strings_are() {
        let first = SearchBirthdayCommand::new("1990-01-01").unwrap();
        let second = SearchBirthdayCommand::new("1990-01-01").unwrap();
        let third = SearchBirthdayCommand::new("1991-02-02").unwrap();

        assert_eq!(first, second);
        assert_ne!(first, third);
    }
}
