//! Dispatcher for the `search` command.
//!
//! Classifies the raw text after the `search` keyword as a birthday search
//! (`b/`) or an appointment search (`a/`) and builds the matching command.

use log::debug;

use super::{SearchAppointmentCommand, SearchBirthdayCommand, SearchCommand, SearchParseError};

/// Marker identifying a birthday search argument.
pub const BIRTHDAY_MARKER: &str = "b/";
/// Marker identifying an appointment search argument.
pub const APPOINTMENT_MARKER: &str = "a/";

/// Classify `args` and construct the matching search command.
///
/// Marker lookup is containment-based rather than anchored to the start of
/// the string, and the birthday marker is checked first; input carrying both
/// markers therefore routes to the birthday branch. The argument handed to
/// the command starts immediately after the matched marker.
pub fn parse(args: &str) -> Result<SearchCommand, SearchParseError> {
    let trimmed = args.trim();
    if trimmed.is_empty() {
        return Err(SearchParseError::EmptyInput);
    }

    if let Some(idx) = trimmed.find(BIRTHDAY_MARKER) {
        let date = trimmed[idx + BIRTHDAY_MARKER.len()..].trim();
        debug!("birthday search argument: '{}'", date);
        parse_birthday(date).map(SearchCommand::Birthday)
    } else if let Some(idx) = trimmed.find(APPOINTMENT_MARKER) {
        let date_time = trimmed[idx + APPOINTMENT_MARKER.len()..].trim();
        debug!("appointment search argument: '{}'", date_time);
        parse_appointment(date_time).map(SearchCommand::Appointment)
    } else {
        Err(SearchParseError::UnrecognizedPrefix)
    }
}

fn parse_birthday(date: &str) -> Result<SearchBirthdayCommand, SearchParseError> {
    if date.is_empty() {
        return Err(missing_argument(SearchBirthdayCommand::USAGE));
    }
    // The specific rejection reason is collapsed into the usage message; it
    // survives in the debug log only.
    SearchBirthdayCommand::new(date).map_err(|err| {
        debug!("birthday search rejected: {}", err);
        missing_argument(SearchBirthdayCommand::USAGE)
    })
}

fn parse_appointment(date_time: &str) -> Result<SearchAppointmentCommand, SearchParseError> {
    if date_time.is_empty() {
        return Err(missing_argument(SearchAppointmentCommand::USAGE));
    }
    SearchAppointmentCommand::new(date_time).map_err(|err| {
        debug!("appointment search rejected: {}", err);
        missing_argument(SearchAppointmentCommand::USAGE)
    })
}

fn missing_argument(usage: &str) -> SearchParseError {
    SearchParseError::MissingArgument { usage: usage.to_string() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_and_whitespace_input_are_rejected() {
        assert_eq!(parse(""), Err(SearchParseError::EmptyInput));
        assert_eq!(parse("   \t "), Err(SearchParseError::EmptyInput));
    }

    #[test]
    fn unrecognized_marker_is_rejected() {
        assert_eq!(parse("x/foo"), Err(SearchParseError::UnrecognizedPrefix));
        assert_eq!(parse("1990-01-01"), Err(SearchParseError::UnrecognizedPrefix));
    }

    #[test]
    fn birthday_marker_routes_to_birthday_command() {
        let command = parse("b/1990-01-01").unwrap();
        assert_eq!(
            command,
            SearchCommand::Birthday(SearchBirthdayCommand::new("1990-01-01").unwrap())
        );
    }

    #[test]
    fn appointment_marker_routes_to_appointment_command() {
        let command = parse("a/2023-12-31 14:30").unwrap();
        assert_eq!(
            command,
            SearchCommand::Appointment(SearchAppointmentCommand::new("2023-12-31 14:30").unwrap())
        );
    }

    #[test]
    fn leading_and_trailing_whitespace_is_tolerated() {
        let command = parse("  a/2023-12-31 14:30  ").unwrap();
        assert_eq!(
            command,
            SearchCommand::Appointment(SearchAppointmentCommand::new("2023-12-31 14:30").unwrap())
        );
    }

    #[test]
    fn marker_lookup_is_not_anchored_to_the_start() {
        // Containment semantics: the marker may appear anywhere; the argument
        // starts right after it.
        let command = parse("find b/1990-01-01").unwrap();
        assert_eq!(
            command,
            SearchCommand::Birthday(SearchBirthdayCommand::new("1990-01-01").unwrap())
        );
    }

    #[test]
    fn birthday_wins_when_both_markers_are_present() {
        // Easy to invert by accident: the b/ check runs first, regardless of
        // which marker appears first in the text. Here the birthday branch
        // receives "1990-01-01 a/2023-12-31 14:30", rejects it, and reports
        // the BIRTHDAY usage text — proof the appointment branch never ran.
        assert_eq!(
            parse("b/1990-01-01 a/2023-12-31 14:30"),
            Err(SearchParseError::MissingArgument {
                usage: SearchBirthdayCommand::USAGE.to_string()
            })
        );

        // With the appointment marker first, the birthday branch still wins
        // and gets a clean argument.
        let command = parse("a/2023-12-31 14:30 b/1990-01-01").unwrap();
        assert_eq!(
            command,
            SearchCommand::Birthday(SearchBirthdayCommand::new("1990-01-01").unwrap())
        );
    }

    #[test]
    fn missing_argument_carries_the_usage_text() {
        assert_eq!(
            parse("b/"),
            Err(SearchParseError::MissingArgument {
                usage: SearchBirthdayCommand::USAGE.to_string()
            })
        );
        assert_eq!(
            parse("a/   "),
            Err(SearchParseError::MissingArgument {
                usage: SearchAppointmentCommand::USAGE.to_string()
            })
        );
    }

    #[test]
    fn construction_failures_collapse_into_the_usage_message() {
        // The underlying InvalidDateFormat reason is intentionally discarded.
        assert_eq!(
            parse("a/not-a-date"),
            Err(SearchParseError::MissingArgument {
                usage: SearchAppointmentCommand::USAGE.to_string()
            })
        );
        assert_eq!(
            parse("b/2023-13-01"),
            Err(SearchParseError::MissingArgument {
                usage: SearchBirthdayCommand::USAGE.to_string()
            })
        );
    }
}
