//! Validation functions for contact date fields.
//
// Shape is checked with a regex (the stored formats are zero-padded), then
// chrono enforces calendar validity (no month 13, no day 32, no hour 24).

use chrono::{NaiveDate, NaiveDateTime};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::contact::{APPOINTMENT_FORMAT, BIRTHDAY_FORMAT};

static DATE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").unwrap());
static DATE_TIME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2} \d{2}:\d{2}$").unwrap());

/// Validate date string has format YYYY-MM-DD and names a real calendar date
pub fn validate_date_format(date: &str) -> bool {
    DATE_RE.is_match(date) && NaiveDate::parse_from_str(date, BIRTHDAY_FORMAT).is_ok()
}

/// Validate date/time string has format YYYY-MM-DD HH:MM (24-hour) and names
/// a real calendar date and time
pub fn validate_date_time_format(date_time: &str) -> bool {
    DATE_TIME_RE.is_match(date_time)
        && NaiveDateTime::parse_from_str(date_time, APPOINTMENT_FORMAT).is_ok()
}
