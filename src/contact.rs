//! Contact entities and their date-valued fields.
//!
//! `Appointment` and `Birthday` are value types that render to a fixed
//! canonical form; that rendering is what searches compare against.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::validation::{validate_date_format, validate_date_time_format};

/// Canonical rendering of an appointment: `yyyy-MM-dd HH:mm`.
pub const APPOINTMENT_FORMAT: &str = "%Y-%m-%d %H:%M";
/// Canonical rendering of a birthday: `yyyy-MM-dd`.
pub const BIRTHDAY_FORMAT: &str = "%Y-%m-%d";

/// Custom error type for contact field parsing
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum ContactError {
    #[error("Invalid appointment '{0}': expected yyyy-MM-dd HH:mm")]
    InvalidAppointment(String),
    #[error("Invalid birthday '{0}': expected yyyy-MM-dd")]
    InvalidBirthday(String),
}

/// A scheduled appointment, held to minute precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Appointment(NaiveDateTime);

impl Appointment {
    pub fn new(date_time: NaiveDateTime) -> Self {
        Self(date_time)
    }

    pub fn date_time(&self) -> NaiveDateTime {
        self.0
    }
}

impl fmt::Display for Appointment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(APPOINTMENT_FORMAT))
    }
}

impl FromStr for Appointment {
    type Err = ContactError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !validate_date_time_format(s) {
            return Err(ContactError::InvalidAppointment(s.to_string()));
        }
        NaiveDateTime::parse_from_str(s, APPOINTMENT_FORMAT)
            .map(Appointment)
            .map_err(|_| ContactError::InvalidAppointment(s.to_string()))
    }
}

impl Serialize for Appointment {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Appointment {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// A contact's birthday.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Birthday(NaiveDate);

impl Birthday {
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(BIRTHDAY_FORMAT))
    }
}

impl FromStr for Birthday {
    type Err = ContactError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !validate_date_format(s) {
            return Err(ContactError::InvalidBirthday(s.to_string()));
        }
        NaiveDate::parse_from_str(s, BIRTHDAY_FORMAT)
            .map(Birthday)
            .map_err(|_| ContactError::InvalidBirthday(s.to_string()))
    }
}

impl Serialize for Birthday {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// A single address book entry.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Contact {
    pub name: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub birthday: Option<Birthday>,
    #[serde(default)]
    pub appointment: Option<Appointment>,
}

impl Contact {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), phone: None, email: None, birthday: None, appointment: None }
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        if let Some(phone) = &self.phone {
            write!(f, "; Phone: {}", phone)?;
        }
        if let Some(email) = &self.email {
            write!(f, "; Email: {}", email)?;
        }
        if let Some(birthday) = &self.birthday {
            write!(f, "; Birthday: {}", birthday)?;
        }
        if let Some(appointment) = &self.appointment {
            write!(f, "; Appointment: {}", appointment)?;
        }
        Ok(())
    }
}
