//! # Contact Fields
//!
//! The scalar values attached to a contact. Each validated field is a newtype whose
//! only construction path runs its format check, so a value in hand is always valid:
//!
//! - [`Name`]: free text, the contact's key in the address book. Not validated.
//! - [`Phone`]: exactly 10 ASCII digits.
//! - [`Birthday`]: a calendar date written as `YYYY-MM-DD`.
//!
//! Updates go through `set`, which re-validates and leaves the previous value in
//! place when the new one is rejected.

use crate::error::{RolodexError, Result};
use chrono::NaiveDate;
use std::fmt;

pub const PHONE_DIGITS: usize = 10;
pub const BIRTHDAY_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Name(String);

impl Name {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Phone(String);

impl Phone {
    /// Builds a phone number, rejecting anything that is not exactly 10 digits.
    ///
    /// ```
    /// use rolodex::fields::Phone;
    ///
    /// assert!(Phone::new("0123456789").is_ok());
    /// assert!(Phone::new("012345678").is_err());
    /// assert!(Phone::new("01234-5678").is_err());
    /// ```
    pub fn new(value: impl Into<String>) -> Result<Self> {
        let value = value.into();
        validate_phone(&value)?;
        Ok(Self(value))
    }

    pub fn set(&mut self, value: impl Into<String>) -> Result<()> {
        let value = value.into();
        validate_phone(&value)?;
        self.0 = value;
        Ok(())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn validate_phone(value: &str) -> Result<()> {
    // Byte length: every accepted char is ASCII.
    if value.len() == PHONE_DIGITS && value.bytes().all(|b| b.is_ascii_digit()) {
        Ok(())
    } else {
        Err(RolodexError::InvalidPhone(value.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Parses a `YYYY-MM-DD` date.
    ///
    /// ```
    /// use rolodex::fields::Birthday;
    ///
    /// assert_eq!(Birthday::new("1990-05-17").unwrap().to_string(), "1990-05-17");
    /// assert!(Birthday::new("17.05.1990").is_err());
    /// assert!(Birthday::new("1990-02-30").is_err());
    /// ```
    pub fn new(value: &str) -> Result<Self> {
        parse_birthday(value).map(Self)
    }

    pub fn set(&mut self, value: &str) -> Result<()> {
        self.0 = parse_birthday(value)?;
        Ok(())
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

fn parse_birthday(value: &str) -> Result<NaiveDate> {
    // chrono accepts unpadded fields ("1990-5-7"); the stored format is always padded.
    let shape_ok = value.len() == 10
        && value
            .char_indices()
            .all(|(i, c)| if i == 4 || i == 7 { c == '-' } else { c.is_ascii_digit() });
    if !shape_ok {
        return Err(RolodexError::InvalidBirthday(value.to_string()));
    }
    NaiveDate::parse_from_str(value, BIRTHDAY_FORMAT)
        .map_err(|_| RolodexError::InvalidBirthday(value.to_string()))
}
