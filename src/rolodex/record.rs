use crate::error::{RolodexError, Result};
use crate::fields::{Birthday, Name, Phone};
use chrono::{Datelike, Local, NaiveDate, NaiveDateTime};
use std::fmt;

/// One contact: a name, its phone numbers in insertion order, and an optional birthday.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    name: Name,
    phones: Vec<Phone>,
    birthday: Option<Birthday>,
}

impl Record {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Name::new(name),
            phones: Vec::new(),
            birthday: None,
        }
    }

    pub fn with_birthday(name: impl Into<String>, birthday: &str) -> Result<Self> {
        let mut record = Self::new(name);
        record.set_birthday(birthday)?;
        Ok(record)
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    pub fn set_birthday(&mut self, value: &str) -> Result<()> {
        self.birthday = Some(Birthday::new(value)?);
        Ok(())
    }

    pub fn clear_birthday(&mut self) {
        self.birthday = None;
    }

    /// Appends a phone number. Duplicates are kept.
    pub fn add_phone(&mut self, number: impl Into<String>) -> Result<()> {
        self.phones.push(Phone::new(number)?);
        Ok(())
    }

    /// Removes the first phone equal to `number`. Returns whether one was removed.
    pub fn remove_phone(&mut self, number: &str) -> bool {
        match self.position_of(number) {
            Some(pos) => {
                self.phones.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Replaces the first phone equal to `old` with `new`, keeping its position.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> Result<()> {
        let pos = self
            .position_of(old)
            .ok_or_else(|| RolodexError::PhoneNotFound(old.to_string()))?;
        self.phones[pos].set(new)
    }

    pub fn find_phone(&self, number: &str) -> Option<&Phone> {
        self.phones.iter().find(|p| p.as_str() == number)
    }

    fn position_of(&self, number: &str) -> Option<usize> {
        self.phones.iter().position(|p| p.as_str() == number)
    }

    /// Days until the next birthday, counted from the current local time.
    pub fn days_to_birthday(&self) -> Option<i64> {
        self.days_to_birthday_from(Local::now().naive_local())
    }

    /// Whole days from `now` to midnight of the next birthday.
    ///
    /// Once midnight of this year's birthday has passed, the next one is a year
    /// away. Partial days are dropped.
    pub fn days_to_birthday_from(&self, now: NaiveDateTime) -> Option<i64> {
        let birthday = self.birthday?.date();

        let mut next = occurrence_in(birthday, now.year())?.and_hms_opt(0, 0, 0)?;
        if now > next {
            next = occurrence_in(birthday, now.year() + 1)?.and_hms_opt(0, 0, 0)?;
        }

        Some((next - now).num_days())
    }
}

/// The birthday's month and day in `year`; 29 February becomes 28 February
/// in common years.
fn occurrence_in(birthday: NaiveDate, year: i32) -> Option<NaiveDate> {
    birthday
        .with_year(year)
        .or_else(|| NaiveDate::from_ymd_opt(year, birthday.month(), 28))
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones: Vec<&str> = self.phones.iter().map(Phone::as_str).collect();
        writeln!(f, "Contact name: {}", self.name)?;
        write!(f, "Phones: {}", phones.join("; "))?;
        if let Some(birthday) = &self.birthday {
            write!(f, "\nBirthday: {}", birthday)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(date: &str, time: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(&format!("{date} {time}"), "%Y-%m-%d %H:%M:%S").unwrap()
    }

    fn john() -> Record {
        let mut record = Record::new("John");
        record.add_phone("1234567890").unwrap();
        record.add_phone("5555555555").unwrap();
        record
    }

    #[test]
    fn add_phone_keeps_order_and_duplicates() {
        let mut record = john();
        record.add_phone("1234567890").unwrap();

        let phones: Vec<&str> = record.phones().iter().map(|p| p.as_str()).collect();
        assert_eq!(phones, ["1234567890", "5555555555", "1234567890"]);
    }

    #[test]
    fn add_phone_rejects_malformed_numbers() {
        let mut record = john();
        let err = record.add_phone("555-1234").unwrap_err();
        assert!(err.is_validation());
        assert_eq!(record.phones().len(), 2);
    }

    #[test]
    fn remove_phone_drops_only_the_first_match() {
        let mut record = john();
        record.add_phone("1234567890").unwrap();

        assert!(record.remove_phone("1234567890"));
        let phones: Vec<&str> = record.phones().iter().map(|p| p.as_str()).collect();
        assert_eq!(phones, ["5555555555", "1234567890"]);
    }

    #[test]
    fn remove_missing_phone_is_a_no_op() {
        let mut record = john();
        assert!(!record.remove_phone("0000000000"));
        assert_eq!(record, john());
    }

    #[test]
    fn edit_phone_replaces_in_place() {
        let mut record = john();
        record.edit_phone("1234567890", "1112223333").unwrap();

        assert!(record.find_phone("1234567890").is_none());
        assert_eq!(record.phones()[0].as_str(), "1112223333");
        assert_eq!(record.phones()[1].as_str(), "5555555555");
    }

    #[test]
    fn edit_phone_reports_missing_number() {
        let mut record = john();
        let err = record.edit_phone("0000000000", "1112223333").unwrap_err();
        assert!(matches!(err, RolodexError::PhoneNotFound(ref n) if n == "0000000000"));
    }

    #[test]
    fn edit_phone_with_invalid_replacement_leaves_record_unchanged() {
        let mut record = john();
        let err = record.edit_phone("1234567890", "12").unwrap_err();
        assert!(err.is_validation());
        assert_eq!(record, john());
    }

    #[test]
    fn find_phone_returns_first_match() {
        let record = john();
        assert_eq!(
            record.find_phone("5555555555").map(|p| p.as_str()),
            Some("5555555555")
        );
        assert!(record.find_phone("555").is_none());
    }

    #[test]
    fn no_birthday_means_no_countdown() {
        assert_eq!(john().days_to_birthday(), None);
        assert_eq!(
            john().days_to_birthday_from(at("2024-05-16", "12:00:00")),
            None
        );
    }

    #[test]
    fn countdown_to_upcoming_birthday_floors_partial_days() {
        let record = Record::with_birthday("Ann", "1990-05-20").unwrap();
        assert_eq!(
            record.days_to_birthday_from(at("2024-05-16", "12:00:00")),
            Some(3)
        );

        let tomorrow = Record::with_birthday("Ann", "1990-05-17").unwrap();
        assert_eq!(
            tomorrow.days_to_birthday_from(at("2024-05-16", "12:00:00")),
            Some(0)
        );
    }

    #[test]
    fn countdown_rolls_over_once_the_day_has_started() {
        let record = Record::with_birthday("Ann", "1990-05-16").unwrap();
        assert_eq!(
            record.days_to_birthday_from(at("2024-05-16", "00:00:00")),
            Some(0)
        );
        assert_eq!(
            record.days_to_birthday_from(at("2024-05-16", "12:00:00")),
            Some(364)
        );
    }

    #[test]
    fn leap_day_birthday_falls_back_in_common_years() {
        let record = Record::with_birthday("Leap", "2000-02-29").unwrap();
        assert_eq!(
            record.days_to_birthday_from(at("2025-01-01", "00:00:00")),
            Some(58)
        );
        assert_eq!(
            record.days_to_birthday_from(at("2024-01-01", "00:00:00")),
            Some(59)
        );
    }

    #[test]
    fn days_to_birthday_uses_the_clock() {
        let record = Record::with_birthday("Ann", "1990-05-20").unwrap();
        let days = record.days_to_birthday().unwrap();
        assert!((0..=366).contains(&days));
    }

    #[test]
    fn renders_multi_line_summary() {
        let mut record = john();
        assert_eq!(
            record.to_string(),
            "Contact name: John\nPhones: 1234567890; 5555555555"
        );

        record.set_birthday("1990-05-17").unwrap();
        assert_eq!(
            record.to_string(),
            "Contact name: John\nPhones: 1234567890; 5555555555\nBirthday: 1990-05-17"
        );
    }

    #[test]
    fn invalid_birthday_is_rejected_at_construction() {
        let err = Record::with_birthday("Ann", "20-05-1990").unwrap_err();
        assert!(err.is_validation());
    }
}
