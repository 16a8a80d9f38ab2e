//! Validated contact fields
//!
//! Each field type checks its format once, at construction. A value that
//! exists is a valid value; there is no partially-valid phone or birthday.
//!
//! Formats:
//! - Name: any non-blank string
//! - Phone: exactly 10 ASCII digits (`0501234567`), no separators
//! - Birthday: `DD.MM.YYYY` naming a real calendar date (`29.02.2024`)

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::error::ContactError;

/// Number of digits in a phone number
pub const PHONE_LENGTH: usize = 10;

/// Display and input format for birthdays
pub const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";

/// Contact name, the directory key
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Name(String);

impl Name {
    pub fn new(raw: impl Into<String>) -> Result<Self, ContactError> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return Err(ContactError::EmptyName);
        }
        Ok(Self(raw))
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

impl FromStr for Name {
    type Err = ContactError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Name {
    type Error = ContactError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Name> for String {
    fn from(name: Name) -> Self {
        name.0
    }
}

/// A 10-digit phone number
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Phone(String);

impl Phone {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn is_valid(raw: &str) -> bool {
        raw.len() == PHONE_LENGTH && raw.bytes().all(|b| b.is_ascii_digit())
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Phone {
    type Err = ContactError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !Self::is_valid(s) {
            return Err(ContactError::InvalidPhone(s.to_string()));
        }
        Ok(Self(s.to_string()))
    }
}

impl TryFrom<String> for Phone {
    type Error = ContactError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if !Self::is_valid(&value) {
            return Err(ContactError::InvalidPhone(value));
        }
        Ok(Self(value))
    }
}

impl From<Phone> for String {
    fn from(phone: Phone) -> Self {
        phone.0
    }
}

/// A birth date, parsed from `DD.MM.YYYY`
///
/// Only the parsed date is kept, so `1.2.1990` and `01.02.1990` produce
/// the same value and both display as `01.02.1990`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Returns the stored calendar date
    pub fn date(&self) -> NaiveDate {
        self.0
    }

    fn parse(raw: &str) -> Option<NaiveDate> {
        let mut parts = raw.split('.');
        let (day, month, year) = (parts.next()?, parts.next()?, parts.next()?);
        if parts.next().is_some() {
            return None;
        }

        if !is_digits(day, 1, 2) || !is_digits(month, 1, 2) || !is_digits(year, 4, 4) {
            return None;
        }

        let date = NaiveDate::from_ymd_opt(year.parse().ok()?, month.parse().ok()?, day.parse().ok()?)?;
        // Year 0000 is representable in chrono but is not a calendar year
        (date.year() >= 1).then_some(date)
    }
}

fn is_digits(part: &str, min: usize, max: usize) -> bool {
    (min..=max).contains(&part.len()) && part.bytes().all(|b| b.is_ascii_digit())
}

impl From<NaiveDate> for Birthday {
    fn from(date: NaiveDate) -> Self {
        Self(date)
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
        Self::parse(s)
            .map(Self)
            .ok_or_else(|| ContactError::InvalidBirthday(s.to_string()))
    }
}

impl TryFrom<String> for Birthday {
    type Error = ContactError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Birthday> for String {
    fn from(birthday: Birthday) -> Self {
        birthday.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn name_rejects_blank() {
        assert_eq!(Name::new(""), Err(ContactError::EmptyName));
        assert_eq!(Name::new("   "), Err(ContactError::EmptyName));
        assert_eq!(Name::new("Anna").unwrap().as_str(), "Anna");
    }

    #[test]
    fn phone_accepts_ten_digits() {
        let phone: Phone = "0501234567".parse().unwrap();
        assert_eq!(phone.as_str(), "0501234567");
    }

    #[test]
    fn phone_rejects_malformed() {
        for raw in ["", "123456789", "12345678901", "050-123-456", "050123456a", " 0501234567"] {
            assert_eq!(
                raw.parse::<Phone>(),
                Err(ContactError::InvalidPhone(raw.to_string())),
                "{raw:?} should be rejected"
            );
        }
    }

    #[test]
    fn phone_rejects_non_ascii_digits() {
        // Arabic-Indic digits are decimal digits but not ASCII
        assert!("٠١٢٣٤٥٦٧٨٩".parse::<Phone>().is_err());
    }

    #[test]
    fn birthday_parses_leap_day() {
        let birthday: Birthday = "29.02.2024".parse().unwrap();
        assert_eq!(birthday.date(), NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
    }

    #[test]
    fn birthday_rejects_impossible_dates() {
        for raw in ["31.02.2024", "29.02.2023", "32.01.2024", "00.01.2024", "15.13.2024", "15.06.0000"] {
            assert!(raw.parse::<Birthday>().is_err(), "{raw:?} should be rejected");
        }
    }

    #[test]
    fn birthday_rejects_other_layouts() {
        for raw in [
            "2024.06.15",
            "15/06/2024",
            "15-06-2024",
            "15.06.24",
            "15.06.2024.",
            "15.06",
            " 15.06.2024",
            "15.06.2024 ",
            "+1.06.2024",
            "",
        ] {
            assert!(raw.parse::<Birthday>().is_err(), "{raw:?} should be rejected");
        }
    }

    #[test]
    fn birthday_accepts_unpadded_day_and_month() {
        let birthday: Birthday = "1.2.1990".parse().unwrap();
        assert_eq!(birthday.to_string(), "01.02.1990");
    }

    #[test]
    fn fields_serialize_as_strings() {
        let birthday: Birthday = "15.06.1990".parse().unwrap();
        assert_eq!(serde_json::to_string(&birthday).unwrap(), "\"15.06.1990\"");

        let phone: Result<Phone, _> = serde_json::from_str("\"12345\"");
        assert!(phone.is_err());
    }

    proptest! {
        #[test]
        fn phone_valid_iff_ten_ascii_digits(raw in "\\PC{0,14}") {
            let expected = raw.len() == 10 && raw.bytes().all(|b| b.is_ascii_digit());
            prop_assert_eq!(raw.parse::<Phone>().is_ok(), expected);
        }

        #[test]
        fn phone_accepts_any_ten_digit_string(raw in "[0-9]{10}") {
            prop_assert!(raw.parse::<Phone>().is_ok());
        }

        #[test]
        fn birthday_accepts_every_real_date(days in 0i64..3_650_000) {
            let date = NaiveDate::from_ymd_opt(1, 1, 1).unwrap() + chrono::Duration::days(days);
            prop_assume!(date.year() <= 9999);
            let raw = date.format(BIRTHDAY_FORMAT).to_string();
            let birthday: Birthday = raw.parse().unwrap();
            prop_assert_eq!(birthday.date(), date);
        }

        #[test]
        fn birthday_rejects_out_of_range_days(day in 32u32..100, month in 1u32..=12, year in 1000u32..=9999) {
            let raw = format!("{day:02}.{month:02}.{year}");
            prop_assert!(raw.parse::<Birthday>().is_err());
        }
    }
}
