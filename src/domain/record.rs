//! Contact record
//!
//! A record owns one name, an ordered list of phones and an optional
//! birthday. Phones keep insertion order and may repeat. Every mutating
//! operation validates its input before touching the record.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::error::ContactError;
use super::field::{Birthday, Name, Phone};

/// One contact in the address book
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    name: Name,

    #[serde(default)]
    phones: Vec<Phone>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
}

impl Record {
    /// Creates a record with no phones and no birthday
    pub fn new(name: Name) -> Self {
        Self {
            name,
            phones: Vec::new(),
            birthday: None,
        }
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

    /// Validates and appends a phone; duplicates are kept
    pub fn add_phone(&mut self, raw: &str) -> Result<(), ContactError> {
        let phone: Phone = raw.parse()?;
        self.phones.push(phone);
        Ok(())
    }

    /// Removes the first phone equal to `raw`
    pub fn remove_phone(&mut self, raw: &str) -> Result<(), ContactError> {
        let index = self.position(raw)?;
        self.phones.remove(index);
        Ok(())
    }

    /// Replaces the first phone equal to `old` with `new`, in place
    ///
    /// Fails without changes if `old` is absent or `new` is malformed.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> Result<(), ContactError> {
        let index = self.position(old)?;
        let phone: Phone = new.parse()?;
        self.phones[index] = phone;
        Ok(())
    }

    /// Returns the first phone equal to `raw`
    pub fn find_phone(&self, raw: &str) -> Option<&Phone> {
        self.phones.iter().find(|p| p.as_str() == raw)
    }

    /// Validates and stores a birthday, replacing any previous one
    pub fn set_birthday(&mut self, raw: &str) -> Result<(), ContactError> {
        self.birthday = Some(raw.parse()?);
        Ok(())
    }

    fn position(&self, raw: &str) -> Result<usize, ContactError> {
        self.phones
            .iter()
            .position(|p| p.as_str() == raw)
            .ok_or_else(|| ContactError::PhoneNotFound(raw.to_string()))
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones: Vec<&str> = self.phones.iter().map(Phone::as_str).collect();
        write!(f, "Contact name: {}, phones: {}", self.name, phones.join("; "))?;
        match &self.birthday {
            Some(birthday) => write!(f, ", birthday: {}", birthday),
            None => write!(f, ", birthday: Not set"),
        }
    }
}
