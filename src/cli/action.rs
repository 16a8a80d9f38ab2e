//! Contact commands shared by the one-shot CLI and the interactive shell
//!
//! An [`Action`] is a parsed command with its arguments. Applying it to an
//! address book yields a [`Reply`] or the domain error that stopped it.

use chrono::NaiveDate;
use serde::Serialize;
use thiserror::Error;

use crate::domain::{
    upcoming_birthdays_within, AddressBook, ContactError, Phone, UpcomingBirthday, Upsert,
};

/// Errors from turning shell input into an [`Action`]
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid command.")]
    UnknownCommand(String),

    #[error("Enter the argument for the command.")]
    MissingArguments(String),
}

/// Inputs that do not come from the command line itself
#[derive(Debug, Clone, Copy)]
pub struct ActionContext {
    pub today: NaiveDate,
    pub window_days: u32,
}

/// A contact command and its arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Add { name: String, phone: String },
    Change { name: String, old_phone: String, new_phone: String },
    Phone { name: String },
    All,
    AddBirthday { name: String, date: String },
    ShowBirthday { name: String },
    Birthdays,
    Delete { name: String },
    RemovePhone { name: String, phone: String },
}

impl Action {
    /// Builds an action from a lowercased command word and its arguments
    ///
    /// Arguments past the ones a command needs are ignored.
    pub fn parse(command: &str, args: &[&str]) -> Result<Self, ParseError> {
        let arg = |index: usize| {
            args.get(index)
                .map(|s| s.to_string())
                .ok_or_else(|| ParseError::MissingArguments(command.to_string()))
        };

        match command {
            "add" => Ok(Action::Add {
                name: arg(0)?,
                phone: arg(1)?,
            }),
            "change" => Ok(Action::Change {
                name: arg(0)?,
                old_phone: arg(1)?,
                new_phone: arg(2)?,
            }),
            "phone" => Ok(Action::Phone { name: arg(0)? }),
            "all" => Ok(Action::All),
            "add-birthday" => Ok(Action::AddBirthday {
                name: arg(0)?,
                date: arg(1)?,
            }),
            "show-birthday" => Ok(Action::ShowBirthday { name: arg(0)? }),
            "birthdays" => Ok(Action::Birthdays),
            "delete" => Ok(Action::Delete { name: arg(0)? }),
            "remove-phone" => Ok(Action::RemovePhone {
                name: arg(0)?,
                phone: arg(1)?,
            }),
            other => Err(ParseError::UnknownCommand(other.to_string())),
        }
    }

    /// Returns true if a successful run changes the book
    pub fn mutates(&self) -> bool {
        matches!(
            self,
            Action::Add { .. }
                | Action::Change { .. }
                | Action::AddBirthday { .. }
                | Action::Delete { .. }
                | Action::RemovePhone { .. }
        )
    }

    /// Short command name for diagnostics
    pub fn name(&self) -> &'static str {
        match self {
            Action::Add { .. } => "add",
            Action::Change { .. } => "change",
            Action::Phone { .. } => "phone",
            Action::All => "all",
            Action::AddBirthday { .. } => "add-birthday",
            Action::ShowBirthday { .. } => "show-birthday",
            Action::Birthdays => "birthdays",
            Action::Delete { .. } => "delete",
            Action::RemovePhone { .. } => "remove-phone",
        }
    }

    /// Runs the action against the book
    pub fn apply(&self, book: &mut AddressBook, ctx: &ActionContext) -> Result<Reply, ContactError> {
        match self {
            Action::Add { name, phone } => {
                let message = match book.upsert_phone(name, phone)? {
                    Upsert::Added => "Contact added.",
                    Upsert::Updated => "Contact updated.",
                };
                Ok(Reply::Message(message.to_string()))
            }

            Action::Change {
                name,
                old_phone,
                new_phone,
            } => {
                book.require_mut(name)?.edit_phone(old_phone, new_phone)?;
                Ok(Reply::Message("Contact updated.".to_string()))
            }

            Action::Phone { name } => {
                let record = book
                    .find(name)
                    .ok_or_else(|| ContactError::ContactNotFound(name.clone()))?;
                Ok(Reply::Phones {
                    name: name.clone(),
                    phones: record.phones().iter().map(Phone::to_string).collect(),
                })
            }

            Action::All => Ok(Reply::Contacts(
                book.iter()
                    .map(|record| ContactSummary {
                        name: record.name().to_string(),
                        phones: record.phones().iter().map(Phone::to_string).collect(),
                        birthday: record.birthday().map(ToString::to_string),
                    })
                    .collect(),
            )),

            Action::AddBirthday { name, date } => {
                book.require_mut(name)?.set_birthday(date)?;
                Ok(Reply::Message("Birthday added.".to_string()))
            }

            Action::ShowBirthday { name } => {
                let record = book
                    .find(name)
                    .ok_or_else(|| ContactError::ContactNotFound(name.clone()))?;
                let birthday = record
                    .birthday()
                    .ok_or_else(|| ContactError::BirthdayNotSet(name.clone()))?;
                Ok(Reply::Birthday {
                    name: name.clone(),
                    birthday: birthday.to_string(),
                })
            }

            Action::Birthdays => Ok(Reply::Upcoming(upcoming_birthdays_within(
                book,
                ctx.today,
                ctx.window_days,
            ))),

            Action::Delete { name } => {
                book.delete(name)
                    .ok_or_else(|| ContactError::ContactNotFound(name.clone()))?;
                Ok(Reply::Message("Contact deleted.".to_string()))
            }

            Action::RemovePhone { name, phone } => {
                book.require_mut(name)?.remove_phone(phone)?;
                Ok(Reply::Message("Phone removed.".to_string()))
            }
        }
    }
}

/// One line of the `all` listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactSummary {
    pub name: String,
    pub phones: Vec<String>,
    pub birthday: Option<String>,
}

/// Result of a successful [`Action`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Message(String),
    Phones { name: String, phones: Vec<String> },
    Birthday { name: String, birthday: String },
    Contacts(Vec<ContactSummary>),
    Upcoming(Vec<UpcomingBirthday>),
}

impl Reply {
    /// Human-readable rendering
    pub fn to_text(&self) -> String {
        match self {
            Reply::Message(message) => message.clone(),
            Reply::Phones { name, phones } if phones.is_empty() => {
                format!("No phones for {}.", name)
            }
            Reply::Phones { phones, .. } => phones.join("; "),
            Reply::Birthday { birthday, .. } => birthday.clone(),
            Reply::Contacts(contacts) if contacts.is_empty() => "No contacts.".to_string(),
            Reply::Contacts(contacts) => contacts
                .iter()
                .map(|c| {
                    format!(
                        "{}: {}, Birthday: {}",
                        c.name,
                        c.phones.join("; "),
                        c.birthday.as_deref().unwrap_or("Not set")
                    )
                })
                .collect::<Vec<_>>()
                .join("\n"),
            Reply::Upcoming(upcoming) if upcoming.is_empty() => {
                "No upcoming birthdays.".to_string()
            }
            Reply::Upcoming(upcoming) => upcoming
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }

    /// Machine-readable rendering
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Reply::Message(message) => serde_json::json!({
                "success": true,
                "message": message,
            }),
            Reply::Phones { name, phones } => serde_json::json!({
                "name": name,
                "phones": phones,
            }),
            Reply::Birthday { name, birthday } => serde_json::json!({
                "name": name,
                "birthday": birthday,
            }),
            Reply::Contacts(contacts) => serde_json::json!(contacts),
            Reply::Upcoming(upcoming) => serde_json::json!(upcoming),
        }
    }
}
