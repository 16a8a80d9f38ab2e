//! Contact Book - A local-first contact directory with birthday reminders
//!
//! Stores contacts (a name, phone numbers and an optional birthday), validates
//! them on entry, and reports whose birthday needs congratulating in the
//! coming week, moving weekend dates to the following Monday.

pub mod domain;
pub mod storage;
pub mod cli;

pub use domain::{AddressBook, Birthday, ContactError, ErrorKind, Name, Phone, Record};
