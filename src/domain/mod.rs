//! Domain models for the contact book
//!
//! Contains the contact model and birthday scheduling without any I/O concerns.

mod error;
mod field;
mod record;
mod book;
mod birthdays;

pub use error::{ContactError, ErrorKind};
pub use field::{Birthday, Name, Phone, BIRTHDAY_FORMAT, PHONE_LENGTH};
pub use record::Record;
pub use book::{AddressBook, Upsert};
pub use birthdays::{
    congratulation_date, next_occurrence, upcoming_birthdays, upcoming_birthdays_within,
    UpcomingBirthday, CONGRATULATION_FORMAT, DEFAULT_WINDOW_DAYS,
};
