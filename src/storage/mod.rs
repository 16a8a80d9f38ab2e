//! # Storage Layer
//!
//! Persistence and configuration for the contact book.
//!
//! ## Storage Formats
//!
//! | Data | Format | Location |
//! |------|--------|----------|
//! | Contacts | JSONL (one record per line) | `<data dir>/addressbook.jsonl` |
//! | Config | TOML | `<config dir>/config.toml` |
//!
//! ## Concurrency Safety
//!
//! - [`ContactStore`] takes a shared lock to read and an exclusive lock to write (`fs2`)
//! - Writes are atomic (temp file + rename)
//!
//! ## Key Types
//!
//! - [`ContactStore`] - Read/write the address book as JSONL
//! - [`Config`] - User configuration

mod jsonl;
mod config;

pub use jsonl::{decode, encode, ContactStore, BOOK_FILE_NAME};
pub use config::{Config, ConfigError, DefaultFormat};
