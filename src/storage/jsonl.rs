//! JSONL storage for contacts
//!
//! The address book is stored with one JSON record per line, in book
//! order. Uses file locking and an atomic rename for writes.

use std::fs::{self, File, OpenOptions};
use std::io::{BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use fs2::FileExt;

use crate::domain::{AddressBook, Record};

/// Default file name for the address book
pub const BOOK_FILE_NAME: &str = "addressbook.jsonl";

/// Serializes a book, one record per line
pub fn encode(book: &AddressBook) -> Result<String> {
    let mut out = String::new();
    for record in book {
        let line = serde_json::to_string(record)
            .with_context(|| format!("Failed to serialize contact {}", record.name()))?;
        out.push_str(&line);
        out.push('\n');
    }
    Ok(out)
}

/// Parses a book written by [`encode`]
///
/// Blank lines are skipped. A later line with a repeated name replaces
/// the earlier record.
pub fn decode(content: &str) -> Result<AddressBook> {
    let mut book = AddressBook::new();

    for (line_num, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        let record: Record = serde_json::from_str(line)
            .with_context(|| format!("Failed to parse contact at line {}", line_num + 1))?;

        book.add(record);
    }

    Ok(book)
}

/// Store for the address book in JSONL format
pub struct ContactStore {
    path: PathBuf,
}

impl ContactStore {
    /// Creates a new contact store at the given path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the path to the store file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the whole book; a missing file is an empty book
    pub fn read_all(&self) -> Result<AddressBook> {
        if !self.path.exists() {
            return Ok(AddressBook::new());
        }

        let mut file = File::open(&self.path)
            .with_context(|| format!("Failed to open contact store: {}", self.path.display()))?;

        // Acquire shared lock for reading
        file.lock_shared()
            .context("Failed to acquire read lock on contact store")?;

        let mut content = String::new();
        file.read_to_string(&mut content)
            .with_context(|| format!("Failed to read contact store: {}", self.path.display()))?;

        // Lock is released when file is dropped
        decode(&content)
    }

    /// Writes the whole book (full rewrite)
    pub fn write_all(&self, book: &AddressBook) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
            }
        }

        let content = encode(book)?;
        let temp_path = self.path.with_extension("jsonl.tmp");

        {
            let file = OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .open(&temp_path)
                .with_context(|| format!("Failed to create temp file: {}", temp_path.display()))?;

            // Acquire exclusive lock
            file.lock_exclusive()
                .context("Failed to acquire write lock on contact store")?;

            let mut writer = BufWriter::new(&file);
            writer
                .write_all(content.as_bytes())
                .context("Failed to write contacts")?;
            writer.flush().context("Failed to flush contact store")?;
        }

        // Atomic rename
        fs::rename(&temp_path, &self.path).with_context(|| {
            format!(
                "Failed to rename {} to {}",
                temp_path.display(),
                self.path.display()
            )
        })?;

        Ok(())
    }
}
