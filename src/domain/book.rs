//! Address book
//!
//! Records keyed by their name, iterated in insertion order.

use super::error::ContactError;
use super::field::{Name, Phone};
use super::record::Record;

/// Outcome of [`AddressBook::upsert_phone`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Upsert {
    /// A new record was created
    Added,
    /// The phone was appended to an existing record
    Updated,
}

/// Collection of contacts, unique by name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
    records: Vec<Record>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a record, replacing any record with the same name
    ///
    /// A replaced record keeps its position in iteration order.
    pub fn add(&mut self, record: Record) {
        match self.index_of(record.name().as_str()) {
            Some(index) => self.records[index] = record,
            None => self.records.push(record),
        }
    }

    /// Looks up a record by exact name
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.iter().find(|r| r.name().as_str() == name)
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.iter_mut().find(|r| r.name().as_str() == name)
    }

    /// Like [`find_mut`](Self::find_mut), failing with `ContactNotFound`
    pub fn require_mut(&mut self, name: &str) -> Result<&mut Record, ContactError> {
        self.find_mut(name)
            .ok_or_else(|| ContactError::ContactNotFound(name.to_string()))
    }

    /// Removes a record by name, returning it if it was present
    pub fn delete(&mut self, name: &str) -> Option<Record> {
        let index = self.index_of(name)?;
        Some(self.records.remove(index))
    }

    /// Adds a phone to the named contact, creating the contact if needed
    ///
    /// An existing record keeps its phones and birthday. Both inputs are
    /// validated first, so a failure never leaves a new empty contact.
    pub fn upsert_phone(&mut self, name: &str, phone: &str) -> Result<Upsert, ContactError> {
        let name = Name::new(name)?;
        let phone: Phone = phone.parse()?;

        if let Some(record) = self.find_mut(name.as_str()) {
            record.add_phone(phone.as_str())?;
            return Ok(Upsert::Updated);
        }

        let mut record = Record::new(name);
        record.add_phone(phone.as_str())?;
        self.records.push(record);
        Ok(Upsert::Added)
    }

    /// Iterates records in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    pub fn all_records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn index_of(&self, name: &str) -> Option<usize> {
        self.records.iter().position(|r| r.name().as_str() == name)
    }
}

impl<'a> IntoIterator for &'a AddressBook {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl FromIterator<Record> for AddressBook {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        let mut book = AddressBook::new();
        for record in iter {
            book.add(record);
        }
        book
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, phones: &[&str]) -> Record {
        let mut record = Record::new(Name::new(name).unwrap());
        for phone in phones {
            record.add_phone(phone).unwrap();
        }
        record
    }

    fn names(book: &AddressBook) -> Vec<&str> {
        book.iter().map(|r| r.name().as_str()).collect()
    }

    #[test]
    fn add_and_find() {
        let mut book = AddressBook::new();
        book.add(record("Anna", &["1111111111"]));

        let found = book.find("Anna").unwrap();
        assert_eq!(found.phones().len(), 1);
        assert!(book.find("anna").is_none());
        assert!(book.find("Ann").is_none());
    }

    #[test]
    fn iteration_follows_insertion_order() {
        let mut book = AddressBook::new();
        book.add(record("Cara", &[]));
        book.add(record("Anna", &[]));
        book.add(record("Bob", &[]));

        assert_eq!(names(&book), vec!["Cara", "Anna", "Bob"]);
    }

    #[test]
    fn add_existing_name_replaces_in_place() {
        let mut book = AddressBook::new();
        book.add(record("Anna", &["1111111111"]));
        book.add(record("Bob", &[]));
        book.add(record("Anna", &["2222222222"]));

        assert_eq!(book.len(), 2);
        assert_eq!(names(&book), vec!["Anna", "Bob"]);
        assert_eq!(book.find("Anna").unwrap().phones()[0].as_str(), "2222222222");
    }

    #[test]
    fn delete_removes_entry() {
        let mut book = AddressBook::new();
        book.add(record("Anna", &[]));

        assert!(book.delete("Anna").is_some());
        assert!(book.find("Anna").is_none());
        assert!(book.is_empty());
    }

    #[test]
    fn delete_missing_is_noop() {
        let mut book = AddressBook::new();
        book.add(record("Anna", &[]));

        assert!(book.delete("Bob").is_none());
        assert_eq!(book.len(), 1);
    }

    #[test]
    fn upsert_creates_new_contact() {
        let mut book = AddressBook::new();
        let outcome = book.upsert_phone("Anna", "1111111111").unwrap();

        assert_eq!(outcome, Upsert::Added);
        assert_eq!(book.find("Anna").unwrap().phones().len(), 1);
    }

    #[test]
    fn upsert_appends_to_existing_contact() {
        let mut book = AddressBook::new();
        book.upsert_phone("Anna", "1111111111").unwrap();
        book.require_mut("Anna").unwrap().set_birthday("15.06.1990").unwrap();

        let outcome = book.upsert_phone("Anna", "2222222222").unwrap();

        assert_eq!(outcome, Upsert::Updated);
        let anna = book.find("Anna").unwrap();
        let phones: Vec<&str> = anna.phones().iter().map(Phone::as_str).collect();
        assert_eq!(phones, vec!["1111111111", "2222222222"]);
        assert_eq!(anna.birthday().unwrap().to_string(), "15.06.1990");
    }

    #[test]
    fn upsert_with_invalid_phone_creates_nothing() {
        let mut book = AddressBook::new();
        let err = book.upsert_phone("Anna", "12345").unwrap_err();

        assert_eq!(err, ContactError::InvalidPhone("12345".into()));
        assert!(book.is_empty());
    }

    #[test]
    fn upsert_rejects_blank_name() {
        let mut book = AddressBook::new();
        assert_eq!(
            book.upsert_phone(" ", "1111111111"),
            Err(ContactError::EmptyName)
        );
    }

    #[test]
    fn require_mut_reports_missing_contact() {
        let mut book = AddressBook::new();
        assert_eq!(
            book.require_mut("Anna").unwrap_err(),
            ContactError::ContactNotFound("Anna".into())
        );
    }

    #[test]
    fn collect_deduplicates_by_name() {
        let book: AddressBook = vec![
            record("Anna", &["1111111111"]),
            record("Bob", &[]),
            record("Anna", &["2222222222"]),
        ]
        .into_iter()
        .collect();

        assert_eq!(names(&book), vec!["Anna", "Bob"]);
    }
}
