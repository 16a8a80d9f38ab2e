//! Upcoming birthday schedule
//!
//! For each contact with a birthday, the next occurrence on or after
//! `today` is found (this year, or next year if it already passed). If
//! that occurrence falls inside the window it is reported, with weekend
//! dates moved to the following Monday.
//!
//! Feb 29 birthdays are observed on Feb 28 in non-leap years.

use chrono::{Datelike, Days, NaiveDate, Weekday};
use serde::{Serialize, Serializer};
use std::fmt;

use super::book::AddressBook;

/// Default window: today plus the six days after it
pub const DEFAULT_WINDOW_DAYS: u32 = 7;

/// Output format for congratulation dates
pub const CONGRATULATION_FORMAT: &str = "%Y.%m.%d";

/// A contact to congratulate and the day to do it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpcomingBirthday {
    pub name: String,

    #[serde(serialize_with = "serialize_congratulation_date")]
    pub congratulation_date: NaiveDate,
}

impl UpcomingBirthday {
    /// Returns the congratulation date as `YYYY.MM.DD`
    pub fn formatted_date(&self) -> String {
        self.congratulation_date.format(CONGRATULATION_FORMAT).to_string()
    }
}

impl fmt::Display for UpcomingBirthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.formatted_date())
    }
}

fn serialize_congratulation_date<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_str(&date.format(CONGRATULATION_FORMAT))
}

/// Contacts whose congratulation falls within the next week
pub fn upcoming_birthdays(book: &AddressBook, today: NaiveDate) -> Vec<UpcomingBirthday> {
    upcoming_birthdays_within(book, today, DEFAULT_WINDOW_DAYS)
}

/// Contacts whose next birthday is fewer than `window_days` days away
///
/// Results follow the address book's order.
pub fn upcoming_birthdays_within(
    book: &AddressBook,
    today: NaiveDate,
    window_days: u32,
) -> Vec<UpcomingBirthday> {
    book.iter()
        .filter_map(|record| {
            let birthday = record.birthday()?.date();
            let occurrence = next_occurrence(birthday, today)?;
            let days_until = (occurrence - today).num_days();

            if !(0..i64::from(window_days)).contains(&days_until) {
                return None;
            }

            Some(UpcomingBirthday {
                name: record.name().to_string(),
                congratulation_date: congratulation_date(occurrence)?,
            })
        })
        .collect()
}

/// The first anniversary of `birthday` on or after `today`
pub fn next_occurrence(birthday: NaiveDate, today: NaiveDate) -> Option<NaiveDate> {
    let this_year = anniversary(birthday, today.year())?;
    if this_year >= today {
        Some(this_year)
    } else {
        anniversary(birthday, today.year() + 1)
    }
}

/// Moves Saturday and Sunday to the following Monday
pub fn congratulation_date(date: NaiveDate) -> Option<NaiveDate> {
    match date.weekday() {
        Weekday::Sat => date.checked_add_days(Days::new(2)),
        Weekday::Sun => date.checked_add_days(Days::new(1)),
        _ => Some(date),
    }
}

fn anniversary(birthday: NaiveDate, year: i32) -> Option<NaiveDate> {
    birthday
        .with_year(year)
        .or_else(|| NaiveDate::from_ymd_opt(year, 2, 28))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Name, Record};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn book(entries: &[(&str, Option<&str>)]) -> AddressBook {
        entries
            .iter()
            .map(|(name, birthday)| {
                let mut record = Record::new(Name::new(*name).unwrap());
                if let Some(birthday) = birthday {
                    record.set_birthday(birthday).unwrap();
                }
                record
            })
            .collect()
    }

    fn rendered(upcoming: &[UpcomingBirthday]) -> Vec<String> {
        upcoming.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn saturday_moves_to_monday() {
        let book = book(&[("Anna", Some("15.06.1990"))]);
        let upcoming = upcoming_birthdays(&book, date(2024, 6, 10));

        assert_eq!(rendered(&upcoming), vec!["Anna: 2024.06.17"]);
    }

    #[test]
    fn sunday_moves_to_monday() {
        let book = book(&[("Anna", Some("16.06.1990"))]);
        let upcoming = upcoming_birthdays(&book, date(2024, 6, 10));

        assert_eq!(upcoming[0].congratulation_date, date(2024, 6, 17));
    }

    #[test]
    fn outside_window_is_excluded() {
        let book = book(&[("Bob", Some("20.06.1985"))]);
        assert!(upcoming_birthdays(&book, date(2024, 6, 10)).is_empty());
    }

    #[test]
    fn window_includes_today_and_excludes_day_seven() {
        let book = book(&[
            ("Today", Some("10.06.2000")),
            ("DaySix", Some("16.06.2000")),
            ("DaySeven", Some("17.06.2000")),
        ]);
        let upcoming = upcoming_birthdays(&book, date(2024, 6, 10));

        assert_eq!(
            rendered(&upcoming),
            vec!["Today: 2024.06.10", "DaySix: 2024.06.17"]
        );
    }

    #[test]
    fn passed_birthday_rolls_to_next_year() {
        let book = book(&[("Cara", Some("02.01.1992"))]);
        let upcoming = upcoming_birthdays(&book, date(2024, 12, 30));

        assert_eq!(rendered(&upcoming), vec!["Cara: 2025.01.02"]);
    }

    #[test]
    fn yesterday_is_a_year_away() {
        let book = book(&[("Dan", Some("09.06.1990"))]);
        assert!(upcoming_birthdays(&book, date(2024, 6, 10)).is_empty());
        assert_eq!(
            next_occurrence(date(1990, 6, 9), date(2024, 6, 10)),
            Some(date(2025, 6, 9))
        );
    }

    #[test]
    fn weekend_shift_crosses_month_end() {
        // 2024-08-31 is a Saturday
        let book = book(&[("Eve", Some("31.08.1979"))]);
        let upcoming = upcoming_birthdays(&book, date(2024, 8, 28));

        assert_eq!(rendered(&upcoming), vec!["Eve: 2024.09.02"]);
    }

    #[test]
    fn weekend_shift_crosses_year_end() {
        // 2023-12-31 is a Sunday
        let book = book(&[("Finn", Some("31.12.1980"))]);
        let upcoming = upcoming_birthdays(&book, date(2023, 12, 28));

        assert_eq!(rendered(&upcoming), vec!["Finn: 2024.01.01"]);
    }

    #[test]
    fn contacts_without_birthday_are_skipped() {
        let book = book(&[("Gus", None), ("Anna", Some("15.06.1990"))]);
        let upcoming = upcoming_birthdays(&book, date(2024, 6, 10));

        assert_eq!(upcoming.len(), 1);
        assert_eq!(upcoming[0].name, "Anna");
    }

    #[test]
    fn leap_day_observed_on_feb_28() {
        let book = book(&[("Hana", Some("29.02.2000"))]);
        let upcoming = upcoming_birthdays(&book, date(2025, 2, 25));

        // 2025-02-28 is a Friday
        assert_eq!(rendered(&upcoming), vec!["Hana: 2025.02.28"]);
    }

    #[test]
    fn leap_day_kept_in_leap_years() {
        assert_eq!(
            next_occurrence(date(2000, 2, 29), date(2028, 2, 20)),
            Some(date(2028, 2, 29))
        );
    }

    #[test]
    fn results_follow_book_order() {
        let book = book(&[
            ("Zed", Some("14.06.1990")),
            ("Amy", Some("11.06.1990")),
        ]);
        let upcoming = upcoming_birthdays(&book, date(2024, 6, 10));

        let names: Vec<&str> = upcoming.iter().map(|u| u.name.as_str()).collect();
        assert_eq!(names, vec!["Zed", "Amy"]);
    }

    #[test]
    fn custom_window() {
        let book = book(&[("Bob", Some("20.06.1985"))]);

        assert!(upcoming_birthdays_within(&book, date(2024, 6, 10), 10).is_empty());
        assert_eq!(upcoming_birthdays_within(&book, date(2024, 6, 10), 11).len(), 1);
        assert!(upcoming_birthdays_within(&book, date(2024, 6, 20), 0).is_empty());
    }

    #[test]
    fn does_not_mutate_book() {
        let book = book(&[("Anna", Some("15.06.1990"))]);
        let before = book.clone();
        let _ = upcoming_birthdays(&book, date(2024, 6, 10));
        assert_eq!(book, before);
    }

    #[test]
    fn serializes_with_dotted_date() {
        let entry = UpcomingBirthday {
            name: "Anna".into(),
            congratulation_date: date(2024, 6, 17),
        };
        let json = serde_json::to_value(&entry).unwrap();

        assert_eq!(
            json,
            serde_json::json!({"name": "Anna", "congratulation_date": "2024.06.17"})
        );
    }
}
