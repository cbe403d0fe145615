//! Birth date parsing between the masked display form and the canonical
//! calendar form sent to the store.

use chrono::{Datelike, NaiveDate};

/// Calendar-valid birth date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BirthDate(NaiveDate);

impl BirthDate {
    /// Parse the `DD/MM/YYYY` display form.
    ///
    /// Returns `None` unless the three components rebuild into the very same
    /// calendar date, which rejects impossible days such as `30/02/2024` or
    /// `31/04/2024`.
    pub fn parse_display(input: &str) -> Option<Self> {
        let mut parts = input.trim().split('/');
        let (day, month, year) = (parts.next()?, parts.next()?, parts.next()?);
        if parts.next().is_some() {
            return None;
        }
        if day.len() != 2 || month.len() != 2 || year.len() != 4 {
            return None;
        }
        if ![day, month, year]
            .iter()
            .all(|part| part.bytes().all(|b| b.is_ascii_digit()))
        {
            return None;
        }

        let day: u32 = day.parse().ok()?;
        let month: u32 = month.parse().ok()?;
        let year: i32 = year.parse().ok()?;

        let date = NaiveDate::from_ymd_opt(year, month, day)?;
        if date.day() != day || date.month() != month || date.year() != year {
            return None;
        }
        Some(Self(date))
    }

    /// `YYYY-MM-DD`.
    pub fn to_canonical(&self) -> String {
        self.0.format("%Y-%m-%d").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_leap_day_in_leap_year() {
        assert!(BirthDate::parse_display("29/02/2024").is_some());
    }

    #[test]
    fn rejects_impossible_days() {
        assert!(BirthDate::parse_display("29/02/2023").is_none());
        assert!(BirthDate::parse_display("30/02/2024").is_none());
        assert!(BirthDate::parse_display("31/04/2024").is_none());
        assert!(BirthDate::parse_display("00/01/2000").is_none());
        assert!(BirthDate::parse_display("10/13/2000").is_none());
    }

    #[test]
    fn rejects_partial_or_malformed_input() {
        assert!(BirthDate::parse_display("05/10").is_none());
        assert!(BirthDate::parse_display("05/10/90").is_none());
        assert!(BirthDate::parse_display("5/10/1990").is_none());
        assert!(BirthDate::parse_display("05-10-1990").is_none());
        assert!(BirthDate::parse_display("05/10/1990/1").is_none());
        assert!(BirthDate::parse_display("aa/bb/cccc").is_none());
    }

    #[test]
    fn canonical_form_is_iso_calendar_date() {
        let date = BirthDate::parse_display("05/10/1990").unwrap();

        assert_eq!(date.to_canonical(), "1990-10-05");
    }
}
