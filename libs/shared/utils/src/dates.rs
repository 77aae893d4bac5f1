// libs/shared/utils/src/dates.rs
//
// Fixed-offset calendar date handling. Appointment dates travel as plain
// "YYYY-MM-DD" strings and are interpreted at a constant zero offset, so a
// date never shifts by a day depending on the viewer's timezone.

use chrono::{Datelike, Local, NaiveDate, Utc, Weekday};

/// Calendar components of an appointment date. The rendering collaborator
/// localizes weekday/month names; this crate only supplies the numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateParts {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub weekday: Weekday,
}

/// Parses a "YYYY-MM-DD" string into a calendar date with no timezone
/// attached. Missing or out-of-range components yield `None`.
pub fn parse_fixed_offset(ymd: &str) -> Option<NaiveDate> {
    let mut parts = ymd.split('-');
    let year: i32 = parts.next()?.parse().ok()?;
    let month: u32 = parts.next()?.parse().ok()?;
    let day: u32 = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Whether the candidate date is today or later, with both sides anchored at
/// UTC midnight. Unparseable input is never in the future.
pub fn is_today_or_future(ymd: &str) -> bool {
    match parse_fixed_offset(ymd) {
        Some(date) => date >= Utc::now().date_naive(),
        None => false,
    }
}

/// Today's date on the calendar day the user is actually experiencing, for
/// the date picker's `min` attribute.
///
/// Deliberately anchored to the local clock while `is_today_or_future`
/// anchors at UTC; near midnight the two can disagree by one day. The
/// original product behaves this way and the discrepancy is preserved
/// pending clarification, not unified.
pub fn min_selectable_date() -> String {
    Local::now().date_naive().format("%Y-%m-%d").to_string()
}

/// Calendar components for display, under the same fixed offset as
/// `parse_fixed_offset`.
pub fn date_parts(ymd: &str) -> Option<DateParts> {
    let date = parse_fixed_offset(ymd)?;
    Some(DateParts {
        year: date.year(),
        month: date.month(),
        day: date.day(),
        weekday: date.weekday(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_well_formed_dates() {
        let date = parse_fixed_offset("2030-05-01").unwrap();
        assert_eq!((date.year(), date.month(), date.day()), (2030, 5, 1));
    }

    #[test]
    fn rejects_out_of_range_components() {
        assert_eq!(parse_fixed_offset("2024-13-40"), None);
        assert_eq!(parse_fixed_offset("2024-02-30"), None);
    }

    #[test]
    fn rejects_missing_components() {
        assert_eq!(parse_fixed_offset(""), None);
        assert_eq!(parse_fixed_offset("2024-05"), None);
        assert_eq!(parse_fixed_offset("2024-05-01-07"), None);
        assert_eq!(parse_fixed_offset("not-a-date"), None);
    }

    #[test]
    fn far_future_is_always_bookable() {
        assert!(is_today_or_future("2099-01-01"));
    }

    #[test]
    fn far_past_is_never_bookable() {
        assert!(!is_today_or_future("2000-01-01"));
    }

    #[test]
    fn garbage_is_never_bookable() {
        assert!(!is_today_or_future(""));
        assert!(!is_today_or_future("2024-13-40"));
    }

    #[test]
    fn min_selectable_date_is_a_calendar_date() {
        let min = min_selectable_date();
        assert_eq!(min.len(), 10);
        assert!(parse_fixed_offset(&min).is_some());
    }

    #[test]
    fn date_parts_expose_the_weekday() {
        let parts = date_parts("2024-01-01").unwrap();
        assert_eq!(parts.weekday, Weekday::Mon);
        assert_eq!((parts.year, parts.month, parts.day), (2024, 1, 1));
        assert_eq!(date_parts("2024-00-10"), None);
    }
}
