//! Birthday - weekday lookup for a calendar date
//!
//! Maps a year/month/day to the Korean name of its weekday. Dates are
//! proleptic Gregorian and limited to years 1 through 9999; anything outside
//! that, or any day that does not exist, yields a fixed "invalid date"
//! message instead of an error.
//!
//! # Example
//!
//! ```
//! assert_eq!(birthday::weekday_name(2000, 1, 1), "토요일");
//! assert_eq!(birthday::weekday_name(2023, 2, 29), birthday::INVALID_DATE);
//! ```

pub mod cli;

use chrono::{Datelike, NaiveDate, Weekday};
use log::debug;
use thiserror::Error;

/// Weekday names, Monday first
pub const WEEKDAY_NAMES: [&str; 7] = ["월요일", "화요일", "수요일", "목요일", "금요일", "토요일", "일요일"];

/// Message returned for dates that do not exist
pub const INVALID_DATE: &str = "유효하지 않은 날짜입니다.";

/// Earliest supported year
pub const MIN_YEAR: i64 = 1;

/// Latest supported year
pub const MAX_YEAR: i64 = 9999;

/// A year/month/day triple that is not a real calendar date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{year}-{month}-{day} is not a valid date")]
pub struct InvalidDate {
    pub year: i64,
    pub month: i64,
    pub day: i64,
}

/// Build the date, rejecting anything outside years 1..=9999
pub fn to_date(year: i64, month: i64, day: i64) -> Result<NaiveDate, InvalidDate> {
    let invalid = InvalidDate { year, month, day };
    if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
        debug!("to_date: year {} out of range", year);
        return Err(invalid);
    }

    let month = u32::try_from(month).map_err(|_| invalid)?;
    let day = u32::try_from(day).map_err(|_| invalid)?;

    // Range-checked above, fits in i32
    NaiveDate::from_ymd_opt(year as i32, month, day).ok_or(invalid)
}

/// Weekday of the given date
pub fn find_day_of_week(year: i64, month: i64, day: i64) -> Result<Weekday, InvalidDate> {
    to_date(year, month, day).map(|date| date.weekday())
}

/// Korean name of a weekday
pub fn weekday_label(weekday: Weekday) -> &'static str {
    WEEKDAY_NAMES[weekday.num_days_from_monday() as usize]
}

/// Weekday name for a date, or [`INVALID_DATE`]
pub fn weekday_name(year: i64, month: i64, day: i64) -> &'static str {
    match find_day_of_week(year, month, day) {
        Ok(weekday) => weekday_label(weekday),
        Err(e) => {
            debug!("weekday_name: {}", e);
            INVALID_DATE
        }
    }
}

/// Full sentence answer, e.g. `2000년 1월 1일은 토요일입니다.`
pub fn describe(year: i64, month: i64, day: i64) -> String {
    match find_day_of_week(year, month, day) {
        Ok(weekday) => format!("{}년 {}월 {}일은 {}입니다.", year, month, day, weekday_label(weekday)),
        Err(_) => format!("{}년 {}월 {}일은 {}", year, month, day, INVALID_DATE),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_known_dates() {
        assert_eq!(weekday_name(2000, 1, 1), "토요일");
        assert_eq!(weekday_name(1970, 1, 1), "목요일");
        assert_eq!(weekday_name(2024, 2, 29), "목요일");
        assert_eq!(weekday_name(1, 1, 1), "월요일");
        assert_eq!(weekday_name(9999, 12, 31), "금요일");
    }

    #[test]
    fn test_invalid_dates() {
        assert_eq!(weekday_name(2000, 13, 1), INVALID_DATE);
        assert_eq!(weekday_name(2000, 1, 32), INVALID_DATE);
        assert_eq!(weekday_name(2023, 2, 29), INVALID_DATE);
        assert_eq!(weekday_name(1900, 2, 29), INVALID_DATE);
        assert_eq!(weekday_name(2000, 0, 1), INVALID_DATE);
        assert_eq!(weekday_name(2000, 1, 0), INVALID_DATE);
        assert_eq!(weekday_name(2000, -1, 1), INVALID_DATE);
        assert_eq!(weekday_name(0, 1, 1), INVALID_DATE);
        assert_eq!(weekday_name(10000, 1, 1), INVALID_DATE);
        assert_eq!(weekday_name(i64::MAX, i64::MAX, i64::MIN), INVALID_DATE);
    }

    #[test]
    fn test_find_day_of_week_error_carries_input() {
        let err = find_day_of_week(2023, 2, 29).unwrap_err();
        assert_eq!(
            err,
            InvalidDate {
                year: 2023,
                month: 2,
                day: 29
            }
        );
    }

    #[test]
    fn test_describe() {
        assert_eq!(describe(2000, 1, 15), "2000년 1월 15일은 토요일입니다.");
        assert_eq!(describe(2000, 2, 30), "2000년 2월 30일은 유효하지 않은 날짜입니다.");
    }

    #[test]
    fn test_weekday_label_monday_first() {
        assert_eq!(weekday_label(Weekday::Mon), "월요일");
        assert_eq!(weekday_label(Weekday::Sun), "일요일");
    }

    proptest! {
        #[test]
        fn prop_valid_dates_have_one_of_seven_names(days in 0i64..3_652_059) {
            let date = NaiveDate::from_ymd_opt(1, 1, 1).unwrap() + chrono::Days::new(days as u64);
            let name = weekday_name(date.year() as i64, date.month() as i64, date.day() as i64);

            prop_assert!(WEEKDAY_NAMES.contains(&name));
            prop_assert_eq!(name, WEEKDAY_NAMES[(days % 7) as usize]);
        }

        #[test]
        fn prop_days_past_month_end_are_invalid(year in MIN_YEAR..=MAX_YEAR, month in 1i64..=12, extra in 1i64..=40) {
            let days_in_month = (28..=31).rev().find(|d| to_date(year, month, *d).is_ok()).unwrap();
            prop_assert_eq!(weekday_name(year, month, days_in_month + extra), INVALID_DATE);
        }

        #[test]
        fn prop_months_outside_range_are_invalid(month in prop_oneof![-100i64..=0, 13i64..=100], day in 1i64..=28) {
            prop_assert_eq!(weekday_name(2000, month, day), INVALID_DATE);
        }
    }
}
