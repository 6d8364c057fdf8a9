// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Calendar arithmetic.
//!
//! Pure date helpers shared by the working-day counter and the calendar
//! month model. Weekdays are numbered 0 (Sunday) through 6 (Saturday) and
//! months passed as `month0` are zero-indexed (0 = January).

use crate::error::DomainError;
use crate::types::NonWorkingDays;
use time::Date;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

/// Abbreviated month names (Jan = index 0).
pub const MONTH_NAMES_SHORT: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

const ISO_DATE_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// Sakamoto month offsets for day-of-week computation.
const MONTH_OFFSETS: [i32; 12] = [0, 3, 2, 5, 0, 3, 5, 1, 4, 6, 2, 4];

/// Returns whether `year` is a leap year under the proleptic Gregorian rule.
#[must_use]
pub const fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Folds month indices of 12 and above into following years.
fn normalize_month(year: i32, month0: u8) -> (i32, u8) {
    (year + i32::from(month0 / 12), month0 % 12)
}

/// Number of days in a month.
///
/// # Arguments
///
/// * `year` - The calendar year
/// * `month0` - The zero-indexed month; 12 and above roll into later years
///
/// # Returns
///
/// The number of days (28-31).
#[must_use]
pub fn days_in_month(year: i32, month0: u8) -> u8 {
    let (year, month0): (i32, u8) = normalize_month(year, month0);
    match month0 {
        1 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        3 | 5 | 8 | 10 => 30,
        _ => 31,
    }
}

/// Day-of-week (0 = Sunday) of the first day of a month.
///
/// Pure arithmetic, so it also covers years outside the range supported by
/// `time::Date`. `year` must lie within `-1_000_000_000..=1_000_000_000` for
/// the intermediate sums to fit in an `i32`.
#[must_use]
pub fn first_weekday_of_month(year: i32, month0: u8) -> u8 {
    let (year, month0): (i32, u8) = normalize_month(year, month0);
    let y: i32 = if month0 < 2 { year - 1 } else { year };
    let offset: i32 = MONTH_OFFSETS[usize::from(month0)];
    let weekday: i32 =
        (y + y.div_euclid(4) - y.div_euclid(100) + y.div_euclid(400) + offset + 1).rem_euclid(7);
    u8::try_from(weekday).unwrap_or(0)
}

/// Formats a date as `YYYY-MM-DD` from its calendar fields.
#[must_use]
pub fn to_iso_date(date: Date) -> String {
    format!(
        "{:04}-{:02}-{:02}",
        date.year(),
        u8::from(date.month()),
        date.day()
    )
}

/// Parses a strict `YYYY-MM-DD` date string.
///
/// # Errors
///
/// Returns `DomainError::DateParseError` if the string is not a valid
/// calendar date in that format.
pub fn parse_iso_date(value: &str) -> Result<Date, DomainError> {
    Date::parse(value, ISO_DATE_FORMAT).map_err(|e| DomainError::DateParseError {
        date_string: value.to_string(),
        error: e.to_string(),
    })
}

/// Day-of-week number of a date (0 = Sunday ... 6 = Saturday).
#[must_use]
pub const fn weekday_number(date: Date) -> u8 {
    date.weekday().number_days_from_sunday()
}

/// Returns true if the date falls on one of the user's non-working days.
#[must_use]
pub const fn is_non_working_day(date: Date, non_working_days: &NonWorkingDays) -> bool {
    non_working_days.contains(weekday_number(date))
}

/// Serde adapter that reads and writes `time::Date` as `YYYY-MM-DD`.
pub mod iso_date {
    use super::{parse_iso_date, to_iso_date};
    use serde::{Deserialize, Deserializer, Serializer};
    use time::Date;

    /// Serializes a date as an ISO string.
    ///
    /// # Errors
    ///
    /// Propagates serializer errors.
    #[allow(clippy::trivially_copy_pass_by_ref)]
    pub fn serialize<S>(date: &Date, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&to_iso_date(*date))
    }

    /// Deserializes a date from an ISO string.
    ///
    /// # Errors
    ///
    /// Fails if the value is not a string or not a valid `YYYY-MM-DD` date.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Date, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: String = String::deserialize(deserializer)?;
        parse_iso_date(&raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn test_days_in_month_leap_february() {
        assert_eq!(days_in_month(2024, 1), 29);
        assert_eq!(days_in_month(2026, 1), 28);
    }

    #[test]
    fn test_days_in_month_century_rule() {
        assert_eq!(days_in_month(1900, 1), 28);
        assert_eq!(days_in_month(2000, 1), 29);
    }

    #[test]
    fn test_days_in_month_thirty_and_thirty_one() {
        assert_eq!(days_in_month(2026, 0), 31);
        assert_eq!(days_in_month(2026, 3), 30);
        assert_eq!(days_in_month(2026, 8), 30);
        assert_eq!(days_in_month(2026, 11), 31);
    }

    #[test]
    fn test_days_in_month_rolls_into_next_year() {
        // month0 = 12 is January of the following year
        assert_eq!(days_in_month(2024, 12), 31);
        assert_eq!(days_in_month(2023, 13), 29);
    }

    #[test]
    fn test_first_weekday_of_month_known_dates() {
        // 1 March 2026 is a Sunday
        assert_eq!(first_weekday_of_month(2026, 2), 0);
        // 1 January 2026 is a Thursday
        assert_eq!(first_weekday_of_month(2026, 0), 4);
        // 1 February 2024 is a Thursday
        assert_eq!(first_weekday_of_month(2024, 1), 4);
        // 1 January 2000 is a Saturday
        assert_eq!(first_weekday_of_month(2000, 0), 6);
    }

    #[test]
    fn test_first_weekday_matches_time_crate() {
        for month0 in 0..12_u8 {
            let first: Date =
                Date::from_calendar_date(2027, time::Month::try_from(month0 + 1).unwrap(), 1)
                    .unwrap();
            assert_eq!(first_weekday_of_month(2027, month0), weekday_number(first));
        }
    }

    #[test]
    fn test_first_weekday_at_documented_year_bounds() {
        assert!(first_weekday_of_month(1_000_000_000, 11) < 7);
        assert!(first_weekday_of_month(-1_000_000_000, 0) < 7);
        // 400-year cycle: 1 March 2426 falls on the same weekday as 1 March 2026
        assert_eq!(first_weekday_of_month(2426, 2), 0);
    }

    #[test]
    fn test_to_iso_date_pads_fields() {
        assert_eq!(to_iso_date(date!(2026 - 03 - 09)), "2026-03-09");
        let early: Date = Date::from_calendar_date(999, time::Month::December, 31).unwrap();
        assert_eq!(to_iso_date(early), "0999-12-31");
    }

    #[test]
    fn test_parse_iso_date_round_trips() {
        let parsed: Date = parse_iso_date("2026-12-01").unwrap();
        assert_eq!(parsed, date!(2026 - 12 - 01));
        assert_eq!(to_iso_date(parsed), "2026-12-01");
    }

    #[test]
    fn test_parse_iso_date_rejects_garbage() {
        assert!(matches!(
            parse_iso_date("not-a-date"),
            Err(DomainError::DateParseError { .. })
        ));
        assert!(matches!(
            parse_iso_date("2026-02-30"),
            Err(DomainError::DateParseError { .. })
        ));
    }

    #[test]
    fn test_weekday_number_sunday_is_zero() {
        assert_eq!(weekday_number(date!(2026 - 03 - 15)), 0);
        assert_eq!(weekday_number(date!(2026 - 03 - 09)), 1);
        assert_eq!(weekday_number(date!(2026 - 03 - 14)), 6);
    }

    #[test]
    fn test_is_non_working_day() {
        let weekends: NonWorkingDays = NonWorkingDays::WEEKENDS;
        assert!(is_non_working_day(date!(2026 - 03 - 14), &weekends));
        assert!(!is_non_working_day(date!(2026 - 03 - 13), &weekends));
    }
}
