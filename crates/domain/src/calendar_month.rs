// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Month calendar model.
//!
//! Builds the per-day data behind a month grid: which entry covers each day,
//! whether it is a bank holiday or a non-working day, and how the day should
//! be classified for display.

use crate::bank_holidays::BankHolidays;
use crate::calendar::{MONTH_NAMES_SHORT, days_in_month, first_weekday_of_month, iso_date};
use crate::error::DomainError;
use crate::types::{LeaveEntry, LeaveStatus, NonWorkingDays};
use serde::{Deserialize, Serialize};
use time::{Date, Month};

/// Display classification of a calendar day.
///
/// Resolved with precedence `Leave` > `BankHoliday` > `NonWorking` > `Working`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "status", rename_all = "camelCase")]
pub enum DayKind {
    /// Covered by a leave entry with the given status.
    Leave(LeaveStatus),
    BankHoliday,
    NonWorking,
    Working,
}

/// One day in a month grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarDay {
    #[serde(with = "iso_date")]
    pub date: Date,
    /// Day of month, 1-based.
    pub day: u8,
    /// The covering entry, if any.
    pub entry_id: Option<String>,
    pub status: Option<LeaveStatus>,
    pub is_bank_holiday: bool,
    pub is_non_working: bool,
    pub is_today: bool,
    pub kind: DayKind,
}

/// The data behind one month grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarMonth {
    pub year: i32,
    /// Zero-indexed month (0 = January).
    pub month0: u8,
    /// Heading such as `Mar 2026`.
    pub title: String,
    /// Empty cells before day 1 in a Sunday-first grid.
    pub leading_blanks: u8,
    pub days: Vec<CalendarDay>,
}

/// Finds the first entry covering a date.
#[must_use]
pub fn entry_for_date(date: Date, entries: &[LeaveEntry]) -> Option<&LeaveEntry> {
    entries.iter().find(|entry| entry.covers(date))
}

/// The month before `(year, month0)`.
#[must_use]
pub const fn previous_month(year: i32, month0: u8) -> (i32, u8) {
    if month0 == 0 {
        (year - 1, 11)
    } else {
        (year, month0 - 1)
    }
}

/// The month after `(year, month0)`.
#[must_use]
pub const fn next_month(year: i32, month0: u8) -> (i32, u8) {
    if month0 >= 11 {
        (year + 1, 0)
    } else {
        (year, month0 + 1)
    }
}

const fn resolve_day_kind(
    status: Option<LeaveStatus>,
    is_bank_holiday: bool,
    is_non_working: bool,
) -> DayKind {
    if let Some(status) = status {
        DayKind::Leave(status)
    } else if is_bank_holiday {
        DayKind::BankHoliday
    } else if is_non_working {
        DayKind::NonWorking
    } else {
        DayKind::Working
    }
}

/// Builds the calendar model for one month.
///
/// Every entry type is shown, not only holidays. Bank holidays are taken as
/// given, without the per-user filter applied to leave accounting.
///
/// # Arguments
///
/// * `year` - The calendar year
/// * `month0` - The zero-indexed month (0-11)
/// * `entries` - The user's leave entries
/// * `non_working_days` - The user's non-working weekdays
/// * `bank_holidays` - The bank holiday set
/// * `today` - The current date, used to mark the today cell
///
/// # Errors
///
/// Returns `DomainError::InvalidMonth` if `month0` is outside 0-11, or
/// `DomainError::DateArithmeticOverflow` if the month is not representable.
pub fn build_calendar_month(
    year: i32,
    month0: u8,
    entries: &[LeaveEntry],
    non_working_days: &NonWorkingDays,
    bank_holidays: &BankHolidays,
    today: Date,
) -> Result<CalendarMonth, DomainError> {
    if month0 > 11 {
        return Err(DomainError::InvalidMonth(month0));
    }

    let month: Month =
        Month::try_from(month0 + 1).map_err(|_| DomainError::InvalidMonth(month0))?;
    let day_count: u8 = days_in_month(year, month0);

    let mut days: Vec<CalendarDay> = Vec::with_capacity(usize::from(day_count));
    for day in 1..=day_count {
        let date: Date = Date::from_calendar_date(year, month, day).map_err(|_| {
            DomainError::DateArithmeticOverflow {
                operation: format!("building calendar for {year}-{:02}", month0 + 1),
            }
        })?;

        let entry: Option<&LeaveEntry> = entry_for_date(date, entries);
        let status: Option<LeaveStatus> = entry.map(|e| e.status);
        let is_bank_holiday: bool = bank_holidays.contains(date);
        let is_non_working: bool = non_working_days.contains_date(date);

        days.push(CalendarDay {
            date,
            day,
            entry_id: entry.map(|e| e.id.clone()),
            status,
            is_bank_holiday,
            is_non_working,
            is_today: date == today,
            kind: resolve_day_kind(status, is_bank_holiday, is_non_working),
        });
    }

    Ok(CalendarMonth {
        year,
        month0,
        title: format!("{} {year}", MONTH_NAMES_SHORT[usize::from(month0)]),
        leading_blanks: first_weekday_of_month(year, month0),
        days,
    })
}
