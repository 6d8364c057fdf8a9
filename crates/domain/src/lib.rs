// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod bank_holidays;
mod calendar;
mod calendar_month;
mod error;
mod holiday_year;
mod leave_summary;
mod types;
mod validation;
mod working_days;

#[cfg(test)]
mod tests;

pub use bank_holidays::{BankHolidays, filter_bank_holidays_for_user};
pub use calendar::{
    MONTH_NAMES_SHORT, days_in_month, first_weekday_of_month, is_leap_year, is_non_working_day,
    iso_date, parse_iso_date, to_iso_date, weekday_number,
};
pub use calendar_month::{
    CalendarDay, CalendarMonth, DayKind, build_calendar_month, entry_for_date, next_month,
    previous_month,
};
pub use holiday_year::{
    Clock, FixedClock, HolidayYearWindow, SystemClock, current_holiday_year, resolve_holiday_year,
};
pub use leave_summary::{
    LeaveSummary, calculate_leave_summary, select_year_allowance, summarize_leave,
};
pub use working_days::count_working_days;

// Re-export public types
pub use error::DomainError;
pub use types::{
    HolidayStartMonth, LeaveEntry, LeaveStatus, LeaveType, NonWorkingDays, UserProfile,
    UserRecord, YearAllowance,
};
pub use validation::{validate_entry_dates, validate_profile, validate_year_allowance};
