// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Holiday year resolution.
//!
//! A holiday year is the rolling 12-month period that a user's allowance
//! applies to. It starts on day 1 of a configured month and is derived from
//! "today" on every query. "Today" always comes from an explicit `Clock` so
//! callers (and tests) control it.

use crate::calendar::iso_date;
use crate::error::DomainError;
use chrono::{Datelike, NaiveDate, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use time::{Date, Month, OffsetDateTime};

/// The inclusive date span of one holiday year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidayYearWindow {
    /// First day of the holiday year (inclusive).
    #[serde(with = "iso_date")]
    start: Date,
    /// Last day of the holiday year (inclusive).
    #[serde(with = "iso_date")]
    end: Date,
}

impl HolidayYearWindow {
    /// Creates a window from explicit bounds.
    #[must_use]
    pub const fn new(start: Date, end: Date) -> Self {
        Self { start, end }
    }

    #[must_use]
    pub const fn start(&self) -> Date {
        self.start
    }

    #[must_use]
    pub const fn end(&self) -> Date {
        self.end
    }

    /// The holiday year's identifying year (the year it starts in).
    #[must_use]
    pub const fn year(&self) -> i32 {
        self.start.year()
    }

    /// Returns whether the date lies inside the window.
    #[must_use]
    pub fn contains(&self, date: Date) -> bool {
        self.start <= date && date <= self.end
    }

    /// Returns whether the inclusive range `[start, end]` touches the window.
    #[must_use]
    pub fn overlaps(&self, start: Date, end: Date) -> bool {
        !(end < self.start || start > self.end)
    }
}

/// Resolves the holiday year containing `today`.
///
/// The window starts on day 1 of `start_month` in the current year when
/// `today` is on or after that month, otherwise in the previous year. It
/// ends the day before the same date one year later.
///
/// # Arguments
///
/// * `start_month` - The month the holiday year starts in
/// * `today` - The current date
///
/// # Returns
///
/// A window satisfying `start <= today <= end`.
///
/// # Errors
///
/// Returns `DomainError::DateArithmeticOverflow` only when the window would
/// leave the range of representable dates.
pub fn resolve_holiday_year(
    start_month: Month,
    today: Date,
) -> Result<HolidayYearWindow, DomainError> {
    let year: i32 = if u8::from(today.month()) >= u8::from(start_month) {
        today.year()
    } else {
        today.year() - 1
    };

    let start: Date = Date::from_calendar_date(year, start_month, 1).map_err(|_| {
        DomainError::DateArithmeticOverflow {
            operation: format!("calculating holiday year start for {year}"),
        }
    })?;

    let end: Date = start
        .replace_year(year + 1)
        .ok()
        .and_then(Date::previous_day)
        .ok_or_else(|| DomainError::DateArithmeticOverflow {
            operation: format!("calculating holiday year end for {year}"),
        })?;

    Ok(HolidayYearWindow { start, end })
}

/// Resolves the holiday year containing the clock's current date.
///
/// # Errors
///
/// See [`resolve_holiday_year`].
pub fn current_holiday_year(
    start_month: Month,
    clock: &dyn Clock,
) -> Result<HolidayYearWindow, DomainError> {
    resolve_holiday_year(start_month, clock.today())
}

/// Source of the current calendar date.
pub trait Clock {
    /// Today's date.
    fn today(&self) -> Date;
}

/// A clock stuck on one date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    today: Date,
}

impl FixedClock {
    #[must_use]
    pub const fn new(today: Date) -> Self {
        Self { today }
    }
}

impl Clock for FixedClock {
    fn today(&self) -> Date {
        self.today
    }
}

/// The wall clock, read as a local date in an IANA timezone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SystemClock {
    timezone: Tz,
}

impl SystemClock {
    #[must_use]
    pub const fn new(timezone: Tz) -> Self {
        Self { timezone }
    }

    /// Creates a clock from a timezone name such as `Europe/London`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidTimezone` if the name is not a known zone.
    pub fn from_timezone_name(name: &str) -> Result<Self, DomainError> {
        let timezone: Tz = name
            .parse()
            .map_err(|_| DomainError::InvalidTimezone(name.to_string()))?;
        Ok(Self { timezone })
    }

    #[must_use]
    pub const fn timezone(&self) -> Tz {
        self.timezone
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new(Tz::Europe__London)
    }
}

impl Clock for SystemClock {
    fn today(&self) -> Date {
        let local: NaiveDate = Utc::now().with_timezone(&self.timezone).date_naive();
        naive_to_date(local).unwrap_or_else(|| OffsetDateTime::now_utc().date())
    }
}

/// Converts a `chrono::NaiveDate` to a `time::Date`.
fn naive_to_date(naive: NaiveDate) -> Option<Date> {
    let month: Month = u8::try_from(naive.month())
        .ok()
        .and_then(|m| Month::try_from(m).ok())?;
    let day: u8 = u8::try_from(naive.day()).ok()?;
    Date::from_calendar_date(naive.year(), month, day).ok()
}
