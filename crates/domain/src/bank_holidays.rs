// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Bank holiday sets and the per-user bank holiday filter.

use crate::calendar::{parse_iso_date, to_iso_date};
use crate::error::DomainError;
use crate::holiday_year::HolidayYearWindow;
use crate::types::NonWorkingDays;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use time::Date;

/// A de-duplicated set of bank holiday dates.
///
/// Bank holiday sources give no ordering or uniqueness guarantee; the set
/// collapses duplicates so a date can never be subtracted twice.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct BankHolidays {
    dates: BTreeSet<Date>,
}

impl BankHolidays {
    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            dates: BTreeSet::new(),
        }
    }

    /// Parses ISO `YYYY-MM-DD` strings into a set.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::DateParseError` for the first malformed string.
    pub fn from_iso_strings<I, S>(values: I) -> Result<Self, DomainError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let dates: BTreeSet<Date> = values
            .into_iter()
            .map(|value| parse_iso_date(value.as_ref()))
            .collect::<Result<_, _>>()?;
        Ok(Self { dates })
    }

    #[must_use]
    pub fn contains(&self, date: Date) -> bool {
        self.dates.contains(&date)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Iterates the dates in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = Date> + '_ {
        self.dates.iter().copied()
    }

    /// The dates as ISO strings in ascending order.
    #[must_use]
    pub fn to_iso_strings(&self) -> Vec<String> {
        self.iter().map(to_iso_date).collect()
    }
}

impl FromIterator<Date> for BankHolidays {
    fn from_iter<T: IntoIterator<Item = Date>>(iter: T) -> Self {
        Self {
            dates: iter.into_iter().collect(),
        }
    }
}

impl TryFrom<Vec<String>> for BankHolidays {
    type Error = DomainError;

    fn try_from(value: Vec<String>) -> Result<Self, Self::Error> {
        Self::from_iso_strings(value)
    }
}

impl From<BankHolidays> for Vec<String> {
    fn from(value: BankHolidays) -> Self {
        value.to_iso_strings()
    }
}

/// Restricts bank holidays to those that affect a user's allowance.
///
/// A date is kept if it lies inside the holiday year window (inclusive) and
/// falls on a weekday the user would otherwise work.
///
/// # Arguments
///
/// * `window` - The user's current holiday year
/// * `non_working_days` - The user's non-working weekdays
/// * `bank_holidays` - The raw bank holiday set
///
/// # Returns
///
/// The subset of `bank_holidays` relevant to the user.
#[must_use]
pub fn filter_bank_holidays_for_user(
    window: &HolidayYearWindow,
    non_working_days: &NonWorkingDays,
    bank_holidays: &BankHolidays,
) -> BankHolidays {
    bank_holidays
        .iter()
        .filter(|date| window.contains(*date))
        .filter(|date| !non_working_days.contains_date(*date))
        .collect()
}
