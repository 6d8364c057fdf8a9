// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::bank_holidays::BankHolidays;
use crate::types::NonWorkingDays;
use time::Date;

/// Counts working days between two dates, inclusive.
///
/// A day counts unless its weekday is a non-working day or it is a bank
/// holiday. A bank holiday on a non-working weekday has no extra effect.
///
/// # Arguments
///
/// * `start` - First day of the range (inclusive)
/// * `end` - Last day of the range (inclusive)
/// * `non_working_days` - Weekdays that never count
/// * `bank_holidays` - Dates that never count
///
/// # Returns
///
/// The number of working days; `0` when `start > end`.
#[must_use]
pub fn count_working_days(
    start: Date,
    end: Date,
    non_working_days: &NonWorkingDays,
    bank_holidays: &BankHolidays,
) -> u32 {
    let mut count: u32 = 0;
    let mut current: Date = start;

    while current <= end {
        if !non_working_days.contains_date(current) && !bank_holidays.contains(current) {
            count += 1;
        }
        match current.next_day() {
            Some(next) => current = next,
            None => break,
        }
    }

    count
}
