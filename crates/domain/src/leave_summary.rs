// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Leave summary aggregation.
//!
//! This module provides read-only aggregation of a user's holiday entries
//! against the allowance for their current holiday year.

use crate::bank_holidays::{BankHolidays, filter_bank_holidays_for_user};
use crate::error::DomainError;
use crate::holiday_year::{HolidayYearWindow, resolve_holiday_year};
use crate::types::{LeaveEntry, LeaveStatus, LeaveType, NonWorkingDays, UserRecord, YearAllowance};
use crate::working_days::count_working_days;
use serde::{Deserialize, Serialize};
use time::Date;

/// Per-status day totals for one holiday year.
///
/// Derived on demand and never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LeaveSummary {
    /// Total allowance (`core + bought + carried`), `0` when none is configured.
    pub total: u32,
    /// Working days of approved holiday.
    pub approved: u32,
    /// Working days of requested holiday.
    pub requested: u32,
    /// Working days of planned holiday.
    pub planned: u32,
    /// `approved + requested + planned`.
    pub used: u32,
    /// `total - used`. May be negative if over allowance.
    pub remaining: i64,
}

impl LeaveSummary {
    /// Whether the allowance is used exactly.
    #[must_use]
    pub const fn is_exhausted(&self) -> bool {
        self.remaining == 0
    }

    /// Whether more days are booked than allowed.
    #[must_use]
    pub const fn is_overdrawn(&self) -> bool {
        self.remaining < 0
    }

    /// Builds a summary from per-status counts. Sums saturate at `u32::MAX`.
    fn from_counts(total: u32, approved: u32, requested: u32, planned: u32) -> Self {
        let used: u32 = approved.saturating_add(requested).saturating_add(planned);
        Self {
            total,
            approved,
            requested,
            planned,
            used,
            remaining: i64::from(total) - i64::from(used),
        }
    }
}

/// Selects the allowance configured for a holiday year.
#[must_use]
pub fn select_year_allowance(allowances: &[YearAllowance], year: i32) -> Option<&YearAllowance> {
    allowances.iter().find(|a| a.year == year)
}

/// Aggregates holiday entries into a leave summary.
///
/// Only `Holiday` entries count. An entry whose range does not touch the
/// window is skipped entirely; an entry that straddles a window boundary is
/// counted in full.
///
/// # Arguments
///
/// * `entries` - The user's leave entries
/// * `allowance` - The allowance for the window's year, if configured
/// * `window` - The current holiday year
/// * `non_working_days` - The user's non-working weekdays
/// * `bank_holidays` - Bank holidays already filtered for the user
///
/// # Returns
///
/// The summary. This function does not fail.
#[must_use]
pub fn summarize_leave(
    entries: &[LeaveEntry],
    allowance: Option<&YearAllowance>,
    window: &HolidayYearWindow,
    non_working_days: &NonWorkingDays,
    bank_holidays: &BankHolidays,
) -> LeaveSummary {
    let total: u32 = allowance.map_or(0, YearAllowance::total);

    let mut approved: u32 = 0;
    let mut requested: u32 = 0;
    let mut planned: u32 = 0;

    for entry in entries {
        if entry.leave_type != LeaveType::Holiday {
            continue;
        }
        if !window.overlaps(entry.start_date, entry.end_date) {
            continue;
        }

        let days: u32 = count_working_days(
            entry.start_date,
            entry.end_date,
            non_working_days,
            bank_holidays,
        );

        match entry.status {
            LeaveStatus::Approved => approved = approved.saturating_add(days),
            LeaveStatus::Requested => requested = requested.saturating_add(days),
            LeaveStatus::Planned => planned = planned.saturating_add(days),
        }
    }

    LeaveSummary::from_counts(total, approved, requested, planned)
}

/// Calculates a user's leave summary for the holiday year containing `today`.
///
/// Resolves the holiday year, selects its allowance, filters the bank
/// holidays for the user and aggregates.
///
/// # Errors
///
/// Returns an error only if the holiday year cannot be represented.
pub fn calculate_leave_summary(
    user: &UserRecord,
    bank_holidays: &BankHolidays,
    today: Date,
) -> Result<LeaveSummary, DomainError> {
    let window: HolidayYearWindow =
        resolve_holiday_year(user.profile.holiday_start_month.month(), today)?;
    let allowance: Option<&YearAllowance> =
        select_year_allowance(&user.year_allowances, window.year());
    let relevant: BankHolidays =
        filter_bank_holidays_for_user(&window, &user.profile.non_working_days, bank_holidays);

    Ok(summarize_leave(
        &user.entries,
        allowance,
        &window,
        &user.profile.non_working_days,
        &relevant,
    ))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::types::{HolidayStartMonth, UserProfile};
    use time::macros::date;

    fn create_test_user(id: &str) -> UserRecord {
        UserRecord::new(
            id,
            UserProfile {
                first_name: String::from("Ada"),
                last_name: String::from("Lovelace"),
                company: String::new(),
                email: String::from("ada@example.com"),
                non_working_days: NonWorkingDays::WEEKENDS,
                holiday_start_month: HolidayStartMonth::default(),
            },
        )
    }

    fn window_2026() -> HolidayYearWindow {
        HolidayYearWindow::new(date!(2026 - 01 - 01), date!(2026 - 12 - 31))
    }

    fn week_entry(id: &str, status: LeaveStatus, leave_type: LeaveType) -> LeaveEntry {
        LeaveEntry::new(
            id,
            date!(2026 - 03 - 09),
            date!(2026 - 03 - 13),
            status,
            leave_type,
        )
    }

    #[test]
    fn test_counts_saturate_instead_of_overflowing() {
        let summary: LeaveSummary = LeaveSummary::from_counts(10, u32::MAX, 5, 1);
        assert_eq!(summary.approved, u32::MAX);
        assert_eq!(summary.used, u32::MAX);
        assert_eq!(summary.remaining, 10 - i64::from(u32::MAX));
        assert!(summary.is_overdrawn());
    }

    #[test]
    fn test_no_entries_leaves_full_allowance() {
        let allowance: YearAllowance = YearAllowance::new(2026, 25, 2, 3);
        let summary: LeaveSummary = summarize_leave(
            &[],
            Some(&allowance),
            &window_2026(),
            &NonWorkingDays::WEEKENDS,
            &BankHolidays::new(),
        );
        assert_eq!(summary.total, 30);
        assert_eq!(summary.approved, 0);
        assert_eq!(summary.requested, 0);
        assert_eq!(summary.planned, 0);
        assert_eq!(summary.used, 0);
        assert_eq!(summary.remaining, 30);
    }

    #[test]
    fn test_approved_week() {
        let entries: Vec<LeaveEntry> =
            vec![week_entry("a", LeaveStatus::Approved, LeaveType::Holiday)];
        let summary: LeaveSummary = summarize_leave(
            &entries,
            None,
            &window_2026(),
            &NonWorkingDays::WEEKENDS,
            &BankHolidays::new(),
        );
        assert_eq!(summary.approved, 5);
        assert_eq!(summary.used, 5);
    }

    #[test]
    fn test_bank_holiday_reduces_approved_days() {
        let entries: Vec<LeaveEntry> =
            vec![week_entry("a", LeaveStatus::Approved, LeaveType::Holiday)];
        let holidays: BankHolidays = [date!(2026 - 03 - 09)].into_iter().collect();
        let summary: LeaveSummary = summarize_leave(
            &entries,
            None,
            &window_2026(),
            &NonWorkingDays::WEEKENDS,
            &holidays,
        );
        assert_eq!(summary.approved, 4);
    }

    #[test]
    fn test_sick_leave_is_ignored() {
        let entries: Vec<LeaveEntry> = vec![
            week_entry("s", LeaveStatus::Approved, LeaveType::Sick),
            week_entry("o", LeaveStatus::Requested, LeaveType::Other),
        ];
        let allowance: YearAllowance = YearAllowance::new(2026, 10, 0, 0);
        let summary: LeaveSummary = summarize_leave(
            &entries,
            Some(&allowance),
            &window_2026(),
            &NonWorkingDays::WEEKENDS,
            &BankHolidays::new(),
        );
        assert_eq!(summary.used, 0);
        assert_eq!(summary.remaining, 10);
    }

    #[test]
    fn test_statuses_fill_separate_buckets() {
        let entries: Vec<LeaveEntry> = vec![
            week_entry("a", LeaveStatus::Approved, LeaveType::Holiday),
            LeaveEntry::new(
                "r",
                date!(2026 - 06 - 01),
                date!(2026 - 06 - 02),
                LeaveStatus::Requested,
                LeaveType::Holiday,
            ),
            LeaveEntry::new(
                "p",
                date!(2026 - 08 - 14),
                date!(2026 - 08 - 14),
                LeaveStatus::Planned,
                LeaveType::Holiday,
            ),
        ];
        let summary: LeaveSummary = summarize_leave(
            &entries,
            Some(&YearAllowance::new(2026, 25, 0, 0)),
            &window_2026(),
            &NonWorkingDays::WEEKENDS,
            &BankHolidays::new(),
        );
        assert_eq!(summary.approved, 5);
        assert_eq!(summary.requested, 2);
        assert_eq!(summary.planned, 1);
        assert_eq!(summary.used, 8);
        assert_eq!(summary.remaining, 17);
    }

    #[test]
    fn test_remaining_can_go_negative() {
        let entries: Vec<LeaveEntry> =
            vec![week_entry("a", LeaveStatus::Approved, LeaveType::Holiday)];
        let summary: LeaveSummary = summarize_leave(
            &entries,
            Some(&YearAllowance::new(2026, 2, 0, 0)),
            &window_2026(),
            &NonWorkingDays::WEEKENDS,
            &BankHolidays::new(),
        );
        assert_eq!(summary.remaining, -3);
        assert!(summary.is_overdrawn());
        assert!(!summary.is_exhausted());
    }

    #[test]
    fn test_entry_outside_window_is_skipped() {
        let entries: Vec<LeaveEntry> = vec![LeaveEntry::new(
            "old",
            date!(2025 - 12 - 01),
            date!(2025 - 12 - 05),
            LeaveStatus::Approved,
            LeaveType::Holiday,
        )];
        let summary: LeaveSummary = summarize_leave(
            &entries,
            None,
            &window_2026(),
            &NonWorkingDays::WEEKENDS,
            &BankHolidays::new(),
        );
        assert_eq!(summary.approved, 0);
    }

    #[test]
    fn test_straddling_entry_is_counted_whole() {
        // Mon 2025-12-29 .. Fri 2026-01-02 overlaps the window by two days
        let entries: Vec<LeaveEntry> = vec![LeaveEntry::new(
            "new-year",
            date!(2025 - 12 - 29),
            date!(2026 - 01 - 02),
            LeaveStatus::Approved,
            LeaveType::Holiday,
        )];
        let summary: LeaveSummary = summarize_leave(
            &entries,
            None,
            &window_2026(),
            &NonWorkingDays::WEEKENDS,
            &BankHolidays::new(),
        );
        assert_eq!(summary.approved, 5);
    }

    #[test]
    fn test_select_year_allowance() {
        let allowances: Vec<YearAllowance> = vec![
            YearAllowance::new(2025, 20, 0, 0),
            YearAllowance::new(2026, 25, 1, 2),
        ];
        assert_eq!(
            select_year_allowance(&allowances, 2026).map(YearAllowance::total),
            Some(28)
        );
        assert!(select_year_allowance(&allowances, 2027).is_none());
    }

    #[test]
    fn test_calculate_leave_summary_selects_holiday_year_allowance() {
        let mut user: UserRecord = create_test_user("u1");
        user.profile.holiday_start_month = HolidayStartMonth::new(4).unwrap();
        user.year_allowances = vec![
            YearAllowance::new(2025, 20, 0, 0),
            YearAllowance::new(2026, 30, 0, 0),
        ];
        user.entries = vec![week_entry("a", LeaveStatus::Approved, LeaveType::Holiday)];

        let summary: LeaveSummary =
            calculate_leave_summary(&user, &BankHolidays::new(), date!(2026 - 03 - 15)).unwrap();

        // Holiday year is 2025-04-01 .. 2026-03-31
        assert_eq!(summary.total, 20);
        assert_eq!(summary.approved, 5);
        assert_eq!(summary.remaining, 15);
    }

    #[test]
    fn test_calculate_leave_summary_without_allowance_is_zero_total() {
        let user: UserRecord = create_test_user("u1");
        let summary: LeaveSummary =
            calculate_leave_summary(&user, &BankHolidays::new(), date!(2026 - 03 - 15)).unwrap();
        assert_eq!(summary.total, 0);
        assert_eq!(summary.remaining, 0);
        assert!(summary.is_exhausted());
    }

    #[test]
    fn test_calculate_leave_summary_ignores_bank_holidays_outside_year() {
        let mut user: UserRecord = create_test_user("u1");
        user.year_allowances = vec![YearAllowance::new(2026, 25, 0, 0)];
        user.entries = vec![LeaveEntry::new(
            "xmas",
            date!(2026 - 12 - 21),
            date!(2027 - 01 - 01),
            LeaveStatus::Requested,
            LeaveType::Holiday,
        )];
        let holidays: BankHolidays = BankHolidays::from_iso_strings([
            "2026-12-25",
            "2026-12-28",
            "2027-01-01",
        ])
        .unwrap();

        let summary: LeaveSummary =
            calculate_leave_summary(&user, &holidays, date!(2026 - 10 - 15)).unwrap();

        // 10 weekdays, minus 25th and 28th; 2027-01-01 lies outside the
        // holiday year so it is not filtered and counts as a working day
        assert_eq!(summary.requested, 8);
    }

    #[test]
    fn test_summary_deterministic() {
        let mut user: UserRecord = create_test_user("u1");
        user.year_allowances = vec![YearAllowance::new(2026, 25, 0, 0)];
        user.entries = vec![week_entry("a", LeaveStatus::Planned, LeaveType::Holiday)];
        let holidays: BankHolidays = BankHolidays::from_iso_strings(["2026-03-10"]).unwrap();

        let first: LeaveSummary =
            calculate_leave_summary(&user, &holidays, date!(2026 - 03 - 15)).unwrap();
        let second: LeaveSummary =
            calculate_leave_summary(&user, &holidays, date!(2026 - 03 - 15)).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.planned, 4);
    }
}
