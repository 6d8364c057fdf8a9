// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use leave_tracker::State;
use leave_tracker_domain::{
    BankHolidays, FixedClock, HolidayStartMonth, LeaveEntry, LeaveStatus, LeaveType,
    NonWorkingDays, UserProfile, UserRecord, YearAllowance,
};
use time::macros::date;

use crate::CreateEntryRequest;

pub fn create_test_clock() -> FixedClock {
    FixedClock::new(date!(2026 - 03 - 15))
}

pub fn create_test_profile() -> UserProfile {
    UserProfile {
        first_name: String::from("Ada"),
        last_name: String::from("Lovelace"),
        company: String::from("Analytical Engines Ltd"),
        email: String::from("ada@example.com"),
        non_working_days: NonWorkingDays::WEEKENDS,
        holiday_start_month: HolidayStartMonth::JANUARY,
    }
}

/// Two users: `u1` with a 2026 allowance and one approved week in March,
/// `u2` with an April holiday year and nothing recorded.
pub fn create_test_state() -> State {
    let mut ada: UserRecord = UserRecord::new("u1", create_test_profile());
    ada.year_allowances = vec![YearAllowance::new(2026, 25, 2, 3)];
    ada.entries = vec![
        LeaveEntry::new(
            "e1",
            date!(2026 - 03 - 09),
            date!(2026 - 03 - 13),
            LeaveStatus::Approved,
            LeaveType::Holiday,
        ),
        LeaveEntry::new(
            "e2",
            date!(2026 - 03 - 23),
            date!(2026 - 03 - 23),
            LeaveStatus::Approved,
            LeaveType::Sick,
        ),
    ];

    let mut grace_profile: UserProfile = create_test_profile();
    grace_profile.first_name = String::from("Grace");
    grace_profile.last_name = String::from("Hopper");
    grace_profile.email = String::from("grace@example.com");
    grace_profile.holiday_start_month = HolidayStartMonth::new(4).unwrap();
    let grace: UserRecord = UserRecord::new("u2", grace_profile);

    State::from_users(vec![ada, grace])
}

pub fn create_test_bank_holidays() -> BankHolidays {
    BankHolidays::from_iso_strings(["2026-04-03", "2026-04-06", "2026-05-04", "2026-12-25"])
        .unwrap()
}

pub fn create_entry_request(start: &str, end: &str) -> CreateEntryRequest {
    CreateEntryRequest {
        start_date: start.to_string(),
        end_date: end.to_string(),
        status: None,
        leave_type: None,
        notes: None,
    }
}

pub fn fixed_id(id: &'static str) -> impl FnOnce() -> String {
    move || id.to_string()
}
