// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::State;
use leave_tracker_domain::{
    HolidayStartMonth, LeaveEntry, LeaveStatus, LeaveType, NonWorkingDays, UserProfile,
    UserRecord, YearAllowance,
};
use time::macros::date;

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

pub fn create_test_entry(id: &str) -> LeaveEntry {
    LeaveEntry::new(
        id,
        date!(2026 - 03 - 09),
        date!(2026 - 03 - 13),
        LeaveStatus::Planned,
        LeaveType::Holiday,
    )
}

pub fn create_test_state() -> State {
    let mut ada: UserRecord = UserRecord::new("u1", create_test_profile());
    ada.year_allowances = vec![YearAllowance::new(2026, 25, 0, 0)];
    ada.entries = vec![create_test_entry("e1")];

    let mut grace_profile: UserProfile = create_test_profile();
    grace_profile.first_name = String::from("Grace");
    grace_profile.last_name = String::from("Hopper");
    grace_profile.email = String::from("grace@example.com");
    let grace: UserRecord = UserRecord::new("u2", grace_profile);

    State::from_users(vec![ada, grace])
}
