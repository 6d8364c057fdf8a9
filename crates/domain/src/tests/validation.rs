// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    DomainError, HolidayStartMonth, NonWorkingDays, UserProfile, YearAllowance,
    validate_entry_dates, validate_profile, validate_year_allowance,
};
use time::macros::date;

fn create_test_profile() -> UserProfile {
    UserProfile {
        first_name: String::from("Ada"),
        last_name: String::from("Lovelace"),
        company: String::new(),
        email: String::from("ada@example.com"),
        non_working_days: NonWorkingDays::WEEKENDS,
        holiday_start_month: HolidayStartMonth::JANUARY,
    }
}

#[test]
fn test_validate_entry_dates_accepts_single_day() {
    let day = date!(2026 - 03 - 09);
    assert!(validate_entry_dates(day, day).is_ok());
}

#[test]
fn test_validate_entry_dates_rejects_inverted_range() {
    let result: Result<(), DomainError> =
        validate_entry_dates(date!(2026 - 03 - 13), date!(2026 - 03 - 09));
    assert!(matches!(result, Err(DomainError::InvalidDateRange { .. })));
}

#[test]
fn test_validate_profile_accepts_valid_profile() {
    assert!(validate_profile(&create_test_profile()).is_ok());
}

#[test]
fn test_validate_profile_rejects_blank_first_name() {
    let mut profile: UserProfile = create_test_profile();
    profile.first_name = String::from("   ");
    let result: Result<(), DomainError> = validate_profile(&profile);
    assert!(matches!(
        result,
        Err(DomainError::InvalidProfileField {
            field: "firstName",
            ..
        })
    ));
}

#[test]
fn test_validate_profile_rejects_blank_last_name() {
    let mut profile: UserProfile = create_test_profile();
    profile.last_name = String::new();
    let result: Result<(), DomainError> = validate_profile(&profile);
    assert!(matches!(
        result,
        Err(DomainError::InvalidProfileField {
            field: "lastName",
            ..
        })
    ));
}

#[test]
fn test_validate_profile_rejects_email_without_at() {
    let mut profile: UserProfile = create_test_profile();
    profile.email = String::from("ada.example.com");
    let result: Result<(), DomainError> = validate_profile(&profile);
    assert!(matches!(
        result,
        Err(DomainError::InvalidProfileField { field: "email", .. })
    ));
}

#[test]
fn test_validate_profile_rejects_no_working_days() {
    let mut profile: UserProfile = create_test_profile();
    profile.non_working_days = NonWorkingDays::new(0..7).unwrap();
    assert_eq!(validate_profile(&profile), Err(DomainError::NoWorkingDays));
}

#[test]
fn test_validate_profile_accepts_working_every_day() {
    let mut profile: UserProfile = create_test_profile();
    profile.non_working_days = NonWorkingDays::none();
    assert!(validate_profile(&profile).is_ok());
}

#[test]
fn test_validate_year_allowance_bounds() {
    assert!(validate_year_allowance(&YearAllowance::new(1900, 0, 0, 0)).is_ok());
    assert!(validate_year_allowance(&YearAllowance::new(2200, 0, 0, 0)).is_ok());
    assert_eq!(
        validate_year_allowance(&YearAllowance::new(1899, 25, 0, 0)),
        Err(DomainError::InvalidAllowanceYear(1899))
    );
    assert_eq!(
        validate_year_allowance(&YearAllowance::new(2201, 25, 0, 0)),
        Err(DomainError::InvalidAllowanceYear(2201))
    );
}
