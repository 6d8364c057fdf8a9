// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::types::{UserProfile, YearAllowance};
use time::Date;

/// Validates that a leave entry's range is not inverted.
///
/// # Arguments
///
/// * `start_date` - First day of leave
/// * `end_date` - Last day of leave
///
/// # Errors
///
/// Returns `DomainError::InvalidDateRange` if `end_date` is before
/// `start_date`. A single-day entry is valid.
pub fn validate_entry_dates(start_date: Date, end_date: Date) -> Result<(), DomainError> {
    if end_date < start_date {
        return Err(DomainError::InvalidDateRange {
            start_date,
            end_date,
        });
    }
    Ok(())
}

/// Validates that a user's profile fields are usable.
///
/// This checks field shapes only. It does NOT check email uniqueness
/// (that requires the full record set).
///
/// # Arguments
///
/// * `profile` - The profile to validate
///
/// # Errors
///
/// Returns an error if:
/// - The first or last name is blank
/// - The email is blank or has no `@`
/// - Every weekday is a non-working day
pub fn validate_profile(profile: &UserProfile) -> Result<(), DomainError> {
    if profile.first_name.trim().is_empty() {
        return Err(DomainError::InvalidProfileField {
            field: "firstName",
            reason: String::from("First name cannot be empty"),
        });
    }

    if profile.last_name.trim().is_empty() {
        return Err(DomainError::InvalidProfileField {
            field: "lastName",
            reason: String::from("Last name cannot be empty"),
        });
    }

    let email: &str = profile.email.trim();
    if email.is_empty() || !email.contains('@') {
        return Err(DomainError::InvalidProfileField {
            field: "email",
            reason: format!("'{}' is not an email address", profile.email),
        });
    }

    if !profile.non_working_days.has_working_day() {
        return Err(DomainError::NoWorkingDays);
    }

    Ok(())
}

/// Validates that an allowance's year is a reasonable calendar year.
///
/// # Errors
///
/// Returns `DomainError::InvalidAllowanceYear` outside 1900-2200.
pub fn validate_year_allowance(allowance: &YearAllowance) -> Result<(), DomainError> {
    if !(1900..=2200).contains(&allowance.year) {
        return Err(DomainError::InvalidAllowanceYear(allowance.year));
    }
    Ok(())
}
