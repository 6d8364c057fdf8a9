// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during domain construction and validation.
///
/// The accounting functions themselves are total; these errors come from
/// building domain values out of untrusted input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A weekday number outside 0-6.
    InvalidWeekday(u8),
    /// A holiday start month outside 1-12.
    InvalidHolidayStartMonth(u8),
    /// A zero-indexed calendar month outside 0-11.
    InvalidMonth(u8),
    /// An unrecognised leave status string.
    InvalidLeaveStatus(String),
    /// An unrecognised leave type string.
    InvalidLeaveType(String),
    /// Failed to parse date from string.
    DateParseError {
        /// The invalid date string.
        date_string: String,
        /// The parsing error message.
        error: String,
    },
    /// Date arithmetic overflow.
    DateArithmeticOverflow {
        /// Description of the operation that failed.
        operation: String,
    },
    /// Timezone name is not a known IANA zone.
    InvalidTimezone(String),
    /// Leave entry ends before it starts.
    InvalidDateRange {
        /// The entry start date.
        start_date: time::Date,
        /// The entry end date.
        end_date: time::Date,
    },
    /// A profile field is empty or invalid.
    InvalidProfileField {
        /// The offending field.
        field: &'static str,
        /// Human-readable reason.
        reason: String,
    },
    /// The profile leaves the user with no working days.
    NoWorkingDays,
    /// Invalid allowance year value.
    InvalidAllowanceYear(i32),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidWeekday(value) => {
                write!(f, "Invalid weekday: {value}. Must be between 0 and 6")
            }
            Self::InvalidHolidayStartMonth(value) => {
                write!(
                    f,
                    "Invalid holiday start month: {value}. Must be between 1 and 12"
                )
            }
            Self::InvalidMonth(value) => {
                write!(f, "Invalid month: {value}. Must be between 0 and 11")
            }
            Self::InvalidLeaveStatus(value) => write!(f, "Invalid leave status: {value}"),
            Self::InvalidLeaveType(value) => write!(f, "Invalid leave type: {value}"),
            Self::DateParseError { date_string, error } => {
                write!(f, "Failed to parse date '{date_string}': {error}")
            }
            Self::DateArithmeticOverflow { operation } => {
                write!(f, "Date arithmetic overflow while {operation}")
            }
            Self::InvalidTimezone(name) => write!(f, "Invalid timezone: {name}"),
            Self::InvalidDateRange {
                start_date,
                end_date,
            } => {
                write!(
                    f,
                    "End date must be on or after start date ({end_date} is before {start_date})"
                )
            }
            Self::InvalidProfileField { field, reason } => {
                write!(f, "Invalid {field}: {reason}")
            }
            Self::NoWorkingDays => write!(f, "At least one working day must be selected"),
            Self::InvalidAllowanceYear(year) => {
                write!(
                    f,
                    "Invalid allowance year: {year}. Must be between 1900 and 2200"
                )
            }
        }
    }
}

impl std::error::Error for DomainError {}
