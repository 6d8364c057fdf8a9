// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use crate::bank_holiday_feed::FeedError;
use leave_tracker::CoreError;
use leave_tracker_domain::DomainError;

/// API-level errors.
///
/// These are distinct from domain/core errors and represent the API contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// A domain rule was violated.
    DomainRuleViolation {
        /// The rule that was violated.
        rule: String,
        /// A human-readable description of the violation.
        message: String,
    },
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A requested resource was not found.
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// An internal error occurred.
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainRuleViolation { rule, message } => {
                write!(f, "Domain rule violation ({rule}): {message}")
            }
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::ResourceNotFound {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} not found: {message}")
            }
            Self::Internal { message } => {
                write!(f, "Internal error: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

impl From<FeedError> for ApiError {
    fn from(err: FeedError) -> Self {
        Self::InvalidInput {
            field: String::from("bank_holidays"),
            message: err.to_string(),
        }
    }
}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match err {
        DomainError::InvalidWeekday(value) => ApiError::InvalidInput {
            field: String::from("nonWorkingDays"),
            message: format!("Invalid weekday: {value}. Must be between 0 and 6"),
        },
        DomainError::InvalidHolidayStartMonth(value) => ApiError::InvalidInput {
            field: String::from("holidayStartMonth"),
            message: format!("Invalid holiday start month: {value}. Must be between 1 and 12"),
        },
        DomainError::InvalidMonth(value) => ApiError::InvalidInput {
            field: String::from("month"),
            message: format!("Invalid month: {value}. Must be between 0 and 11"),
        },
        DomainError::InvalidLeaveStatus(value) => ApiError::InvalidInput {
            field: String::from("status"),
            message: format!("Invalid leave status: {value}"),
        },
        DomainError::InvalidLeaveType(value) => ApiError::InvalidInput {
            field: String::from("type"),
            message: format!("Invalid leave type: {value}"),
        },
        DomainError::DateParseError { date_string, error } => ApiError::InvalidInput {
            field: String::from("date"),
            message: format!("Failed to parse date '{date_string}': {error}"),
        },
        DomainError::DateArithmeticOverflow { operation } => ApiError::InvalidInput {
            field: String::from("date"),
            message: format!("Date arithmetic overflow while {operation}"),
        },
        DomainError::InvalidTimezone(name) => ApiError::InvalidInput {
            field: String::from("timezone"),
            message: format!("Invalid timezone: {name}"),
        },
        DomainError::InvalidDateRange {
            start_date,
            end_date,
        } => ApiError::DomainRuleViolation {
            rule: String::from("entry_date_order"),
            message: format!(
                "End date must be on or after start date ({end_date} is before {start_date})"
            ),
        },
        DomainError::InvalidProfileField { field, reason } => ApiError::InvalidInput {
            field: field.to_string(),
            message: reason,
        },
        DomainError::NoWorkingDays => ApiError::DomainRuleViolation {
            rule: String::from("at_least_one_working_day"),
            message: String::from("At least one working day must be selected"),
        },
        DomainError::InvalidAllowanceYear(year) => ApiError::InvalidInput {
            field: String::from("year"),
            message: format!("Invalid allowance year: {year}. Must be between 1900 and 2200"),
        },
    }
}

/// Translates a core error into an API error.
///
/// This translation is explicit and ensures core errors are not leaked directly.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::UserNotFound(user_id) => ApiError::ResourceNotFound {
            resource_type: String::from("User"),
            message: format!("User '{user_id}' does not exist"),
        },
        CoreError::EntryNotFound { user_id, entry_id } => ApiError::ResourceNotFound {
            resource_type: String::from("Entry"),
            message: format!("Entry '{entry_id}' does not exist for user '{user_id}'"),
        },
        CoreError::DuplicateEntryId { user_id, entry_id } => ApiError::DomainRuleViolation {
            rule: String::from("unique_entry_id"),
            message: format!("Entry '{entry_id}' already exists for user '{user_id}'"),
        },
        CoreError::DomainViolation(domain_err) => translate_domain_error(domain_err),
    }
}
