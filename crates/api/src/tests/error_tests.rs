// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{ApiError, translate_core_error, translate_domain_error};
use leave_tracker::CoreError;
use leave_tracker_domain::DomainError;

#[test]
fn test_api_error_display() {
    let err: ApiError = ApiError::InvalidInput {
        field: String::from("startDate"),
        message: String::from("bad"),
    };
    assert_eq!(format!("{err}"), "Invalid input for field 'startDate': bad");

    let err: ApiError = ApiError::ResourceNotFound {
        resource_type: String::from("User"),
        message: String::from("User 'u9' does not exist"),
    };
    assert_eq!(format!("{err}"), "User not found: User 'u9' does not exist");

    let err: ApiError = ApiError::DomainRuleViolation {
        rule: String::from("unique_entry_id"),
        message: String::from("dup"),
    };
    assert_eq!(format!("{err}"), "Domain rule violation (unique_entry_id): dup");

    let err: ApiError = ApiError::Internal {
        message: String::from("boom"),
    };
    assert_eq!(format!("{err}"), "Internal error: boom");
}

#[test]
fn test_translate_profile_field_error() {
    let err: ApiError = translate_domain_error(DomainError::InvalidProfileField {
        field: "email",
        reason: String::from("'x' is not an email address"),
    });
    assert_eq!(
        err,
        ApiError::InvalidInput {
            field: String::from("email"),
            message: String::from("'x' is not an email address"),
        }
    );
}

#[test]
fn test_translate_core_errors() {
    assert!(matches!(
        translate_core_error(CoreError::UserNotFound(String::from("u9"))),
        ApiError::ResourceNotFound { resource_type, .. } if resource_type == "User"
    ));
    assert!(matches!(
        translate_core_error(CoreError::DomainViolation(DomainError::NoWorkingDays)),
        ApiError::DomainRuleViolation { .. }
    ));
}
