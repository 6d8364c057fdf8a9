// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::create_test_state;
use crate::{ApiError, ApiResult, UpdateProfileRequest, UpdateProfileResponse, update_profile};
use leave_tracker::State;
use leave_tracker_domain::NonWorkingDays;
use time::Month;

fn create_profile_request() -> UpdateProfileRequest {
    UpdateProfileRequest {
        first_name: String::from(" Ada "),
        last_name: String::from("King"),
        company: String::from("Analytical Engines Ltd"),
        email: String::from("ada@example.com"),
        non_working_days: vec![0, 5, 6],
        holiday_start_month: 9,
    }
}

#[test]
fn test_update_profile_trims_and_stores() {
    let state: State = create_test_state();

    let result: ApiResult<UpdateProfileResponse> =
        update_profile(&state, "u1", &create_profile_request()).unwrap();

    assert_eq!(result.response.user.full_name, "Ada King");
    assert_eq!(result.response.user.non_working_days, vec![0, 5, 6]);
    let profile = &result.new_state.user("u1").unwrap().profile;
    assert_eq!(profile.holiday_start_month.month(), Month::September);
    assert_eq!(profile.non_working_days, NonWorkingDays::new([0, 5, 6]).unwrap());
}

#[test]
fn test_update_profile_rejects_weekday_seven() {
    let state: State = create_test_state();
    let mut request: UpdateProfileRequest = create_profile_request();
    request.non_working_days = vec![7];

    let result: Result<ApiResult<UpdateProfileResponse>, ApiError> =
        update_profile(&state, "u1", &request);

    assert!(matches!(
        result,
        Err(ApiError::InvalidInput { field, .. }) if field == "nonWorkingDays"
    ));
}

#[test]
fn test_update_profile_rejects_month_zero() {
    let state: State = create_test_state();
    let mut request: UpdateProfileRequest = create_profile_request();
    request.holiday_start_month = 0;

    let result: Result<ApiResult<UpdateProfileResponse>, ApiError> =
        update_profile(&state, "u1", &request);

    assert!(matches!(
        result,
        Err(ApiError::InvalidInput { field, .. }) if field == "holidayStartMonth"
    ));
}

#[test]
fn test_update_profile_requires_working_day() {
    let state: State = create_test_state();
    let mut request: UpdateProfileRequest = create_profile_request();
    request.non_working_days = (0..7).collect();

    let result: Result<ApiResult<UpdateProfileResponse>, ApiError> =
        update_profile(&state, "u1", &request);

    assert_eq!(
        result.map(|r| r.response),
        Err(ApiError::DomainRuleViolation {
            rule: String::from("at_least_one_working_day"),
            message: String::from("At least one working day must be selected"),
        })
    );
}

#[test]
fn test_update_profile_unknown_user() {
    let state: State = create_test_state();

    let result: Result<ApiResult<UpdateProfileResponse>, ApiError> =
        update_profile(&state, "ghost", &create_profile_request());

    assert!(matches!(result, Err(ApiError::ResourceNotFound { .. })));
}
