// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::{ApiError, translate_core_error, translate_domain_error};
use crate::request_response::{
    CreateEntryRequest, DeleteEntryResponse, EntryInfo, EntryResponse, GetCalendarMonthRequest,
    GetHolidayYearResponse, GetLeaveSummaryResponse, ListEntriesResponse, ListUsersResponse,
    UpdateEntryRequest, UpdateProfileRequest, UpdateProfileResponse, UpsertYearAllowanceRequest,
    UpsertYearAllowanceResponse, UserInfo,
};
use leave_tracker::{Change, Command, EntryChanges, State, TransitionResult, apply, find_user};
use leave_tracker_domain::{
    BankHolidays, CalendarMonth, Clock, HolidayStartMonth, HolidayYearWindow, LeaveEntry,
    LeaveStatus, LeaveType, LeaveSummary, NonWorkingDays, UserProfile, UserRecord, YearAllowance,
    build_calendar_month, calculate_leave_summary, parse_iso_date, resolve_holiday_year,
    select_year_allowance, to_iso_date,
};
use std::str::FromStr;
use time::Date;

/// Result of an API operation that changes state.
///
/// Bundles the API response with the change record and the new state.
#[derive(Debug, Clone)]
pub struct ApiResult<T> {
    /// The API response.
    pub response: T,
    /// The change record generated by this operation.
    pub change: Change,
    /// The new state after the operation.
    pub new_state: State,
}

/// Generates a fresh entry identifier.
#[must_use]
pub fn new_entry_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

fn lookup_user<'a>(state: &'a State, user_id: &str) -> Result<&'a UserRecord, ApiError> {
    find_user(state, user_id).map_err(translate_core_error)
}

fn parse_date_field(field: &str, value: &str) -> Result<Date, ApiError> {
    parse_iso_date(value).map_err(|err| ApiError::InvalidInput {
        field: field.to_string(),
        message: err.to_string(),
    })
}

fn parse_status(value: Option<&str>) -> Result<Option<LeaveStatus>, ApiError> {
    value
        .map(LeaveStatus::from_str)
        .transpose()
        .map_err(translate_domain_error)
}

fn parse_leave_type(value: Option<&str>) -> Result<Option<LeaveType>, ApiError> {
    value
        .map(LeaveType::from_str)
        .transpose()
        .map_err(translate_domain_error)
}

fn run_command(
    state: &State,
    user_id: &str,
    command: Command,
) -> Result<TransitionResult, ApiError> {
    apply(state, user_id, command).map_err(|err| {
        tracing::debug!(user_id, error = %err, "Command rejected");
        translate_core_error(err)
    })
}

/// Lists every user, without credentials.
#[must_use]
pub fn list_users(state: &State) -> ListUsersResponse {
    ListUsersResponse {
        users: state.users.iter().map(UserInfo::from).collect(),
    }
}

/// Resolves a user's current holiday year.
///
/// # Errors
///
/// Returns an error if the user does not exist or the holiday year cannot
/// be represented.
pub fn get_holiday_year(
    state: &State,
    user_id: &str,
    clock: &dyn Clock,
) -> Result<GetHolidayYearResponse, ApiError> {
    let user: &UserRecord = lookup_user(state, user_id)?;
    let window: HolidayYearWindow =
        resolve_holiday_year(user.profile.holiday_start_month.month(), clock.today())
            .map_err(translate_domain_error)?;

    Ok(GetHolidayYearResponse {
        user_id: user.id.clone(),
        year: window.year(),
        start: to_iso_date(window.start()),
        end: to_iso_date(window.end()),
    })
}

/// Calculates a user's leave summary for the current holiday year.
///
/// # Arguments
///
/// * `state` - The current state
/// * `user_id` - The user to summarize
/// * `bank_holidays` - The unfiltered bank holiday set
/// * `clock` - Source of today's date
///
/// # Errors
///
/// Returns an error if the user does not exist or the holiday year cannot
/// be represented.
pub fn get_leave_summary(
    state: &State,
    user_id: &str,
    bank_holidays: &BankHolidays,
    clock: &dyn Clock,
) -> Result<GetLeaveSummaryResponse, ApiError> {
    let user: &UserRecord = lookup_user(state, user_id)?;
    let today: Date = clock.today();

    let window: HolidayYearWindow =
        resolve_holiday_year(user.profile.holiday_start_month.month(), today)
            .map_err(translate_domain_error)?;
    let summary: LeaveSummary =
        calculate_leave_summary(user, bank_holidays, today).map_err(translate_domain_error)?;
    let allowance: YearAllowance = select_year_allowance(&user.year_allowances, window.year())
        .copied()
        .unwrap_or_else(|| YearAllowance::new(window.year(), 0, 0, 0));

    tracing::info!(
        user_id,
        total = summary.total,
        used = summary.used,
        remaining = summary.remaining,
        "Calculated leave summary"
    );

    let explanation: String = format!(
        "Holiday year {} to {}. Allowance: {} days. Used: {} days \
         ({} approved, {} requested, {} planned). Remaining: {} days.{}{}",
        window.start(),
        window.end(),
        summary.total,
        summary.used,
        summary.approved,
        summary.requested,
        summary.planned,
        summary.remaining,
        if summary.is_exhausted() {
            " Allowance fully used."
        } else {
            ""
        },
        if summary.is_overdrawn() {
            " Allowance is overdrawn."
        } else {
            ""
        }
    );

    Ok(GetLeaveSummaryResponse {
        user_id: user.id.clone(),
        holiday_year_start: to_iso_date(window.start()),
        holiday_year_end: to_iso_date(window.end()),
        core: allowance.core,
        bought: allowance.bought,
        carried: allowance.carried,
        total: summary.total,
        approved: summary.approved,
        requested: summary.requested,
        planned: summary.planned,
        used: summary.used,
        remaining: summary.remaining,
        is_exhausted: summary.is_exhausted(),
        is_overdrawn: summary.is_overdrawn(),
        explanation,
    })
}

/// Lists a user's entries by start date, each with its working-day count.
///
/// Entries starting on the same day keep their stored order.
///
/// # Arguments
///
/// * `state` - The current state
/// * `user_id` - The user whose entries to list
/// * `bank_holidays` - The unfiltered bank holiday set
///
/// # Errors
///
/// Returns an error if the user does not exist.
pub fn list_entries(
    state: &State,
    user_id: &str,
    bank_holidays: &BankHolidays,
) -> Result<ListEntriesResponse, ApiError> {
    let user: &UserRecord = lookup_user(state, user_id)?;

    let mut entries: Vec<&LeaveEntry> = user.entries.iter().collect();
    entries.sort_by_key(|e| e.start_date);

    tracing::debug!(user_id, count = entries.len(), "Listing leave entries");

    Ok(ListEntriesResponse {
        user_id: user.id.clone(),
        entries: entries
            .into_iter()
            .map(|e| EntryInfo::new(e, &user.profile.non_working_days, bank_holidays))
            .collect(),
    })
}

fn stored_entry_info(
    state: &State,
    user_id: &str,
    entry_id: &str,
    bank_holidays: &BankHolidays,
) -> Option<EntryInfo> {
    let user: &UserRecord = state.user(user_id)?;
    let entry: &LeaveEntry = user.entry(entry_id)?;
    Some(EntryInfo::new(
        entry,
        &user.profile.non_working_days,
        bank_holidays,
    ))
}

/// Creates a leave entry.
///
/// Status defaults to planned and type to holiday when absent.
///
/// # Arguments
///
/// * `state` - The current state
/// * `user_id` - The user to add the entry to
/// * `request` - The entry fields
/// * `bank_holidays` - The unfiltered bank holiday set, for the day count
/// * `generate_id` - Produces the new entry's identifier
///
/// # Errors
///
/// Returns an error if:
/// - A date, status or type does not parse
/// - The end date is before the start date
/// - The user does not exist
/// - The generated identifier is already in use
pub fn create_entry<F>(
    state: &State,
    user_id: &str,
    request: &CreateEntryRequest,
    bank_holidays: &BankHolidays,
    generate_id: F,
) -> Result<ApiResult<EntryResponse>, ApiError>
where
    F: FnOnce() -> String,
{
    let start_date: Date = parse_date_field("startDate", &request.start_date)?;
    let end_date: Date = parse_date_field("endDate", &request.end_date)?;
    let status: LeaveStatus = parse_status(request.status.as_deref())?.unwrap_or_default();
    let leave_type: LeaveType = parse_leave_type(request.leave_type.as_deref())?.unwrap_or_default();

    let id: String = generate_id();
    let mut entry: LeaveEntry = LeaveEntry::new(&id, start_date, end_date, status, leave_type);
    entry.notes.clone_from(&request.notes);

    let transition: TransitionResult = run_command(state, user_id, Command::AddEntry { entry })?;

    let entry: EntryInfo = stored_entry_info(&transition.new_state, user_id, &id, bank_holidays)
        .ok_or_else(|| ApiError::Internal {
            message: format!("Entry '{id}' missing after creation"),
        })?;

    tracing::info!(user_id, entry_id = %id, "Created leave entry");

    Ok(ApiResult {
        response: EntryResponse {
            entry,
            message: transition.change.description.clone(),
        },
        change: transition.change,
        new_state: transition.new_state,
    })
}

/// Updates fields of an existing leave entry.
///
/// # Errors
///
/// Returns an error if a field does not parse, the user or entry does not
/// exist, or the updated range is inverted.
pub fn update_entry(
    state: &State,
    user_id: &str,
    entry_id: &str,
    request: &UpdateEntryRequest,
    bank_holidays: &BankHolidays,
) -> Result<ApiResult<EntryResponse>, ApiError> {
    let changes: EntryChanges = EntryChanges {
        start_date: request
            .start_date
            .as_deref()
            .map(|v| parse_date_field("startDate", v))
            .transpose()?,
        end_date: request
            .end_date
            .as_deref()
            .map(|v| parse_date_field("endDate", v))
            .transpose()?,
        status: parse_status(request.status.as_deref())?,
        leave_type: parse_leave_type(request.leave_type.as_deref())?,
        notes: request.notes.clone(),
    };

    let transition: TransitionResult = run_command(
        state,
        user_id,
        Command::UpdateEntry {
            entry_id: entry_id.to_string(),
            changes,
        },
    )?;

    let entry: EntryInfo = stored_entry_info(
        &transition.new_state,
        user_id,
        entry_id,
        bank_holidays,
    )
    .ok_or_else(|| ApiError::Internal {
        message: format!("Entry '{entry_id}' missing after update"),
    })?;

    tracing::info!(user_id, entry_id, "Updated leave entry");

    Ok(ApiResult {
        response: EntryResponse {
            entry,
            message: transition.change.description.clone(),
        },
        change: transition.change,
        new_state: transition.new_state,
    })
}

/// Deletes a leave entry.
///
/// # Errors
///
/// Returns an error if the user or entry does not exist.
pub fn delete_entry(
    state: &State,
    user_id: &str,
    entry_id: &str,
) -> Result<ApiResult<DeleteEntryResponse>, ApiError> {
    let transition: TransitionResult = run_command(
        state,
        user_id,
        Command::DeleteEntry {
            entry_id: entry_id.to_string(),
        },
    )?;

    tracing::info!(user_id, entry_id, "Deleted leave entry");

    Ok(ApiResult {
        response: DeleteEntryResponse {
            entry_id: entry_id.to_string(),
            message: transition.change.description.clone(),
        },
        change: transition.change,
        new_state: transition.new_state,
    })
}

/// Sets the allowance for one holiday year.
///
/// # Errors
///
/// Returns an error if the user does not exist or the year is out of range.
pub fn upsert_year_allowance(
    state: &State,
    user_id: &str,
    request: &UpsertYearAllowanceRequest,
) -> Result<ApiResult<UpsertYearAllowanceResponse>, ApiError> {
    let allowance: YearAllowance =
        YearAllowance::new(request.year, request.core, request.bought, request.carried);

    let transition: TransitionResult =
        run_command(state, user_id, Command::UpsertYearAllowance { allowance })?;

    tracing::info!(
        user_id,
        year = allowance.year,
        total = allowance.total(),
        "Set year allowance"
    );

    Ok(ApiResult {
        response: UpsertYearAllowanceResponse {
            year: allowance.year,
            total: allowance.total(),
            message: transition.change.description.clone(),
        },
        change: transition.change,
        new_state: transition.new_state,
    })
}

/// Replaces a user's profile.
///
/// # Errors
///
/// Returns an error if a weekday or month is out of range, a field is
/// invalid, no working day remains, or the user does not exist.
pub fn update_profile(
    state: &State,
    user_id: &str,
    request: &UpdateProfileRequest,
) -> Result<ApiResult<UpdateProfileResponse>, ApiError> {
    let non_working_days: NonWorkingDays =
        NonWorkingDays::new(request.non_working_days.iter().copied())
            .map_err(translate_domain_error)?;
    let holiday_start_month: HolidayStartMonth =
        HolidayStartMonth::new(request.holiday_start_month).map_err(translate_domain_error)?;

    let profile: UserProfile = UserProfile {
        first_name: request.first_name.trim().to_string(),
        last_name: request.last_name.trim().to_string(),
        company: request.company.trim().to_string(),
        email: request.email.trim().to_string(),
        non_working_days,
        holiday_start_month,
    };

    let transition: TransitionResult =
        run_command(state, user_id, Command::UpdateProfile { profile })?;

    let user: &UserRecord = transition
        .new_state
        .user(user_id)
        .ok_or_else(|| ApiError::Internal {
            message: format!("User '{user_id}' missing after profile update"),
        })?;

    tracing::info!(user_id, "Updated profile");

    Ok(ApiResult {
        response: UpdateProfileResponse {
            user: UserInfo::from(user),
            message: transition.change.description.clone(),
        },
        change: transition.change,
        new_state: transition.new_state,
    })
}

/// Builds a month calendar for a user.
///
/// # Arguments
///
/// * `state` - The current state
/// * `user_id` - The user whose entries to show
/// * `request` - The month to show; absent fields use the clock's month
/// * `bank_holidays` - The unfiltered bank holiday set
/// * `clock` - Source of today's date
///
/// # Errors
///
/// Returns an error if the user does not exist or the month is out of range.
pub fn get_calendar_month(
    state: &State,
    user_id: &str,
    request: &GetCalendarMonthRequest,
    bank_holidays: &BankHolidays,
    clock: &dyn Clock,
) -> Result<CalendarMonth, ApiError> {
    let user: &UserRecord = lookup_user(state, user_id)?;
    let today: Date = clock.today();

    let year: i32 = request.year.unwrap_or_else(|| today.year());
    let month: u8 = request.month.unwrap_or_else(|| u8::from(today.month()));
    if !(1..=12).contains(&month) {
        return Err(ApiError::InvalidInput {
            field: String::from("month"),
            message: format!("Invalid month: {month}. Must be between 1 and 12"),
        });
    }

    tracing::debug!(user_id, year, month, "Building calendar month");

    build_calendar_month(
        year,
        month - 1,
        &user.entries,
        &user.profile.non_working_days,
        bank_holidays,
        today,
    )
    .map_err(translate_domain_error)
}
