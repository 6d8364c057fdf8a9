// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Request and response types for the API boundary.
//!
//! Dates cross this boundary as `YYYY-MM-DD` strings and enums as their
//! lowercase wire names.

use leave_tracker_domain::{
    BankHolidays, LeaveEntry, NonWorkingDays, UserRecord, count_working_days, to_iso_date,
};

// ========================================================================
// Entries
// ========================================================================

/// API request to create a leave entry.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEntryRequest {
    pub start_date: String,
    pub end_date: String,
    /// Defaults to `planned`.
    #[serde(default)]
    pub status: Option<String>,
    /// Defaults to `holiday`.
    #[serde(default, rename = "type")]
    pub leave_type: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// API request to update a leave entry. Absent fields are left unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEntryRequest {
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default, rename = "type")]
    pub leave_type: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// A leave entry as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryInfo {
    pub id: String,
    pub start_date: String,
    pub end_date: String,
    pub status: String,
    #[serde(rename = "type")]
    pub leave_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Working days the entry covers, net of non-working days and bank holidays.
    pub days: u32,
}

impl EntryInfo {
    /// Builds the API view of an entry, counting its working days.
    ///
    /// # Arguments
    ///
    /// * `entry` - The stored entry
    /// * `non_working_days` - The owner's non-working weekdays
    /// * `bank_holidays` - The unfiltered bank holiday set
    #[must_use]
    pub fn new(
        entry: &LeaveEntry,
        non_working_days: &NonWorkingDays,
        bank_holidays: &BankHolidays,
    ) -> Self {
        Self {
            id: entry.id.clone(),
            start_date: to_iso_date(entry.start_date),
            end_date: to_iso_date(entry.end_date),
            status: entry.status.as_str().to_string(),
            leave_type: entry.leave_type.as_str().to_string(),
            notes: entry.notes.clone(),
            days: count_working_days(
                entry.start_date,
                entry.end_date,
                non_working_days,
                bank_holidays,
            ),
        }
    }
}

/// API response for listing a user's entries, ordered by start date.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListEntriesResponse {
    pub user_id: String,
    pub entries: Vec<EntryInfo>,
}

/// API response for a created or updated entry.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct EntryResponse {
    pub entry: EntryInfo,
    /// A success message.
    pub message: String,
}

/// API response for a deleted entry.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteEntryResponse {
    pub entry_id: String,
    /// A success message.
    pub message: String,
}

// ========================================================================
// Users
// ========================================================================

/// A user as returned by the API. Never carries credentials.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub full_name: String,
    pub company: String,
    pub email: String,
    pub non_working_days: Vec<u8>,
    pub holiday_start_month: u8,
    pub entry_count: usize,
}

impl From<&UserRecord> for UserInfo {
    fn from(user: &UserRecord) -> Self {
        Self {
            id: user.id.clone(),
            first_name: user.profile.first_name.clone(),
            last_name: user.profile.last_name.clone(),
            full_name: user.profile.full_name(),
            company: user.profile.company.clone(),
            email: user.profile.email.clone(),
            non_working_days: user.profile.non_working_days.iter().collect(),
            holiday_start_month: user.profile.holiday_start_month.number(),
            entry_count: user.entries.len(),
        }
    }
}

/// API response for listing users.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ListUsersResponse {
    pub users: Vec<UserInfo>,
}

/// API request to replace a user's profile.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub company: String,
    pub email: String,
    pub non_working_days: Vec<u8>,
    pub holiday_start_month: u8,
}

/// API response for a profile update.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct UpdateProfileResponse {
    pub user: UserInfo,
    /// A success message.
    pub message: String,
}

// ========================================================================
// Allowances
// ========================================================================

/// API request to set a holiday year's allowance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct UpsertYearAllowanceRequest {
    pub year: i32,
    #[serde(default)]
    pub core: u32,
    #[serde(default)]
    pub bought: u32,
    #[serde(default)]
    pub carried: u32,
}

/// API response for an allowance update.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct UpsertYearAllowanceResponse {
    pub year: i32,
    pub total: u32,
    /// A success message.
    pub message: String,
}

// ========================================================================
// Leave summary and calendar
// ========================================================================

/// API response for a user's current holiday year.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetHolidayYearResponse {
    pub user_id: String,
    /// The year the holiday year starts in.
    pub year: i32,
    pub start: String,
    pub end: String,
}

/// API response for a user's leave summary.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetLeaveSummaryResponse {
    pub user_id: String,
    pub holiday_year_start: String,
    pub holiday_year_end: String,
    /// Core days of the selected year's allowance, `0` when none is configured.
    pub core: u32,
    /// Days bought on top of the core allowance.
    pub bought: u32,
    /// Days carried over from the previous holiday year.
    pub carried: u32,
    pub total: u32,
    pub approved: u32,
    pub requested: u32,
    pub planned: u32,
    pub used: u32,
    /// May be negative if overdrawn.
    pub remaining: i64,
    pub is_exhausted: bool,
    pub is_overdrawn: bool,
    /// Human-readable explanation of the calculation.
    pub explanation: String,
}

/// API request for a month calendar. Absent fields use the current month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
pub struct GetCalendarMonthRequest {
    #[serde(default)]
    pub year: Option<i32>,
    /// Calendar month number, 1-12.
    #[serde(default)]
    pub month: Option<u8>,
}
