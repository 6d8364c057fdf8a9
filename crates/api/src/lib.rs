// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

mod bank_holiday_feed;
mod error;
mod handlers;
mod request_response;

#[cfg(test)]
mod tests;

pub use bank_holiday_feed::{
    DEFAULT_DIVISION, FeedError, parse_bank_holiday_feed, parse_bank_holiday_list,
    parse_bank_holidays,
};
pub use error::{ApiError, translate_core_error, translate_domain_error};
pub use handlers::{
    ApiResult, create_entry, delete_entry, get_calendar_month, get_holiday_year,
    get_leave_summary, list_entries, list_users, new_entry_id, update_entry, update_profile,
    upsert_year_allowance,
};
pub use request_response::{
    CreateEntryRequest, DeleteEntryResponse, EntryInfo, EntryResponse, GetCalendarMonthRequest,
    GetHolidayYearResponse, GetLeaveSummaryResponse, ListEntriesResponse, ListUsersResponse,
    UpdateEntryRequest, UpdateProfileRequest, UpdateProfileResponse, UpsertYearAllowanceRequest,
    UpsertYearAllowanceResponse, UserInfo,
};
