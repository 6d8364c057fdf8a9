// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::calendar::{iso_date, weekday_number};
use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::{Date, Month};

const ALL_DAYS_MASK: u8 = 0b0111_1111;

/// The set of weekdays a user does not work.
///
/// Weekdays are numbered 0 (Sunday) through 6 (Saturday). The set may be
/// empty (works every day) or hold all seven (never works).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "Vec<u8>", into = "Vec<u8>")]
pub struct NonWorkingDays {
    /// Bit `n` set means weekday `n` is a non-working day.
    mask: u8,
}

impl NonWorkingDays {
    /// Saturday and Sunday.
    pub const WEEKENDS: Self = Self { mask: 0b0100_0001 };

    /// An empty set: the user works every day.
    #[must_use]
    pub const fn none() -> Self {
        Self { mask: 0 }
    }

    /// Builds a set from weekday numbers. Duplicates collapse.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidWeekday` if any value is greater than 6.
    pub fn new<I>(weekdays: I) -> Result<Self, DomainError>
    where
        I: IntoIterator<Item = u8>,
    {
        let mut mask: u8 = 0;
        for weekday in weekdays {
            if weekday > 6 {
                return Err(DomainError::InvalidWeekday(weekday));
            }
            mask |= 1 << weekday;
        }
        Ok(Self { mask })
    }

    /// Returns whether the weekday number is in the set.
    #[must_use]
    pub const fn contains(&self, weekday: u8) -> bool {
        weekday < 7 && self.mask & (1 << weekday) != 0
    }

    /// Returns whether the date falls on a weekday in the set.
    #[must_use]
    pub const fn contains_date(&self, date: Date) -> bool {
        self.contains(weekday_number(date))
    }

    /// The weekdays not in this set.
    #[must_use]
    pub const fn complement(&self) -> Self {
        Self {
            mask: !self.mask & ALL_DAYS_MASK,
        }
    }

    /// Whether at least one weekday is a working day.
    #[must_use]
    pub const fn has_working_day(&self) -> bool {
        self.mask != ALL_DAYS_MASK
    }

    /// Number of non-working weekdays.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.mask.count_ones() as usize
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.mask == 0
    }

    /// Iterates the weekday numbers in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        (0..7).filter(move |weekday| self.contains(*weekday))
    }
}

impl TryFrom<Vec<u8>> for NonWorkingDays {
    type Error = DomainError;

    fn try_from(value: Vec<u8>) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<NonWorkingDays> for Vec<u8> {
    fn from(value: NonWorkingDays) -> Self {
        value.iter().collect()
    }
}

/// Lifecycle status of a leave entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LeaveStatus {
    /// Draft, not yet requested.
    #[default]
    Planned,
    /// Requested and pending approval.
    Requested,
    /// Approved and confirmed.
    Approved,
}

impl LeaveStatus {
    /// Explicit display order.
    pub const ORDER: [Self; 3] = [Self::Planned, Self::Requested, Self::Approved];

    /// Converts this status to its wire representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Planned => "planned",
            Self::Requested => "requested",
            Self::Approved => "approved",
        }
    }

    /// Human-readable label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Planned => "Planned (Draft)",
            Self::Requested => "Requested (Pending)",
            Self::Approved => "Approved (Confirmed)",
        }
    }
}

impl FromStr for LeaveStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "planned" => Ok(Self::Planned),
            "requested" => Ok(Self::Requested),
            "approved" => Ok(Self::Approved),
            _ => Err(DomainError::InvalidLeaveStatus(s.to_string())),
        }
    }
}

impl std::fmt::Display for LeaveStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Kind of leave.
///
/// Only `Holiday` consumes allowance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LeaveType {
    #[default]
    Holiday,
    Sick,
    Other,
}

impl LeaveType {
    /// Explicit display order.
    pub const ORDER: [Self; 3] = [Self::Holiday, Self::Sick, Self::Other];

    /// Converts this type to its wire representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Holiday => "holiday",
            Self::Sick => "sick",
            Self::Other => "other",
        }
    }

    /// Human-readable label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Holiday => "Holiday",
            Self::Sick => "Sick",
            Self::Other => "Other",
        }
    }
}

impl FromStr for LeaveType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "holiday" => Ok(Self::Holiday),
            "sick" => Ok(Self::Sick),
            "other" => Ok(Self::Other),
            _ => Err(DomainError::InvalidLeaveType(s.to_string())),
        }
    }
}

impl std::fmt::Display for LeaveType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A user-recorded leave date range.
///
/// `start_date <= end_date` is expected but not enforced here; the
/// accounting functions return degenerate values for inverted ranges.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveEntry {
    /// Entry identifier, unique per user.
    pub id: String,
    /// First day of leave (inclusive).
    #[serde(with = "iso_date")]
    pub start_date: Date,
    /// Last day of leave (inclusive).
    #[serde(with = "iso_date")]
    pub end_date: Date,
    pub status: LeaveStatus,
    #[serde(rename = "type")]
    pub leave_type: LeaveType,
    /// Free-text notes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl LeaveEntry {
    /// Creates a new `LeaveEntry` without notes.
    ///
    /// # Arguments
    ///
    /// * `id` - The entry identifier
    /// * `start_date` - First day of leave (inclusive)
    /// * `end_date` - Last day of leave (inclusive)
    /// * `status` - The entry status
    /// * `leave_type` - The kind of leave
    #[must_use]
    pub fn new(
        id: &str,
        start_date: Date,
        end_date: Date,
        status: LeaveStatus,
        leave_type: LeaveType,
    ) -> Self {
        Self {
            id: id.to_string(),
            start_date,
            end_date,
            status,
            leave_type,
            notes: None,
        }
    }

    /// Returns a copy of this entry carrying the given notes.
    #[must_use]
    pub fn with_notes(mut self, notes: &str) -> Self {
        self.notes = Some(notes.to_string());
        self
    }

    /// Returns whether the entry covers the given date.
    #[must_use]
    pub fn covers(&self, date: Date) -> bool {
        self.start_date <= date && date <= self.end_date
    }
}

/// Leave allowance for one holiday year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearAllowance {
    /// The holiday year's start year.
    pub year: i32,
    /// Contractual days.
    pub core: u32,
    /// Days bought.
    pub bought: u32,
    /// Days carried over from the previous year.
    pub carried: u32,
}

impl YearAllowance {
    /// Creates a new `YearAllowance`.
    #[must_use]
    pub const fn new(year: i32, core: u32, bought: u32, carried: u32) -> Self {
        Self {
            year,
            core,
            bought,
            carried,
        }
    }

    /// Total days available: `core + bought + carried`.
    #[must_use]
    pub const fn total(&self) -> u32 {
        self.core
            .saturating_add(self.bought)
            .saturating_add(self.carried)
    }
}

/// The month a user's holiday year starts in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct HolidayStartMonth(Month);

impl HolidayStartMonth {
    /// A holiday year aligned with the calendar year.
    pub const JANUARY: Self = Self(Month::January);

    /// Creates a start month from its calendar number (1-12).
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidHolidayStartMonth` outside 1-12.
    pub fn new(month: u8) -> Result<Self, DomainError> {
        Month::try_from(month)
            .map(Self)
            .map_err(|_| DomainError::InvalidHolidayStartMonth(month))
    }

    #[must_use]
    pub const fn month(&self) -> Month {
        self.0
    }

    /// The calendar number (1-12).
    #[must_use]
    pub const fn number(&self) -> u8 {
        self.0 as u8
    }
}

impl Default for HolidayStartMonth {
    fn default() -> Self {
        Self::JANUARY
    }
}

impl From<Month> for HolidayStartMonth {
    fn from(value: Month) -> Self {
        Self(value)
    }
}

impl TryFrom<u8> for HolidayStartMonth {
    type Error = DomainError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<HolidayStartMonth> for u8 {
    fn from(value: HolidayStartMonth) -> Self {
        value.number()
    }
}

/// A user's profile and working pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub company: String,
    pub email: String,
    /// Weekdays the user does not work.
    #[serde(default)]
    pub non_working_days: NonWorkingDays,
    /// Month the user's holiday year starts in.
    #[serde(default)]
    pub holiday_start_month: HolidayStartMonth,
}

impl UserProfile {
    /// Display name, `first last`.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// A user record as supplied by the record store, without credentials.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    /// The user's identifier.
    pub id: String,
    pub profile: UserProfile,
    /// Allowances keyed by holiday year start year.
    #[serde(default)]
    pub year_allowances: Vec<YearAllowance>,
    /// Recorded leave.
    #[serde(default)]
    pub entries: Vec<LeaveEntry>,
}

impl UserRecord {
    /// Creates a new `UserRecord` with no allowances or entries.
    #[must_use]
    pub fn new(id: &str, profile: UserProfile) -> Self {
        Self {
            id: id.to_string(),
            profile,
            year_allowances: Vec::new(),
            entries: Vec::new(),
        }
    }

    /// Finds an entry by identifier.
    #[must_use]
    pub fn entry(&self, entry_id: &str) -> Option<&LeaveEntry> {
        self.entries.iter().find(|e| e.id == entry_id)
    }
}
