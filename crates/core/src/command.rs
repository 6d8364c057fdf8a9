// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use leave_tracker_domain::{LeaveEntry, LeaveStatus, LeaveType, UserProfile, YearAllowance};
use time::Date;

/// A partial update to a leave entry.
///
/// Fields left as `None` keep their current value.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EntryChanges {
    pub start_date: Option<Date>,
    pub end_date: Option<Date>,
    pub status: Option<LeaveStatus>,
    pub leave_type: Option<LeaveType>,
    /// Replacement notes.
    pub notes: Option<String>,
}

impl EntryChanges {
    /// Returns whether no field would change.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.start_date.is_none()
            && self.end_date.is_none()
            && self.status.is_none()
            && self.leave_type.is_none()
            && self.notes.is_none()
    }

    /// Applies these changes to a copy of the entry.
    #[must_use]
    pub fn applied_to(&self, entry: &LeaveEntry) -> LeaveEntry {
        LeaveEntry {
            id: entry.id.clone(),
            start_date: self.start_date.unwrap_or(entry.start_date),
            end_date: self.end_date.unwrap_or(entry.end_date),
            status: self.status.unwrap_or(entry.status),
            leave_type: self.leave_type.unwrap_or(entry.leave_type),
            notes: self.notes.clone().or_else(|| entry.notes.clone()),
        }
    }
}

/// A command represents user intent as data only.
///
/// Commands are the only way to request changes to a user record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Record a new leave entry.
    AddEntry {
        /// The entry, with its identifier already assigned.
        entry: LeaveEntry,
    },
    /// Change fields of an existing entry.
    UpdateEntry {
        /// The entry to change.
        entry_id: String,
        /// The fields to replace.
        changes: EntryChanges,
    },
    /// Remove an entry.
    DeleteEntry {
        /// The entry to remove.
        entry_id: String,
    },
    /// Set the allowance for a holiday year, replacing any existing one.
    UpsertYearAllowance {
        /// The new allowance.
        allowance: YearAllowance,
    },
    /// Replace the user's profile.
    UpdateProfile {
        /// The new profile.
        profile: UserProfile,
    },
}

impl Command {
    /// The command's name as recorded in a `Change`.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::AddEntry { .. } => "AddEntry",
            Self::UpdateEntry { .. } => "UpdateEntry",
            Self::DeleteEntry { .. } => "DeleteEntry",
            Self::UpsertYearAllowance { .. } => "UpsertYearAllowance",
            Self::UpdateProfile { .. } => "UpdateProfile",
        }
    }
}
