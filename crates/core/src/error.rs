// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use leave_tracker_domain::DomainError;

/// Errors that can occur during state transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// No user with the given identifier exists.
    UserNotFound(String),
    /// The user has no entry with the given identifier.
    EntryNotFound {
        /// The user that was searched.
        user_id: String,
        /// The missing entry.
        entry_id: String,
    },
    /// The user already has an entry with the given identifier.
    DuplicateEntryId {
        /// The user that owns the entry.
        user_id: String,
        /// The conflicting entry.
        entry_id: String,
    },
    /// A domain rule was violated.
    DomainViolation(DomainError),
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UserNotFound(user_id) => write!(f, "User '{user_id}' not found"),
            Self::EntryNotFound { user_id, entry_id } => {
                write!(f, "Entry '{entry_id}' not found for user '{user_id}'")
            }
            Self::DuplicateEntryId { user_id, entry_id } => {
                write!(
                    f,
                    "Entry '{entry_id}' already exists for user '{user_id}'"
                )
            }
            Self::DomainViolation(err) => write!(f, "Domain violation: {err}"),
        }
    }
}

impl std::error::Error for CoreError {}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        Self::DomainViolation(err)
    }
}
