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
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod apply;
mod command;
mod error;
mod state;

#[cfg(test)]
mod tests;

use leave_tracker_domain::UserRecord;

// Re-export public types and functions
pub use apply::apply;
pub use command::{Command, EntryChanges};
pub use error::CoreError;
pub use state::{Change, State, TransitionResult};

/// Finds a user record by identifier.
///
/// This is a read-only lookup that does not produce a change record.
///
/// # Arguments
///
/// * `state` - The state to search
/// * `user_id` - The user identifier
///
/// # Errors
///
/// Returns `CoreError::UserNotFound` if no such user exists.
pub fn find_user<'a>(state: &'a State, user_id: &str) -> Result<&'a UserRecord, CoreError> {
    state
        .user(user_id)
        .ok_or_else(|| CoreError::UserNotFound(user_id.to_string()))
}
