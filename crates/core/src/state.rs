// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use leave_tracker_domain::UserRecord;
use serde::{Deserialize, Serialize};

/// A snapshot of every user record.
///
/// State is never mutated in place; transitions return a new `State`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct State {
    /// All user records.
    #[serde(default)]
    pub users: Vec<UserRecord>,
}

impl State {
    /// Creates an empty state.
    #[must_use]
    pub const fn new() -> Self {
        Self { users: Vec::new() }
    }

    /// Creates a state holding the given records.
    #[must_use]
    pub const fn from_users(users: Vec<UserRecord>) -> Self {
        Self { users }
    }

    /// Finds a user by identifier.
    #[must_use]
    pub fn user(&self, user_id: &str) -> Option<&UserRecord> {
        self.users.iter().find(|u| u.id == user_id)
    }

    pub(crate) fn user_mut(&mut self, user_id: &str) -> Option<&mut UserRecord> {
        self.users.iter_mut().find(|u| u.id == user_id)
    }
}

/// A record of what a transition changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Change {
    /// The user whose record changed.
    pub user_id: String,
    /// The command name.
    pub action: String,
    /// Human-readable details.
    pub description: String,
}

impl Change {
    /// Creates a new `Change`.
    #[must_use]
    pub fn new(user_id: &str, action: &str, description: String) -> Self {
        Self {
            user_id: user_id.to_string(),
            action: action.to_string(),
            description,
        }
    }
}

/// The result of a successful state transition.
///
/// Transitions are atomic: they either succeed completely or fail without side effects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionResult {
    /// The new state after the transition.
    pub new_state: State,
    /// The change this transition made.
    pub change: Change,
}
