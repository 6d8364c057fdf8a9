// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::{Command, EntryChanges};
use crate::error::CoreError;
use crate::state::{Change, State, TransitionResult};
use leave_tracker_domain::{
    LeaveEntry, UserProfile, UserRecord, YearAllowance, validate_entry_dates, validate_profile,
    validate_year_allowance,
};

/// Applies a command to one user's record, producing a new state and a change record.
///
/// The input state is never modified. On error nothing changes.
///
/// # Arguments
///
/// * `state` - The current state (immutable)
/// * `user_id` - The user whose record the command targets
/// * `command` - The command to apply
///
/// # Returns
///
/// * `Ok(TransitionResult)` containing the new state and change record
/// * `Err(CoreError)` if the command is invalid
///
/// # Errors
///
/// Returns an error if:
/// - The user does not exist
/// - The entry to update or delete does not exist
/// - An added entry reuses an existing identifier
/// - The resulting entry, allowance or profile violates a domain rule
pub fn apply(state: &State, user_id: &str, command: Command) -> Result<TransitionResult, CoreError> {
    let mut new_state: State = state.clone();
    let action: &'static str = command.name();

    let user: &mut UserRecord = new_state
        .user_mut(user_id)
        .ok_or_else(|| CoreError::UserNotFound(user_id.to_string()))?;

    let description: String = match command {
        Command::AddEntry { entry } => add_entry(user, entry)?,
        Command::UpdateEntry { entry_id, changes } => update_entry(user, &entry_id, &changes)?,
        Command::DeleteEntry { entry_id } => delete_entry(user, &entry_id)?,
        Command::UpsertYearAllowance { allowance } => upsert_year_allowance(user, allowance)?,
        Command::UpdateProfile { profile } => update_profile(user, profile)?,
    };

    Ok(TransitionResult {
        new_state,
        change: Change::new(user_id, action, description),
    })
}

fn add_entry(user: &mut UserRecord, entry: LeaveEntry) -> Result<String, CoreError> {
    validate_entry_dates(entry.start_date, entry.end_date)?;

    if user.entry(&entry.id).is_some() {
        return Err(CoreError::DuplicateEntryId {
            user_id: user.id.clone(),
            entry_id: entry.id,
        });
    }

    let description: String = format!(
        "Added {} {} entry '{}' from {} to {}",
        entry.status, entry.leave_type, entry.id, entry.start_date, entry.end_date
    );
    user.entries.push(entry);
    Ok(description)
}

fn update_entry(
    user: &mut UserRecord,
    entry_id: &str,
    changes: &EntryChanges,
) -> Result<String, CoreError> {
    let user_id: String = user.id.clone();
    let entry: &mut LeaveEntry = user
        .entries
        .iter_mut()
        .find(|e| e.id == entry_id)
        .ok_or_else(|| CoreError::EntryNotFound {
            user_id,
            entry_id: entry_id.to_string(),
        })?;

    let updated: LeaveEntry = changes.applied_to(entry);
    validate_entry_dates(updated.start_date, updated.end_date)?;

    let description: String = format!(
        "Updated entry '{entry_id}' to {} {} from {} to {}",
        updated.status, updated.leave_type, updated.start_date, updated.end_date
    );
    *entry = updated;
    Ok(description)
}

fn delete_entry(user: &mut UserRecord, entry_id: &str) -> Result<String, CoreError> {
    let before: usize = user.entries.len();
    user.entries.retain(|e| e.id != entry_id);

    if user.entries.len() == before {
        return Err(CoreError::EntryNotFound {
            user_id: user.id.clone(),
            entry_id: entry_id.to_string(),
        });
    }

    Ok(format!("Deleted entry '{entry_id}'"))
}

fn upsert_year_allowance(
    user: &mut UserRecord,
    allowance: YearAllowance,
) -> Result<String, CoreError> {
    validate_year_allowance(&allowance)?;

    user.year_allowances.retain(|a| a.year != allowance.year);
    user.year_allowances.push(allowance);
    user.year_allowances.sort_by_key(|a| a.year);

    Ok(format!(
        "Set {} allowance to {} days (core {}, bought {}, carried {})",
        allowance.year,
        allowance.total(),
        allowance.core,
        allowance.bought,
        allowance.carried
    ))
}

fn update_profile(user: &mut UserRecord, profile: UserProfile) -> Result<String, CoreError> {
    validate_profile(&profile)?;

    let description: String = format!("Updated profile for {}", profile.full_name());
    user.profile = profile;
    Ok(description)
}
