// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! JSON record store access.
//!
//! The data file holds `{ "users": [...] }`. Records may carry fields this
//! tool does not model (credentials, the legacy flat `allowance`); writes
//! replace only the modelled keys of the changed user and keep the rest.

use crate::error::CliError;
use leave_tracker::State;
use leave_tracker_api::parse_bank_holidays;
use leave_tracker_domain::{BankHolidays, UserRecord};
use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

const TMP_SUFFIX: &str = "tmp";

fn read_file(path: &Path) -> Result<String, CliError> {
    fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Loads every user record from the data file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not a valid record set.
pub fn load_state(path: &Path) -> Result<State, CliError> {
    let text: String = read_file(path)?;
    let state: State = serde_json::from_str(&text).map_err(|source| CliError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), users = state.users.len(), "Loaded records");
    Ok(state)
}

/// Loads bank holidays from a gov.uk document or a plain date array.
///
/// A missing path or unreadable file yields an empty set with a warning.
///
/// # Errors
///
/// Returns an error if the file exists but is not a supported document.
pub fn load_bank_holidays(path: Option<&Path>, division: &str) -> Result<BankHolidays, CliError> {
    let Some(path) = path else {
        debug!("No bank holiday file configured");
        return Ok(BankHolidays::new());
    };

    let text: String = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) => {
            warn!(
                path = %path.display(),
                error = %err,
                "Failed to read bank holidays; continuing without them"
            );
            return Ok(BankHolidays::new());
        }
    };

    let holidays: BankHolidays = parse_bank_holidays(&text, division)?;
    info!(path = %path.display(), division, count = holidays.len(), "Loaded bank holidays");
    Ok(holidays)
}

/// Writes one user's modelled fields back into the data file.
///
/// The file is rewritten through a temporary sibling and renamed into place.
///
/// # Errors
///
/// Returns an error if the file cannot be read, parsed or written.
pub fn save_user_record(path: &Path, user: &UserRecord) -> Result<(), CliError> {
    let text: String = read_file(path)?;
    let mut document: Value = serde_json::from_str(&text).map_err(|source| CliError::Json {
        path: path.to_path_buf(),
        source,
    })?;

    let users: &mut Vec<Value> = document
        .get_mut("users")
        .and_then(Value::as_array_mut)
        .ok_or_else(|| CliError::MissingUsers {
            path: path.to_path_buf(),
        })?;

    let updated: Value = serde_json::to_value(user).map_err(CliError::Output)?;
    merge_user(users, &user.id, updated);

    let output: String = serde_json::to_string_pretty(&document).map_err(CliError::Output)?;
    let tmp = path.with_extension(TMP_SUFFIX);
    fs::write(&tmp, output).map_err(|source| CliError::Io {
        path: tmp.clone(),
        source,
    })?;
    fs::rename(&tmp, path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    info!(path = %path.display(), user_id = %user.id, "Saved record");
    Ok(())
}

fn merge_user(users: &mut Vec<Value>, user_id: &str, updated: Value) {
    let existing: Option<&mut Value> = users
        .iter_mut()
        .find(|u| u.get("id").and_then(Value::as_str) == Some(user_id));

    match (existing, updated) {
        (Some(Value::Object(target)), Value::Object(source)) => {
            for (key, value) in source {
                target.insert(key, value);
            }
        }
        (_, updated) => users.push(updated),
    }
}
