// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Bank holiday document parsing.
//!
//! Accepts either the gov.uk `bank-holidays.json` document, keyed by
//! division, or a plain JSON array of ISO date strings. Individual dates that
//! fail to parse are skipped with a warning.

use leave_tracker_domain::{BankHolidays, parse_iso_date};
use serde::Deserialize;
use std::collections::HashMap;
use thiserror::Error;

/// The division used when none is configured.
pub const DEFAULT_DIVISION: &str = "england-and-wales";

/// Bank holiday document errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FeedError {
    /// The document is not valid JSON or has the wrong structure.
    #[error("Malformed bank holiday document: {0}")]
    Malformed(String),

    /// The document is neither a division map nor a date array.
    #[error("Bank holiday document must be an object keyed by division or an array of dates")]
    UnexpectedShape,
}

#[derive(Debug, Deserialize)]
struct DivisionEvents {
    #[serde(default)]
    events: Vec<FeedEvent>,
}

#[derive(Debug, Deserialize)]
struct FeedEvent {
    date: String,
}

fn collect_dates<'a, I>(raw: I) -> BankHolidays
where
    I: IntoIterator<Item = &'a str>,
{
    raw.into_iter()
        .filter_map(|value| match parse_iso_date(value) {
            Ok(date) => Some(date),
            Err(err) => {
                tracing::warn!(date = value, error = %err, "Skipping malformed bank holiday date");
                None
            }
        })
        .collect::<BankHolidays>()
}

/// Parses a gov.uk style document and extracts one division's dates.
///
/// # Arguments
///
/// * `json` - The document text
/// * `division` - The division key, such as `england-and-wales`
///
/// # Returns
///
/// The division's dates. A missing division yields an empty set.
///
/// # Errors
///
/// Returns `FeedError::Malformed` if the text is not a division map.
pub fn parse_bank_holiday_feed(json: &str, division: &str) -> Result<BankHolidays, FeedError> {
    let feed: HashMap<String, DivisionEvents> =
        serde_json::from_str(json).map_err(|e| FeedError::Malformed(e.to_string()))?;

    let Some(entry) = feed.get(division) else {
        tracing::warn!(division, "Division not present in bank holiday document");
        return Ok(BankHolidays::new());
    };

    let holidays: BankHolidays = collect_dates(entry.events.iter().map(|e| e.date.as_str()));
    tracing::debug!(division, count = holidays.len(), "Parsed bank holiday feed");
    Ok(holidays)
}

/// Parses a plain JSON array of ISO date strings.
///
/// # Errors
///
/// Returns `FeedError::Malformed` if the text is not an array of strings.
pub fn parse_bank_holiday_list(json: &str) -> Result<BankHolidays, FeedError> {
    let raw: Vec<String> =
        serde_json::from_str(json).map_err(|e| FeedError::Malformed(e.to_string()))?;
    Ok(collect_dates(raw.iter().map(String::as_str)))
}

/// Parses either supported document shape.
///
/// # Errors
///
/// Returns `FeedError::Malformed` for invalid JSON and
/// `FeedError::UnexpectedShape` for any other top-level value.
pub fn parse_bank_holidays(json: &str, division: &str) -> Result<BankHolidays, FeedError> {
    let value: serde_json::Value =
        serde_json::from_str(json).map_err(|e| FeedError::Malformed(e.to_string()))?;

    match value {
        serde_json::Value::Array(_) => parse_bank_holiday_list(json),
        serde_json::Value::Object(_) => parse_bank_holiday_feed(json, division),
        _ => Err(FeedError::UnexpectedShape),
    }
}
