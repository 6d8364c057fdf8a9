// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Command-line error type.

use leave_tracker_api::{ApiError, FeedError};
use leave_tracker_domain::DomainError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by the command-line driver.
#[derive(Debug, Error)]
pub enum CliError {
    /// A data file could not be read or written.
    #[error("Failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A data file is not valid JSON for its expected shape.
    #[error("Failed to parse {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The data file has no `users` array.
    #[error("{path} has no \"users\" array")]
    MissingUsers { path: PathBuf },

    /// A bank holiday document could not be parsed.
    #[error(transparent)]
    Feed(#[from] FeedError),

    /// A command-line value is not valid.
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// The operation was rejected.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// Output could not be encoded.
    #[error("Failed to encode output: {0}")]
    Output(#[source] serde_json::Error),
}
