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
#![allow(clippy::multiple_crate_versions)]

mod error;
mod store;

use clap::{Parser, Subcommand};
use error::CliError;
use leave_tracker::State;
use leave_tracker_api::{
    ApiResult, CreateEntryRequest, DEFAULT_DIVISION, DeleteEntryResponse, EntryResponse,
    GetCalendarMonthRequest, UpdateEntryRequest, UpsertYearAllowanceRequest,
    UpsertYearAllowanceResponse, create_entry, delete_entry, get_calendar_month,
    get_holiday_year, get_leave_summary, list_entries, list_users, new_entry_id, update_entry,
    upsert_year_allowance,
};
use leave_tracker_domain::{
    BankHolidays, Clock, FixedClock, SystemClock, UserRecord, parse_iso_date,
};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::info;

/// Leave Tracker - holiday allowance accounting from the command line
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the JSON record store (`{ "users": [...] }`)
    #[arg(short, long, env = "LEAVE_TRACKER_DATA")]
    data: PathBuf,

    /// Path to a gov.uk bank-holidays.json document or a JSON array of dates
    #[arg(short, long, env = "LEAVE_TRACKER_BANK_HOLIDAYS")]
    bank_holidays: Option<PathBuf>,

    /// Bank holiday division to read from a gov.uk document
    #[arg(long, env = "LEAVE_TRACKER_DIVISION", default_value = DEFAULT_DIVISION)]
    division: String,

    /// IANA timezone used to determine today's date
    #[arg(long, env = "LEAVE_TRACKER_TIMEZONE", default_value = "Europe/London")]
    timezone: String,

    /// Override today's date (YYYY-MM-DD)
    #[arg(long, env = "LEAVE_TRACKER_TODAY")]
    today: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show a user's leave summary for the current holiday year
    Summary {
        #[arg(short, long)]
        user: String,
    },
    /// Show a user's current holiday year
    HolidayYear {
        #[arg(short, long)]
        user: String,
    },
    /// List users
    Users,
    /// List a user's leave entries
    Entries {
        #[arg(short, long)]
        user: String,
    },
    /// Show a month calendar for a user
    Calendar {
        #[arg(short, long)]
        user: String,
        /// Calendar year (defaults to the current year)
        #[arg(long)]
        year: Option<i32>,
        /// Calendar month 1-12 (defaults to the current month)
        #[arg(long)]
        month: Option<u8>,
    },
    /// Record a leave entry
    AddEntry {
        #[arg(short, long)]
        user: String,
        #[arg(long)]
        start: String,
        #[arg(long)]
        end: String,
        /// planned, requested or approved (defaults to planned)
        #[arg(long)]
        status: Option<String>,
        /// holiday, sick or other (defaults to holiday)
        #[arg(long = "type")]
        leave_type: Option<String>,
        #[arg(long)]
        notes: Option<String>,
    },
    /// Change fields of a leave entry
    UpdateEntry {
        #[arg(short, long)]
        user: String,
        #[arg(short, long)]
        entry: String,
        #[arg(long)]
        start: Option<String>,
        #[arg(long)]
        end: Option<String>,
        #[arg(long)]
        status: Option<String>,
        #[arg(long = "type")]
        leave_type: Option<String>,
        #[arg(long)]
        notes: Option<String>,
    },
    /// Delete a leave entry
    DeleteEntry {
        #[arg(short, long)]
        user: String,
        #[arg(short, long)]
        entry: String,
    },
    /// Set a holiday year's allowance
    SetAllowance {
        #[arg(short, long)]
        user: String,
        /// The year the holiday year starts in
        #[arg(long)]
        year: i32,
        #[arg(long, default_value_t = 0)]
        core: u32,
        #[arg(long, default_value_t = 0)]
        bought: u32,
        #[arg(long, default_value_t = 0)]
        carried: u32,
    },
}

fn build_clock(args: &Args) -> Result<Box<dyn Clock>, CliError> {
    if let Some(today) = &args.today {
        return Ok(Box::new(FixedClock::new(parse_iso_date(today)?)));
    }
    Ok(Box::new(SystemClock::from_timezone_name(&args.timezone)?))
}

fn load_bank_holidays(args: &Args) -> Result<BankHolidays, CliError> {
    store::load_bank_holidays(args.bank_holidays.as_deref(), &args.division)
}

fn to_json<T: Serialize>(value: &T) -> Result<String, CliError> {
    serde_json::to_string_pretty(value).map_err(CliError::Output)
}

fn persist<T: Serialize>(
    path: &Path,
    user_id: &str,
    result: &ApiResult<T>,
) -> Result<String, CliError> {
    let user: Option<&UserRecord> = result.new_state.user(user_id);
    if let Some(user) = user {
        store::save_user_record(path, user)?;
    }
    info!(action = %result.change.action, "{}", result.change.description);
    to_json(&result.response)
}

/// Executes one command and returns its JSON output.
fn run(args: &Args) -> Result<String, CliError> {
    let state: State = store::load_state(&args.data)?;
    let clock: Box<dyn Clock> = build_clock(args)?;

    match &args.command {
        Commands::Summary { user } => {
            let bank_holidays: BankHolidays = load_bank_holidays(args)?;
            to_json(&get_leave_summary(&state, user, &bank_holidays, clock.as_ref())?)
        }
        Commands::HolidayYear { user } => to_json(&get_holiday_year(&state, user, clock.as_ref())?),
        Commands::Users => to_json(&list_users(&state)),
        Commands::Entries { user } => {
            let bank_holidays: BankHolidays = load_bank_holidays(args)?;
            to_json(&list_entries(&state, user, &bank_holidays)?)
        }
        Commands::Calendar { user, year, month } => {
            let bank_holidays: BankHolidays = load_bank_holidays(args)?;
            let request: GetCalendarMonthRequest = GetCalendarMonthRequest {
                year: *year,
                month: *month,
            };
            to_json(&get_calendar_month(
                &state,
                user,
                &request,
                &bank_holidays,
                clock.as_ref(),
            )?)
        }
        Commands::AddEntry {
            user,
            start,
            end,
            status,
            leave_type,
            notes,
        } => {
            let request: CreateEntryRequest = CreateEntryRequest {
                start_date: start.clone(),
                end_date: end.clone(),
                status: status.clone(),
                leave_type: leave_type.clone(),
                notes: notes.clone(),
            };
            let bank_holidays: BankHolidays = load_bank_holidays(args)?;
            let result: ApiResult<EntryResponse> =
                create_entry(&state, user, &request, &bank_holidays, new_entry_id)?;
            persist(&args.data, user, &result)
        }
        Commands::UpdateEntry {
            user,
            entry,
            start,
            end,
            status,
            leave_type,
            notes,
        } => {
            let request: UpdateEntryRequest = UpdateEntryRequest {
                start_date: start.clone(),
                end_date: end.clone(),
                status: status.clone(),
                leave_type: leave_type.clone(),
                notes: notes.clone(),
            };
            let bank_holidays: BankHolidays = load_bank_holidays(args)?;
            let result: ApiResult<EntryResponse> =
                update_entry(&state, user, entry, &request, &bank_holidays)?;
            persist(&args.data, user, &result)
        }
        Commands::DeleteEntry { user, entry } => {
            let result: ApiResult<DeleteEntryResponse> = delete_entry(&state, user, entry)?;
            persist(&args.data, user, &result)
        }
        Commands::SetAllowance {
            user,
            year,
            core,
            bought,
            carried,
        } => {
            let request: UpsertYearAllowanceRequest = UpsertYearAllowanceRequest {
                year: *year,
                core: *core,
                bought: *bought,
                carried: *carried,
            };
            let result: ApiResult<UpsertYearAllowanceResponse> =
                upsert_year_allowance(&state, user, &request)?;
            persist(&args.data, user, &result)
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing; stdout carries the JSON output
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let output: String = run(&args)?;
    println!("{output}");

    Ok(())
}
