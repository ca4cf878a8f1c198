//! Command-line argument definitions using clap's derive API.
//!
//! Each argument struct wraps a core parameter type and converts via `From`,
//! keeping clap-specific concerns (flags, help text, value parsing) out of
//! the core crate.

use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use jiff::civil::Date;
use wayfarer_core::{
    params::{CreateTrip, CreateUser, Id, ListTrips},
    TransportType, TripStatus,
};

/// Main command-line interface for the Wayfarer trip scheduler
///
/// Wayfarer tracks trips through their lifecycle (planned, ongoing, finished,
/// cancelled) and schedules the deferred work each trip implies: reminder
/// notifications before departure and automatic status transitions on the
/// start and end dates. Scheduled work survives restarts in a durable task
/// registry; run `wayfarer run` to drain it.
#[derive(Parser)]
#[command(version, about, name = "wayfarer")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/wayfarer/wayfarer.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands for the Wayfarer CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Manage users
    #[command(alias = "u")]
    User {
        #[command(subcommand)]
        command: UserCommands,
    },
    /// Manage trips
    #[command(alias = "t")]
    Trip {
        #[command(subcommand)]
        command: TripCommands,
    },
    /// List pending scheduled tasks
    Tasks,
    /// List delivered notifications
    #[command(alias = "n")]
    Notifications,
    /// Run the dispatcher, executing tasks as they come due
    Run(RunArgs),
    /// Re-install scheduled tasks for every non-terminal trip
    Reconcile,
}

#[derive(Subcommand)]
pub enum UserCommands {
    /// Register a new user
    #[command(alias = "a")]
    Add(AddUserArgs),
    /// List all users
    #[command(aliases = ["l", "ls"])]
    List,
    /// Delete a user and all their trips
    #[command(aliases = ["rm", "remove"])]
    Delete(IdArg),
}

#[derive(Subcommand)]
pub enum TripCommands {
    /// Create a new trip and schedule its lifecycle tasks
    #[command(alias = "a")]
    Add(AddTripArgs),
    /// List a user's trips
    #[command(aliases = ["l", "ls"])]
    List(ListTripsArgs),
    /// Show details of a specific trip
    #[command(alias = "s")]
    Show(IdArg),
    /// Cancel a trip and tear down its scheduled tasks
    #[command(alias = "c")]
    Cancel(IdArg),
    /// Delete a trip permanently
    #[command(aliases = ["rm", "remove"])]
    Delete(IdArg),
}

/// Register a new user
#[derive(ClapArgs)]
pub struct AddUserArgs {
    /// Unique username
    pub username: String,
}

impl From<AddUserArgs> for CreateUser {
    fn from(val: AddUserArgs) -> Self {
        CreateUser {
            username: val.username,
        }
    }
}

/// Generic single-ID argument
#[derive(ClapArgs)]
pub struct IdArg {
    /// Unique identifier of the resource
    pub id: i64,
}

impl From<IdArg> for Id {
    fn from(val: IdArg) -> Self {
        Id { id: val.id }
    }
}

/// Create a new trip
///
/// The trip starts in the PLANNED state. Reminders fire at the start of day
/// three days and one day before the start date; the trip becomes ONGOING on
/// its start date and FINISHED on its end date. Instants already in the past
/// at creation time are skipped.
#[derive(ClapArgs)]
pub struct AddTripArgs {
    /// ID of the user who owns this trip
    pub user_id: i64,
    /// Name of the trip
    pub name: String,
    /// Destination, e.g. "Kyoto, Japan"
    #[arg(short, long, default_value = "")]
    pub location: String,
    /// Optional description providing more context about the trip
    #[arg(short, long)]
    pub description: Option<String>,
    /// Mode of transport
    #[arg(short, long, value_enum, default_value_t = TransportArg::Other)]
    pub transport: TransportArg,
    /// Budgeted amount
    #[arg(short, long, default_value_t = 0.0)]
    pub budget: f64,
    /// Currency code for the budget, e.g. EUR
    #[arg(short, long, default_value = "")]
    pub currency: String,
    /// First day of the trip (YYYY-MM-DD)
    #[arg(long)]
    pub start_date: Date,
    /// Last day of the trip (YYYY-MM-DD)
    #[arg(long)]
    pub end_date: Date,
}

impl From<AddTripArgs> for CreateTrip {
    fn from(val: AddTripArgs) -> Self {
        CreateTrip {
            user_id: val.user_id,
            name: val.name,
            description: val.description,
            location: val.location,
            transport: val.transport.into(),
            budget: val.budget,
            currency: val.currency,
            start_date: val.start_date,
            end_date: val.end_date,
        }
    }
}

/// List a user's trips
#[derive(ClapArgs)]
pub struct ListTripsArgs {
    /// ID of the user whose trips to list
    pub user_id: i64,
    /// Restrict the listing to a single status
    #[arg(short, long, value_enum)]
    pub status: Option<StatusArg>,
}

impl From<ListTripsArgs> for ListTrips {
    fn from(val: ListTripsArgs) -> Self {
        ListTrips {
            user_id: val.user_id,
            status: val.status.map(Into::into),
        }
    }
}

/// Run the dispatcher
#[derive(ClapArgs)]
pub struct RunArgs {
    /// Execute one dispatch pass and exit instead of polling forever
    #[arg(long)]
    pub once: bool,
    /// Seconds between dispatch passes
    #[arg(long, default_value_t = 30)]
    pub interval_secs: u64,
}

/// Command-line argument representation of transport modes
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum TransportArg {
    Plane,
    Train,
    Bus,
    Car,
    Other,
}

impl From<TransportArg> for TransportType {
    fn from(val: TransportArg) -> Self {
        match val {
            TransportArg::Plane => TransportType::Plane,
            TransportArg::Train => TransportType::Train,
            TransportArg::Bus => TransportType::Bus,
            TransportArg::Car => TransportType::Car,
            TransportArg::Other => TransportType::Other,
        }
    }
}

/// Command-line argument representation of trip status values
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum StatusArg {
    Planned,
    Ongoing,
    Finished,
    Cancelled,
}

impl From<StatusArg> for TripStatus {
    fn from(val: StatusArg) -> Self {
        match val {
            StatusArg::Planned => TripStatus::Planned,
            StatusArg::Ongoing => TripStatus::Ongoing,
            StatusArg::Finished => TripStatus::Finished,
            StatusArg::Cancelled => TripStatus::Cancelled,
        }
    }
}
