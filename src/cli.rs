use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Kalends calendar engine.
#[derive(Parser)]
#[command(
    name = "kalends",
    version,
    about = "Calendar resolution and ISO date arithmetic"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to TOML configuration file [default: kalends.toml].
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Print results as JSON regardless of `[output].format`.
    #[arg(long, global = true)]
    pub json: bool,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Show every calendar accessor for a date.
    Inspect(DateArgs),
    /// Add a duration to a date.
    Add(AddArgs),
    /// Difference between two dates.
    Until(UntilArgs),
    /// Build a date, year-month or month-day from individual fields.
    FromFields(FromFieldsArgs),
    /// Week-numbering year and week of a date.
    Week(DateArgs),
}

/// A single date argument.
#[derive(clap::Args)]
pub struct DateArgs {
    /// ISO date, optionally with a `[u-ca=...]` annotation.
    pub date: String,
}

/// Arguments for the `add` subcommand.
#[derive(clap::Args)]
pub struct AddArgs {
    /// ISO date to start from.
    pub date: String,

    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub years: i64,

    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub months: i64,

    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub weeks: i64,

    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub days: i64,

    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub hours: i64,

    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub minutes: i64,

    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub seconds: i64,

    /// Override `[defaults].overflow` (constrain or reject).
    #[arg(long)]
    pub overflow: Option<String>,
}

/// Arguments for the `until` subcommand.
#[derive(clap::Args)]
pub struct UntilArgs {
    /// Start date.
    pub one: String,

    /// End date.
    pub two: String,

    /// Override `[defaults].largest_unit` (year, month, week or day).
    #[arg(long = "largest-unit")]
    pub largest_unit: Option<String>,
}

/// What `from-fields` constructs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FieldsKind {
    Date,
    YearMonth,
    MonthDay,
}

/// Arguments for the `from-fields` subcommand.
#[derive(clap::Args)]
pub struct FromFieldsArgs {
    #[arg(long, allow_negative_numbers = true)]
    pub year: Option<i64>,

    #[arg(long, allow_negative_numbers = true)]
    pub month: Option<i64>,

    /// Month code such as `M02`.
    #[arg(long = "month-code")]
    pub month_code: Option<String>,

    #[arg(long, allow_negative_numbers = true)]
    pub day: Option<i64>,

    /// Kind of value to build.
    #[arg(long, value_enum, default_value_t = FieldsKind::Date)]
    pub kind: FieldsKind,

    /// Override `[defaults].overflow` (constrain or reject).
    #[arg(long)]
    pub overflow: Option<String>,
}
