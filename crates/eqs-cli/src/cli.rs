//! CLI argument definitions for `eqs`.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use eqs_model::{Column, EquipmentRecord, Status};

#[derive(Parser)]
#[command(
    name = "eqs",
    version,
    about = "Equipment status tracking - check uploads and update the shared sheet",
    long_about = "Track the operational status (OPE, ST-BY, MNT) of plant equipment.\n\n\
                  Validates status updates and CSV uploads before anything is sent\n\
                  to the shared spreadsheet store."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Settings file (default: platform config folder).
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Store endpoint URL (overrides the settings file).
    #[arg(long = "endpoint", env = "EQS_ENDPOINT", value_name = "URL", global = true)]
    pub endpoint: Option<String>,

    #[command(flatten)]
    pub sign_in: SignInArgs,
}

#[derive(Args)]
pub struct SignInArgs {
    /// Account login.
    #[arg(long = "login", env = "EQS_LOGIN", global = true)]
    pub login: Option<String>,

    /// Account password.
    #[arg(long = "password", env = "EQS_PASSWORD", hide_env_values = true, global = true)]
    pub password: Option<String>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Parse and validate a CSV file without sending it.
    Check(CheckArgs),

    /// Validate a CSV file and replace the whole store dataset with it.
    Replace(CheckArgs),

    /// Change the status of one unit.
    Update(UpdateArgs),

    /// Show the store dataset with status totals.
    List(ListArgs),

    /// Show status codes and their allowed reasons.
    Reasons,

    /// Save the store dataset as CSV.
    Export(ExportArgs),

    /// Show or create the settings file.
    Config(ConfigArgs),
}

#[derive(Args)]
pub struct CheckArgs {
    /// CSV file with the header TAG,STATUS,MOTIVO,PTS,OS,RETORNO,CADEADO,OBSERVACOES,MODIFICADO_POR,DATA.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Honour double-quoted fields (commas inside quotes do not split).
    #[arg(long = "quoted")]
    pub quoted: bool,
}

#[derive(Args)]
pub struct UpdateArgs {
    /// Unit to update.
    #[arg(long = "tag")]
    pub tag: String,

    /// New status code.
    #[arg(long = "status", value_parser = parse_status)]
    pub status: Status,

    /// Reason (required for ST-BY and MNT).
    #[arg(long = "reason")]
    pub reason: Option<String>,

    /// Planned task reference (MNT).
    #[arg(long = "pts")]
    pub planned_task: Option<String>,

    /// Work order reference (MNT).
    #[arg(long = "os")]
    pub work_order: Option<String>,

    /// Scheduled return, YYYY-MM-DDTHH:MM (MNT).
    #[arg(long = "return-time", value_name = "YYYY-MM-DDTHH:MM")]
    pub return_time: Option<String>,

    /// Lockout reference (MNT).
    #[arg(long = "lockout")]
    pub lockout: Option<String>,

    /// Free-text note, at most 100 characters.
    #[arg(long = "note")]
    pub note: Option<String>,

    /// Editor name (default: the stored editor).
    #[arg(long = "modified-by")]
    pub modified_by: Option<String>,
}

impl UpdateArgs {
    /// Builds the submission, starting from the stored row when there is one.
    ///
    /// Options left out keep their stored values, except a stored reason
    /// that the new status does not allow, which is cleared.
    pub fn to_record(&self, prior: Option<&EquipmentRecord>) -> EquipmentRecord {
        let mut record = prior.cloned().unwrap_or_default();
        record.tag = self.tag.trim().to_string();
        record.status = self.status.code().to_string();
        if !self.status.allows_reason(&record.reason) {
            record.reason.clear();
        }

        let overrides = [
            (Column::Reason, &self.reason),
            (Column::PlannedTask, &self.planned_task),
            (Column::WorkOrder, &self.work_order),
            (Column::ReturnTime, &self.return_time),
            (Column::Lockout, &self.lockout),
            (Column::Note, &self.note),
            (Column::ModifiedBy, &self.modified_by),
        ];
        for (column, value) in overrides {
            if let Some(value) = value {
                record.set(column, value.trim());
            }
        }
        record
    }
}

#[derive(Args)]
pub struct ListArgs {
    /// Case-insensitive search over TAG and name.
    #[arg(long = "search", value_name = "TEXT")]
    pub search: Option<String>,

    /// Only show units with this status code.
    #[arg(long = "status", value_parser = parse_status)]
    pub status: Option<Status>,

    /// Only show the first N rows.
    #[arg(long = "recent", value_name = "N", num_args = 0..=1, default_missing_value = "10")]
    pub recent: Option<usize>,
}

#[derive(Args)]
pub struct ExportArgs {
    /// Destination CSV file.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Quote fields that contain commas or quotes.
    #[arg(long = "quoted")]
    pub quoted: bool,
}

#[derive(Args)]
pub struct ConfigArgs {
    /// Write a settings file with default values if none exists.
    #[arg(long = "init")]
    pub init: bool,
}

fn parse_status(value: &str) -> Result<Status, String> {
    value.parse::<Status>().map_err(|e| e.to_string())
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
