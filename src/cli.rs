use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "interest-report",
    version,
    about = "Holland interest inventory scoring and report generation CLI"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Log errors only; generate prints nothing on success
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write the assessment document for every person in the workbook
    Generate(GenerateCommand),
    /// Print each person's Holland code and match status
    Codes(CodesCommand),
    /// Load the workbook and report skipped rows and catalog coverage
    Check(CheckCommand),
}

#[derive(Args)]
pub struct GenerateCommand {
    pub workbook: PathBuf,
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Args)]
pub struct CodesCommand {
    pub workbook: PathBuf,
}

#[derive(Args)]
pub struct CheckCommand {
    pub workbook: PathBuf,
}

#[derive(Clone, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
}
