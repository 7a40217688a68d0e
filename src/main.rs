mod assess;
mod career;
mod cli;
mod config;
mod error;
mod ingest;
mod report;
mod scoring;
mod types;

use crate::error::ReportError;
use crate::types::report::MatchResult;
use clap::Parser;
use tracing_subscriber::EnvFilter;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const WARNINGS: i32 = 1;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn init_tracing(verbose: u8, quiet: bool) {
    let level = match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, _) => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run() -> Result<i32, ReportError> {
    let cli = cli::Cli::parse();
    init_tracing(cli.verbose, cli.quiet);
    let quiet = cli.quiet;

    match cli.command {
        cli::Commands::Generate(cmd) => {
            let loaded = config::load_config(&cmd.workbook)?;
            let workbook = ingest::load_workbook(&cmd.workbook, &loaded)?;
            let bundle = assess::assess_all(&workbook, &loaded.report.title);

            let output_format = match cmd.format {
                cli::ReportFormat::Json => report::OutputFormat::Json,
                cli::ReportFormat::Md => report::OutputFormat::Md,
            };
            let rendered = report::render(&bundle, output_format)?;
            let path = report::writer::output_path(
                &cmd.workbook,
                &loaded.report.output,
                cmd.output.as_deref(),
                output_format,
            );
            report::writer::write_report(&path, &rendered)?;
            if !quiet {
                println!(
                    "report written: {} ({} person(s))",
                    path.display(),
                    bundle.people.len()
                );
            }

            if workbook.incomplete_people > 0 {
                if !quiet {
                    eprintln!(
                        "warning: {} person row(s) had unreadable scores (percentile 0 used)",
                        workbook.incomplete_people
                    );
                }
                Ok(exit_code::WARNINGS)
            } else {
                Ok(exit_code::SUCCESS)
            }
        }
        cli::Commands::Codes(cmd) => {
            let loaded = config::load_config(&cmd.workbook)?;
            let workbook = ingest::load_workbook(&cmd.workbook, &loaded)?;

            if workbook.people.is_empty() {
                println!("codes: no people");
                return Ok(exit_code::SUCCESS);
            }

            for person in &workbook.people {
                let assessed = assess::assess(person, &workbook);
                let status = match &assessed.careers {
                    MatchResult::Found { .. } => {
                        format!("{} job(s)", assessed.careers.job_count())
                    }
                    MatchResult::NotFound { strongest } => {
                        format!("no match, strongest {strongest}")
                    }
                };
                println!(
                    "{} {}: {} ({})",
                    assessed.identity.roll, assessed.identity.name, assessed.code, status
                );
            }
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Check(cmd) => {
            let loaded = config::load_config(&cmd.workbook)?;
            let workbook = ingest::load_workbook(&cmd.workbook, &loaded)?;

            let codes = workbook
                .catalog
                .records()
                .iter()
                .filter(|record| !record.code.is_empty())
                .collect::<Vec<_>>();
            let unlinked = codes
                .iter()
                .filter(|record| {
                    record.work_field_id.as_deref().map_or(true, |id| {
                        workbook.catalog.linked_to_work_field(id).next().is_none()
                    })
                })
                .map(|record| record.code.as_str())
                .collect::<Vec<_>>();

            println!("people: {}", workbook.people.len());
            println!("people with unreadable scores: {}", workbook.incomplete_people);
            println!(
                "percentile rows: {} kept, {} skipped",
                workbook.percentiles.len(),
                workbook.percentiles.skipped_rows()
            );
            println!(
                "catalog: {} record(s), {} code(s)",
                workbook.catalog.len(),
                codes.len()
            );
            if !unlinked.is_empty() {
                println!(
                    "codes using single-row job fallback: {}",
                    unlinked.join(", ")
                );
            }

            if workbook.problem_rows() > 0 {
                Ok(exit_code::WARNINGS)
            } else {
                Ok(exit_code::SUCCESS)
            }
        }
    }
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
