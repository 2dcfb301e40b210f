//! border-crop - Batch removal of uniform image borders
//!
//! CLI entry point

use anyhow::Context;
use border_crop::{exit_codes, process_directory, validate_directory, BorderOptions, Cli};
use clap::error::ErrorKind;
use clap::Parser;
use std::io::IsTerminal;
use std::time::Instant;
use tracing::info;

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => {
            let _ = e.print();
            std::process::exit(exit_codes::GENERAL_ERROR);
        }
    };

    init_logging(cli.log_level());

    std::process::exit(match run(&cli) {
        Ok(()) => exit_codes::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            exit_codes::GENERAL_ERROR
        }
    });
}

/// Diagnostics go to stderr, without timestamps
fn init_logging(level: tracing::Level) {
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .without_time()
        .init();
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let start_time = Instant::now();

    let source_dir = validate_directory(&cli.source_dir)?;
    let output_dir = validate_directory(&cli.output_dir)?;

    let report = process_directory(&source_dir, &output_dir, &BorderOptions::default())
        .with_context(|| format!("Failed to read {}", source_dir.display()))?;

    report.log_summary();
    info!("Total time: {:.2}s", start_time.elapsed().as_secs_f64());

    if report.has_failures() {
        anyhow::bail!("{} file(s) failed to process", report.failed);
    }

    Ok(())
}
