//! Command-line interface

use clap::Parser;
use std::path::PathBuf;

/// Remove uniform borders from every image in a directory
#[derive(Debug, Parser)]
#[command(name = "border-crop", version, about, long_about = None)]
pub struct Cli {
    /// Directory containing the source images
    pub source_dir: PathBuf,

    /// Directory the cropped JPEGs are written to
    pub output_dir: PathBuf,

    /// Increase log detail (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only log warnings and errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Cli {
    /// Maximum log level for these flags
    pub fn log_level(&self) -> tracing::Level {
        if self.quiet {
            return tracing::Level::WARN;
        }
        match self.verbose {
            0 => tracing::Level::INFO,
            1 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        }
    }
}
