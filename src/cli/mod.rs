//! Command line interface.

pub mod command;

use std::{path::PathBuf, time::Duration};

use clap::{ArgAction, Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{ArchiveConfig, BASE_ISD_PATH, ISD_HOST};

#[derive(Parser)]
#[command(version, about, long_about = None)]
/// Contains the commands
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Archive host
    #[arg(long, global = true, env = "ISD_HOST", default_value = ISD_HOST)]
    pub host: String,

    /// Archive root path on the host
    #[arg(long, global = true, env = "ISD_BASE_PATH", default_value = BASE_ISD_PATH)]
    pub base_path: String,

    /// Log more (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the archive files for a station and year, newest first
    Stations { icao: String, year: i32 },
    /// Download a station's observations for a year and decode them to CSV
    Records {
        icao: String,
        year: i32,
        /// Output CSV file (defaults to the home directory)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Decode a local ISD file (plain or gzipped) to CSV on stdout
    Decode { file: PathBuf },
}

impl Cli {
    pub fn archive_config(&self) -> ArchiveConfig {
        ArchiveConfig::new(&self.host, &self.base_path)
    }

    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    }
}

/// Logs to stderr. `RUST_LOG` overrides the verbosity flag.
pub fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("isd={}", level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();
}

/// Creates a spinner.
pub fn create_spinner(message: String) -> ProgressBar {
    let bar = ProgressBar::new_spinner().with_message(message);
    bar.enable_steady_tick(Duration::from_millis(100));

    bar
}

/// Creates a progress bar.
pub fn create_progress_bar(size: u64, message: String) -> ProgressBar {
    ProgressBar::new(size).with_message(message).with_style(
        ProgressStyle::with_template("[{eta_precise}] {bar:40.cyan/blue} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("##-"),
    )
}
