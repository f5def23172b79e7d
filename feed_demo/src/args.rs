//! Command-line arguments for the feed demonstration driver.
//!
//! This module defines the CLI interface using `clap`. See `main` for
//! end-to-end usage.
use clap::Parser;
use std::path::PathBuf;

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Path to a text file with seed ticks, one per line:
    /// `asset, instrument, price, metric`. Lines starting with `#` are
    /// ignored. When omitted, a small built-in set of ticks is used.
    #[clap(long)]
    pub path: Option<PathBuf>,

    /// Identity of the free-tier subscriber.
    #[clap(long, default_value_t = 1)]
    pub free_id: u64,

    /// Identity of the paid-tier subscriber.
    #[clap(long, default_value_t = 2)]
    pub paid_id: u64,

    /// Number of pull rounds to run (each round pulls every seeded
    /// instrument once per subscriber). Values above 100 show the free
    /// tier crossing its quota.
    #[clap(long, default_value_t = 105)]
    pub pulls: u32,

    /// Keep generating synthetic ticks and pulling until Ctrl+C.
    #[clap(long)]
    pub stream: bool,

    /// Pause between streaming rounds, in milliseconds.
    #[clap(long, default_value_t = 500)]
    pub interval_ms: u64,
}
