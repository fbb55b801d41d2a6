//! Main CLI parser and top-level argument handling.
//!
//! This module defines the root CLI structure with global options.

use std::path::PathBuf;

use clap::Parser;

use crate::commands::Commands;

/// Command-line interface for the marquee movie catalog.
#[derive(Parser)]
#[command(name = "marquee")]
#[command(about = "Browse and search a movie catalog")]
#[command(version)]
pub struct Cli {
    /// Movie data file (JSON). Defaults to the bundled catalog
    #[arg(long = "data", env = "MARQUEE_DATA_FILE", global = true)]
    pub data: Option<PathBuf>,

    /// Reviews file (JSON). Without it no reviews are shown
    #[arg(long = "reviews", env = "MARQUEE_REVIEWS_FILE", global = true)]
    pub reviews: Option<PathBuf>,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
