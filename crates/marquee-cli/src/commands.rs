//! Main commands enum.
//!
//! This module defines the available commands for the CLI tool.

use clap::Subcommand;
use marquee_axum::bootstrap::{DEFAULT_HOST, DEFAULT_PORT};

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the web server
    Serve {
        /// Address to bind
        #[arg(long, env = "MARQUEE_HOST", default_value = DEFAULT_HOST)]
        host: String,
        /// Port to listen on
        #[arg(short, long, env = "MARQUEE_PORT", default_value_t = DEFAULT_PORT)]
        port: u16,
        /// Allowed CORS origin (repeatable). All origins are allowed when omitted
        #[arg(long = "allow-origin")]
        allow_origin: Vec<String>,
    },

    /// Search the catalog by title, id or genre
    Search {
        /// Case-insensitive title substring
        #[arg(short, long)]
        name: Option<String>,
        /// Exact movie id. Overrides name and genre when positive
        #[arg(long, allow_negative_numbers = true)]
        id: Option<i64>,
        /// Case-insensitive genre substring
        #[arg(short, long)]
        genre: Option<String>,
        /// Print the JSON search envelope instead of a table
        #[arg(long)]
        json: bool,
    },

    /// List the distinct genres in the catalog
    Genres,

    /// Show one movie with its reviews
    Show {
        /// Movie id
        #[arg(allow_negative_numbers = true)]
        id: i64,
    },
}
