//! CLI argument definitions using clap
//!
//! Commands:
//! - userdir serve --host <host> --port <port>

use clap::{Parser, Subcommand};

/// userdir - A minimal in-memory user directory HTTP service
#[derive(Parser, Debug)]
#[command(name = "userdir")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the user directory HTTP server
    Serve {
        /// Host to bind to
        #[arg(long, default_value = "0.0.0.0")]
        host: String,

        /// Port to bind to
        #[arg(long, default_value_t = 5001)]
        port: u16,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
