//! CLI arguments module
//!
//! Defines command-line argument parsing using clap.

use clap::Parser;

/// Default listening address of the rendezvous server
pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:9000";

/// CLI arguments for the rendezvous server
#[derive(Debug, Parser)]
#[command(name = "rendezvous-server")]
#[command(about = "A minimal TCP rendezvous server for peer address discovery", long_about = None)]
pub struct CliArgs {
    /// Address to listen on
    #[arg(short, long, value_name = "ADDR", default_value = DEFAULT_LISTEN_ADDR)]
    pub listen: String,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Quiet mode (no output except errors)
    #[arg(short, long)]
    pub quiet: bool,
}

impl CliArgs {
    /// Parse CLI arguments from command line
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Check if verbose mode is enabled
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    /// Get the log level based on verbosity settings
    pub fn log_level(&self) -> tracing::Level {
        if self.verbose {
            tracing::Level::DEBUG
        } else if self.quiet {
            tracing::Level::ERROR
        } else {
            tracing::Level::INFO
        }
    }
}
