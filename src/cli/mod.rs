//! CLI module
//!
//! Command-line interface for the rendezvous server.

pub mod args;
pub mod config;

pub use args::{CliArgs, DEFAULT_LISTEN_ADDR};
pub use config::Config;
