//! CLI configuration module
//!
//! Turns parsed arguments into the server configuration.

use crate::cli::args::CliArgs;
use crate::error::RendezvousError;
use anyhow::{Context, Result};
use std::net::SocketAddr;

/// Configuration for the rendezvous server
#[derive(Debug, Clone)]
pub struct Config {
    /// Address the listener binds to
    pub listen_addr: SocketAddr,
    /// Verbose output
    pub verbose: bool,
    /// Quiet mode
    pub quiet: bool,
}

impl Config {
    /// Create configuration from CLI arguments
    pub fn from_args(args: &CliArgs) -> Result<Self> {
        let listen_addr = parse_listen_addr(&args.listen)
            .with_context(|| format!("Invalid listen address '{}'", args.listen))?;

        Ok(Self {
            listen_addr,
            verbose: args.verbose,
            quiet: args.quiet,
        })
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.verbose && self.quiet {
            return Err(RendezvousError::config_error_with_field(
                "verbose and quiet cannot both be set",
                "quiet",
            ).into());
        }

        Ok(())
    }
}

fn parse_listen_addr(listen: &str) -> Result<SocketAddr, RendezvousError> {
    Ok(listen.parse::<SocketAddr>()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(listen: &str, verbose: bool, quiet: bool) -> CliArgs {
        CliArgs {
            listen: listen.to_string(),
            verbose,
            quiet,
        }
    }

    #[test]
    fn test_config_from_args() {
        let config = Config::from_args(&args("127.0.0.1:9000", true, false)).unwrap();

        assert_eq!(config.listen_addr, "127.0.0.1:9000".parse::<SocketAddr>().unwrap());
        assert!(config.verbose);
        assert!(!config.quiet);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_from_args_ipv6() {
        let config = Config::from_args(&args("[::1]:9000", false, false)).unwrap();
        assert!(config.listen_addr.is_ipv6());
        assert_eq!(config.listen_addr.port(), 9000);
    }

    #[test]
    fn test_config_invalid_listen_addr() {
        let err = Config::from_args(&args("not-an-address", false, false)).unwrap_err();

        assert_eq!(err.to_string(), "Invalid listen address 'not-an-address'");
        assert!(matches!(
            err.downcast_ref::<RendezvousError>(),
            Some(RendezvousError::ConfigError { .. })
        ));
    }

    #[test]
    fn test_config_validate_verbose_and_quiet() {
        let config = Config::from_args(&args("127.0.0.1:9000", true, true)).unwrap();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("field: quiet"));
    }
}
