//! Error types for the rendezvous server
//!
//! Every failure is handled where it happens (accept loop or connection
//! handler). Only `BindError` and `ConfigError` ever reach `main`.

use std::fmt;

/// Error type for rendezvous operations
#[derive(Debug, Clone)]
pub enum RendezvousError {
    /// Listening address could not be bound
    BindError {
        message: String,
        address: Option<String>,
        source: Option<String>,
    },

    /// Accepting an inbound connection failed
    AcceptError {
        message: String,
        source: Option<String>,
    },

    /// Reading the single request from a connection failed
    ReadError {
        message: String,
        peer: Option<String>,
        source: Option<String>,
    },

    /// Writing a reply to a connection failed
    WriteError {
        message: String,
        peer: Option<String>,
        source: Option<String>,
    },

    /// Configuration errors
    ConfigError {
        message: String,
        field: Option<String>,
    },

    /// Client-side network errors
    NetworkError {
        message: String,
        address: Option<String>,
        source: Option<String>,
    },
}

impl RendezvousError {
    /// Create a new BindError with address and source
    pub fn bind_error_full(message: impl Into<String>, address: impl Into<String>, source: impl Into<String>) -> Self {
        RendezvousError::BindError {
            message: message.into(),
            address: Some(address.into()),
            source: Some(source.into()),
        }
    }

    /// Create a new AcceptError with source
    pub fn accept_error_with_source(message: impl Into<String>, source: impl Into<String>) -> Self {
        RendezvousError::AcceptError {
            message: message.into(),
            source: Some(source.into()),
        }
    }

    /// Create a new ReadError with peer address
    pub fn read_error_with_peer(message: impl Into<String>, peer: impl Into<String>) -> Self {
        RendezvousError::ReadError {
            message: message.into(),
            peer: Some(peer.into()),
            source: None,
        }
    }

    /// Create a new ReadError with peer and source
    pub fn read_error_full(message: impl Into<String>, peer: impl Into<String>, source: impl Into<String>) -> Self {
        RendezvousError::ReadError {
            message: message.into(),
            peer: Some(peer.into()),
            source: Some(source.into()),
        }
    }

    /// Create a new WriteError with peer and source
    pub fn write_error_full(message: impl Into<String>, peer: impl Into<String>, source: impl Into<String>) -> Self {
        RendezvousError::WriteError {
            message: message.into(),
            peer: Some(peer.into()),
            source: Some(source.into()),
        }
    }

    /// Create a new ConfigError
    pub fn config_error(message: impl Into<String>) -> Self {
        RendezvousError::ConfigError {
            message: message.into(),
            field: None,
        }
    }

    /// Create a new ConfigError with field
    pub fn config_error_with_field(message: impl Into<String>, field: impl Into<String>) -> Self {
        RendezvousError::ConfigError {
            message: message.into(),
            field: Some(field.into()),
        }
    }

    /// Create a new NetworkError with address and source
    pub fn network_error_full(message: impl Into<String>, address: impl Into<String>, source: impl Into<String>) -> Self {
        RendezvousError::NetworkError {
            message: message.into(),
            address: Some(address.into()),
            source: Some(source.into()),
        }
    }
}

impl fmt::Display for RendezvousError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RendezvousError::BindError { message, address, source } => {
                match (address, source) {
                    (Some(a), Some(s)) => write!(f, "Bind error: {} (address: {}, source: {})", message, a, s),
                    (Some(a), None) => write!(f, "Bind error: {} (address: {})", message, a),
                    (None, Some(s)) => write!(f, "Bind error: {} (source: {})", message, s),
                    (None, None) => write!(f, "Bind error: {}", message),
                }
            }
            RendezvousError::AcceptError { message, source } => {
                if let Some(src) = source {
                    write!(f, "Accept error: {} (source: {})", message, src)
                } else {
                    write!(f, "Accept error: {}", message)
                }
            }
            RendezvousError::ReadError { message, peer, source } => {
                match (peer, source) {
                    (Some(p), Some(s)) => write!(f, "Read error: {} (peer: {}, source: {})", message, p, s),
                    (Some(p), None) => write!(f, "Read error: {} (peer: {})", message, p),
                    (None, Some(s)) => write!(f, "Read error: {} (source: {})", message, s),
                    (None, None) => write!(f, "Read error: {}", message),
                }
            }
            RendezvousError::WriteError { message, peer, source } => {
                match (peer, source) {
                    (Some(p), Some(s)) => write!(f, "Write error: {} (peer: {}, source: {})", message, p, s),
                    (Some(p), None) => write!(f, "Write error: {} (peer: {})", message, p),
                    (None, Some(s)) => write!(f, "Write error: {} (source: {})", message, s),
                    (None, None) => write!(f, "Write error: {}", message),
                }
            }
            RendezvousError::ConfigError { message, field } => {
                if let Some(field_val) = field {
                    write!(f, "Config error: {} (field: {})", message, field_val)
                } else {
                    write!(f, "Config error: {}", message)
                }
            }
            RendezvousError::NetworkError { message, address, source } => {
                match (address, source) {
                    (Some(a), Some(s)) => write!(f, "Network error: {} (address: {}, source: {})", message, a, s),
                    (Some(a), None) => write!(f, "Network error: {} (address: {})", message, a),
                    (None, Some(s)) => write!(f, "Network error: {} (source: {})", message, s),
                    (None, None) => write!(f, "Network error: {}", message),
                }
            }
        }
    }
}

impl std::error::Error for RendezvousError {}

impl From<std::net::AddrParseError> for RendezvousError {
    fn from(err: std::net::AddrParseError) -> Self {
        RendezvousError::config_error(format!("Failed to parse address: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bind_error_full() {
        let err = RendezvousError::bind_error_full("Failed to bind", "127.0.0.1:9000", "address in use");
        assert_eq!(
            err.to_string(),
            "Bind error: Failed to bind (address: 127.0.0.1:9000, source: address in use)"
        );
    }

    #[test]
    fn test_read_error_with_peer() {
        let err = RendezvousError::read_error_with_peer("Connection closed without data", "127.0.0.1:50000");
        assert_eq!(
            err.to_string(),
            "Read error: Connection closed without data (peer: 127.0.0.1:50000)"
        );
    }

    #[test]
    fn test_read_error_full() {
        let err = RendezvousError::read_error_full("Failed to read request", "127.0.0.1:1", "reset");
        assert!(err.to_string().contains("peer: 127.0.0.1:1, source: reset"));
    }

    #[test]
    fn test_accept_error_with_source() {
        let err = RendezvousError::accept_error_with_source("Failed to accept", "too many open files");
        assert_eq!(err.to_string(), "Accept error: Failed to accept (source: too many open files)");
    }

    #[test]
    fn test_config_error_with_field() {
        let err = RendezvousError::config_error_with_field("Invalid value", "listen");
        assert!(err.to_string().contains("Config error"));
        assert!(err.to_string().contains("listen"));
    }

    #[test]
    fn test_from_addr_parse_error() {
        let addr_err = "invalid:address".parse::<std::net::SocketAddr>().unwrap_err();
        let err: RendezvousError = addr_err.into();
        assert!(matches!(err, RendezvousError::ConfigError { .. }));
        assert!(err.to_string().starts_with("Config error: Failed to parse address"));
    }
}
