//! Peer record module
//!
//! The value stored in the directory for each registered peer.

use std::fmt;
use std::net::SocketAddr;

/// Resolved address of a registered peer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PeerRecord {
    pub addr: SocketAddr,
}

impl PeerRecord {
    /// Create a new peer record
    pub fn new(addr: SocketAddr) -> Self {
        Self { addr }
    }

    /// Canonical `host:port` text, also used as the peer's identity
    pub fn identity(&self) -> String {
        self.addr.to_string()
    }

    /// Bytes written back to a client that looked this peer up
    pub fn to_reply(&self) -> Vec<u8> {
        self.identity().into_bytes()
    }
}

impl fmt::Display for PeerRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.addr)
    }
}
