//! Rendezvous client
//!
//! Opens a fresh connection for every request, as the protocol requires.

use crate::error::RendezvousError;
use crate::protocol::{write_request, Request};
use anyhow::Result;
use std::net::SocketAddr;
use tokio::io::AsyncReadExt;
use tokio::net::TcpStream;
use tokio::time::{timeout, Duration};
use tracing::{debug, error, info, warn};

/// Connection timeout used by the client
pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Client for a rendezvous server
#[derive(Debug, Clone, Copy)]
pub struct RendezvousClient {
    server: SocketAddr,
}

impl RendezvousClient {
    /// Create a client for the server at `server`
    pub fn new(server: SocketAddr) -> Self {
        Self { server }
    }

    async fn connect(&self) -> Result<TcpStream> {
        let stream = timeout(CONNECT_TIMEOUT, TcpStream::connect(self.server))
            .await
            .map_err(|e| {
                warn!("Connection timeout to {}", self.server);
                RendezvousError::network_error_full("Connection timeout", self.server.to_string(), e.to_string())
            })?
            .map_err(|e| {
                error!("Failed to connect to {}: {}", self.server, e);
                RendezvousError::network_error_full("Failed to connect", self.server.to_string(), e.to_string())
            })?;
        Ok(stream)
    }

    /// Register this peer.
    ///
    /// Returns the local address of the registering connection, which is the
    /// identity the server stores when no NAT sits in between.
    pub async fn register(&self) -> Result<SocketAddr> {
        let mut stream = self.connect().await?;
        let local_addr = stream.local_addr()
            .map_err(|e| RendezvousError::network_error_full("Failed to get local address", self.server.to_string(), e.to_string()))?;

        write_request(&mut stream, &Request::Register).await?;

        // Wait for the server to close so the registration has been applied.
        let mut rest = Vec::new();
        stream.read_to_end(&mut rest).await?;

        info!("Registered with {} as {}", self.server, local_addr);
        Ok(local_addr)
    }

    /// Look up a peer by identity; `None` when the server sends no bytes
    pub async fn lookup(&self, identity: &str) -> Result<Option<String>> {
        let mut stream = self.connect().await?;
        write_request(&mut stream, &Request::Lookup(identity.to_string())).await?;

        let mut reply = Vec::new();
        stream.read_to_end(&mut reply).await?;

        if reply.is_empty() {
            debug!("Lookup of {} returned nothing", identity);
            return Ok(None);
        }

        let reply = String::from_utf8(reply)
            .map_err(|e| RendezvousError::network_error_full("Reply is not UTF-8", self.server.to_string(), e.to_string()))?;
        debug!("Lookup of {} returned {}", identity, reply);
        Ok(Some(reply))
    }

    /// Look up a peer and parse the reply as a socket address
    pub async fn lookup_addr(&self, identity: &str) -> Result<Option<SocketAddr>> {
        match self.lookup(identity).await? {
            Some(reply) => {
                let addr = reply.parse::<SocketAddr>()
                    .map_err(|e| RendezvousError::network_error_full("Invalid address in reply", reply.clone(), e.to_string()))?;
                Ok(Some(addr))
            }
            None => Ok(None),
        }
    }
}
