//! Listener module
//!
//! Binds the rendezvous endpoint and runs the accept loop.

use crate::directory::Directory;
use crate::error::RendezvousError;
use crate::server::handle_connection;
use anyhow::Result;
use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::time::{sleep, Duration};
use tracing::{debug, error, info, warn};

/// Pause after a failed accept before trying again
pub const ACCEPT_ERROR_BACKOFF: Duration = Duration::from_millis(100);

/// TCP rendezvous server
///
/// Owns the listening socket and the process-wide directory. The socket is
/// released when the server is dropped.
pub struct RendezvousServer {
    listener: TcpListener,
    directory: Arc<Directory>,
    local_addr: SocketAddr,
}

impl RendezvousServer {
    /// Bind the listening socket with an empty directory
    pub async fn bind(addr: SocketAddr) -> Result<Self> {
        Self::with_directory(addr, Arc::new(Directory::new())).await
    }

    /// Bind the listening socket, sharing an existing directory
    pub async fn with_directory(addr: SocketAddr, directory: Arc<Directory>) -> Result<Self> {
        info!("Binding rendezvous server to {}", addr);

        let listener = TcpListener::bind(addr).await
            .map_err(|e| {
                error!("Failed to bind TCP listener to {}: {}", addr, e);
                RendezvousError::bind_error_full("Failed to bind TCP listener", addr.to_string(), e.to_string())
            })?;
        let local_addr = listener.local_addr()
            .map_err(|e| {
                error!("Failed to get local address: {}", e);
                RendezvousError::bind_error_full("Failed to get local address", addr.to_string(), e.to_string())
            })?;

        Ok(Self {
            listener,
            directory,
            local_addr,
        })
    }

    /// Address the listener is actually bound to
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Shared directory handle
    pub fn directory(&self) -> Arc<Directory> {
        self.directory.clone()
    }

    /// Accept connections forever.
    ///
    /// Each connection is served on its own task; the loop never waits for a
    /// handler. Accept failures are logged and the loop carries on after
    /// `ACCEPT_ERROR_BACKOFF`.
    pub async fn accept_loop(&self) {
        info!("Accepting connections on {}", self.local_addr);

        loop {
            match self.listener.accept().await {
                Ok((stream, remote_addr)) => {
                    debug!("Accepted connection from {}", remote_addr);
                    let directory = self.directory.clone();
                    tokio::spawn(async move {
                        handle_connection(stream, remote_addr, &directory).await;
                    });
                }
                Err(e) => self.accept_failed(e).await,
            }
        }
    }

    async fn accept_failed(&self, e: std::io::Error) {
        let err = RendezvousError::accept_error_with_source("Failed to accept connection", e.to_string());
        warn!("Error accepting connection on {}: {}", self.local_addr, err);
        sleep(ACCEPT_ERROR_BACKOFF).await;
    }

    /// Run the accept loop until `shutdown` resolves
    pub async fn run_until<F>(&self, shutdown: F)
    where
        F: Future<Output = ()>,
    {
        tokio::select! {
            _ = self.accept_loop() => {}
            _ = shutdown => {
                info!("Shutdown requested, stopping accept loop on {}", self.local_addr);
            }
        }
    }
}
