//! Connection handler module
//!
//! Serves exactly one request per accepted connection, then closes it.

use crate::directory::Directory;
use crate::error::RendezvousError;
use crate::protocol::{read_request, write_reply, Request};
use std::net::SocketAddr;
use tokio::io::{AsyncRead, AsyncWrite, AsyncWriteExt};
use tracing::{debug, info, warn};

/// How a connection ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandlerOutcome {
    /// The caller's remote address was stored in the directory
    Registered,
    /// The looked-up address was written back
    Forwarded,
    /// The key was unknown; nothing was written
    NotFound,
    /// Nothing usable was read; nothing was written
    ReadFailed,
}

/// Process one connection from `remote_addr`.
///
/// The stream is shut down and dropped on every path, so the connection is
/// closed exactly once whatever the outcome.
pub async fn handle_connection<S>(mut stream: S, remote_addr: SocketAddr, directory: &Directory) -> HandlerOutcome
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    let outcome = serve(&mut stream, remote_addr, directory).await;

    if let Err(e) = stream.shutdown().await {
        debug!("Failed to shut down connection from {}: {}", remote_addr, e);
    }
    debug!("Closed connection from {} ({:?})", remote_addr, outcome);
    outcome
}

async fn serve<S>(stream: &mut S, remote_addr: SocketAddr, directory: &Directory) -> HandlerOutcome
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    let request = match read_request(stream).await {
        Ok(Some(request)) => request,
        Ok(None) => {
            let err = RendezvousError::read_error_with_peer("Connection closed without data", remote_addr.to_string());
            warn!("Error reading from connection: {}", err);
            return HandlerOutcome::ReadFailed;
        }
        Err(e) => {
            let err = RendezvousError::read_error_full("Failed to read request", remote_addr.to_string(), e.to_string());
            warn!("Error reading from connection: {}", err);
            return HandlerOutcome::ReadFailed;
        }
    };
    debug!("Request from {}: {}", remote_addr, request);

    match request {
        Request::Register => {
            directory.register_peer(remote_addr).await;
            HandlerOutcome::Registered
        }
        Request::Lookup(identity) => match directory.lookup(&identity).await {
            Some(record) => {
                if let Err(e) = write_reply(stream, &record).await {
                    let err = RendezvousError::write_error_full("Failed to forward address", remote_addr.to_string(), e.to_string());
                    warn!("{}", err);
                } else {
                    debug!("Forwarded {} to {}", record, remote_addr);
                }
                HandlerOutcome::Forwarded
            }
            None => {
                info!("Peer not found: {}", identity);
                HandlerOutcome::NotFound
            }
        },
    }
}
