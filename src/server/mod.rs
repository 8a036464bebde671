//! Server module
//!
//! Listener plus the per-connection handler.

pub mod handler;
pub mod listener;

pub use handler::{handle_connection, HandlerOutcome};
pub use listener::RendezvousServer;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::RendezvousClient;
    use std::net::SocketAddr;
    use std::sync::Arc;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpStream;

    async fn start() -> (SocketAddr, Arc<crate::directory::Directory>) {
        let server = RendezvousServer::bind("127.0.0.1:0".parse().unwrap()).await.unwrap();
        let addr = server.local_addr();
        let directory = server.directory();
        tokio::spawn(async move { server.accept_loop().await });
        (addr, directory)
    }

    async fn raw_exchange(server: SocketAddr, payload: &[u8]) -> Vec<u8> {
        let mut stream = TcpStream::connect(server).await.unwrap();
        stream.write_all(payload).await.unwrap();
        let mut reply = Vec::new();
        stream.read_to_end(&mut reply).await.unwrap();
        reply
    }

    #[tokio::test]
    async fn test_register_then_lookup_round_trip() {
        let (server, _) = start().await;
        let client = RendezvousClient::new(server);

        let identity = client.register().await.unwrap();
        let reply = client.lookup(&identity.to_string()).await.unwrap();

        assert_eq!(reply, Some(identity.to_string()));
        assert_eq!(client.lookup_addr(&identity.to_string()).await.unwrap(), Some(identity));
    }

    #[tokio::test]
    async fn test_lookup_unknown_peer_gets_zero_bytes() {
        let (server, directory) = start().await;

        let reply = raw_exchange(server, b"nonexistent:1").await;

        assert!(reply.is_empty());
        assert!(directory.is_empty().await);
    }

    #[tokio::test]
    async fn test_register_gets_zero_bytes() {
        let (server, directory) = start().await;

        let reply = raw_exchange(server, b"register").await;

        assert!(reply.is_empty());
        assert_eq!(directory.len().await, 1);
    }

    #[tokio::test]
    async fn test_silent_close_does_not_stop_server() {
        let (server, _) = start().await;

        let stream = TcpStream::connect(server).await.unwrap();
        drop(stream);

        let client = RendezvousClient::new(server);
        let identity = client.register().await.unwrap();
        assert!(client.lookup(&identity.to_string()).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_concurrent_registrations_are_distinct() {
        let (server, directory) = start().await;
        let client = RendezvousClient::new(server);

        let mut handles = Vec::new();
        for _ in 0..32 {
            handles.push(tokio::spawn(async move { client.register().await.unwrap() }));
        }
        let mut identities = Vec::new();
        for handle in handles {
            identities.push(handle.await.unwrap());
        }

        assert_eq!(directory.len().await, 32);
        for identity in identities {
            let reply = client.lookup(&identity.to_string()).await.unwrap();
            assert_eq!(reply, Some(identity.to_string()));
        }
    }

    #[tokio::test]
    async fn test_scenario_register_lookup_miss() {
        let (server, _) = start().await;
        let client = RendezvousClient::new(server);

        let client1 = client.register().await.unwrap();
        let reply = raw_exchange(server, client1.to_string().as_bytes()).await;
        assert_eq!(reply, client1.to_string().into_bytes());

        let reply = raw_exchange(server, b"nonexistent:1").await;
        assert!(reply.is_empty());
    }
}
