//! Directory store module
//!
//! Shared map from peer identity to resolved address.

use crate::directory::PeerRecord;
use std::collections::HashMap;
use std::net::SocketAddr;
use tokio::sync::RwLock;
use tracing::{debug, info, trace};

/// In-memory peer directory shared by every connection handler.
///
/// The map sits behind a `RwLock`: `register` holds the write lock and
/// `lookup` the read lock, so handlers running on different tasks never
/// touch the map concurrently with a writer. Entries are never removed.
#[derive(Debug, Default)]
pub struct Directory {
    peers: RwLock<HashMap<String, PeerRecord>>,
}

impl Directory {
    /// Create an empty directory
    pub fn new() -> Self {
        Self {
            peers: RwLock::new(HashMap::new()),
        }
    }

    /// Insert or overwrite the record stored under `identity`
    pub async fn register(&self, identity: impl Into<String>, record: PeerRecord) {
        let identity = identity.into();
        let mut peers = self.peers.write().await;

        if let Some(previous) = peers.insert(identity.clone(), record) {
            debug!("Overwrote directory entry {} (was {})", identity, previous);
        }
        info!("Peer registered: {} (total: {})", record, peers.len());
    }

    /// Register a peer under the identity derived from its own address
    pub async fn register_peer(&self, addr: SocketAddr) {
        let record = PeerRecord::new(addr);
        self.register(record.identity(), record).await;
    }

    /// Look up a peer; `None` means the identity was never registered
    pub async fn lookup(&self, identity: &str) -> Option<PeerRecord> {
        let peers = self.peers.read().await;
        let record = peers.get(identity).copied();
        trace!("Directory lookup {:?}: {:?}", identity, record);
        record
    }

    /// Number of registered peers
    pub async fn len(&self) -> usize {
        self.peers.read().await.len()
    }

    /// Check if no peer has registered yet
    pub async fn is_empty(&self) -> bool {
        self.peers.read().await.is_empty()
    }
}
