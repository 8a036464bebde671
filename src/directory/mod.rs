//! Peer directory module
//!
//! Maps peer identities to their observed addresses.

pub mod record;
pub mod store;

pub use record::PeerRecord;
pub use store::Directory;
