//! rendezvous-server
//!
//! A minimal TCP rendezvous server: peers register their observed address
//! and look up each other's address by identity.

pub mod cli;
pub mod client;
pub mod directory;
pub mod error;
pub mod protocol;
pub mod server;

pub use error::RendezvousError;

pub use cli::{CliArgs, Config, DEFAULT_LISTEN_ADDR};
pub use client::RendezvousClient;
pub use directory::{Directory, PeerRecord};
pub use protocol::{Request, READ_BUFFER_SIZE, REGISTER_COMMAND};
pub use server::{handle_connection, HandlerOutcome, RendezvousServer};
