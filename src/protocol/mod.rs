//! Rendezvous protocol module
//!
//! Plain TCP, exactly one request per connection.

pub mod request;
pub mod wire;

// Re-export main types
pub use request::{Request, READ_BUFFER_SIZE, REGISTER_COMMAND};
pub use wire::{read_request, write_reply, write_request};
