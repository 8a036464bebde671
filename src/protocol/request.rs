//! Rendezvous requests
//!
//! A request is the whole payload of the single read performed on a
//! connection. There is no framing: the literal `register` registers the
//! caller, anything else is the identity of the peer being looked up.

use std::fmt;
use tracing::trace;

/// Command that registers the connecting peer
pub const REGISTER_COMMAND: &str = "register";

/// Size of the buffer used for the single request read
pub const READ_BUFFER_SIZE: usize = 1024;

/// Request sent by a client on a fresh connection
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    /// Register the connection's remote address
    Register,
    /// Look up the address registered under this identity
    Lookup(String),
}

impl Request {
    /// Interpret the bytes of a single read.
    ///
    /// Invalid UTF-8 is decoded lossily; the resulting key can never match a
    /// registered identity, so such a request always ends as a lookup miss.
    pub fn parse(payload: &[u8]) -> Self {
        let text = String::from_utf8_lossy(payload);
        trace!("Parsing request payload: {:?}", text);

        if text == REGISTER_COMMAND {
            Request::Register
        } else {
            Request::Lookup(text.into_owned())
        }
    }

    /// Bytes a client writes to issue this request
    pub fn to_bytes(&self) -> Vec<u8> {
        match self {
            Request::Register => REGISTER_COMMAND.as_bytes().to_vec(),
            Request::Lookup(identity) => identity.as_bytes().to_vec(),
        }
    }
}

impl fmt::Display for Request {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Request::Register => write!(f, "register"),
            Request::Lookup(identity) => write!(f, "lookup {}", identity),
        }
    }
}
