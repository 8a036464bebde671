//! Wire protocol utilities
//!
//! One read per request, one optional write per reply.

use anyhow::Result;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tracing::trace;

use super::{Request, READ_BUFFER_SIZE};
use crate::directory::PeerRecord;

/// Read a request with a single read call.
///
/// Returns `Ok(None)` when the peer closed the connection without sending
/// anything. Bytes beyond `READ_BUFFER_SIZE`, or arriving after the first
/// read, are ignored.
pub async fn read_request<R: AsyncReadExt + Unpin>(reader: &mut R) -> std::io::Result<Option<Request>> {
    let mut buffer = [0u8; READ_BUFFER_SIZE];
    let n = reader.read(&mut buffer).await?;
    trace!("Read {} request bytes", n);

    if n == 0 {
        return Ok(None);
    }
    Ok(Some(Request::parse(&buffer[..n])))
}

/// Write a lookup reply: the record's canonical address is the whole body
pub async fn write_reply<W: AsyncWriteExt + Unpin>(writer: &mut W, record: &PeerRecord) -> std::io::Result<()> {
    writer.write_all(&record.to_reply()).await?;
    writer.flush().await?;
    Ok(())
}

/// Write a request as a client would
pub async fn write_request<W: AsyncWriteExt + Unpin>(writer: &mut W, request: &Request) -> Result<()> {
    writer.write_all(&request.to_bytes()).await?;
    writer.flush().await?;
    Ok(())
}
