//! Two-phase PUT
//!
//! Handle type for callers that produce the blob body incrementally.

use std::io::{self, Write};

use crate::error::Result;
use crate::network::Connection;
use crate::protocol::{read_key, BlobKey};

/// An in-progress PUT
///
/// Obtained from [`BerthaClient::put`](crate::BerthaClient::put). Write the
/// body through the [`Write`] impl, then call [`finish`](PutHandle::finish)
/// to complete the exchange and learn the blob's key.
///
/// Dropping the handle without calling `finish` abandons the upload: the
/// connection closes mid-request and the server discards or truncates the
/// blob at its discretion. Callers must drive every PUT to `finish` (or
/// deliberately abandon it); there is no implicit completion.
pub struct PutHandle {
    conn: Connection,
}

impl PutHandle {
    pub(crate) fn new(conn: Connection) -> Self {
        Self { conn }
    }

    /// Finish the PUT and return the key of the stored blob
    ///
    /// Flushes the body, half-closes the write side so the server sees the
    /// body end, and reads the 32-byte key the server assigned.
    pub fn finish(mut self) -> Result<BlobKey> {
        self.conn.finish_request()?;
        let key = read_key(self.conn.reader())?;
        tracing::debug!("stored blob {}", key);
        Ok(key)
    }
}

impl Write for PutHandle {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.conn.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.conn.flush()
    }
}
