//! Streaming blob reads
//!
//! Reader type for GET and SGET response bodies.

use std::io::{self, BufReader, Read};
use std::net::TcpStream;

/// The body of a retrieved blob, read straight off the wire
///
/// Yields the blob bytes until EOF; nothing is buffered beyond a small
/// read-ahead window, so arbitrarily large blobs stream in constant
/// memory. Dropping the reader closes the connection.
pub struct BlobReader {
    reader: BufReader<TcpStream>,
}

impl BlobReader {
    pub(crate) fn new(reader: BufReader<TcpStream>) -> Self {
        Self { reader }
    }
}

impl Read for BlobReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.reader.read(buf)
    }
}
