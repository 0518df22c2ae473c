//! Lazy key listing
//!
//! Iterator type for streaming LIST responses.

use std::io::{BufReader, ErrorKind, Read};
use std::net::TcpStream;

use crate::error::Result;
use crate::protocol::{BlobKey, KEY_LEN};

/// Streaming iterator over the keys a LIST request returns
///
/// Single-pass and non-restartable: each key is read off the wire as the
/// iterator advances, and the connection cannot be rewound. Iteration ends
/// at EOF; a trailing fragment shorter than one key is discarded. The
/// connection closes when the iterator is dropped, finished or not.
pub struct KeyIter {
    reader: BufReader<TcpStream>,
}

impl KeyIter {
    pub(crate) fn new(reader: BufReader<TcpStream>) -> Self {
        Self { reader }
    }
}

impl Iterator for KeyIter {
    type Item = Result<BlobKey>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut buf = [0u8; KEY_LEN];
        let mut filled = 0;

        while filled < KEY_LEN {
            match self.reader.read(&mut buf[filled..]) {
                // EOF: a whole key ends iteration cleanly; so does a
                // partial one, which the protocol says to discard.
                Ok(0) => return None,
                Ok(n) => filled += n,
                Err(ref e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Some(Err(e.into())),
            }
        }

        Some(Ok(BlobKey::from_bytes(buf)))
    }
}
