//! Client Module
//!
//! Operation drivers for the Bertha protocol. Each operation opens its own
//! connection, writes the request, half-closes the write side, and reads
//! the response.

use std::fs::File;
use std::io::{self, Read, Write};
use std::path::Path;

use crate::config::Config;
use crate::error::{BerthaError, Result};
use crate::network::Connection;
use crate::protocol::{read_size, read_stats, BlobKey, Request, ServerStats};

mod get;
mod list;
mod put;

pub use get::BlobReader;
pub use list::KeyIter;
pub use put::PutHandle;

/// Client for a Bertha blob server
///
/// Holds only the server address; every operation is an independent,
/// blocking request/response exchange over its own TCP connection. The
/// client keeps no connection pool and no state across calls, so sharing
/// one between threads needs no locking.
///
/// ```no_run
/// use bertha::BerthaClient;
///
/// let client = BerthaClient::new("localhost", 819);
/// let key = client.put_bytes(b"hello world")?;
/// let size = client.size(&key)?;
/// assert_eq!(size, 11);
/// # Ok::<(), bertha::BerthaError>(())
/// ```
#[derive(Debug, Clone)]
pub struct BerthaClient {
    config: Config,
}

impl Default for BerthaClient {
    /// A client for `localhost:819`, the BerthaD defaults
    fn default() -> Self {
        Self::with_config(Config::default())
    }
}

impl BerthaClient {
    /// Create a client for the given host and port
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            config: Config::builder().host(host).port(port).build(),
        }
    }

    /// Create a client from a full configuration
    pub fn with_config(config: Config) -> Self {
        Self { config }
    }

    /// The client's configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    // -------------------------------------------------------------------------
    // LIST
    // -------------------------------------------------------------------------

    /// List all keys stored on the server
    pub fn list(&self) -> Result<Vec<BlobKey>> {
        self.list_iter()?.collect()
    }

    /// List keys lazily, streaming them off the wire
    ///
    /// The iterator owns its connection and is single-pass: keys arrive as
    /// they are read and cannot be replayed. The connection closes when the
    /// iterator is exhausted or dropped.
    pub fn list_iter(&self) -> Result<KeyIter> {
        let mut conn = Connection::open(&self.config)?;
        conn.send_request(&Request::List)?;
        conn.finish_request()?;
        Ok(KeyIter::new(conn.into_reader()))
    }

    // -------------------------------------------------------------------------
    // PUT
    // -------------------------------------------------------------------------

    /// Start storing a blob, returning a write handle
    ///
    /// Write the body through the handle in as many chunks as needed, then
    /// call [`PutHandle::finish`] to obtain the key. Passing the body length
    /// lets the server preallocate; the stored blob is always exactly the
    /// bytes written, whatever the hint said.
    pub fn put(&self, size: Option<u64>) -> Result<PutHandle> {
        let mut conn = Connection::open(&self.config)?;
        let request = match size {
            Some(size) => Request::SizedPut { size },
            None => Request::Put,
        };
        conn.send_request(&request)?;
        Ok(PutHandle::new(conn))
    }

    /// Store everything a reader produces, in one call
    ///
    /// `size` is only a preallocation hint; it never limits or pads what is
    /// transferred.
    pub fn put_reader<R: Read>(&self, mut source: R, size: Option<u64>) -> Result<BlobKey> {
        let mut handle = self.put(size)?;
        io::copy(&mut source, &mut handle)?;
        handle.finish()
    }

    /// Store a byte slice
    pub fn put_bytes(&self, data: &[u8]) -> Result<BlobKey> {
        let mut handle = self.put(Some(data.len() as u64))?;
        handle.write_all(data)?;
        handle.finish()
    }

    /// Store a file, using its on-disk length as the size hint
    pub fn put_file(&self, path: impl AsRef<Path>) -> Result<BlobKey> {
        let file = File::open(path)?;
        let size = file.metadata().map(|m| m.len()).ok();
        self.put_reader(file, size)
    }

    // -------------------------------------------------------------------------
    // GET
    // -------------------------------------------------------------------------

    /// Retrieve a blob as a byte stream
    ///
    /// The blob is not buffered; read it from the returned stream until EOF.
    pub fn get(&self, key: &BlobKey) -> Result<BlobReader> {
        let mut conn = Connection::open(&self.config)?;
        conn.send_request(&Request::Get { key: *key })?;
        conn.finish_request()?;
        Ok(BlobReader::new(conn.into_reader()))
    }

    /// Retrieve a blob together with its exact length
    ///
    /// Fails with [`BerthaError::NotFound`] if the key is not stored.
    pub fn sget(&self, key: &BlobKey) -> Result<(BlobReader, u64)> {
        let mut conn = Connection::open(&self.config)?;
        conn.send_request(&Request::SizedGet { key: *key })?;
        conn.finish_request()?;

        let size = read_size(conn.reader())?.ok_or(BerthaError::NotFound)?;
        Ok((BlobReader::new(conn.into_reader()), size))
    }

    // -------------------------------------------------------------------------
    // SIZE / STATS
    // -------------------------------------------------------------------------

    /// Query the stored length of a blob
    ///
    /// Fails with [`BerthaError::NotFound`] if the key is not stored.
    pub fn size(&self, key: &BlobKey) -> Result<u64> {
        let mut conn = Connection::open(&self.config)?;
        conn.send_request(&Request::Size { key: *key })?;
        conn.finish_request()?;

        read_size(conn.reader())?.ok_or(BerthaError::NotFound)
    }

    /// Fetch the server's counters
    pub fn stats(&self) -> Result<ServerStats> {
        let mut conn = Connection::open(&self.config)?;
        conn.send_request(&Request::Stats)?;
        conn.finish_request()?;

        read_stats(conn.reader())
    }

    // -------------------------------------------------------------------------
    // QUIT
    // -------------------------------------------------------------------------

    /// Tell the server to terminate
    ///
    /// One-way: no response is read.
    pub fn quit(&self) -> Result<()> {
        let mut conn = Connection::open(&self.config)?;
        conn.send_request(&Request::Quit)?;
        conn.flush()?;
        Ok(())
    }
}
