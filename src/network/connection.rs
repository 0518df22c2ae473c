//! Per-operation connection
//!
//! Wraps one TCP stream for the duration of a single request/response
//! exchange.

use std::io::{BufReader, BufWriter, Write};
use std::net::{Shutdown, TcpStream};

use crate::config::Config;
use crate::error::Result;
use crate::protocol::{write_request, Request};

use super::connect;

/// One request/response exchange over one TCP stream
///
/// The stream is used strictly half-duplex: the request (header plus any
/// body) goes out first, [`finish_request`](Connection::finish_request)
/// half-closes the write side, and only then is the response read. The
/// socket is closed when the connection (or the reader split off it) is
/// dropped, on success and failure alike.
pub struct Connection {
    /// TCP stream reader (buffered for efficiency)
    reader: BufReader<TcpStream>,

    /// TCP stream writer (buffered for efficiency)
    writer: BufWriter<TcpStream>,

    /// Peer address for logging
    peer_addr: String,
}

impl Connection {
    /// Open a connection to the configured server
    ///
    /// Applies the configured socket options before any bytes move.
    pub fn open(config: &Config) -> Result<Self> {
        let stream = connect(config)?;

        if config.nodelay {
            stream.set_nodelay(true)?;
        }
        stream.set_read_timeout(config.read_timeout)?;
        stream.set_write_timeout(config.write_timeout)?;

        let peer_addr = stream
            .peer_addr()
            .map(|a| a.to_string())
            .unwrap_or_else(|_| "unknown".to_string());

        // Clone stream for separate read/write handles
        let read_stream = stream.try_clone()?;
        let write_stream = stream;

        Ok(Self {
            reader: BufReader::new(read_stream),
            writer: BufWriter::new(write_stream),
            peer_addr,
        })
    }

    /// Write a request header into the send buffer
    pub fn send_request(&mut self, request: &Request) -> Result<()> {
        tracing::trace!("sending {:?} to {}", request.opcode(), self.peer_addr);
        write_request(&mut self.writer, request)
    }

    /// Flush everything written so far and half-close the write side
    ///
    /// This is how the server learns the request body has ended. No
    /// response byte may be read before this.
    pub fn finish_request(&mut self) -> Result<()> {
        self.writer.flush()?;
        self.writer.get_ref().shutdown(Shutdown::Write)?;
        tracing::trace!("write side closed to {}", self.peer_addr);
        Ok(())
    }

    /// The buffered response reader
    pub fn reader(&mut self) -> &mut BufReader<TcpStream> {
        &mut self.reader
    }

    /// Give up the write side and keep only the response reader
    ///
    /// Used by operations whose response is an open-ended stream. The
    /// socket stays open until the returned reader is dropped.
    pub fn into_reader(self) -> BufReader<TcpStream> {
        self.reader
    }

    /// Get the peer address string
    pub fn peer_addr(&self) -> &str {
        &self.peer_addr
    }
}

/// Body bytes for PUT are written straight through the connection
impl Write for Connection {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.writer.write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.writer.flush()
    }
}
