//! Request definitions
//!
//! Represents requests sent to the server.

use super::BlobKey;

/// Operation codes, sent as the first byte of every request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Opcode {
    List = 0x00,
    Put = 0x01,
    Get = 0x02,
    Quit = 0x03,
    SizedPut = 0x04,
    SizedGet = 0x05,
    Size = 0x06,
    Stats = 0x07,
}

/// A request header, before any streamed body bytes
#[derive(Debug, Clone)]
pub enum Request {
    /// List all stored keys
    List,

    /// Store a blob of unknown length (body follows)
    Put,

    /// Store a blob, hinting its length to the server (body follows)
    ///
    /// The hint lets the server preallocate; the stored blob is whatever
    /// the body actually contains, even if that differs from the hint.
    SizedPut { size: u64 },

    /// Retrieve a blob by key
    Get { key: BlobKey },

    /// Retrieve a blob by key, with its exact length up front
    SizedGet { key: BlobKey },

    /// Query the stored length of a blob
    Size { key: BlobKey },

    /// Fetch server counters
    Stats,

    /// Tell the server to terminate
    Quit,
}

impl Request {
    /// Get the request's opcode
    pub fn opcode(&self) -> Opcode {
        match self {
            Request::List => Opcode::List,
            Request::Put => Opcode::Put,
            Request::SizedPut { .. } => Opcode::SizedPut,
            Request::Get { .. } => Opcode::Get,
            Request::SizedGet { .. } => Opcode::SizedGet,
            Request::Size { .. } => Opcode::Size,
            Request::Stats => Opcode::Stats,
            Request::Quit => Opcode::Quit,
        }
    }
}
