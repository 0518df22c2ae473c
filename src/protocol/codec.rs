//! Protocol codec
//!
//! Encoding and decoding functions for the wire protocol.
//!
//! Requests are tiny fixed-layout headers; responses are read straight off
//! the stream. The only subtlety is on the read side: a SIZE or SGET
//! response that ends before a single size byte arrives means "not stored",
//! while one that ends partway through the field is a framing violation.
//! [`read_size`] keeps those apart by exact byte count.

use std::io::{ErrorKind, Read, Write};

use bytes::{Buf, BufMut, Bytes, BytesMut};

use crate::error::{BerthaError, Result};
use super::{BlobKey, Request, ServerStats, KEY_LEN};

/// Size of the length field in SPUT requests and SIZE/SGET responses
pub const SIZE_LEN: usize = 8;

/// Size of the STATS response block: five 8-byte counters
pub const STATS_LEN: usize = 5 * SIZE_LEN;

// =============================================================================
// Request Encoding
// =============================================================================

/// Encode a request header to bytes
///
/// Format: opcode (1), then for SPUT the size hint (8 LE), then for
/// GET/SGET/SIZE the raw key (32). Nothing else; any body is streamed
/// separately by the caller.
pub fn encode_request(request: &Request) -> Bytes {
    let mut buf = BytesMut::with_capacity(1 + KEY_LEN);
    buf.put_u8(request.opcode() as u8);

    match request {
        Request::SizedPut { size } => buf.put_u64_le(*size),
        Request::Get { key } | Request::SizedGet { key } | Request::Size { key } => {
            buf.put_slice(key.as_bytes())
        }
        Request::List | Request::Put | Request::Stats | Request::Quit => {}
    }

    buf.freeze()
}

/// Write a request header to a stream
pub fn write_request<W: Write>(writer: &mut W, request: &Request) -> Result<()> {
    writer.write_all(&encode_request(request))?;
    Ok(())
}

// =============================================================================
// Response Decoding
// =============================================================================

/// Read a 32-byte blob key from a stream
///
/// The PUT/SPUT response. Anything short of 32 bytes is a framing violation.
pub fn read_key<R: Read>(reader: &mut R) -> Result<BlobKey> {
    let mut buf = [0u8; KEY_LEN];
    let filled = read_up_to(reader, &mut buf)?;

    if filled != KEY_LEN {
        return Err(BerthaError::Protocol(format!(
            "truncated key: expected {} bytes, got {}",
            KEY_LEN, filled
        )));
    }

    Ok(BlobKey::from_bytes(buf))
}

/// Read an 8-byte little-endian size field from a stream
///
/// Returns `None` if the stream ends before any size byte arrives, which
/// the server uses to signal an unknown key. A stream that ends after 1-7
/// bytes is malformed.
pub fn read_size<R: Read>(reader: &mut R) -> Result<Option<u64>> {
    let mut buf = [0u8; SIZE_LEN];
    let filled = read_up_to(reader, &mut buf)?;

    match filled {
        0 => Ok(None),
        SIZE_LEN => Ok(Some(u64::from_le_bytes(buf))),
        n => Err(BerthaError::Protocol(format!(
            "truncated size field: expected {} bytes, got {}",
            SIZE_LEN, n
        ))),
    }
}

/// Read the 40-byte STATS block from a stream
///
/// Counter order: cycles, GETs, PUTs, connections accepted, connections
/// active. Any other length is a framing violation.
pub fn read_stats<R: Read>(reader: &mut R) -> Result<ServerStats> {
    let mut buf = [0u8; STATS_LEN];
    let filled = read_up_to(reader, &mut buf)?;

    if filled != STATS_LEN {
        return Err(BerthaError::Protocol(format!(
            "truncated stats block: expected {} bytes, got {}",
            STATS_LEN, filled
        )));
    }

    let mut block = &buf[..];
    Ok(ServerStats {
        cycles: block.get_u64_le(),
        gets: block.get_u64_le(),
        puts: block.get_u64_le(),
        connections_accepted: block.get_u64_le(),
        connections_active: block.get_u64_le(),
    })
}

// =============================================================================
// Read helpers
// =============================================================================

/// Fill `buf` from the stream, stopping early at EOF
///
/// Returns how many bytes were read. Unlike `read_exact`, a clean EOF is
/// not an error; callers decide what a short count means.
fn read_up_to<R: Read>(reader: &mut R, buf: &mut [u8]) -> Result<usize> {
    let mut filled = 0;

    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(ref e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        }
    }

    Ok(filled)
}
