//! Protocol Module
//!
//! Defines the wire protocol spoken to a Bertha server.
//!
//! ## Protocol Format
//!
//! One TCP connection per operation. The client writes the request, shuts
//! down its write side, then reads the response.
//!
//! ### Request Format
//! ```text
//! ┌──────────┬───────────────┬──────────────┬──────────────┐
//! │ Op (1)   │ [Size (8 LE)] │ [Key (32)]   │ [Body ...]   │
//! └──────────┴───────────────┴──────────────┴──────────────┘
//! ```
//!
//! ### Opcodes
//! - 0x00: LIST  - no fields; response: concatenated 32-byte keys to EOF
//! - 0x01: PUT   - body; response: 32-byte key of the stored blob
//! - 0x02: GET   - key; response: raw blob bytes to EOF
//! - 0x03: QUIT  - no fields; no response
//! - 0x04: SPUT  - size hint + body; response: 32-byte key
//! - 0x05: SGET  - key; response: size (8 LE) then blob bytes to EOF
//! - 0x06: SIZE  - key; response: size (8 LE)
//! - 0x07: STATS - no fields; response: five 8-byte LE counters
//!
//! A SIZE or SGET response of zero bytes means the key is not stored.

mod codec;
mod key;
mod request;
mod stats;

pub use codec::{encode_request, read_key, read_size, read_stats, write_request, SIZE_LEN, STATS_LEN};
pub use key::{BlobKey, KEY_HEX_LEN, KEY_LEN};
pub use request::{Opcode, Request};
pub use stats::ServerStats;
