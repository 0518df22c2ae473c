//! Blob key definitions
//!
//! A key is the 32-byte content hash the server assigns to a stored blob.
//! On the wire it travels as raw bytes; everywhere user-facing it is a
//! 64-character lowercase hex string.

use std::fmt;
use std::str::FromStr;

use crate::error::{BerthaError, Result};

/// Length of a blob key in raw bytes
pub const KEY_LEN: usize = 32;

/// Length of a blob key in hex characters
pub const KEY_HEX_LEN: usize = 2 * KEY_LEN;

/// A server-assigned content hash identifying a stored blob
///
/// Keys are opaque to the client; it only transmits and receives them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlobKey([u8; KEY_LEN]);

impl BlobKey {
    /// Wrap raw key bytes received from the server
    pub fn from_bytes(bytes: [u8; KEY_LEN]) -> Self {
        Self(bytes)
    }

    /// Parse a 64-character hex string into a key
    ///
    /// Rejects anything that is not exactly [`KEY_HEX_LEN`] hex digits.
    pub fn parse(s: &str) -> Result<Self> {
        if s.len() != KEY_HEX_LEN {
            return Err(BerthaError::InvalidKey(format!(
                "expected {} hex characters, got {}",
                KEY_HEX_LEN,
                s.len()
            )));
        }

        let mut bytes = [0u8; KEY_LEN];
        hex::decode_to_slice(s, &mut bytes)
            .map_err(|e| BerthaError::InvalidKey(format!("{}: {:?}", e, s)))?;

        Ok(Self(bytes))
    }

    /// The raw wire representation
    pub fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.0
    }

    /// The canonical lowercase hex representation
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl FromStr for BlobKey {
    type Err = BerthaError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for BlobKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

impl AsRef<[u8]> for BlobKey {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}
