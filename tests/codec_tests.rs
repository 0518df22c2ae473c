//! Codec Tests
//!
//! Tests for request encoding, response field decoding, and key parsing.

use std::io::Cursor;

use bertha::error::BerthaError;
use bertha::protocol::{
    encode_request, read_key, read_size, read_stats, write_request, BlobKey, Opcode, Request,
    KEY_HEX_LEN, KEY_LEN, SIZE_LEN, STATS_LEN,
};

fn test_key() -> BlobKey {
    BlobKey::from_bytes([0xab; KEY_LEN])
}

// =============================================================================
// Opcode Table Tests
// =============================================================================

#[test]
fn test_opcode_values() {
    assert_eq!(Opcode::List as u8, 0);
    assert_eq!(Opcode::Put as u8, 1);
    assert_eq!(Opcode::Get as u8, 2);
    assert_eq!(Opcode::Quit as u8, 3);
    assert_eq!(Opcode::SizedPut as u8, 4);
    assert_eq!(Opcode::SizedGet as u8, 5);
    assert_eq!(Opcode::Size as u8, 6);
    assert_eq!(Opcode::Stats as u8, 7);
}

// =============================================================================
// Request Wire Format Tests
// =============================================================================

#[test]
fn test_wire_format_bare_opcodes() {
    assert_eq!(&encode_request(&Request::List)[..], &[0x00]);
    assert_eq!(&encode_request(&Request::Put)[..], &[0x01]);
    assert_eq!(&encode_request(&Request::Quit)[..], &[0x03]);
    assert_eq!(&encode_request(&Request::Stats)[..], &[0x07]);
}

#[test]
fn test_wire_format_sized_put() {
    let encoded = encode_request(&Request::SizedPut { size: 5 });

    // Expected: [0x04][0x05 0x00 0x00 0x00 0x00 0x00 0x00 0x00]
    //           opcode size hint, little-endian
    assert_eq!(encoded.len(), 1 + SIZE_LEN);
    assert_eq!(encoded[0], 0x04);
    assert_eq!(&encoded[1..], &[0x05, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]);
}

#[test]
fn test_wire_format_sized_put_large_hint() {
    let encoded = encode_request(&Request::SizedPut { size: u64::MAX });
    assert_eq!(&encoded[1..], &[0xFF; SIZE_LEN]);
}

#[test]
fn test_wire_format_keyed_requests() {
    let key = test_key();

    for (request, opcode) in [
        (Request::Get { key }, 0x02),
        (Request::SizedGet { key }, 0x05),
        (Request::Size { key }, 0x06),
    ] {
        let encoded = encode_request(&request);
        assert_eq!(encoded.len(), 1 + KEY_LEN);
        assert_eq!(encoded[0], opcode);
        assert_eq!(&encoded[1..], key.as_bytes());
    }
}

#[test]
fn test_write_request_to_stream() {
    let mut buffer = Vec::new();
    write_request(&mut buffer, &Request::Size { key: test_key() }).unwrap();

    assert_eq!(buffer[0], 0x06);
    assert_eq!(buffer.len(), 1 + KEY_LEN);
}

// =============================================================================
// Key Read Tests
// =============================================================================

#[test]
fn test_read_key() {
    let bytes = [0x5a; KEY_LEN];
    let mut cursor = Cursor::new(bytes.to_vec());

    let key = read_key(&mut cursor).unwrap();
    assert_eq!(key.as_bytes(), &bytes);
}

#[test]
fn test_read_key_truncated() {
    let mut cursor = Cursor::new(vec![0x5a; KEY_LEN - 1]);

    let result = read_key(&mut cursor);
    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("truncated key"));
}

// =============================================================================
// Size Read Tests
// =============================================================================

#[test]
fn test_read_size() {
    let mut cursor = Cursor::new(vec![0x39, 0x30, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]);
    assert_eq!(read_size(&mut cursor).unwrap(), Some(12345));
}

#[test]
fn test_read_size_absent() {
    // Zero bytes before the field means the key is not stored
    let mut cursor = Cursor::new(Vec::new());
    assert_eq!(read_size(&mut cursor).unwrap(), None);
}

#[test]
fn test_read_size_truncated() {
    // 1-7 bytes is malformed, not a missing key
    for len in 1..SIZE_LEN {
        let mut cursor = Cursor::new(vec![0u8; len]);
        let result = read_size(&mut cursor);
        assert!(result.is_err(), "length {} should be malformed", len);
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("truncated size field"));
    }
}

// =============================================================================
// Stats Read Tests
// =============================================================================

#[test]
fn test_read_stats() {
    let mut block = Vec::with_capacity(STATS_LEN);
    for counter in [7u64, 1, 2, 3, 4] {
        block.extend_from_slice(&counter.to_le_bytes());
    }

    let stats = read_stats(&mut Cursor::new(block)).unwrap();
    assert_eq!(stats.cycles, 7);
    assert_eq!(stats.gets, 1);
    assert_eq!(stats.puts, 2);
    assert_eq!(stats.connections_accepted, 3);
    assert_eq!(stats.connections_active, 4);
}

#[test]
fn test_read_stats_truncated() {
    let mut cursor = Cursor::new(vec![0u8; STATS_LEN - 1]);

    let result = read_stats(&mut cursor);
    assert!(result.is_err());
    assert!(result
        .unwrap_err()
        .to_string()
        .contains("truncated stats block"));
}

// =============================================================================
// Key Parsing Tests
// =============================================================================

#[test]
fn test_key_hex_round_trip() {
    let hex = "000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f";
    let key = BlobKey::parse(hex).unwrap();
    assert_eq!(key.to_hex(), hex);
    assert_eq!(key.to_string(), hex);
}

#[test]
fn test_key_bytes_round_trip() {
    let bytes: [u8; KEY_LEN] = std::array::from_fn(|i| (255 - i) as u8);
    let key = BlobKey::from_bytes(bytes);

    let reparsed = BlobKey::parse(&key.to_hex()).unwrap();
    assert_eq!(reparsed.as_bytes(), &bytes);
    assert_eq!(reparsed, key);
}

#[test]
fn test_key_hex_is_lowercase() {
    let key = BlobKey::from_bytes([0xAB; KEY_LEN]);
    assert_eq!(key.to_hex(), "ab".repeat(KEY_LEN));
}

#[test]
fn test_key_rejects_wrong_length() {
    let short = "ab".repeat(31);
    let long = "ab".repeat(33);
    let odd = "a".repeat(63);

    for input in ["", "ab", short.as_str(), long.as_str(), odd.as_str()] {
        let result = BlobKey::parse(input);
        assert!(
            matches!(result, Err(BerthaError::InvalidKey(_))),
            "{:?} should be rejected",
            input
        );
    }
}

#[test]
fn test_key_rejects_non_hex() {
    let mut input = "ab".repeat(KEY_LEN);
    input.replace_range(10..12, "zz");

    let result = BlobKey::parse(&input);
    assert!(matches!(result, Err(BerthaError::InvalidKey(_))));
}

#[test]
fn test_key_from_str() {
    let hex = "ff".repeat(KEY_LEN);
    let key: BlobKey = hex.parse().unwrap();
    assert_eq!(key.as_bytes(), &[0xff; KEY_LEN]);

    assert_eq!(hex.len(), KEY_HEX_LEN);
    assert!("not a key".parse::<BlobKey>().is_err());
}
