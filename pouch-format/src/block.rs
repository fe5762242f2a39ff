//! Block framing
//!
//! Everything after the pouch header is a sequence of blocks:
//! a 2-byte big-endian length field, one id/flags byte, then the payload.
//! The length field counts the id/flags byte plus the payload, so a
//! decoder can skip whole blocks without understanding their content.
//! The id/flags byte packs a stream id in the low 6 bits and the
//! continuation flags in the top 2.

use crate::error::{Error, Result};

/// Total size of an encoded block, header included
pub const BLOCK_SIZE: usize = 512;

/// 2 bytes for the length field, 1 byte for id/flags
pub const BLOCK_HEADER_LEN: usize = 3;

/// Payload bytes available in one block
pub const BLOCK_CAPACITY: usize = BLOCK_SIZE - BLOCK_HEADER_LEN;

/// Set on the first block of a stream
pub const FLAG_FIRST: u8 = 0x40;

/// Set on the last block of a stream
pub const FLAG_LAST: u8 = 0x80;

/// Highest stream id that fits below the flag bits
pub const STREAM_ID_MAX: u8 = 0x3f;

/// Reserved stream id for batched atomic content
pub const BATCH_STREAM_ID: u8 = 0;

/// Frame `payload` into a single block.
///
/// `stream_id` must fit below the flag bits and `payload` must fit the
/// block capacity; both violations are hard errors rather than silent
/// truncation, since either would corrupt the framing for every block
/// that follows.
pub fn pack_block(payload: &[u8], stream_id: u8, flags: u8) -> Result<Vec<u8>> {
    if stream_id > STREAM_ID_MAX {
        return Err(Error::InvalidStreamId(stream_id));
    }

    if payload.len() > BLOCK_CAPACITY {
        return Err(Error::BlockOverflow {
            actual: payload.len(),
            capacity: BLOCK_CAPACITY,
        });
    }

    // Length field covers the id/flags byte, hence the + 1.
    let length = (payload.len() + 1) as u16;

    let mut block = Vec::with_capacity(BLOCK_HEADER_LEN + payload.len());
    block.extend_from_slice(&length.to_be_bytes());
    block.push(stream_id | flags);
    block.extend_from_slice(payload);

    Ok(block)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pack_layout() {
        let block = pack_block(b"abc", 5, FLAG_FIRST).unwrap();

        assert_eq!(block, [0x00, 0x04, 0x45, b'a', b'b', b'c']);
    }

    #[test]
    fn test_length_field_counts_id_byte() {
        let block = pack_block(&[0xAA; 100], 0, FLAG_FIRST | FLAG_LAST).unwrap();

        assert_eq!(u16::from_be_bytes([block[0], block[1]]), 101);
        assert_eq!(block.len(), BLOCK_HEADER_LEN + 100);
    }

    #[test]
    fn test_empty_payload() {
        let block = pack_block(&[], 1, FLAG_FIRST).unwrap();

        assert_eq!(block, [0x00, 0x01, 0x41]);
    }

    #[test]
    fn test_full_block() {
        let block = pack_block(&[0u8; BLOCK_CAPACITY], 0, FLAG_FIRST | FLAG_LAST).unwrap();

        assert_eq!(block.len(), BLOCK_SIZE);
        assert_eq!(
            u16::from_be_bytes([block[0], block[1]]) as usize,
            BLOCK_CAPACITY + 1
        );
    }

    #[test]
    fn test_payload_over_capacity() {
        let err = pack_block(&[0u8; BLOCK_CAPACITY + 1], 0, 0).unwrap_err();

        assert!(matches!(
            err,
            Error::BlockOverflow {
                actual: 510,
                capacity: 509,
            }
        ));
    }

    #[test]
    fn test_stream_id_collides_with_flags() {
        let err = pack_block(b"x", STREAM_ID_MAX + 1, 0).unwrap_err();

        assert!(matches!(err, Error::InvalidStreamId(0x40)));
    }

    #[test]
    fn test_max_stream_id() {
        let block = pack_block(b"x", STREAM_ID_MAX, FLAG_LAST).unwrap();

        assert_eq!(block[2], 0xbf);
    }
}
