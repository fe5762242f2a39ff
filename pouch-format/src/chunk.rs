//! Splitting oversized entry frames into block-sized fragments

use crate::block::{BLOCK_CAPACITY, FLAG_FIRST, FLAG_LAST};

/// One block-sized slice of a streamed entry frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fragment<'a> {
    /// Fragment bytes, at most [`BLOCK_CAPACITY`] of them
    pub data: &'a [u8],
    /// Continuation flags for the block carrying this fragment
    pub flags: u8,
}

/// Split an encoded entry frame into in-order, block-sized fragments.
///
/// The first fragment carries [`FLAG_FIRST`], the last carries
/// [`FLAG_LAST`], and a frame that fits a single fragment carries both.
/// Intermediate fragments carry no flags. An empty frame yields no
/// fragments; callers keep zero-length entries on the batched path, where
/// the atomic length field covers them.
///
/// Pure function of the input: calling it again on the same frame
/// reproduces the same sequence.
pub fn fragments(frame: &[u8]) -> Vec<Fragment<'_>> {
    let count = frame.len().div_ceil(BLOCK_CAPACITY);
    let mut out = Vec::with_capacity(count);

    for (index, data) in frame.chunks(BLOCK_CAPACITY).enumerate() {
        let mut flags = 0;
        if index == 0 {
            flags |= FLAG_FIRST;
        }
        if index == count - 1 {
            flags |= FLAG_LAST;
        }

        out.push(Fragment { data, flags });
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_fragment_carries_both_flags() {
        let frame = vec![0xAB; 100];
        let fragments = fragments(&frame);

        assert_eq!(fragments.len(), 1);
        assert_eq!(fragments[0].data, &frame[..]);
        assert_eq!(fragments[0].flags, FLAG_FIRST | FLAG_LAST);
    }

    #[test]
    fn test_exactly_capacity_is_one_fragment() {
        let frame = vec![0x01; BLOCK_CAPACITY];
        let fragments = fragments(&frame);

        assert_eq!(fragments.len(), 1);
        assert_eq!(fragments[0].flags, FLAG_FIRST | FLAG_LAST);
    }

    #[test]
    fn test_one_byte_over_capacity_splits() {
        let frame = vec![0x02; BLOCK_CAPACITY + 1];
        let fragments = fragments(&frame);

        assert_eq!(fragments.len(), 2);
        assert_eq!(fragments[0].data.len(), BLOCK_CAPACITY);
        assert_eq!(fragments[0].flags, FLAG_FIRST);
        assert_eq!(fragments[1].data.len(), 1);
        assert_eq!(fragments[1].flags, FLAG_LAST);
    }

    #[test]
    fn test_three_fragments() {
        let frame = vec![0x03; 1200];
        let fragments = fragments(&frame);

        let sizes: Vec<usize> = fragments.iter().map(|f| f.data.len()).collect();
        let flags: Vec<u8> = fragments.iter().map(|f| f.flags).collect();

        assert_eq!(sizes, [509, 509, 182]);
        assert_eq!(flags, [0x40, 0x00, 0x80]);
    }

    #[test]
    fn test_empty_frame_yields_no_fragments() {
        assert!(fragments(&[]).is_empty());
    }

    #[test]
    fn test_concatenation_reproduces_frame() {
        let frame: Vec<u8> = (0..2000u32).map(|i| i as u8).collect();

        let joined: Vec<u8> = fragments(&frame)
            .iter()
            .flat_map(|f| f.data.iter().copied())
            .collect();

        assert_eq!(joined, frame);
    }

    #[test]
    fn test_restartable() {
        let frame = vec![0x04; 1500];

        assert_eq!(fragments(&frame), fragments(&frame));
    }
}
