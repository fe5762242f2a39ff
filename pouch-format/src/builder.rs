//! Batching payload builder
//!
//! Drives the whole encode. Entries are framed one at a time, in input
//! order: small frames accumulate in a shared block (stream id 0) that is
//! flushed whenever the next frame would overflow it, while frames too
//! large for a single block are re-framed without the length prefix and
//! split across a dedicated stream of blocks. Stream ids are handed out
//! in strictly increasing order and never reused within one payload.

use tracing::{debug, trace};

use crate::block::{
    BATCH_STREAM_ID, BLOCK_CAPACITY, FLAG_FIRST, FLAG_LAST, STREAM_ID_MAX, pack_block,
};
use crate::chunk::fragments;
use crate::entry::{EncodingMode, Entry};
use crate::error::{Error, Result};
use crate::header::PouchHeader;

/// Incremental pouch payload builder.
///
/// The builder owns the run state of one encode: the growing payload
/// (header included), the shared-block accumulation buffer and the
/// next-stream-id counter. Entries are encoded as they are added, and
/// [`finish`](Self::finish) flushes the pending shared block.
///
/// # Examples
///
/// ```
/// use pouch_format::{ContentType, Entry, PouchBuilder};
///
/// let mut builder = PouchBuilder::new("id123")?;
///
/// builder.add_entry(&Entry::text(
///     "/.s/greeting",
///     ContentType::Json,
///     r#"{"hello":"world"}"#,
/// ))?;
///
/// let payload = builder.finish()?;
/// assert!(payload.starts_with(&[0x82, 0x01, 0x82, 0x00]));
/// # Ok::<(), pouch_format::Error>(())
/// ```
#[derive(Debug)]
pub struct PouchBuilder {
    /// Growing payload, header included
    payload: Vec<u8>,
    /// Accumulation buffer for the shared (stream id 0) block
    batch: Vec<u8>,
    /// Next id handed to a streamed entry
    next_stream_id: u8,
}

impl PouchBuilder {
    /// Start a payload addressed to `device_id`.
    pub fn new(device_id: &str) -> Result<Self> {
        let payload = PouchHeader::new(device_id).encode()?;

        Ok(Self {
            payload,
            batch: Vec::new(),
            next_stream_id: 1,
        })
    }

    /// Append one entry, batching or streaming it based on the size of
    /// its atomic frame.
    pub fn add_entry(&mut self, entry: &Entry) -> Result<&mut Self> {
        if entry.encoded_len(EncodingMode::Atomic) > BLOCK_CAPACITY {
            self.stream_entry(entry)?;
        } else {
            self.batch_entry(entry)?;
        }

        Ok(self)
    }

    /// Flush the pending shared block and return the finished payload.
    pub fn finish(mut self) -> Result<Vec<u8>> {
        self.flush_batch()?;

        debug!(bytes = self.payload.len(), "payload finished");

        Ok(self.payload)
    }

    /// Split an oversized entry across a dedicated block stream.
    fn stream_entry(&mut self, entry: &Entry) -> Result<()> {
        let header_len = entry.header_len();
        if header_len > BLOCK_CAPACITY {
            // The first fragment would cut the frame header itself in
            // two, which the device decoder cannot reassemble.
            return Err(Error::EntryHeaderTooLarge {
                path: entry.path.clone(),
                actual: header_len,
                capacity: BLOCK_CAPACITY,
            });
        }

        if self.next_stream_id > STREAM_ID_MAX {
            return Err(Error::StreamIdsExhausted);
        }

        // Streamed entries never share a block with batched content.
        self.flush_batch()?;

        let frame = entry.encode(EncodingMode::Streamed)?;
        let stream_id = self.next_stream_id;
        self.next_stream_id += 1;

        debug!(
            stream_id,
            path = %entry.path,
            frame_len = frame.len(),
            "streaming oversized entry"
        );

        for fragment in fragments(&frame) {
            let block = pack_block(fragment.data, stream_id, fragment.flags)?;
            self.payload.extend_from_slice(&block);
        }

        Ok(())
    }

    /// Accumulate a small entry into the shared block.
    fn batch_entry(&mut self, entry: &Entry) -> Result<()> {
        let frame = entry.encode(EncodingMode::Atomic)?;

        if self.batch.len() + frame.len() > BLOCK_CAPACITY {
            self.flush_batch()?;
        }

        trace!(
            path = %entry.path,
            frame_len = frame.len(),
            batched = self.batch.len(),
            "batching entry"
        );

        self.batch.extend_from_slice(&frame);

        Ok(())
    }

    /// Emit the shared buffer as one stream-id-0 block, if non-empty.
    fn flush_batch(&mut self) -> Result<()> {
        if self.batch.is_empty() {
            return Ok(());
        }

        let block = pack_block(&self.batch, BATCH_STREAM_ID, FLAG_FIRST | FLAG_LAST)?;
        self.payload.extend_from_slice(&block);
        self.batch.clear();

        Ok(())
    }
}

/// Encode `entries` into a single payload addressed to `device_id`.
///
/// One-shot form of [`PouchBuilder`]; entries are processed in input
/// order and the result is deterministic for a given input.
pub fn encode_pouch(device_id: &str, entries: &[Entry]) -> Result<Vec<u8>> {
    let mut builder = PouchBuilder::new(device_id)?;

    for entry in entries {
        builder.add_entry(entry)?;
    }

    builder.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content_type::ContentType;

    fn header_len(device_id: &str) -> usize {
        PouchHeader::new(device_id).encode().unwrap().len()
    }

    #[test]
    fn test_small_entries_share_one_block() {
        let entries = [
            Entry::text("/a", ContentType::Json, "one"),
            Entry::text("/b", ContentType::Json, "two"),
        ];

        let payload = encode_pouch("dev", &entries).unwrap();
        let blocks = &payload[header_len("dev")..];

        let frame_a = entries[0].encode(EncodingMode::Atomic).unwrap();
        let frame_b = entries[1].encode(EncodingMode::Atomic).unwrap();

        assert_eq!(
            u16::from_be_bytes([blocks[0], blocks[1]]) as usize,
            frame_a.len() + frame_b.len() + 1
        );
        assert_eq!(blocks[2], FLAG_FIRST | FLAG_LAST);
        assert_eq!(&blocks[3..3 + frame_a.len()], frame_a.as_slice());
        assert_eq!(&blocks[3 + frame_a.len()..], frame_b.as_slice());
    }

    #[test]
    fn test_stream_ids_increase() {
        let big = Entry::new("/big", ContentType::OctetStream, vec![0x55; 600]);

        let payload = encode_pouch("dev", &[big.clone(), big]).unwrap();
        let blocks = &payload[header_len("dev")..];

        // Two streams of two blocks each.
        let mut ids = Vec::new();
        let mut offset = 0;
        while offset < blocks.len() {
            let length =
                u16::from_be_bytes([blocks[offset], blocks[offset + 1]]) as usize;
            ids.push(blocks[offset + 2] & STREAM_ID_MAX);
            offset += 2 + length;
        }

        assert_eq!(ids, [1, 1, 2, 2]);
    }

    #[test]
    fn test_stream_ids_exhausted() {
        let big = Entry::new("/big", ContentType::OctetStream, vec![0; 600]);
        let mut builder = PouchBuilder::new("dev").unwrap();

        for _ in 0..STREAM_ID_MAX {
            builder.add_entry(&big).unwrap();
        }

        let err = builder.add_entry(&big).unwrap_err();
        assert!(matches!(err, Error::StreamIdsExhausted));
    }

    #[test]
    fn test_empty_entry_list_is_header_only() {
        let payload = encode_pouch("dev", &[]).unwrap();

        assert_eq!(payload.len(), header_len("dev"));
    }
}
