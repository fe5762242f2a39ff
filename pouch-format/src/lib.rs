//! Pouch payload encoding
//!
//! Pouch is the block-framed wire format that carries named, typed data
//! entries down to a device. This crate implements the encoder used by
//! test tooling to produce synthetic payloads: entries are framed, small
//! frames are batched together into shared blocks, and frames too large
//! for a single block are split across a dedicated stream of continuation
//! blocks. The encoder is a pure in-memory transform; decoding happens on
//! the device.

pub mod block;
pub mod builder;
pub mod chunk;
pub mod content_type;
pub mod entry;
pub mod error;
pub mod header;

pub use block::{
    BATCH_STREAM_ID, BLOCK_CAPACITY, BLOCK_HEADER_LEN, BLOCK_SIZE, FLAG_FIRST, FLAG_LAST,
    STREAM_ID_MAX, pack_block,
};
pub use builder::{PouchBuilder, encode_pouch};
pub use chunk::{Fragment, fragments};
pub use content_type::ContentType;
pub use entry::{EncodingMode, Entry, MAX_PATH_LEN};
pub use error::{Error, Result};
pub use header::{POUCH_FORMAT_VERSION, PouchHeader};
