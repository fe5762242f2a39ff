//! Error types for pouch encoding

use thiserror::Error;

/// Result type for pouch operations
pub type Result<T> = std::result::Result<T, Error>;

/// Pouch encoding error types
#[derive(Error, Debug)]
pub enum Error {
    /// Content type not present in the table shared with the device decoder
    #[error("Unknown content type: {0}")]
    UnknownContentType(String),

    /// Entry path does not fit the single-byte path length field
    #[error("Entry path is {0} bytes, limit is 255")]
    PathTooLong(usize),

    /// Entry data does not fit the atomic frame's length field
    #[error("Entry data is {0} bytes, limit is 65535 for an atomic frame")]
    DataTooLong(usize),

    /// Computed block payload exceeds block capacity
    #[error("Block payload is {actual} bytes, capacity is {capacity}")]
    BlockOverflow { actual: usize, capacity: usize },

    /// Stream id collides with the flag bits of the id/flags byte
    #[error("Stream id {0:#04x} does not fit below the flag bits")]
    InvalidStreamId(u8),

    /// All stream ids below the flag bits have been handed out
    #[error("Stream ids exhausted, at most 63 streamed entries per payload")]
    StreamIdsExhausted,

    /// An entry's fixed frame header alone exceeds block capacity
    #[error("Entry header for {path:?} is {actual} bytes, capacity is {capacity}")]
    EntryHeaderTooLarge {
        path: String,
        actual: usize,
        capacity: usize,
    },

    /// CBOR serialization of the pouch header failed
    #[error("Header encoding failed: {0}")]
    HeaderEncoding(#[from] ciborium::ser::Error<std::io::Error>),
}
