//! Entry framing
//!
//! An entry is a path, a content type and a body. On the wire it becomes
//! a frame of `[data length][content type code][path length][path][data]`,
//! where the leading data length is only present in atomic mode. Streamed
//! frames drop it because the terminating block of the stream conveys
//! where the data ends.

use crate::content_type::ContentType;
use crate::error::{Error, Result};

/// Maximum path length the single-byte path length field can express
pub const MAX_PATH_LEN: usize = u8::MAX as usize;

/// How an entry is framed inside the payload.
///
/// Small entries use length-prefixed atomic frames and are batched into
/// shared blocks. Entries too large for a single block are framed without
/// the length prefix and split across a dedicated block stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodingMode {
    /// Length-prefixed frame, batched into shared blocks
    Atomic,
    /// Length-free frame, split across a dedicated stream
    Streamed,
}

/// A named, typed piece of data addressed to the device
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Device-side path, e.g. `/.s/lorem`
    pub path: String,
    /// Content type forwarded to the device decoder
    pub content_type: ContentType,
    /// Raw entry body
    pub data: Vec<u8>,
}

impl Entry {
    /// Create an entry with a binary body.
    pub fn new(path: impl Into<String>, content_type: ContentType, data: Vec<u8>) -> Self {
        Self {
            path: path.into(),
            content_type,
            data,
        }
    }

    /// Create an entry with a UTF-8 text body.
    pub fn text(path: impl Into<String>, content_type: ContentType, body: &str) -> Self {
        Self::new(path, content_type, body.as_bytes().to_vec())
    }

    /// Size of the fixed frame header: content type code, path length
    /// byte and the path itself. Present in both encoding modes.
    pub(crate) fn header_len(&self) -> usize {
        2 + 1 + self.path.len()
    }

    /// Frame size in the given mode, without encoding.
    pub fn encoded_len(&self, mode: EncodingMode) -> usize {
        let length_field = match mode {
            EncodingMode::Atomic => 2,
            EncodingMode::Streamed => 0,
        };

        length_field + self.header_len() + self.data.len()
    }

    /// Serialize the entry frame.
    ///
    /// Length fields count encoded bytes; paths and text bodies are UTF-8
    /// before any length is computed.
    pub fn encode(&self, mode: EncodingMode) -> Result<Vec<u8>> {
        let path = self.path.as_bytes();
        let path_len =
            u8::try_from(path.len()).map_err(|_| Error::PathTooLong(path.len()))?;

        let mut frame = Vec::with_capacity(self.encoded_len(mode));

        if mode == EncodingMode::Atomic {
            let data_len =
                u16::try_from(self.data.len()).map_err(|_| Error::DataTooLong(self.data.len()))?;
            frame.extend_from_slice(&data_len.to_be_bytes());
        }

        frame.extend_from_slice(&self.content_type.code().to_be_bytes());
        frame.push(path_len);
        frame.extend_from_slice(path);
        frame.extend_from_slice(&self.data);

        Ok(frame)
    }
}
