//! Pouch header encoding
//!
//! Every payload starts with a small CBOR header: an array of the format
//! version and an encoding-info array of the encoding tag and the device
//! id. There is no length prefix; CBOR framing is self-describing, so the
//! device decoder knows where the first block begins.

use ciborium::value::Value;

use crate::error::Result;

/// Pouch format version emitted in the header
pub const POUCH_FORMAT_VERSION: u8 = 1;

/// Encoding tag for plaintext payloads, the only kind the generator emits
const ENCODING_PLAINTEXT: u8 = 0;

/// Session header prefixed to every payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PouchHeader {
    /// Device the payload is addressed to
    pub device_id: String,
}

impl PouchHeader {
    /// Create a header for `device_id`.
    pub fn new(device_id: impl Into<String>) -> Self {
        Self {
            device_id: device_id.into(),
        }
    }

    /// Encode the header as `[version, [encoding, device_id]]`.
    pub fn encode(&self) -> Result<Vec<u8>> {
        let header = Value::Array(vec![
            Value::Integer(POUCH_FORMAT_VERSION.into()),
            Value::Array(vec![
                Value::Integer(ENCODING_PLAINTEXT.into()),
                Value::Text(self.device_id.clone()),
            ]),
        ]);

        let mut buf = Vec::new();
        ciborium::ser::into_writer(&header, &mut buf)?;

        Ok(buf)
    }
}
