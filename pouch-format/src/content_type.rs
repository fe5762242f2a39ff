//! Content type table shared with the device-side decoder

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Content types understood by the device decoder.
///
/// The set is closed: wire codes are fixed in the firmware, and extending
/// the table is a coordinated change with the decoder. Anything outside
/// this set must be rejected rather than forwarded with a default code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentType {
    /// `text/octet-stream`
    OctetStream,
    /// `application/json`
    Json,
    /// `application/cbor`
    Cbor,
}

impl ContentType {
    /// Wire code carried in the entry frame.
    pub const fn code(self) -> u16 {
        match self {
            ContentType::OctetStream => 42,
            ContentType::Json => 50,
            ContentType::Cbor => 60,
        }
    }

    /// MIME name as it appears in test fixtures.
    pub const fn as_str(self) -> &'static str {
        match self {
            ContentType::OctetStream => "text/octet-stream",
            ContentType::Json => "application/json",
            ContentType::Cbor => "application/cbor",
        }
    }
}

impl FromStr for ContentType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "text/octet-stream" => Ok(ContentType::OctetStream),
            "application/json" => Ok(ContentType::Json),
            "application/cbor" => Ok(ContentType::Cbor),
            other => Err(Error::UnknownContentType(other.to_string())),
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
