//! Frame serialization and parsing.
//!
//! A frame packages an encoded payload with everything needed to decode it:
//! - Length prefix: size of the header in bytes
//! - Header: frequency table, padding count, checksum of the original data
//! - Payload: packed code bits
//!
//! # Frame Format
//!
//! ```text
//! +----------------------+
//! | header_len (4)       |  u32 little-endian
//! +----------------------+
//! | header               |  JSON record, header_len bytes
//! | (variable)           |  {"version":1,"padding":4,"crc32":..,"freq":[[97,3],[98,1]]}
//! +----------------------+
//! | payload              |  everything after the header
//! | (variable)           |
//! +----------------------+
//! ```
//!
//! `freq` lists `(symbol, count)` pairs in ascending symbol order. The
//! `version` field pins the header layout; a reader rejects versions it does
//! not know.

use serde::{Deserialize, Serialize};

use crate::codec::EncodedPayload;
use crate::error::{FrameFormatError, Result};
use crate::frequency::FrequencyTable;

/// Header layout version written by this crate
pub const HEADER_VERSION: u32 = 1;

/// Size of the header length prefix in bytes
pub const LENGTH_PREFIX_SIZE: usize = 4;

/// Largest legal padding count
const MAX_PADDING: u8 = 7;

/// Wire form of the header.
#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct Header {
    version: u32,
    padding: u8,
    crc32: u32,
    freq: Vec<(u8, u64)>,
}

/// A parsed frame: everything needed to rebuild the original bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// Symbol counts of the original data
    pub table: FrequencyTable,

    /// Packed code bits and their padding
    pub payload: EncodedPayload,

    /// CRC32 of the original data
    pub checksum: u32,
}

impl Frame {
    /// The frame for a zero-length input: no symbols, no payload, no padding.
    pub fn empty() -> Self {
        Self {
            table: FrequencyTable::default(),
            payload: EncodedPayload::default(),
            checksum: crc32fast::hash(&[]),
        }
    }

    /// Serialize this frame into its byte layout.
    ///
    /// Nothing is written unless the frame would parse back unchanged.
    ///
    /// # Errors
    /// - `FrameFormatError::InvalidPadding` if padding is above 7
    /// - `FrameFormatError::UnexpectedPayload` if an empty table carries data
    /// - `FrameFormatError::Serialize` if the header cannot be encoded or is
    ///   longer than a `u32` can describe
    pub fn serialize(&self) -> Result<Vec<u8>> {
        check_layout(&self.table, &self.payload.bytes, self.payload.padding)?;

        let header = Header {
            version: HEADER_VERSION,
            padding: self.payload.padding,
            crc32: self.checksum,
            freq: self.table.iter().collect(),
        };
        let header_bytes = serde_json::to_vec(&header)
            .map_err(|e| FrameFormatError::Serialize(e.to_string()))?;
        let header_len = u32::try_from(header_bytes.len()).map_err(|_| {
            FrameFormatError::Serialize(format!("header of {} bytes", header_bytes.len()))
        })?;

        let total_size = LENGTH_PREFIX_SIZE + header_bytes.len() + self.payload.bytes.len();
        let mut frame = Vec::with_capacity(total_size);
        frame.extend_from_slice(&header_len.to_le_bytes());
        frame.extend_from_slice(&header_bytes);
        frame.extend_from_slice(&self.payload.bytes);

        Ok(frame)
    }

    /// Parse a frame from bytes.
    ///
    /// # Errors
    /// - `FrameFormatError::FrameTooShort` if the length prefix is incomplete
    /// - `FrameFormatError::HeaderLengthExceeded` if the header runs past the end
    /// - `FrameFormatError::InvalidHeader` if the header is not a valid record
    /// - `FrameFormatError::UnsupportedVersion` for an unknown header version
    /// - `FrameFormatError::InvalidPadding` if padding is above 7
    /// - `FrameFormatError::DuplicateSymbol`, `ZeroCount` or `CountOverflow`
    ///   for a bad table
    /// - `FrameFormatError::UnexpectedPayload` if an empty table carries data
    pub fn parse(bytes: &[u8]) -> Result<Self> {
        let Some((prefix, rest)) = bytes.split_first_chunk::<LENGTH_PREFIX_SIZE>() else {
            return Err(FrameFormatError::FrameTooShort {
                required: LENGTH_PREFIX_SIZE,
                actual: bytes.len(),
            }
            .into());
        };

        let declared = u32::from_le_bytes(*prefix) as usize;
        if declared > rest.len() {
            return Err(FrameFormatError::HeaderLengthExceeded {
                declared,
                available: rest.len(),
            }
            .into());
        }
        let (header_bytes, payload) = rest.split_at(declared);

        let header: Header = serde_json::from_slice(header_bytes)
            .map_err(|e| FrameFormatError::InvalidHeader(e.to_string()))?;

        if header.version != HEADER_VERSION {
            return Err(FrameFormatError::UnsupportedVersion {
                expected: HEADER_VERSION,
                found: header.version,
            }
            .into());
        }

        let table = FrequencyTable::from_pairs(header.freq)?;
        check_layout(&table, payload, header.padding)?;

        Ok(Self {
            table,
            payload: EncodedPayload {
                bytes: payload.to_vec(),
                padding: header.padding,
            },
            checksum: header.crc32,
        })
    }
}

/// Payload rules shared by `serialize` and `parse`.
fn check_layout(table: &FrequencyTable, payload: &[u8], padding: u8) -> Result<()> {
    if padding > MAX_PADDING {
        return Err(FrameFormatError::InvalidPadding(padding).into());
    }
    if table.is_empty() && (!payload.is_empty() || padding != 0) {
        return Err(FrameFormatError::UnexpectedPayload {
            payload_len: payload.len(),
            padding,
        }
        .into());
    }
    Ok(())
}
