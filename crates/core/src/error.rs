//! Error types for the huffpack codec.
//!
//! All operations return structured errors rather than panicking. Every
//! failure is reported at the point of detection and propagated unchanged;
//! nothing is retried or silently repaired.

use thiserror::Error;

/// Top-level error type for all codec operations.
///
/// Each variant corresponds to a specific failure domain:
/// - Tree/code construction: empty alphabet, malformed tree
/// - Bit stream: unknown symbol on encode, truncated stream on decode
/// - Framing: header length or field validation
/// - Integrity: checksum mismatch after decoding
/// - I/O and configuration: used by the command-line front end
#[derive(Debug, Error)]
pub enum Error {
    /// Tree build attempted on a frequency table with no entries
    #[error("empty alphabet: cannot build a huffman tree from an empty frequency table")]
    EmptyAlphabet,

    /// Tree violates a structural invariant while generating codes
    #[error("malformed huffman tree: {reason}")]
    MalformedTree { reason: String },

    /// Input byte has no entry in the code table
    #[error("symbol {symbol:#04x} has no code in the code table")]
    UnknownSymbol { symbol: u8 },

    /// Bit stream ended before the expected symbols were decoded
    #[error("truncated bit stream: decoded {decoded} of {expected} symbols")]
    TruncatedStream { decoded: usize, expected: usize },

    /// Bit stream decoded to more symbols than the header accounts for
    #[error("decoded length mismatch: expected {expected}, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    /// Frame header length mismatch or invalid header fields
    #[error("frame format error: {0}")]
    FrameFormat(#[from] FrameFormatError),

    /// CRC validation of the decoded data failed
    #[error("CRC mismatch: expected {expected:#010x}, got {actual:#010x}")]
    Crc { expected: u32, actual: u32 },

    /// File I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

/// Frame parsing and validation errors.
#[derive(Debug, Error)]
pub enum FrameFormatError {
    /// Frame is too short to hold the header length prefix
    #[error("frame too short: need at least {required} bytes, got {actual}")]
    FrameTooShort { required: usize, actual: usize },

    /// Declared header length runs past the end of the frame
    #[error("header length {declared} exceeds the {available} bytes available")]
    HeaderLengthExceeded { declared: usize, available: usize },

    /// Header bytes are not a valid header record
    #[error("invalid header: {0}")]
    InvalidHeader(String),

    /// Header was written by an incompatible format version
    #[error("unsupported header version {found}, expected {expected}")]
    UnsupportedVersion { expected: u32, found: u32 },

    /// Padding count outside 0..=7
    #[error("invalid padding count {0}, must be in 0..=7")]
    InvalidPadding(u8),

    /// Symbol listed twice in the frequency table
    #[error("duplicate symbol {0:#04x} in frequency table")]
    DuplicateSymbol(u8),

    /// Symbol listed with a zero count
    #[error("symbol {0:#04x} has a zero count")]
    ZeroCount(u8),

    /// Counts sum past `u64::MAX`, so no tree can hold them
    #[error("frequency counts overflow u64")]
    CountOverflow,

    /// Empty frequency table but the frame still carries payload bits
    #[error("empty frequency table with {payload_len} payload bytes and padding {padding}")]
    UnexpectedPayload { payload_len: usize, padding: u8 },

    /// Header could not be serialized
    #[error("header serialization failed: {0}")]
    Serialize(String),
}

/// Type alias for Result with our Error type
pub type Result<T> = std::result::Result<T, Error>;
