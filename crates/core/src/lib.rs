//! huffpack-core: static Huffman compression with a self-describing frame
//!
//! This library turns an arbitrary byte buffer into a prefix-free Huffman bit
//! stream, wraps it in a length-prefixed frame, and reverses the process
//! exactly.
//!
//! # Architecture
//!
//! The pipeline is split along clear module boundaries:
//! - `frequency`: symbol counting
//! - `tree`: deterministic Huffman tree construction
//! - `codes`: code table derivation from the tree
//! - `bitio`: low-level bit reading/writing
//! - `codec`: bit stream encode/decode
//! - `framing`: frame header and container layout
//! - `engine`: end-to-end compress/decompress
//! - `stats`: sizes and ratios for reporting
//!
//! # Example
//! ```
//! let frame = huffpack_core::compress(b"aaab").unwrap();
//! assert_eq!(huffpack_core::decompress(&frame).unwrap(), b"aaab");
//! ```
//!
//! # Design Principles
//!
//! - **No panics**: all errors are structured and returned
//! - **Deterministic**: equal frequency tables always give identical trees
//! - **In-memory**: callers own file and text handling; the codec sees bytes

pub mod bitio;
pub mod codec;
pub mod codes;
pub mod engine;
pub mod error;
pub mod framing;
pub mod frequency;
pub mod stats;
pub mod tree;

// Re-export commonly used types
pub use codec::EncodedPayload;
pub use codes::{Code, CodeTable};
pub use engine::{compress, compress_frame, compress_with_stats, decompress, decompress_frame};
pub use error::{Error, Result};
pub use framing::Frame;
pub use frequency::FrequencyTable;
pub use stats::CompressionStats;
pub use tree::{HuffmanTree, TreeNode};
