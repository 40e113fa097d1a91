//! Bit stream encoding and decoding.
//!
//! Encoding concatenates each input byte's code MSB-first and pads the last
//! byte with zeros. Decoding strips that padding and walks the tree one bit
//! at a time, emitting a symbol at every leaf.
//!
//! The root frequency of the tree equals the number of symbols that were
//! encoded, so decoding can tell a payload cut exactly on a code boundary
//! apart from a complete one.

use crate::bitio::{BitReader, BitWriter};
use crate::codes::CodeTable;
use crate::error::{Error, Result};
use crate::tree::{HuffmanTree, TreeNode};

/// Packed code bits plus the number of zero bits padding the final byte.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EncodedPayload {
    pub bytes: Vec<u8>,
    /// Low-order filler bits in the last byte (0-7)
    pub padding: u8,
}

impl EncodedPayload {
    /// Number of meaningful bits in the payload.
    pub fn bit_len(&self) -> usize {
        (self.bytes.len() * 8).saturating_sub(self.padding as usize)
    }
}

/// Encode `data` with `codes`.
///
/// # Errors
/// Returns `Error::UnknownSymbol` for the first byte without a code.
pub fn encode(data: &[u8], codes: &CodeTable) -> Result<EncodedPayload> {
    let mut writer = BitWriter::with_capacity(data.len() / 2 + 1);

    for &byte in data {
        let code = codes
            .get(byte)
            .ok_or(Error::UnknownSymbol { symbol: byte })?;
        writer.write_all(code.bits());
    }

    let bit_len = writer.bit_len();
    let (bytes, padding) = writer.finish();
    log::debug!(
        "encoded {} bytes into {} bits ({} bytes, padding {})",
        data.len(),
        bit_len,
        bytes.len(),
        padding
    );

    Ok(EncodedPayload { bytes, padding })
}

/// Decode `payload` by walking `tree`.
///
/// # Errors
/// - `Error::TruncatedStream` if the bits end mid-path, the padding count
///   exceeds the payload, or fewer symbols decode than the tree accounts for
/// - `Error::LengthMismatch` if more symbols decode than the tree accounts for
pub fn decode(payload: &EncodedPayload, tree: &HuffmanTree) -> Result<Vec<u8>> {
    let expected = usize::try_from(tree.total_frequency()).unwrap_or(usize::MAX);
    let truncated = |decoded| Error::TruncatedStream { decoded, expected };

    let mut reader =
        BitReader::with_padding(&payload.bytes, payload.padding).ok_or_else(|| truncated(0))?;
    let mut output = Vec::with_capacity(expected.min(reader.bits_remaining()));

    match tree.root() {
        // one symbol, one bit per occurrence
        TreeNode::Leaf { symbol, .. } => {
            while reader.next_bit().is_some() {
                output.push(*symbol);
            }
        }
        root @ TreeNode::Internal { .. } => {
            let mut node = root;
            while let Some(bit) = reader.next_bit() {
                if let TreeNode::Internal { left, right, .. } = node {
                    node = if bit { right.as_ref() } else { left.as_ref() };
                }
                if let TreeNode::Leaf { symbol, .. } = node {
                    output.push(*symbol);
                    node = root;
                }
            }

            if !std::ptr::eq(node, root) {
                log::warn!(
                    "bit stream ended mid-code after {} symbols at bit {}",
                    output.len(),
                    reader.position()
                );
                return Err(truncated(output.len()));
            }
        }
    }

    if output.len() < expected {
        return Err(truncated(output.len()));
    }
    if output.len() > expected {
        return Err(Error::LengthMismatch {
            expected,
            actual: output.len(),
        });
    }

    log::debug!("decoded {} bits into {} bytes", payload.bit_len(), output.len());
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frequency::FrequencyTable;

    fn tree_and_codes(data: &[u8]) -> (HuffmanTree, CodeTable) {
        let tree = HuffmanTree::build(&FrequencyTable::count(data)).unwrap();
        let codes = CodeTable::from_tree(&tree).unwrap();
        (tree, codes)
    }

    #[test]
    fn test_encode_aaab() {
        let (_, codes) = tree_and_codes(b"aaab");
        let payload = encode(b"aaab", &codes).unwrap();

        assert_eq!(payload.bytes, vec![0b0001_0000]);
        assert_eq!(payload.padding, 4);
        assert_eq!(payload.bit_len(), 4);
    }

    #[test]
    fn test_round_trip_text() {
        let data = b"she sells sea shells by the sea shore";
        let (tree, codes) = tree_and_codes(data);

        let payload = encode(data, &codes).unwrap();
        assert_eq!(decode(&payload, &tree).unwrap(), data);
    }

    #[test]
    fn test_single_symbol_one_bit_each() {
        let data = vec![b'k'; 13];
        let (tree, codes) = tree_and_codes(&data);

        let payload = encode(&data, &codes).unwrap();
        assert_eq!(payload.bytes, vec![0, 0]);
        assert_eq!(payload.padding, 3);
        assert_eq!(decode(&payload, &tree).unwrap(), data);
    }

    #[test]
    fn test_unknown_symbol() {
        let (_, codes) = tree_and_codes(b"abc");
        let result = encode(b"abz", &codes);
        assert!(matches!(result, Err(Error::UnknownSymbol { symbol: b'z' })));
    }

    #[test]
    fn test_ends_mid_path() {
        // a=00 c=01 b=1; a lone 0 bit never reaches a leaf
        let (tree, _) = tree_and_codes(b"aabbc");
        let payload = EncodedPayload {
            bytes: vec![0b0000_0000],
            padding: 7,
        };
        assert!(matches!(
            decode(&payload, &tree),
            Err(Error::TruncatedStream { decoded: 0, expected: 5 })
        ));
    }

    #[test]
    fn test_cut_on_code_boundary() {
        let data = vec![b'x'; 20];
        let (tree, codes) = tree_and_codes(&data);
        let mut payload = encode(&data, &codes).unwrap();
        payload.bytes.pop();

        assert!(matches!(
            decode(&payload, &tree),
            Err(Error::TruncatedStream { expected: 20, .. })
        ));
    }

    #[test]
    fn test_padding_exceeds_payload() {
        let (tree, _) = tree_and_codes(b"ab");
        let payload = EncodedPayload {
            bytes: Vec::new(),
            padding: 3,
        };
        assert!(matches!(
            decode(&payload, &tree),
            Err(Error::TruncatedStream { decoded: 0, .. })
        ));
    }

    #[test]
    fn test_extra_symbols() {
        let (tree, codes) = tree_and_codes(b"aaab");
        let payload = encode(b"aaabb", &codes).unwrap();
        assert!(matches!(
            decode(&payload, &tree),
            Err(Error::LengthMismatch { expected: 4, actual: 5 })
        ));
    }
}
