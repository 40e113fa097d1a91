//! Compression and decompression pipelines.
//!
//! Compression: count -> build tree -> derive codes -> pack bits -> frame.
//! Decompression: parse frame -> rebuild tree -> unpack bits -> verify CRC.
//!
//! A zero-length input never reaches the tree builder: it maps to
//! `Frame::empty()` and back. Every other failure is returned unchanged from
//! the stage that detected it, and no frame bytes are produced unless every
//! stage succeeded.

use std::time::Instant;

use crate::codec;
use crate::codes::CodeTable;
use crate::error::{Error, Result};
use crate::framing::{Frame, LENGTH_PREFIX_SIZE};
use crate::frequency::FrequencyTable;
use crate::stats::CompressionStats;
use crate::tree::HuffmanTree;

/// Compress `data` into a parsed frame.
pub fn compress_frame(data: &[u8]) -> Result<Frame> {
    build_frame(data).map(|(frame, _)| frame)
}

/// Run the compression pipeline, keeping the code table for reporting.
fn build_frame(data: &[u8]) -> Result<(Frame, CodeTable)> {
    if data.is_empty() {
        log::debug!("empty input, emitting empty frame");
        return Ok((Frame::empty(), CodeTable::default()));
    }

    let table = FrequencyTable::count(data);
    let tree = HuffmanTree::build(&table)?;
    let codes = CodeTable::from_tree(&tree)?;
    let payload = codec::encode(data, &codes)?;

    log::debug!(
        "compressed {} bytes: {} symbols, {} payload bytes",
        data.len(),
        table.len(),
        payload.bytes.len()
    );

    let frame = Frame {
        table,
        payload,
        checksum: crc32fast::hash(data),
    };
    Ok((frame, codes))
}

/// Decode a parsed frame back into the original bytes.
///
/// # Errors
/// Propagates tree and decode errors, and returns `Error::Crc` if the
/// decoded bytes do not match the stored checksum.
pub fn decompress_frame(frame: &Frame) -> Result<Vec<u8>> {
    let output = if frame.table.is_empty() {
        Vec::new()
    } else {
        let tree = HuffmanTree::build(&frame.table)?;
        codec::decode(&frame.payload, &tree)?
    };

    let actual = crc32fast::hash(&output);
    if actual != frame.checksum {
        log::warn!("checksum mismatch after decoding {} bytes", output.len());
        return Err(Error::Crc {
            expected: frame.checksum,
            actual,
        });
    }

    Ok(output)
}

/// Compress `data` into frame bytes.
pub fn compress(data: &[u8]) -> Result<Vec<u8>> {
    compress_frame(data)?.serialize()
}

/// Decompress frame bytes produced by [`compress`].
pub fn decompress(frame_bytes: &[u8]) -> Result<Vec<u8>> {
    let frame = Frame::parse(frame_bytes)?;
    decompress_frame(&frame)
}

/// Compress `data` and report sizes for display.
pub fn compress_with_stats(data: &[u8]) -> Result<(Vec<u8>, CompressionStats)> {
    let start = Instant::now();
    let (frame, codes) = build_frame(data)?;
    let bytes = frame.serialize()?;
    let elapsed = start.elapsed();

    let stats = CompressionStats {
        original_size: data.len(),
        compressed_size: bytes.len(),
        header_size: bytes.len() - LENGTH_PREFIX_SIZE - frame.payload.bytes.len(),
        payload_bits: frame.payload.bit_len(),
        distinct_symbols: frame.table.len(),
        average_code_length: codes.average_code_length(&frame.table),
        elapsed,
    };

    Ok((bytes, stats))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FrameFormatError;

    #[test]
    fn test_aaab_scenario() {
        let frame = compress_frame(b"aaab").unwrap();

        assert_eq!(frame.table, FrequencyTable::from_pairs([(b'a', 3), (b'b', 1)]).unwrap());
        assert_eq!(frame.payload.bytes, vec![0b0001_0000]);
        assert_eq!(frame.payload.padding, 4);

        let bytes = frame.serialize().unwrap();
        assert_eq!(decompress(&bytes).unwrap(), b"aaab");
    }

    #[test]
    fn test_empty_round_trip() {
        let bytes = compress(b"").unwrap();
        let frame = Frame::parse(&bytes).unwrap();

        assert!(frame.table.is_empty());
        assert!(frame.payload.bytes.is_empty());
        assert_eq!(frame.payload.padding, 0);
        assert!(decompress(&bytes).unwrap().is_empty());
    }

    #[test]
    fn test_single_symbol() {
        let data = vec![0xEE; 1000];
        let frame = compress_frame(&data).unwrap();
        assert_eq!(frame.payload.bit_len(), 1000);

        let bytes = frame.serialize().unwrap();
        assert_eq!(decompress(&bytes).unwrap(), data);
    }

    #[test]
    fn test_truncated_payload() {
        let data = b"the rain in spain falls mainly on the plain".repeat(4);
        let mut bytes = compress(&data).unwrap();
        bytes.truncate(bytes.len() - 3);

        assert!(matches!(
            decompress(&bytes),
            Err(Error::TruncatedStream { .. })
        ));
    }

    #[test]
    fn test_checksum_mismatch() {
        let mut frame = compress_frame(b"checksum me").unwrap();
        frame.checksum ^= 1;
        assert!(matches!(decompress_frame(&frame), Err(Error::Crc { .. })));
    }

    #[test]
    fn test_bad_frame_propagates() {
        assert!(matches!(
            decompress(&[0, 0]),
            Err(Error::FrameFormat(FrameFormatError::FrameTooShort { .. }))
        ));
    }

    #[test]
    fn test_stats() {
        let data = vec![b'a'; 4096];
        let (bytes, stats) = compress_with_stats(&data).unwrap();

        assert_eq!(stats.original_size, 4096);
        assert_eq!(stats.compressed_size, bytes.len());
        assert_eq!(stats.payload_bits, 4096);
        assert_eq!(stats.distinct_symbols, 1);
        assert!((stats.average_code_length - 1.0).abs() < 1e-9);
        assert!(stats.compression_ratio() < 0.2);
    }

    #[test]
    fn test_stats_empty_input() {
        let (bytes, stats) = compress_with_stats(b"").unwrap();

        assert_eq!(stats.original_size, 0);
        assert_eq!(stats.compressed_size, bytes.len());
        assert_eq!(stats.payload_bits, 0);
        assert_eq!(stats.distinct_symbols, 0);
        assert_eq!(stats.average_code_length, 0.0);
    }

    #[test]
    fn test_stats_average_code_length() {
        // a=0 b=1: one bit per symbol
        let (_, stats) = compress_with_stats(b"aaab").unwrap();
        assert!((stats.average_code_length - 1.0).abs() < 1e-9);
        assert_eq!(stats.payload_bits, 4);
    }
}
