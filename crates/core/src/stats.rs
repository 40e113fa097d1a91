//! Summary statistics for a compression run.
//!
//! The engine fills these in and hands them back as plain values; printing
//! or displaying them is up to the caller.

use std::fmt;
use std::time::Duration;

/// Sizes and timing of one `compress_with_stats` call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompressionStats {
    /// Input length in bytes
    pub original_size: usize,

    /// Serialized frame length in bytes (prefix + header + payload)
    pub compressed_size: usize,

    /// Length of the JSON header in bytes
    pub header_size: usize,

    /// Meaningful payload bits, excluding padding
    pub payload_bits: usize,

    /// Distinct byte values in the input
    pub distinct_symbols: usize,

    /// Expected code bits per input byte
    pub average_code_length: f64,

    /// Wall time spent compressing
    pub elapsed: Duration,
}

impl CompressionStats {
    /// Compression ratio (compressed / original).
    ///
    /// Returns 0.0 for an empty input.
    pub fn compression_ratio(&self) -> f64 {
        if self.original_size == 0 {
            0.0
        } else {
            self.compressed_size as f64 / self.original_size as f64
        }
    }

    /// Fraction of the input saved; negative when the frame is larger.
    pub fn space_savings(&self) -> f64 {
        if self.original_size == 0 {
            0.0
        } else {
            1.0 - self.compression_ratio()
        }
    }

    /// Input bytes processed per second.
    pub fn throughput_bps(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs == 0.0 {
            0.0
        } else {
            self.original_size as f64 / secs
        }
    }

    /// Export as `key=value` lines (for parsing/testing).
    pub fn export_text(&self) -> String {
        format!(
            "original_size={}\n\
             compressed_size={}\n\
             header_size={}\n\
             payload_bits={}\n\
             distinct_symbols={}\n\
             average_code_length={:.4}\n\
             compression_ratio={:.4}\n\
             elapsed_us={}\n",
            self.original_size,
            self.compressed_size,
            self.header_size,
            self.payload_bits,
            self.distinct_symbols,
            self.average_code_length,
            self.compression_ratio(),
            self.elapsed.as_micros(),
        )
    }
}

impl fmt::Display for CompressionStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Compression ===")?;
        writeln!(f, "Original:   {} bytes", self.original_size)?;
        writeln!(
            f,
            "Compressed: {} bytes (header {} bytes)",
            self.compressed_size, self.header_size
        )?;
        writeln!(f, "Ratio:      {:.1}%", self.compression_ratio() * 100.0)?;
        writeln!(f, "Savings:    {:.1}%", self.space_savings() * 100.0)?;
        writeln!(f, "Symbols:    {}", self.distinct_symbols)?;
        writeln!(f, "Avg code:   {:.3} bits/byte", self.average_code_length)?;
        write!(f, "Duration:   {} us", self.elapsed.as_micros())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ratio_and_savings() {
        let stats = CompressionStats {
            original_size: 200,
            compressed_size: 50,
            ..Default::default()
        };
        assert!((stats.compression_ratio() - 0.25).abs() < 1e-9);
        assert!((stats.space_savings() - 0.75).abs() < 1e-9);
    }

    #[test]
    fn test_empty_input_ratio() {
        let stats = CompressionStats {
            compressed_size: 60,
            ..Default::default()
        };
        assert_eq!(stats.compression_ratio(), 0.0);
        assert_eq!(stats.space_savings(), 0.0);
        assert_eq!(stats.throughput_bps(), 0.0);
    }

    #[test]
    fn test_export_text() {
        let stats = CompressionStats {
            original_size: 4,
            compressed_size: 58,
            distinct_symbols: 2,
            ..Default::default()
        };
        let text = stats.export_text();
        assert!(text.contains("original_size=4\n"));
        assert!(text.contains("compressed_size=58\n"));
        assert!(text.contains("distinct_symbols=2\n"));
    }
}
