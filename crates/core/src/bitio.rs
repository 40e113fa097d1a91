//! Bit-level I/O for packing and unpacking Huffman codes.
//!
//! Both directions use MSB-first order: the first bit written lands in the
//! most significant bit of the first byte.
//!
//! # Padding Rules
//! - `BitWriter::finish` pads the final partial byte with zero bits and
//!   reports how many it added (0-7).
//! - `BitReader::with_padding` hides that many trailing bits so the caller
//!   only ever sees data bits.
//!
//! # Example
//! ```
//! use huffpack_core::bitio::{BitReader, BitWriter};
//!
//! let mut writer = BitWriter::with_capacity(1);
//! writer.write_all(&[true, false, true, true]);
//! let (bytes, padding) = writer.finish();
//! assert_eq!(bytes, vec![0b1011_0000]);
//! assert_eq!(padding, 4);
//!
//! let mut reader = BitReader::with_padding(&bytes, padding).unwrap();
//! let bits: Vec<bool> = std::iter::from_fn(|| reader.next_bit()).collect();
//! assert_eq!(bits, vec![true, false, true, true]);
//! ```

/// Writes bits MSB-first into a growing byte buffer.
///
/// # Invariants
/// - `pending` holds up to 7 bits, aligned to its most significant end
/// - `pending_len` is always < 8
#[derive(Debug, Clone, Default)]
pub struct BitWriter {
    bytes: Vec<u8>,
    pending: u8,
    pending_len: u8,
}

impl BitWriter {
    /// Create an empty writer with room for `bytes` output bytes.
    pub fn with_capacity(bytes: usize) -> Self {
        Self {
            bytes: Vec::with_capacity(bytes),
            ..Self::default()
        }
    }

    /// Append a single bit.
    pub fn write_bit(&mut self, bit: bool) {
        if bit {
            self.pending |= 0x80 >> self.pending_len;
        }
        self.pending_len += 1;

        if self.pending_len == 8 {
            self.bytes.push(self.pending);
            self.pending = 0;
            self.pending_len = 0;
        }
    }

    /// Append a sequence of bits in order.
    pub fn write_all(&mut self, bits: &[bool]) {
        for &bit in bits {
            self.write_bit(bit);
        }
    }

    /// Total number of data bits written so far.
    pub fn bit_len(&self) -> usize {
        self.bytes.len() * 8 + self.pending_len as usize
    }

    /// Flush the partial byte and return the bytes with the padding count.
    pub fn finish(mut self) -> (Vec<u8>, u8) {
        let padding = if self.pending_len == 0 {
            0
        } else {
            self.bytes.push(self.pending);
            8 - self.pending_len
        };
        (self.bytes, padding)
    }
}

/// Reads bits MSB-first from a byte buffer, ignoring trailing padding.
///
/// # Invariants
/// - `position <= bit_len <= data.len() * 8`
#[derive(Debug, Clone)]
pub struct BitReader<'a> {
    data: &'a [u8],
    bit_len: usize,
    position: usize,
}

impl<'a> BitReader<'a> {
    /// Reader that hides the last `padding` bits of `data`.
    ///
    /// Returns `None` if `data` holds fewer than `padding` bits.
    pub fn with_padding(data: &'a [u8], padding: u8) -> Option<Self> {
        let bit_len = (data.len() * 8).checked_sub(padding as usize)?;
        Some(Self {
            data,
            bit_len,
            position: 0,
        })
    }

    /// Read one bit, or `None` once the data bits are exhausted.
    pub fn next_bit(&mut self) -> Option<bool> {
        if self.position >= self.bit_len {
            return None;
        }
        let byte = self.data[self.position / 8];
        let bit = byte & (0x80 >> (self.position % 8)) != 0;
        self.position += 1;
        Some(bit)
    }

    /// Data bits not yet read.
    pub fn bits_remaining(&self) -> usize {
        self.bit_len - self.position
    }

    /// Current bit position (0 = MSB of first byte).
    pub fn position(&self) -> usize {
        self.position
    }
}
