//! Symbol frequency counting.
//!
//! A `FrequencyTable` records how often each observed byte occurs. Only bytes
//! that actually appear get an entry, so the alphabet is whatever the input
//! contains. Iteration is always in ascending symbol order, which is what
//! makes tree construction reproducible on both sides of a frame.

use std::collections::BTreeMap;

use crate::error::{FrameFormatError, Result};

/// Immutable mapping from byte value to occurrence count.
///
/// # Invariants
/// - every stored count is > 0
/// - keys are unique (guaranteed by the map)
/// - the sum of all counts fits in `u64`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: BTreeMap<u8, u64>,
}

impl FrequencyTable {
    /// Tally every byte of `data`. Empty input yields an empty table.
    pub fn count(data: &[u8]) -> Self {
        let mut tally = [0u64; 256];
        for &byte in data {
            tally[byte as usize] += 1;
        }

        let counts = (0..=u8::MAX)
            .zip(tally)
            .filter(|&(_, count)| count > 0)
            .collect();

        Self { counts }
    }

    /// Rebuild a table from `(symbol, count)` pairs recovered from a header.
    ///
    /// # Errors
    /// - `FrameFormatError::DuplicateSymbol` if a symbol appears twice
    /// - `FrameFormatError::ZeroCount` if a count is zero
    /// - `FrameFormatError::CountOverflow` if the counts sum past `u64::MAX`
    pub fn from_pairs<I>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (u8, u64)>,
    {
        let mut counts = BTreeMap::new();
        let mut total = 0u64;
        for (symbol, count) in pairs {
            if count == 0 {
                return Err(FrameFormatError::ZeroCount(symbol).into());
            }
            if counts.insert(symbol, count).is_some() {
                return Err(FrameFormatError::DuplicateSymbol(symbol).into());
            }
            total = total
                .checked_add(count)
                .ok_or(FrameFormatError::CountOverflow)?;
        }
        Ok(Self { counts })
    }

    /// Count for `symbol`, if it was observed.
    pub fn get(&self, symbol: u8) -> Option<u64> {
        self.counts.get(&symbol).copied()
    }

    /// `(symbol, count)` pairs in ascending symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, u64)> + '_ {
        self.counts.iter().map(|(&symbol, &count)| (symbol, count))
    }

    /// Number of distinct symbols.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts, i.e. the length of the counted input.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }
}
