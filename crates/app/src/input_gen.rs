//! Sample data generation for the `demo` mode.
//!
//! Generated data mixes sections with very different symbol statistics so
//! the Huffman statistics in the report are worth looking at:
//! - runs of a single byte (one-symbol alphabet, 1 bit per byte)
//! - English-like text with skewed letter frequencies
//! - short repeating patterns (small alphabet, flat frequencies)
//! - uniformly random bytes (close to incompressible)

use rand::distributions::{Distribution, WeightedIndex};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Largest single section of generated data
const SECTION_BYTES: usize = 4096;

/// Letters by rough English frequency, space first.
const LETTERS: &[u8] = b" etaoinshrdlcumwfgypbvkjxqz";
const LETTER_WEIGHTS: &[u32] = &[
    180, 127, 91, 82, 75, 70, 67, 63, 61, 60, 43, 40, 28, 28, 24, 24, 22, 20, 20, 19, 15, 10, 8, 2,
    2, 1, 1,
];

/// Generate `size_bytes` of sample data, deterministically from `seed`.
pub fn generate_sample_data(seed: u64, size_bytes: usize) -> Vec<u8> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut data = Vec::with_capacity(size_bytes);

    while data.len() < size_bytes {
        let section = (size_bytes - data.len()).min(SECTION_BYTES);

        match rng.gen_range(0..10) {
            // 20% runs
            0..=1 => {
                let byte: u8 = rng.gen();
                data.extend(std::iter::repeat(byte).take(section));
            }
            // 50% text
            2..=6 => extend_text(&mut rng, &mut data, section),
            // 20% patterns
            7..=8 => {
                let pattern_len = rng.gen_range(2..=16);
                let pattern: Vec<u8> = (0..pattern_len).map(|_| rng.gen()).collect();
                data.extend(pattern.iter().cycle().take(section));
            }
            // 10% noise
            _ => data.extend((0..section).map(|_| rng.gen::<u8>())),
        }
    }

    data
}

fn extend_text(rng: &mut ChaCha8Rng, data: &mut Vec<u8>, len: usize) {
    match WeightedIndex::new(LETTER_WEIGHTS) {
        Ok(letters) => data.extend((0..len).map(|_| LETTERS[letters.sample(&mut *rng)])),
        Err(_) => data.extend(LETTERS.iter().cycle().take(len)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_sample_data() {
        let data = generate_sample_data(42, 1000);
        assert_eq!(data.len(), 1000);
    }

    #[test]
    fn test_determinism() {
        assert_eq!(generate_sample_data(12345, 20_000), generate_sample_data(12345, 20_000));
    }

    #[test]
    fn test_different_seeds() {
        assert_ne!(generate_sample_data(1, 10_000), generate_sample_data(2, 10_000));
    }

    #[test]
    fn test_various_sizes() {
        for size in [0, 1, 100, SECTION_BYTES, SECTION_BYTES + 1, 100_000] {
            assert_eq!(generate_sample_data(999, size).len(), size);
        }
    }

    #[test]
    fn test_weights_cover_letters() {
        assert_eq!(LETTERS.len(), LETTER_WEIGHTS.len());
    }
}
