//! Property tests: round-trip, prefix-freedom and determinism.

use huffpack_core::{compress, decompress, CodeTable, FrequencyTable, HuffmanTree};
use proptest::prelude::*;

fn codes_for(table: &FrequencyTable) -> CodeTable {
    let tree = HuffmanTree::build(table).unwrap();
    CodeTable::from_tree(&tree).unwrap()
}

fn arb_table() -> impl Strategy<Value = FrequencyTable> {
    prop::collection::btree_map(any::<u8>(), 1u64..10_000, 1..64)
        .prop_map(|counts| FrequencyTable::from_pairs(counts).unwrap())
}

proptest! {
    #[test]
    fn prop_round_trip(data in prop::collection::vec(any::<u8>(), 0..4096)) {
        let frame = compress(&data).unwrap();
        prop_assert_eq!(decompress(&frame).unwrap(), data);
    }

    #[test]
    fn prop_round_trip_small_alphabet(data in prop::collection::vec(0u8..3, 0..2048)) {
        let frame = compress(&data).unwrap();
        prop_assert_eq!(decompress(&frame).unwrap(), data);
    }

    #[test]
    fn prop_repeated_byte(byte in any::<u8>(), n in 1usize..5000) {
        let data = vec![byte; n];
        let frame = compress(&data).unwrap();
        prop_assert_eq!(decompress(&frame).unwrap(), data);
    }

    #[test]
    fn prop_prefix_free(table in arb_table()) {
        prop_assume!(table.len() >= 2);
        let codes = codes_for(&table);
        prop_assert_eq!(codes.len(), table.len());

        for (a, code_a) in codes.iter() {
            for (b, code_b) in codes.iter() {
                if a != b {
                    prop_assert!(!code_a.is_prefix_of(code_b));
                }
            }
        }
    }

    #[test]
    fn prop_deterministic(table in arb_table()) {
        let first = codes_for(&table);
        let second = codes_for(&table.clone());
        prop_assert_eq!(first.code_lengths(), second.code_lengths());
        prop_assert_eq!(first, second);
    }
}
