//! Property-based tests for the Huffman codec.
//!
//! - encoding then decoding recovers the input
//! - codes are prefix-free and never empty
//! - tree weights add up
//! - encoding is deterministic

use proptest::prelude::*;

use huffman::{
    decode, encode, round_trip, CodeTable, Compressed, FrequencyTable, HuffmanTree, Node, NodeId,
};

/// Strategy for inputs drawn from a small alphabet, so symbols repeat.
fn small_alphabet_strategy() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(prop_oneof![Just(b'a'), Just(b'b'), Just(b'c'), Just(b'd')], 0..500)
}

/// Strategy for arbitrary bytes.
fn any_bytes_strategy() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..2000)
}

fn checked_weight(tree: &HuffmanTree, id: NodeId) -> u64 {
    match *tree.node(id) {
        Node::Leaf { weight, .. } => weight,
        Node::Internal {
            weight,
            left,
            right,
        } => {
            let sum = checked_weight(tree, left) + checked_weight(tree, right);
            assert_eq!(weight, sum, "internal node weight is not the sum of its children");
            weight
        }
    }
}

fn collect_leaves(tree: &HuffmanTree, id: NodeId, out: &mut Vec<(u8, u64)>) {
    match *tree.node(id) {
        Node::Leaf { symbol, weight } => out.push((symbol, weight)),
        Node::Internal { left, right, .. } => {
            collect_leaves(tree, left, out);
            collect_leaves(tree, right, out);
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 200,
        ..ProptestConfig::default()
    })]

    #[test]
    fn prop_round_trip(input in any_bytes_strategy()) {
        prop_assert_eq!(round_trip(&input), input);
    }

    #[test]
    fn prop_round_trip_small_alphabet(input in small_alphabet_strategy()) {
        prop_assert_eq!(round_trip(&input), input);
    }

    #[test]
    fn prop_codes_are_prefix_free(input in any_bytes_strategy()) {
        let freq = FrequencyTable::from_bytes(&input);
        if let Ok(tree) = HuffmanTree::build(&freq) {
            let codes = CodeTable::from_tree(&tree);
            prop_assert_eq!(codes.len(), freq.len());
            prop_assert!(codes.is_prefix_free());
            prop_assert!(codes.iter().all(|(_, code)| !code.is_empty()));
        }
    }

    #[test]
    fn prop_weights_add_up(input in small_alphabet_strategy()) {
        let freq = FrequencyTable::from_bytes(&input);
        if let Ok(tree) = HuffmanTree::build(&freq) {
            prop_assert_eq!(checked_weight(&tree, tree.root()), input.len() as u64);

            let mut leaves = Vec::new();
            collect_leaves(&tree, tree.root(), &mut leaves);
            leaves.sort_unstable();
            let mut counts: Vec<_> = freq.iter().collect();
            counts.sort_unstable();
            prop_assert_eq!(leaves, counts);
        }
    }

    #[test]
    fn prop_single_symbol_gets_one_bit(symbol in any::<u8>(), n in 1usize..1000) {
        let input = vec![symbol; n];
        let compressed = Compressed::new(&input).unwrap();
        prop_assert_eq!(compressed.codes.get(symbol).map(|code| code.len()), Some(1));
        prop_assert_eq!(compressed.bits.len(), n);
        prop_assert_eq!(compressed.decompress(), input);
    }

    #[test]
    fn prop_deterministic(input in any_bytes_strategy()) {
        let a = Compressed::new(&input);
        let b = Compressed::new(&input);
        match (a, b) {
            (Some(a), Some(b)) => {
                prop_assert_eq!(&a.bits, &b.bits);
                prop_assert_eq!(decode(&a.tree, &b.bits), input);
            }
            (None, None) => prop_assert!(input.is_empty()),
            _ => prop_assert!(false, "same input compressed differently"),
        }
    }

    #[test]
    fn prop_payload_matches_report(input in any_bytes_strategy()) {
        if let Some(compressed) = Compressed::new(&input) {
            let bits = encode(&input, &compressed.codes);
            prop_assert_eq!(bits.len() as u64, compressed.report.payload_bits);
            prop_assert_eq!(compressed.report.original_bits, 8 * input.len() as u64);
        }
    }
}
