pub mod report;

use bitvec::{order::Msb0, slice::BitSlice, vec::BitVec};
use tracing::{info, trace};

use crate::{
    code_table::CodeTable,
    frequency::FrequencyTable,
    tree::{HuffmanTree, Node},
};

use self::report::Report;

/// Concatenate the code of each input symbol, in input order.
///
/// # Panics
///
/// If `codes` has no entry for some symbol of `input`. That can't happen when
/// the table was derived from the same input.
pub fn encode(input: &[u8], codes: &CodeTable) -> BitVec<u8, Msb0> {
    let mut bits = BitVec::new();

    for &symbol in input {
        match codes.get(symbol) {
            Some(code) => bits.extend_from_bitslice(code.as_bitslice()),
            None => panic!("logic error: no code for symbol {symbol:#04x}"),
        }
    }

    bits
}

/// Walk the tree from the root, one bit at a time, emitting a symbol at
/// each leaf.
///
/// A lone-leaf tree emits its symbol once per bit. Trailing bits that don't
/// reach a leaf are dropped.
pub fn decode(tree: &HuffmanTree, bits: &BitSlice<u8, Msb0>) -> Vec<u8> {
    let root = tree.root();

    if let Node::Leaf { symbol, .. } = *tree.node(root) {
        return vec![symbol; bits.len()];
    }

    let mut output = Vec::with_capacity(tree.weight() as usize);
    let mut cursor = root;
    let mut pending = 0;

    for bit in bits.iter().by_vals() {
        let Node::Internal { left, right, .. } = *tree.node(cursor) else {
            unreachable!("cursor is reset to the root after every leaf");
        };

        cursor = if bit { right } else { left };
        pending += 1;

        if let Node::Leaf { symbol, .. } = *tree.node(cursor) {
            output.push(symbol);
            cursor = root;
            pending = 0;
        }
    }

    if pending != 0 {
        trace!(bits = pending, "dropped incomplete trailing code");
    }

    output
}

/// The products of compressing one input: everything needed to inspect the
/// encoding or decode it again.
#[derive(Debug, Clone)]
pub struct Compressed {
    pub frequencies: FrequencyTable,
    pub tree: HuffmanTree,
    pub codes: CodeTable,
    pub bits: BitVec<u8, Msb0>,
    pub report: Report,
}

impl Compressed {
    /// Count, build, derive and encode. `None` for empty input.
    pub fn new(input: &[u8]) -> Option<Self> {
        let frequencies = FrequencyTable::from_bytes(input);
        let tree = HuffmanTree::build(&frequencies).ok()?;
        let codes = CodeTable::from_tree(&tree);
        let bits = encode(input, &codes);
        let report = Report::new(&frequencies, &codes);

        Some(Self {
            frequencies,
            tree,
            codes,
            bits,
            report,
        })
    }

    pub fn decompress(&self) -> Vec<u8> {
        decode(&self.tree, &self.bits)
    }
}

/// Compress `input`, log a size report, and decompress it again.
///
/// Returns the recovered input, which always equals `input`.
pub fn round_trip(input: &[u8]) -> Vec<u8> {
    let Some(compressed) = Compressed::new(input) else {
        info!("empty input; nothing to encode");
        return Vec::new();
    };

    let report = &compressed.report;
    info!(
        original_bits = report.original_bits,
        compressed_bits = report.compressed_bits(),
        effectiveness = report.effectiveness(),
        "huffman size report"
    );

    compressed.decompress()
}
