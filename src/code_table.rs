use std::collections::BTreeMap;

use bitvec::{order::Msb0, slice::BitSlice, vec::BitVec};
use tracing::debug;

use crate::tree::{HuffmanTree, Node};

/// A Huffman code: the path from the root to a leaf, `0` = left, `1` = right.
pub type Code = BitVec<u8, Msb0>;

/// Maps each symbol to its (non-empty, prefix-free) code.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeTable {
    codes: BTreeMap<u8, Code>,
}

impl CodeTable {
    /// Derive codes by walking every root-to-leaf path of `tree`.
    ///
    /// A tree with a single leaf has no paths, so its symbol gets the fixed
    /// code `0`.
    pub fn from_tree(tree: &HuffmanTree) -> Self {
        let mut codes = BTreeMap::new();

        if let Node::Leaf { symbol, .. } = *tree.node(tree.root()) {
            let mut code = Code::new();
            code.push(false);
            codes.insert(symbol, code);
            return Self { codes };
        }

        let mut stack = vec![(tree.root(), Code::new())];
        while let Some((id, path)) = stack.pop() {
            match *tree.node(id) {
                Node::Leaf { symbol, .. } => {
                    debug_assert!(!path.is_empty());
                    codes.insert(symbol, path);
                }
                Node::Internal { left, right, .. } => {
                    let mut left_path = path.clone();
                    left_path.push(false);
                    let mut right_path = path;
                    right_path.push(true);

                    stack.push((right, right_path));
                    stack.push((left, left_path));
                }
            }
        }

        debug!(
            symbols = codes.len(),
            longest = codes.values().map(|code| code.len()).max().unwrap_or(0),
            "derived code table"
        );

        let table = Self { codes };
        debug_assert!(table.is_prefix_free());
        table
    }

    pub fn get(&self, symbol: u8) -> Option<&Code> {
        self.codes.get(&symbol)
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// `(symbol, code)` pairs, in ascending symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, &Code)> + '_ {
        self.codes.iter().map(|(&symbol, code)| (symbol, code))
    }

    /// True if no code is a prefix of another.
    ///
    /// Quadratic in the number of symbols; there are at most 256.
    pub fn is_prefix_free(&self) -> bool {
        let codes: Vec<&Code> = self.codes.values().collect();
        codes.iter().enumerate().all(|(i, a)| {
            codes[i + 1..]
                .iter()
                .all(|b| !a.starts_with(b.as_bitslice()) && !b.starts_with(a.as_bitslice()))
        })
    }
}

/// Render bits as a string of `'0'` and `'1'` characters.
pub fn bit_string(bits: &BitSlice<u8, Msb0>) -> String {
    bits.iter().map(|bit| if *bit { '1' } else { '0' }).collect()
}
