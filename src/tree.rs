use std::{cmp::Reverse, collections::BinaryHeap};

use tracing::debug;

use crate::{errors::BuildError, frequency::FrequencyTable};

/// Index of a node in a [`HuffmanTree`]'s arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Node {
    Leaf {
        symbol: u8,
        weight: u64,
    },
    /// Always has exactly two children. `weight` is the sum of theirs.
    Internal {
        weight: u64,
        left: NodeId,
        right: NodeId,
    },
}

impl Node {
    pub fn weight(&self) -> u64 {
        match *self {
            Node::Leaf { weight, .. } | Node::Internal { weight, .. } => weight,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }
}

/// A Huffman tree, stored as an arena of nodes.
///
/// Each node other than the root is the child of exactly one internal node.
/// The root is a leaf only when the tree was built from a single distinct
/// symbol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuffmanTree {
    nodes: Vec<Node>,
    root: NodeId,
}

impl HuffmanTree {
    /// Build a tree by repeatedly merging the two lightest nodes.
    ///
    /// Ties on weight are broken first-in-first-out: leaves enter the queue in
    /// the table's first-appearance order, and each merged node enters behind
    /// everything already queued. Of the two nodes popped for a merge, the
    /// first becomes the left child and the second the right.
    pub fn build(freq: &FrequencyTable) -> Result<Self, BuildError> {
        if freq.is_empty() {
            return Err(BuildError::EmptyFrequencyTable);
        }

        let mut nodes = Vec::with_capacity(2 * freq.len() - 1);

        // Min-heap of (weight, node id). Ids are handed out in push order, so
        // they double as the tie-break sequence.
        let mut queue = BinaryHeap::with_capacity(freq.len());
        for (symbol, weight) in freq.iter() {
            let id = NodeId(nodes.len());
            nodes.push(Node::Leaf { symbol, weight });
            queue.push(Reverse((weight, id)));
        }

        while queue.len() > 1 {
            let (Some(Reverse((w1, left))), Some(Reverse((w2, right)))) =
                (queue.pop(), queue.pop())
            else {
                unreachable!("queue holds at least two nodes");
            };

            let weight = w1 + w2;
            let id = NodeId(nodes.len());
            nodes.push(Node::Internal {
                weight,
                left,
                right,
            });
            queue.push(Reverse((weight, id)));
        }

        let Some(Reverse((_, root))) = queue.pop() else {
            unreachable!("queue is non-empty");
        };

        debug!(
            symbols = freq.len(),
            nodes = nodes.len(),
            weight = nodes[root.0].weight(),
            "built huffman tree"
        );

        Ok(Self { nodes, root })
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    /// Total number of nodes, leaves and internal.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false; a tree has at least one node.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of leaves, i.e. distinct symbols.
    pub fn leaf_count(&self) -> usize {
        self.nodes.iter().filter(|node| node.is_leaf()).count()
    }

    /// True when the root is a leaf (single distinct symbol).
    pub fn is_single_leaf(&self) -> bool {
        self.node(self.root).is_leaf()
    }

    /// Weight of the root, equal to the length of the input.
    pub fn weight(&self) -> u64 {
        self.node(self.root).weight()
    }

    /// Write an indented outline of the tree, one node per line.
    pub fn write_outline(&self, out: &mut impl std::fmt::Write) -> std::fmt::Result {
        let mut stack = vec![(self.root, 0, "root")];

        while let Some((id, depth, label)) = stack.pop() {
            let indent = "  ".repeat(depth);
            match *self.node(id) {
                Node::Leaf { symbol, weight } => {
                    writeln!(
                        out,
                        "{indent}{label}: leaf {:?} [weight {weight}]",
                        symbol as char
                    )?;
                }
                Node::Internal {
                    weight,
                    left,
                    right,
                } => {
                    writeln!(out, "{indent}{label}: internal [weight {weight}]")?;
                    // Right first, so left is printed first.
                    stack.push((right, depth + 1, "1"));
                    stack.push((left, depth + 1, "0"));
                }
            }
        }

        Ok(())
    }
}
