//! Huffman tree construction.
//!
//! The tree is built bottom-up from a `FrequencyTable` with a min-heap keyed
//! by `(frequency, insertion order)`. Leaves are inserted in ascending symbol
//! order and every merged node takes the next insertion number, so equal
//! frequencies always resolve the same way. The decoder rebuilds the tree
//! from the header's table and must land on the identical shape.
//!
//! # Child placement
//!
//! Of the two nodes taken from the heap in one step, the second (heavier, or
//! later on a tie) becomes the left child and the first becomes the right
//! child. For `{a:3, b:1}` that gives `a -> 0`, `b -> 1`.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::error::{Error, Result};
use crate::frequency::FrequencyTable;

/// A node of a Huffman tree. Internal nodes own both children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeNode {
    Leaf {
        symbol: u8,
        frequency: u64,
    },
    Internal {
        frequency: u64,
        left: Box<TreeNode>,
        right: Box<TreeNode>,
    },
}

impl TreeNode {
    pub fn frequency(&self) -> u64 {
        match self {
            TreeNode::Leaf { frequency, .. } | TreeNode::Internal { frequency, .. } => *frequency,
        }
    }
}

/// An immutable Huffman tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuffmanTree {
    root: TreeNode,
}

/// Heap entry ordered so that `BinaryHeap` pops the lowest
/// `(frequency, order)` first.
struct Pending {
    frequency: u64,
    order: usize,
    node: TreeNode,
}

impl PartialEq for Pending {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Pending {}

impl PartialOrd for Pending {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pending {
    fn cmp(&self, other: &Self) -> Ordering {
        // reversed: BinaryHeap is a max-heap
        (other.frequency, other.order).cmp(&(self.frequency, self.order))
    }
}

impl HuffmanTree {
    /// Build the tree for `table`.
    ///
    /// A single-symbol table produces a lone leaf; `CodeTable` gives it the
    /// one-bit code `0`.
    ///
    /// # Errors
    /// - `Error::EmptyAlphabet` if the table has no entries
    pub fn build(table: &FrequencyTable) -> Result<Self> {
        if table.is_empty() {
            return Err(Error::EmptyAlphabet);
        }

        let mut heap: BinaryHeap<Pending> = table
            .iter()
            .enumerate()
            .map(|(order, (symbol, frequency))| Pending {
                frequency,
                order,
                node: TreeNode::Leaf { symbol, frequency },
            })
            .collect();

        if heap.len() == 1 {
            if let Some(only) = heap.pop() {
                log::trace!("single-symbol alphabet, tree is one leaf");
                return Ok(Self { root: only.node });
            }
        }

        let mut next_order = heap.len();
        while heap.len() > 1 {
            let (Some(first), Some(second)) = (heap.pop(), heap.pop()) else {
                break;
            };
            // bounded by table.total(), which fits in u64
            let frequency = first.frequency + second.frequency;

            heap.push(Pending {
                frequency,
                order: next_order,
                node: TreeNode::Internal {
                    frequency,
                    left: Box::new(second.node),
                    right: Box::new(first.node),
                },
            });
            next_order += 1;
        }

        let root = heap.pop().map(|entry| entry.node).ok_or(Error::EmptyAlphabet)?;
        log::trace!(
            "built huffman tree: {} symbols, root frequency {}",
            table.len(),
            root.frequency()
        );
        Ok(Self { root })
    }

    #[cfg(test)]
    pub(crate) fn from_root(root: TreeNode) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &TreeNode {
        &self.root
    }

    /// Frequency of the root, equal to the number of encoded symbols.
    pub fn total_frequency(&self) -> u64 {
        self.root.frequency()
    }

    /// Number of leaves, i.e. the alphabet size.
    pub fn leaf_count(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![&self.root];
        while let Some(node) = stack.pop() {
            match node {
                TreeNode::Leaf { .. } => count += 1,
                TreeNode::Internal { left, right, .. } => {
                    stack.push(left);
                    stack.push(right);
                }
            }
        }
        count
    }
}
