//! Code table generation from a Huffman tree.
//!
//! Codes are the root-to-leaf paths of the tree: left is `0`, right is `1`.
//! Because every symbol sits on a leaf, no code can be a prefix of another.

use std::collections::BTreeMap;
use std::fmt;

use crate::error::{Error, Result};
use crate::frequency::FrequencyTable;
use crate::tree::{HuffmanTree, TreeNode};

/// One symbol's code, first bit first.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Code(Vec<bool>);

impl Code {
    pub fn bits(&self) -> &[bool] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True if `self` is a prefix of `other` (or equal to it).
    pub fn is_prefix_of(&self, other: &Code) -> bool {
        other.0.starts_with(&self.0)
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &bit in &self.0 {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

/// Mapping from symbol to its prefix-free code.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeTable {
    codes: BTreeMap<u8, Code>,
}

impl CodeTable {
    /// Walk `tree` depth-first and record the path to every leaf.
    ///
    /// A tree that is a single leaf maps its symbol to the code `0`.
    ///
    /// # Errors
    /// Returns `Error::MalformedTree` if two leaves carry the same symbol or
    /// an internal node's frequency is not the sum of its children's.
    pub fn from_tree(tree: &HuffmanTree) -> Result<Self> {
        let mut codes = BTreeMap::new();

        if let TreeNode::Leaf { symbol, .. } = tree.root() {
            codes.insert(*symbol, Code(vec![false]));
            return Ok(Self { codes });
        }

        let mut stack: Vec<(&TreeNode, Vec<bool>)> = vec![(tree.root(), Vec::new())];
        while let Some((node, path)) = stack.pop() {
            match node {
                TreeNode::Leaf { symbol, .. } => {
                    if codes.insert(*symbol, Code(path)).is_some() {
                        return Err(Error::MalformedTree {
                            reason: format!("symbol {symbol:#04x} appears on more than one leaf"),
                        });
                    }
                }
                TreeNode::Internal {
                    frequency,
                    left,
                    right,
                } => {
                    let children = left.frequency().checked_add(right.frequency());
                    if children != Some(*frequency) {
                        return Err(Error::MalformedTree {
                            reason: format!(
                                "internal node frequency {frequency} does not match children {} + {}",
                                left.frequency(),
                                right.frequency()
                            ),
                        });
                    }

                    let mut right_path = path.clone();
                    right_path.push(true);
                    stack.push((right.as_ref(), right_path));

                    let mut left_path = path;
                    left_path.push(false);
                    stack.push((left.as_ref(), left_path));
                }
            }
        }

        Ok(Self { codes })
    }

    pub fn get(&self, symbol: u8) -> Option<&Code> {
        self.codes.get(&symbol)
    }

    /// `(symbol, code)` pairs in ascending symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, &Code)> + '_ {
        self.codes.iter().map(|(&symbol, code)| (symbol, code))
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Code length of every symbol.
    pub fn code_lengths(&self) -> BTreeMap<u8, usize> {
        self.iter().map(|(symbol, code)| (symbol, code.len())).collect()
    }

    /// Expected bits per symbol when coding data with the given counts.
    ///
    /// Returns 0.0 for an empty table. Symbols without a code are ignored.
    pub fn average_code_length(&self, table: &FrequencyTable) -> f64 {
        let total = table.total();
        if total == 0 {
            return 0.0;
        }
        let bits: u64 = table
            .iter()
            .filter_map(|(symbol, count)| self.get(symbol).map(|code| code.len() as u64 * count))
            .sum();
        bits as f64 / total as f64
    }
}
