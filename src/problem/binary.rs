//! Binary-string enumeration: the decision space is all bit strings of
//! length `size`.
//!
//! The fixed branching factor of two makes this the cheapest workload in the
//! suite; it exercises the explorers with maximum node churn and minimum
//! per-node cost.

use std::fmt;

use crate::error::EngineError;
use crate::problem::{Decompose, Subproblem};

/// A partial binary string: `depth` bits decided out of `size`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinarySubproblem {
    /// Problem dimension, fixed for the whole tree.
    pub size: usize,
    /// Number of bits fixed so far.
    pub depth: usize,
    /// The decided bits, length == depth.
    pub values: Vec<u8>,
}

impl BinarySubproblem {
    /// Root node with no bits decided. Fails on a zero-dimension problem.
    pub fn root(size: usize) -> Result<Self, EngineError> {
        if size == 0 {
            return Err(EngineError::InvalidSize);
        }
        Ok(Self {
            size,
            depth: 0,
            values: Vec::with_capacity(size),
        })
    }

    /// Child appending one decided bit.
    pub fn child_of(parent: &Self, bit: u8) -> Self {
        debug_assert!(bit <= 1);
        let mut values = parent.values.clone();
        values.push(bit);
        Self {
            size: parent.size,
            depth: parent.depth + 1,
            values,
        }
    }
}

impl Subproblem for BinarySubproblem {
    fn is_leaf(&self) -> bool {
        self.depth == self.size
    }
}

impl fmt::Display for BinarySubproblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in &self.values {
            write!(f, "{}", bit)?;
        }
        Ok(())
    }
}

/// Decompose a binary node into its 1-child and 0-child, in that order.
#[derive(Debug, Clone, Copy, Default)]
pub struct DecomposeBinary;

impl DecomposeBinary {
    pub fn new() -> Self {
        Self
    }
}

impl Decompose<BinarySubproblem> for DecomposeBinary {
    fn decompose(&self, node: &BinarySubproblem) -> Vec<BinarySubproblem> {
        assert!(!node.is_leaf(), "decompose invoked on a leaf");
        vec![
            BinarySubproblem::child_of(node, 1),
            BinarySubproblem::child_of(node, 0),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_rejects_zero_size() {
        assert_eq!(BinarySubproblem::root(0), Err(EngineError::InvalidSize));
    }

    #[test]
    fn test_root_has_no_decisions() {
        let root = BinarySubproblem::root(5).unwrap();
        assert_eq!(root.depth, 0);
        assert!(root.values.is_empty());
        assert!(!root.is_leaf());
    }

    #[test]
    fn test_child_appends_one_bit() {
        let root = BinarySubproblem::root(3).unwrap();
        let child = BinarySubproblem::child_of(&root, 1);
        assert_eq!(child.depth, 1);
        assert_eq!(child.values, vec![1]);
        assert!(!child.is_leaf());
    }

    #[test]
    fn test_leaf_at_full_depth() {
        let mut node = BinarySubproblem::root(2).unwrap();
        node = BinarySubproblem::child_of(&node, 0);
        node = BinarySubproblem::child_of(&node, 1);
        assert!(node.is_leaf());
        assert_eq!(node.to_string(), "01");
    }

    #[test]
    fn test_decompose_yields_one_then_zero() {
        let decompose = DecomposeBinary::new();
        let root = BinarySubproblem::root(2).unwrap();
        let children = decompose.decompose(&root);
        assert_eq!(children.len(), 2);
        assert_eq!(children[0].values, vec![1]);
        assert_eq!(children[1].values, vec![0]);
    }

    #[test]
    #[should_panic(expected = "decompose invoked on a leaf")]
    fn test_decompose_on_leaf_panics() {
        let decompose = DecomposeBinary::new();
        let mut leaf = BinarySubproblem::root(1).unwrap();
        leaf = BinarySubproblem::child_of(&leaf, 0);
        decompose.decompose(&leaf);
    }
}
