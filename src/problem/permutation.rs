//! Permutation enumeration: the decision space is all orderings of `size`
//! items.
//!
//! A node keeps the full value array at all times; `limit1` is the forward
//! boundary separating the decided prefix `values[..limit1]` from the
//! undecided suffix. Fixing the next position means swapping a suffix value
//! into slot `limit1`, so every node stays a permutation of `0..size` and no
//! candidate bookkeeping is needed.

use std::fmt;
use std::thread;
use std::time::Duration;

use crate::error::EngineError;
use crate::problem::{Decompose, Subproblem};

/// A partial permutation of `0..size`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermutationSubproblem {
    /// Problem dimension, fixed for the whole tree.
    pub size: usize,
    /// Number of positions fixed so far (== depth of the node).
    pub limit1: usize,
    /// Permutation of `0..size`; the prefix `..limit1` is decided.
    pub values: Vec<usize>,
}

impl PermutationSubproblem {
    /// Root node: identity permutation, nothing decided.
    ///
    /// Fails on a zero-dimension problem; no partial state is created.
    pub fn root(size: usize) -> Result<Self, EngineError> {
        if size == 0 {
            return Err(EngineError::InvalidSize);
        }
        Ok(Self {
            size,
            limit1: 0,
            values: (0..size).collect(),
        })
    }

    /// Child fixing position `limit1` to the value currently at index `j`.
    ///
    /// Copies the parent's assignment, swaps the chosen value into the
    /// boundary slot, and advances the boundary by one.
    pub fn child_of(parent: &Self, j: usize) -> Self {
        debug_assert!(j >= parent.limit1 && j < parent.size);
        let mut values = parent.values.clone();
        values.swap(parent.limit1, j);
        Self {
            size: parent.size,
            limit1: parent.limit1 + 1,
            values,
        }
    }

    /// Depth of this node: one decision per fixed position.
    pub fn depth(&self) -> usize {
        self.limit1
    }

    /// The decided prefix of the permutation.
    pub fn decided(&self) -> &[usize] {
        &self.values[..self.limit1]
    }
}

impl Subproblem for PermutationSubproblem {
    fn is_leaf(&self) -> bool {
        self.limit1 == self.size
    }
}

impl fmt::Display for PermutationSubproblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, v) in self.values.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            if i == self.limit1 {
                write!(f, "| ")?;
            }
            write!(f, "{}", v)?;
        }
        Ok(())
    }
}

/// Decompose a permutation node into one child per undecided value.
///
/// Children are emitted in *reverse* candidate-index order so that, pushed in
/// emission order onto a LIFO stack, they pop in ascending lexicographic
/// order. An optional per-child delay models variable, non-negligible
/// branching cost for load-imbalance benchmarking.
#[derive(Debug, Clone, Copy, Default)]
pub struct DecomposePermutation {
    child_delay: Option<Duration>,
}

impl DecomposePermutation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sleep this long after materializing each child (synthetic cost).
    pub fn with_child_delay(mut self, delay: Duration) -> Self {
        self.child_delay = Some(delay);
        self
    }
}

impl Decompose<PermutationSubproblem> for DecomposePermutation {
    fn decompose(&self, node: &PermutationSubproblem) -> Vec<PermutationSubproblem> {
        assert!(!node.is_leaf(), "decompose invoked on a leaf");

        let mut children = Vec::with_capacity(node.size - node.limit1);
        // reverse, to get lexicographic DFS under LIFO popping
        for j in (node.limit1..node.size).rev() {
            children.push(PermutationSubproblem::child_of(node, j));
            if let Some(delay) = self.child_delay {
                thread::sleep(delay);
            }
        }
        children
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_rejects_zero_size() {
        assert_eq!(
            PermutationSubproblem::root(0),
            Err(EngineError::InvalidSize)
        );
    }

    #[test]
    fn test_root_is_identity() {
        let root = PermutationSubproblem::root(4).unwrap();
        assert_eq!(root.values, vec![0, 1, 2, 3]);
        assert_eq!(root.depth(), 0);
        assert!(!root.is_leaf());
        assert!(root.decided().is_empty());
    }

    #[test]
    fn test_size_one_root_is_not_leaf() {
        // one decision remains: place the single value
        let root = PermutationSubproblem::root(1).unwrap();
        assert!(!root.is_leaf());
    }

    #[test]
    fn test_child_advances_boundary_by_one() {
        let root = PermutationSubproblem::root(3).unwrap();
        let child = PermutationSubproblem::child_of(&root, 2);
        assert_eq!(child.depth(), root.depth() + 1);
        assert_eq!(child.values, vec![2, 1, 0]);
        assert_eq!(child.decided(), &[2]);
    }

    #[test]
    fn test_decompose_child_count() {
        let decompose = DecomposePermutation::new();
        let root = PermutationSubproblem::root(4).unwrap();
        let children = decompose.decompose(&root);
        assert_eq!(children.len(), 4);

        let grandchildren = decompose.decompose(&children[0]);
        assert_eq!(grandchildren.len(), 3);
    }

    #[test]
    fn test_decompose_emits_reverse_order() {
        // last-emitted child carries the smallest candidate, so a LIFO pop
        // visits children in ascending lexicographic order
        let decompose = DecomposePermutation::new();
        let root = PermutationSubproblem::root(3).unwrap();
        let children = decompose.decompose(&root);
        let first_fixed: Vec<usize> = children.iter().map(|c| c.values[0]).collect();
        assert_eq!(first_fixed, vec![2, 1, 0]);
    }

    #[test]
    fn test_children_stay_permutations() {
        let decompose = DecomposePermutation::new();
        let root = PermutationSubproblem::root(5).unwrap();
        for child in decompose.decompose(&root) {
            let mut sorted = child.values.clone();
            sorted.sort_unstable();
            assert_eq!(sorted, vec![0, 1, 2, 3, 4]);
        }
    }

    #[test]
    #[should_panic(expected = "decompose invoked on a leaf")]
    fn test_decompose_on_leaf_panics() {
        let decompose = DecomposePermutation::new();
        let mut node = PermutationSubproblem::root(2).unwrap();
        node.limit1 = 2;
        decompose.decompose(&node);
    }

    #[test]
    fn test_display_marks_boundary() {
        let root = PermutationSubproblem::root(3).unwrap();
        let child = PermutationSubproblem::child_of(&root, 1);
        assert_eq!(child.to_string(), "1 | 0 2");
    }
}
