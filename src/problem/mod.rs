//! Subproblem variants and their decomposition strategies
//!
//! A subproblem is one node of the search tree: a partial candidate solution
//! plus whatever frontier markers its variant needs. The engine only ever asks
//! a node whether it is a leaf; everything else (assignment layout, bounds,
//! RNG state) is private to the variant. Variants provided here:
//! - Permutation: enumerate all permutations of `size` items
//! - Binary: enumerate all binary strings of length `size`
//! - Uts: unbalanced Galton-Watson trees for load-imbalance benchmarking

pub mod binary;
pub mod permutation;
pub mod uts;

pub use binary::{BinarySubproblem, DecomposeBinary};
pub use permutation::{DecomposePermutation, PermutationSubproblem};
pub use uts::{DecomposeUts, UtsParams, UtsSubproblem};

/// One node of the decomposition tree.
///
/// A subproblem has exactly one owner at any instant - an explorer's stack,
/// the shared pool, or the worker currently expanding it - and changes owner
/// only by move. Implementations are plain owned data; `Send` is what lets a
/// node migrate between worker threads through the pool.
pub trait Subproblem: Send {
    /// True iff no decisions remain: the node is a fully specified candidate
    /// and must not be decomposed.
    fn is_leaf(&self) -> bool;
}

/// Strategy producing the children of a non-leaf subproblem.
///
/// Must be a pure function of the node: deterministic, no mutable state shared
/// across invocations (`&self` + `Sync`). That purity is what makes concurrent
/// decomposition by independent workers safe with no synchronization beyond
/// each worker's exclusive ownership of the node it expands.
///
/// # Contract
/// - never invoked on a leaf (callers assert this)
/// - returns a non-empty, ordered vec of newly-owned children
/// - the children partition the parent's decision space: every leaf reachable
///   from the parent is reachable from exactly one child
///
/// Emission order matters: explorers push children in emission order onto a
/// LIFO stack, so the *last*-emitted child is visited *first*.
pub trait Decompose<S: Subproblem>: Sync {
    fn decompose(&self, node: &S) -> Vec<S>;
}

/// Strategy discarding a subproblem before decomposition.
///
/// Extension point for bound-based branch-and-bound cutoff; the engine itself
/// only does pure enumeration, where [`NeverPrune`] keeps every node.
pub trait Prune<S: Subproblem>: Sync {
    /// True if `node` should be dropped without decomposition.
    fn should_prune(&self, node: &S) -> bool;
}

/// Always-pass prune policy: pure enumeration.
#[derive(Debug, Clone, Copy, Default)]
pub struct NeverPrune;

impl<S: Subproblem> Prune<S> for NeverPrune {
    fn should_prune(&self, _node: &S) -> bool {
        false
    }
}
