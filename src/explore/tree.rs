//! Sequential depth-first explorer.

use crate::problem::{Decompose, NeverPrune, Prune, Subproblem};

/// Counters collected by one exploration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExploreStats {
    /// Leaves visited.
    pub leaves: u64,
    /// Non-leaf nodes decomposed.
    pub decomposed: u64,
    /// Non-leaf nodes discarded by the prune policy.
    pub pruned: u64,
}

/// Explicit-stack depth-first explorer.
///
/// Children are pushed in decompose emission order, so the *last*-emitted
/// child is visited *first*: visitation order is the product of the strategy's
/// emission order and the stack's LIFO semantics, not of either alone. The
/// leaf count is invariant to that order.
///
/// The prune policy is consulted on every non-leaf node after it is taken and
/// before it is decomposed; a pruned node's subtree is discarded. With the
/// default [`NeverPrune`] this is pure enumeration.
pub struct Tree<S, D, P = NeverPrune> {
    stack: Vec<S>,
    decompose: D,
    prune: P,
}

impl<S: Subproblem, D: Decompose<S>> Tree<S, D> {
    /// Explorer with the always-pass prune policy.
    pub fn new(decompose: D) -> Self {
        Self::with_prune(decompose, NeverPrune)
    }
}

impl<S: Subproblem, D: Decompose<S>, P: Prune<S>> Tree<S, D, P> {
    pub fn with_prune(decompose: D, prune: P) -> Self {
        Self {
            stack: Vec::new(),
            decompose,
            prune,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    /// Number of nodes currently on the stack.
    pub fn len(&self) -> usize {
        self.stack.len()
    }

    /// Push one node.
    pub fn insert(&mut self, node: S) {
        self.stack.push(node);
    }

    /// Push nodes in order; the last one will be taken first.
    pub fn insert_all(&mut self, nodes: Vec<S>) {
        self.stack.extend(nodes);
    }

    /// Pop one node, or `None` if the stack is empty.
    pub fn take(&mut self) -> Option<S> {
        self.stack.pop()
    }

    /// Exhaustively explore the tree rooted at `root`, visiting every leaf
    /// exactly once. Any frontier left over from a previous `explore_n` is
    /// discarded first.
    pub fn explore(&mut self, root: S) -> ExploreStats {
        self.run(root, None)
    }

    /// Explore until `limit` leaves have been counted, then return
    /// immediately, leaving the residual frontier on the stack unexplored.
    /// A limit of zero returns before any node is processed.
    /// Used to sample the shape of a tree too large to enumerate fully; a
    /// later call starts fresh, it does not resume.
    pub fn explore_n(&mut self, root: S, limit: u64) -> ExploreStats {
        self.run(root, Some(limit))
    }

    fn run(&mut self, root: S, limit: Option<u64>) -> ExploreStats {
        self.stack.clear();
        self.insert(root);

        let mut stats = ExploreStats::default();
        while Some(stats.leaves) != limit {
            let Some(node) = self.take() else {
                break;
            };
            if node.is_leaf() {
                stats.leaves += 1;
            } else if self.prune.should_prune(&node) {
                stats.pruned += 1;
            } else {
                let children = self.decompose.decompose(&node);
                assert!(
                    !children.is_empty(),
                    "decompose returned no children for a non-leaf"
                );
                stats.decomposed += 1;
                self.insert_all(children);
            }
        }
        stats
    }
}
