//! Lock-protected shared work pool with pending-work termination detection.

use std::sync::Mutex;

use crate::problem::Subproblem;

struct PoolState<S> {
    stack: Vec<S>,
    /// Nodes inserted but not yet disposed of - on the stack *or* in flight
    /// inside a worker.
    pending: u64,
}

/// Shared LIFO store of pending subproblems, safe for concurrent producers
/// and consumers.
///
/// One coarse lock guards both the stack and the pending counter, so the two
/// are never observed in an inconsistent state. The counter tracks
/// inserted-but-not-yet-disposed nodes, not stack depth: a node stays pending
/// from `insert` until the worker that took it calls [`mark_disposed`], which
/// keeps `size() > 0` for the node's entire in-flight lifetime. That window is
/// what closes the lost-work hazard where every worker sees an empty stack
/// while a sibling-producing decomposition is still in progress elsewhere.
///
/// [`mark_disposed`]: SharedPool::mark_disposed
pub struct SharedPool<S> {
    inner: Mutex<PoolState<S>>,
}

impl<S: Subproblem> SharedPool<S> {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(PoolState {
                stack: Vec::new(),
                pending: 0,
            }),
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, PoolState<S>> {
        self.inner.lock().expect("pool lock poisoned")
    }

    /// Push one node and count it as pending.
    pub fn insert(&self, node: S) {
        let mut state = self.lock();
        state.stack.push(node);
        state.pending += 1;
    }

    /// Push nodes in order (last inserted is taken first) and count them all
    /// as pending, atomically.
    pub fn insert_all(&self, nodes: Vec<S>) {
        let mut state = self.lock();
        state.pending += nodes.len() as u64;
        state.stack.extend(nodes);
    }

    /// Pop one node; ownership transfers exclusively to the caller. Returns
    /// `None` without side effects if the stack is currently empty - which
    /// does *not* mean the search is over while `size()` is still nonzero.
    ///
    /// Taking a node does not decrement the pending counter; the caller must
    /// call [`mark_disposed`](SharedPool::mark_disposed) once the node is
    /// fully dealt with.
    pub fn take(&self) -> Option<S> {
        self.lock().stack.pop()
    }

    /// Record that one previously taken node is fully disposed of: counted as
    /// a leaf, or all of its children inserted. Called exactly once per taken
    /// node.
    pub fn mark_disposed(&self) {
        let mut state = self.lock();
        assert!(
            state.pending > 0,
            "mark_disposed without an outstanding node"
        );
        state.pending -= 1;
    }

    /// Current pending-work counter. The termination test every worker runs
    /// is `size() == 0`.
    pub fn size(&self) -> u64 {
        self.lock().pending
    }

    /// Whether the stack is currently empty (diagnostic; not a termination
    /// test).
    pub fn is_empty(&self) -> bool {
        self.lock().stack.is_empty()
    }
}

impl<S: Subproblem> Default for SharedPool<S> {
    fn default() -> Self {
        Self::new()
    }
}
