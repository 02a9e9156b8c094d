//! Parallel exploration of one decomposition tree by a fixed set of workers.
//!
//! The orchestrator seeds a [`SharedPool`](crate::explore::SharedPool) with
//! the root, spawns one worker thread per configured slot, and waits for the
//! pending-work counter to drain. Workers busy-poll the counter rather than
//! block: an empty stack with a nonzero counter means another worker is still
//! decomposing a node that may repopulate the pool.
//!
//! The leaf *count* is invariant to the worker count and to scheduling; leaf
//! *visitation order* is not, and deliberately so - this is the one observable
//! divergence from the sequential [`Tree`](crate::explore::Tree) explorer,
//! which visits leaves in a fixed order.

pub mod config;
pub mod coordinator;

pub use config::ParallelConfig;
pub use coordinator::{ExploreReport, WorkerStats, run_parallel_exploration};
