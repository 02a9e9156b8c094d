//! treebench - a parallel tree-search benchmark engine
//!
//! Benchmarks irregular, dynamically-discovered divide-and-conquer workloads
//! by exhaustively enumerating the leaves of a decomposition tree:
//! - **problem**: subproblem variants (permutation, binary string, unbalanced
//!   random tree) and their decompose/prune strategies
//! - **explore**: a single-threaded explicit-stack DFS explorer and a
//!   lock-protected shared work pool with pending-work termination detection
//! - **parallel**: the orchestrator that drives a fixed set of worker threads
//!   over one shared pool
//!
//! The engine guarantees that every leaf is counted exactly once regardless of
//! worker count; it deliberately does not guarantee visitation order across
//! workers.

pub mod error;
pub mod explore;
pub mod parallel;
pub mod problem;

pub use error::EngineError;
pub use explore::{ExploreStats, SharedPool, Tree};
pub use parallel::{ExploreReport, ParallelConfig, run_parallel_exploration};
pub use problem::{Decompose, NeverPrune, Prune, Subproblem};
