//! Explorers over a decomposition tree
//!
//! Two explorers share the same take/classify/decompose loop:
//! - [`Tree`]: single-threaded, explicit-stack DFS with a fixed visitation
//!   order (decompose emission order x LIFO popping)
//! - [`SharedPool`]: a lock-protected LIFO store plus pending-work counter
//!   that lets any number of workers cooperate on one frontier, with
//!   termination detected when the counter reaches zero

pub mod pool;
pub mod tree;

pub use pool::SharedPool;
pub use tree::{ExploreStats, Tree};
