//! Orchestrator that drives worker threads over one shared pool.

use std::sync::Mutex;
use std::thread;
use std::time::{Duration, Instant};

use crossbeam_channel::unbounded;
use log::debug;

use crate::explore::SharedPool;
use crate::parallel::config::ParallelConfig;
use crate::problem::{Decompose, Subproblem};

/// Per-worker counters, reported to the coordinator when the worker exits.
#[derive(Debug, Clone, Copy, Default)]
pub struct WorkerStats {
    pub worker_id: usize,
    /// Nodes taken from the pool.
    pub taken: u64,
    /// Nodes classified as leaves.
    pub leaves: u64,
    /// Nodes decomposed into children.
    pub decompositions: u64,
}

impl WorkerStats {
    fn new(worker_id: usize) -> Self {
        Self {
            worker_id,
            ..Default::default()
        }
    }
}

/// Result of a parallel exploration run.
#[derive(Debug, Clone)]
pub struct ExploreReport {
    /// Total leaves visited, equal to the sequential count for the same root.
    pub leaves: u64,
    /// Wall-clock time around the whole run, root insertion to rendezvous.
    pub elapsed: Duration,
    /// Per-worker statistics, ordered by worker id.
    pub workers: Vec<WorkerStats>,
}

/// Explore the tree rooted at `root` with `config.num_workers` threads
/// sharing one pool.
///
/// The root is inserted single-threaded before any worker starts. Each worker
/// loops until the pool's pending-work counter reaches zero: a taken leaf
/// increments the shared leaf counter (under its own lock, separate from the
/// pool's) and is disposed; a taken non-leaf is decomposed, its children
/// inserted, and then disposed. A momentarily empty stack is busy-polled, not
/// waited on. All workers have joined before the report is built.
pub fn run_parallel_exploration<S, D>(
    root: S,
    decompose: &D,
    config: &ParallelConfig,
) -> ExploreReport
where
    S: Subproblem,
    D: Decompose<S> + Sync,
{
    let pool = SharedPool::new();
    pool.insert(root);

    let leaf_count = Mutex::new(0u64);
    let (stats_tx, stats_rx) = unbounded();

    let start = Instant::now();
    thread::scope(|scope| {
        for worker_id in 0..config.num_workers {
            let stats_tx = stats_tx.clone();
            let pool = &pool;
            let leaf_count = &leaf_count;
            scope.spawn(move || {
                debug!("worker {} started", worker_id);
                let stats = worker_loop(worker_id, pool, decompose, leaf_count);
                debug!(
                    "worker {} finished: taken {}, leaves {}, decompositions {}",
                    worker_id, stats.taken, stats.leaves, stats.decompositions
                );
                let _ = stats_tx.send(stats);
            });
        }
    });
    let elapsed = start.elapsed();
    drop(stats_tx);

    let mut workers: Vec<WorkerStats> = stats_rx.iter().collect();
    workers.sort_by_key(|w| w.worker_id);

    let leaves = *leaf_count.lock().expect("leaf counter lock poisoned");
    ExploreReport {
        leaves,
        elapsed,
        workers,
    }
}

fn worker_loop<S, D>(
    worker_id: usize,
    pool: &SharedPool<S>,
    decompose: &D,
    leaf_count: &Mutex<u64>,
) -> WorkerStats
where
    S: Subproblem,
    D: Decompose<S> + Sync,
{
    let mut stats = WorkerStats::new(worker_id);
    while pool.size() > 0 {
        match pool.take() {
            Some(node) => {
                stats.taken += 1;
                if node.is_leaf() {
                    {
                        *leaf_count.lock().expect("leaf counter lock poisoned") += 1;
                    }
                    stats.leaves += 1;
                    pool.mark_disposed();
                } else {
                    let children = decompose.decompose(&node);
                    assert!(
                        !children.is_empty(),
                        "decompose returned no children for a non-leaf"
                    );
                    stats.decompositions += 1;
                    pool.insert_all(children);
                    pool.mark_disposed();
                }
            }
            // stack momentarily empty while work is in flight elsewhere
            None => std::hint::spin_loop(),
        }
    }
    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::explore::Tree;
    use crate::problem::binary::{BinarySubproblem, DecomposeBinary};
    use crate::problem::permutation::{DecomposePermutation, PermutationSubproblem};
    use crate::problem::uts::{DecomposeUts, UtsParams, UtsSubproblem};

    #[test]
    fn test_single_worker_matches_sequential() {
        let decompose = DecomposePermutation::new();
        let sequential = Tree::new(decompose).explore(PermutationSubproblem::root(6).unwrap());

        let config = ParallelConfig::default().with_workers(1);
        let report = run_parallel_exploration(
            PermutationSubproblem::root(6).unwrap(),
            &decompose,
            &config,
        );
        assert_eq!(report.leaves, sequential.leaves);
        assert_eq!(report.leaves, 720);
    }

    #[test]
    fn test_four_workers_permutation_size_eight() {
        let decompose = DecomposePermutation::new();
        let config = ParallelConfig::default().with_workers(4);
        let report = run_parallel_exploration(
            PermutationSubproblem::root(8).unwrap(),
            &decompose,
            &config,
        );
        assert_eq!(report.leaves, 40320);
        assert_eq!(report.workers.len(), 4);

        // every worker's tally is consistent and the whole tree was covered
        let taken: u64 = report.workers.iter().map(|w| w.taken).sum();
        let leaves: u64 = report.workers.iter().map(|w| w.leaves).sum();
        assert_eq!(leaves, report.leaves);
        let decompositions: u64 = report.workers.iter().map(|w| w.decompositions).sum();
        assert_eq!(taken, leaves + decompositions);
    }

    #[test]
    fn test_binary_count_is_thread_count_invariant() {
        let decompose = DecomposeBinary::new();
        for workers in [1, 2, 3, 8] {
            let config = ParallelConfig::default().with_workers(workers);
            let report =
                run_parallel_exploration(BinarySubproblem::root(10).unwrap(), &decompose, &config);
            assert_eq!(report.leaves, 1024, "workers {}", workers);
        }
    }

    #[test]
    fn test_uts_parallel_matches_sequential() {
        let params = UtsParams::default();
        let decompose = DecomposeUts::new(params);
        let sequential = Tree::new(decompose).explore(UtsSubproblem::root(&params));

        let config = ParallelConfig::default().with_workers(4);
        let report = run_parallel_exploration(UtsSubproblem::root(&params), &decompose, &config);
        assert_eq!(report.leaves, sequential.leaves);
    }

    #[test]
    fn test_minimal_tree() {
        // size-1 binary root decomposes once into two leaves
        let decompose = DecomposeBinary::new();
        let config = ParallelConfig::default().with_workers(2);
        let report =
            run_parallel_exploration(BinarySubproblem::root(1).unwrap(), &decompose, &config);
        assert_eq!(report.leaves, 2);
    }
}
