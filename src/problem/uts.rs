//! Unbalanced tree search: a randomized Galton-Watson workload.
//!
//! Each node's branching factor is a random variable drawn from a geometric
//! distribution whose expectation shrinks linearly with depth, which produces
//! trees with severe, unpredictable load imbalance - the stress case for the
//! shared-pool explorer. The randomness is carried *in the node*: a child's
//! RNG state is a deterministic function of its parent's state and its child
//! index, so decomposition stays a pure function and two explorations of the
//! same root see the identical tree, whatever the thread count.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::problem::{Decompose, Subproblem};

/// Cap on the branching factor, matching the classic UTS benchmark.
const MAX_CHILDREN: usize = 100;

/// Shape parameters of the random tree.
#[derive(Debug, Clone, Copy)]
pub struct UtsParams {
    /// Expected branching factor at the root.
    pub b0: f64,
    /// Depth at which the expected branching factor reaches zero.
    pub gen_mx: usize,
    /// Root RNG seed; fixes the whole tree.
    pub seed: u64,
}

impl Default for UtsParams {
    fn default() -> Self {
        Self {
            b0: 4.0,
            gen_mx: 6,
            seed: 19,
        }
    }
}

impl UtsParams {
    /// Expected branching factor at `depth` (linear decrease shape).
    fn expected_branching(&self, depth: usize) -> f64 {
        if depth == 0 {
            self.b0
        } else if depth >= self.gen_mx {
            0.0
        } else {
            self.b0 * (1.0 - depth as f64 / self.gen_mx as f64)
        }
    }

    /// Sample a branching factor from the geometric distribution with the
    /// depth-adjusted expectation, capped at [`MAX_CHILDREN`].
    fn sample_num_children(&self, state: u64, depth: usize) -> usize {
        let b_i = self.expected_branching(depth);
        if b_i <= 0.0 {
            return 0;
        }
        // p chosen so the geometric distribution has expectation b_i;
        // inverse CDF applied to one uniform draw
        let p = 1.0 / (1.0 + b_i);
        let mut rng = SmallRng::seed_from_u64(state);
        let u: f64 = rng.random();
        let n = ((1.0 - u).ln() / (1.0 - p).ln()).floor() as usize;
        n.min(MAX_CHILDREN)
    }
}

/// One node of the random tree: depth, RNG state, and the branching factor
/// sampled once at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UtsSubproblem {
    pub depth: usize,
    state: u64,
    num_children: usize,
}

impl UtsSubproblem {
    /// Root node; its subtree is fully determined by `params`.
    pub fn root(params: &UtsParams) -> Self {
        let state = mix(params.seed);
        Self {
            depth: 0,
            state,
            num_children: params.sample_num_children(state, 0),
        }
    }

    /// The `index`-th child of `parent`, with RNG state spawned from the
    /// parent's state.
    pub fn child_of(parent: &Self, index: usize, params: &UtsParams) -> Self {
        debug_assert!(index < parent.num_children);
        let state = mix(parent.state ^ (index as u64).wrapping_mul(0xA24BAED4963EE407));
        let depth = parent.depth + 1;
        Self {
            depth,
            state,
            num_children: params.sample_num_children(state, depth),
        }
    }

    /// Branching factor sampled for this node.
    pub fn num_children(&self) -> usize {
        self.num_children
    }
}

impl Subproblem for UtsSubproblem {
    fn is_leaf(&self) -> bool {
        self.num_children == 0
    }
}

/// splitmix64 finalizer; decorrelates child states spawned from one parent.
fn mix(mut z: u64) -> u64 {
    z = z.wrapping_add(0x9E3779B97F4A7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58476D1CE4E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D049BB133111EB);
    z ^ (z >> 31)
}

/// Decompose a random-tree node into its sampled number of children.
#[derive(Debug, Clone, Copy, Default)]
pub struct DecomposeUts {
    params: UtsParams,
}

impl DecomposeUts {
    pub fn new(params: UtsParams) -> Self {
        Self { params }
    }
}

impl Decompose<UtsSubproblem> for DecomposeUts {
    fn decompose(&self, node: &UtsSubproblem) -> Vec<UtsSubproblem> {
        assert!(!node.is_leaf(), "decompose invoked on a leaf");
        (0..node.num_children)
            .map(|i| UtsSubproblem::child_of(node, i, &self.params))
            .collect()
    }
}
