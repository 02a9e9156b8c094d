use clap::{Parser, Subcommand};
use log::info;
use std::time::{Duration, Instant};

use treebench::error::EngineError;
use treebench::explore::Tree;
use treebench::parallel::{ParallelConfig, run_parallel_exploration};
use treebench::problem::{
    BinarySubproblem, Decompose, DecomposeBinary, DecomposePermutation, DecomposeUts,
    PermutationSubproblem, Subproblem, UtsParams, UtsSubproblem,
};

// --- Command Line Arguments ---

#[derive(Parser)]
#[command(name = "treebench")]
#[command(about = "treebench - parallel tree-search benchmark engine")]
#[command(version)]
#[command(subcommand_required = true)]
#[command(arg_required_else_help = true)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

/// Options shared by every workload.
#[derive(clap::Args)]
struct RunArgs {
    /// Worker thread count for the shared-pool explorer; omit to run the
    /// sequential explorer
    #[arg(long)]
    workers: Option<usize>,
    /// Stop after this many leaves instead of enumerating the whole tree
    /// (sequential explorer only)
    #[arg(long, conflicts_with = "workers")]
    sample: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Enumerate all permutations of `size` items
    Permutation {
        /// Problem dimension
        #[arg(long, default_value_t = 8)]
        size: usize,
        /// Synthetic per-child decomposition delay in nanoseconds, modeling
        /// non-negligible branching cost
        #[arg(long, default_value_t = 0)]
        delay_ns: u64,
        #[command(flatten)]
        run: RunArgs,
    },
    /// Enumerate all binary strings of length `size`
    Binary {
        /// Problem dimension
        #[arg(long, default_value_t = 8)]
        size: usize,
        #[command(flatten)]
        run: RunArgs,
    },
    /// Explore an unbalanced random (Galton-Watson) tree
    Uts {
        /// Expected branching factor at the root
        #[arg(long, default_value_t = 4.0)]
        b0: f64,
        /// Depth at which the expected branching factor reaches zero
        #[arg(long, default_value_t = 6)]
        gen_mx: usize,
        /// Root RNG seed; fixes the whole tree
        #[arg(long, default_value_t = 19)]
        seed: u64,
        #[command(flatten)]
        run: RunArgs,
    },
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    if let Err(err) = dispatch(args.command) {
        eprintln!("error: {}", err);
        std::process::exit(1);
    }
}

fn dispatch(command: Commands) -> Result<(), EngineError> {
    match command {
        Commands::Permutation {
            size,
            delay_ns,
            run,
        } => {
            let mut decompose = DecomposePermutation::new();
            if delay_ns > 0 {
                decompose = decompose.with_child_delay(Duration::from_nanos(delay_ns));
            }
            let root = PermutationSubproblem::root(size)?;
            info!("permutation workload, size {}", size);
            run_workload(root, decompose, &run);
        }
        Commands::Binary { size, run } => {
            let root = BinarySubproblem::root(size)?;
            info!("binary workload, size {}", size);
            run_workload(root, DecomposeBinary::new(), &run);
        }
        Commands::Uts {
            b0,
            gen_mx,
            seed,
            run,
        } => {
            let params = UtsParams { b0, gen_mx, seed };
            let root = UtsSubproblem::root(&params);
            info!("uts workload, b0 {}, gen_mx {}, seed {}", b0, gen_mx, seed);
            run_workload(root, DecomposeUts::new(params), &run);
        }
    }
    Ok(())
}

/// Drive one workload through the sequential or shared-pool explorer and
/// print the leaf count and wall-clock time.
fn run_workload<S, D>(root: S, decompose: D, run: &RunArgs)
where
    S: Subproblem,
    D: Decompose<S> + Sync,
{
    match run.workers {
        Some(workers) => {
            let config = ParallelConfig::default().with_workers(workers);
            info!("shared-pool explorer, {} workers", config.num_workers);

            let report = run_parallel_exploration(root, &decompose, &config);
            for w in &report.workers {
                info!(
                    "worker {}: taken {}, leaves {}, decompositions {}",
                    w.worker_id, w.taken, w.leaves, w.decompositions
                );
            }
            println!("leaves\t{}", report.leaves);
            println!("time\t{:.6}", report.elapsed.as_secs_f64());
        }
        None => {
            let mut tree = Tree::new(decompose);
            let start = Instant::now();
            let stats = match run.sample {
                Some(limit) => {
                    info!("sequential explorer, sampling {} leaves", limit);
                    tree.explore_n(root, limit)
                }
                None => {
                    info!("sequential explorer");
                    tree.explore(root)
                }
            };
            let elapsed = start.elapsed();
            println!("leaves\t{}", stats.leaves);
            println!("time\t{:.6}", elapsed.as_secs_f64());
        }
    }
}
