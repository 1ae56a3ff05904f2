use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{ensure, Context, Result};
use clap::{Parser, Subcommand};
use log::{info, LevelFilter};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use presortedness::metrics::compute_all;
use presortedness::report::evaluate;
use presortedness::{is_sorted, sort, BufferStrategy, MergePolicy, SortConfig};
use presortedness::{DEFAULT_MIN_RUN, DEFAULT_STACK_CONSTANT};

#[derive(Parser)]
#[command(name = "presortedness", about = "Disorder measures and adaptive run-merge sorting")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compute normalized disorder measures for every row of a CSV file.
    Metrics {
        input: PathBuf,
        /// Output file, stdout if omitted.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Sort a seeded input made of ascending runs and report merge costs.
    Sort {
        #[arg(short, default_value_t = 1_000_000)]
        n: usize,
        #[arg(long, default_value_t = 12345)]
        seed: u64,
        /// Number of ascending runs in the generated input.
        #[arg(long, default_value_t = 64)]
        runs: usize,
        /// power, stack, top-down, quicksort, insertion or binary-insertion;
        /// all adaptive policies if omitted.
        #[arg(long)]
        policy: Option<MergePolicy>,
        /// full-copy, half-copy or sentinel; all strategies if omitted.
        #[arg(long)]
        strategy: Option<BufferStrategy>,
        #[arg(long, default_value_t = DEFAULT_STACK_CONSTANT)]
        stack_constant: usize,
        #[arg(long, default_value_t = DEFAULT_MIN_RUN)]
        min_run: usize,
    },
}

/// `runs` ascending stretches of random values, cut at random positions.
fn generate_runs(rng: &mut StdRng, n: usize, runs: usize) -> Vec<i32> {
    let mut arr: Vec<i32> = (0..n).map(|_| rng.gen()).collect();
    let mut cuts: Vec<usize> = (0..runs.saturating_sub(1)).map(|_| rng.gen_range(0..=n)).collect();
    cuts.push(0);
    cuts.push(n);
    cuts.sort_unstable();
    for w in cuts.windows(2) {
        arr[w[0]..w[1]].sort_unstable();
    }
    arr
}

fn main() -> Result<()> {
    env_logger::builder()
        .filter_level(LevelFilter::Warn)
        .parse_default_env()
        .init();

    match Cli::parse().command {
        Command::Metrics { input, output } => {
            let file = File::open(&input)
                .with_context(|| format!("cannot open input csv {}", input.display()))?;
            let reader = BufReader::new(file);
            let rows = match output {
                Some(path) => {
                    let file = File::create(&path)
                        .with_context(|| format!("cannot open output csv {}", path.display()))?;
                    evaluate(reader, BufWriter::new(file))?
                }
                None => evaluate(reader, io::stdout().lock())?,
            };
            info!("Wrote {} rows", rows);
        }
        Command::Sort { n, seed, runs, policy, strategy, stack_constant, min_run } => {
            let mut rng = StdRng::seed_from_u64(seed);
            let data = generate_runs(&mut rng, n, runs);
            let metrics = compute_all(&data);
            println!(
                "Input: n={}, runs={}, inversions={}",
                n, metrics.raw.runs, metrics.raw.inversions
            );

            let policies = policy.map_or(MergePolicy::ADAPTIVE.to_vec(), |p| vec![p]);
            let strategies = strategy.map_or(BufferStrategy::ALL.to_vec(), |s| vec![s]);
            let mut stdout = io::stdout().lock();
            for &policy in &policies {
                // the baselines never touch a buffer, one strategy is enough
                let strategies = if policy.merges_runs() {
                    &strategies[..]
                } else {
                    &strategies[..1]
                };
                for &strategy in strategies {
                    let config = SortConfig::new(policy, strategy)
                        .with_stack_constant(stack_constant)
                        .with_min_run(min_run);
                    let start = Instant::now();
                    let (sorted, counters) = sort(&data, &config)?;
                    let duration = start.elapsed();
                    ensure!(is_sorted(&sorted), "{policy}/{strategy} produced unsorted output");
                    writeln!(
                        stdout,
                        "{policy:>16} {strategy:>9}: {duration:?}, merges={}, merge_cost={}, \
                         moves={}, buffer={} B",
                        counters.merges,
                        counters.merge_cost,
                        counters.element_moves,
                        counters.buffer_bytes()
                    )?;
                }
            }
        }
    }
    Ok(())
}
