use clap::Parser;
use lapwatch::{Stopwatch, relative_cost, relative_speed};
use spdlog::prelude::*;
use std::hint::black_box;

#[derive(Parser)]
struct Args {
    /// Iterations of the demo workload to time.
    #[arg(long, default_value_t = 2_000_000)]
    iterations: u64,
}

fn main() {
    let args = Args::parse();

    let mut watch = Stopwatch::new(true);
    let mut acc: u64 = 0;
    for i in 0..args.iterations {
        acc = black_box(acc.wrapping_mul(31).wrapping_add(i));
    }
    watch.stop();

    info!(
        "[Demo] {} iterations in {} (acc={:x})",
        args.iterations, watch, acc
    );
    info!(
        "[Demo] Reference workload takes {:.6}s on this machine",
        relative_speed()
    );
    info!(
        "[Demo] Relative cost of the run: {:.3} reference units",
        relative_cost(watch.elapsed_secs())
    );
}
