//! Stepping throughput on square universes seeded with random soups

use std::time::Instant;

use anyhow::Result;
use life_universe::{OutOfBoundsError, Universe, domain::random};
use rand::{SeedableRng, rngs::StdRng};

fn benchmark_universe(size: usize, iterations: u32) -> Result<f64, OutOfBoundsError> {
    let mut rng = StdRng::seed_from_u64(size as u64);
    let mut universe = Universe::new();
    universe
        .set_size(size, size)
        .set_initial_pattern(random(size, size, 0.3, &mut rng))
        .init();

    let start = Instant::now();
    for _ in 0..iterations {
        universe.next_generation()?;
    }
    Ok(start.elapsed().as_secs_f64() * 1000.0 / iterations as f64)
}

fn main() -> Result<()> {
    println!("=== Universe Stepping Benchmark ===\n");

    let sizes = [25, 100, 250, 500, 1000];
    let iterations = 20;

    println!("{:>10} {:>12} {:>16}", "Size", "ms/gen", "cells/sec");
    println!("{:-<40}", "");

    for size in sizes {
        let ms = benchmark_universe(size, iterations)?;
        let cells_per_sec = (size * size) as f64 / (ms / 1000.0);
        println!(
            "{:>10} {:>12.3} {:>15.1}M",
            format!("{}x{}", size, size),
            ms,
            cells_per_sec / 1_000_000.0
        );
    }

    Ok(())
}
