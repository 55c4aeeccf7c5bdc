//! Terminal driver: seeds a universe and prints each generation as text.

use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use life_universe::{LifeConfig, Simulation, rendering::render_frame};

/// Run the Game of Life in the terminal.
#[derive(Parser)]
#[command(name = "life-run", about = "Print Game of Life generations to the terminal")]
struct Args {
    #[command(flatten)]
    config: LifeConfig,

    /// Only list alive cell coordinates of the seed, then exit
    #[arg(long)]
    dump: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let mut sim = Simulation::new(&args.config).context("invalid configuration")?;

    if args.dump {
        for (x, y) in sim.universe.alive_cells()? {
            println!("{x} {y}");
        }
        return Ok(());
    }

    let delay = Duration::from_secs_f32(1.0 / sim.updates_per_second);
    loop {
        let frame = render_frame(&sim.universe)?;
        // Clear screen and home cursor before each frame
        print!("\x1b[2J\x1b[H{frame}");
        println!(
            "generation {}  population {}",
            sim.universe.generation(),
            sim.universe.population()?
        );

        if args.config.generations != 0 && sim.universe.generation() >= args.config.generations {
            return Ok(());
        }

        thread::sleep(delay);
        sim.step().context("advancing generation")?;
    }
}
