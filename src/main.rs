use anyhow::{Context, Result};
use clap::Parser;
use life_universe::{LifeConfig, Simulation, rendering};
use macroquad::prelude::*;

fn window_conf() -> Conf {
    Conf {
        window_title: "Conway's Game of Life".to_owned(),
        window_width: 1000,
        window_height: 800,
        window_resizable: true,
        ..Default::default()
    }
}

/// Process keyboard input functionally
fn process_keyboard_input(sim: Simulation) -> Result<Simulation> {
    type KeyAction = (KeyCode, fn(Simulation) -> Simulation);

    let actions: [KeyAction; 5] = [
        (KeyCode::Space, Simulation::toggle_running),
        (KeyCode::C, Simulation::restart),
        (KeyCode::R, Simulation::randomize),
        (KeyCode::Up, |s| s.adjust_speed(1.0)),
        (KeyCode::Down, |s| s.adjust_speed(-1.0)),
    ];

    let mut sim = actions.iter().fold(sim, |s, (key, action)| {
        if is_key_pressed(*key) { action(s) } else { s }
    });

    // Single step while paused
    if is_key_pressed(KeyCode::N) && !sim.is_running {
        sim.step().context("stepping universe")?;
    }

    Ok(sim)
}

async fn run() -> Result<()> {
    let config = LifeConfig::parse();
    let mut sim = Simulation::new(&config).context("invalid configuration")?;

    loop {
        sim = process_keyboard_input(sim)?;
        sim.tick(get_frame_time()).context("advancing generation")?;

        clear_background(BLACK);
        rendering::draw_universe(&sim.universe).context("drawing universe")?;
        rendering::draw_hud(&sim).context("drawing panel")?;

        next_frame().await;
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
