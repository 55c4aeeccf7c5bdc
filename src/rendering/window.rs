use macroquad::prelude::*;

use crate::application::Simulation;
use crate::domain::{OutOfBoundsError, Universe};

pub const PANEL_WIDTH: f32 = 180.0;

/// Get the X position where the panel starts (right side)
pub fn panel_x() -> f32 {
    screen_width() - PANEL_WIDTH
}

/// Largest square cell size that fits the whole universe left of the panel
pub fn cell_size(universe: &Universe) -> f32 {
    let (width, height) = universe.dimensions();
    if width == 0 || height == 0 {
        return 0.0;
    }
    (panel_x() / width as f32).min(screen_height() / height as f32).floor().max(1.0)
}

/// Draw every cell of the current generation
pub fn draw_universe(universe: &Universe) -> Result<(), OutOfBoundsError> {
    let size = cell_size(universe);

    // Colors
    let alive_color = Color::from_rgba(0, 255, 150, 255); // Bright green
    let dead_cell_color = Color::from_rgba(15, 15, 15, 255);
    let grid_line_color = Color::from_rgba(40, 40, 40, 255);
    let draw_grid_lines = size >= 4.0;

    for (x, y, cell) in universe.cells()? {
        let screen_x = x as f32 * size;
        let screen_y = y as f32 * size;

        if cell.is_alive() {
            draw_rectangle(screen_x, screen_y, size, size, alive_color);
        } else if draw_grid_lines {
            draw_rectangle(screen_x, screen_y, size, size, dead_cell_color);
        }

        if draw_grid_lines {
            draw_rectangle_lines(screen_x, screen_y, size, size, 1.0, grid_line_color);
        }
    }

    Ok(())
}

/// Draw the side panel with controls help and simulation metrics
pub fn draw_hud(sim: &Simulation) -> Result<(), OutOfBoundsError> {
    let px = panel_x();
    draw_rectangle(px, 0.0, PANEL_WIDTH, screen_height(), Color::from_rgba(30, 30, 30, 255));

    let controls = [
        ("Controls:", 20.0, 14.0, WHITE),
        ("Space: Play/Pause", 35.0, 12.0, GRAY),
        ("N: Step", 48.0, 12.0, GRAY),
        ("C: Restart", 61.0, 12.0, GRAY),
        ("R: Random", 74.0, 12.0, GRAY),
        ("Up/Down: Speed", 87.0, 12.0, GRAY),
    ];
    controls.iter().for_each(|(text, y, size, color)| {
        draw_text(text, px, *y, *size, *color);
    });

    let (width, height) = sim.universe.dimensions();
    let population = sim.universe.population()?;

    // Color code the evolution time
    let evolve_ms = sim.last_evolution_time_ms;
    let perf_color = if evolve_ms < 5.0 {
        Color::from_rgba(0, 255, 0, 255)
    } else if evolve_ms < 33.0 {
        Color::from_rgba(255, 255, 0, 255)
    } else {
        Color::from_rgba(255, 0, 0, 255)
    };

    let value_color = Color::from_rgba(180, 180, 180, 255);
    let labels = [
        (format!("Grid: {width}x{height}"), 120.0, 13.0, value_color),
        (format!("Population: {population}"), 135.0, 13.0, value_color),
        (format!("Evolve: {evolve_ms:.2}ms"), 150.0, 13.0, perf_color),
        (format!("FPS: {}", get_fps()), 165.0, 12.0, GRAY),
        (format!("Speed: {:.0} gen/s", sim.updates_per_second), 195.0, 14.0, value_color),
        (format!("Generation: {}", sim.universe.generation()), 215.0, 16.0, Color::from_rgba(0, 255, 150, 255)),
    ];
    labels.iter().for_each(|(text, y, size, color)| {
        draw_text(text, px, *y, *size, *color);
    });

    let (status, status_color) = if sim.is_running {
        ("Running", Color::from_rgba(0, 255, 0, 255))
    } else {
        ("Paused", Color::from_rgba(255, 165, 0, 255))
    };
    draw_text(status, px, 240.0, 16.0, status_color);

    Ok(())
}
