use macroquad::prelude::*;

use crate::application::SimulationState;
use crate::domain::Grid;
use crate::domain::viewport::{CELL_PITCH, HEADER_RESERVED};
use crate::ui::{Button, PANEL_PADDING, Slider};

/// Draw the board as filled cells below the header strip
pub fn draw_board(grid: &Grid) {
    let alive_color = Color::from_rgba(0, 255, 150, 255);
    let dead_color = Color::from_rgba(15, 15, 15, 255);

    for (row, cells) in grid.iter_rows().enumerate() {
        for (col, cell) in cells.iter().enumerate() {
            let x = col as f32 * CELL_PITCH;
            let y = HEADER_RESERVED + row as f32 * CELL_PITCH;
            let color = if cell.is_alive() { alive_color } else { dead_color };
            // 1 px gutter keeps the lattice visible
            draw_rectangle(x, y, CELL_PITCH - 1.0, CELL_PITCH - 1.0, color);
        }
    }
}

/// Draw the header control panel: title, widgets and status readouts
pub fn draw_controls(
    state: &SimulationState,
    grid: &Grid,
    buttons: &[Button],
    slider: &Slider,
    mouse_pos: (f32, f32),
) {
    draw_rectangle(
        0.0,
        0.0,
        screen_width(),
        HEADER_RESERVED,
        Color::from_rgba(30, 30, 30, 255),
    );
    draw_text("Conway's Game of Life", PANEL_PADDING, 40.0, 30.0, WHITE);

    buttons.iter().for_each(|button| button.draw(mouse_pos));
    slider.draw();

    let (rows, cols) = grid.dimensions();
    let info_x = screen_width() - 240.0;
    let labels = [
        (
            format!("Generation: {}", state.generations().get()),
            50.0,
            24.0,
            Color::from_rgba(0, 255, 150, 255),
        ),
        (
            format!("Population: {}", grid.population()),
            80.0,
            18.0,
            Color::from_rgba(180, 180, 180, 255),
        ),
        (
            format!("Board: {rows}x{cols}"),
            105.0,
            18.0,
            Color::from_rgba(150, 150, 150, 255),
        ),
    ];
    labels.iter().for_each(|(text, y, size, color)| {
        draw_text(text, info_x, *y, *size, *color);
    });

    let running = state.running().get();
    let status_color = if running {
        Color::from_rgba(0, 255, 0, 255)
    } else {
        Color::from_rgba(255, 165, 0, 255)
    };
    draw_text(
        if running { "Running" } else { "Paused" },
        info_x,
        135.0,
        20.0,
        status_color,
    );
}
