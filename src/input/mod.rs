use log::debug;
use macroquad::prelude::*;

use crate::application::{BoardEngine, SimulationState};
use crate::ui::{self, Button};

/// Route panel button clicks to the state container / board engine.
/// Index order matches `ui::create_buttons`.
pub fn process_button_clicks(
    engine: &mut BoardEngine,
    state: &SimulationState,
    buttons: &[Button],
    mouse_pos: (f32, f32),
) {
    for (idx, button) in buttons.iter().enumerate() {
        if !button.is_clicked(mouse_pos) {
            continue;
        }
        match idx {
            0 => state.toggle_play(),
            1 => state.request_step(),
            2 => state.restart(),
            3 if !state.running().get() => engine.randomize(),
            _ => {}
        }
    }
}

/// Keyboard shortcuts mirroring the panel buttons
pub fn process_keyboard(state: &SimulationState) {
    let actions: [(KeyCode, &dyn Fn()); 3] = [
        (KeyCode::Space, &|| state.toggle_play()),
        (KeyCode::N, &|| state.request_step()),
        (KeyCode::R, &|| state.restart()),
    ];

    for (key, action) in actions {
        if is_key_pressed(key) {
            action();
        }
    }
}

/// Toggle the clicked cell while the simulation is paused
pub fn handle_cell_toggle(
    engine: &mut BoardEngine,
    state: &SimulationState,
    mouse_pos: (f32, f32),
) {
    if state.running().get() || !is_mouse_button_pressed(MouseButton::Left) {
        return;
    }
    let Some((row, col)) = ui::board_cell_at(mouse_pos) else {
        return;
    };
    if let Err(err) = engine.toggle_cell(row, col) {
        // clicks in the margin past the last full cell land here
        debug!("ignored cell toggle: {err}");
    }
}
