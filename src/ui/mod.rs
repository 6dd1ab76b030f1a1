mod button;
mod slider;

pub use button::Button;
pub use slider::Slider;

use crate::domain::viewport::{CELL_PITCH, HEADER_RESERVED};

pub const BUTTON_WIDTH: f32 = 110.0;
pub const BUTTON_HEIGHT: f32 = 40.0;
pub const PANEL_PADDING: f32 = 20.0;

/// Create the control button row. Index order is what
/// `input::process_button_clicks` dispatches on.
pub fn create_buttons(running: bool) -> Vec<Button> {
    let labels = [
        if running { "Pause" } else { "Play" },
        "Step",
        "Restart",
        "Random",
    ];
    labels
        .iter()
        .enumerate()
        .map(|(i, label)| {
            Button::new(
                PANEL_PADDING + i as f32 * (BUTTON_WIDTH + 10.0),
                120.0,
                BUTTON_WIDTH,
                BUTTON_HEIGHT,
                *label,
            )
        })
        .collect()
}

/// Map a mouse position to board coordinates.
/// None while the cursor is in the header strip; coordinates past the
/// board's last row/column are left to the engine's bounds check.
pub fn board_cell_at(mouse_pos: (f32, f32)) -> Option<(usize, usize)> {
    if mouse_pos.1 < HEADER_RESERVED || mouse_pos.0 < 0.0 {
        return None;
    }
    let row = ((mouse_pos.1 - HEADER_RESERVED) / CELL_PITCH) as usize;
    let col = (mouse_pos.0 / CELL_PITCH) as usize;
    Some((row, col))
}
