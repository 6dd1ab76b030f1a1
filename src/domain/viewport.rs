//! Viewport-to-grid sizing.
//!
//! The board fills the window below a fixed header strip that hosts the
//! control panel. Dimensions are derived once per (re)initialization and
//! deliberately not re-derived when the window is resized afterwards.

/// Square cell pitch in pixels
pub const CELL_PITCH: f32 = 17.0;

/// Vertical space reserved for the header/control panel, in pixels
pub const HEADER_RESERVED: f32 = 190.0;

/// Compute board dimensions (rows, cols) for a viewport, in pixels.
/// A viewport too small to fit any cells yields zero rows or columns.
pub fn board_dimensions(viewport_width: f32, viewport_height: f32) -> (usize, usize) {
    let cols = (viewport_width.max(0.0) / CELL_PITCH).floor() as usize;
    let rows = ((viewport_height - HEADER_RESERVED).max(0.0) / CELL_PITCH).floor() as usize;
    (rows, cols)
}
