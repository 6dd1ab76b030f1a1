// Domain layer - board, cells, viewport sizing
pub mod domain;

// Application layer - shared simulation state and run loop
pub mod application;

// Infrastructure layer - UI, rendering, input
pub mod input;
pub mod rendering;
pub mod ui;

pub mod error;

// Re-exports for convenience
pub use application::{
    BoardEngine, DEFAULT_SPEED_MS, EventSignal, Observable, SimulationState, Subscription, Ticker,
};
pub use domain::{Cell, Grid, board_dimensions};
pub use error::LifeError;
