mod board;
mod observable;
mod sim_state;
mod ticker;

pub use board::BoardEngine;
pub use observable::{EventSignal, Observable, Subscription};
pub use sim_state::{DEFAULT_SPEED_MS, SimulationState};
pub use ticker::Ticker;
