use log::debug;

use super::observable::{EventSignal, Observable};
use crate::error::LifeError;

/// Interval between generations when nothing else was chosen
pub const DEFAULT_SPEED_MS: u32 = 300;

/// SimulationState holds the authoritative play/pause flag, tick speed,
/// generation counter and the step/restart event signals. It is a pure
/// data holder: the board engine reacts to it, it computes nothing.
///
/// One instance is shared process-wide (`Rc<SimulationState>`); all
/// mutators take `&self` and update observables that notify synchronously,
/// so the control surface and the board engine always see a consistent
/// snapshot.
pub struct SimulationState {
    running: Observable<bool>,
    speed_ms: Observable<u32>,
    generations: Observable<u64>,
    restart: EventSignal,
    step: EventSignal,
}

impl SimulationState {
    pub fn new() -> Self {
        Self {
            running: Observable::new(false),
            speed_ms: Observable::new(DEFAULT_SPEED_MS),
            generations: Observable::new(0),
            restart: EventSignal::new(),
            step: EventSignal::new(),
        }
    }

    /// Play/pause flag; read with `.get()`, subscribe for changes
    pub fn running(&self) -> &Observable<bool> {
        &self.running
    }

    /// Milliseconds between timer-driven generations
    pub fn speed_ms(&self) -> &Observable<u32> {
        &self.speed_ms
    }

    /// Number of generations computed since the last restart
    pub fn generations(&self) -> &Observable<u64> {
        &self.generations
    }

    /// Emitted when the board should be reinitialized
    pub fn restart_events(&self) -> &EventSignal {
        &self.restart
    }

    /// Emitted when a single manual generation was requested
    pub fn step_events(&self) -> &EventSignal {
        &self.step
    }

    /// Flip between running and stopped
    pub fn toggle_play(&self) {
        let running = !self.running.get();
        debug!("play state -> {}", if running { "running" } else { "stopped" });
        self.running.set(running);
    }

    /// Stop the simulation, zero the generation counter and ask the board
    /// engine to reinitialize. The grid itself is not touched here.
    pub fn restart(&self) {
        debug!("restart requested");
        self.running.set(false);
        self.generations.set(0);
        self.restart.emit();
    }

    /// Ask for one manual generation. Permitted while running too, where
    /// it is simply redundant with the timer.
    pub fn request_step(&self) {
        self.step.emit();
    }

    /// Change the tick interval. Non-positive values are rejected and the
    /// stored speed keeps its previous value.
    pub fn set_speed(&self, ms: u32) -> Result<(), LifeError> {
        if ms == 0 {
            return Err(LifeError::InvalidSpeed(ms));
        }
        debug!("speed -> {ms} ms");
        self.speed_ms.set(ms);
        Ok(())
    }

    /// Record the generation count after a computed generation.
    /// Called only by the board engine.
    pub fn record_generation(&self, n: u64) {
        self.generations.set(n);
    }
}

impl Default for SimulationState {
    fn default() -> Self {
        Self::new()
    }
}
