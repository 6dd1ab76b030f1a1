use std::rc::Rc;

use log::{info, trace};

use super::sim_state::SimulationState;
use super::ticker::Ticker;
use crate::domain::{Cell, Grid, board_dimensions};
use crate::error::LifeError;

/// BoardEngine owns the grid and the run-loop timer, reacting to the
/// shared simulation state once per frame: a pending restart reinitializes
/// the board, the play flag arms or cancels the ticker, and step requests
/// each advance exactly one generation.
pub struct BoardEngine {
    grid: Grid,
    state: Rc<SimulationState>,
    ticker: Ticker,
    handled_restarts: u64,
    handled_steps: u64,
}

impl BoardEngine {
    /// Create an engine with an all-dead grid of the given dimensions.
    /// Dimensions come from the viewport, see `domain::viewport`.
    pub fn new(state: Rc<SimulationState>, rows: usize, cols: usize) -> Self {
        info!("board initialized: {rows} rows x {cols} cols");
        Self {
            grid: Grid::new(rows, cols),
            ticker: Ticker::new(),
            handled_restarts: state.restart_events().count(),
            handled_steps: state.step_events().count(),
            state,
        }
    }

    /// Current board, for rendering
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Flip one cell; out-of-range coordinates are rejected
    pub fn toggle_cell(&mut self, row: usize, col: usize) -> Result<Cell, LifeError> {
        self.grid.toggle(row, col)
    }

    /// Scatter live cells over the board and zero the generation counter
    pub fn randomize(&mut self) {
        self.grid.randomize();
        self.state.record_generation(0);
    }

    fn advance_generation(&mut self) {
        self.grid = self.grid.next_generation();
        let generation = self.state.generations().get() + 1;
        self.state.record_generation(generation);
        trace!("generation {generation}, population {}", self.grid.population());
    }

    /// One cooperative turn of the run loop. `dt` is the frame time in
    /// seconds; `viewport` is the window size in pixels, consulted only
    /// when a restart re-derives the board dimensions.
    ///
    /// Order matters: the restart is drained and the ticker is canceled
    /// before any fire check, so no tick survives a stop or restart
    /// requested earlier in the same turn.
    pub fn update(&mut self, dt: f32, viewport: (f32, f32)) {
        let restarts = self.state.restart_events().count();
        if restarts != self.handled_restarts {
            self.handled_restarts = restarts;
            self.ticker.cancel();
            let (rows, cols) = board_dimensions(viewport.0, viewport.1);
            info!("board reinitialized: {rows} rows x {cols} cols");
            self.grid = Grid::new(rows, cols);
        }

        let speed_ms = self.state.speed_ms().get();
        if self.state.running().get() {
            if !self.ticker.is_active() {
                self.ticker.start(speed_ms);
            } else if self.ticker.interval_ms() != speed_ms {
                // speed changed mid-run: cancel before re-arming so the
                // new cadence applies immediately, old phase discarded
                self.ticker.cancel();
                self.ticker.start(speed_ms);
            }
            if self.ticker.advance(dt) {
                self.advance_generation();
            }
        } else {
            self.ticker.cancel();
        }

        let steps = self.state.step_events().count();
        for _ in self.handled_steps..steps {
            self.advance_generation();
        }
        self.handled_steps = steps;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Viewport sized so `board_dimensions` yields exactly (rows, cols)
    fn viewport_for(rows: usize, cols: usize) -> (f32, f32) {
        (cols as f32 * 17.0, rows as f32 * 17.0 + 190.0)
    }

    fn engine(rows: usize, cols: usize) -> (Rc<SimulationState>, BoardEngine) {
        let state = Rc::new(SimulationState::new());
        let engine = BoardEngine::new(Rc::clone(&state), rows, cols);
        (state, engine)
    }

    fn place_blinker(engine: &mut BoardEngine) {
        for col in 0..3 {
            engine.toggle_cell(1, col).unwrap();
        }
    }

    #[test]
    fn test_starts_all_dead_with_given_dimensions() {
        let (_, engine) = engine(4, 6);
        assert_eq!(engine.grid().dimensions(), (4, 6));
        assert_eq!(engine.grid().population(), 0);
    }

    #[test]
    fn test_step_request_advances_exactly_one_generation() {
        let (state, mut engine) = engine(3, 3);
        place_blinker(&mut engine);

        state.request_step();
        engine.update(0.0, viewport_for(3, 3));

        assert_eq!(state.generations().get(), 1);
        let alive: Vec<_> = (0..3).filter(|&r| engine.grid().get(r, 1).unwrap().is_alive()).collect();
        assert_eq!(alive, vec![0, 1, 2]);
    }

    #[test]
    fn test_each_pending_step_counts_once() {
        let (state, mut engine) = engine(3, 3);
        place_blinker(&mut engine);

        state.request_step();
        state.request_step();
        state.request_step();
        engine.update(0.0, viewport_for(3, 3));

        assert_eq!(state.generations().get(), 3);
    }

    #[test]
    fn test_no_tick_while_stopped() {
        let (state, mut engine) = engine(3, 3);
        place_blinker(&mut engine);

        engine.update(10.0, viewport_for(3, 3));
        assert_eq!(state.generations().get(), 0);
        assert_eq!(engine.grid().population(), 3);
    }

    #[test]
    fn test_timer_fires_at_speed_cadence() {
        let (state, mut engine) = engine(3, 3);
        place_blinker(&mut engine);
        state.toggle_play();

        let vp = viewport_for(3, 3);
        engine.update(0.1, vp);
        engine.update(0.1, vp);
        assert_eq!(state.generations().get(), 0);

        engine.update(0.11, vp);
        assert_eq!(state.generations().get(), 1);
    }

    #[test]
    fn test_stop_cancels_pending_tick() {
        let (state, mut engine) = engine(3, 3);
        place_blinker(&mut engine);
        state.toggle_play();

        let vp = viewport_for(3, 3);
        engine.update(0.29, vp);
        state.toggle_play();

        // accumulated phase is discarded together with the timer
        engine.update(10.0, vp);
        assert_eq!(state.generations().get(), 0);

        // resuming starts a fresh interval
        state.toggle_play();
        engine.update(0.29, vp);
        assert_eq!(state.generations().get(), 0);
        engine.update(0.02, vp);
        assert_eq!(state.generations().get(), 1);
    }

    #[test]
    fn test_speed_change_rearms_the_timer() {
        let (state, mut engine) = engine(3, 3);
        place_blinker(&mut engine);
        state.toggle_play();

        let vp = viewport_for(3, 3);
        engine.update(0.25, vp);
        state.set_speed(500).unwrap();

        // an un-rearmed timer would fire here on either interval
        engine.update(0.26, vp);
        assert_eq!(state.generations().get(), 0);

        engine.update(0.25, vp);
        assert_eq!(state.generations().get(), 1);
    }

    #[test]
    fn test_restart_reinitializes_from_viewport() {
        let (state, mut engine) = engine(3, 3);
        place_blinker(&mut engine);
        state.request_step();
        engine.update(0.0, viewport_for(3, 3));
        assert_eq!(state.generations().get(), 1);

        state.restart();
        engine.update(0.0, viewport_for(5, 8));

        assert!(!state.running().get());
        assert_eq!(state.generations().get(), 0);
        assert_eq!(engine.grid().dimensions(), (5, 8));
        assert_eq!(engine.grid().population(), 0);
    }

    #[test]
    fn test_restart_while_running_stops_the_timer() {
        let (state, mut engine) = engine(3, 3);
        place_blinker(&mut engine);
        state.toggle_play();

        let vp = viewport_for(3, 3);
        engine.update(0.29, vp);
        state.restart();
        engine.update(10.0, vp);

        assert_eq!(state.generations().get(), 0);
        assert_eq!(engine.grid().population(), 0);
    }

    #[test]
    fn test_step_while_running_is_redundant_but_allowed() {
        let (state, mut engine) = engine(3, 3);
        place_blinker(&mut engine);
        state.toggle_play();
        state.request_step();

        engine.update(0.31, viewport_for(3, 3));
        assert_eq!(state.generations().get(), 2);
    }

    #[test]
    fn test_toggle_cell_out_of_bounds() {
        let (_, mut engine) = engine(2, 2);
        assert!(matches!(
            engine.toggle_cell(2, 0),
            Err(LifeError::OutOfBounds { .. })
        ));
    }

    #[test]
    fn test_randomize_zeroes_the_counter() {
        let (state, mut engine) = engine(3, 3);
        place_blinker(&mut engine);
        state.request_step();
        engine.update(0.0, viewport_for(3, 3));
        assert_eq!(state.generations().get(), 1);

        engine.randomize();
        assert_eq!(state.generations().get(), 0);
    }
}
