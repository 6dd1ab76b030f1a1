use std::rc::Rc;

use log::trace;
use macroquad::prelude::*;

use lifeboard::{
    BoardEngine, DEFAULT_SPEED_MS, SimulationState, board_dimensions, input, rendering,
    ui::{self, Slider},
};

fn window_conf() -> Conf {
    Conf {
        window_title: "Conway's Game of Life".to_owned(),
        window_width: 1020,
        window_height: 870,
        window_resizable: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::init();

    let state = Rc::new(SimulationState::new());
    let _generation_trace = state
        .generations()
        .subscribe(|generation| trace!("generation counter -> {generation}"));

    // board dimensions come from the viewport once, not on window resize
    let (rows, cols) = board_dimensions(screen_width(), screen_height());
    let mut engine = BoardEngine::new(Rc::clone(&state), rows, cols);

    let mut speed_slider = Slider::new(
        ui::PANEL_PADDING,
        80.0,
        220.0,
        "Speed",
        50.0,
        1000.0,
        DEFAULT_SPEED_MS as f32,
    );

    loop {
        let mouse_pos = mouse_position();

        // rebuilt each frame so the play/pause label tracks the state
        let buttons = ui::create_buttons(state.running().get());

        input::process_button_clicks(&mut engine, &state, &buttons, mouse_pos);
        input::process_keyboard(&state);
        input::handle_cell_toggle(&mut engine, &state, mouse_pos);
        if let Some(ms) = speed_slider.update(mouse_pos) {
            // the slider minimum keeps the speed positive
            let _ = state.set_speed(ms as u32);
        }

        engine.update(get_frame_time(), (screen_width(), screen_height()));

        clear_background(BLACK);
        rendering::draw_board(engine.grid());
        rendering::draw_controls(&state, engine.grid(), &buttons, &speed_slider, mouse_pos);

        next_frame().await;
    }
}
