//! Snake GUI — windowed shell over the rules engine.
//!
//! Module structure:
//! - input: keyboard event translation
//! - ui: layout math and rendering
//! - app: screen state machine and tick pacing

mod app;
mod input;
mod ui;

use macroquad::prelude::*;
use snake_engine::{BOARD_HEIGHT, BOARD_WIDTH};

fn window_conf() -> Conf {
    Conf {
        window_title: "Snake Game".to_owned(),
        window_width: BOARD_WIDTH,
        window_height: BOARD_HEIGHT,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let mut app = app::App::new();
    loop {
        app.tick();
        next_frame().await;
    }
}
