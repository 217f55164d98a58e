use macroquad::prelude::*;

use snake_engine::{Game, GameStatus};

use crate::input::{GameOverChoice, InputHandler};
use crate::ui::{BoardLayout, Renderer};

/// Screen state machine: mode select, active play, game over. Restart goes
/// through `Game::reset` inside the frame loop rather than re-entering it.
pub struct App {
    game: Option<Game>,
    step_timer: f32,
}

impl App {
    pub fn new() -> Self {
        Self {
            game: None,
            step_timer: 0.0,
        }
    }

    /// One frame: poll input, advance the game at its tick rate, render.
    pub fn tick(&mut self) {
        match &mut self.game {
            None => {
                Renderer::draw_mode_select();
                if let Some(mode) = InputHandler::mode_choice() {
                    self.step_timer = 0.0;
                    self.game = Some(Game::new(mode, Self::seed()));
                }
            }
            Some(game) => match game.status() {
                GameStatus::Running => {
                    if let Some(dir) = InputHandler::held_direction() {
                        game.steer(dir);
                    }

                    // Frame limiter: accumulate real time and step whenever a
                    // full tick at the current speed has elapsed. The interval
                    // is re-read per step because Normal mode ramps it.
                    self.step_timer += get_frame_time();
                    let mut interval = 1.0 / game.speed() as f32;
                    while self.step_timer >= interval {
                        self.step_timer -= interval;
                        game.step();
                        if game.status() != GameStatus::Running {
                            break;
                        }
                        interval = 1.0 / game.speed() as f32;
                    }

                    let layout =
                        BoardLayout::compute(screen_width(), screen_height(), game.grid());
                    Renderer::draw_board(&layout, game.snake(), game.food());
                }
                GameStatus::GameOver => {
                    Renderer::draw_game_over(game.score(), game.game_over_reason());
                    match InputHandler::game_over_choice() {
                        Some(GameOverChoice::Restart) => {
                            game.reset();
                            self.step_timer = 0.0;
                        }
                        Some(GameOverChoice::Quit) => std::process::exit(0),
                        None => {}
                    }
                }
            },
        }
    }

    fn seed() -> u64 {
        (macroquad::miniquad::date::now() * 1000.0) as u64
    }
}
