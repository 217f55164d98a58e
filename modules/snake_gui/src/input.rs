use macroquad::prelude::*;
use snake_engine::{Direction, Mode};

/// Player's answer on the game-over screen.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum GameOverChoice {
    Restart,
    Quit,
}

/// Keyboard translation. One poll function per screen; unexpected keys are
/// ignored everywhere.
pub struct InputHandler;

impl InputHandler {
    /// Direction key held this frame, resolved with fixed priority
    /// Up, Down, Left, Right.
    pub fn held_direction() -> Option<Direction> {
        if is_key_down(KeyCode::Up) || is_key_down(KeyCode::W) {
            Some(Direction::Up)
        } else if is_key_down(KeyCode::Down) || is_key_down(KeyCode::S) {
            Some(Direction::Down)
        } else if is_key_down(KeyCode::Left) || is_key_down(KeyCode::A) {
            Some(Direction::Left)
        } else if is_key_down(KeyCode::Right) || is_key_down(KeyCode::D) {
            Some(Direction::Right)
        } else {
            None
        }
    }

    /// N/I on the mode-select screen.
    pub fn mode_choice() -> Option<Mode> {
        if is_key_pressed(KeyCode::N) {
            Some(Mode::Normal)
        } else if is_key_pressed(KeyCode::I) {
            Some(Mode::Impossible)
        } else {
            None
        }
    }

    /// Y/N on the game-over screen.
    pub fn game_over_choice() -> Option<GameOverChoice> {
        if is_key_pressed(KeyCode::Y) {
            Some(GameOverChoice::Restart)
        } else if is_key_pressed(KeyCode::N) {
            Some(GameOverChoice::Quit)
        } else {
            None
        }
    }
}
