//! Snake rules engine (no UI dependency).
//!
//! Module structure:
//! - direction: movement directions and the reversal relation
//! - grid: board geometry, pixel-snapped cells
//! - mode: difficulty presets
//! - game: mutable game state and the per-tick update rule

pub mod direction;
pub mod game;
pub mod grid;
pub mod mode;

pub use direction::Direction;
pub use game::{Game, GameOverReason, GameStatus, FOOD_REWARD};
pub use grid::{Cell, Grid, BOARD_HEIGHT, BOARD_WIDTH, SEGMENT_SIZE};
pub use mode::Mode;
