use macroquad::prelude::*;
use std::collections::VecDeque;

use snake_engine::{Cell, GameOverReason};

use super::layout::BoardLayout;

/// All drawing goes through here; the screens hand it read-only state.
pub struct Renderer;

impl Renderer {
    // ─────────────────────────────────────────────────────
    // Color constants
    // ─────────────────────────────────────────────────────
    const BG_COLOR: Color = Color::new(0.678, 0.847, 0.902, 1.0); // 173,216,230
    const FOOD_COLOR: Color = WHITE;
    const SNAKE_COLOR: Color = Color::new(0.0, 1.0, 0.0, 1.0); // 0,255,0
    const TEXT_FG: Color = WHITE;

    const TITLE_FONT: f32 = 36.0;
    const OPTION_FONT: f32 = 30.0;

    // ─────────────────────────────────────────────────────
    // Mode-select screen
    // ─────────────────────────────────────────────────────
    pub fn draw_mode_select() {
        clear_background(Self::BG_COLOR);
        let options = ["Normal (Press N)", "Impossible (Press I)"];
        let mut y = 100.0;
        for option in options {
            draw_text(option, 150.0, y, Self::TITLE_FONT, Self::TEXT_FG);
            y += 100.0;
        }
    }

    // ─────────────────────────────────────────────────────
    // Board (active play)
    // ─────────────────────────────────────────────────────
    pub fn draw_board(layout: &BoardLayout, snake: &VecDeque<Cell>, food: Cell) {
        clear_background(Self::BG_COLOR);
        Self::draw_cell(food, layout, Self::FOOD_COLOR);
        for &segment in snake {
            Self::draw_cell(segment, layout, Self::SNAKE_COLOR);
        }
    }

    fn draw_cell(cell: Cell, layout: &BoardLayout, color: Color) {
        let (px, py, w, h) = layout.cell_rect(cell);
        draw_rectangle(px, py, w, h, color);
    }

    // ─────────────────────────────────────────────────────
    // Game-over screen
    // ─────────────────────────────────────────────────────
    pub fn draw_game_over(score: u32, reason: Option<GameOverReason>) {
        clear_background(Self::BG_COLOR);

        let score_line = format!("Try Again? Your Score: {}", score);
        Self::draw_centered(&score_line, 150.0, Self::TITLE_FONT);

        if let Some(reason) = reason {
            let reason_line = match reason {
                GameOverReason::HitWall => "You hit the wall",
                GameOverReason::HitSelf => "You bit yourself",
            };
            Self::draw_centered(reason_line, 200.0, Self::OPTION_FONT);
        }

        Self::draw_centered("Press Y to Restart or N to Quit", 250.0, Self::TITLE_FONT);
    }

    fn draw_centered(text: &str, y: f32, font_size: f32) {
        let m = measure_text(text, None, font_size as u16, 1.0);
        draw_text(
            text,
            (screen_width() - m.width) * 0.5,
            y,
            font_size,
            Self::TEXT_FG,
        );
    }
}
