use std::collections::VecDeque;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::direction::Direction;
use crate::grid::{Cell, Grid};
use crate::mode::Mode;

/// Score awarded per food eaten.
pub const FOOD_REWARD: u32 = 100;

const START_CELL: Cell = Cell { x: 300, y: 200 };
const START_DIRECTION: Direction = Direction::Up;
const SPAWN_ATTEMPTS: usize = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Running,
    GameOver,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOverReason {
    HitWall,
    HitSelf,
}

/// Full game state for one session. The shell steers and steps it; rendering
/// only goes through the read-only accessors.
#[derive(Clone)]
pub struct Game {
    grid: Grid,
    mode: Mode,
    rng: ChaCha8Rng,
    snake: VecDeque<Cell>,
    direction: Direction,
    pending: Option<Direction>,
    food: Cell,
    score: u32,
    speed: u32,
    status: GameStatus,
    game_over_reason: Option<GameOverReason>,
}

impl Game {
    pub fn new(mode: Mode, seed: u64) -> Self {
        let mut game = Self {
            grid: Grid::board(),
            mode,
            rng: ChaCha8Rng::seed_from_u64(seed),
            snake: VecDeque::new(),
            direction: START_DIRECTION,
            pending: None,
            food: START_CELL,
            score: 0,
            speed: mode.initial_speed(),
            status: GameStatus::Running,
            game_over_reason: None,
        };
        game.reset();
        game
    }

    // ─────────────────────────────────────────────────────
    // Read-only accessors
    // ─────────────────────────────────────────────────────
    pub fn snake(&self) -> &VecDeque<Cell> {
        &self.snake
    }

    pub fn food(&self) -> Cell {
        self.food
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn speed(&self) -> u32 {
        self.speed
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn game_over_reason(&self) -> Option<GameOverReason> {
        self.game_over_reason
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    // ─────────────────────────────────────────────────────
    // Input
    // ─────────────────────────────────────────────────────

    /// Record the direction to use from the next tick on. Reversing the
    /// current direction is ignored; the last valid steer before a tick wins.
    pub fn steer(&mut self, next: Direction) {
        if next.is_opposite(self.direction) {
            return;
        }
        self.pending = Some(next);
    }

    // ─────────────────────────────────────────────────────
    // Reset (restart under the same mode, same rng stream)
    // ─────────────────────────────────────────────────────
    pub fn reset(&mut self) {
        self.snake.clear();
        self.snake.push_front(START_CELL);
        self.direction = START_DIRECTION;
        self.pending = None;
        self.score = 0;
        self.speed = self.mode.initial_speed();
        self.status = GameStatus::Running;
        self.game_over_reason = None;
        self.food = self.spawn_food();
    }

    // ─────────────────────────────────────────────────────
    // One tick of the update rule
    // ─────────────────────────────────────────────────────
    pub fn step(&mut self) {
        if self.status != GameStatus::Running {
            return;
        }
        self.apply_pending_direction();

        let head = *self.snake.front().expect("snake has a head");
        let new_head = head.offset(self.direction);

        if !self.grid.in_bounds(new_head) {
            self.status = GameStatus::GameOver;
            self.game_over_reason = Some(GameOverReason::HitWall);
            return;
        }

        // The `new_head != food` exclusion is unreachable while the food
        // invariant holds; kept as an edge-timing guard.
        if self.occupies(new_head) && new_head != self.food {
            self.status = GameStatus::GameOver;
            self.game_over_reason = Some(GameOverReason::HitSelf);
            return;
        }

        if new_head == self.food {
            self.score += FOOD_REWARD;
            // Growth prepends without popping the tail; Impossible mode
            // leaves duplicate head cells behind on purpose.
            for _ in 0..self.mode.growth() {
                self.snake.push_front(new_head);
            }
            if self.mode.speed_ramps() {
                self.speed += 1;
            }
            self.food = self.spawn_food();
        } else {
            self.snake.push_front(new_head);
            self.snake.pop_back();
        }
    }

    // ─────────────────────────────────────────────────────
    // Test hooks
    // ─────────────────────────────────────────────────────
    pub fn debug_set_snake(&mut self, segments_head_first: &[Cell], dir: Direction) {
        self.snake.clear();
        for &cell in segments_head_first {
            self.snake.push_back(cell);
        }
        self.direction = dir;
        self.pending = None;
        self.status = GameStatus::Running;
        self.game_over_reason = None;
    }

    pub fn debug_set_food(&mut self, food: Cell) {
        self.food = food;
    }

    // ─────────────────────────────────────────────────────
    // Private helpers
    // ─────────────────────────────────────────────────────
    fn apply_pending_direction(&mut self) {
        if let Some(next) = self.pending.take() {
            if !next.is_opposite(self.direction) {
                self.direction = next;
            }
        }
    }

    fn occupies(&self, cell: Cell) -> bool {
        self.snake.contains(&cell)
    }

    /// Rejection-sample a free cell; after `SPAWN_ATTEMPTS` misses fall back
    /// to the first free cell in row-major order. Only a fully covered board
    /// leaves the food where it was.
    fn spawn_food(&mut self) -> Cell {
        for _ in 0..SPAWN_ATTEMPTS {
            let candidate = self.grid.random_cell(&mut self.rng);
            if !self.occupies(candidate) {
                return candidate;
            }
        }
        self.grid
            .cells()
            .find(|&cell| !self.occupies(cell))
            .unwrap_or(self.food)
    }
}
