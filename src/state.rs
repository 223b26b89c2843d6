use std::collections::{HashSet, VecDeque};

use crate::geometry::{Direction, Position};

/// Everything a single run mutates, tick by tick.
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    /// Head first. Never empty.
    pub snake: VecDeque<Position>,
    pub direction: Direction,
    pub food: Option<Position>,
    pub special_food: Option<Position>,
    pub special_food_timer: f32,
    pub invincible: bool,
    pub invincible_timer: f32,
    pub score_multiplier: u32,
    pub score: u32,
    pub started: bool,
    pub game_over: bool,
    pub paused: bool,
}

impl GameState {
    /// A freshly started run: one-cell snake at `start`, no food yet.
    pub fn new(start: Position, direction: Direction) -> Self {
        Self {
            snake: VecDeque::from([start]),
            direction,
            food: None,
            special_food: None,
            special_food_timer: 0.0,
            invincible: false,
            invincible_timer: 0.0,
            score_multiplier: 1,
            score: 0,
            started: true,
            game_over: false,
            paused: false,
        }
    }

    pub fn head(&self) -> Position {
        self.snake[0]
    }

    pub fn len(&self) -> usize {
        self.snake.len()
    }

    pub fn is_running(&self) -> bool {
        self.started && !self.game_over && !self.paused
    }

    pub fn occupied(&self) -> HashSet<Position> {
        self.snake.iter().copied().collect()
    }

    /// Blink phase of the head while invincible; flips every 0.1s of the timer.
    pub fn head_flash(&self) -> bool {
        self.invincible && ((self.invincible_timer * 10.0) as i64) % 2 == 1
    }

    pub fn view(&self) -> GameView {
        GameView {
            snake: self.snake.iter().copied().collect(),
            direction: self.direction,
            food: self.food,
            special_food: self.special_food,
            head_flash: self.head_flash(),
            invincible: self.invincible,
            score: self.score,
            multiplier: (self.score_multiplier > 1).then_some(self.score_multiplier),
            paused: self.paused,
            game_over: self.game_over,
        }
    }
}

/// Read-only snapshot handed to whatever draws the board.
#[derive(Debug, Clone, PartialEq)]
pub struct GameView {
    pub snake: Vec<Position>,
    pub direction: Direction,
    pub food: Option<Position>,
    pub special_food: Option<Position>,
    pub head_flash: bool,
    pub invincible: bool,
    pub score: u32,
    /// `Some(n)` while a multiplier above 1 is active, for the "xN" label.
    pub multiplier: Option<u32>,
    pub paused: bool,
    pub game_over: bool,
}
