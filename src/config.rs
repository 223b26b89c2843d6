use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::geometry::{Direction, Position};

pub const SPEED_MIN: f32 = 0.05;
pub const SPEED_MAX: f32 = 0.5;
pub const SPEED_STEP: f32 = 0.05;
pub const DEFAULT_SPEED: f32 = 0.2;

/// Rules of a run. Everything the tick engine treats as policy lives here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub cell_size: i32,
    /// Inset applied on every side of the board.
    pub margin: i32,
    pub start: Position,
    pub start_direction: Direction,
    pub food_points: u32,
    pub special_food_points: u32,
    /// Score multiplier while invincible; 1 or 2, never stacking.
    pub boosted_multiplier: u32,
    /// Chance that eating normal food also spawns special food.
    pub special_food_chance: f64,
    /// Seconds before uneaten special food disappears.
    pub special_food_lifetime: f32,
    pub invincibility_duration: f32,
    /// Random draws tried before falling back to a scan of the free cells.
    pub max_spawn_attempts: u32,
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            cell_size: 20,
            margin: 20,
            start: Position::new(100, 100),
            start_direction: Direction::Right,
            food_points: 1,
            special_food_points: 5,
            boosted_multiplier: 2,
            special_food_chance: 0.3,
            special_food_lifetime: 10.0,
            invincibility_duration: 5.0,
            max_spawn_attempts: 1000,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Parses a (possibly partial) JSON override on top of the defaults.
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cell_size <= 0 {
            return Err(ConfigError::Invalid("cell_size must be positive"));
        }
        if self.margin < 0 {
            return Err(ConfigError::Invalid("margin must not be negative"));
        }
        if !(0.0..=1.0).contains(&self.special_food_chance) {
            return Err(ConfigError::Invalid("special_food_chance must be within [0, 1]"));
        }
        if !(self.special_food_lifetime > 0.0) {
            return Err(ConfigError::Invalid("special_food_lifetime must be positive"));
        }
        if !(self.invincibility_duration > 0.0) {
            return Err(ConfigError::Invalid("invincibility_duration must be positive"));
        }
        if !(1..=2).contains(&self.boosted_multiplier) {
            return Err(ConfigError::Invalid("boosted_multiplier must be 1 or 2"));
        }
        if self.max_spawn_attempts == 0 {
            return Err(ConfigError::Invalid("max_spawn_attempts must be at least 1"));
        }
        let off_x = self.start.x - self.margin;
        let off_y = self.start.y - self.margin;
        if off_x < 0 || off_y < 0 || off_x % self.cell_size != 0 || off_y % self.cell_size != 0 {
            return Err(ConfigError::Invalid("start must sit on a grid cell inside the margin"));
        }
        Ok(())
    }
}

/// Player-adjustable settings, owned by the session rather than a global.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Settings {
    /// Seconds per tick.
    pub speed: f32,
    pub sound_enabled: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self { speed: DEFAULT_SPEED, sound_enabled: true }
    }
}

impl Settings {
    /// Clamps into `[SPEED_MIN, SPEED_MAX]` and snaps to the slider step.
    /// Non-finite input is ignored.
    pub fn set_speed(&mut self, speed: f32) {
        if !speed.is_finite() {
            return;
        }
        let steps = (speed.clamp(SPEED_MIN, SPEED_MAX) / SPEED_STEP).round();
        self.speed = (steps * SPEED_STEP).clamp(SPEED_MIN, SPEED_MAX);
    }

    pub fn toggle_sound(&mut self) -> bool {
        self.sound_enabled = !self.sound_enabled;
        self.sound_enabled
    }
}
