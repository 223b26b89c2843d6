use log::{debug, info};

use crate::config::GameConfig;
use crate::context::Context;
use crate::error::ConfigError;
use crate::food::FoodSpawner;
use crate::geometry::Bounds;
use crate::sound::SoundCue;
use crate::state::GameState;

/// What a single call to [`TickEngine::advance`] did.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TickOutcome {
    /// Not started, paused or already over.
    Idle,
    Moved,
    AteFood,
    AteSpecialFood,
    /// The run ended. The caller must stop scheduling ticks.
    Collided { new_record: bool },
}

/// Advances a [`GameState`] one cell per call.
#[derive(Debug, Clone)]
pub struct TickEngine {
    config: GameConfig,
    spawner: FoodSpawner,
}

impl TickEngine {
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let spawner = FoodSpawner::new(config.seed, config.max_spawn_attempts);
        Ok(Self { config, spawner })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Fresh run at the configured start cell, with food already placed.
    pub fn new_game(&mut self, bounds: &Bounds) -> GameState {
        let mut state = GameState::new(self.config.start, self.config.start_direction);
        state.food = self.spawner.place_food(&state.occupied(), bounds);
        info!("game started at ({}, {}), food at {:?}", state.head().x, state.head().y, state.food);
        state
    }

    pub fn advance(&mut self, state: &mut GameState, dt: f32, bounds: &Bounds, ctx: &mut Context) -> TickOutcome {
        if !state.is_running() {
            return TickOutcome::Idle;
        }

        if state.special_food.is_some() {
            state.special_food_timer -= dt;
            if state.special_food_timer <= 0.0 {
                debug!("special food at {:?} expired", state.special_food);
                state.special_food = None;
                state.special_food_timer = 0.0;
            }
        }

        if state.invincible {
            state.invincible_timer -= dt;
            if state.invincible_timer <= 0.0 {
                debug!("invincibility ended");
                state.invincible = false;
                state.invincible_timer = 0.0;
                state.score_multiplier = 1;
            }
        }

        let new_head = state.head().step(state.direction, self.config.cell_size);

        // Walls and body are harmless while invincible.
        if !state.invincible && (!bounds.contains(new_head) || state.snake.contains(&new_head)) {
            return self.end_game(state, ctx);
        }

        state.snake.push_front(new_head);

        if state.food == Some(new_head) {
            state.score = state.score.saturating_add(self.config.food_points * state.score_multiplier);
            ctx.play(SoundCue::Eat);
            self.respawn_food(state, bounds);
            TickOutcome::AteFood
        } else if state.special_food == Some(new_head) {
            state.score = state.score.saturating_add(self.config.special_food_points * state.score_multiplier);
            state.invincible = true;
            state.invincible_timer = self.config.invincibility_duration;
            state.score_multiplier = self.config.boosted_multiplier;
            state.special_food = None;
            state.special_food_timer = 0.0;
            ctx.play(SoundCue::Eat);
            debug!("invincible for {}s, multiplier x{}", state.invincible_timer, state.score_multiplier);
            TickOutcome::AteSpecialFood
        } else {
            state.snake.pop_back();
            TickOutcome::Moved
        }
    }

    fn end_game(&mut self, state: &mut GameState, ctx: &mut Context) -> TickOutcome {
        state.game_over = true;
        state.started = false;
        ctx.play(SoundCue::GameOver);
        let new_record = ctx.record_score(state.score);
        info!("game over with score {} (length {})", state.score, state.len());
        TickOutcome::Collided { new_record }
    }

    // At most one special food exists; a live one blocks both the roll and its cell.
    fn respawn_food(&mut self, state: &mut GameState, bounds: &Bounds) {
        let mut occupied = state.occupied();
        occupied.extend(state.special_food);
        state.food = self.spawner.place_food(&occupied, bounds);
        if state.special_food.is_none() && self.spawner.roll(self.config.special_food_chance) {
            state.special_food = self.spawner.place_special(&occupied, state.food, bounds);
            if state.special_food.is_some() {
                state.special_food_timer = self.config.special_food_lifetime;
                debug!("special food at {:?} for {}s", state.special_food, state.special_food_timer);
            }
        }
    }
}
