use log::{debug, info};

use crate::config::{GameConfig, Settings};
use crate::context::Context;
use crate::engine::{TickEngine, TickOutcome};
use crate::error::ConfigError;
use crate::geometry::Bounds;
use crate::input::{self, InputOutcome, Tap};
use crate::state::{GameState, GameView};
use crate::timer::TickTimer;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct GameOverSummary {
    pub score: u32,
    pub high_score: u32,
    /// The run set (or tied) the record with a non-zero score.
    pub new_record: bool,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Screen {
    Menu,
    Settings,
    Playing,
    GameOver(GameOverSummary),
}

/// Screen flow plus the one live run. All input and ticks go through here,
/// so the game state only ever has one writer.
pub struct Session {
    ctx: Context,
    engine: TickEngine,
    bounds: Bounds,
    screen: Screen,
    game: Option<GameState>,
    timer: TickTimer,
}

impl Session {
    /// `width`/`height` are the board size; cell size and margin come from `config`.
    pub fn new(config: GameConfig, width: i32, height: i32, ctx: Context) -> Result<Self, ConfigError> {
        let bounds = Bounds::new(width, height, config.cell_size, config.margin);
        let engine = TickEngine::new(config)?;
        Ok(Self { ctx, engine, bounds, screen: Screen::Menu, game: None, timer: TickTimer::default() })
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn settings(&self) -> Settings {
        self.ctx.settings
    }

    pub fn high_score(&self) -> u32 {
        self.ctx.high_score()
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn game(&self) -> Option<&GameState> {
        self.game.as_ref()
    }

    /// Direct access to the live run, for scripted setups.
    pub fn game_mut(&mut self) -> Option<&mut GameState> {
        self.game.as_mut()
    }

    pub fn view(&self) -> Option<GameView> {
        self.game.as_ref().map(GameState::view)
    }

    pub fn is_ticking(&self) -> bool {
        self.timer.is_scheduled()
    }

    /// Board resized by the front-end. Takes effect from the next tick.
    pub fn resize(&mut self, width: i32, height: i32) {
        self.bounds.width = width;
        self.bounds.height = height;
    }

    /// Starts a run from the menu, or restarts from the game-over screen.
    pub fn start(&mut self) -> bool {
        if !matches!(self.screen, Screen::Menu | Screen::GameOver(_)) {
            return false;
        }
        self.game = Some(self.engine.new_game(&self.bounds));
        self.timer.schedule(self.ctx.settings.speed);
        self.screen = Screen::Playing;
        info!("run started, {}s per tick", self.ctx.settings.speed);
        true
    }

    pub fn open_settings(&mut self) -> bool {
        if self.screen != Screen::Menu {
            return false;
        }
        self.screen = Screen::Settings;
        true
    }

    pub fn set_speed(&mut self, speed: f32) -> bool {
        if self.screen != Screen::Settings {
            return false;
        }
        self.ctx.settings.set_speed(speed);
        debug!("speed set to {}", self.ctx.settings.speed);
        true
    }

    pub fn toggle_sound(&mut self) -> bool {
        if self.screen != Screen::Settings {
            return false;
        }
        let on = self.ctx.settings.toggle_sound();
        debug!("sound {}", if on { "on" } else { "off" });
        true
    }

    /// Back to the main menu from settings, a run, or the game-over screen.
    /// Any live run is discarded.
    pub fn to_menu(&mut self) -> bool {
        if self.screen == Screen::Menu {
            return false;
        }
        self.timer.cancel();
        self.game = None;
        self.screen = Screen::Menu;
        true
    }

    pub fn tap(&mut self, tap: Tap) -> InputOutcome {
        match (&self.screen, self.game.as_mut()) {
            (Screen::Playing, Some(game)) => input::handle_tap(game, tap),
            _ => InputOutcome::Ignored,
        }
    }

    /// Feeds elapsed frame time and runs the tick that fell due, if any.
    /// A long frame still advances the run by a single tick.
    pub fn update(&mut self, elapsed: f32) -> Option<TickOutcome> {
        let game = self.game.as_mut()?;
        if !self.timer.poll(elapsed) {
            return None;
        }

        let outcome = self.engine.advance(game, self.timer.interval(), &self.bounds, &mut self.ctx);
        if let TickOutcome::Collided { .. } = outcome {
            self.timer.cancel();
            let high_score = self.ctx.high_score();
            self.screen = Screen::GameOver(GameOverSummary {
                score: game.score,
                high_score,
                new_record: game.score > 0 && game.score == high_score,
            });
        }
        Some(outcome)
    }
}
