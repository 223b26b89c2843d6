//! Single-player snake: tick engine, food spawning, tap steering, timed
//! power-ups and a persisted high score. Drawing and audio output belong to
//! the front-end, which talks to this crate through [`Session`], [`GameView`]
//! and [`SoundSink`].

pub mod config;
pub mod context;
pub mod engine;
pub mod error;
pub mod food;
pub mod geometry;
pub mod input;
pub mod session;
pub mod sound;
pub mod state;
pub mod store;
pub mod timer;

pub use config::{GameConfig, Settings};
pub use context::Context;
pub use engine::{TickEngine, TickOutcome};
pub use error::{ConfigError, StoreError};
pub use food::FoodSpawner;
pub use geometry::{Bounds, Direction, Position};
pub use input::{InputOutcome, Tap, direction_from_tap, handle_tap};
pub use session::{GameOverSummary, Screen, Session};
pub use sound::{Silent, SoundCue, SoundSink};
pub use state::{GameState, GameView};
pub use store::{DEFAULT_HIGH_SCORE_FILE, HighScoreStore};
pub use timer::TickTimer;
