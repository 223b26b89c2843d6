use std::env;

use log::{LevelFilter, debug, info, warn};
use simplelog::{Config, SimpleLogger};
use snake_touch::{
    Bounds, ConfigError, Context, Direction, GameConfig, GameView, HighScoreStore, Position, Screen, Session, Settings,
    SoundCue, SoundSink, Tap,
};

// Board size for the headless run
const BOARD_WIDTH: i32 = 800;
const BOARD_HEIGHT: i32 = 600;
const FRAME_TIME: f32 = 1.0 / 60.0;
const MAX_FRAMES: u32 = 60 * 60 * 10;

/// Stands in for the audio device: cues go to the log.
struct LoggedSound;

impl SoundSink for LoggedSound {
    fn play(&mut self, cue: SoundCue) {
        debug!("sound cue: {cue:?}");
    }
}

fn log_level() -> LevelFilter {
    match env::var("SNAKE_LOG").as_deref() {
        Ok("trace") => LevelFilter::Trace,
        Ok("debug") => LevelFilter::Debug,
        Ok("warn") => LevelFilter::Warn,
        Ok("error") => LevelFilter::Error,
        _ => LevelFilter::Info,
    }
}

fn is_free(view: &GameView, bounds: &Bounds, cell: Position) -> bool {
    (view.invincible || bounds.contains(cell)) && !view.snake.contains(&cell)
}

// Greedy pilot: the safe direction that closes the distance to the nearest bonus.
fn autopilot(view: &GameView, bounds: &Bounds) -> Option<Tap> {
    let head = *view.snake.first()?;
    let target = view.special_food.or(view.food)?;
    let distance = |p: Position| (p.x - target.x).abs() + (p.y - target.y).abs();

    let best = Direction::ALL
        .into_iter()
        .filter(|d| *d != view.direction.opposite())
        .map(|d| (d, head.step(d, bounds.cell_size)))
        .filter(|(_, cell)| is_free(view, bounds, *cell))
        .min_by_key(|(_, cell)| distance(*cell))
        .map(|(d, _)| d)?;

    if best == view.direction {
        return None;
    }
    let (dx, dy) = best.delta();
    let reach = (bounds.cell_size * 2) as f32;
    Some(Tap::single(head.x as f32 + dx as f32 * reach, head.y as f32 + dy as f32 * reach))
}

fn main() -> Result<(), ConfigError> {
    if SimpleLogger::init(log_level(), Config::default()).is_err() {
        eprintln!("logger already initialised");
    }

    let config = match env::var("SNAKE_CONFIG") {
        Ok(text) => GameConfig::from_json_str(&text)?,
        Err(_) => GameConfig::default(),
    };
    let ctx = Context::new(Settings::default(), HighScoreStore::default(), Box::new(LoggedSound));
    let mut session = Session::new(config, BOARD_WIDTH, BOARD_HEIGHT, ctx)?;
    let bounds = session.bounds();

    session.start();
    for _ in 0..MAX_FRAMES {
        if let Some(tap) = session.view().and_then(|view| autopilot(&view, &bounds)) {
            session.tap(tap);
        }
        session.update(FRAME_TIME);

        if let Screen::GameOver(summary) = session.screen() {
            info!("final score {}, high score {}", summary.score, summary.high_score);
            if summary.new_record {
                info!("new record!");
            }
            return Ok(());
        }
    }

    let score = session.view().map(|v| v.score).unwrap_or_default();
    warn!("stopped after {MAX_FRAMES} frames with score {score}");
    Ok(())
}
