use log::debug;

use crate::geometry::{Direction, Position};
use crate::state::GameState;

/// A pointer press in board coordinates.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Tap {
    pub x: f32,
    pub y: f32,
    pub double: bool,
}

impl Tap {
    pub fn single(x: f32, y: f32) -> Self {
        Self { x, y, double: false }
    }

    pub fn double(x: f32, y: f32) -> Self {
        Self { x, y, double: true }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum InputOutcome {
    /// Not started, over, or paused.
    Ignored,
    PauseToggled { paused: bool },
    Turned(Direction),
    /// The tap asked for a 180° reversal, or for the current direction.
    Kept,
}

/// Direction towards `tap` along its dominant axis; ties, including a tap
/// right on the head, go horizontal. A reversal of `current` keeps `current`.
pub fn direction_from_tap(head: Position, tap: (f32, f32), current: Direction) -> Direction {
    let dx = tap.0 - head.x as f32;
    let dy = tap.1 - head.y as f32;

    let proposed = if dx.abs() >= dy.abs() {
        if dx > 0.0 {
            Direction::Right
        } else {
            Direction::Left
        }
    } else if dy > 0.0 {
        Direction::Up
    } else {
        Direction::Down
    };

    if proposed == current.opposite() {
        current
    } else {
        proposed
    }
}

/// Applies a tap to a live run.
pub fn handle_tap(state: &mut GameState, tap: Tap) -> InputOutcome {
    if !state.started || state.game_over {
        return InputOutcome::Ignored;
    }
    if tap.double {
        state.paused = !state.paused;
        debug!("paused: {}", state.paused);
        return InputOutcome::PauseToggled { paused: state.paused };
    }
    if state.paused {
        return InputOutcome::Ignored;
    }

    let next = direction_from_tap(state.head(), (tap.x, tap.y), state.direction);
    if next == state.direction {
        return InputOutcome::Kept;
    }
    state.direction = next;
    InputOutcome::Turned(next)
}
