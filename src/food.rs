use std::collections::HashSet;

use log::{debug, warn};
use rand::rngs::StdRng;
use rand::seq::IteratorRandom;
use rand::{Rng, SeedableRng};

use crate::geometry::{Bounds, Position};

/// Picks free cells for normal and special food.
#[derive(Debug, Clone)]
pub struct FoodSpawner {
    rng: StdRng,
    max_attempts: u32,
}

impl FoodSpawner {
    pub fn new(seed: Option<u64>, max_attempts: u32) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { rng, max_attempts: max_attempts.max(1) }
    }

    /// Uniformly random playable cell not in `occupied`.
    ///
    /// Tries `max_attempts` random draws, then falls back to choosing among the
    /// remaining free cells so a crowded board cannot stall. `None` means the
    /// board is full.
    pub fn place_food(&mut self, occupied: &HashSet<Position>, bounds: &Bounds) -> Option<Position> {
        let (cols, rows) = (bounds.columns(), bounds.rows());
        if cols == 0 || rows == 0 {
            warn!("board has no playable cells");
            return None;
        }

        for _ in 0..self.max_attempts {
            let cell = bounds.cell(self.rng.gen_range(0..cols), self.rng.gen_range(0..rows));
            if !occupied.contains(&cell) {
                return Some(cell);
            }
        }

        debug!("random placement exhausted, scanning free cells");
        let cell = bounds.cells().filter(|c| !occupied.contains(c)).choose(&mut self.rng);
        if cell.is_none() {
            warn!("no free cell left for food");
        }
        cell
    }

    /// Like [`FoodSpawner::place_food`], additionally avoiding the normal food cell.
    pub fn place_special(&mut self, occupied: &HashSet<Position>, food: Option<Position>, bounds: &Bounds) -> Option<Position> {
        match food {
            Some(food) if !occupied.contains(&food) => {
                let mut blocked = occupied.clone();
                blocked.insert(food);
                self.place_food(&blocked, bounds)
            }
            _ => self.place_food(occupied, bounds),
        }
    }

    /// Bernoulli draw with probability `chance` (clamped into `[0, 1]`).
    pub fn roll(&mut self, chance: f64) -> bool {
        self.rng.gen_bool(chance.clamp(0.0, 1.0))
    }
}
