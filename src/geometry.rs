use serde::{Deserialize, Serialize};

/// A grid-aligned point on the board, in board units (pixels).
///
/// The board uses a y-up convention: `Direction::Up` increases `y`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The neighbouring cell one step away in `direction`.
    pub fn step(self, direction: Direction, cell_size: i32) -> Self {
        let (dx, dy) = direction.delta();
        Self { x: self.x + dx * cell_size, y: self.y + dy * cell_size }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, 1),
            Direction::Down => (0, -1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

/// The board rectangle plus the inset that keeps the border visible.
///
/// Only cells whose origin lies in `[margin, width - margin)` horizontally and
/// `[margin, height - margin)` vertically are playable.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Bounds {
    pub width: i32,
    pub height: i32,
    pub cell_size: i32,
    pub margin: i32,
}

impl Bounds {
    pub fn new(width: i32, height: i32, cell_size: i32, margin: i32) -> Self {
        Self { width, height, cell_size, margin }
    }

    pub fn contains(&self, p: Position) -> bool {
        p.x >= self.margin
            && p.x < self.width - self.margin
            && p.y >= self.margin
            && p.y < self.height - self.margin
    }

    pub fn columns(&self) -> i32 {
        ((self.width - 2 * self.margin) / self.cell_size).max(0)
    }

    pub fn rows(&self) -> i32 {
        ((self.height - 2 * self.margin) / self.cell_size).max(0)
    }

    pub fn cell_count(&self) -> usize {
        (self.columns() as usize) * (self.rows() as usize)
    }

    /// Board position of the grid cell at (`col`, `row`).
    pub fn cell(&self, col: i32, row: i32) -> Position {
        Position { x: col * self.cell_size + self.margin, y: row * self.cell_size + self.margin }
    }

    pub fn cells(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.rows()).flat_map(move |row| (0..self.columns()).map(move |col| self.cell(col, row)))
    }

    /// True when `p` sits exactly on a cell origin inside the playable area.
    pub fn is_cell(&self, p: Position) -> bool {
        self.contains(p)
            && (p.x - self.margin) % self.cell_size == 0
            && (p.y - self.margin) % self.cell_size == 0
            && (p.x - self.margin) / self.cell_size < self.columns()
            && (p.y - self.margin) / self.cell_size < self.rows()
    }
}
