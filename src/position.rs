//! A single board cell with its occupied/hit flags.

use core::{
    fmt,
    hash::{Hash, Hasher},
};

/// A `(row, column)` cell. Identity is the coordinate pair only: two
/// positions with the same coordinates are equal whatever their flags.
///
/// Coordinates are signed so that shots and footprints falling off the board
/// can still be represented; range checks belong to `Fleet` and `Game`.
#[derive(Debug, Clone, Copy)]
pub struct Position {
    row: i32,
    column: i32,
    occupied: bool,
    hit: bool,
}

impl Position {
    /// A fresh, unoccupied and unhit cell.
    pub const fn new(row: i32, column: i32) -> Self {
        Self {
            row,
            column,
            occupied: false,
            hit: false,
        }
    }

    pub fn row(&self) -> i32 {
        self.row
    }

    pub fn column(&self) -> i32 {
        self.column
    }

    pub fn is_occupied(&self) -> bool {
        self.occupied
    }

    pub fn is_hit(&self) -> bool {
        self.hit
    }

    /// True for the cell itself and its eight neighbours.
    pub fn is_adjacent_to(&self, other: &Position) -> bool {
        self.row.abs_diff(other.row) <= 1 && self.column.abs_diff(other.column) <= 1
    }

    pub fn occupy(&mut self) {
        self.occupied = true;
    }

    pub fn shoot(&mut self) {
        self.hit = true;
    }

    /// Position moved by `(d_row, d_column)`, with fresh flags. Saturates at
    /// the `i32` bounds, which always lie off the board.
    pub(crate) fn offset(&self, d_row: i32, d_column: i32) -> Self {
        Self::new(
            self.row.saturating_add(d_row),
            self.column.saturating_add(d_column),
        )
    }
}

impl PartialEq for Position {
    fn eq(&self, other: &Self) -> bool {
        self.row == other.row && self.column == other.column
    }
}

impl Eq for Position {}

impl Hash for Position {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.row.hash(state);
        self.column.hash(state);
    }
}

impl From<(i32, i32)> for Position {
    fn from((row, column): (i32, i32)) -> Self {
        Self::new(row, column)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}
