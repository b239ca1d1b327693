//! Board geometry: squares, relative offsets, and board bounds.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A square on the board, addressed by row and column.
///
/// A position carries no bounds of its own; [`BoardSize::contains`]
/// decides whether it lies on a given board.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[serde(from = "(i32, i32)", into = "(i32, i32)")]
#[display("({}, {})", row, col)]
pub struct Position {
    /// Row index, counted from the top.
    pub row: i32,
    /// Column index, counted from the left.
    pub col: i32,
}

impl Position {
    /// Creates a position.
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Applies `offset`, or `None` when either coordinate overflows.
    pub fn checked_offset(self, offset: Offset) -> Option<Position> {
        Some(Position::new(
            self.row.checked_add(offset.d_row)?,
            self.col.checked_add(offset.d_col)?,
        ))
    }
}

impl From<(i32, i32)> for Position {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

impl From<Position> for (i32, i32) {
    fn from(pos: Position) -> Self {
        (pos.row, pos.col)
    }
}

/// A relative step from one square to another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[serde(from = "(i32, i32)", into = "(i32, i32)")]
#[display("({:+}, {:+})", d_row, d_col)]
pub struct Offset {
    /// Row delta.
    pub d_row: i32,
    /// Column delta.
    pub d_col: i32,
}

impl Offset {
    /// Creates an offset.
    pub const fn new(d_row: i32, d_col: i32) -> Self {
        Self { d_row, d_col }
    }

    /// Returns true for the null step `(0, 0)`.
    pub fn is_zero(self) -> bool {
        self.d_row == 0 && self.d_col == 0
    }
}

impl From<(i32, i32)> for Offset {
    fn from((d_row, d_col): (i32, i32)) -> Self {
        Self::new(d_row, d_col)
    }
}

impl From<Offset> for (i32, i32) {
    fn from(offset: Offset) -> Self {
        (offset.d_row, offset.d_col)
    }
}


/// Side length of the square board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[serde(transparent)]
pub struct BoardSize(u32);

impl BoardSize {
    /// Standard 8x8 board.
    pub const STANDARD: BoardSize = BoardSize(8);

    /// Creates a board of `n` by `n` squares.
    pub const fn new(n: u32) -> Self {
        Self(n)
    }

    /// Returns the side length.
    pub fn get(self) -> u32 {
        self.0
    }

    /// Checks whether a position lies within `[0, N) x [0, N)`.
    #[instrument(level = "trace")]
    pub fn contains(self, pos: Position) -> bool {
        let n = i64::from(self.0);
        (0..n).contains(&i64::from(pos.row)) && (0..n).contains(&i64::from(pos.col))
    }

    /// Side length as a signed coordinate bound, if it fits in `i32`.
    pub fn as_coordinate(self) -> Option<i32> {
        i32::try_from(self.0).ok()
    }

    /// Iterates every square in row-major order.
    ///
    /// Boards wider than `i32::MAX` have no addressable squares beyond
    /// that bound and are rejected by layout validation.
    pub fn squares(self) -> impl Iterator<Item = Position> {
        let n = self.as_coordinate().unwrap_or(i32::MAX);
        (0..n).flat_map(move |row| (0..n).map(move |col| Position::new(row, col)))
    }
}

impl Default for BoardSize {
    fn default() -> Self {
        Self::STANDARD
    }
}
