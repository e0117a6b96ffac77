//! Position and direction primitives.
//!
//! Both types are plain `Copy` values; every operation returns a new value.

use std::fmt;

/// A cell coordinate on the board.
///
/// Positions are ordered row-major: `(0, 2) < (1, 0)`. Row 0 is the top
/// row and column 0 the leftmost column, so [`MoveDirection::Up`] decreases
/// the row.
///
/// # Examples
///
/// ```
/// use taquin_core::{MoveDirection, TilePosition};
///
/// let a = TilePosition::new(1, 1);
/// let b = TilePosition::new(1, 3);
///
/// assert_eq!(a.manhattan_distance(b), 2);
/// assert!(!a.is_adjacent_to(b));
/// assert_eq!(a.moved(MoveDirection::Right).moved(MoveDirection::Right), b);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TilePosition {
    /// Row index, 0 at the top.
    pub row: i32,
    /// Column index, 0 at the left.
    pub column: i32,
}

impl TilePosition {
    /// Creates a position from row and column indices.
    #[inline]
    pub const fn new(row: i32, column: i32) -> Self {
        TilePosition { row, column }
    }

    /// City-block distance between two positions.
    #[inline]
    pub const fn manhattan_distance(self, other: TilePosition) -> u32 {
        self.row.abs_diff(other.row) + self.column.abs_diff(other.column)
    }

    /// Whether `other` shares an edge with this position.
    #[inline]
    pub const fn is_adjacent_to(self, other: TilePosition) -> bool {
        self.manhattan_distance(other) == 1
    }

    /// The position one step in `direction`.
    #[inline]
    pub const fn moved(self, direction: MoveDirection) -> Self {
        self.moved_by(direction, 1)
    }

    /// The position `stride` steps in `direction`.
    ///
    /// Translation is unchecked: the result may lie outside any particular
    /// board and must be validated with [`Board::contains`] before use.
    ///
    /// [`Board::contains`]: crate::Board::contains
    #[inline]
    pub const fn moved_by(self, direction: MoveDirection, stride: i32) -> Self {
        TilePosition {
            row: self.row + direction.row_delta() * stride,
            column: self.column + direction.column_delta() * stride,
        }
    }
}

impl fmt::Display for TilePosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

/// One of the four directions a tile can slide in.
///
/// # Examples
///
/// ```
/// use taquin_core::MoveDirection;
///
/// assert_eq!(MoveDirection::Up.opposite(), MoveDirection::Down);
/// for direction in MoveDirection::ALL {
///     assert_eq!(direction.opposite().opposite(), direction);
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MoveDirection {
    Up,
    Down,
    Left,
    Right,
}

impl MoveDirection {
    /// All four directions, in enumeration order.
    pub const ALL: [MoveDirection; 4] = [
        MoveDirection::Up,
        MoveDirection::Down,
        MoveDirection::Left,
        MoveDirection::Right,
    ];

    /// The direction that undoes this one.
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            MoveDirection::Up => MoveDirection::Down,
            MoveDirection::Down => MoveDirection::Up,
            MoveDirection::Left => MoveDirection::Right,
            MoveDirection::Right => MoveDirection::Left,
        }
    }

    /// Row offset of a single step: -1 for up, +1 for down.
    #[inline]
    pub const fn row_delta(self) -> i32 {
        match self {
            MoveDirection::Up => -1,
            MoveDirection::Down => 1,
            MoveDirection::Left | MoveDirection::Right => 0,
        }
    }

    /// Column offset of a single step: -1 for left, +1 for right.
    #[inline]
    pub const fn column_delta(self) -> i32 {
        match self {
            MoveDirection::Left => -1,
            MoveDirection::Right => 1,
            MoveDirection::Up | MoveDirection::Down => 0,
        }
    }
}

impl fmt::Display for MoveDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MoveDirection::Up => "up",
            MoveDirection::Down => "down",
            MoveDirection::Left => "left",
            MoveDirection::Right => "right",
        };
        write!(f, "{name}")
    }
}
