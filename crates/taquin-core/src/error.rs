//! Error types for the board model.

use thiserror::Error;

use crate::moves::MoveOperation;
use crate::position::TilePosition;

/// Errors raised while constructing a board or applying moves to it.
///
/// Construction errors are descriptive and never leave a partially-built
/// board behind. [`BoardError::ImpossibleMove`] is the one runtime variant:
/// it reports a move request whose target line can never be vacated.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BoardError {
    /// Board dimensions describe an empty grid
    #[error("board must have at least one row and one column")]
    EmptyGrid,

    /// A tile was placed outside the grid
    #[error("position {0} is outside the board")]
    OutOfBounds(TilePosition),

    /// Two tiles were placed on the same cell
    #[error("cell {0} already holds a tile")]
    CellOccupied(TilePosition),

    /// A tile's acceptable target falls outside the grid
    #[error("tile \"{label}\" has target {position} outside the board")]
    TargetOutOfBounds {
        label: String,
        position: TilePosition,
    },

    /// A tile was created with no acceptable targets
    #[error("tile \"{0}\" has no acceptable target positions")]
    EmptyTargets(String),

    /// A move whose chain resolution found no reachable empty cell
    #[error("move {0} is impossible: no reachable empty cell")]
    ImpossibleMove(MoveOperation),
}

/// Result type alias for board operations
pub type Result<T> = std::result::Result<T, BoardError>;
