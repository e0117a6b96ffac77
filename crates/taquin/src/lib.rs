//! Taquin - A sliding-tile puzzle engine in Rust
//!
//! Boards, chained moves, greedy scrambling and queued background
//! generation behind one flat API.
//!
//! # Example
//!
//! ```rust
//! use taquin::prelude::*;
//!
//! let style = catalogue::classic_4x4();
//! let generator = QueuedGenerator::for_style(&style, 2);
//!
//! let mut board = generator.next();
//! assert!(board.progress() <= style.threshold());
//!
//! // There is always a tile next to the empty cell, ready to slide in.
//! let moves = board.possible_moves();
//! board.apply_chain(moves[0]).unwrap();
//! assert!((0.0..=1.0).contains(&board.progress()));
//! ```

// Board model and moves
pub use taquin_core::{
    Board, BoardError, MoveChain, MoveDirection, MoveOperation, MoveOutcome, Tile, TilePosition,
};

// Greedy scrambling
pub use taquin_scramble::{ScrambleError, ScrambleReport, Scrambler, DEFAULT_STALL_LIMIT};

// Queued background generation
pub use taquin_generate::{GenerateError, GeneratorPool, QueuedGenerator};

// Style catalogue and parsing
pub use taquin_styles::{catalogue, BoardStyle, StyleError};

pub mod prelude {
    pub use super::{catalogue, BoardStyle, GeneratorPool, QueuedGenerator};
    pub use super::{Board, MoveDirection, MoveOperation, MoveOutcome, Tile, TilePosition};
    pub use super::{ScrambleReport, Scrambler};
}
