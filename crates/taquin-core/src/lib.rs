//! Taquin Core - Board model and move resolution for sliding-tile puzzles
//!
//! This crate provides the fundamental pieces of the puzzle engine:
//! - Position and direction primitives
//! - Tiles carrying one or more acceptable target positions
//! - The board itself: tile placement, move legality with chained pushes,
//!   and the scramble-progress metric

pub mod board;
pub mod error;
pub mod moves;
pub mod position;
pub mod tile;


pub use board::Board;
pub use error::{BoardError, Result};
pub use moves::{MoveChain, MoveOperation, MoveOutcome};
pub use position::{MoveDirection, TilePosition};
pub use tile::Tile;
