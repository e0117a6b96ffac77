//! Taquin Scramble - Randomized local search over puzzle boards
//!
//! Scrambling is a greedy descent, not a shuffle: each round applies the
//! direct move that reduces the board's progress the most, breaking ties
//! at random, until the progress drops to a target threshold. Runs that
//! stop improving are cut off and reported as a recoverable stall so
//! callers can retry with a fresh board.

pub mod error;
pub mod scrambler;


pub use error::ScrambleError;
pub use scrambler::{Scrambler, ScrambleReport, DEFAULT_STALL_LIMIT};
