//! Scrambling failure types.

use thiserror::Error;

/// Errors raised by a scrambling run.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ScrambleError {
    /// The greedy search stopped improving before reaching its target.
    ///
    /// Expected and recoverable: greedy descent can wedge itself in a
    /// configuration no single move improves, especially on small boards
    /// or thresholds close to zero. Callers retry with a fresh random
    /// board or a looser threshold.
    #[error(
        "scramble stalled at progress {best_progress:.3} after {rounds} rounds (target {target:.3})"
    )]
    Stalled {
        /// Best (lowest) progress seen across the whole run.
        best_progress: f64,
        /// The threshold the run was asked to reach.
        target: f64,
        /// Rounds played before giving up.
        rounds: u32,
    },
}
