//! The greedy randomized scrambling search.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, trace, warn};

use taquin_core::{Board, MoveOperation};

use crate::error::ScrambleError;

/// Consecutive non-improving rounds a run tolerates before it stalls.
pub const DEFAULT_STALL_LIMIT: u32 = 8;

/// Summary of a successful scrambling run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrambleReport {
    /// Rounds played before the target was reached.
    pub rounds: u32,
    /// The board's progress when the run stopped; at most the target.
    pub final_progress: f64,
}

/// Drives a board's progress down to a target threshold by repeatedly
/// applying the locally best direct move.
///
/// Each round enumerates the board's direct moves, evaluates every one on
/// a disposable copy, keeps the subset achieving the maximum progress
/// reduction and breaks ties uniformly at random. The choice is greedy:
/// best for the round, not for the run. A run that stops improving on the
/// lowest progress it has seen is aborted after [`DEFAULT_STALL_LIMIT`]
/// non-improving rounds and reported as [`ScrambleError::Stalled`].
///
/// The random source is owned by the scrambler and injectable, so
/// production draws from the OS while tests pin a seed.
///
/// # Examples
///
/// ```
/// use taquin_core::{Board, Tile, TilePosition};
/// use taquin_scramble::Scrambler;
///
/// // A tile one cell away from home.
/// let home = TilePosition::new(0, 0);
/// let board = Board::from_tiles(
///     1,
///     2,
///     vec![(TilePosition::new(0, 1), Tile::new("a", vec![home]).unwrap())],
/// )
/// .unwrap();
///
/// let mut scrambled = board.clone();
/// let report = Scrambler::with_seed(7)
///     .scramble(&mut scrambled, 0.0)
///     .unwrap();
///
/// assert!(scrambled.is_solved());
/// assert_eq!(report.rounds, 1);
/// ```
pub struct Scrambler<R: Rng = StdRng> {
    rng: R,
    stall_limit: u32,
}

impl Scrambler<StdRng> {
    /// Creates a scrambler drawing randomness from the OS.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    /// Creates a scrambler with a fixed seed.
    ///
    /// Use this for reproducible runs in tests.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl Default for Scrambler<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> Scrambler<R> {
    /// Creates a scrambler around an injected random source.
    pub fn with_rng(rng: R) -> Self {
        Scrambler {
            rng,
            stall_limit: DEFAULT_STALL_LIMIT,
        }
    }

    /// Overrides the number of non-improving rounds tolerated before a
    /// run is reported as stalled.
    pub fn with_stall_limit(mut self, stall_limit: u32) -> Self {
        self.stall_limit = stall_limit;
        self
    }

    /// Scrambles `board` in place until its progress is at most `target`.
    ///
    /// # Errors
    ///
    /// Returns [`ScrambleError::Stalled`] when the search runs out of
    /// non-improving rounds, or immediately when the board admits no move
    /// at all while still above the target. The board keeps whatever
    /// configuration the search reached; retries should start from a
    /// fresh board.
    pub fn scramble(
        &mut self,
        board: &mut Board,
        target: f64,
    ) -> Result<ScrambleReport, ScrambleError> {
        let mut rounds = 0u32;
        let mut progress = board.progress();
        let mut best_progress = progress;
        let mut stalled_rounds = 0u32;

        while progress > target {
            let candidates = board.possible_moves();
            if candidates.is_empty() {
                // Nothing can ever move again; stop instead of spinning.
                warn!(
                    event = "scramble_halt",
                    progress,
                    target,
                    "no legal moves"
                );
                return Err(ScrambleError::Stalled {
                    best_progress,
                    target,
                    rounds,
                });
            }

            let chosen = self.pick_greedy(board, progress, &candidates);
            board.apply(chosen);
            rounds += 1;
            progress = board.progress();
            trace!(event = "scramble_round", round = rounds, chosen = %chosen, progress);

            if progress < best_progress {
                best_progress = progress;
                stalled_rounds = 0;
            } else {
                stalled_rounds += 1;
                if stalled_rounds > self.stall_limit {
                    warn!(
                        event = "scramble_stall",
                        best_progress,
                        target,
                        rounds,
                    );
                    return Err(ScrambleError::Stalled {
                        best_progress,
                        target,
                        rounds,
                    });
                }
            }
        }

        debug!(event = "scramble_end", rounds, progress);
        Ok(ScrambleReport {
            rounds,
            final_progress: progress,
        })
    }

    /// Applies `steps` uniformly random direct moves to `board`.
    ///
    /// The walk uses legal moves only, so the result stays reachable from
    /// the starting layout; feeding it to [`Scrambler::scramble`] is how
    /// generation turns a solved board into a puzzle of a wanted
    /// difficulty. Stops early only on a board with no moves at all.
    pub fn randomize(&mut self, board: &mut Board, steps: usize) {
        for _ in 0..steps {
            let candidates = board.possible_moves();
            if candidates.is_empty() {
                break;
            }
            let chosen = candidates[self.rng.random_range(0..candidates.len())];
            board.apply(chosen);
        }
        debug!(event = "randomize_end", steps, progress = board.progress());
    }

    // The candidate with the maximum progress reduction, evaluated on
    // disposable copies, tie-broken uniformly at random. A single winner
    // skips the draw.
    fn pick_greedy(
        &mut self,
        board: &Board,
        progress: f64,
        candidates: &[MoveOperation],
    ) -> MoveOperation {
        let mut best: Vec<MoveOperation> = Vec::new();
        let mut best_reduction = f64::NEG_INFINITY;
        for &candidate in candidates {
            let mut preview = board.clone();
            preview.apply(candidate);
            let reduction = progress - preview.progress();
            if reduction > best_reduction {
                best_reduction = reduction;
                best.clear();
                best.push(candidate);
            } else if reduction == best_reduction {
                best.push(candidate);
            }
        }
        if best.len() == 1 {
            best[0]
        } else {
            best[self.rng.random_range(0..best.len())]
        }
    }
}
