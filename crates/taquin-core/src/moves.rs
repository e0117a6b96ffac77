//! Move operations and legality outcomes.

use std::fmt;

use smallvec::SmallVec;

use crate::position::{MoveDirection, TilePosition};

/// Prerequisite moves of a resolved operation, ordered farthest tile first.
///
/// Chains are bounded by the board's longest dimension and almost always
/// short, so they live inline.
pub type MoveChain = SmallVec<[MoveOperation; 6]>;

/// A request to slide the tile at `start` one step in `direction`.
///
/// Operations are plain values compared field-for-field, so they can sit
/// in hash sets to track in-flight moves.
///
/// # Examples
///
/// ```
/// use taquin_core::{MoveDirection, MoveOperation, TilePosition};
///
/// let op = MoveOperation::new(TilePosition::new(1, 1), MoveDirection::Right);
///
/// assert_eq!(op.target(), TilePosition::new(1, 2));
/// assert_eq!(op.reversed().target(), op.start);
/// assert_eq!(op.next().start, op.target());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveOperation {
    /// The cell the moving tile currently occupies.
    pub start: TilePosition,
    /// The direction the tile slides in.
    pub direction: MoveDirection,
}

impl MoveOperation {
    /// Creates an operation sliding the tile at `start` towards `direction`.
    #[inline]
    pub const fn new(start: TilePosition, direction: MoveDirection) -> Self {
        MoveOperation { start, direction }
    }

    /// The cell the tile lands on.
    #[inline]
    pub const fn target(self) -> TilePosition {
        self.start.moved(self.direction)
    }

    /// The operation that undoes this one once it has been applied.
    #[inline]
    pub const fn reversed(self) -> Self {
        MoveOperation::new(self.target(), self.direction.opposite())
    }

    /// The same slide, one step further along: starts where this one lands.
    ///
    /// Chains of pushed tiles are expressed by repeating `next` until an
    /// empty cell or the board edge is reached.
    #[inline]
    pub const fn next(self) -> Self {
        MoveOperation::new(self.target(), self.direction)
    }
}

impl fmt::Display for MoveOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} from {}", self.direction, self.start)
    }
}

/// The tri-state legality of a move request.
///
/// A move is never just legal or illegal: it may be legal only after the
/// tiles between its target and the nearest empty cell are pushed out of
/// the way first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    /// No tile at the start, or no cell in the direction of travel can
    /// ever be vacated.
    Impossible,
    /// Legal once the listed prerequisite moves are applied in order.
    /// An empty chain means the target cell is already empty.
    Possible(MoveChain),
}

impl MoveOutcome {
    /// Whether the move can be applied at all, after prerequisites if any.
    #[inline]
    pub fn is_possible(&self) -> bool {
        matches!(self, MoveOutcome::Possible(_))
    }

    /// Whether the move is immediately legal with nothing to push.
    #[inline]
    pub fn is_direct(&self) -> bool {
        matches!(self, MoveOutcome::Possible(chain) if chain.is_empty())
    }

    /// The prerequisite moves, if the move is possible.
    pub fn prerequisites(&self) -> Option<&[MoveOperation]> {
        match self {
            MoveOutcome::Impossible => None,
            MoveOutcome::Possible(chain) => Some(chain),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_is_one_step_away() {
        let op = MoveOperation::new(TilePosition::new(2, 2), MoveDirection::Up);
        assert_eq!(op.target(), TilePosition::new(1, 2));
        assert!(op.start.is_adjacent_to(op.target()));
    }

    #[test]
    fn reversed_swaps_endpoints() {
        for direction in MoveDirection::ALL {
            let op = MoveOperation::new(TilePosition::new(3, 3), direction);
            let back = op.reversed();
            assert_eq!(back.start, op.target());
            assert_eq!(back.target(), op.start);
            assert_eq!(back.reversed(), op);
        }
    }

    #[test]
    fn next_walks_the_same_line() {
        let op = MoveOperation::new(TilePosition::new(0, 0), MoveDirection::Right);
        let chain: Vec<_> = std::iter::successors(Some(op), |op| Some(op.next()))
            .take(3)
            .map(|op| op.start)
            .collect();
        assert_eq!(
            chain,
            vec![
                TilePosition::new(0, 0),
                TilePosition::new(0, 1),
                TilePosition::new(0, 2),
            ]
        );
    }

    #[test]
    fn equality_is_field_for_field() {
        let a = MoveOperation::new(TilePosition::new(1, 1), MoveDirection::Left);
        let b = MoveOperation::new(TilePosition::new(1, 1), MoveDirection::Left);
        let c = MoveOperation::new(TilePosition::new(1, 1), MoveDirection::Right);
        assert_eq!(a, b);
        assert_ne!(a, c);

        let mut seen = std::collections::HashSet::new();
        seen.insert(a);
        assert!(seen.contains(&b));
        assert!(!seen.contains(&c));
    }

    #[test]
    fn direct_outcome_has_empty_chain() {
        let direct = MoveOutcome::Possible(MoveChain::new());
        assert!(direct.is_possible());
        assert!(direct.is_direct());
        assert_eq!(direct.prerequisites(), Some(&[][..]));

        let op = MoveOperation::new(TilePosition::new(0, 1), MoveDirection::Right);
        let chained = MoveOutcome::Possible(MoveChain::from_slice(&[op]));
        assert!(chained.is_possible());
        assert!(!chained.is_direct());

        assert!(!MoveOutcome::Impossible.is_possible());
        assert_eq!(MoveOutcome::Impossible.prerequisites(), None);
    }
}
