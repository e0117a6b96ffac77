//! Identity-bearing puzzle pieces.

use crate::error::{BoardError, Result};
use crate::position::TilePosition;

/// A puzzle piece with a display label and its acceptable target positions.
///
/// A tile counts as home at any of its targets; most styles give each tile
/// a single target, symmetric styles give interchangeable tiles the same
/// target set. The target list is ordered and never empty.
///
/// # Examples
///
/// ```
/// use taquin_core::{Tile, TilePosition};
///
/// let tile = Tile::new("7", vec![TilePosition::new(2, 0)]).unwrap();
///
/// assert!(tile.is_home_at(TilePosition::new(2, 0)));
/// assert_eq!(tile.distance_from(TilePosition::new(0, 0)), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Tile {
    label: String,
    targets: Vec<TilePosition>,
}

impl Tile {
    /// Creates a tile with the given label and acceptable targets.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::EmptyTargets`] if `targets` is empty: a tile
    /// with nowhere to be home could never be part of a solvable board.
    pub fn new(label: impl Into<String>, targets: Vec<TilePosition>) -> Result<Self> {
        let label = label.into();
        if targets.is_empty() {
            return Err(BoardError::EmptyTargets(label));
        }
        Ok(Tile { label, targets })
    }

    /// The tile's display label.
    #[inline]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The acceptable target positions, in the order they were given.
    #[inline]
    pub fn targets(&self) -> &[TilePosition] {
        &self.targets
    }

    /// Minimum Manhattan distance from `position` to any acceptable target.
    pub fn distance_from(&self, position: TilePosition) -> u32 {
        self.targets
            .iter()
            .map(|target| position.manhattan_distance(*target))
            .min()
            .unwrap_or(0)
    }

    /// Whether `position` is one of the acceptable targets.
    pub fn is_home_at(&self, position: TilePosition) -> bool {
        self.targets.contains(&position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_target_list() {
        let result = Tile::new("1", vec![]);
        assert!(matches!(result, Err(BoardError::EmptyTargets(label)) if label == "1"));
    }

    #[test]
    fn distance_uses_nearest_target() {
        let tile = Tile::new(
            "a",
            vec![TilePosition::new(0, 0), TilePosition::new(0, 3)],
        )
        .unwrap();

        // (0, 2) is two steps from the first target but one from the second
        assert_eq!(tile.distance_from(TilePosition::new(0, 2)), 1);
        assert_eq!(tile.distance_from(TilePosition::new(0, 0)), 0);
    }

    #[test]
    fn home_at_any_target() {
        let tile = Tile::new(
            "a",
            vec![TilePosition::new(0, 0), TilePosition::new(1, 1)],
        )
        .unwrap();

        assert!(tile.is_home_at(TilePosition::new(0, 0)));
        assert!(tile.is_home_at(TilePosition::new(1, 1)));
        assert!(!tile.is_home_at(TilePosition::new(0, 1)));
    }
}
