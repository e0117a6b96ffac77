//! Puzzle board state, move resolution and the progress metric.

use std::fmt;

use smallvec::SmallVec;

use crate::error::{BoardError, Result};
use crate::moves::{MoveChain, MoveOperation, MoveOutcome};
use crate::position::{MoveDirection, TilePosition};
use crate::tile::Tile;

/// A `rows × columns` grid of cells, each holding at most one tile.
///
/// Moves relocate tiles and never create or destroy them, so the tile
/// multiset is fixed for the board's lifetime. The board is a plain value:
/// cloning yields a fully independent copy, which is what makes speculative
/// what-if evaluation cheap.
///
/// # Examples
///
/// ```
/// use taquin_core::{Board, MoveDirection, MoveOperation, Tile, TilePosition};
///
/// // A one-row board: [a, b, _]
/// let board = Board::from_tiles(
///     1,
///     3,
///     vec![
///         (TilePosition::new(0, 0), Tile::new("a", vec![TilePosition::new(0, 0)]).unwrap()),
///         (TilePosition::new(0, 1), Tile::new("b", vec![TilePosition::new(0, 1)]).unwrap()),
///     ],
/// )
/// .unwrap();
///
/// assert!(board.is_solved());
/// assert_eq!(board.progress(), 0.0);
///
/// // Sliding `a` right is possible once `b` is pushed into the empty cell.
/// let op = MoveOperation::new(TilePosition::new(0, 0), MoveDirection::Right);
/// let outcome = board.resolve(op);
/// assert!(outcome.is_possible());
/// assert!(!outcome.is_direct());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    rows: i32,
    columns: i32,
    cells: Vec<Option<Tile>>,
    /// Sum over tiles of the worst minimum target distance any cell gives
    /// them; fixed at construction since moves conserve the tile multiset.
    max_total_distance: u64,
}

impl Board {
    /// Builds a board of the given dimensions with tiles at their starting
    /// positions.
    ///
    /// # Errors
    ///
    /// Returns a descriptive error, and never a partially-built board, if
    /// the dimensions are degenerate, a tile or one of its targets falls
    /// outside the grid, or two tiles land on the same cell.
    pub fn from_tiles(
        rows: i32,
        columns: i32,
        tiles: Vec<(TilePosition, Tile)>,
    ) -> Result<Self> {
        if rows < 1 || columns < 1 {
            return Err(BoardError::EmptyGrid);
        }
        let mut board = Board {
            rows,
            columns,
            cells: vec![None; (rows * columns) as usize],
            max_total_distance: 0,
        };
        for (position, tile) in tiles {
            if !board.contains(position) {
                return Err(BoardError::OutOfBounds(position));
            }
            for &target in tile.targets() {
                if !board.contains(target) {
                    return Err(BoardError::TargetOutOfBounds {
                        label: tile.label().to_owned(),
                        position: target,
                    });
                }
            }
            let index = board.index(position);
            if board.cells[index].is_some() {
                return Err(BoardError::CellOccupied(position));
            }
            board.max_total_distance += u64::from(board.worst_distance(&tile));
            board.cells[index] = Some(tile);
        }
        Ok(board)
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> i32 {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn columns(&self) -> i32 {
        self.columns
    }

    /// Number of occupied cells.
    pub fn tile_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Whether `position` lies on the grid.
    #[inline]
    pub fn contains(&self, position: TilePosition) -> bool {
        position.row >= 0
            && position.row < self.rows
            && position.column >= 0
            && position.column < self.columns
    }

    /// The tile at `position`, or `None` for an empty cell.
    ///
    /// # Panics
    ///
    /// Panics if `position` is outside the grid. Out-of-bounds reads are a
    /// caller bug; validate with [`Board::contains`] first.
    pub fn tile_at(&self, position: TilePosition) -> Option<&Tile> {
        assert!(
            self.contains(position),
            "position {position} is outside the {}x{} board",
            self.rows,
            self.columns
        );
        self.cells[self.index(position)].as_ref()
    }

    /// Every position of the grid in row-major order.
    ///
    /// The iterator is a pure function of the dimensions and can be
    /// restarted freely.
    pub fn all_positions(&self) -> impl Iterator<Item = TilePosition> {
        let (rows, columns) = (self.rows, self.columns);
        (0..rows)
            .flat_map(move |row| (0..columns).map(move |column| TilePosition::new(row, column)))
    }

    /// Resolves the legality of `operation` without mutating the board.
    ///
    /// `Impossible` means the start cell holds no tile, the target leaves
    /// the grid, or every cell from the target to the board edge is
    /// occupied. Otherwise the outcome carries the prerequisite moves that
    /// vacate the target cell, ordered farthest tile first so that each
    /// one lands on a cell freed by the one before it.
    pub fn resolve(&self, operation: MoveOperation) -> MoveOutcome {
        if !self.contains(operation.start) || self.cells[self.index(operation.start)].is_none() {
            return MoveOutcome::Impossible;
        }
        if !self.contains(operation.target()) {
            return MoveOutcome::Impossible;
        }

        // Walk the occupied cells from the target outward until an empty
        // cell opens the line, or the edge proves it never will.
        let mut blocking: MoveChain = SmallVec::new();
        let mut push = MoveOperation::new(operation.target(), operation.direction);
        loop {
            if !self.contains(push.start) {
                return MoveOutcome::Impossible;
            }
            if self.cells[self.index(push.start)].is_none() {
                break;
            }
            blocking.push(push);
            push = push.next();
        }
        blocking.reverse();
        MoveOutcome::Possible(blocking)
    }

    /// Applies a direct move, relocating the tile at `operation.start` to
    /// the target cell and leaving the start cell empty.
    ///
    /// The move either fully commits or panics before touching any state.
    ///
    /// # Panics
    ///
    /// Panics if the start cell holds no tile, the target leaves the grid,
    /// or the target cell is occupied. Applying an unresolved move, or a
    /// chained move whose prerequisites were not applied first, would break
    /// the one-tile-per-cell invariant and is a caller bug.
    pub fn apply(&mut self, operation: MoveOperation) {
        assert!(
            self.contains(operation.start),
            "move {operation} starts outside the board"
        );
        let target = operation.target();
        assert!(self.contains(target), "move {operation} leaves the board");
        let from = self.index(operation.start);
        let to = self.index(target);
        assert!(self.cells[from].is_some(), "no tile to move at {}", operation.start);
        assert!(
            self.cells[to].is_none(),
            "cell {target} is occupied; prerequisite moves were not applied"
        );
        self.cells[to] = self.cells[from].take();
    }

    /// Resolves `operation`, applies its prerequisites farthest-first, then
    /// applies the operation itself.
    ///
    /// Returns every move applied, in order, so callers can animate or log
    /// the full cascade.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::ImpossibleMove`] without mutating the board if
    /// the resolution fails.
    pub fn apply_chain(&mut self, operation: MoveOperation) -> Result<Vec<MoveOperation>> {
        let chain = match self.resolve(operation) {
            MoveOutcome::Impossible => return Err(BoardError::ImpossibleMove(operation)),
            MoveOutcome::Possible(chain) => chain,
        };
        let mut applied = Vec::with_capacity(chain.len() + 1);
        for prerequisite in chain {
            self.apply(prerequisite);
            applied.push(prerequisite);
        }
        self.apply(operation);
        applied.push(operation);
        Ok(applied)
    }

    /// Every direct move that is legal right now: the candidate set of the
    /// scrambling search.
    ///
    /// Enumerated row-major, then in [`MoveDirection::ALL`] order, so the
    /// result is deterministic for a given board.
    pub fn possible_moves(&self) -> Vec<MoveOperation> {
        let mut moves = Vec::new();
        for position in self.all_positions() {
            if self.cells[self.index(position)].is_none() {
                continue;
            }
            for direction in MoveDirection::ALL {
                let operation = MoveOperation::new(position, direction);
                if self.resolve(operation).is_direct() {
                    moves.push(operation);
                }
            }
        }
        moves
    }

    /// How scrambled the board is, in `[0, 1]`.
    ///
    /// The sum of each tile's minimum Manhattan distance to an acceptable
    /// target, normalized by the largest value that sum could take for this
    /// tile set and grid. `0.0` means solved. Recomputed from scratch, so
    /// it is exact after every [`Board::apply`].
    pub fn progress(&self) -> f64 {
        if self.max_total_distance == 0 {
            return 0.0;
        }
        let mut distance = 0u64;
        for position in self.all_positions() {
            if let Some(tile) = &self.cells[self.index(position)] {
                distance += u64::from(tile.distance_from(position));
            }
        }
        distance as f64 / self.max_total_distance as f64
    }

    /// Whether every tile sits on one of its acceptable targets.
    ///
    /// Agrees with `progress() == 0.0` by construction; checking membership
    /// directly keeps the intent readable.
    pub fn is_solved(&self) -> bool {
        self.all_positions().all(|position| {
            match &self.cells[self.index(position)] {
                Some(tile) => tile.is_home_at(position),
                None => true,
            }
        })
    }

    #[inline]
    fn index(&self, position: TilePosition) -> usize {
        (position.row * self.columns + position.column) as usize
    }

    // Largest minimum target distance any cell of this grid gives `tile`.
    fn worst_distance(&self, tile: &Tile) -> u32 {
        self.all_positions()
            .map(|position| tile.distance_from(position))
            .max()
            .unwrap_or(0)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self
            .cells
            .iter()
            .flatten()
            .map(|tile| tile.label().chars().count())
            .max()
            .unwrap_or(1);
        for row in 0..self.rows {
            for column in 0..self.columns {
                if column > 0 {
                    write!(f, " ")?;
                }
                match &self.cells[(row * self.columns + column) as usize] {
                    Some(tile) => write!(f, "{:>width$}", tile.label())?,
                    None => write!(f, "{:>width$}", ".")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
