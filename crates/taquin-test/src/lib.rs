//! Shared test fixtures for the taquin crates.
//!
//! Builders for the boards the test suites keep reaching for. Wired as a
//! dev-dependency everywhere; never part of the shipped surface.

use taquin_core::{Board, Tile, TilePosition};

/// A solved 3×3 board: tiles "1"–"8", bottom-right cell empty.
pub fn solved_3x3() -> Board {
    numbered(3, 3)
}

/// A solved 4×4 fifteen-puzzle board: tiles "1"–"15", bottom-right empty.
pub fn solved_4x4() -> Board {
    numbered(4, 4)
}

/// A solved numbered board of arbitrary dimensions with the last cell
/// empty. Every tile's single target is the cell it starts on.
pub fn numbered(rows: i32, columns: i32) -> Board {
    let mut tiles = Vec::new();
    let mut label = 1;
    for row in 0..rows {
        for column in 0..columns {
            if row == rows - 1 && column == columns - 1 {
                continue; // the empty cell
            }
            let position = TilePosition::new(row, column);
            let tile = Tile::new(label.to_string(), vec![position]).unwrap();
            tiles.push((position, tile));
            label += 1;
        }
    }
    Board::from_tiles(rows, columns, tiles).unwrap()
}

/// A single-row board built from labels, where `""` marks an empty cell.
/// Each tile's target is the cell it starts on.
pub fn row_board(cells: &[&str]) -> Board {
    let mut tiles = Vec::new();
    for (column, &label) in cells.iter().enumerate() {
        if label.is_empty() {
            continue;
        }
        let position = TilePosition::new(0, column as i32);
        tiles.push((position, Tile::new(label, vec![position]).unwrap()));
    }
    Board::from_tiles(1, cells.len() as i32, tiles).unwrap()
}

/// Row-major snapshot of the board's labels, `None` for empty cells.
pub fn labels(board: &Board) -> Vec<Option<String>> {
    board
        .all_positions()
        .map(|position| board.tile_at(position).map(|tile| tile.label().to_owned()))
        .collect()
}

/// The board's labels as a sorted multiset, for conservation checks.
pub fn sorted_labels(board: &Board) -> Vec<String> {
    let mut present: Vec<String> = labels(board).into_iter().flatten().collect();
    present.sort();
    present
}
