//! Built-in board styles.

use crate::BoardStyle;

fn grid(rows: &[&[&str]]) -> Vec<Vec<String>> {
    rows.iter()
        .map(|row| row.iter().map(|label| (*label).to_owned()).collect())
        .collect()
}

/// The classic 3×3 eight puzzle.
pub fn classic_3x3() -> BoardStyle {
    BoardStyle::new(
        "classic-3",
        "Classic 3x3",
        0.55,
        grid(&[
            &["1", "2", "3"],
            &["4", "5", "6"],
            &["7", "8", ""],
        ]),
    )
    .expect("built-in style is valid")
}

/// The classic 4×4 fifteen puzzle.
pub fn classic_4x4() -> BoardStyle {
    BoardStyle::new(
        "classic-4",
        "Classic 4x4",
        0.6,
        grid(&[
            &["1", "2", "3", "4"],
            &["5", "6", "7", "8"],
            &["9", "10", "11", "12"],
            &["13", "14", "15", ""],
        ]),
    )
    .expect("built-in style is valid")
}

/// A symmetric 4×4 style: each row repeats one label, so a tile is home
/// anywhere within its band.
pub fn banded_4x4() -> BoardStyle {
    BoardStyle::new(
        "banded-4",
        "Bands 4x4",
        0.5,
        grid(&[
            &["a", "a", "a", "a"],
            &["b", "b", "b", "b"],
            &["c", "c", "c", "c"],
            &["d", "d", "d", ""],
        ]),
    )
    .expect("built-in style is valid")
}

/// Every built-in style.
pub fn all() -> Vec<BoardStyle> {
    vec![classic_3x3(), classic_4x4(), banded_4x4()]
}

/// Looks a built-in style up by id.
pub fn find(id: &str) -> Option<BoardStyle> {
    all().into_iter().find(|style| style.id() == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use taquin_core::TilePosition;

    #[test]
    fn every_builtin_starts_solved() {
        for style in all() {
            let board = style.solved_board();
            assert!(board.is_solved(), "style {} is not solved", style.id());
            assert_eq!(board.progress(), 0.0);
            assert!((0.0..1.0).contains(&style.threshold()));
        }
    }

    #[test]
    fn classic_4x4_matches_the_fifteen_puzzle() {
        let board = classic_4x4().solved_board();
        assert_eq!(board.tile_count(), 15);
        assert_eq!(board.tile_at(TilePosition::new(3, 2)).unwrap().label(), "15");
        assert!(board.tile_at(TilePosition::new(3, 3)).is_none());
    }

    #[test]
    fn banded_tiles_are_home_anywhere_in_their_band() {
        let board = banded_4x4().solved_board();
        let tile = board.tile_at(TilePosition::new(0, 3)).unwrap();
        assert_eq!(tile.label(), "a");
        assert_eq!(tile.targets().len(), 4);
        assert!(tile.is_home_at(TilePosition::new(0, 0)));

        // The bottom band has three labelled cells plus the empty one
        let d = board.tile_at(TilePosition::new(3, 0)).unwrap();
        assert_eq!(d.targets().len(), 3);
    }

    #[test]
    fn find_looks_up_by_id() {
        assert!(find("classic-3").is_some());
        assert!(find("classic-4").is_some());
        assert!(find("no-such-style").is_none());
    }
}
