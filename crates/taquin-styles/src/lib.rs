//! Board styles for the taquin puzzle engine.
//!
//! A style names a solved layout and the difficulty threshold boards of
//! that style are scrambled to. Styles load from TOML or YAML files, or
//! come from the built-in [`catalogue`].
//!
//! Duplicate labels are how symmetric styles work: every cell carrying a
//! label is an acceptable home for every tile with that label.
//!
//! # Examples
//!
//! Parse a style from a TOML string:
//!
//! ```
//! use taquin_styles::BoardStyle;
//!
//! let style = BoardStyle::from_toml_str(r#"
//!     id = "classic-3"
//!     name = "Classic 3x3"
//!     threshold = 0.55
//!     layout = [
//!         ["1", "2", "3"],
//!         ["4", "5", "6"],
//!         ["7", "8", ""],
//!     ]
//! "#).unwrap();
//!
//! assert_eq!(style.id(), "classic-3");
//! assert!(style.solved_board().is_solved());
//! ```

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use taquin_core::{Board, Tile, TilePosition};

pub mod catalogue;

/// Style definition error
#[derive(Debug, Error)]
pub enum StyleError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid style: {0}")]
    Invalid(String),
}

/// A named solved layout plus the difficulty threshold its boards are
/// scrambled to.
///
/// The layout is a grid of labels where the empty string marks the empty
/// cell. A style is validated on every construction path; a value of this
/// type always describes a buildable board.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BoardStyle {
    id: String,
    name: String,
    threshold: f64,
    layout: Vec<Vec<String>>,
}

impl BoardStyle {
    /// Creates a style after validating it.
    ///
    /// # Errors
    ///
    /// Returns [`StyleError::Invalid`] when the grid is empty or ragged,
    /// the threshold falls outside `[0, 1)`, the id is blank, or no cell
    /// is empty (a full grid admits no move, so boards of such a style
    /// could never be generated).
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        threshold: f64,
        layout: Vec<Vec<String>>,
    ) -> Result<Self, StyleError> {
        let style = BoardStyle {
            id: id.into(),
            name: name.into(),
            threshold,
            layout,
        };
        style.validate()?;
        Ok(style)
    }

    /// Loads a style from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is unreadable, not valid TOML, or
    /// describes an invalid style.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, StyleError> {
        Self::from_toml_file(path)
    }

    /// Loads a style from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, StyleError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses a style from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, StyleError> {
        let style: BoardStyle = toml::from_str(s)?;
        style.validate()?;
        Ok(style)
    }

    /// Loads a style from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, StyleError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses a style from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, StyleError> {
        let style: BoardStyle = serde_yaml::from_str(s)?;
        style.validate()?;
        Ok(style)
    }

    /// The style identifier, used as the generator and records key.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The human-readable style name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The progress threshold, in `[0, 1)`, that generated boards of this
    /// style are scrambled to.
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Number of rows in the layout.
    pub fn rows(&self) -> i32 {
        self.layout.len() as i32
    }

    /// Number of columns in the layout.
    pub fn columns(&self) -> i32 {
        self.layout.first().map_or(0, |row| row.len() as i32)
    }

    /// Builds the fresh, solved board this style describes.
    ///
    /// Every cell carrying a label becomes a tile whose acceptable
    /// targets are all cells with that label, in row-major order.
    pub fn solved_board(&self) -> Board {
        let mut targets: HashMap<&str, Vec<TilePosition>> = HashMap::new();
        for (row, cells) in self.layout.iter().enumerate() {
            for (column, label) in cells.iter().enumerate() {
                if !label.is_empty() {
                    targets
                        .entry(label.as_str())
                        .or_default()
                        .push(TilePosition::new(row as i32, column as i32));
                }
            }
        }

        let mut tiles = Vec::new();
        for (row, cells) in self.layout.iter().enumerate() {
            for (column, label) in cells.iter().enumerate() {
                if label.is_empty() {
                    continue;
                }
                let position = TilePosition::new(row as i32, column as i32);
                let tile = Tile::new(label.clone(), targets[label.as_str()].clone())
                    .expect("style was validated at construction");
                tiles.push((position, tile));
            }
        }
        Board::from_tiles(self.rows(), self.columns(), tiles)
            .expect("style was validated at construction")
    }

    fn validate(&self) -> Result<(), StyleError> {
        if self.id.trim().is_empty() {
            return Err(StyleError::Invalid("style id is blank".to_owned()));
        }
        if !(0.0..1.0).contains(&self.threshold) {
            return Err(StyleError::Invalid(format!(
                "threshold {} is outside [0, 1)",
                self.threshold
            )));
        }
        let columns = match self.layout.first() {
            Some(row) if !row.is_empty() => row.len(),
            _ => {
                return Err(StyleError::Invalid(
                    "layout must have at least one row and one column".to_owned(),
                ))
            }
        };
        for (row, cells) in self.layout.iter().enumerate() {
            if cells.len() != columns {
                return Err(StyleError::Invalid(format!(
                    "row {} has {} cells, expected {}",
                    row,
                    cells.len(),
                    columns
                )));
            }
        }
        let has_empty_cell = self
            .layout
            .iter()
            .any(|row| row.iter().any(|label| label.is_empty()));
        if !has_empty_cell {
            return Err(StyleError::Invalid(
                "layout has no empty cell, so no move could ever be made".to_owned(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(rows: &[&[&str]]) -> Vec<Vec<String>> {
        rows.iter()
            .map(|row| row.iter().map(|label| (*label).to_owned()).collect())
            .collect()
    }

    #[test]
    fn valid_style_builds_a_solved_board() {
        let style = BoardStyle::new(
            "mini",
            "Mini",
            0.4,
            grid(&[&["1", "2"], &["3", ""]]),
        )
        .unwrap();

        let board = style.solved_board();
        assert!(board.is_solved());
        assert_eq!(board.progress(), 0.0);
        assert_eq!(board.tile_count(), 3);
        assert_eq!(style.rows(), 2);
        assert_eq!(style.columns(), 2);
    }

    #[test]
    fn duplicate_labels_share_targets() {
        let style = BoardStyle::new(
            "bands",
            "Bands",
            0.4,
            grid(&[&["a", "a"], &["b", ""]]),
        )
        .unwrap();

        let board = style.solved_board();
        let tile = board.tile_at(TilePosition::new(0, 0)).unwrap();
        assert_eq!(
            tile.targets(),
            &[TilePosition::new(0, 0), TilePosition::new(0, 1)]
        );
        // Either `a` cell is home for either `a` tile
        assert!(tile.is_home_at(TilePosition::new(0, 1)));
    }

    #[test]
    fn rejects_blank_id() {
        let result = BoardStyle::new("  ", "Blank", 0.4, grid(&[&["1", ""]]));
        assert!(matches!(result, Err(StyleError::Invalid(msg)) if msg.contains("id")));
    }

    #[test]
    fn rejects_threshold_outside_unit_interval() {
        let layout = grid(&[&["1", ""]]);
        assert!(matches!(
            BoardStyle::new("s", "S", 1.0, layout.clone()),
            Err(StyleError::Invalid(msg)) if msg.contains("threshold")
        ));
        assert!(matches!(
            BoardStyle::new("s", "S", -0.1, layout),
            Err(StyleError::Invalid(msg)) if msg.contains("threshold")
        ));
    }

    #[test]
    fn rejects_empty_grid() {
        assert!(matches!(
            BoardStyle::new("s", "S", 0.4, vec![]),
            Err(StyleError::Invalid(msg)) if msg.contains("at least one row")
        ));
        assert!(matches!(
            BoardStyle::new("s", "S", 0.4, vec![vec![]]),
            Err(StyleError::Invalid(msg)) if msg.contains("at least one row")
        ));
    }

    #[test]
    fn rejects_ragged_rows() {
        let result = BoardStyle::new(
            "s",
            "S",
            0.4,
            grid(&[&["1", "2", "3"], &["4", ""]]),
        );
        assert!(matches!(result, Err(StyleError::Invalid(msg)) if msg.contains("row 1")));
    }

    #[test]
    fn rejects_full_grid() {
        let result = BoardStyle::new("s", "S", 0.4, grid(&[&["1", "2"]]));
        assert!(matches!(result, Err(StyleError::Invalid(msg)) if msg.contains("empty cell")));
    }

    #[test]
    fn parses_toml() {
        let style = BoardStyle::from_toml_str(
            r#"
            id = "classic-3"
            name = "Classic 3x3"
            threshold = 0.55
            layout = [
                ["1", "2", "3"],
                ["4", "5", "6"],
                ["7", "8", ""],
            ]
            "#,
        )
        .unwrap();

        assert_eq!(style.id(), "classic-3");
        assert_eq!(style.name(), "Classic 3x3");
        assert_eq!(style.threshold(), 0.55);
        assert_eq!(taquin_test::labels(&style.solved_board()).len(), 9);
    }

    #[test]
    fn parses_yaml() {
        let style = BoardStyle::from_yaml_str(
            r#"
            id: mini
            name: Mini
            threshold: 0.4
            layout:
              - ["1", "2"]
              - ["3", ""]
            "#,
        )
        .unwrap();

        assert_eq!(style.id(), "mini");
        assert!(style.solved_board().is_solved());
    }

    #[test]
    fn loads_a_toml_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mini.toml");
        std::fs::write(
            &path,
            r#"
            id = "mini"
            name = "Mini"
            threshold = 0.4
            layout = [
                ["1", "2"],
                ["3", ""],
            ]
            "#,
        )
        .unwrap();

        let style = BoardStyle::load(&path).unwrap();
        assert_eq!(style.id(), "mini");
        assert!(style.solved_board().is_solved());

        // `load` reads TOML; the explicit form agrees with it
        let direct = BoardStyle::from_toml_file(&path).unwrap();
        assert_eq!(direct.id(), style.id());
    }

    #[test]
    fn loads_a_yaml_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mini.yaml");
        std::fs::write(
            &path,
            r#"
            id: mini
            name: Mini
            threshold: 0.4
            layout:
              - ["1", "2"]
              - ["3", ""]
            "#,
        )
        .unwrap();

        let style = BoardStyle::from_yaml_file(&path).unwrap();
        assert_eq!(style.id(), "mini");
        assert!(style.solved_board().is_solved());
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no-such-style.toml");

        assert!(matches!(BoardStyle::load(&path), Err(StyleError::Io(_))));
        assert!(matches!(
            BoardStyle::from_yaml_file(&path),
            Err(StyleError::Io(_))
        ));
    }

    #[test]
    fn toml_with_invalid_layout_is_rejected() {
        let result = BoardStyle::from_toml_str(
            r#"
            id = "full"
            name = "Full"
            threshold = 0.4
            layout = [["1", "2"]]
            "#,
        );
        assert!(matches!(result, Err(StyleError::Invalid(_))));
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let result = BoardStyle::from_toml_str("id = ");
        assert!(matches!(result, Err(StyleError::Toml(_))));
    }
}
