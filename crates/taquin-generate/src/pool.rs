//! One generation queue per style.

use std::collections::HashMap;

use tracing::debug;

use taquin_core::Board;
use taquin_styles::BoardStyle;

use crate::error::GenerateError;
use crate::generator::QueuedGenerator;

/// Runs one [`QueuedGenerator`] per registered style, keyed by style id.
///
/// Each style gets its own worker, so a slow style never blocks another
/// style's supply.
///
/// # Examples
///
/// ```
/// use taquin_generate::GeneratorPool;
/// use taquin_styles::catalogue;
///
/// let mut pool = GeneratorPool::new(1);
/// pool.register(&catalogue::classic_3x3());
///
/// let board = pool.next("classic-3").unwrap();
/// assert_eq!(board.tile_count(), 8);
/// assert!(pool.next("no-such-style").is_err());
/// ```
pub struct GeneratorPool {
    length: usize,
    generators: HashMap<String, QueuedGenerator>,
}

impl GeneratorPool {
    /// Creates a pool whose generators each keep `length` boards ready.
    pub fn new(length: usize) -> Self {
        GeneratorPool {
            length,
            generators: HashMap::new(),
        }
    }

    /// Starts a generation queue for `style`, replacing any previous
    /// queue registered under the same id.
    pub fn register(&mut self, style: &BoardStyle) {
        debug!(event = "style_registered", style = style.id());
        self.generators.insert(
            style.id().to_owned(),
            QueuedGenerator::for_style(style, self.length),
        );
    }

    /// Whether a generator is registered for `style_id`.
    pub fn contains(&self, style_id: &str) -> bool {
        self.generators.contains_key(style_id)
    }

    /// Takes a ready board for `style_id`, blocking until one is
    /// available.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::UnknownStyle`] if no generator was
    /// registered for `style_id`.
    pub fn next(&self, style_id: &str) -> Result<Board, GenerateError> {
        Ok(self.generator(style_id)?.next())
    }

    /// Blocks until a board for `style_id` is available, without taking
    /// one.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::UnknownStyle`] if no generator was
    /// registered for `style_id`.
    pub fn wait_until_ready(&self, style_id: &str) -> Result<(), GenerateError> {
        self.generator(style_id)?.wait_until_ready();
        Ok(())
    }

    /// The registered style ids, in no particular order.
    pub fn style_ids(&self) -> impl Iterator<Item = &str> {
        self.generators.keys().map(String::as_str)
    }

    fn generator(&self, style_id: &str) -> Result<&QueuedGenerator, GenerateError> {
        self.generators
            .get(style_id)
            .ok_or_else(|| GenerateError::UnknownStyle(style_id.to_owned()))
    }
}
