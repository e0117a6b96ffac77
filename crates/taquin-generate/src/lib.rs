//! Taquin Generate - Pre-scrambled boards, ready before they are needed
//!
//! Scrambling is a randomized search with no fixed runtime, so it never
//! belongs on the critical path of starting a game. A [`QueuedGenerator`]
//! keeps a bounded queue of finished boards topped up from a background
//! worker; a [`GeneratorPool`] runs one queue per style so styles populate
//! independently.

pub mod error;
pub mod generator;
pub mod pool;

#[cfg(test)]
mod generator_tests;

pub use error::GenerateError;
pub use generator::QueuedGenerator;
pub use pool::GeneratorPool;
