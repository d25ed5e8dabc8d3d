//! Domain model for vocabulary practice games.
//!
//! Everything here is deterministic: randomness and the clock are supplied by
//! the caller, so identical inputs always produce identical sessions.

#![forbid(unsafe_code)]

pub mod error;
pub mod matching;
pub mod model;
pub mod scoring;
pub mod settings;
pub mod time;

pub use error::Error;
pub use time::Clock;
