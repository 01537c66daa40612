//! Core engine types: errors, RNG, configuration.
//!
//! These are shared by every other module and carry no round state.

pub mod config;
pub mod error;
pub mod rng;

pub use config::{GameConfig, Tier, DEFAULT_PLACEHOLDER, MAX_WRONG, STAGE_COUNT};
pub use error::{HangmanError, Result};
pub use rng::{GameRng, RandomSource, ScriptedSource};
