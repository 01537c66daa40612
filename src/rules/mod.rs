//! Game engine: round setup, guess evaluation, win/loss and scoring.
//!
//! The engine holds only read-only data (word bank, display options).
//! Round progress lives in a `GuessState` that the caller owns and passes
//! in by reference, so independent rounds never share mutable data.

pub mod engine;

pub use engine::{GameEngine, Outcome, RoundResult};
