//! Per-round progress.
//!
//! A `GuessState` is created when a round starts and is owned by whoever
//! drives that round. Only `GameEngine` mutates it; everything else gets
//! read access.

mod state;

pub use state::{GuessOutcome, GuessState, RoundStatus};
