//! Interactive play loop.
//!
//! Reads difficulty, guesses and "play again" answers line by line from
//! any `BufRead` and writes prompts to any `Write`, so the same loop runs
//! on a terminal or against scripted input in tests.

mod controller;

pub use controller::{Session, SessionSummary};
