//! # hangman-engine
//!
//! A single-player word-guessing engine.
//!
//! ## Design Principles
//!
//! 1. **Owned Round State**: each round is a `GuessState` value owned by the
//!    caller and passed to the engine by reference. Rounds share nothing
//!    mutable; the `WordBank` is read-only.
//!
//! 2. **Injectable Randomness**: word selection goes through the
//!    `RandomSource` trait, so tests can script exact picks.
//!
//! 3. **Atomic Transitions**: a guess either applies fully or fails with a
//!    `HangmanError` and leaves the state untouched.
//!
//! ## Modules
//!
//! - `core`: errors, RNG, tiers and fixed constants
//! - `words`: candidate words per tier
//! - `round`: per-round progress and status
//! - `render`: gallows stages and masked progress
//! - `rules`: the `GameEngine` state machine and scoring
//! - `session`: line-based play loop used by the `hangman` binary
//!
//! ```
//! use hangman_engine::{GameEngine, RoundStatus, ScriptedSource, Tier};
//!
//! let engine = GameEngine::standard();
//! let mut rng = ScriptedSource::new(vec![0]);
//! let mut state = engine.start_round(Tier::Easy, &mut rng);
//! assert_eq!(state.secret_word(), "cat");
//!
//! for letter in ["c", "a", "t"] {
//!     engine.submit_guess(&mut state, letter).unwrap();
//! }
//! assert_eq!(state.status(), RoundStatus::Won);
//! assert_eq!(engine.compute_score(&state), Some(60));
//! ```

pub mod core;
pub mod words;
pub mod round;
pub mod render;
pub mod rules;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    GameConfig, GameRng, HangmanError, RandomSource, Result, ScriptedSource, Tier,
    DEFAULT_PLACEHOLDER, MAX_WRONG, STAGE_COUNT,
};

pub use crate::words::WordBank;

pub use crate::round::{GuessOutcome, GuessState, RoundStatus};

pub use crate::render::{render_progress, render_progress_with, render_stage, RoundView, STAGES};

pub use crate::rules::{GameEngine, Outcome, RoundResult};

pub use crate::session::{Session, SessionSummary};
