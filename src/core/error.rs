//! Error taxonomy for the engine.
//!
//! Every failed operation leaves state exactly as it was, so callers can
//! re-prompt and retry with corrected input.

use thiserror::Error;

use super::config::Tier;

/// Errors produced by the word bank and the game engine.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum HangmanError {
    /// Requested difficulty is not one of easy, medium or hard.
    #[error("unknown difficulty tier '{0}'")]
    UnknownTier(String),

    /// Guess is not exactly one alphabetic character.
    #[error("invalid guess '{0}': enter a single letter")]
    InvalidInput(String),

    /// Letter was already guessed this round.
    #[error("letter '{0}' was already guessed")]
    DuplicateGuess(char),

    /// Guess submitted after the round was won or lost.
    #[error("round is already over")]
    RoundAlreadyOver,

    /// Secret word is empty or not made of letters only.
    #[error("'{0}' cannot be played: words must be letters only")]
    InvalidWord(String),

    /// Custom word list violates the bank invariants.
    #[error("invalid word list for tier {tier}: {reason}")]
    InvalidWordBank { tier: Tier, reason: String },
}

impl HangmanError {
    /// Whether the caller should simply re-prompt.
    ///
    /// `RoundAlreadyOver`, `InvalidWord` and `InvalidWordBank` mean the
    /// integration itself is wrong, not the player's input.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            HangmanError::UnknownTier(_) | HangmanError::InvalidInput(_) | HangmanError::DuplicateGuess(_)
        )
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, HangmanError>;
