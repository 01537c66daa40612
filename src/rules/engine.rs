//! Game engine implementation.
//!
//! `submit_guess` checks, in order:
//! - the round is still in progress
//! - the input is exactly one letter
//! - the letter has not been guessed yet
//!
//! Any failure leaves the state untouched.

use tracing::{debug, info, warn};

use crate::core::{GameConfig, HangmanError, RandomSource, Result, Tier, MAX_WRONG};
use crate::render::RoundView;
use crate::round::{GuessOutcome, GuessState, RoundStatus};
use crate::words::WordBank;

/// Final outcome of a round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Outcome {
    Won,
    Lost,
}

/// Summary produced once a round has ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoundResult {
    pub outcome: Outcome,
    /// The secret word, revealed.
    pub word: String,
    /// Only set for `Won`.
    pub score: Option<u32>,
}

impl RoundResult {
    #[must_use]
    pub fn is_win(&self) -> bool {
        self.outcome == Outcome::Won
    }
}

/// Orchestrates rounds against a fixed word bank.
#[derive(Clone, Debug, Default)]
pub struct GameEngine {
    bank: WordBank,
    config: GameConfig,
}

impl GameEngine {
    /// Create an engine over `bank` with the given display options.
    #[must_use]
    pub fn new(bank: WordBank, config: GameConfig) -> Self {
        Self { bank, config }
    }

    /// Engine over the built-in word lists with default display options.
    #[must_use]
    pub fn standard() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn bank(&self) -> &WordBank {
        &self.bank
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Start a round with a word drawn from `tier`.
    pub fn start_round<R: RandomSource + ?Sized>(&self, tier: Tier, rng: &mut R) -> GuessState {
        let word = self.bank.pick(tier, rng);
        info!(%tier, length = word.len(), "round started");
        GuessState::from_bank(word)
    }

    /// Start a round for a tier given by its player-facing token.
    pub fn start_round_named<R: RandomSource + ?Sized>(&self, token: &str, rng: &mut R) -> Result<GuessState> {
        let tier = token.parse::<Tier>().inspect_err(|_| {
            warn!(token, "unknown difficulty requested");
        })?;
        Ok(self.start_round(tier, rng))
    }

    /// Evaluate one guess and advance the round.
    pub fn submit_guess(&self, state: &mut GuessState, input: &str) -> Result<GuessOutcome> {
        if state.status().is_terminal() {
            warn!(status = ?state.status(), "guess submitted after round ended");
            return Err(HangmanError::RoundAlreadyOver);
        }

        let letter = Self::parse_letter(input)?;
        if state.has_guessed(letter) {
            return Err(HangmanError::DuplicateGuess(letter));
        }

        let outcome = state.apply(letter);
        debug!(
            letter = %outcome.letter,
            hit = outcome.hit,
            wrong = state.wrong_count(),
            status = ?outcome.status,
            "guess applied"
        );
        Ok(outcome)
    }

    /// Normalize a raw guess to a single lowercase letter.
    fn parse_letter(input: &str) -> Result<char> {
        let trimmed = input.trim();
        let mut chars = trimmed.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if c.is_alphabetic() => {
                let mut lower = c.to_lowercase();
                match (lower.next(), lower.next()) {
                    (Some(l), None) => Ok(l),
                    _ => Err(HangmanError::InvalidInput(trimmed.to_string())),
                }
            }
            _ => Err(HangmanError::InvalidInput(trimmed.to_string())),
        }
    }

    /// Score for a won round: 10 per letter plus 5 per unused wrong guess.
    ///
    /// `None` unless the round was won.
    #[must_use]
    pub fn compute_score(&self, state: &GuessState) -> Option<u32> {
        if state.status() != RoundStatus::Won {
            return None;
        }
        let length = state.secret_word().chars().count() as u32;
        let unused = u32::from(MAX_WRONG - state.wrong_count());
        Some(length * 10 + unused * 5)
    }

    /// Outcome, revealed word and score once the round has ended.
    #[must_use]
    pub fn result(&self, state: &GuessState) -> Option<RoundResult> {
        let outcome = match state.status() {
            RoundStatus::InProgress => return None,
            RoundStatus::Won => Outcome::Won,
            RoundStatus::Lost => Outcome::Lost,
        };
        Some(RoundResult {
            outcome,
            word: state.secret_word().to_string(),
            score: self.compute_score(state),
        })
    }

    /// Stage art, masked progress, guessed letters and remaining budget.
    #[must_use]
    pub fn view(&self, state: &GuessState) -> RoundView {
        RoundView::new(state, self.config.placeholder)
    }
}
