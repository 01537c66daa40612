//! Round state and status.

use std::collections::BTreeSet;

use crate::core::{HangmanError, Result, MAX_WRONG};
use crate::words::is_playable_word;

/// Where a round stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RoundStatus {
    InProgress,
    Won,
    Lost,
}

impl RoundStatus {
    /// `Won` and `Lost` accept no further guesses.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        !matches!(self, RoundStatus::InProgress)
    }
}

/// Result of one accepted guess.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GuessOutcome {
    /// The normalized (lowercase) letter.
    pub letter: char,
    /// Whether the letter occurs in the secret word.
    pub hit: bool,
    /// How many positions the letter fills.
    pub occurrences: usize,
    /// Round status after the guess.
    pub status: RoundStatus,
}

/// Mutable progress of one round.
///
/// Invariants:
/// - `secret_word` is lowercase and never changes
/// - `guessed` holds each lowercase letter at most once
/// - `wrong_count <= MAX_WRONG`
/// - once `status` is terminal nothing changes
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GuessState {
    secret_word: String,
    guessed: BTreeSet<char>,
    wrong_count: u8,
    status: RoundStatus,
}

impl GuessState {
    /// Start a fresh round for `secret_word`.
    ///
    /// The word must be non-empty ASCII letters, otherwise the round could
    /// never be won. It is stored lowercase.
    pub fn new(secret_word: impl Into<String>) -> Result<Self> {
        let word = secret_word.into();
        if !is_playable_word(&word) {
            return Err(HangmanError::InvalidWord(word));
        }
        Ok(Self::from_bank(&word))
    }

    /// Start a round for a word the bank has already validated.
    pub(crate) fn from_bank(word: &str) -> Self {
        Self {
            secret_word: word.to_ascii_lowercase(),
            guessed: BTreeSet::new(),
            wrong_count: 0,
            status: RoundStatus::InProgress,
        }
    }

    #[must_use]
    pub fn secret_word(&self) -> &str {
        &self.secret_word
    }

    /// Letters guessed so far, in alphabetical order.
    #[must_use]
    pub fn guessed_letters(&self) -> &BTreeSet<char> {
        &self.guessed
    }

    #[must_use]
    pub fn has_guessed(&self, letter: char) -> bool {
        self.guessed.contains(&letter)
    }

    /// Guessed letters that are not in the word.
    pub fn wrong_letters(&self) -> impl Iterator<Item = char> + '_ {
        self.guessed
            .iter()
            .copied()
            .filter(move |c| !self.secret_word.contains(*c))
    }

    #[must_use]
    pub fn wrong_count(&self) -> u8 {
        self.wrong_count
    }

    /// Wrong guesses left before the round is lost.
    #[must_use]
    pub fn remaining(&self) -> u8 {
        MAX_WRONG - self.wrong_count
    }

    #[must_use]
    pub fn status(&self) -> RoundStatus {
        self.status
    }

    /// Distinct letters of the secret word.
    #[must_use]
    pub fn distinct_letters(&self) -> BTreeSet<char> {
        self.secret_word.chars().collect()
    }

    /// Every distinct letter of the word has been guessed.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.secret_word.chars().all(|c| self.guessed.contains(&c))
    }

    /// Apply a validated, not-yet-guessed lowercase letter.
    ///
    /// Callers must have checked that the round is in progress and that
    /// the letter is new.
    pub(crate) fn apply(&mut self, letter: char) -> GuessOutcome {
        debug_assert!(!self.status.is_terminal());
        debug_assert!(!self.guessed.contains(&letter));

        self.guessed.insert(letter);
        let occurrences = self.secret_word.chars().filter(|&c| c == letter).count();
        let hit = occurrences > 0;

        if hit {
            if self.is_solved() {
                self.status = RoundStatus::Won;
            }
        } else {
            self.wrong_count += 1;
            if self.wrong_count >= MAX_WRONG {
                self.status = RoundStatus::Lost;
            }
        }

        GuessOutcome {
            letter,
            hit,
            occurrences,
            status: self.status,
        }
    }
}
