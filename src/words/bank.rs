//! Word bank implementation.

use crate::core::{HangmanError, RandomSource, Result, Tier};

const EASY: &[&str] = &["cat", "dog", "sun", "car", "book"];
const MEDIUM: &[&str] = &["orange", "guitar", "planet", "castle", "garden"];
const HARD: &[&str] = &["elephant", "programming", "challenge", "encyclopedia", "microprocessor"];

/// A word can be played if it is non-empty and all ASCII letters.
pub(crate) fn is_playable_word(word: &str) -> bool {
    !word.is_empty() && word.chars().all(|c| c.is_ascii_alphabetic())
}

/// Immutable tier → word list table.
///
/// Invariants: every tier is non-empty and every word is lowercase ASCII
/// alphabetic.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WordBank {
    tiers: [Vec<String>; 3],
}

impl Default for WordBank {
    fn default() -> Self {
        Self::standard()
    }
}

impl WordBank {
    /// The built-in word lists.
    #[must_use]
    pub fn standard() -> Self {
        let owned = |words: &[&str]| -> Vec<String> { words.iter().map(|w| (*w).to_string()).collect() };
        Self {
            tiers: [owned(EASY), owned(MEDIUM), owned(HARD)],
        }
    }

    /// Build a bank from custom lists.
    ///
    /// Words are lowercased. Fails if a tier is empty or a word contains
    /// anything but letters.
    pub fn new<S: AsRef<str>>(easy: &[S], medium: &[S], hard: &[S]) -> Result<Self> {
        Ok(Self {
            tiers: [
                Self::validate(Tier::Easy, easy)?,
                Self::validate(Tier::Medium, medium)?,
                Self::validate(Tier::Hard, hard)?,
            ],
        })
    }

    fn validate<S: AsRef<str>>(tier: Tier, words: &[S]) -> Result<Vec<String>> {
        if words.is_empty() {
            return Err(HangmanError::InvalidWordBank {
                tier,
                reason: "no words".to_string(),
            });
        }

        words
            .iter()
            .map(|word| {
                let word = word.as_ref();
                if !is_playable_word(word) {
                    return Err(HangmanError::InvalidWordBank {
                        tier,
                        reason: format!("'{}' is not a single alphabetic word", word),
                    });
                }
                Ok(word.to_ascii_lowercase())
            })
            .collect()
    }

    /// Words available for a tier, in their original order.
    #[must_use]
    pub fn words(&self, tier: Tier) -> &[String] {
        &self.tiers[tier.index()]
    }

    /// Is `word` one of the tier's candidates?
    #[must_use]
    pub fn contains(&self, tier: Tier, word: &str) -> bool {
        self.words(tier).iter().any(|w| w == word)
    }

    /// Pick a word from a tier uniformly at random.
    ///
    /// Picks are independent: nothing prevents the same word from coming
    /// up in consecutive rounds.
    pub fn pick<R: RandomSource + ?Sized>(&self, tier: Tier, rng: &mut R) -> &str {
        let words = self.words(tier);
        &words[rng.next_index(words.len())]
    }

    /// Pick a word for a tier given by its player-facing token.
    pub fn pick_named<R: RandomSource + ?Sized>(&self, token: &str, rng: &mut R) -> Result<&str> {
        let tier: Tier = token.parse()?;
        Ok(self.pick(tier, rng))
    }
}
