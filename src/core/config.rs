//! Static configuration: difficulty tiers, fixed game constants and
//! display options.
//!
//! The wrong-guess budget and stage count are part of the observable
//! contract and are not configurable. Only presentation choices live in
//! `GameConfig`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::HangmanError;

/// Number of gallows drawings, from no wrong guesses to a full loss.
pub const STAGE_COUNT: usize = 7;

/// Wrong guesses allowed before the round is lost.
pub const MAX_WRONG: u8 = (STAGE_COUNT - 1) as u8;

/// Symbol shown for letters not yet guessed.
pub const DEFAULT_PLACEHOLDER: char = '_';

/// Difficulty category selecting which word list a round draws from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Easy,
    Medium,
    Hard,
}

impl Tier {
    /// All tiers in ascending difficulty.
    pub const ALL: [Tier; 3] = [Tier::Easy, Tier::Medium, Tier::Hard];

    /// The lowercase token players type to select this tier.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Tier::Easy => "easy",
            Tier::Medium => "medium",
            Tier::Hard => "hard",
        }
    }

    pub(crate) const fn index(self) -> usize {
        match self {
            Tier::Easy => 0,
            Tier::Medium => 1,
            Tier::Hard => 2,
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tier {
    type Err = HangmanError;

    /// Parse a tier token, ignoring surrounding whitespace and case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim().to_lowercase();
        Tier::ALL
            .into_iter()
            .find(|tier| tier.as_str() == token)
            .ok_or_else(|| HangmanError::UnknownTier(s.trim().to_string()))
    }
}

/// Presentation options for a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Symbol substituted for unguessed letters in masked progress.
    pub placeholder: char,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            placeholder: DEFAULT_PLACEHOLDER,
        }
    }
}

impl GameConfig {
    /// Use a different placeholder symbol.
    #[must_use]
    pub fn with_placeholder(mut self, placeholder: char) -> Self {
        self.placeholder = placeholder;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants() {
        assert_eq!(STAGE_COUNT, 7);
        assert_eq!(MAX_WRONG, 6);
    }

    #[test]
    fn test_tier_parse() {
        assert_eq!("easy".parse::<Tier>(), Ok(Tier::Easy));
        assert_eq!(" Medium ".parse::<Tier>(), Ok(Tier::Medium));
        assert_eq!("HARD".parse::<Tier>(), Ok(Tier::Hard));
        assert_eq!(
            "expert".parse::<Tier>(),
            Err(HangmanError::UnknownTier("expert".to_string()))
        );
        assert!("".parse::<Tier>().is_err());
    }

    #[test]
    fn test_tier_display_round_trips() {
        for tier in Tier::ALL {
            assert_eq!(tier.to_string().parse::<Tier>(), Ok(tier));
        }
    }

    #[test]
    fn test_tier_index_is_dense() {
        let indices: Vec<_> = Tier::ALL.iter().map(|t| t.index()).collect();
        assert_eq!(indices, vec![0, 1, 2]);
    }

    #[test]
    fn test_tier_serde() {
        assert_eq!(serde_json::to_string(&Tier::Medium).unwrap(), "\"medium\"");
        let tier: Tier = serde_json::from_str("\"hard\"").unwrap();
        assert_eq!(tier, Tier::Hard);
    }

    #[test]
    fn test_config_defaults() {
        let config = GameConfig::default();
        assert_eq!(config.placeholder, '_');

        let config: GameConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, GameConfig::default());

        let config = GameConfig::default().with_placeholder('*');
        assert_eq!(config.placeholder, '*');
    }
}
