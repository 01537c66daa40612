//! Masked word progress and the per-guess view.

use std::collections::BTreeSet;
use std::fmt;

use crate::core::DEFAULT_PLACEHOLDER;
use crate::round::GuessState;

use super::stages::render_stage;

/// Masked progress using the default `_` placeholder.
///
/// ```
/// use std::collections::BTreeSet;
/// use hangman_engine::render::render_progress;
///
/// let guessed: BTreeSet<char> = ['c', 't'].into_iter().collect();
/// assert_eq!(render_progress("cat", &guessed), "c _ t");
/// ```
#[must_use]
pub fn render_progress(secret_word: &str, guessed: &BTreeSet<char>) -> String {
    render_progress_with(secret_word, guessed, DEFAULT_PLACEHOLDER)
}

/// Masked progress: each letter of the word, or `placeholder` if it has
/// not been guessed, separated by single spaces.
///
/// Both the word and the guesses are compared in lowercase.
#[must_use]
pub fn render_progress_with(secret_word: &str, guessed: &BTreeSet<char>, placeholder: char) -> String {
    let guessed: BTreeSet<char> = guessed.iter().flat_map(|c| c.to_lowercase()).collect();

    let mut out = String::with_capacity(secret_word.len() * 2);
    for c in secret_word.chars().flat_map(char::to_lowercase) {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push(if guessed.contains(&c) { c } else { placeholder });
    }
    out
}

/// Everything a front end shows after a guess.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoundView {
    /// Gallows drawing for the current wrong count.
    pub stage: &'static str,
    /// Masked word progress.
    pub progress: String,
    /// Letters guessed so far, alphabetical.
    pub guessed: Vec<char>,
    /// Wrong guesses left.
    pub remaining: u8,
}

impl RoundView {
    #[must_use]
    pub fn new(state: &GuessState, placeholder: char) -> Self {
        Self {
            stage: render_stage(state.wrong_count() as usize),
            progress: render_progress_with(state.secret_word(), state.guessed_letters(), placeholder),
            guessed: state.guessed_letters().iter().copied().collect(),
            remaining: state.remaining(),
        }
    }
}

impl fmt::Display for RoundView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.stage)?;
        writeln!(f, "Word: {}", self.progress)?;
        let letters: Vec<String> = self.guessed.iter().map(char::to_string).collect();
        write!(f, "Guessed letters: [{}]", letters.join(", "))
    }
}
