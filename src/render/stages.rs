//! Gallows drawings.

use crate::core::{MAX_WRONG, STAGE_COUNT};

/// One drawing per wrong-guess count, index 0 = untouched gallows.
pub const STAGES: [&str; STAGE_COUNT] = [
    " +---+\n     |   |\n         |\n         |\n         |\n         |\n  =========",
    " +---+\n     |   |\n     O   |\n         |\n         |\n         |\n  =========",
    " +---+\n     |   |\n     O   |\n     |   |\n         |\n         |\n  =========",
    " +---+\n     |   |\n     O   |\n    /|   |\n         |\n         |\n  =========",
    " +---+\n     |   |\n     O   |\n    /|\\  |\n         |\n         |\n  =========",
    " +---+\n     |   |\n     O   |\n    /|\\  |\n    /    |\n         |\n  =========",
    " +---+\n     |   |\n     O   |\n    /|\\  |\n    / \\  |\n         |\n  =========",
];

/// Drawing for `wrong_count` wrong guesses.
///
/// Counts past the budget render the final stage instead of failing.
#[must_use]
pub fn render_stage(wrong_count: usize) -> &'static str {
    STAGES[wrong_count.min(MAX_WRONG as usize)]
}
