//! Property tests over arbitrary words and guess sequences.

use std::collections::BTreeSet;

use proptest::prelude::*;

use hangman_engine::{
    render_progress, GameEngine, GameRng, GuessState, HangmanError, RoundStatus, Tier, WordBank, MAX_WRONG,
};

fn secret_word() -> impl Strategy<Value = String> {
    "[a-z]{1,14}"
}

proptest! {
    /// Every pick belongs to the requested tier.
    #[test]
    fn prop_pick_stays_in_tier(seed in any::<u64>(), tier_idx in 0usize..3) {
        let bank = WordBank::standard();
        let tier = Tier::ALL[tier_idx];
        let mut rng = GameRng::new(seed);
        let picked = bank.pick(tier, &mut rng).to_string();
        prop_assert!(bank.contains(tier, &picked));
    }

    /// Guessing each distinct letter once, in any order, wins with no misses.
    #[test]
    fn prop_distinct_letters_win(word in secret_word(), seed in any::<u64>()) {
        let engine = GameEngine::standard();
        let mut state = GuessState::new(word.clone()).unwrap();

        let mut letters: Vec<char> = state.distinct_letters().into_iter().collect();
        GameRng::new(seed).shuffle(&mut letters);

        for (i, letter) in letters.iter().enumerate() {
            prop_assert_eq!(state.status(), RoundStatus::InProgress);
            let outcome = engine.submit_guess(&mut state, &letter.to_string()).unwrap();
            prop_assert!(outcome.hit);
            let expected = if i + 1 == letters.len() { RoundStatus::Won } else { RoundStatus::InProgress };
            prop_assert_eq!(outcome.status, expected);
        }

        prop_assert_eq!(state.wrong_count(), 0);
        let expected = word.len() as u32 * 10 + u32::from(MAX_WRONG) * 5;
        prop_assert_eq!(engine.compute_score(&state), Some(expected));
    }

    /// Six absent letters lose the round; a seventh guess is refused.
    #[test]
    fn prop_six_misses_lose(word in secret_word(), seed in any::<u64>()) {
        let engine = GameEngine::standard();
        let mut state = GuessState::new(word.clone()).unwrap();

        let mut absent: Vec<char> = ('a'..='z').filter(|c| !word.contains(*c)).collect();
        prop_assume!(absent.len() > MAX_WRONG as usize);
        GameRng::new(seed).shuffle(&mut absent);

        for letter in &absent[..MAX_WRONG as usize] {
            engine.submit_guess(&mut state, &letter.to_string()).unwrap();
        }
        prop_assert_eq!(state.status(), RoundStatus::Lost);

        let seventh = absent[MAX_WRONG as usize].to_string();
        prop_assert_eq!(engine.submit_guess(&mut state, &seventh), Err(HangmanError::RoundAlreadyOver));
        prop_assert_eq!(engine.result(&state).map(|r| r.word), Some(word));
    }

    /// The wrong count never exceeds the budget, whatever is typed.
    #[test]
    fn prop_wrong_count_bounded(word in secret_word(), guesses in prop::collection::vec(".{0,2}", 0..60)) {
        let engine = GameEngine::standard();
        let mut state = GuessState::new(word).unwrap();

        for guess in &guesses {
            let before = state.clone();
            if engine.submit_guess(&mut state, guess).is_err() {
                prop_assert_eq!(&state, &before);
            }
            prop_assert!(state.wrong_count() <= MAX_WRONG);
        }
    }

    /// Progress is stable across calls and shows exactly the guessed letters.
    #[test]
    fn prop_progress_masks(word in secret_word(), guessed in prop::collection::btree_set(prop::char::range('a', 'z'), 0..10)) {
        let first = render_progress(&word, &guessed);
        prop_assert_eq!(&first, &render_progress(&word, &guessed));

        let cells: Vec<&str> = first.split(' ').collect();
        prop_assert_eq!(cells.len(), word.len());
        for (cell, c) in cells.iter().zip(word.chars()) {
            let expected = if guessed.contains(&c) { c.to_string() } else { "_".to_string() };
            prop_assert_eq!(*cell, expected.as_str());
        }
    }
}

#[test]
fn test_duplicate_does_not_advance() {
    let engine = GameEngine::standard();
    let mut state = GuessState::new("garden").unwrap();
    engine.submit_guess(&mut state, "q").unwrap();

    let guessed: BTreeSet<char> = state.guessed_letters().clone();
    let wrong = state.wrong_count();
    assert!(engine.submit_guess(&mut state, "q").is_err());
    assert_eq!(state.guessed_letters(), &guessed);
    assert_eq!(state.wrong_count(), wrong);
}
