//! Session controller implementation.

use std::io::{self, BufRead, Write};

use tracing::info;

use crate::core::{HangmanError, RandomSource, Tier};
use crate::render::render_stage;
use crate::round::{GuessState, RoundStatus};
use crate::rules::{GameEngine, RoundResult};

/// Totals over every finished round of a session.
///
/// Abandoned rounds are not counted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub rounds: u32,
    pub wins: u32,
    pub losses: u32,
    pub total_score: u32,
}

impl SessionSummary {
    fn record(&mut self, result: &RoundResult) {
        self.rounds += 1;
        if result.is_win() {
            self.wins += 1;
        } else {
            self.losses += 1;
        }
        self.total_score += result.score.unwrap_or(0);
    }
}

/// Repeatedly plays rounds until the player declines or input ends.
pub struct Session<I, O, R> {
    engine: GameEngine,
    rng: R,
    input: I,
    output: O,
    tier: Option<Tier>,
}

impl<I: BufRead, O: Write, R: RandomSource> Session<I, O, R> {
    pub fn new(engine: GameEngine, rng: R, input: I, output: O) -> Self {
        Self {
            engine,
            rng,
            input,
            output,
            tier: None,
        }
    }

    /// Play every round on `tier` instead of asking for a difficulty.
    #[must_use]
    pub fn with_tier(mut self, tier: Tier) -> Self {
        self.tier = Some(tier);
        self
    }

    /// Give back the output sink.
    pub fn into_output(self) -> O {
        self.output
    }

    /// Run the loop to completion.
    pub fn run(&mut self) -> io::Result<SessionSummary> {
        let mut summary = SessionSummary::default();
        writeln!(self.output, "===== Hangman =====")?;

        while let Some(state) = self.setup_round()? {
            let Some(result) = self.play(state)? else {
                info!("round abandoned");
                break;
            };
            summary.record(&result);

            self.prompt("Play again? (y/n): ")?;
            match self.read_line()? {
                Some(answer) if answer.trim().eq_ignore_ascii_case("y") => {}
                _ => break,
            }
        }

        info!(
            rounds = summary.rounds,
            wins = summary.wins,
            losses = summary.losses,
            total_score = summary.total_score,
            "session finished"
        );
        Ok(summary)
    }

    /// Pick a word for the next round, or `None` if the player exits.
    fn setup_round(&mut self) -> io::Result<Option<GuessState>> {
        if let Some(tier) = self.tier {
            return Ok(Some(self.engine.start_round(tier, &mut self.rng)));
        }

        loop {
            self.prompt("Choose difficulty (easy/medium/hard or exit): ")?;
            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            if line.trim().eq_ignore_ascii_case("exit") {
                return Ok(None);
            }
            match self.engine.start_round_named(&line, &mut self.rng) {
                Ok(state) => return Ok(Some(state)),
                Err(HangmanError::UnknownTier(_)) => writeln!(self.output, "Unknown difficulty.")?,
                Err(e) => return Err(io::Error::other(e)),
            }
        }
    }

    /// Play one round. `None` means input ran out before it ended.
    fn play(&mut self, mut state: GuessState) -> io::Result<Option<RoundResult>> {
        loop {
            let view = self.engine.view(&state);
            writeln!(self.output, "{}", view)?;
            self.prompt("Enter a letter: ")?;

            let Some(line) = self.read_line()? else {
                return Ok(None);
            };

            let outcome = match self.engine.submit_guess(&mut state, &line) {
                Ok(outcome) => outcome,
                Err(HangmanError::InvalidInput(_)) => {
                    writeln!(self.output, "Invalid input. Enter a single letter.")?;
                    continue;
                }
                Err(HangmanError::DuplicateGuess(_)) => {
                    writeln!(self.output, "Already guessed.")?;
                    continue;
                }
                Err(e) => return Err(io::Error::other(e)),
            };

            if outcome.hit {
                writeln!(self.output, "Correct!")?;
            } else {
                writeln!(self.output, "Wrong! Attempts left: {}", state.remaining())?;
            }

            match outcome.status {
                RoundStatus::InProgress => {}
                RoundStatus::Won => {
                    writeln!(self.output, "You win! The word was '{}'.", state.secret_word())?;
                    if let Some(score) = self.engine.compute_score(&state) {
                        writeln!(self.output, "Score: {}", score)?;
                    }
                    return Ok(self.engine.result(&state));
                }
                RoundStatus::Lost => {
                    writeln!(self.output, "{}", render_stage(state.wrong_count() as usize))?;
                    writeln!(self.output, "You lost. Word was '{}'.", state.secret_word())?;
                    return Ok(self.engine.result(&state));
                }
            }
        }
    }

    fn prompt(&mut self, text: &str) -> io::Result<()> {
        write!(self.output, "{}", text)?;
        self.output.flush()
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ScriptedSource;
    use std::io::Cursor;

    fn run(script: &str, picks: Vec<usize>) -> (SessionSummary, String) {
        let mut session = Session::new(
            GameEngine::standard(),
            ScriptedSource::new(picks),
            Cursor::new(script.to_string()),
            Vec::new(),
        );
        let summary = session.run().unwrap();
        let output = String::from_utf8(session.into_output()).unwrap();
        (summary, output)
    }

    #[test]
    fn test_exit_immediately() {
        let (summary, output) = run("exit\n", vec![0]);
        assert_eq!(summary, SessionSummary::default());
        assert!(output.starts_with("===== Hangman =====\n"));
    }

    #[test]
    fn test_unknown_difficulty_reprompts() {
        let (summary, output) = run("expert\neasy\nc\na\nt\nn\n", vec![0]);
        assert!(output.contains("Unknown difficulty."));
        assert_eq!(summary.wins, 1);
        assert_eq!(summary.total_score, 60);
    }

    #[test]
    fn test_summary_record() {
        let mut summary = SessionSummary::default();
        summary.record(&RoundResult {
            outcome: crate::rules::Outcome::Lost,
            word: "dog".to_string(),
            score: None,
        });
        assert_eq!(summary.losses, 1);
        assert_eq!(summary.total_score, 0);
    }
}
