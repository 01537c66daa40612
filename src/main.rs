use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use hangman_engine::{GameConfig, GameEngine, GameRng, Session, Tier, WordBank};

#[derive(Parser)]
#[command(name = "hangman")]
#[command(about = "Guess the word one letter at a time")]
#[command(version)]
struct Cli {
    /// Seed for word selection (random if omitted)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Play every round at this difficulty instead of asking
    #[arg(short, long)]
    difficulty: Option<Tier>,

    /// Symbol shown for letters not yet guessed
    #[arg(short, long, default_value_t = hangman_engine::DEFAULT_PLACEHOLDER)]
    placeholder: char,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let rng = match cli.seed {
        Some(seed) => GameRng::new(seed),
        None => GameRng::from_entropy(),
    };
    info!(seed = rng.seed(), "word selection seeded");

    let config = GameConfig::default().with_placeholder(cli.placeholder);
    let engine = GameEngine::new(WordBank::standard(), config);

    let stdin = std::io::stdin();
    let mut session = Session::new(engine, rng, stdin.lock(), std::io::stdout());
    if let Some(tier) = cli.difficulty {
        session = session.with_tier(tier);
    }

    let summary = session.run().context("session I/O failed")?;
    info!(?summary, "goodbye");
    Ok(())
}
