use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use dice_race::game::Match;
use dice_race::{Config, Policy};
use tracing::Level;

/// Race to 100 against the computer. Any 1 rolled busts the turn.
#[derive(Debug, Parser)]
#[command(name = "dice_race", version)]
struct Args {
    /// Stand-in roll policy for simulated turns: fixed:K, binomial[:N:P], poisson[:LAMBDA].
    #[arg(long, default_value = "binomial")]
    policy: Policy,

    /// Trials per candidate roll count on the computer's turn.
    #[arg(long, default_value_t = dice_race::config::COMPUTER_TRIALS)]
    trials: usize,

    /// Trials per independent random stream.
    #[arg(long, default_value_t = dice_race::systems::sdk::DEFAULT_CHUNK)]
    chunk: usize,

    /// Highest roll count the computer will consider.
    #[arg(long, default_value_t = dice_race::systems::select::DEFAULT_MAX_ROLLS)]
    max_rolls: u32,

    /// Seed for a reproducible game.
    #[arg(long)]
    seed: Option<u64>,

    /// Run simulation chunks on the current thread only.
    #[arg(long)]
    sequential: bool,

    /// Let the computer open the game.
    #[arg(long)]
    computer_first: bool,

    /// Log level for diagnostics on stderr.
    #[arg(long, default_value = "warn")]
    log_level: Level,
}

fn build_config(args: &Args) -> Result<Config> {
    let config = Config {
        policy: args.policy,
        computer_trials: args.trials,
        chunk: args.chunk,
        max_rolls: args.max_rolls,
        seed: args.seed,
        parallel: !args.sequential && cfg!(feature = "parallel"),
        computer_first: args.computer_first,
        ..Config::default()
    };
    config.validate().context("invalid configuration")?;
    Ok(config)
}

fn init_tracing(level: Level) {
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.log_level);
    let config = build_config(&args)?;

    let mut game = Match::new(config).context("failed to set up the game")?;
    let stdin = io::stdin();
    let stdout = io::stdout();
    game.run(&mut stdin.lock(), &mut stdout.lock())
        .context("game aborted")?;
    Ok(())
}
