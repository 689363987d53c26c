//! Headless arena runner.
//!
//! Loads an arena and optional balance overrides, lets the built-in policies
//! play it out and prints the message log.
//! Run with: `cargo run -p rogue-sim -- --seed 7`

mod ai;
mod session;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use rogue_content::{ArenaLoader, ConfigLoader};
use rogue_core::{GameConfig, MessageCategory};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use session::Session;

/// Plays an arena to completion with scripted actors
#[derive(Parser, Debug)]
#[command(name = "rogue-sim")]
#[command(about = "Headless arena simulation", long_about = None)]
#[command(version)]
struct Cli {
    /// Arena description (RON)
    #[arg(long, default_value = concat!(env!("CARGO_MANIFEST_DIR"), "/data/arena.ron"))]
    arena: PathBuf,

    /// Balance overrides (TOML); built-in defaults when omitted
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for the random number generator
    #[arg(long, default_value_t = 7)]
    seed: u64,

    /// Maximum number of rounds to play
    #[arg(long, default_value_t = 200)]
    rounds: u32,

    /// Only print the summary
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    // Load .env file if it exists (RUST_LOG and friends)
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    setup_logging();

    let config = match &cli.config {
        Some(path) => ConfigLoader::load(path)?,
        None => GameConfig::default(),
    };
    let arena = ArenaLoader::load(&cli.arena)?.build()?;
    tracing::info!(arena = %arena.name, seed = cli.seed, "starting session");

    let mut session = Session::new(arena.state, arena.world, config, cli.seed);
    let quiet = cli.quiet;
    let reason = session.run(cli.rounds, |entry| {
        if quiet || entry.flash {
            return;
        }
        let marker = match entry.category {
            MessageCategory::Combat => "!",
            MessageCategory::Death => "x",
            MessageCategory::Status => "~",
            MessageCategory::Failure => "-",
            MessageCategory::Info => " ",
        };
        println!("{marker} {}", entry.text);
    })?;

    println!();
    for row in session.world.render_rows() {
        println!("{row}");
    }
    println!();
    println!("Arena:    {}", arena.name);
    println!("Outcome:  {}", reason.describe());
    println!("Rounds:   {}", session.rounds_played);
    println!("Kills:    {}", session.state.kills);
    println!("Hostiles: {}", session.hostiles_remaining());
    if let Some(player) = session.state.entities.player() {
        println!(
            "Player:   {}/{} hp, hunger {}, thirst {}",
            player.hp, player.max_hp, player.hunger, player.thirst
        );
    }
    Ok(())
}

/// Diagnostics go to stderr so the message log on stdout stays clean.
fn setup_logging() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .init();
}
