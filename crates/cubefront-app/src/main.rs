use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use cubefront_app::logging;
use cubefront_app::session;
use cubefront_core::config::GameConfig;
use cubefront_sim::SimConfig;

/// Run a CUBEFRONT game with the autopilot at the controls.
#[derive(Debug, Parser)]
#[command(name = "cubefront", version, about)]
struct Args {
    /// RNG seed. The same seed replays the same headless game.
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Number of frames to play.
    #[arg(long, default_value_t = 3600)]
    ticks: u64,

    /// JSON file overriding the default tuning values.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Enable the ballistic alternate fire.
    #[arg(long)]
    alt_fire: bool,

    /// Run on the 60Hz game loop thread instead of stepping instantly.
    #[arg(long)]
    realtime: bool,

    /// Print debug logs, including every game event.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init(args.verbose);

    let mut game = match &args.config {
        Some(path) => GameConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => GameConfig::default(),
    };
    if args.alt_fire {
        game.alt_fire_enabled = true;
    }

    let config = SimConfig {
        seed: args.seed,
        game,
        ..SimConfig::default()
    };
    info!("starting cubefront (seed {}, {} ticks)", args.seed, args.ticks);

    let snapshot = if args.realtime {
        session::run_realtime(config, args.ticks)?
            .context("game loop produced no snapshot")?
    } else {
        session::run_headless(config, args.ticks)
    };

    info!(
        "wave {} reached, {} enemies alive",
        snapshot.round.wave, snapshot.round.enemies_alive
    );
    println!("{}", serde_json::to_string_pretty(&snapshot.score)?);
    Ok(())
}
