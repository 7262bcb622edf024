//! Grid Asteroids headless driver
//!
//! Plays one round on simulated time: the scheduler is fed fixed steps instead
//! of wall-clock time, so a seed fully determines the run.

use std::path::PathBuf;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use anyhow::Context;
use clap::Parser;

use grid_asteroids::score::{HOW_TO_PLAY, game_over_summary};
use grid_asteroids::{Game, GameConfig, GameEvent, GamePhase, Input, autopilot};

#[derive(Parser, Debug)]
#[command(name = "grid-asteroids", about = "Play a headless round of Grid Asteroids")]
struct Args {
    /// RNG seed (defaults to the current time)
    #[arg(short, long)]
    seed: Option<u64>,

    /// JSON config file (missing fields use the classic defaults)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Simulated seconds to play before giving up
    #[arg(long, default_value_t = 120.0)]
    seconds: f64,

    /// Let the demo pilot aim and fire
    #[arg(long)]
    autopilot: bool,

    /// Print the final board
    #[arg(long)]
    print_board: bool,

    /// Print the effective config as JSON and exit
    #[arg(long)]
    dump_config: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => GameConfig::load(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => GameConfig::default(),
    };

    if args.dump_config {
        println!("{}", config.to_json()?);
        return Ok(());
    }

    let seed = args.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or_default()
    });
    log::info!("Grid Asteroids (headless) starting with seed {}", seed);

    println!("*** ASTEROIDS! ***\n");
    println!("{}\n", HOW_TO_PLAY);

    let step = config.projectile_period();
    let limit = play_limit(args.seconds)?;
    let mut game = Game::new(config, seed)?;
    game.push_input(Input::Start);

    let mut clock = Duration::ZERO;
    while clock < limit {
        if args.autopilot {
            if let Some(input) = autopilot::decide(game.state()) {
                game.push_input(input);
            }
        }
        for event in game.update(step) {
            log_event(&event);
        }
        clock += step;
        if game.phase() == GamePhase::GameOver {
            break;
        }
    }

    if args.print_board {
        print!("{}", game.board());
    }

    match game.phase() {
        GamePhase::GameOver => {
            println!("Game Over after {:.1}s", clock.as_secs_f64());
            if let Some(score) = game.state().final_score {
                println!("{}", game_over_summary(&score));
            }
            game.push_input(Input::ReturnToMenu);
            game.update(Duration::ZERO);
        }
        _ => {
            println!("Survived {:.1}s", clock.as_secs_f64());
            println!("{}", game_over_summary(&game.state().score));
        }
    }

    Ok(())
}

/// Convert `--seconds` into a simulated time budget; negatives mean zero
fn play_limit(seconds: f64) -> anyhow::Result<Duration> {
    Duration::try_from_secs_f64(seconds.max(0.0))
        .with_context(|| format!("--seconds {} is not a usable duration", seconds))
}

fn log_event(event: &GameEvent) {
    match event {
        GameEvent::AsteroidDestroyed { id, at } => {
            log::info!("Asteroid {} destroyed at ({}, {})", id, at.x, at.y)
        }
        GameEvent::AsteroidAdded { total, .. } => log::info!("Asteroid field grows to {}", total),
        GameEvent::ShipDestroyed { by, .. } => log::info!("Ship hit by asteroid {}", by),
        other => log::trace!("{:?}", other),
    }
}
