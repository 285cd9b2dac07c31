//! marga-nav - Interactive stepped A* pathfinding demonstrator
//!
//! Generates a random occupancy grid, then runs an edit/search session
//! against it: move the start and goal, toggle walls, and watch the
//! A* frontier and visited sets grow one expansion at a time in the
//! terminal.
//!
//! Commands on stdin: `start R C`, `goal R C`, `wall R C`, `run`,
//! `quit`. `--script` instead runs a single search and exits, which is
//! handy for demos and smoke tests.

mod config;
mod error;
mod input;
mod render;
mod session;

use clap::Parser;
use config::NavConfig;
use error::Result;
use input::{Command, ConsoleInput, ScriptedInput};
use render::AsciiRenderer;
use session::Session;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Parser)]
#[command(name = "marga-nav")]
#[command(about = "Interactive stepped A* pathfinding over a random occupancy grid")]
struct Args {
    /// Configuration file (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Grid dimension override
    #[arg(long)]
    size: Option<usize>,

    /// Wall probability override
    #[arg(long)]
    wall_probability: Option<f64>,

    /// RNG seed override (0 = non-deterministic)
    #[arg(long)]
    seed: Option<u64>,

    /// Step delay override in milliseconds
    #[arg(long)]
    step_delay_ms: Option<u64>,

    /// Run one search and exit instead of reading commands from stdin
    #[arg(long)]
    script: bool,
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("marga_nav=info".parse().unwrap()),
        )
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => {
            info!("Loading configuration from {:?}", path);
            NavConfig::load(path)?
        }
        None if Path::new("marga.toml").exists() => {
            info!("Loading configuration from marga.toml");
            NavConfig::load(Path::new("marga.toml"))?
        }
        None => {
            info!("Using default configuration");
            NavConfig::default()
        }
    };

    // Command line overrides
    if let Some(size) = args.size {
        config.grid.size = size;
    }
    if let Some(p) = args.wall_probability {
        config.grid.wall_probability = p;
    }
    if let Some(seed) = args.seed {
        config.grid.seed = seed;
    }
    if let Some(delay) = args.step_delay_ms {
        config.render.step_delay_ms = delay;
    }

    info!("marga-nav v{}", env!("CARGO_PKG_VERSION"));
    info!(
        "Grid: {}x{}, wall probability {:.2}, seed {}",
        config.grid.size, config.grid.size, config.grid.wall_probability, config.grid.seed
    );

    let mut session = Session::from_config(&config.grid)?;
    let mut renderer = AsciiRenderer::stdout(&config.render);

    if args.script {
        let mut input = ScriptedInput::new(vec![Command::RunSearch, Command::Quit]);
        session.run(&mut input, &mut renderer)?;
    } else {
        info!("Commands: start R C | goal R C | wall R C | run | quit");
        let mut input = ConsoleInput::stdin();
        session.run(&mut input, &mut renderer)?;
    }

    match session.path() {
        Some(path) => info!("Final path: {} cells ({} moves)", path.len_cells(), path.moves()),
        None => info!("No path cached at session end"),
    }
    info!("marga-nav finished");
    Ok(())
}
