//! Mastermind - CLI
//!
//! Crack a hidden digit sequence in the terminal, with a TUI (default) and a
//! plain line mode. Statistics persist across sessions.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use mastermind::{
    commands::{reset_statistics, run_simple, show_statistics},
    core::{GameConfig, Preset},
    interactive::{App, run_tui},
    output::write_statistics,
    stats::JsonFileStore,
};
use rand::{SeedableRng, rngs::StdRng};
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "mastermind",
    about = "Crack the hidden code: exact (!) and partial (^) feedback after every guess",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Number of values in the code: 4 or 5 (default: 5)
    #[arg(short, long, global = true)]
    length: Option<usize>,

    /// Value range: classic (0-8) or double-digits (0-24)
    #[arg(short, long, global = true, value_enum)]
    preset: Option<Preset>,

    /// Seed for the code generator (reproducible games)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Statistics file (default: ~/mastermind.json)
    #[arg(long, global = true)]
    stats_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple line mode; asks for the options unless --length/--preset are given
    Simple,

    /// Show saved statistics
    Stats,

    /// Erase saved statistics
    Reset,
}

impl Cli {
    /// Options given on the command line, `None` when neither flag was used
    fn game_config(&self) -> Result<Option<GameConfig>> {
        if self.length.is_none() && self.preset.is_none() {
            return Ok(None);
        }
        let config = GameConfig::new(self.length.unwrap_or(5), self.preset.unwrap_or_default())?;
        Ok(Some(config))
    }

    fn store(&self) -> Result<JsonFileStore> {
        match &self.stats_file {
            Some(path) => Ok(JsonFileStore::new(path)),
            None => JsonFileStore::in_home_dir(),
        }
    }

    fn rng(&self) -> StdRng {
        self.seed
            .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64)
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = cli.game_config()?;
    let store = cli.store()?;
    log::debug!("statistics file: {}", store.path().display());

    // Default to Play mode if no command given
    let command = cli.command.as_ref().unwrap_or(&Commands::Play);

    match command {
        Commands::Play => run_play_command(config.unwrap_or_default(), &store, cli.rng()),
        Commands::Simple => run_simple_command(config, &store, cli.rng()),
        Commands::Stats => {
            show_statistics(&store, &mut io::stdout())?;
            Ok(())
        }
        Commands::Reset => reset_statistics(&store, &mut io::stdout()),
    }
}

fn run_play_command(config: GameConfig, store: &JsonFileStore, rng: StdRng) -> Result<()> {
    let app = App::new(config, store, rng);
    let stats = run_tui(app).context("terminal UI failed")?;

    write_statistics(&mut io::stdout(), &stats)?;
    println!("Thanks for playing.");
    Ok(())
}

fn run_simple_command(
    config: Option<GameConfig>,
    store: &JsonFileStore,
    mut rng: StdRng,
) -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout();
    run_simple(&mut input, &mut out, store, &mut rng, config)?;
    Ok(())
}
