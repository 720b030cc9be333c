use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use c4::config::GameConfig;
use c4::console::Console;
use c4::game::GameSession;

/// Play Connect Four in the terminal. Type a column number each turn, or q to quit.
#[derive(Parser)]
#[command(name = "c4", about = "A simple, text-based Connect Four game")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "c4.toml")]
    config: PathBuf,

    /// Override number of rows
    #[arg(long)]
    rows: Option<usize>,

    /// Override number of columns
    #[arg(long)]
    columns: Option<usize>,

    /// Override the run length needed to win
    #[arg(long)]
    goal: Option<usize>,

    /// Override the first player's name
    #[arg(long)]
    player_one: Option<String>,

    /// Override the second player's name
    #[arg(long)]
    player_two: Option<String>,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    print_config: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        _ => log::LevelFilter::Debug,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    if cli.print_config {
        print!("{}", GameConfig::default_toml().context("serializing default config")?);
        return Ok(());
    }

    let mut config = GameConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(rows) = cli.rows {
        config.rows = rows;
    }
    if let Some(columns) = cli.columns {
        config.columns = columns;
    }
    if let Some(goal) = cli.goal {
        config.goal = goal;
    }
    if let Some(name) = cli.player_one {
        config.player_one = name;
    }
    if let Some(name) = cli.player_two {
        config.player_two = name;
    }
    config.validate().context("invalid game settings")?;

    let mut console = Console::new(GameSession::new(&config));
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let reason = console
        .run(stdin.lock(), &mut stdout)
        .context("console I/O failed")?;
    log::info!("exiting: {:?}", reason);

    Ok(())
}
