use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::{backend::CrosstermBackend, Terminal};

use connect_four::ai::RandomAgent;
use connect_four::config::AppConfig;
use connect_four::logging::setup_logging;
use connect_four::session::{FirstMover, Session};
use connect_four::ui::{App, Console};

/// Play Connect Four against a computer that picks random columns.
#[derive(Parser)]
#[command(name = "connect-four", about = "Play Connect Four against a random computer")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "connect_four.toml")]
    config: PathBuf,

    /// Seed for the random source (overrides the config file)
    #[arg(long)]
    seed: Option<u64>,

    /// Who moves first each round (overrides the config file)
    #[arg(long, value_enum)]
    first: Option<FirstMover>,

    /// Use the full-screen terminal UI instead of the console prompts
    #[arg(long)]
    tui: bool,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    print_default_config: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.print_default_config {
        print!("{}", AppConfig::default_toml()?);
        return Ok(());
    }

    let config_found = cli.config.exists();
    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(seed) = cli.seed {
        config.game.seed = Some(seed);
    }
    if let Some(first) = cli.first {
        config.game.first_mover = first;
    }

    let _logger = setup_logging(&config.logging, !cli.tui).context("starting logger")?;
    if !config_found {
        log::warn!(
            "config file '{}' not found, using defaults",
            cli.config.display()
        );
    }

    // The only random source of the run
    let rng = match config.game.seed {
        Some(seed) => {
            log::info!("seeding random source with {seed}");
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_os_rng(),
    };
    let mut session = Session::new(RandomAgent::new(), rng, config.game.first_mover);

    if cli.tui {
        run_tui(App::new(session)).context("running terminal UI")?;
    } else {
        let stdin = io::stdin();
        let mut console = Console::new(stdin.lock(), io::stdout(), config.display.clone());
        let score = console.run(&mut session).context("console game")?;
        log::info!("session finished: {score}");
    }

    Ok(())
}

fn run_tui(mut app: App<RandomAgent, StdRng>) -> io::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = app.run(&mut terminal);

    // Restore terminal even if the app failed
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    res
}
