use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use piskvorky::config::AppConfig;
use piskvorky::ui::App;
use ratatui::{backend::CrosstermBackend, Terminal};

/// Five in a row on a 16x16 board. Click a tile to place your mark.
#[derive(Parser)]
#[command(name = "piskvorky", about = "Five-in-a-row in the terminal")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "piskvorky.toml")]
    config: PathBuf,

    /// Write logs to this file (overrides logging.file)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Print the default configuration and exit
    #[arg(long)]
    print_config: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.print_config {
        print!("{}", AppConfig::default_toml());
        return Ok(());
    }

    let config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;
    piskvorky::logging::init(&config.logging, cli.log_file.as_deref())
        .context("setting up logging")?;

    let mut app = App::new(&config.ui).context("building the game screen")?;
    run(&mut app).context("running the terminal UI")
}

fn run(app: &mut App) -> io::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = app.run(&mut terminal);

    // Restore terminal, even on error
    let _ = disable_raw_mode();
    let _ = execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    );
    let _ = terminal.show_cursor();

    res
}
