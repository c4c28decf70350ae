use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use tracing::error;

use mortgage_calc::{
    app::{run_app, App},
    config::{Cli, Command, Config},
    headless, logging,
};

fn main() -> Result<()> {
    let config = Config::from_cli(Cli::parse())?;
    logging::init(&config)?;

    match &config.command {
        Command::Tui => run_tui(),
        Command::Calc(args) => {
            println!("{}", headless::run_calc(args)?);
            Ok(())
        }
    }
}

fn run_tui() -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, App::default());

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(?err, "interactive form failed");
    }
    res
}
