// faultlab: menu-driven fault scenario tester

use std::io;

use crossterm::tty::IsTty;

use faultlab::config::Settings;
use faultlab::console::Console;
use faultlab::menu::Session;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let settings = Settings::default().with_styling(io::stdout().is_tty());

    // Logs go to stderr; stdout carries the menu transcript
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(settings.log_level)
        .init();

    let console = Console::with_settings(io::stdin().lock(), io::stdout(), &settings);
    let mut session = Session::new(console, settings);
    session.run()?;

    Ok(())
}
