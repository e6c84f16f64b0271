use std::io::{self, Write};

use clap::Parser;
use color_eyre::Result;
use color_eyre::eyre::{bail, eyre};
use ratatui::DefaultTerminal;
use ratatui::crossterm::{
    event::{DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture},
    execute,
};

use lolaunch::app::{App, LaunchMode};
use lolaunch::cli::{self, Args};
use lolaunch::config::{self, Config, ConfigResult};
use lolaunch::error::LoadError;
use lolaunch::roster::RosterReader;
use lolaunch::target::SystemOpener;

fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;

    let args = Args::parse();
    lolaunch::logging::init();

    let ConfigResult { config, warning } = config::load_config(args.config.as_deref());
    let list_path = args.list.clone().unwrap_or_else(|| config.list_file.clone());
    let roster = RosterReader::read(&list_path);

    if args.filter.is_some() || args.resolve.is_some() {
        if let Some(warning) = &warning {
            eprintln!("warning: {}", warning);
        }
    }
    if let Some(query) = &args.filter {
        return run_filter(roster, query);
    }
    if let Some(query) = &args.resolve {
        return run_resolve(roster, query, &config, args.target);
    }

    let launch = if args.print {
        LaunchMode::Print
    } else {
        LaunchMode::Open(Box::new(SystemOpener))
    };
    let mut app = App::new(roster, &config, launch);
    if let Some(warning) = warning {
        app.notification.show_warning(warning);
    }

    // Initialize terminal (handles raw mode, alternate screen, etc.)
    let terminal = ratatui::init();
    execute!(io::stdout(), EnableMouseCapture, EnableBracketedPaste)?;

    let result = run(terminal, &mut app);

    // Restore terminal (automatic cleanup)
    let _ = execute!(io::stdout(), DisableMouseCapture, DisableBracketedPaste);
    ratatui::restore();

    result?;

    if let Some(output) = app.take_output() {
        println!("{}", output);
    }

    Ok(())
}

fn run(mut terminal: DefaultTerminal, app: &mut App) -> Result<()> {
    while !app.should_quit() {
        terminal.draw(|frame| app.render(frame))?;
        app.handle_events()?;
    }
    Ok(())
}

fn run_filter(roster: Result<Vec<String>, LoadError>, query: &str) -> Result<()> {
    let names = roster?;
    let mut stdout = io::stdout().lock();
    cli::write_matches(&mut stdout, names, query)?;
    stdout.flush()?;
    Ok(())
}

fn run_resolve(
    roster: Result<Vec<String>, LoadError>,
    query: &str,
    config: &Config,
    target_index: usize,
) -> Result<()> {
    let names = roster?;
    let target = config.targets.get(target_index).ok_or_else(|| {
        eyre!(
            "No target at index {} ({} configured)",
            target_index,
            config.targets.len()
        )
    })?;

    let mut stdout = io::stdout().lock();
    if cli::write_resolved(&mut stdout, names, query, target)?.is_none() {
        bail!("No name matches '{}'", query);
    }
    stdout.flush()?;
    Ok(())
}
