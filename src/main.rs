use std::io::{self, Write};

use clap::Parser;
use color_eyre::eyre::eyre;
use color_eyre::Result;
use tracing_subscriber::EnvFilter;

use ridership::cli::args::{Args, Commands};
use ridership::cli::console::Console;
use ridership::cli::menu;
use ridership::commands::{print_stats, Session};
use ridership::config::Settings;
use ridership::constants;
use ridership::db::Database;
use ridership::ui::TerminalPlotter;

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();
    init_tracing(args.verbose)?;

    let (settings, source) = Settings::load(args.config.as_deref())?;
    tracing::info!(%source, "configuration loaded");
    let settings = settings.with_overrides(args.database, args.no_plot);

    let db = Database::open(&settings.database)?;

    match args.command.unwrap_or(Commands::Shell) {
        Commands::Stats => print_stats(&db, &mut io::stdout().lock()),
        Commands::Shell => run_shell(&db, &settings),
    }
}

fn run_shell(db: &Database, settings: &Settings) -> Result<()> {
    let mut out = io::stdout().lock();
    writeln!(out, "{}", constants::BANNER)?;
    writeln!(out)?;
    print_stats(db, &mut out)?;

    let console = Console::new(io::stdin().lock(), out);
    let mut plotter = TerminalPlotter;
    let mut session = Session::new(db, console, &mut plotter, settings.plots);
    menu::run(&mut session)
}

fn init_tracing(verbose: bool) -> Result<()> {
    let level = if verbose { "debug" } else { "warn" };

    let filter = EnvFilter::try_from_env(constants::LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|error| eyre!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
