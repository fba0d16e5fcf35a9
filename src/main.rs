//! timedial - full-screen terminal menu
//!
//! Run without arguments to start the menu, or use subcommands for CLI mode.

use std::fs::{self, OpenOptions};
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use clap::Parser;
use ratatui::backend::CrosstermBackend;
use tracing_subscriber::EnvFilter;

use timedial::cli::commands::{Cli, Commands};
use timedial::cli::{check, config};
use timedial::core::config::Config;
use timedial::error::Result;
use timedial::menu::{builtin_providers, load_menu};
use timedial::tui::status::ClockStatus;
use timedial::tui::terminal::install_panic_hook;
use timedial::tui::{App, Navigator, Screen};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let config_path = match cli.config {
        Some(path) => path,
        None => Config::config_path()?,
    };

    match cli.command {
        // No subcommand - launch TUI mode
        None => {
            let config = Config::load_from(&config_path)?;
            init_file_logging(&config);
            run_tui(cli.menu, &config)
        }

        Some(Commands::Check) => {
            init_stderr_logging();
            let config = Config::load_from(&config_path)?;
            let menu = cli.menu.unwrap_or_else(|| config.menu_file.clone());
            check::handle_check(&menu, &config)
        }

        Some(Commands::Config(args)) => config::handle_config(args.command, &config_path),
    }
}

/// Run the TUI application
fn run_tui(menu: Option<PathBuf>, config: &Config) -> Result<()> {
    let menu_path = menu.unwrap_or_else(|| config.menu_file.clone());
    let providers = builtin_providers(config);

    // A broken menu aborts before the screen is touched
    let root = load_menu(&menu_path, &providers)?;
    tracing::info!("Loaded {} menu entries from {}", root.len(), menu_path.display());
    let navigator = Navigator::new(root, providers);

    let term = std::env::var("TERM").unwrap_or_else(|_| "unknown".to_string());
    install_panic_hook();
    let screen = Screen::new(CrosstermBackend::new(io::stdout()));
    let mut app = App::new(screen, navigator, term)
        .with_status(ClockStatus, config.status_interval());
    app.run()
}

/// Log to a file; the terminal belongs to the interface
fn init_file_logging(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let file = config.log_path().and_then(|path| {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        Ok(OpenOptions::new().create(true).append(true).open(&path)?)
    });

    match file {
        Ok(file) => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .init();
        }
        Err(e) => eprintln!("Warning: logging disabled: {}", e),
    }
}

fn init_stderr_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
