mod app;
mod board_view;
mod cli;
mod dialogs;
mod error;
mod event;
mod logging;
mod model;
mod operations;
mod storage;
mod theme;
mod ui;
mod ui_state;

use std::io;
use std::panic;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;
use ratatui::DefaultTerminal;

use app::App;
use cli::Cli;
use error::Result;
use storage::board::BoardStore;
use storage::config::{self, Config};

/// Auto-refresh interval in seconds
const AUTO_REFRESH_INTERVAL_SECS: u64 = 5;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let (config, config_error) = config::load_config();

    // 日志失败不影响使用
    if let Err(e) = logging::init(&logging::log_path(), &config.log.filter) {
        eprintln!("Warning: {}", e);
    }
    if let Some(e) = config_error {
        tracing::warn!(error = %e, "invalid config, using defaults");
        eprintln!("Warning: {}, using defaults", e);
    }

    match run_command(cli, config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "command failed");
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run_command(cli: Cli, config: Config) -> Result<()> {
    let db_path = cli.db.unwrap_or_else(|| config.database.resolve_path());
    let mut store = BoardStore::open(&db_path, &config.database)?;

    match cli.command {
        Some(command) => cli::execute(command, &mut store, &config),
        None => run_tui(store, config),
    }
}

/// 启动 TUI 界面
fn run_tui(store: BoardStore, config: Config) -> Result<()> {
    let mut app = App::new(store, config, Some(config::config_path()))?;

    // Set up panic hook to restore terminal state on panic
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        ratatui::restore();
        original_hook(panic_info);
    }));

    let mut terminal = ratatui::init();
    tracing::info!("tui started");
    let result = run(&mut terminal, &mut app);
    ratatui::restore();
    tracing::info!("tui stopped");

    result?;
    Ok(())
}

fn run(terminal: &mut DefaultTerminal, app: &mut App) -> io::Result<()> {
    let mut last_refresh = Instant::now();

    loop {
        // 定时自动刷新，拾取其他进程（如 CLI）的改动
        if last_refresh.elapsed().as_secs() >= AUTO_REFRESH_INTERVAL_SECS {
            app.refresh();
            last_refresh = Instant::now();
        }

        terminal.draw(|frame| ui::board::render(frame, app))?;

        if !event::handle_events(app)? {
            break;
        }
    }

    Ok(())
}
