//! TUI application for stackview
//!
//! Built with Ratatui: a stack overview and a per-service detail page.

pub mod app;
mod clipboard;
mod demo;
pub mod detail_state;
mod event;
pub mod ui;

pub use clipboard::copy_to_clipboard;

pub use app::{App, AppError, AppResult, CopyFn, View};
pub use demo::{demo_key, demo_stack};
pub use detail_state::{DetailRow, DetailState};
pub use event::{Event, EventHandler};

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use stackview_config::GlobalConfig;
use stackview_core::{StackKey, StackStore};
use std::io;
use std::sync::Arc;
use tracing_subscriber::layer::SubscriberExt;

/// Browse a stack, opening `service` directly when given
pub async fn run(
    store: Arc<StackStore>,
    config: GlobalConfig,
    key: StackKey,
    service: Option<String>,
) -> AppResult<()> {
    let app = App::new(store, config, key, service).await?;
    run_app(app).await
}

/// Run the TUI on the built-in demo stack
pub async fn run_demo(config: GlobalConfig) -> AppResult<()> {
    let app = App::from_snapshot(config, demo_key(), demo_stack());
    run_app(app).await
}

async fn run_app(mut app: App) -> AppResult<()> {
    // Logs would corrupt the screen; the guard restores the previous subscriber on drop
    let _guard = tracing::subscriber::set_default(
        tracing_subscriber::registry().with(tracing_subscriber::layer::Identity::new()),
    );

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = app.run(&mut terminal).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}
