//! Main TUI application state and logic

use crate::clipboard::copy_to_clipboard;
use crate::detail_state::DetailState;
use crate::event::{Event, EventHandler};
use crate::ui;
use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::prelude::*;
use ratatui::widgets::TableState;
use stackview_config::GlobalConfig;
use stackview_core::{
    resolve_route, Navigation, ServiceRoute, Stack, StackKey, StackOverview, StackStore,
    StaticStackSource,
};
use std::sync::Arc;
use std::time::Instant;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Core error: {0}")]
    Core(#[from] stackview_core::CoreError),
}

pub type AppResult<T> = Result<T, AppError>;

/// Copies text somewhere, reporting failures as a message
pub type CopyFn = fn(&str) -> Result<(), String>;

/// Current view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    /// Services of the stack; also where missing services redirect to
    StackOverview,
    /// One service's detail page
    ServiceDetail,
    Help,
}

/// Application state
pub struct App {
    pub store: Arc<StackStore>,
    pub config: GlobalConfig,
    /// Stack being browsed
    pub key: StackKey,
    /// Latest snapshot of that stack
    pub stack: Arc<Stack>,
    pub overview: StackOverview,
    pub view: View,
    /// View to return to when help is closed
    pub help_return: View,
    /// Selected service index in the overview
    pub selected: usize,
    pub overview_table_state: TableState,
    /// Open service page, if any
    pub detail: Option<DetailState>,
    /// Status message
    pub status_message: Option<String>,
    /// Last text successfully handed to the clipboard
    pub last_copied: Option<String>,
    pub should_quit: bool,
    pub copy_fn: CopyFn,
    last_refresh: Instant,
}

impl App {
    /// Load the stack from the store and open `service`, or the overview if none is given
    pub async fn new(
        store: Arc<StackStore>,
        config: GlobalConfig,
        key: StackKey,
        service: Option<String>,
    ) -> AppResult<Self> {
        let stack = store.get(&key).await?;
        let mut app = Self::with_store(store, config, key, stack);
        if let Some(service) = service {
            app.open_service(&service);
        }
        Ok(app)
    }

    /// App over an in-memory snapshot (demo mode and tests)
    pub fn from_snapshot(config: GlobalConfig, key: StackKey, stack: Stack) -> Self {
        let source = StaticStackSource::new().with_stack(key.clone(), stack.clone());
        let store = Arc::new(StackStore::new(Arc::new(source)));
        Self::with_store(store, config, key, Arc::new(stack))
    }

    fn with_store(
        store: Arc<StackStore>,
        config: GlobalConfig,
        key: StackKey,
        stack: Arc<Stack>,
    ) -> Self {
        let overview = StackOverview::from_stack(&stack);
        let mut overview_table_state = TableState::default();
        if !overview.is_empty() {
            overview_table_state.select(Some(0));
        }

        Self {
            store,
            config,
            key,
            stack,
            overview,
            view: View::StackOverview,
            help_return: View::StackOverview,
            selected: 0,
            overview_table_state,
            detail: None,
            status_message: None,
            last_copied: None,
            should_quit: false,
            copy_fn: copy_to_clipboard,
            last_refresh: Instant::now(),
        }
    }

    /// Run the application main loop
    pub async fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> AppResult<()> {
        let mut events = EventHandler::new(self.config.tui.tick_rate());

        while !self.should_quit {
            terminal.draw(|frame| ui::draw(frame, self))?;

            if let Some(event) = events.next().await {
                self.handle_event(event).await?;
            }
        }

        Ok(())
    }

    async fn handle_event(&mut self, event: Event) -> AppResult<()> {
        match event {
            Event::Key(key) => self.handle_key(key.code, key.modifiers).await?,
            Event::Tick => self.on_tick().await,
            Event::Resize(_, _) => {}
        }
        Ok(())
    }

    /// Reload the snapshot once the configured refresh interval has passed
    pub async fn on_tick(&mut self) {
        let Some(interval) = self.config.tui.refresh_interval() else {
            return;
        };
        if self.last_refresh.elapsed() >= interval {
            self.reload().await;
        }
    }

    /// Simulate a key press (for testing)
    pub async fn send_key(&mut self, code: KeyCode, modifiers: KeyModifiers) -> AppResult<()> {
        self.handle_key(code, modifiers).await
    }

    async fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) -> AppResult<()> {
        if self.view == View::Help {
            self.view = self.help_return;
            return Ok(());
        }

        match code {
            KeyCode::Char('?') | KeyCode::F(1) => {
                self.help_return = self.view;
                self.view = View::Help;
                return Ok(());
            }
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
                return Ok(());
            }
            KeyCode::Char('r') | KeyCode::F(5) => {
                self.reload().await;
                return Ok(());
            }
            _ => {}
        }

        match self.view {
            View::StackOverview => self.handle_overview_key(code),
            View::ServiceDetail => self.handle_detail_key(code),
            View::Help => {}
        }

        Ok(())
    }

    fn handle_overview_key(&mut self, code: KeyCode) {
        let count = self.overview.services.len();
        match code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('j') | KeyCode::Down if count > 0 => {
                self.selected = (self.selected + 1) % count;
                self.overview_table_state.select(Some(self.selected));
            }
            KeyCode::Char('k') | KeyCode::Up if count > 0 => {
                self.selected = if self.selected == 0 {
                    count - 1
                } else {
                    self.selected - 1
                };
                self.overview_table_state.select(Some(self.selected));
            }
            KeyCode::Char('g') | KeyCode::Home if count > 0 => {
                self.selected = 0;
                self.overview_table_state.select(Some(0));
            }
            KeyCode::Char('G') | KeyCode::End if count > 0 => {
                self.selected = count - 1;
                self.overview_table_state.select(Some(self.selected));
            }
            KeyCode::Enter => {
                if let Some(name) = self.overview.services.get(self.selected).map(|s| s.name.clone())
                {
                    self.open_service(&name);
                }
            }
            _ => {}
        }
    }

    fn handle_detail_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => self.close_detail(),
            KeyCode::Char('y') | KeyCode::Char('c') => self.copy_focused(),
            KeyCode::Char('Y') => self.copy_dotenv(),
            _ => {
                let Some(detail) = self.detail.as_mut() else {
                    return;
                };
                match code {
                    KeyCode::Char('j') | KeyCode::Down => detail.select_next(),
                    KeyCode::Char('k') | KeyCode::Up => detail.select_prev(),
                    KeyCode::Tab => detail.next_section(),
                    KeyCode::BackTab => detail.prev_section(),
                    KeyCode::Enter | KeyCode::Char(' ') => {
                        detail.toggle_focused();
                    }
                    _ => {}
                }
            }
        }
    }

    /// Open a service page with fresh reveal and panel state, or redirect to the overview
    pub fn open_service(&mut self, service: &str) {
        let route = ServiceRoute::new(self.key.clone(), service);
        match resolve_route(&self.stack, &route, &self.config.display.internal_domain) {
            Navigation::Service(details) => {
                if let Some(pos) = self.overview.position(service) {
                    self.selected = pos;
                    self.overview_table_state.select(Some(pos));
                }
                self.detail = Some(DetailState::new(*details));
                self.view = View::ServiceDetail;
            }
            Navigation::Redirect(_) => self.show_overview(),
        }
    }

    fn close_detail(&mut self) {
        self.detail = None;
        self.view = View::StackOverview;
    }

    fn show_overview(&mut self) {
        self.detail = None;
        self.view = View::StackOverview;
        if self.help_return == View::ServiceDetail {
            self.help_return = View::StackOverview;
        }
    }

    /// Re-fetch the snapshot and re-derive whatever is on screen
    pub async fn reload(&mut self) {
        self.last_refresh = Instant::now();
        match self.store.refresh(&self.key).await {
            Ok(stack) => self.apply_snapshot(stack),
            Err(e) => {
                tracing::warn!("Failed to reload {}: {}", self.key, e);
                self.status_message = Some(format!("Reload failed: {}", e));
            }
        }
    }

    fn apply_snapshot(&mut self, stack: Arc<Stack>) {
        self.stack = stack;
        self.overview = StackOverview::from_stack(&self.stack);

        let count = self.overview.services.len();
        if count == 0 {
            self.selected = 0;
            self.overview_table_state.select(None);
        } else {
            self.selected = self.selected.min(count - 1);
            self.overview_table_state.select(Some(self.selected));
        }

        let Some(service) = self.detail.as_ref().map(|d| d.details.name.clone()) else {
            return;
        };
        let route = ServiceRoute::new(self.key.clone(), service);
        match resolve_route(&self.stack, &route, &self.config.display.internal_domain) {
            Navigation::Service(details) => {
                if let Some(detail) = self.detail.as_mut() {
                    detail.update(*details);
                }
            }
            Navigation::Redirect(_) => self.show_overview(),
        }
    }

    fn copy_focused(&mut self) {
        let target = self.detail.as_ref().and_then(|d| d.copy_target());
        match target {
            Some((value, label)) => self.copy(&value, &label),
            None => self.status_message = Some("Nothing to copy on this row".to_string()),
        }
    }

    fn copy_dotenv(&mut self) {
        if let Some(dotenv) = self.detail.as_ref().map(|d| d.details.dotenv()) {
            self.copy(&dotenv, "variables as .env");
        }
    }

    fn copy(&mut self, value: &str, label: &str) {
        match (self.copy_fn)(value) {
            Ok(()) => {
                self.last_copied = Some(value.to_string());
                self.status_message = Some(format!("Copied {}", label));
            }
            Err(e) => {
                tracing::warn!("Clipboard copy failed: {}", e);
                self.status_message = Some(e);
            }
        }
    }

    pub fn selected_service(&self) -> Option<&str> {
        self.overview
            .services
            .get(self.selected)
            .map(|s| s.name.as_str())
    }
}
