//! Application core module
//!
//! This module contains the main application logic, including:
//! - `App`: The main application struct
//! - `state`: State types for the views
//! - `handler`: Input event handling

pub mod handler;
pub mod state;

use std::time::Duration;

use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::error::{ApiError, AppResult};
use crate::event::poll_key;
use crate::model::{pick_random, RepoSummary, StatusMessage};
use crate::service::{CatalogOperations, CatalogService, GithubService, SearchOperations};
use crate::tui::Tui;
use crate::ui::render;

pub use handler::Action;
pub use state::{AppState, BrowseState, SearchState, StateKind, TaskResult, SELECTION_PROMPT};

/// Main application struct
pub struct App<C = CatalogService, S = GithubService>
where
    C: CatalogOperations + 'static,
    S: SearchOperations + 'static,
{
    /// Current state
    state: AppState,
    /// Catalog service
    catalog: C,
    /// Search service
    github: S,
    /// Cancellation token for async operations
    cancel_token: CancellationToken,
    /// Status message to display
    status_message: Option<StatusMessage>,
    /// Tick count for animations
    tick_count: u64,
    /// Sequence number of the most recent search; responses carrying an
    /// older sequence are discarded
    fetch_seq: u64,
    /// Language title to apply once the catalog arrives
    preselect: Option<String>,
    /// Channel for receiving task results
    task_rx: mpsc::UnboundedReceiver<TaskResult>,
    /// Channel for sending task results
    task_tx: mpsc::UnboundedSender<TaskResult>,
}

impl App {
    /// Create a new application instance backed by the real services
    pub fn new(preselect: Option<String>) -> Self {
        let cancel_token = CancellationToken::new();
        let catalog = CatalogService::new(cancel_token.clone());
        let github = GithubService::new(cancel_token.clone());
        Self::build(catalog, github, cancel_token).with_preselect(preselect)
    }
}

impl<C, S> App<C, S>
where
    C: CatalogOperations + 'static,
    S: SearchOperations + 'static,
{
    /// Create an application instance with explicit services
    pub fn with_services(catalog: C, github: S) -> Self {
        Self::build(catalog, github, CancellationToken::new())
    }

    fn build(catalog: C, github: S, cancel_token: CancellationToken) -> Self {
        let (task_tx, task_rx) = mpsc::unbounded_channel();
        Self {
            state: AppState::Loading,
            catalog,
            github,
            cancel_token,
            status_message: None,
            tick_count: 0,
            fetch_seq: 0,
            preselect: None,
            task_rx,
            task_tx,
        }
    }

    /// Set a language title to select once the catalog loads
    pub fn with_preselect(mut self, language: Option<String>) -> Self {
        self.preselect = language;
        self
    }

    /// Current application state
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Current status message, if any
    pub fn status_message(&self) -> Option<&StatusMessage> {
        self.status_message.as_ref()
    }

    /// Run the application main loop
    pub async fn run(&mut self, tui: &mut Tui) -> AppResult<()> {
        // Start loading the catalog in background
        self.spawn_load_catalog();

        loop {
            // Check for quit state
            if matches!(self.state, AppState::Quitting) {
                break;
            }

            // Draw the UI
            tui.draw(|frame| self.render(frame))?;

            // Poll for key events (non-blocking with short timeout)
            if let Some(key) = poll_key(Duration::from_millis(16)) {
                self.handle_key(key).await;
            }

            // Check for background task results (non-blocking)
            while let Ok(result) = self.task_rx.try_recv() {
                self.handle_task_result(result);
            }

            // Increment tick for animations
            self.tick_count = self.tick_count.wrapping_add(1);

            // Clear expired status messages
            if let Some(ref msg) = self.status_message {
                if msg.is_expired() {
                    self.status_message = None;
                }
            }
        }

        Ok(())
    }

    /// Render the application UI
    fn render(&mut self, frame: &mut ratatui::Frame) {
        match &mut self.state {
            AppState::Loading => {
                render::render_loading(frame, "Loading language catalog...", self.tick_count);
            }
            AppState::CatalogError(msg) => {
                render::render_catalog_error(frame, msg);
            }
            AppState::Browse(browse) => {
                render::render_browser(
                    frame,
                    browse,
                    self.status_message.as_ref(),
                    self.tick_count,
                );
            }
            AppState::Quitting => {}
        }
    }

    /// Handle a key event
    pub async fn handle_key(&mut self, key: crossterm::event::KeyEvent) {
        let action = handler::handle_key(&mut self.state, key);
        self.execute_action(action).await;
    }

    /// Execute an action returned from input handling
    async fn execute_action(&mut self, action: Action) {
        match action {
            Action::None => {}
            Action::Quit => {
                self.state = AppState::Quitting;
            }
            Action::CancelAndQuit => {
                self.cancel_token.cancel();
                self.state = AppState::Quitting;
            }
            Action::ReloadCatalog => {
                self.status_message = None;
                self.state = AppState::Loading;
                self.spawn_load_catalog();
            }
            Action::Search(title) => {
                self.fetch_seq += 1;
                let seq = self.fetch_seq;
                if let AppState::Browse(browse) = &mut self.state {
                    browse.search = SearchState::Loading;
                }
                self.status_message = Some(StatusMessage::info(format!(
                    "Searching {} repositories...",
                    title
                )));
                self.spawn_search(seq, title);
            }
            Action::ShowWarning(msg) => {
                self.status_message = Some(StatusMessage::warning(msg));
            }
        }
    }

    /// Handle a result from a background task
    pub fn handle_task_result(&mut self, result: TaskResult) {
        match result {
            TaskResult::CatalogLoaded(Ok(languages)) => {
                info!(count = languages.len(), "Language catalog loaded");
                let mut browse = BrowseState::new(languages);

                if let Some(wanted) = self.preselect.take() {
                    match browse.select_title(&wanted) {
                        Some(lang) => {
                            browse.search = SearchState::Loading;
                            self.fetch_seq += 1;
                            self.spawn_search(self.fetch_seq, lang.title);
                        }
                        None => {
                            self.status_message = Some(StatusMessage::warning(format!(
                                "No catalog entry matches '{}'",
                                wanted
                            )));
                        }
                    }
                }

                self.state = AppState::Browse(browse);
            }
            TaskResult::CatalogLoaded(Err(e)) => {
                warn!(error = %e, "Failed to load language catalog");
                self.state =
                    AppState::CatalogError(format!("Failed to load language catalog: {}", e));
            }
            TaskResult::SearchFinished { seq, result } => {
                if seq != self.fetch_seq {
                    debug!(seq, current = self.fetch_seq, "Ignoring superseded search response");
                    return;
                }

                let settled = settle_search(result);
                self.status_message = match &settled {
                    SearchState::Loaded(repo) => {
                        Some(StatusMessage::success(format!("Found {}", repo.full_name)))
                    }
                    _ => None,
                };

                if let AppState::Browse(browse) = &mut self.state {
                    browse.search = settled;
                }
            }
        }
    }

    /// Spawn a background task to load the language catalog
    fn spawn_load_catalog(&self) {
        let catalog = self.catalog.clone();
        let tx = self.task_tx.clone();

        tokio::spawn(async move {
            let result = catalog.load_catalog().await;
            let _ = tx.send(TaskResult::CatalogLoaded(result));
        });
    }

    /// Spawn a background task to search repositories
    fn spawn_search(&self, seq: u64, language: String) {
        let github = self.github.clone();
        let tx = self.task_tx.clone();

        tokio::spawn(async move {
            let result = github.search_repositories(&language).await;
            let _ = tx.send(TaskResult::SearchFinished { seq, result });
        });
    }
}

/// Map a settled search response onto the search slot. The underlying
/// failure is logged; the UI only ever sees the fixed messages.
fn settle_search(result: Result<Vec<RepoSummary>, ApiError>) -> SearchState {
    match result {
        Ok(items) => match pick_random(items) {
            Some(repo) => SearchState::Loaded(repo),
            None => SearchState::Failed("No repositories found.".to_string()),
        },
        Err(e) => {
            warn!(error = %e, "Repository search failed");
            SearchState::Failed("Error fetching repositories.".to_string())
        }
    }
}
