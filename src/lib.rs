//! reposcout - A TUI for discovering popular GitHub repositories by language
//!
//! This library provides the core functionality for the reposcout TUI
//! application, which lets users:
//!
//! - Pick a programming language from a remotely loaded catalog
//! - Fetch one random repository from the top search results for it
//! - Inspect stars, forks, open issues and the repository page URL
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//!
//! - [`app`]: Application core with state management and event handling
//! - [`error`]: Error types for the application
//! - [`model`]: Domain models for languages, repositories and status lines
//! - [`service`]: Clients for the catalog resource and the search API
//! - [`ui`]: UI rendering and theming
//!
//! # Example
//!
//! ```rust,no_run
//! use reposcout::{App, Tui};
//!
//! #[tokio::main]
//! async fn main() -> reposcout::AppResult<()> {
//!     let mut tui = Tui::new()?;
//!     let mut app = App::new(None);
//!     app.run(&mut tui).await
//! }
//! ```

pub mod app;
pub mod config;
pub mod error;
pub mod event;
pub mod model;
pub mod service;
pub mod tui;
pub mod ui;
pub mod util;

// Re-export commonly used types at the crate root
pub use app::{
    Action, App, AppState, BrowseState, SearchState, TaskResult, SELECTION_PROMPT,
};
pub use config::{Endpoints, ServiceConfig, Timeouts};
pub use error::{ApiError, AppError, AppResult};
pub use model::{Language, RepoSummary, StatusLevel, StatusMessage};
pub use service::{CatalogOperations, CatalogService, GithubService, SearchOperations};
pub use tui::Tui;
