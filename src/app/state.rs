//! Application state types
//!
//! This module contains all the state types used by the application,
//! including the main AppState enum and the browse-view state.

use ratatui::widgets::ListState;

use crate::error::ApiError;
use crate::model::{Language, RepoSummary};

/// Label shown in the selector before any language is chosen.
pub const SELECTION_PROMPT: &str = "Select a language";

/// Application state machine
#[derive(Debug)]
pub enum AppState {
    /// Loading the language catalog
    Loading,
    /// The catalog could not be loaded
    CatalogError(String),
    /// Main view: language picker plus search output
    Browse(BrowseState),
    /// Quitting
    Quitting,
}

impl AppState {
    /// Get the kind of state for pattern matching without borrowing
    pub fn kind(&self) -> StateKind {
        match self {
            AppState::Loading => StateKind::Loading,
            AppState::CatalogError(_) => StateKind::CatalogError,
            AppState::Browse(_) => StateKind::Browse,
            AppState::Quitting => StateKind::Quitting,
        }
    }
}

/// Simple enum for state discrimination without borrowing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateKind {
    Loading,
    CatalogError,
    Browse,
    Quitting,
}

/// Outcome of the search slot. Exactly one variant is observable at a
/// time; a new search replaces the whole slot.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchState {
    /// Nothing selected yet
    Idle,
    /// A search is in flight
    Loading,
    /// The search settled with a user-facing message
    Failed(String),
    /// The search settled with a repository
    Loaded(RepoSummary),
}

/// State for the browse view
#[derive(Debug)]
pub struct BrowseState {
    /// Catalog entries in response order
    pub languages: Vec<Language>,
    /// True while the language picker is open
    pub picker_open: bool,
    /// Cursor position within the picker
    pub cursor: usize,
    /// List widget state for rendering
    pub list_state: ListState,
    /// Currently selected language, None until the first pick
    pub selected: Option<Language>,
    /// The search slot
    pub search: SearchState,
}

impl BrowseState {
    /// Create a new BrowseState from a loaded catalog
    pub fn new(languages: Vec<Language>) -> Self {
        let mut list_state = ListState::default();
        if !languages.is_empty() {
            list_state.select(Some(0));
        }
        Self {
            languages,
            picker_open: false,
            cursor: 0,
            list_state,
            selected: None,
            search: SearchState::Idle,
        }
    }

    /// Open or close the picker
    pub fn toggle_picker(&mut self) {
        self.picker_open = !self.picker_open;
    }

    /// Move cursor down
    pub fn cursor_down(&mut self) {
        if self.cursor < self.languages.len().saturating_sub(1) {
            self.cursor += 1;
            self.list_state.select(Some(self.cursor));
        }
    }

    /// Move cursor up
    pub fn cursor_up(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            self.list_state.select(Some(self.cursor));
        }
    }

    /// Label for the selector: the selected title, or the prompt.
    pub fn selected_title(&self) -> &str {
        self.selected
            .as_ref()
            .map(|l| l.title.as_str())
            .unwrap_or(SELECTION_PROMPT)
    }

    /// Select the entry under the cursor and close the picker.
    /// Returns the chosen language so the caller can start a search.
    pub fn select_at_cursor(&mut self) -> Option<Language> {
        let lang = self.languages.get(self.cursor).cloned()?;
        self.selected = Some(lang.clone());
        self.picker_open = false;
        Some(lang)
    }

    /// Select a catalog entry by title, case-insensitively.
    pub fn select_title(&mut self, title: &str) -> Option<Language> {
        let idx = self.languages.iter().position(|l| l.matches_title(title))?;
        self.cursor = idx;
        self.list_state.select(Some(idx));
        let lang = self.languages[idx].clone();
        self.selected = Some(lang.clone());
        Some(lang)
    }
}

/// Messages from background tasks
#[derive(Debug)]
pub enum TaskResult {
    /// Language catalog loaded
    CatalogLoaded(Result<Vec<Language>, ApiError>),
    /// A repository search settled; `seq` identifies the request so
    /// superseded responses can be discarded
    SearchFinished {
        seq: u64,
        result: Result<Vec<RepoSummary>, ApiError>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lang(title: &str, value: &str) -> Language {
        Language {
            title: title.to_string(),
            value: value.to_string(),
        }
    }

    fn browse() -> BrowseState {
        BrowseState::new(vec![
            lang("Go", "go"),
            lang("Rust", "rust"),
            lang("Emacs Lisp", "emacs-lisp"),
        ])
    }

    #[test]
    fn test_cursor_clamps_at_edges() {
        let mut b = browse();
        b.cursor_up();
        assert_eq!(b.cursor, 0);

        b.cursor_down();
        b.cursor_down();
        b.cursor_down();
        assert_eq!(b.cursor, 2);
    }

    #[test]
    fn test_select_at_cursor_closes_picker() {
        let mut b = browse();
        b.toggle_picker();
        b.cursor_down();

        let picked = b.select_at_cursor().unwrap();
        assert_eq!(picked.title, "Rust");
        assert_eq!(b.selected_title(), "Rust");
        assert!(!b.picker_open);
    }

    #[test]
    fn test_select_at_cursor_empty_catalog() {
        let mut b = BrowseState::new(Vec::new());
        assert_eq!(b.select_at_cursor(), None);
        assert_eq!(b.selected_title(), SELECTION_PROMPT);
    }

    #[test]
    fn test_select_title_case_insensitive() {
        let mut b = browse();
        let picked = b.select_title("emacs lisp").unwrap();
        assert_eq!(picked.title, "Emacs Lisp");
        assert_eq!(b.cursor, 2);

        assert_eq!(b.select_title("COBOL"), None);
    }
}
