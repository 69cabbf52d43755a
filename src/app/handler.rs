//! Input event handlers
//!
//! This module contains the input handling logic for different application states.

use crossterm::event::{KeyCode, KeyEvent};

use crate::event::KeyEventExt;

use super::state::{AppState, BrowseState, StateKind};

/// Actions that can result from handling input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// No action needed
    None,
    /// Quit the application
    Quit,
    /// Cancel in-flight operations and quit
    CancelAndQuit,
    /// Run a repository search for the given language title
    Search(String),
    /// Re-run the catalog load
    ReloadCatalog,
    /// Show warning message
    ShowWarning(String),
}

/// Handle key events based on current state
pub fn handle_key(state: &mut AppState, key: KeyEvent) -> Action {
    match state.kind() {
        StateKind::Loading => {
            if key.is_quit() {
                Action::CancelAndQuit
            } else {
                Action::None
            }
        }
        StateKind::CatalogError => match key.code {
            KeyCode::Char('r') => Action::ReloadCatalog,
            _ => Action::Quit,
        },
        StateKind::Browse => {
            if key.is_ctrl_c() {
                return Action::CancelAndQuit;
            }
            if let AppState::Browse(browse) = state {
                handle_browse_key(browse, key)
            } else {
                Action::None
            }
        }
        StateKind::Quitting => Action::None,
    }
}

/// Handle key events in the browse view
fn handle_browse_key(browse: &mut BrowseState, key: KeyEvent) -> Action {
    if browse.picker_open {
        return handle_picker_key(browse, key);
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        KeyCode::Enter | KeyCode::Char(' ') => {
            browse.toggle_picker();
            Action::None
        }
        // Refresh re-runs the search from scratch; an in-flight search is
        // simply superseded, so there is no busy gate here.
        KeyCode::Char('r') => match &browse.selected {
            Some(lang) => Action::Search(lang.title.clone()),
            None => Action::ShowWarning("Select a language first".to_string()),
        },
        _ => Action::None,
    }
}

/// Handle key events while the language picker is open
fn handle_picker_key(browse: &mut BrowseState, key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => {
            browse.toggle_picker();
            Action::None
        }
        KeyCode::Char('j') | KeyCode::Down => {
            browse.cursor_down();
            Action::None
        }
        KeyCode::Char('k') | KeyCode::Up => {
            browse.cursor_up();
            Action::None
        }
        KeyCode::Enter | KeyCode::Char(' ') => match browse.select_at_cursor() {
            Some(lang) => Action::Search(lang.title),
            None => Action::None,
        },
        _ => Action::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Language;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::from(code)
    }

    fn browse_state() -> AppState {
        AppState::Browse(BrowseState::new(vec![
            Language {
                title: "Go".to_string(),
                value: "go".to_string(),
            },
            Language {
                title: "Rust".to_string(),
                value: "rust".to_string(),
            },
        ]))
    }

    #[test]
    fn test_picker_selection_searches_by_title() {
        let mut state = browse_state();

        assert_eq!(handle_key(&mut state, key(KeyCode::Enter)), Action::None);
        assert_eq!(handle_key(&mut state, key(KeyCode::Down)), Action::None);
        let action = handle_key(&mut state, key(KeyCode::Enter));

        assert_eq!(action, Action::Search("Rust".to_string()));
        if let AppState::Browse(b) = &state {
            assert!(!b.picker_open);
            assert_eq!(b.selected_title(), "Rust");
        } else {
            panic!("expected browse state");
        }
    }

    #[test]
    fn test_refresh_requires_selection() {
        let mut state = browse_state();

        let action = handle_key(&mut state, key(KeyCode::Char('r')));
        assert_eq!(
            action,
            Action::ShowWarning("Select a language first".to_string())
        );
    }

    #[test]
    fn test_refresh_reuses_selected_title() {
        let mut state = browse_state();
        if let AppState::Browse(b) = &mut state {
            b.select_title("Go");
        }

        let action = handle_key(&mut state, key(KeyCode::Char('r')));
        assert_eq!(action, Action::Search("Go".to_string()));
    }

    #[test]
    fn test_escape_closes_picker_before_quitting() {
        let mut state = browse_state();

        handle_key(&mut state, key(KeyCode::Enter));
        assert_eq!(handle_key(&mut state, key(KeyCode::Esc)), Action::None);
        assert_eq!(handle_key(&mut state, key(KeyCode::Esc)), Action::Quit);
    }

    #[test]
    fn test_catalog_error_retry() {
        let mut state = AppState::CatalogError("offline".to_string());

        assert_eq!(
            handle_key(&mut state, key(KeyCode::Char('r'))),
            Action::ReloadCatalog
        );
        assert_eq!(handle_key(&mut state, key(KeyCode::Char('x'))), Action::Quit);
    }
}
