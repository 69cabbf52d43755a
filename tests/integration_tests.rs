//! Integration tests for reposcout
//!
//! These drive the selection/fetch/render state machine directly with
//! canned task results and key events. Stub services stand in for the
//! remote endpoints; no test touches the network.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent};

use reposcout::{
    ApiError, App, AppState, CatalogOperations, Language, RepoSummary, SearchOperations,
    SearchState, TaskResult, SELECTION_PROMPT,
};

#[derive(Clone)]
struct StaticCatalog(Vec<Language>);

impl CatalogOperations for StaticCatalog {
    async fn load_catalog(&self) -> Result<Vec<Language>, ApiError> {
        Ok(self.0.clone())
    }
}

/// Search stub that records every query and replies with canned items.
/// Settled outcomes are injected directly through `handle_task_result`,
/// the same path `App::run` drains them from.
#[derive(Clone, Default)]
struct RecordingSearch {
    queries: Arc<Mutex<Vec<String>>>,
    items: Vec<RepoSummary>,
}

impl SearchOperations for RecordingSearch {
    async fn search_repositories(&self, language: &str) -> Result<Vec<RepoSummary>, ApiError> {
        self.queries.lock().unwrap().push(language.to_string());
        Ok(self.items.clone())
    }
}

fn lang(title: &str, value: &str) -> Language {
    Language {
        title: title.to_string(),
        value: value.to_string(),
    }
}

fn repo(name: &str, stars: u64) -> RepoSummary {
    RepoSummary {
        name: name.to_string(),
        full_name: format!("owner/{}", name),
        description: Some(format!("{} does things", name)),
        stars,
        forks: 7,
        open_issues: 3,
        url: format!("https://github.com/owner/{}", name),
        updated_at: None,
    }
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::from(code)
}

fn catalog() -> Vec<Language> {
    vec![
        lang("Go", "go"),
        lang("Rust", "rust"),
        lang("Emacs Lisp", "emacs-lisp"),
    ]
}

fn app_with(
    languages: Vec<Language>,
    search: RecordingSearch,
) -> App<StaticCatalog, RecordingSearch> {
    App::with_services(StaticCatalog(languages), search)
}

/// Loads the catalog into the app and asserts the browse view appeared.
fn load_catalog(app: &mut App<StaticCatalog, RecordingSearch>, languages: Vec<Language>) {
    app.handle_task_result(TaskResult::CatalogLoaded(Ok(languages)));
    assert!(matches!(app.state(), AppState::Browse(_)));
}

/// Drives key events that pick the catalog entry at `idx`.
async fn select_language(app: &mut App<StaticCatalog, RecordingSearch>, idx: usize) {
    app.handle_key(key(KeyCode::Enter)).await;
    for _ in 0..idx {
        app.handle_key(key(KeyCode::Down)).await;
    }
    app.handle_key(key(KeyCode::Enter)).await;
}

fn browse(app: &App<StaticCatalog, RecordingSearch>) -> &reposcout::BrowseState {
    match app.state() {
        AppState::Browse(b) => b,
        other => panic!("expected browse state, got {:?}", other),
    }
}

async fn wait_until(mut cond: impl FnMut() -> bool) {
    for _ in 0..200 {
        if cond() {
            return;
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    panic!("condition not met in time");
}

#[tokio::test]
async fn test_catalog_populates_browse_in_order() {
    let mut app = app_with(catalog(), RecordingSearch::default());
    load_catalog(&mut app, catalog());

    let b = browse(&app);
    assert_eq!(b.languages.len(), 3);
    assert_eq!(b.languages[0].title, "Go");
    assert_eq!(b.languages[2].title, "Emacs Lisp");
    assert_eq!(b.selected_title(), SELECTION_PROMPT);
    assert_eq!(b.search, SearchState::Idle);
}

#[tokio::test]
async fn test_catalog_failure_surfaces_and_retries() {
    let mut app = app_with(catalog(), RecordingSearch::default());
    app.handle_task_result(TaskResult::CatalogLoaded(Err(ApiError::Status(500))));

    match app.state() {
        AppState::CatalogError(msg) => assert!(msg.contains("catalog")),
        other => panic!("expected catalog error, got {:?}", other),
    }

    app.handle_key(key(KeyCode::Char('r'))).await;
    assert!(matches!(app.state(), AppState::Loading));
}

#[tokio::test]
async fn test_selecting_entry_sets_title_and_starts_search() {
    let mut app = app_with(catalog(), RecordingSearch::default());
    load_catalog(&mut app, catalog());

    select_language(&mut app, 1).await;

    let b = browse(&app);
    assert_eq!(b.selected_title(), "Rust");
    assert!(!b.picker_open);
    assert_eq!(b.search, SearchState::Loading);
}

#[tokio::test]
async fn test_search_query_uses_display_title() {
    let search = RecordingSearch::default();
    let queries = search.queries.clone();
    let mut app = app_with(catalog(), search);
    load_catalog(&mut app, catalog());

    select_language(&mut app, 2).await;

    wait_until(|| !queries.lock().unwrap().is_empty()).await;
    // The query is keyed by the human-readable title, not the value field
    assert_eq!(queries.lock().unwrap()[0], "Emacs Lisp");
}

#[tokio::test]
async fn test_result_is_drawn_from_returned_items() {
    let items = vec![repo("a", 10), repo("b", 20), repo("c", 30)];
    let mut app = app_with(catalog(), RecordingSearch::default());
    load_catalog(&mut app, catalog());
    select_language(&mut app, 0).await;

    app.handle_task_result(TaskResult::SearchFinished {
        seq: 1,
        result: Ok(items.clone()),
    });

    match &browse(&app).search {
        SearchState::Loaded(picked) => assert!(items.contains(picked)),
        other => panic!("expected loaded, got {:?}", other),
    }
}

#[tokio::test]
async fn test_empty_results_show_fixed_message() {
    let mut app = app_with(catalog(), RecordingSearch::default());
    load_catalog(&mut app, catalog());
    select_language(&mut app, 0).await;

    app.handle_task_result(TaskResult::SearchFinished {
        seq: 1,
        result: Ok(Vec::new()),
    });

    assert_eq!(
        browse(&app).search,
        SearchState::Failed("No repositories found.".to_string())
    );
}

#[tokio::test]
async fn test_failed_request_shows_fixed_message() {
    let mut app = app_with(catalog(), RecordingSearch::default());
    load_catalog(&mut app, catalog());
    select_language(&mut app, 0).await;

    app.handle_task_result(TaskResult::SearchFinished {
        seq: 1,
        result: Err(ApiError::Request("connection refused".to_string())),
    });

    let b = browse(&app);
    assert_eq!(
        b.search,
        SearchState::Failed("Error fetching repositories.".to_string())
    );
    assert_ne!(b.search, SearchState::Loading);
}

#[tokio::test]
async fn test_refresh_is_idempotent() {
    let items = vec![repo("only", 42)];
    let mut app = app_with(catalog(), RecordingSearch::default());
    load_catalog(&mut app, catalog());

    select_language(&mut app, 0).await;
    app.handle_task_result(TaskResult::SearchFinished {
        seq: 1,
        result: Ok(items.clone()),
    });
    let first = browse(&app).search.clone();

    // Refresh clears the result before the next settle
    app.handle_key(key(KeyCode::Char('r'))).await;
    assert_eq!(browse(&app).search, SearchState::Loading);

    app.handle_task_result(TaskResult::SearchFinished {
        seq: 2,
        result: Ok(items),
    });
    assert_eq!(browse(&app).search, first);
}

#[tokio::test]
async fn test_superseded_response_is_discarded() {
    let mut app = app_with(catalog(), RecordingSearch::default());
    load_catalog(&mut app, catalog());

    select_language(&mut app, 0).await; // seq 1
    app.handle_key(key(KeyCode::Char('r'))).await; // seq 2

    app.handle_task_result(TaskResult::SearchFinished {
        seq: 1,
        result: Ok(vec![repo("stale", 1)]),
    });
    assert_eq!(browse(&app).search, SearchState::Loading);

    app.handle_task_result(TaskResult::SearchFinished {
        seq: 2,
        result: Ok(vec![repo("fresh", 2)]),
    });
    match &browse(&app).search {
        SearchState::Loaded(r) => assert_eq!(r.name, "fresh"),
        other => panic!("expected loaded, got {:?}", other),
    }
}

#[tokio::test]
async fn test_refresh_without_selection_warns() {
    let mut app = app_with(catalog(), RecordingSearch::default());
    load_catalog(&mut app, catalog());

    app.handle_key(key(KeyCode::Char('r'))).await;

    assert_eq!(browse(&app).search, SearchState::Idle);
    let msg = app.status_message().expect("expected a warning");
    assert_eq!(msg.text, "Select a language first");
}

#[tokio::test]
async fn test_preselect_applies_case_insensitively() {
    let mut app =
        app_with(catalog(), RecordingSearch::default()).with_preselect(Some("rust".to_string()));
    load_catalog(&mut app, catalog());

    let b = browse(&app);
    assert_eq!(b.selected_title(), "Rust");
    assert_eq!(b.search, SearchState::Loading);
}

#[tokio::test]
async fn test_preselect_miss_degrades_to_no_selection() {
    let mut app =
        app_with(catalog(), RecordingSearch::default()).with_preselect(Some("COBOL".to_string()));
    load_catalog(&mut app, catalog());

    let b = browse(&app);
    assert_eq!(b.selected_title(), SELECTION_PROMPT);
    assert_eq!(b.search, SearchState::Idle);
    assert!(app.status_message().is_some());
}

#[test]
fn test_catalog_wire_format() {
    let body = r#"[
        {"title": "All", "value": ""},
        {"title": "Go", "value": "go"}
    ]"#;

    let parsed: Vec<Language> = serde_json::from_str(body).unwrap();
    assert_eq!(parsed.len(), 2);
    assert_eq!(parsed[1], lang("Go", "go"));
}

#[test]
fn test_search_wire_format() {
    let body = r#"{
        "total_count": 1,
        "incomplete_results": false,
        "items": [{
            "name": "x",
            "full_name": "y/x",
            "description": null,
            "stargazers_count": 5,
            "forks_count": 1,
            "open_issues_count": 0,
            "html_url": "https://github.com/y/x",
            "updated_at": "2024-01-02T03:04:05Z"
        }]
    }"#;

    let page: reposcout::model::SearchPage = serde_json::from_str(body).unwrap();
    assert_eq!(page.items.len(), 1);
    assert_eq!(page.items[0].name, "x");
    assert_eq!(page.items[0].stars, 5);
    assert_eq!(page.items[0].description, None);
    assert!(page.items[0].updated_at.is_some());
}
