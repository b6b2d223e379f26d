//! Keys on the browse screen: search input editing and grid navigation.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::after_scroll;
use crate::app::runtime::Dispatch;
use crate::logic::ViewMode;
use crate::state::{AppState, Focus, Screen};

/// Returns `true` when the user asked to quit.
pub(super) fn handle_key(ke: KeyEvent, app: &mut AppState, dispatch: &Dispatch) -> bool {
    match app.focus {
        Focus::Search => {
            handle_search_key(ke, app, dispatch);
            false
        }
        Focus::Grid => handle_grid_key(ke, app, dispatch),
    }
}

/// What: Replace the query text and forward the resulting debounce command.
fn set_query(app: &mut AppState, dispatch: &Dispatch, query: &str) {
    dispatch.search(app.search.on_query_changed(query));
    app.reset_selection();
}

fn handle_search_key(ke: KeyEvent, app: &mut AppState, dispatch: &Dispatch) {
    match ke.code {
        KeyCode::Char(c) if !ke.modifiers.contains(KeyModifiers::CONTROL) => {
            let mut query = app.search.state().query.clone();
            query.push(c);
            set_query(app, dispatch, &query);
        }
        KeyCode::Backspace => {
            let mut query = app.search.state().query.clone();
            query.pop();
            set_query(app, dispatch, &query);
        }
        KeyCode::Esc => {
            dispatch.search(app.search.clear());
            app.reset_selection();
            app.focus = Focus::Grid;
        }
        KeyCode::Enter | KeyCode::Down | KeyCode::Tab => app.focus = Focus::Grid,
        _ => {}
    }
}

fn handle_grid_key(ke: KeyEvent, app: &mut AppState, dispatch: &Dispatch) -> bool {
    let page = isize::try_from(app.visible_rows.max(1)).unwrap_or(1);
    match ke.code {
        KeyCode::Char('q') => return true,
        KeyCode::Char('/' | 's') | KeyCode::Tab => app.focus = Focus::Search,
        KeyCode::Esc => {
            if app.search.state().is_active {
                dispatch.search(app.search.clear());
                app.reset_selection();
            }
        }
        KeyCode::Up | KeyCode::Char('k') => app.move_selection(-1, 0),
        KeyCode::Down | KeyCode::Char('j') => app.move_selection(1, 0),
        KeyCode::Left | KeyCode::Char('h') => app.move_selection(0, -1),
        KeyCode::Right | KeyCode::Char('l') => app.move_selection(0, 1),
        KeyCode::PageDown => app.scroll_by(page),
        KeyCode::PageUp => app.scroll_by(-page),
        KeyCode::Home | KeyCode::Char('g') => app.reset_selection(),
        KeyCode::End | KeyCode::Char('G') => {
            app.selected = usize::MAX;
            app.clamp_selection();
        }
        KeyCode::Char('r') => {
            if app.view().mode != ViewMode::Search {
                dispatch.page(app.list.refresh());
            }
        }
        KeyCode::Char('R') => retry(app, dispatch),
        KeyCode::Char('t') => app.theme.toggle(),
        KeyCode::Enter => open_selected(app, dispatch),
        _ => return false,
    }
    after_scroll(app, dispatch);
    false
}

/// What: Retry whatever failed on the current view.
///
/// Details:
/// - In search mode the current query is resubmitted; otherwise the list retries its load.
fn retry(app: &mut AppState, dispatch: &Dispatch) {
    if app.view().mode == ViewMode::Search {
        let query = app.search.state().query.clone();
        set_query(app, dispatch, &query);
    } else {
        dispatch.page(app.list.retry());
    }
}

fn open_selected(app: &mut AppState, dispatch: &Dispatch) {
    let Some(key) = app.selected_item().map(|item| item.id.to_string()) else {
        return;
    };
    dispatch.detail(app.detail.open(key));
    app.screen = Screen::Detail;
}
