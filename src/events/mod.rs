//! Event handling layer for the dexterm TUI.
//!
//! Maps terminal key and mouse events onto controller triggers. Requests produced by the
//! controllers are forwarded to the workers through [`Dispatch`].

use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::runtime::Dispatch;
use crate::state::{AppState, Screen};

mod browse;
mod detail;
mod mouse;

/// Dispatch a single terminal event and mutate the [`AppState`].
///
/// Returns `true` to signal the application should exit; otherwise `false`.
pub fn handle_event(ev: &CEvent, app: &mut AppState, dispatch: &Dispatch) -> bool {
    match ev {
        CEvent::Key(ke) => {
            if ke.kind != KeyEventKind::Press {
                return false;
            }
            handle_key(*ke, app, dispatch)
        }
        CEvent::Mouse(me) => {
            mouse::handle_mouse(*me, app, dispatch);
            false
        }
        _ => false,
    }
}

fn handle_key(ke: KeyEvent, app: &mut AppState, dispatch: &Dispatch) -> bool {
    if ke.modifiers.contains(KeyModifiers::CONTROL) && ke.code == KeyCode::Char('c') {
        return true;
    }
    if ke.modifiers.contains(KeyModifiers::CONTROL) && ke.code == KeyCode::Char('t') {
        app.theme.toggle();
        return false;
    }
    match app.screen {
        Screen::Browse => browse::handle_key(ke, app, dispatch),
        Screen::Detail => detail::handle_key(ke, app, dispatch),
    }
}

/// What: Run the near-bottom check after the viewport or selection moved.
pub(crate) fn after_scroll(app: &mut AppState, dispatch: &Dispatch) {
    if app.scroll_feeds_list() && !app.list.state().items.is_empty() {
        let metrics = app.scroll_metrics();
        dispatch.page(app.list.on_scroll(metrics));
    }
}
