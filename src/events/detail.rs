//! Keys on the detail screen.

use crossterm::event::{KeyCode, KeyEvent};

use crate::app::runtime::Dispatch;
use crate::state::{AppState, Screen};

/// Returns `true` when the user asked to quit.
pub(super) fn handle_key(ke: KeyEvent, app: &mut AppState, dispatch: &Dispatch) -> bool {
    match ke.code {
        KeyCode::Char('q') => return true,
        KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('b') => {
            app.detail.close();
            app.screen = Screen::Browse;
        }
        KeyCode::Char('r' | 'R') => {
            if let Some(request) = app.detail.retry() {
                dispatch.detail(request);
            }
        }
        KeyCode::Char('f' | ' ') => {
            app.detail.toggle_sprite();
        }
        KeyCode::Char('t') => app.theme.toggle(),
        _ => {}
    }
    false
}
