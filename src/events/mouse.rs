use crossterm::event::{MouseEvent, MouseEventKind};

use super::after_scroll;
use crate::app::runtime::Dispatch;
use crate::state::{AppState, Screen};

/// What: Wheel scrolling on the browse grid.
///
/// Details:
/// - Each wheel step scrolls one grid row and runs the near-bottom check.
pub(super) fn handle_mouse(me: MouseEvent, app: &mut AppState, dispatch: &Dispatch) {
    if app.screen != Screen::Browse {
        return;
    }
    match me.kind {
        MouseEventKind::ScrollDown => app.scroll_by(1),
        MouseEventKind::ScrollUp => app.scroll_by(-1),
        _ => return,
    }
    after_scroll(app, dispatch);
}
