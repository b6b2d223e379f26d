use ratatui::{
    Frame,
    layout::{Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use crate::logic::ViewMode;
use crate::state::{AppState, Focus};

/// Keyboard hints shown on the right of the status line.
const HINTS: &str = "/ search  ←↑↓→ move  Enter details  r refresh  R retry  t theme  q quit";

/// What: Draw the search input box and place the cursor when it has focus.
pub(super) fn render_search_bar(f: &mut Frame, app: &AppState, area: Rect) {
    let pal = app.theme.palette();
    let focused = app.focus == Focus::Search;
    let query = app.search.state().query.as_str();
    let line = Line::from(vec![
        Span::styled(
            "> ",
            Style::default().fg(if focused { pal.primary } else { pal.text_secondary }),
        ),
        Span::styled(query.to_string(), Style::default().fg(pal.text)),
    ]);
    let title = if focused {
        "Search Pokémon (Esc to clear)"
    } else {
        "Search Pokémon (/)"
    };
    let input = Paragraph::new(line).block(
        Block::default()
            .title(Span::styled(
                title,
                Style::default().fg(if focused { pal.primary } else { pal.text_secondary }),
            ))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(if focused { pal.primary } else { pal.border })),
    );
    f.render_widget(input, area);

    if focused {
        let typed = u16::try_from(UnicodeWidthStr::width(query)).unwrap_or(u16::MAX);
        let right = area.x + area.width.saturating_sub(2);
        let x = (area.x + 3).saturating_add(typed).min(right);
        f.set_cursor_position(Position::new(x, area.y + 1));
    }
}

/// What: Status text for the current view mode.
pub(super) fn status_text(app: &AppState) -> String {
    let view = app.view();
    match view.mode {
        ViewMode::PendingSearch => "Keep typing to search…".to_string(),
        ViewMode::Search if view.is_loading => "Searching…".to_string(),
        ViewMode::Search => match view.items.len() {
            1 => "1 result".to_string(),
            n => format!("{n} results"),
        },
        ViewMode::Browse if view.is_refreshing => "Refreshing…".to_string(),
        ViewMode::Browse if view.is_loading_more => "Loading more…".to_string(),
        ViewMode::Browse if view.show_end_of_list => {
            format!("You've reached the end ({} Pokémon)", view.items.len())
        }
        ViewMode::Browse => format!("{} Pokémon loaded", view.items.len()),
    }
}

/// What: Draw the one-line status bar below the grid.
pub(super) fn render_status_line(f: &mut Frame, app: &AppState, area: Rect) {
    let pal = app.theme.palette();
    let status = status_text(app);
    let used = UnicodeWidthStr::width(status.as_str()) + 2;
    let pad = usize::from(area.width)
        .saturating_sub(used + UnicodeWidthStr::width(HINTS))
        .max(1);
    let line = Line::from(vec![
        Span::styled(
            format!(" {status} "),
            Style::default().fg(pal.primary).add_modifier(Modifier::BOLD),
        ),
        Span::raw(" ".repeat(pad)),
        Span::styled(HINTS, Style::default().fg(pal.text_secondary)),
    ]);
    f.render_widget(Paragraph::new(line), area);
}
