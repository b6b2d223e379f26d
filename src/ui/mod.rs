//! Rendering for the dexterm TUI.
//!
//! `ui` draws one frame from `AppState`. It also records how many grid rows fit so scrolling
//! and the near-bottom check work in rows.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::Line,
    widgets::{Block, Paragraph, Wrap},
};

use crate::state::{AppState, Screen};
use crate::theme::Palette;

mod details;
mod grid;
mod status;

pub use grid::CARD_HEIGHT;

/// What: Draw a full frame.
///
/// Inputs:
/// - `f`: Frame to render into
/// - `app`: Application state; `visible_rows` and the selection scroll are updated
pub fn ui(f: &mut Frame, app: &mut AppState) {
    let pal = app.theme.palette();
    let area = f.area();
    f.render_widget(
        Block::default().style(Style::default().bg(pal.background).fg(pal.text)),
        area,
    );

    match app.screen {
        Screen::Detail => details::render(f, app, area),
        Screen::Browse => {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(3),
                    Constraint::Min(0),
                    Constraint::Length(1),
                ])
                .split(area);
            status::render_search_bar(f, app, chunks[0]);
            grid::render(f, app, chunks[1]);
            status::render_status_line(f, app, chunks[2]);
        }
    }
}

/// Centered multi-line message used for loading, empty and error states.
fn render_centered(f: &mut Frame, area: Rect, lines: Vec<Line<'_>>, pal: &Palette) {
    let height = u16::try_from(lines.len()).unwrap_or(u16::MAX);
    let top = area.height.saturating_sub(height) / 2;
    let rect = Rect {
        x: area.x,
        y: area.y + top,
        width: area.width,
        height: height.min(area.height),
    };
    let para = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .style(Style::default().fg(pal.text).bg(pal.background));
    f.render_widget(para, rect);
}
