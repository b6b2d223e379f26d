use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::render_centered;
use crate::logic::{ErrorDisplay, ViewMode, grid_rows};
use crate::state::app_state::GRID_COLUMNS;
use crate::state::{AppState, ItemSummary};
use crate::theme::{Palette, category_color};
use crate::util::{display_name, pad_id, truncate_to_width};

/// Terminal rows taken by one card (border, name, badges, border).
pub const CARD_HEIGHT: u16 = 4;

/// What: Draw the card grid, or the loading/error/empty state that replaces it.
pub(super) fn render(f: &mut Frame, app: &mut AppState, area: Rect) {
    let pal = app.theme.palette();
    let banner = matches!(app.view().error, Some(ErrorDisplay::Banner(_)));
    let (banner_area, grid_area) = if banner {
        let parts = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Min(0)])
            .split(area);
        (Some(parts[0]), parts[1])
    } else {
        (None, area)
    };

    app.visible_rows = usize::from((grid_area.height / CARD_HEIGHT).max(1));
    app.clamp_selection();
    let view = app.view();

    if let (Some(rect), Some(ErrorDisplay::Banner(err))) = (banner_area, view.error) {
        let line = Line::from(vec![
            Span::styled(format!(" {err} "), Style::default().fg(pal.error)),
            Span::styled("(R to retry)", Style::default().fg(pal.text_secondary)),
        ]);
        f.render_widget(Paragraph::new(line), rect);
    }

    match view.error {
        Some(ErrorDisplay::Blocking(err)) => {
            let mut lines = vec![Line::styled(
                err.message.clone(),
                Style::default().fg(pal.error).add_modifier(Modifier::BOLD),
            )];
            lines.push(Line::styled(
                "Press R to retry",
                Style::default().fg(pal.text_secondary),
            ));
            render_centered(f, grid_area, lines, pal);
            return;
        }
        Some(ErrorDisplay::Notice(err)) => {
            let lines = vec![Line::styled(
                err.message.clone(),
                Style::default().fg(pal.text_secondary),
            )];
            render_centered(f, grid_area, lines, pal);
            return;
        }
        Some(ErrorDisplay::Banner(_)) | None => {}
    }

    if view.items.is_empty() {
        let text = if view.is_loading {
            if view.mode == ViewMode::Search {
                "Searching…"
            } else {
                "Loading Pokémon…"
            }
        } else {
            "Nothing to show yet"
        };
        let lines = vec![Line::styled(text, Style::default().fg(pal.text_secondary))];
        render_centered(f, grid_area, lines, pal);
        return;
    }

    let rows = grid_rows(view.items, GRID_COLUMNS);
    let visible = app.visible_rows;
    for (slot, (row_index, row)) in rows
        .iter()
        .enumerate()
        .skip(app.scroll_row)
        .take(visible)
        .enumerate()
    {
        let y_offset = u16::try_from(slot).unwrap_or(u16::MAX).saturating_mul(CARD_HEIGHT);
        let row_rect = Rect {
            x: grid_area.x,
            y: grid_area.y + y_offset,
            width: grid_area.width,
            height: CARD_HEIGHT.min(grid_area.height.saturating_sub(y_offset)),
        };
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)])
            .split(row_rect);
        for (col, item) in row.iter().enumerate() {
            let selected = row_index * GRID_COLUMNS + col == app.selected;
            f.render_widget(card(item, selected, pal, cells[col].width), cells[col]);
        }
    }
}

/// What: Build one card widget.
fn card<'a>(item: &'a ItemSummary, selected: bool, pal: &Palette, width: u16) -> Paragraph<'a> {
    let inner = usize::from(width.saturating_sub(4));
    let name = truncate_to_width(&display_name(&item.name), inner);
    let mut badges: Vec<Span<'a>> = Vec::new();
    for tag in &item.categories {
        badges.push(Span::styled(
            format!(" {} ", tag.name),
            Style::default()
                .fg(pal.background)
                .bg(category_color(&tag.name))
                .add_modifier(Modifier::BOLD),
        ));
        badges.push(Span::raw(" "));
    }
    let name_style = if selected {
        Style::default().fg(pal.primary).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(pal.text).add_modifier(Modifier::BOLD)
    };
    let border = if selected { pal.primary } else { pal.border };
    Paragraph::new(vec![Line::styled(name, name_style), Line::from(badges)])
        .style(Style::default().bg(pal.surface))
        .block(
            Block::default()
                .title(Span::styled(
                    pad_id(item.id),
                    Style::default().fg(pal.text_secondary),
                ))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(border)),
        )
}
