use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

use super::render_centered;
use crate::logic::{sample_moves, stat_ratio};
use crate::state::{AppState, ItemDetail};
use crate::theme::{Palette, category_color};
use crate::util::{display_name, format_height, format_weight, pad_id};

/// Character width of a full stat bar.
const STAT_BAR_WIDTH: usize = 20;

/// What: Draw the detail screen for the record held by the detail loader.
///
/// Details:
/// - Loading and error states replace the body; errors offer retry and back.
pub(super) fn render(f: &mut Frame, app: &AppState, area: Rect) {
    let pal = app.theme.palette();
    let state = app.detail.state();

    if let Some(err) = &state.error {
        let lines = vec![
            Line::styled(
                err.message.clone(),
                Style::default().fg(pal.error).add_modifier(Modifier::BOLD),
            ),
            Line::styled(
                "R retry · Esc back",
                Style::default().fg(pal.text_secondary),
            ),
        ];
        render_centered(f, area, lines, pal);
        return;
    }
    let Some(detail) = state.detail.as_ref() else {
        let key = state.key.as_deref().unwrap_or_default();
        let lines = vec![Line::styled(
            format!("Loading {key}…"),
            Style::default().fg(pal.text_secondary),
        )];
        render_centered(f, area, lines, pal);
        return;
    };

    let outer = Block::default()
        .title(Span::styled(
            " Esc back · f flip sprite · t theme · q quit ",
            Style::default().fg(pal.text_secondary),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(pal.border));
    let inner = outer.inner(area);
    f.render_widget(outer, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(4),
            Constraint::Min(0),
        ])
        .split(inner);
    f.render_widget(Paragraph::new(header_lines(detail, pal)), chunks[0]);

    let sprite_label = if state.show_back { "back" } else { "front" };
    let sprite = state.current_sprite().unwrap_or_default();
    let info = vec![
        Line::from(vec![
            Span::styled(format!("Sprite ({sprite_label}): "), Style::default().fg(pal.text_secondary)),
            Span::styled(sprite.to_string(), Style::default().fg(pal.primary)),
        ]),
        Line::from(vec![
            Span::styled("Height ", Style::default().fg(pal.text_secondary)),
            Span::raw(format_height(detail.height)),
            Span::styled("   Weight ", Style::default().fg(pal.text_secondary)),
            Span::raw(format_weight(detail.weight)),
            Span::styled("   Base exp ", Style::default().fg(pal.text_secondary)),
            Span::raw(detail.base_experience.to_string()),
        ]),
        Line::from(vec![
            Span::styled("Abilities ", Style::default().fg(pal.text_secondary)),
            Span::raw(
                detail
                    .abilities
                    .iter()
                    .map(|a| display_name(&a.name))
                    .collect::<Vec<_>>()
                    .join(", "),
            ),
        ]),
    ];
    f.render_widget(Paragraph::new(info).wrap(Wrap { trim: true }), chunks[1]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[2]);
    f.render_widget(section("Base stats", stat_lines(detail, pal), pal), body[0]);
    f.render_widget(section(&moves_title(detail), move_lines(detail, pal), pal), body[1]);
}

fn header_lines<'a>(detail: &ItemDetail, pal: &Palette) -> Vec<Line<'a>> {
    let mut badges: Vec<Span<'a>> = Vec::new();
    for tag in &detail.categories {
        badges.push(Span::styled(
            format!(" {} ", tag.name),
            Style::default()
                .fg(pal.background)
                .bg(category_color(&tag.name))
                .add_modifier(Modifier::BOLD),
        ));
        badges.push(Span::raw(" "));
    }
    vec![
        Line::from(vec![
            Span::styled(
                display_name(&detail.name),
                Style::default().fg(pal.text).add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(pad_id(detail.id), Style::default().fg(pal.text_secondary)),
        ]),
        Line::from(badges),
    ]
}

/// What: One line per base stat with a proportional block bar.
fn stat_lines<'a>(detail: &ItemDetail, pal: &Palette) -> Vec<Line<'a>> {
    detail
        .stats
        .iter()
        .map(|stat| {
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
            let filled = (stat_ratio(stat.value) * STAT_BAR_WIDTH as f64).round() as usize;
            let filled = filled.min(STAT_BAR_WIDTH);
            Line::from(vec![
                Span::styled(
                    format!("{:<16}", display_name(&stat.name)),
                    Style::default().fg(pal.text_secondary),
                ),
                Span::styled(format!("{:>3} ", stat.value), Style::default().fg(pal.text)),
                Span::styled("█".repeat(filled), Style::default().fg(pal.primary)),
                Span::styled(
                    "░".repeat(STAT_BAR_WIDTH - filled),
                    Style::default().fg(pal.border),
                ),
            ])
        })
        .collect()
}

fn moves_title(detail: &ItemDetail) -> String {
    let (sample, total) = sample_moves(detail);
    format!("Moves ({} of {total})", sample.len())
}

fn move_lines<'a>(detail: &ItemDetail, pal: &Palette) -> Vec<Line<'a>> {
    sample_moves(detail)
        .0
        .iter()
        .map(|m| Line::styled(format!("• {}", display_name(&m.name)), Style::default().fg(pal.text)))
        .collect()
}

fn section<'a>(title: &str, lines: Vec<Line<'a>>, pal: &Palette) -> Paragraph<'a> {
    Paragraph::new(lines).block(
        Block::default()
            .title(Span::styled(
                format!(" {title} "),
                Style::default().fg(pal.primary).add_modifier(Modifier::BOLD),
            ))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(pal.border)),
    )
}
