use super::rarity_color;
use crate::core::session::Session;
use crate::draw::Rarity;
use chrono::{Local, TimeZone};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Width of one cell in the collection grid, border gap included.
const CELL_WIDTH: usize = 24;

/// Items per tier, in tier order.
pub fn tier_counts(session: &Session) -> [(Rarity, usize); 4] {
    let mut counts = Rarity::ALL.map(|r| (r, 0));
    for item in session.inventory() {
        counts[item.rarity.index()].1 += 1;
    }
    counts
}

/// Formats an item timestamp as local wall-clock time.
pub fn format_obtained_at(millis: i64) -> String {
    match Local.timestamp_millis_opt(millis).single() {
        Some(time) => time.format("%m-%d %H:%M").to_string(),
        None => "--".to_string(),
    }
}

/// Largest useful first row: the last page stays full once scrolled.
pub fn clamp_scroll(scroll: usize, item_count: usize, columns: usize, rows_visible: usize) -> usize {
    let total_rows = item_count.div_ceil(columns.max(1));
    scroll.min(total_rows.saturating_sub(rows_visible.max(1)))
}

/// Collection panel: tier summary and a grid of items, newest first.
/// `scroll` is clamped in place to what the grid can show.
pub fn draw_collection(frame: &mut Frame, area: Rect, session: &Session, scroll: &mut usize) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Blue))
        .title(format!(" Collection ({}) ", session.inventory_count()));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Tier summary
            Constraint::Length(1), // Spacer
            Constraint::Min(0),    // Grid
        ])
        .split(inner);

    let mut summary = Vec::new();
    for (rarity, count) in tier_counts(session) {
        summary.push(Span::styled(
            format!("{}: {}", rarity.name(), count),
            Style::default().fg(rarity_color(rarity)),
        ));
        summary.push(Span::raw("   "));
    }
    frame.render_widget(Paragraph::new(Line::from(summary)), chunks[0]);

    if session.inventory_count() == 0 {
        let empty = Paragraph::new(Span::styled(
            "Nothing here yet. Draw something!",
            Style::default().fg(Color::DarkGray),
        ));
        frame.render_widget(empty, chunks[2]);
        *scroll = 0;
        return;
    }

    let columns = (chunks[2].width as usize / CELL_WIDTH).max(1);
    let rows_visible = chunks[2].height as usize / 2;
    *scroll = clamp_scroll(*scroll, session.inventory_count(), columns, rows_visible);
    let first_row = *scroll;

    let items: Vec<_> = session.newest_first().collect();
    let mut lines: Vec<Line> = Vec::new();
    for row in items.chunks(columns).skip(first_row).take(rows_visible) {
        let mut names = Vec::new();
        let mut details = Vec::new();
        for item in row {
            let color = rarity_color(item.rarity);
            names.push(Span::styled(
                format!("{:<width$}", truncate(&item.name, CELL_WIDTH - 2), width = CELL_WIDTH),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ));
            details.push(Span::styled(
                format!(
                    "{:<width$}",
                    format!("{} · {}", item.rarity.name(), format_obtained_at(item.obtained_at)),
                    width = CELL_WIDTH
                ),
                Style::default().fg(Color::DarkGray),
            ));
        }
        lines.push(Line::from(names));
        lines.push(Line::from(details));
    }

    frame.render_widget(Paragraph::new(lines), chunks[2]);
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let kept: String = text.chars().take(max_chars.saturating_sub(1)).collect();
        format!("{kept}…")
    }
}
