use super::collection::draw_collection;
use super::confirm_dialog::draw_reset_confirm;
use super::result_modal::draw_result_modal;
use super::throbber::{spin_message, spinner_char};
use super::{rarity_color, GachaView};
use crate::core::session::Phase;
use crate::input::{Overlay, UiState};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

/// Main screen once a budget is set.
pub fn draw_gacha(frame: &mut Frame, area: Rect, view: &GachaView, ui: &mut UiState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(5), // Draw panel
            Constraint::Length(3), // Odds
            Constraint::Min(4),    // Collection
            Constraint::Length(3), // Controls
        ])
        .split(area);

    draw_header(frame, chunks[0], view);
    draw_machine(frame, chunks[1], view, ui);
    draw_odds(frame, chunks[2], view);
    draw_collection(frame, chunks[3], view.session, &mut ui.scroll);

    let controls = Paragraph::new("[Space] Draw    [↑/↓] Scroll    [R] Reset    [Q] Quit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Gray))
        .block(Block::default().borders(Borders::TOP));
    frame.render_widget(controls, chunks[4]);

    match &ui.overlay {
        Overlay::DrawResult(item) => draw_result_modal(frame, item, view.table),
        Overlay::ConfirmReset => draw_reset_confirm(frame, view.session.inventory_count()),
        Overlay::ConfirmLargeBudget(_) | Overlay::None => {}
    }
}

fn draw_header(frame: &mut Frame, area: Rect, view: &GachaView) {
    let session = view.session;
    let left_color = if session.spins_left() == 0 {
        Color::Red
    } else {
        Color::Green
    };

    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            "GACHA ",
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  Spins left: "),
        Span::styled(
            format!("{}", session.spins_left()),
            Style::default().fg(left_color).add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!(" / {}", session.total_budget())),
        Span::raw("    Collected: "),
        Span::styled(
            format!("{}", session.inventory_count()),
            Style::default().fg(Color::Cyan),
        ),
    ]))
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(header, area);
}

fn draw_machine(frame: &mut Frame, area: Rect, view: &GachaView, ui: &UiState) {
    if let Some(progress) = view.spin_progress {
        let label = format!(
            "{} {}",
            spinner_char(),
            spin_message(view.session.used() as u64)
        );
        let gauge = Gauge::default()
            .block(Block::default().borders(Borders::ALL).title(" Drawing "))
            .gauge_style(
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            )
            .label(label)
            .ratio(progress.clamp(0.0, 1.0));
        frame.render_widget(gauge, area);
        return;
    }

    let (text, style) = match view.session.phase() {
        Phase::Ready { remaining } => (
            format!("▶  DRAW  ({remaining} left)  ◀"),
            Style::default()
                .fg(Color::Black)
                .bg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        ),
        Phase::Exhausted => (
            "No Spins Left".to_string(),
            Style::default().fg(Color::DarkGray),
        ),
        Phase::Unconfigured => (
            "Not configured".to_string(),
            Style::default().fg(Color::DarkGray),
        ),
    };

    let mut lines = vec![Line::from(""), Line::from(Span::styled(text, style))];
    if let Some(status) = &ui.status {
        lines.push(Line::from(Span::styled(
            status.clone(),
            Style::default().fg(Color::Yellow),
        )));
    }

    let panel = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(panel, area);
}

fn draw_odds(frame: &mut Frame, area: Rect, view: &GachaView) {
    let mut spans = vec![Span::raw(" Odds: ")];
    for tier in view.table.tiers() {
        spans.push(Span::styled(
            format!(
                "{} {:.1}%",
                tier.rarity.name(),
                view.table.probability(tier.rarity) * 100.0
            ),
            Style::default().fg(rarity_color(tier.rarity)),
        ));
        spans.push(Span::raw("   "));
    }
    let odds = Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::ALL));
    frame.render_widget(odds, area);
}
