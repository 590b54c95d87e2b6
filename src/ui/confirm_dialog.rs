use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Centers a `width` x `height` box in `area`, shrinking it to fit.
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width.saturating_sub(4));
    let height = height.min(area.height.saturating_sub(4));
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}

/// Yes/No dialog drawn over whatever is on screen.
pub fn draw_confirm(frame: &mut Frame, title: &str, body: Vec<Line>, yes_label: &str) {
    let dialog_area = centered_rect(frame.size(), 54, body.len() as u16 + 6);

    frame.render_widget(Clear, dialog_area);

    let mut lines = vec![Line::from("")];
    lines.extend(body);
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::raw("   "),
        Span::styled(
            format!("[Y] {yes_label}"),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("    "),
        Span::styled(
            "[N] Cancel",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    ]));

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .title(Span::styled(
                    format!(" {title} "),
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ))
                .title_alignment(Alignment::Center)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow)),
        )
        .alignment(Alignment::Left);

    frame.render_widget(paragraph, dialog_area);
}

/// Asked before wiping the whole session.
pub fn draw_reset_confirm(frame: &mut Frame, inventory_count: usize) {
    let body = vec![
        Line::from(Span::styled(
            "This will wipe all progress:",
            Style::default().fg(Color::Red),
        )),
        Line::from("  - Your draw budget"),
        Line::from(format!("  - All {inventory_count} collected items")),
        Line::from("  You will be able to set a new budget."),
    ];
    draw_confirm(frame, "Reset Everything?", body, "Yes, wipe it");
}

/// Asked when the requested budget is above the confirmation threshold.
pub fn draw_large_budget_confirm(frame: &mut Frame, budget: u32) {
    let body = vec![
        Line::from(vec![
            Span::raw("  You asked for "),
            Span::styled(
                budget.to_string(),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" draws."),
        ]),
        Line::from("  That might take a while!"),
        Line::from(Span::styled(
            "  The budget can only be set once.",
            Style::default().fg(Color::Yellow),
        )),
    ];
    draw_confirm(frame, "Are You Sure?", body, "Yes, go big");
}
