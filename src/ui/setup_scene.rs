use super::confirm_dialog::draw_large_budget_confirm;
use crate::core::config::GachaConfig;
use crate::input::{Overlay, UiState};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Budget entry form shown until the session is configured.
pub fn draw_setup(frame: &mut Frame, area: Rect, ui: &UiState, config: &GachaConfig) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(2)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Length(1), // Spacer
            Constraint::Length(4), // Input label + field
            Constraint::Length(1), // Spacer
            Constraint::Length(4), // Rules
            Constraint::Length(2), // Validation
            Constraint::Min(0),    // Filler
            Constraint::Length(3), // Controls
        ])
        .split(area);

    let title = Paragraph::new(vec![
        Line::from(Span::styled(
            "Gacha System Setup",
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Configure your luck. You can only set the number of draws once.",
            Style::default().fg(Color::Gray),
        )),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let label = Paragraph::new("Number of Draws:");
    frame.render_widget(label, chunks[2]);

    let input_area = Rect {
        x: chunks[2].x,
        y: chunks[2].y + 1,
        width: chunks[2].width.min(20),
        height: 3,
    };
    let input_widget = Paragraph::new(format!("{}_", ui.budget_input))
        .block(Block::default().borders(Borders::ALL))
        .style(Style::default().fg(Color::White));
    frame.render_widget(input_widget, input_area);

    let rules = vec![
        Line::from(format!("• Whole number from 1 to {}", config.max_budget)),
        Line::from(format!(
            "• More than {} draws asks for confirmation",
            config.confirm_threshold
        )),
        Line::from(Span::styled(
            "• Once set, the budget cannot be changed without a full reset",
            Style::default().fg(Color::Yellow),
        )),
    ];
    let rules_widget = Paragraph::new(rules).style(Style::default().fg(Color::Gray));
    frame.render_widget(rules_widget, chunks[4]);

    let validation_text = if let Some(error) = &ui.validation_error {
        Line::from(Span::styled(
            format!("✗ {}", error),
            Style::default().fg(Color::Red),
        ))
    } else {
        Line::from("")
    };
    frame.render_widget(Paragraph::new(validation_text), chunks[5]);

    let controls = Paragraph::new("[Enter] Start Gacha    [Esc] Quit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Gray));
    frame.render_widget(controls, chunks[7]);

    if let Overlay::ConfirmLargeBudget(budget) = ui.overlay {
        draw_large_budget_confirm(frame, budget);
    }
}
