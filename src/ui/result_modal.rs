use super::confirm_dialog::centered_rect;
use super::rarity_color;
use crate::draw::{Item, Rarity, WeightTable};
use ratatui::{
    layout::Alignment,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};

fn headline(rarity: Rarity) -> &'static str {
    match rarity {
        Rarity::Basic => "You got",
        Rarity::Rare => "Nice! You got",
        Rarity::Epic => "Amazing! You got",
        Rarity::Hidden => "✦ JACKPOT ✦ You found the hidden",
    }
}

/// Celebration overlay for a freshly drawn item, styled by tier.
pub fn draw_result_modal(frame: &mut Frame, item: &Item, table: &WeightTable) {
    let color = rarity_color(item.rarity);
    let area = centered_rect(frame.size(), 56, 13);
    frame.render_widget(Clear, area);

    let border_type = match item.rarity {
        Rarity::Basic | Rarity::Rare => BorderType::Plain,
        Rarity::Epic => BorderType::Double,
        Rarity::Hidden => BorderType::Thick,
    };

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            headline(item.rarity),
            Style::default().fg(color),
        )),
        Line::from(""),
        Line::from(Span::styled(
            item.name.clone(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(format!(
            "{} tier · {:.1}% odds",
            item.rarity.name(),
            table.probability(item.rarity) * 100.0
        )),
        Line::from(""),
        Line::from(Span::styled(
            item.image.clone(),
            Style::default().add_modifier(Modifier::DIM),
        )),
        Line::from(""),
        Line::from("[Enter] Collect"),
    ];

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(border_type)
                .border_style(Style::default().fg(color))
                .title(format!(" {} ", item.rarity.name()))
                .title_alignment(Alignment::Center),
        );

    frame.render_widget(paragraph, area);
}
