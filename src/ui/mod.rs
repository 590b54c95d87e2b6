pub mod collection;
pub mod confirm_dialog;
pub mod gacha_scene;
pub mod result_modal;
pub mod setup_scene;
mod throbber;

use crate::core::config::GachaConfig;
use crate::core::session::Session;
use crate::draw::{Rarity, WeightTable};
use crate::input::UiState;
use ratatui::{style::Color, Frame};

/// Read-only snapshot of the controller for one frame.
pub struct GachaView<'a> {
    pub session: &'a Session,
    pub table: &'a WeightTable,
    /// Some while a draw is in flight
    pub spin_progress: Option<f64>,
}

pub fn rarity_color(rarity: Rarity) -> Color {
    match rarity {
        Rarity::Basic => Color::Gray,
        Rarity::Rare => Color::Blue,
        Rarity::Epic => Color::Magenta,
        Rarity::Hidden => Color::Yellow,
    }
}

/// Draws the setup form or the gacha screen, depending on the session.
/// Layout-dependent UI state (the collection scroll) is clamped in place.
pub fn draw_ui(frame: &mut Frame, view: &GachaView, ui: &mut UiState, config: &GachaConfig) {
    let area = frame.size();
    if view.session.is_configured() {
        gacha_scene::draw_gacha(frame, area, view, ui);
    } else {
        setup_scene::draw_setup(frame, area, ui, config);
    }
}
