//! TUI screen components
//!
//! Contains the screen for each flow state, the background heart layer,
//! and the footer shared by all of them.

pub mod ambient;
pub mod ask;
pub mod quiz;
pub mod start;
pub mod success;

pub use ambient::AmbientLayer;
pub use ask::{AskControl, AskScreen};
pub use quiz::QuizScreen;
pub use start::StartScreen;
pub use success::SuccessScreen;

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

/// Accent colour for titles, borders and the "yes" button
pub const ROSE: Color = Color::LightRed;

/// Blank out `area` and draw an opaque rounded card over it, returning
/// the area inside the border
pub(crate) fn render_card(f: &mut Frame, area: Rect) -> Rect {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(ROSE));
    let inner = block.inner(area);
    f.render_widget(Clear, area);
    f.render_widget(block, area);
    inner
}

/// Render the greeting line pinned to the bottom of every screen
pub fn render_footer(f: &mut Frame, area: Rect, greeted: &str) {
    let footer = Paragraph::new(format!("✦ Hi {}! Happy Valentine's Day ✦", greeted))
        .style(Style::default().fg(ROSE).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    f.render_widget(footer, area);
}
