//! Success screen implementation
//!
//! Terminal celebration: greeting, bouncing party poppers, a pulsing
//! heart and the picture box. The picture falls back to a remote URL when
//! the local file can't be loaded.

use crate::models::SuccessImage;
use crate::util::layout::centered_box;
use super::{render_card, ROSE};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

const CARD_WIDTH: u16 = 60;
const CARD_HEIGHT: u16 = 24;

const HEART_ART: [&str; 6] = [
    " ♥♥♥   ♥♥♥ ",
    "♥♥♥♥♥ ♥♥♥♥♥",
    "♥♥♥♥♥♥♥♥♥♥♥",
    " ♥♥♥♥♥♥♥♥♥ ",
    "   ♥♥♥♥♥   ",
    "     ♥     ",
];

/// Success screen component
#[derive(Debug)]
pub struct SuccessScreen {
    greeted: String,
    image: SuccessImage,
}

impl SuccessScreen {
    pub fn new<S: Into<String>>(greeted: S, image: SuccessImage) -> Self {
        Self {
            greeted: greeted.into(),
            image,
        }
    }

    /// Called once when the flow reaches this screen; loads the picture
    pub fn mount(&mut self) {
        self.image.load();
    }

    pub fn image(&self) -> &SuccessImage {
        &self.image
    }

    /// Render the success screen. `tick` only drives the animation.
    pub fn render(&self, f: &mut Frame, area: Rect, tick: u64) {
        let card = centered_box(CARD_WIDTH, CARD_HEIGHT, area);
        let inner = render_card(f, card);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .horizontal_margin(2)
            .constraints([
                Constraint::Length(2), // Poppers and heart
                Constraint::Length(1), // Greeting
                Constraint::Length(1), // Answer
                Constraint::Length(2), // Tease
                Constraint::Min(0),    // Picture
            ])
            .split(inner);

        self.render_celebration(f, chunks[0], tick);

        let greeting = Paragraph::new(format!("Hi {}!", self.greeted))
            .style(Style::default().fg(ROSE).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center);
        f.render_widget(greeting, chunks[1]);

        let answer = Paragraph::new("Yay! I love you too!")
            .style(Style::default().fg(Color::LightMagenta).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center);
        f.render_widget(answer, chunks[2]);

        let tease = Paragraph::new("I knew you couldn't say no! ❤")
            .style(Style::default().fg(ROSE).add_modifier(Modifier::ITALIC))
            .alignment(Alignment::Center);
        f.render_widget(tease, chunks[3]);

        self.render_picture(f, chunks[4]);
    }

    fn render_celebration(&self, f: &mut Frame, area: Rect, tick: u64) {
        // Poppers bounce out of phase; the heart pulses
        let (left_pad, right_pad) = if tick % 2 == 0 { ("", "\n") } else { ("\n", "") };
        let heart_style = if tick % 2 == 0 {
            Style::default().fg(ROSE).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Red)
        };

        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(40),
                Constraint::Percentage(20),
                Constraint::Percentage(40),
            ])
            .split(area);

        f.render_widget(
            Paragraph::new(format!("{}🎉", left_pad)).alignment(Alignment::Right),
            cols[0],
        );
        f.render_widget(
            Paragraph::new(Span::styled("♥", heart_style)).alignment(Alignment::Center),
            cols[1],
        );
        f.render_widget(
            Paragraph::new(format!("{}🎉", right_pad)).alignment(Alignment::Left),
            cols[2],
        );
    }

    fn render_picture(&self, f: &mut Frame, area: Rect) {
        let mut lines: Vec<Line> = HEART_ART
            .iter()
            .map(|row| Line::styled(*row, Style::default().fg(ROSE)))
            .collect();
        lines.push(Line::from(""));
        lines.push(Line::styled(
            self.image.displayed_source().to_string(),
            Style::default().fg(Color::DarkGray),
        ));

        let picture = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: false })
            .block(
                Block::default()
                    .title(" Happy Valentine's Day ")
                    .title_alignment(Alignment::Center)
                    .borders(Borders::ALL)
                    .border_type(BorderType::Thick)
                    .border_style(Style::default().fg(Color::White)),
            );
        f.render_widget(picture, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ImageStatus;

    #[test]
    fn test_mount_resolves_image() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("couple.png");
        let image = SuccessImage::new(missing.to_string_lossy(), "https://example.com/h.jpg");
        let mut screen = SuccessScreen::new("Tanmay", image);
        assert_eq!(screen.image().status(), ImageStatus::Pending);

        screen.mount();
        assert_eq!(screen.image().status(), ImageStatus::Fallback);
        assert_eq!(screen.image().displayed_source(), "https://example.com/h.jpg");
    }
}
