//! Start screen implementation
//!
//! Welcome card with a single "PROVE IT" button that opens the quiz.

use crate::app::state::{FlowController, FlowMessage, NavigationAction};
use crate::util::layout::{centered_box, hit};
use super::{render_card, ROSE};
use crossterm::event::KeyEvent;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

const CARD_WIDTH: u16 = 48;
const CARD_HEIGHT: u16 = 15;

/// Start screen component
#[derive(Debug)]
pub struct StartScreen {
    greeted: String,
    button_area: Rect,
}

impl StartScreen {
    /// Create a new start screen
    pub fn new<S: Into<String>>(greeted: S) -> Self {
        Self {
            greeted: greeted.into(),
            button_area: Rect::default(),
        }
    }

    /// Where the button was last drawn
    pub fn button_area(&self) -> Rect {
        self.button_area
    }

    /// Handle key events for the start screen
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<FlowMessage> {
        match FlowController::key_to_navigation(key) {
            NavigationAction::Select => Some(FlowMessage::BeginQuiz),
            _ => None,
        }
    }

    /// Handle a left click at the given cell
    pub fn handle_click(&mut self, column: u16, row: u16) -> Option<FlowMessage> {
        hit(self.button_area, column, row).then_some(FlowMessage::BeginQuiz)
    }

    /// Render the start screen
    pub fn render(&mut self, f: &mut Frame, area: Rect) {
        let card = centered_box(CARD_WIDTH, CARD_HEIGHT, area);
        let inner = render_card(f, card);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(2), // Heart
                Constraint::Length(2), // Greeting
                Constraint::Length(3), // Teaser
                Constraint::Min(0),
                Constraint::Length(3), // Button
            ])
            .split(inner);

        let heart = Paragraph::new(Line::from(vec![
            Span::styled("♥", Style::default().fg(ROSE).add_modifier(Modifier::BOLD)),
            Span::styled(" ✦", Style::default().fg(Color::Yellow)),
        ]))
        .alignment(Alignment::Center);
        f.render_widget(heart, chunks[0]);

        let greeting = Paragraph::new(format!("Hi {}!", self.greeted))
            .style(Style::default().fg(ROSE).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center);
        f.render_widget(greeting, chunks[1]);

        let teaser = Paragraph::new(
            "I have a special question for you... but first, prove you're real!",
        )
        .style(Style::default().fg(Color::Gray))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
        f.render_widget(teaser, chunks[2]);

        self.render_button(f, chunks[4]);
    }

    fn render_button(&mut self, f: &mut Frame, area: Rect) {
        let button = Paragraph::new("▶ PROVE IT")
            .style(
                Style::default()
                    .fg(Color::White)
                    .bg(ROSE)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(ROSE)),
            );
        f.render_widget(button, area);
        self.button_area = area;
    }
}

impl Default for StartScreen {
    fn default() -> Self {
        Self::new("you")
    }
}
