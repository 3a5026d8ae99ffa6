//! Ask screen implementation
//!
//! "So... do you love me?" with a "yes" button that grows and a "no"
//! button that shrinks on every refusal. The "no" button always stays in
//! its slot, fully labelled and clickable.

use crate::app::state::{FlowController, FlowMessage, NavigationAction};
use crate::models::VisualWeights;
use crate::util::layout::{hit, scaled_rect};
use super::ROSE;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

pub const YES_LABEL: &str = "Yes! ♥";

/// Horizontal padding on each side of a label at weight 1.0
const BASE_PADDING: u16 = 4;
/// Rows of a button at weight 1.0: border, label, border
const BASE_HEIGHT: u16 = 3;

/// The two controls on the ask screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AskControl {
    #[default]
    Yes,
    No,
}

impl AskControl {
    fn toggled(self) -> Self {
        match self {
            Self::Yes => Self::No,
            Self::No => Self::Yes,
        }
    }

    fn message(self) -> FlowMessage {
        match self {
            Self::Yes => FlowMessage::Accept,
            Self::No => FlowMessage::Decline,
        }
    }
}

/// Ask screen component
#[derive(Debug, Default)]
pub struct AskScreen {
    focus: AskControl,
    yes_area: Rect,
    no_area: Rect,
}

impl AskScreen {
    /// Create a new ask screen
    pub fn new() -> Self {
        Self::default()
    }

    /// Control that Enter activates
    pub fn focus(&self) -> AskControl {
        self.focus
    }

    /// Where the "yes" button was last drawn
    pub fn yes_area(&self) -> Rect {
        self.yes_area
    }

    /// Where the "no" button was last drawn
    pub fn no_area(&self) -> Rect {
        self.no_area
    }

    /// Handle key events for the ask screen
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<FlowMessage> {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') => return Some(FlowMessage::Accept),
            KeyCode::Char('n') | KeyCode::Char('N') => return Some(FlowMessage::Decline),
            _ => {}
        }

        match FlowController::key_to_navigation(key) {
            NavigationAction::Left => self.focus = AskControl::Yes,
            NavigationAction::Right => self.focus = AskControl::No,
            NavigationAction::Next | NavigationAction::Previous => {
                self.focus = self.focus.toggled()
            }
            NavigationAction::Select => return Some(self.focus.message()),
            _ => {}
        }
        None
    }

    /// Handle a left click at the given cell
    pub fn handle_click(&mut self, column: u16, row: u16) -> Option<FlowMessage> {
        if hit(self.yes_area, column, row) {
            self.focus = AskControl::Yes;
            Some(FlowMessage::Accept)
        } else if hit(self.no_area, column, row) {
            self.focus = AskControl::No;
            Some(FlowMessage::Decline)
        } else {
            None
        }
    }

    /// Render the ask screen with the controller's current weights and
    /// "no" label
    pub fn render(&mut self, f: &mut Frame, area: Rect, weights: VisualWeights, no_label: &str) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(2),  // Heart
                Constraint::Length(2),  // Headline
                Constraint::Length(12), // Buttons
                Constraint::Length(1),  // Help
                Constraint::Min(0),
            ])
            .split(area);

        let heart = Paragraph::new("♥")
            .style(Style::default().fg(ROSE).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center);
        f.render_widget(heart, chunks[1]);

        let headline = Paragraph::new("So... do you love me?")
            .style(Style::default().fg(ROSE).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center);
        f.render_widget(headline, chunks[2]);

        self.render_buttons(f, chunks[3], weights, no_label);

        let help = Paragraph::new("←→ Choose  Enter Confirm  Y Yes  N No")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
        f.render_widget(help, chunks[4]);
    }

    fn render_buttons(&mut self, f: &mut Frame, area: Rect, weights: VisualWeights, no_label: &str) {
        // Fixed slots: the "no" button's centre never depends on the weights
        let slots = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(area);

        self.yes_area = button_rect(slots[0], YES_LABEL, weights.affirmative);
        self.no_area = button_rect(slots[1], no_label, weights.negative);

        let yes_style = Style::default()
            .fg(Color::White)
            .bg(ROSE)
            .add_modifier(Modifier::BOLD);
        let no_style = if weights.negative < 0.6 {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default().fg(Color::Gray)
        };

        render_button(f, self.yes_area, YES_LABEL, yes_style, self.focus == AskControl::Yes);
        render_button(f, self.no_area, no_label, no_style, self.focus == AskControl::No);
    }
}

/// Size a button for `label` at `weight`, centred in `slot`. The label
/// plus its border always fits, however small the weight.
pub fn button_rect(slot: Rect, label: &str, weight: f64) -> Rect {
    let label_width = Line::from(label).width() as u16;
    let min_width = label_width + 2;
    scaled_rect(
        slot,
        min_width + 2 * BASE_PADDING,
        BASE_HEIGHT,
        weight,
        min_width,
        BASE_HEIGHT,
    )
}

fn render_button(f: &mut Frame, area: Rect, label: &str, style: Style, focused: bool) {
    let border_style = if focused {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(ROSE)
    };

    // Vertically centre the label inside the border
    let inner_height = area.height.saturating_sub(2);
    let mut lines = vec![Line::from(""); usize::from(inner_height.saturating_sub(1) / 2)];
    lines.push(Line::from(label));

    let button = Paragraph::new(lines)
        .style(style)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(if focused { BorderType::Double } else { BorderType::Rounded })
                .border_style(border_style),
        );
    f.render_widget(Clear, area);
    f.render_widget(button, area);
}
