//! Quiz screen implementation
//!
//! Shows one question at a time with a progress gauge. Any option moves
//! on; answering the last question completes the quiz.

use crate::app::state::{FlowController, FlowMessage, NavigationAction};
use crate::models::{QuizProgress, QuizQuestion, QuizStep};
use crate::util::layout::{centered_box, hit};
use super::{render_card, ROSE};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, BorderType, Borders, Gauge, Paragraph, Wrap},
    Frame,
};

const CARD_WIDTH: u16 = 64;
const OPTION_HEIGHT: u16 = 3;

/// Quiz screen component
#[derive(Debug)]
pub struct QuizScreen {
    questions: Vec<QuizQuestion>,
    progress: QuizProgress,
    highlighted: usize,
    option_areas: Vec<Rect>,
}

impl QuizScreen {
    /// Create a quiz over `questions`, starting at the first one
    pub fn new(questions: Vec<QuizQuestion>) -> Self {
        let progress = QuizProgress::new(questions.len());
        Self {
            questions,
            progress,
            highlighted: 0,
            option_areas: Vec::new(),
        }
    }

    pub fn progress(&self) -> &QuizProgress {
        &self.progress
    }

    /// Question currently shown
    pub fn current_question(&self) -> Option<&QuizQuestion> {
        self.questions.get(self.progress.current())
    }

    /// Index of the highlighted option
    pub fn highlighted(&self) -> usize {
        self.highlighted
    }

    /// Where each option was last drawn, in order
    pub fn option_areas(&self) -> &[Rect] {
        &self.option_areas
    }

    fn option_count(&self) -> usize {
        self.current_question().map_or(0, |q| q.options.len())
    }

    /// Move highlight up, wrapping to the last option
    pub fn select_previous(&mut self) {
        let count = self.option_count();
        if count == 0 {
            return;
        }
        if self.highlighted > 0 {
            self.highlighted -= 1;
        } else {
            self.highlighted = count - 1;
        }
    }

    /// Move highlight down, wrapping to the first option
    pub fn select_next(&mut self) {
        let count = self.option_count();
        if count == 0 {
            return;
        }
        if self.highlighted < count - 1 {
            self.highlighted += 1;
        } else {
            self.highlighted = 0;
        }
    }

    /// Answer the current question. Which option was chosen doesn't matter.
    pub fn select_option(&mut self, choice: usize) -> Option<FlowMessage> {
        match self.progress.select_option(choice) {
            QuizStep::Advanced(_) => {
                self.highlighted = 0;
                None
            }
            QuizStep::Completed => Some(FlowMessage::QuizComplete),
        }
    }

    /// Handle key events for the quiz screen
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<FlowMessage> {
        if let KeyCode::Char(c) = key.code {
            if let Some(digit) = c.to_digit(10) {
                let choice = digit as usize;
                if choice >= 1 && choice <= self.option_count() {
                    return self.select_option(choice - 1);
                }
                return None;
            }
        }

        match FlowController::key_to_navigation(key) {
            NavigationAction::Up | NavigationAction::Previous => self.select_previous(),
            NavigationAction::Down | NavigationAction::Next => self.select_next(),
            NavigationAction::Select => return self.select_option(self.highlighted),
            _ => {}
        }
        None
    }

    /// Handle a left click at the given cell
    pub fn handle_click(&mut self, column: u16, row: u16) -> Option<FlowMessage> {
        let choice = self
            .option_areas
            .iter()
            .position(|area| hit(*area, column, row))?;
        self.select_option(choice)
    }

    /// Render the quiz screen
    pub fn render(&mut self, f: &mut Frame, area: Rect) {
        let Some(question) = self.questions.get(self.progress.current()) else {
            self.option_areas.clear();
            return;
        };
        let option_count = question.options.len() as u16;

        // Gauge, label, gap, two prompt lines, gap, options, plus border and margin
        let card_height = 6 + option_count * OPTION_HEIGHT + 4;
        let card = centered_box(CARD_WIDTH, card_height, area);
        let inner = render_card(f, card);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .horizontal_margin(2)
            .vertical_margin(1)
            .constraints([
                Constraint::Length(1), // Gauge
                Constraint::Length(1), // "Question x of n"
                Constraint::Length(1),
                Constraint::Length(2), // Prompt
                Constraint::Length(1),
                Constraint::Min(0),    // Options
            ])
            .split(inner);

        let gauge = Gauge::default()
            .gauge_style(Style::default().fg(ROSE).bg(Color::DarkGray))
            .ratio(self.progress.ratio())
            .label("");
        f.render_widget(gauge, chunks[0]);

        let label = Paragraph::new(self.progress.label().to_uppercase())
            .style(Style::default().fg(ROSE).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Right);
        f.render_widget(label, chunks[1]);

        let prompt = Paragraph::new(question.prompt.as_str())
            .style(Style::default().fg(Color::LightMagenta).add_modifier(Modifier::BOLD))
            .wrap(Wrap { trim: true });
        f.render_widget(prompt, chunks[3]);

        let option_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints(
                question
                    .options
                    .iter()
                    .map(|_| Constraint::Length(OPTION_HEIGHT))
                    .collect::<Vec<_>>(),
            )
            .split(chunks[5]);

        self.option_areas.clear();
        for (i, option) in question.options.iter().enumerate() {
            let Some(&option_area) = option_chunks.get(i) else {
                break;
            };
            let selected = i == self.highlighted;
            let style = if selected {
                Style::default().fg(Color::Black).bg(ROSE).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::LightRed)
            };
            let border_style = if selected {
                Style::default().fg(ROSE)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            let button = Paragraph::new(format!("{}. {}", i + 1, option))
                .style(style)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_type(BorderType::Rounded)
                        .border_style(border_style),
                );
            f.render_widget(button, option_area);
            self.option_areas.push(option_area);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::default_questions;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_quiz_screen_creation() {
        let screen = QuizScreen::new(default_questions());
        assert_eq!(screen.progress().current(), 0);
        assert_eq!(screen.highlighted(), 0);
        assert_eq!(
            screen.current_question().map(|q| q.prompt.as_str()),
            Some("What is Tanu's actual spirit animal?")
        );
    }

    #[test]
    fn test_option_navigation_wraps() {
        let mut screen = QuizScreen::new(default_questions());
        screen.select_previous();
        assert_eq!(screen.highlighted(), 2);
        screen.select_next();
        assert_eq!(screen.highlighted(), 0);
        screen.select_next();
        assert_eq!(screen.highlighted(), 1);
    }

    #[test]
    fn test_any_option_advances() {
        let mut screen = QuizScreen::new(default_questions());
        assert_eq!(screen.select_option(2), None);
        assert_eq!(screen.progress().current(), 1);
        assert_eq!(screen.select_option(0), None);
        assert_eq!(screen.progress().current(), 2);
        assert_eq!(screen.select_option(1), Some(FlowMessage::QuizComplete));
    }

    #[test]
    fn test_highlight_resets_on_next_question() {
        let mut screen = QuizScreen::new(default_questions());
        screen.select_next();
        screen.select_next();
        assert_eq!(screen.handle_key(key(KeyCode::Enter)), None);
        assert_eq!(screen.highlighted(), 0);
        assert_eq!(screen.progress().current(), 1);
    }

    #[test]
    fn test_digit_keys_pick_options() {
        let mut screen = QuizScreen::new(default_questions());
        assert_eq!(screen.handle_key(key(KeyCode::Char('9'))), None);
        assert_eq!(screen.progress().current(), 0);
        assert_eq!(screen.handle_key(key(KeyCode::Char('0'))), None);
        assert_eq!(screen.progress().current(), 0);
        assert_eq!(screen.handle_key(key(KeyCode::Char('3'))), None);
        assert_eq!(screen.progress().current(), 1);
    }

    #[test]
    fn test_click_outside_options_is_ignored() {
        let mut screen = QuizScreen::new(default_questions());
        assert_eq!(screen.handle_click(5, 5), None);
        assert_eq!(screen.progress().current(), 0);
    }
}
