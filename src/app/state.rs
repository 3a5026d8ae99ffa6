//! Application state management
//!
//! Holds the flow state machine (Start -> Quiz -> Ask -> Success), the
//! counters behind the yes/no buttons, and keyboard-to-navigation mapping.

use crate::config::GreetingConfig;
use crate::models::{DissuasionCycle, VisualWeights, WeightTuning};
use crate::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use log::debug;

/// Greeting screens. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlowState {
    /// Welcome screen with a single button
    #[default]
    Start,
    /// Trivia questions
    Quiz,
    /// The yes/no question
    Ask,
    /// Terminal celebration screen
    Success,
}

/// Requests sent from a screen to the flow controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowMessage {
    BeginQuiz,
    QuizComplete,
    Accept,
    Decline,
    Quit,
}

/// Navigation actions that can be triggered by keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationAction {
    /// Move selection up (arrow up, k)
    Up,
    /// Move selection down (arrow down, j)
    Down,
    /// Move selection left (arrow left, h)
    Left,
    /// Move selection right (arrow right, l)
    Right,
    /// Confirm selection (Enter, Space)
    Select,
    /// Go back/cancel (Esc, Backspace)
    Back,
    /// Next item (Tab)
    Next,
    /// Previous item (Shift+Tab)
    Previous,
    /// Quit application (q, Q, Ctrl+C)
    Quit,
    /// No action
    None,
}

/// Owns the flow state and every counter the screens render from
#[derive(Debug)]
pub struct FlowController {
    state: FlowState,
    declines: u32,
    dissuasion: DissuasionCycle,
    tuning: WeightTuning,
    should_quit: bool,
}

impl FlowController {
    /// Create a controller at the start screen
    pub fn new(dissuasion: DissuasionCycle, tuning: WeightTuning) -> Self {
        Self {
            state: FlowState::Start,
            declines: 0,
            dissuasion,
            tuning,
            should_quit: false,
        }
    }

    /// Build a controller from the greeting configuration
    pub fn from_config(config: &GreetingConfig) -> Result<Self> {
        config.weights.validate()?;
        let dissuasion = DissuasionCycle::new(config.dissuasion.clone())?;
        Ok(Self::new(dissuasion, config.weights.clone()))
    }

    /// Get the current flow state
    pub fn current_state(&self) -> FlowState {
        self.state
    }

    /// Check if the application should quit
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Set the quit flag
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Start -> Quiz
    pub fn advance_to_quiz(&mut self) {
        self.transition(FlowState::Start, FlowState::Quiz);
    }

    /// Quiz -> Ask, once the last question has been answered
    pub fn complete_quiz(&mut self) {
        self.transition(FlowState::Quiz, FlowState::Ask);
    }

    /// Ask -> Success. There is no way out of Success.
    pub fn accept(&mut self) {
        self.transition(FlowState::Ask, FlowState::Success);
    }

    /// Stay on Ask, grow "yes", shrink "no" and rotate its label
    pub fn decline(&mut self) {
        if self.state != FlowState::Ask {
            debug!("decline ignored in {:?}", self.state);
            return;
        }
        self.declines = self.declines.saturating_add(1);
        self.dissuasion.advance();
        debug!(
            "decline #{}: label {:?}, weights {:?}",
            self.declines,
            self.dissuasion.current_text(),
            self.weights()
        );
    }

    fn transition(&mut self, from: FlowState, to: FlowState) {
        if self.state == from {
            debug!("flow {:?} -> {:?}", from, to);
            self.state = to;
        } else {
            debug!("transition to {:?} ignored in {:?}", to, self.state);
        }
    }

    /// Apply a screen's request
    pub fn dispatch(&mut self, message: FlowMessage) {
        match message {
            FlowMessage::BeginQuiz => self.advance_to_quiz(),
            FlowMessage::QuizComplete => self.complete_quiz(),
            FlowMessage::Accept => self.accept(),
            FlowMessage::Decline => self.decline(),
            FlowMessage::Quit => self.quit(),
        }
    }

    /// Number of times "no" has been pressed
    pub fn decline_count(&self) -> u32 {
        self.declines
    }

    /// Current button scale factors
    pub fn weights(&self) -> VisualWeights {
        VisualWeights::after_declines(self.declines, &self.tuning)
    }

    /// Label currently shown on the "no" button
    pub fn dissuasion_text(&self) -> &str {
        self.dissuasion.current_text()
    }

    pub fn dissuasion_index(&self) -> usize {
        self.dissuasion.index()
    }

    /// Handle keys that apply on every screen. Returns true if consumed.
    ///
    /// Back only quits where there is nothing to go back to; Quiz and Ask
    /// have no backward transition.
    pub fn handle_global(&mut self, action: NavigationAction) -> bool {
        match action {
            NavigationAction::Quit => {
                self.should_quit = true;
                true
            }
            NavigationAction::Back => {
                if matches!(self.state, FlowState::Start | FlowState::Success) {
                    self.should_quit = true;
                }
                true
            }
            _ => false,
        }
    }

    /// Convert keyboard event to navigation action
    pub fn key_to_navigation(key: KeyEvent) -> NavigationAction {
        match key.code {
            // Quit keys
            KeyCode::Char('q') | KeyCode::Char('Q') => NavigationAction::Quit,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                NavigationAction::Quit
            }

            // Navigation keys
            KeyCode::Up | KeyCode::Char('k') => NavigationAction::Up,
            KeyCode::Down | KeyCode::Char('j') => NavigationAction::Down,
            KeyCode::Left | KeyCode::Char('h') => NavigationAction::Left,
            KeyCode::Right | KeyCode::Char('l') => NavigationAction::Right,

            // Selection and confirmation
            KeyCode::Enter | KeyCode::Char(' ') => NavigationAction::Select,

            // Back/cancel
            KeyCode::Esc | KeyCode::Backspace => NavigationAction::Back,

            // Tab navigation
            KeyCode::BackTab => NavigationAction::Previous,
            KeyCode::Tab => {
                if key.modifiers.contains(KeyModifiers::SHIFT) {
                    NavigationAction::Previous
                } else {
                    NavigationAction::Next
                }
            }

            _ => NavigationAction::None,
        }
    }
}

impl Default for FlowController {
    fn default() -> Self {
        Self::new(DissuasionCycle::default(), WeightTuning::default())
    }
}
