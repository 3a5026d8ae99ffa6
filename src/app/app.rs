//! Main application controller
//!
//! `Greeting` routes input to the active screen and renders it; `App`
//! wraps it with the terminal and runs the event loop.

use crate::{
    app::{
        screens::{render_footer, AmbientLayer, AskScreen, QuizScreen, StartScreen, SuccessScreen},
        state::{FlowController, FlowMessage, FlowState},
        tui::{InputEvent, Tui},
    },
    config::GreetingConfig,
    models::SuccessImage,
    InquiryError, Result,
};
use log::{debug, info};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

/// The greeting flow: controller plus one component per screen
#[derive(Debug)]
pub struct Greeting {
    greeted: String,
    controller: FlowController,
    ambient: AmbientLayer,
    start_screen: StartScreen,
    quiz_screen: QuizScreen,
    ask_screen: AskScreen,
    success_screen: SuccessScreen,
}

impl Greeting {
    /// Build the flow from a configuration, validating it first
    pub fn new(config: &GreetingConfig) -> Result<Self> {
        config.validate()?;
        let greeted = config.recipient.greeted.clone();
        Ok(Self {
            controller: FlowController::from_config(config)?,
            ambient: AmbientLayer::new(config.ambient.particle_count),
            start_screen: StartScreen::new(greeted.clone()),
            quiz_screen: QuizScreen::new(config.questions.clone()),
            ask_screen: AskScreen::new(),
            success_screen: SuccessScreen::new(
                greeted.clone(),
                SuccessImage::new(config.image.primary.clone(), config.image.fallback.clone()),
            ),
            greeted,
        })
    }

    pub fn controller(&self) -> &FlowController {
        &self.controller
    }

    pub fn ambient(&self) -> &AmbientLayer {
        &self.ambient
    }

    pub fn quiz_screen(&self) -> &QuizScreen {
        &self.quiz_screen
    }

    pub fn ask_screen(&self) -> &AskScreen {
        &self.ask_screen
    }

    pub fn success_screen(&self) -> &SuccessScreen {
        &self.success_screen
    }

    pub fn should_quit(&self) -> bool {
        self.controller.should_quit()
    }

    /// Route one input event to the active screen
    pub fn handle_input(&mut self, input: InputEvent) {
        let message = match input {
            InputEvent::Key(key) => {
                let action = FlowController::key_to_navigation(key);
                if self.controller.handle_global(action) {
                    return;
                }
                match self.controller.current_state() {
                    FlowState::Start => self.start_screen.handle_key(key),
                    FlowState::Quiz => self.quiz_screen.handle_key(key),
                    FlowState::Ask => self.ask_screen.handle_key(key),
                    FlowState::Success => None,
                }
            }
            InputEvent::Click { column, row } => match self.controller.current_state() {
                FlowState::Start => self.start_screen.handle_click(column, row),
                FlowState::Quiz => self.quiz_screen.handle_click(column, row),
                FlowState::Ask => self.ask_screen.handle_click(column, row),
                FlowState::Success => None,
            },
        };

        if let Some(message) = message {
            self.dispatch(message);
        }
    }

    /// Apply a screen message and mount the screen it leads to
    pub fn dispatch(&mut self, message: FlowMessage) {
        debug!("message {:?}", message);
        let before = self.controller.current_state();
        self.controller.dispatch(message);
        let after = self.controller.current_state();

        if before != after && after == FlowState::Success {
            info!(
                "accepted after {} decline(s)",
                self.controller.decline_count()
            );
            self.success_screen.mount();
        }
    }

    /// Render the background, the active screen and the footer
    pub fn render(&mut self, f: &mut Frame, tick: u64) {
        let size = f.size();
        self.ambient.render(f, size);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),    // Screen
                Constraint::Length(1), // Footer
            ])
            .split(size);

        match self.controller.current_state() {
            FlowState::Start => self.start_screen.render(f, chunks[0]),
            FlowState::Quiz => self.quiz_screen.render(f, chunks[0]),
            FlowState::Ask => self.ask_screen.render(
                f,
                chunks[0],
                self.controller.weights(),
                self.controller.dissuasion_text(),
            ),
            FlowState::Success => self.success_screen.render(f, chunks[0], tick),
        }

        render_footer(f, chunks[1], &self.greeted);
    }
}

/// TUI application controller
pub struct App {
    /// Terminal UI handler
    tui: Tui,
    /// Greeting flow and screens
    greeting: Greeting,
}

impl App {
    /// Create a new application instance
    pub fn new(config: GreetingConfig) -> Result<Self> {
        let greeting = Greeting::new(&config)?;
        let tui = Tui::new().map_err(|e| InquiryError::TuiError(e.to_string()))?;
        Ok(Self { tui, greeting })
    }

    /// Initialize the terminal
    pub fn init(&mut self) -> Result<()> {
        self.tui
            .init()
            .map_err(|e| InquiryError::TuiError(e.to_string()))
    }

    /// Restore the terminal
    pub fn restore(&mut self) -> Result<()> {
        self.tui.restore()?;
        Ok(())
    }

    /// Run the main application loop
    pub fn run(&mut self) -> Result<()> {
        while !self.greeting.should_quit() {
            self.draw()?;
            if let Some(input) = self.tui.handle_events()? {
                self.greeting.handle_input(input);
            }
        }
        Ok(())
    }

    /// Draw the current screen
    fn draw(&mut self) -> Result<()> {
        let tick = self.tui.tick();
        let greeting = &mut self.greeting;
        self.tui.draw(|f| greeting.render(f, tick))?;
        Ok(())
    }
}
