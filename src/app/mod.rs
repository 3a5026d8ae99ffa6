//! TUI application module
//! 
//! Contains the terminal user interface components, screen management,
//! and greeting flow state handling.

pub mod app;
pub mod screens;
pub mod state;
pub mod tui;

pub use app::{App, Greeting};
pub use screens::{AmbientLayer, AskControl, AskScreen, QuizScreen, StartScreen, SuccessScreen};
pub use state::{FlowController, FlowMessage, FlowState, NavigationAction};
pub use tui::{InputEvent, Tui};
