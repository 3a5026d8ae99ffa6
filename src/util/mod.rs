//! Utility functions module
//! 
//! Contains layout helpers shared by the screens.

pub mod layout;

// Re-export commonly used functions
pub use layout::{centered_box, hit, scaled_rect};
