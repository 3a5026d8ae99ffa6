//! Data models module
//! 
//! Contains the quiz, dissuasion and visual-weight state that drives the
//! greeting flow, plus the decorative particle and image models.

pub mod dissuasion;
pub mod image;
pub mod particle;
pub mod quiz;
pub mod weights;

// Re-export commonly used types
pub use dissuasion::{DissuasionCycle, DEFAULT_DISSUASION_TEXTS};
pub use image::{ImageStatus, SuccessImage};
pub use particle::AmbientParticle;
pub use quiz::{QuizProgress, QuizQuestion, QuizStep};
pub use weights::{VisualWeights, WeightTuning};
