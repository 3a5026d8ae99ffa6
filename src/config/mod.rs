//! Configuration management module
//!
//! Handles loading and validation of the greeting content: names, quiz
//! questions, "no" button labels, weight tuning and assets.

use std::fs;
use std::path::{Path, PathBuf};
use serde::{Deserialize, Serialize};
use crate::models::{QuizQuestion, WeightTuning, DEFAULT_DISSUASION_TEXTS};
use crate::{InquiryError, Result, APP_NAME, CONFIG_FILE};

/// Local image shown on the success screen
pub const SUCCESS_IMAGE: &str = "./couple.png";
/// Substituted when the local image cannot be loaded
pub const FALLBACK_IMAGE_URL: &str =
    "https://images.unsplash.com/photo-1516589174184-c68526677af0?q=80&w=1000&auto=format&fit=crop";
/// Number of hearts in the background layer
pub const DEFAULT_PARTICLE_COUNT: usize = 20;

/// Full greeting configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GreetingConfig {
    /// Who the greeting is addressed to
    pub recipient: RecipientConfig,
    /// Quiz questions, asked in order
    pub questions: Vec<QuizQuestion>,
    /// Labels cycled through by the "no" button
    pub dissuasion: Vec<String>,
    /// How much the buttons grow and shrink per "no"
    pub weights: WeightTuning,
    /// Success screen image
    pub image: ImageConfig,
    /// Background hearts
    pub ambient: AmbientConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecipientConfig {
    /// Name used in "Hi <name>!"
    pub greeted: String,
}

impl Default for RecipientConfig {
    fn default() -> Self {
        Self {
            greeted: "Tanmay".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageConfig {
    /// Local image path
    pub primary: String,
    /// Remote URL used when the local image fails
    pub fallback: String,
}

impl Default for ImageConfig {
    fn default() -> Self {
        Self {
            primary: SUCCESS_IMAGE.to_string(),
            fallback: FALLBACK_IMAGE_URL.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AmbientConfig {
    pub particle_count: usize,
}

impl Default for AmbientConfig {
    fn default() -> Self {
        Self {
            particle_count: DEFAULT_PARTICLE_COUNT,
        }
    }
}

impl Default for GreetingConfig {
    fn default() -> Self {
        Self {
            recipient: RecipientConfig::default(),
            questions: default_questions(),
            dissuasion: DEFAULT_DISSUASION_TEXTS.iter().map(|t| t.to_string()).collect(),
            weights: WeightTuning::default(),
            image: ImageConfig::default(),
            ambient: AmbientConfig::default(),
        }
    }
}

/// The built-in quiz
pub fn default_questions() -> Vec<QuizQuestion> {
    vec![
        QuizQuestion::new(
            "What is Tanu's actual spirit animal?",
            &[
                "A panda that only eats and naps 🐼",
                "A tiny kitten that bites when hungry 🐱",
                "A majestic, very sleepy potato 🥔",
            ],
        ),
        QuizQuestion::new(
            "What is Tanu's most dangerous state of being?",
            &[
                "The 'I'm not hungry' (eats all your food) 🍟",
                "The '5 more minutes' morning nap 😴",
                "The 'I have nothing to wear' crisis 👗",
            ],
        ),
        QuizQuestion::new(
            "What happens if Tanu goes 2 hours without attention?",
            &[
                "She starts speaking to the furniture 🪑",
                "She becomes a professional botherer 🎀",
                "She enters stealth mode to scare you 👻",
            ],
        ),
    ]
}

impl GreetingConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the configuration parameters
    pub fn validate(&self) -> Result<()> {
        if self.recipient.greeted.trim().is_empty() {
            return Err(InquiryError::ConfigError(
                "Recipient name must not be empty".to_string()
            ));
        }

        if self.questions.is_empty() {
            return Err(InquiryError::ConfigError(
                "At least one quiz question is required".to_string()
            ));
        }

        if let Some((i, _)) = self.questions.iter().enumerate().find(|(_, q)| q.options.is_empty()) {
            return Err(InquiryError::ConfigError(
                format!("Question {} has no options", i + 1)
            ));
        }

        if self.dissuasion.is_empty() {
            return Err(InquiryError::ConfigError(
                "Dissuasion text list must not be empty".to_string()
            ));
        }

        self.weights.validate()?;

        if self.ambient.particle_count == 0 {
            return Err(InquiryError::ConfigError(
                "Particle count must be greater than 0".to_string()
            ));
        }

        Ok(())
    }

    /// Set the greeted name
    pub fn with_greeted<S: Into<String>>(mut self, name: S) -> Self {
        self.recipient.greeted = name.into();
        self
    }

    /// Replace the quiz
    pub fn with_questions(mut self, questions: Vec<QuizQuestion>) -> Self {
        self.questions = questions;
        self
    }

    /// Replace the "no" button labels
    pub fn with_dissuasion(mut self, texts: Vec<String>) -> Self {
        self.dissuasion = texts;
        self
    }

    /// Set the weight tuning
    pub fn with_weights(mut self, weights: WeightTuning) -> Self {
        self.weights = weights;
        self
    }

    /// Set the success image sources
    pub fn with_image<P: Into<String>, F: Into<String>>(mut self, primary: P, fallback: F) -> Self {
        self.image = ImageConfig {
            primary: primary.into(),
            fallback: fallback.into(),
        };
        self
    }

    /// Set the number of background hearts
    pub fn with_particle_count(mut self, count: usize) -> Self {
        self.ambient.particle_count = count;
        self
    }

    /// Load configuration from the standard config file location
    /// Returns default configuration if file doesn't exist
    pub fn load() -> Result<Self> {
        let config_path = Self::config_file_path()?;
        Self::load_from(&config_path)
    }

    /// Load configuration from `path`, falling back to defaults if the
    /// file doesn't exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| InquiryError::ConfigError(
                format!("Failed to read config file {}: {}", path.display(), e)
            ))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| InquiryError::ConfigError(
                format!("Failed to parse config file {}: {}", path.display(), e)
            ))?;

        config.validate()?;

        Ok(config)
    }

    /// Get the standard configuration file path
    /// Uses $CONFIG_HOME/love-inquiry/love-inquiry.toml
    pub fn config_file_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| InquiryError::ConfigError(
                "Unable to determine config directory".to_string()
            ))?;

        Ok(config_dir.join(APP_NAME).join(CONFIG_FILE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = GreetingConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.questions.len(), 3);
        assert_eq!(config.dissuasion.len(), 16);
        assert_eq!(config.dissuasion[0], "No");
        assert_eq!(config.ambient.particle_count, 20);
    }

    #[test]
    fn test_serde_serialization() {
        let config = GreetingConfig::default().with_greeted("Sam");
        let json = serde_json::to_string(&config).expect("Failed to serialize");
        let deserialized: GreetingConfig = serde_json::from_str(&json).expect("Failed to deserialize");
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let toml_str = r#"
            [recipient]
            greeted = "Alex"

            [weights]
            affirmative_step = 0.5
        "#;
        let config: GreetingConfig = toml::from_str(toml_str).expect("Failed to parse TOML");
        assert_eq!(config.recipient.greeted, "Alex");
        assert_eq!(config.weights.affirmative_step, 0.5);
        assert_eq!(config.weights.negative_step, 0.1);
        assert_eq!(config.questions, default_questions());
        assert_eq!(config.image.fallback, FALLBACK_IMAGE_URL);
    }

    #[test]
    fn test_validation_rejects_bad_content() {
        assert!(GreetingConfig::default().with_questions(Vec::new()).validate().is_err());
        assert!(GreetingConfig::default().with_dissuasion(Vec::new()).validate().is_err());
        assert!(GreetingConfig::default().with_particle_count(0).validate().is_err());
        assert!(GreetingConfig::default().with_greeted("  ").validate().is_err());

        let no_options = vec![QuizQuestion::new("Anything?", &[])];
        let err = GreetingConfig::default()
            .with_questions(no_options)
            .validate()
            .unwrap_err();
        assert!(err.to_string().contains("Question 1"));
    }

    #[test]
    fn test_config_file_path() {
        let path = GreetingConfig::config_file_path();
        assert!(path.is_ok());
        let path = path.unwrap();
        assert!(path.to_string_lossy().contains("love-inquiry.toml"));
    }
}
