//! Rotating labels for the negative control

use crate::{InquiryError, Result};

/// Labels shown on the "no" button, in order. The first one is the
/// button's resting label.
pub const DEFAULT_DISSUASION_TEXTS: [&str; 16] = [
    "No",
    "Are you sure?",
    "Really sure??",
    "Think again!",
    "Last chance!",
    "Surely not?",
    "You might regret this!",
    "Give it another thought!",
    "Are you absolutely certain?",
    "This could be a mistake!",
    "Have a heart!",
    "Don't be so cold!",
    "Change of heart?",
    "Wouldn't you rather say yes?",
    "Is that your final answer?",
    "You're breaking my heart ;(",
];

/// Cursor over a non-empty list of labels that wraps around
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DissuasionCycle {
    texts: Vec<String>,
    index: usize,
}

impl DissuasionCycle {
    /// Create a cycle over `texts`, which must not be empty
    pub fn new(texts: Vec<String>) -> Result<Self> {
        if texts.is_empty() {
            return Err(InquiryError::ConfigError(
                "Dissuasion text list must not be empty".to_string(),
            ));
        }
        Ok(Self { texts, index: 0 })
    }

    /// Move to the next label, wrapping after the last one
    pub fn advance(&mut self) {
        self.index = (self.index + 1) % self.texts.len();
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.texts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.texts.is_empty()
    }

    /// Label currently shown on the control
    pub fn current_text(&self) -> &str {
        &self.texts[self.index]
    }

    /// Label shown before any decline
    pub fn initial_label(&self) -> &str {
        &self.texts[0]
    }
}

impl Default for DissuasionCycle {
    fn default() -> Self {
        Self {
            texts: DEFAULT_DISSUASION_TEXTS.iter().map(|t| t.to_string()).collect(),
            index: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_cycle() {
        let cycle = DissuasionCycle::default();
        assert_eq!(cycle.len(), 16);
        assert_eq!(cycle.index(), 0);
        assert_eq!(cycle.current_text(), "No");
        assert_eq!(cycle.initial_label(), cycle.current_text());
    }

    #[test]
    fn test_wraps_modulo_length() {
        let mut cycle = DissuasionCycle::default();
        for n in 1..=40usize {
            cycle.advance();
            assert_eq!(cycle.index(), n % 16);
        }
        assert_eq!(cycle.current_text(), DEFAULT_DISSUASION_TEXTS[40 % 16]);
    }

    #[test]
    fn test_empty_list_rejected() {
        assert!(DissuasionCycle::new(Vec::new()).is_err());
    }

    #[test]
    fn test_single_entry_stays_put() {
        let mut cycle = DissuasionCycle::new(vec!["Nope".to_string()]).unwrap();
        cycle.advance();
        cycle.advance();
        assert_eq!(cycle.index(), 0);
        assert_eq!(cycle.current_text(), "Nope");
    }
}
