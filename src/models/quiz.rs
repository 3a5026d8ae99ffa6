//! Quiz data models
//!
//! Questions carry no notion of a correct answer: every option simply
//! moves the quiz forward.

use serde::{Deserialize, Serialize};

/// A single multiple-choice question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizQuestion {
    /// Question text shown above the options
    pub prompt: String,
    /// Options in display order
    pub options: Vec<String>,
}

impl QuizQuestion {
    pub fn new<S: Into<String>>(prompt: S, options: &[&str]) -> Self {
        Self {
            prompt: prompt.into(),
            options: options.iter().map(|o| o.to_string()).collect(),
        }
    }
}

/// Outcome of selecting an option
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizStep {
    /// Moved on to the question at this index
    Advanced(usize),
    /// The last question was answered
    Completed,
}

/// Position within a fixed, non-empty question list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizProgress {
    current: usize,
    question_count: usize,
}

impl QuizProgress {
    /// Start at the first of `question_count` questions.
    ///
    /// A zero count is treated as a single question so the index is
    /// always valid; configuration validation rejects empty quizzes.
    pub fn new(question_count: usize) -> Self {
        Self {
            current: 0,
            question_count: question_count.max(1),
        }
    }

    /// Index of the question currently shown
    pub fn current(&self) -> usize {
        self.current
    }

    pub fn question_count(&self) -> usize {
        self.question_count
    }

    pub fn is_last(&self) -> bool {
        self.current + 1 >= self.question_count
    }

    /// Record an answer. The chosen option is irrelevant.
    pub fn select_option(&mut self, _choice: usize) -> QuizStep {
        if self.is_last() {
            QuizStep::Completed
        } else {
            self.current += 1;
            QuizStep::Advanced(self.current)
        }
    }

    /// Fill ratio for the progress gauge, `(current + 1) / count`
    pub fn ratio(&self) -> f64 {
        (self.current + 1) as f64 / self.question_count as f64
    }

    /// "Question 2 of 3"
    pub fn label(&self) -> String {
        format!("Question {} of {}", self.current + 1, self.question_count)
    }
}
