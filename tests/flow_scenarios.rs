//! End-to-end walks through the greeting flow

use love_inquiry::app::{FlowController, FlowMessage, FlowState, QuizScreen};
use love_inquiry::config::default_questions;
use love_inquiry::models::{QuizQuestion, DEFAULT_DISSUASION_TEXTS};

const EPS: f64 = 1e-9;

fn at_ask() -> FlowController {
    let mut flow = FlowController::default();
    flow.advance_to_quiz();
    flow.complete_quiz();
    flow
}

#[test]
fn test_three_answers_reach_ask() {
    let mut flow = FlowController::default();
    assert_eq!(flow.current_state(), FlowState::Start);
    flow.advance_to_quiz();
    assert_eq!(flow.current_state(), FlowState::Quiz);

    let mut quiz = QuizScreen::new(default_questions());
    let mut history = vec![quiz.progress().current()];
    for choice in [0, 2, 1] {
        assert_eq!(flow.current_state(), FlowState::Quiz);
        match quiz.select_option(choice) {
            Some(message) => flow.dispatch(message),
            None => history.push(quiz.progress().current()),
        }
    }

    assert_eq!(history, vec![0, 1, 2]);
    assert_eq!(flow.current_state(), FlowState::Ask);
}

#[test]
fn test_completion_fires_exactly_once_for_any_choices() {
    let questions: Vec<QuizQuestion> = (0..5)
        .map(|i| QuizQuestion::new(format!("Q{}", i), &["a", "b", "c", "d"]))
        .collect();

    for seed in 0..4usize {
        let mut quiz = QuizScreen::new(questions.clone());
        let completions = (0..questions.len())
            .map(|i| quiz.select_option((i * 7 + seed) % 4))
            .filter(|m| *m == Some(FlowMessage::QuizComplete))
            .count();
        assert_eq!(completions, 1);
        assert_eq!(quiz.progress().current(), questions.len() - 1);
    }
}

#[test]
fn test_five_declines_then_accept() {
    let mut flow = at_ask();
    for _ in 0..5 {
        flow.decline();
        assert_eq!(flow.current_state(), FlowState::Ask);
    }
    let weights = flow.weights();
    assert!((weights.affirmative - 2.5).abs() < EPS);
    assert!((weights.negative - 0.5).abs() < EPS);
    assert_eq!(flow.dissuasion_text(), DEFAULT_DISSUASION_TEXTS[5]);

    flow.accept();
    assert_eq!(flow.current_state(), FlowState::Success);
}

#[test]
fn test_weights_and_labels_for_any_decline_count() {
    let mut flow = at_ask();
    for n in 0..=50u32 {
        let weights = flow.weights();
        let expected_no = (1.0 - f64::from(n) * 0.1).max(0.3);
        assert!((weights.affirmative - (1.0 + f64::from(n) * 0.3)).abs() < EPS);
        assert!((weights.negative - expected_no).abs() < EPS);
        assert_eq!(flow.dissuasion_index(), n as usize % 16);
        flow.decline();
    }
}

#[test]
fn test_accept_reachable_at_every_decline_count() {
    for n in [0u32, 1, 7, 16, 33] {
        let mut flow = at_ask();
        for _ in 0..n {
            flow.dispatch(FlowMessage::Decline);
        }
        flow.dispatch(FlowMessage::Accept);
        assert_eq!(flow.current_state(), FlowState::Success, "after {} declines", n);
    }
}

#[test]
fn test_first_label_matches_resting_label() {
    let flow = at_ask();
    assert_eq!(DEFAULT_DISSUASION_TEXTS.len(), 16);
    assert_eq!(flow.dissuasion_text(), DEFAULT_DISSUASION_TEXTS[0]);
    assert_eq!(flow.dissuasion_text(), "No");
}
