//! Quiz session management.
//! Walks a fixed list of questions, records one result per answered question
//! and keeps the running score.

use super::{QuizConfig, QuizQuestion, QuizResult};
use crate::error::SessionError;
use crate::quiz::validation::is_answer_correct;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionState {
    InProgress,
    Completed,
}

/// A quiz in progress.
///
/// `current_index` never exceeds `questions.len()`; reaching it means the
/// quiz is completed. Every transition either fully applies or returns an
/// error and leaves the session untouched.
#[derive(Debug, Clone, Serialize)]
pub struct QuizSession {
    config: QuizConfig,
    questions: Vec<QuizQuestion>,
    results: Vec<QuizResult>,
    current_index: usize,
    score: usize,
    // Index of the question the last result belongs to
    #[serde(skip)]
    answered_index: Option<usize>,
}

impl QuizSession {
    pub fn new(config: QuizConfig, questions: Vec<QuizQuestion>) -> Self {
        Self {
            config,
            questions,
            results: Vec::new(),
            current_index: 0,
            score: 0,
            answered_index: None,
        }
    }

    pub fn config(&self) -> &QuizConfig {
        &self.config
    }

    pub fn questions(&self) -> &[QuizQuestion] {
        &self.questions
    }

    pub fn results(&self) -> &[QuizResult] {
        &self.results
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn total_count(&self) -> usize {
        self.questions.len()
    }

    pub fn state(&self) -> SessionState {
        if self.current_index < self.questions.len() {
            SessionState::InProgress
        } else {
            SessionState::Completed
        }
    }

    pub fn is_completed(&self) -> bool {
        self.state() == SessionState::Completed
    }

    pub fn current_question(&self) -> Option<&QuizQuestion> {
        self.questions.get(self.current_index)
    }

    /// True once the current question has a recorded answer.
    pub fn is_current_answered(&self) -> bool {
        self.answered_index == Some(self.current_index)
    }

    /// Checks the answer against the current question and records the result.
    /// Does not move to the next question.
    pub fn submit_answer(&mut self, answer: &str) -> Result<&QuizResult, SessionError> {
        let Some(question) = self.questions.get(self.current_index) else {
            return Err(SessionError::Completed);
        };
        if self.is_current_answered() {
            return Err(SessionError::AlreadyAnswered {
                index: self.current_index,
            });
        }

        let is_correct = is_answer_correct(answer, &question.correct_answer);
        self.results.push(QuizResult {
            question: question.clone(),
            user_answer: answer.to_string(),
            is_correct,
        });
        if is_correct {
            self.score += 1;
        }
        self.answered_index = Some(self.current_index);

        Ok(&self.results[self.results.len() - 1])
    }

    /// Moves to the next question. Unanswered questions may be skipped.
    pub fn advance(&mut self) -> Result<SessionState, SessionError> {
        if self.is_completed() {
            return Err(SessionError::AdvancePastEnd);
        }
        self.current_index += 1;
        Ok(self.state())
    }

    /// "Try again": replays the same questions in the same order.
    pub fn reset(&mut self) -> Result<(), SessionError> {
        if !self.is_completed() {
            return Err(SessionError::ResetWhileInProgress);
        }
        self.results.clear();
        self.current_index = 0;
        self.score = 0;
        self.answered_index = None;
        Ok(())
    }

    /// "Question 3 / 10"
    pub fn progress_message(&self) -> String {
        let shown = (self.current_index + 1).min(self.total_count());
        format!("Question {} / {}", shown, self.total_count())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(idx: usize) -> QuizQuestion {
        QuizQuestion {
            infinitive: "hablar".to_string(),
            translation: "to speak".to_string(),
            mood: "Indicativo".to_string(),
            tense: "Presente".to_string(),
            performer: format!("p{idx}"),
            performer_en: String::new(),
            correct_answer: format!("hablé{idx}"),
        }
    }

    fn session(count: usize) -> QuizSession {
        QuizSession::new(
            QuizConfig::setup_defaults(),
            (0..count).map(question).collect(),
        )
    }

    #[test]
    fn test_initial_state() {
        let s = session(3);
        assert_eq!(s.state(), SessionState::InProgress);
        assert_eq!(s.current_index(), 0);
        assert_eq!(s.score(), 0);
        assert!(s.results().is_empty());
        assert_eq!(s.current_question().unwrap().correct_answer, "hablé0");
    }

    #[test]
    fn test_submit_does_not_advance() {
        let mut s = session(2);
        let result = s.submit_answer("HABLE0").unwrap();
        assert!(result.is_correct);
        assert_eq!(result.user_answer, "HABLE0");

        assert_eq!(s.current_index(), 0);
        assert_eq!(s.score(), 1);
        assert_eq!(s.results().len(), 1);
        assert!(s.is_current_answered());
    }

    #[test]
    fn test_wrong_answer_keeps_score() {
        let mut s = session(2);
        assert!(!s.submit_answer("hablo").unwrap().is_correct);
        assert_eq!(s.score(), 0);
        assert_eq!(s.results().len(), 1);
    }

    #[test]
    fn test_double_submit_rejected() {
        let mut s = session(2);
        s.submit_answer("wrong").unwrap();

        let err = s.submit_answer("hablé0").unwrap_err();
        assert_eq!(err, SessionError::AlreadyAnswered { index: 0 });
        assert_eq!(s.results().len(), 1);
        assert!(!s.results()[0].is_correct);
        assert_eq!(s.score(), 0);
    }

    #[test]
    fn test_advance_to_completion() {
        let mut s = session(2);
        assert_eq!(s.advance().unwrap(), SessionState::InProgress);
        assert!(!s.is_current_answered());
        assert_eq!(s.advance().unwrap(), SessionState::Completed);
        assert_eq!(s.current_index(), 2);
        assert!(s.current_question().is_none());
    }

    #[test]
    fn test_advance_past_end_fails() {
        let mut s = session(1);
        s.advance().unwrap();
        assert_eq!(s.advance().unwrap_err(), SessionError::AdvancePastEnd);
        assert_eq!(s.current_index(), 1);
    }

    #[test]
    fn test_submit_after_completion_fails() {
        let mut s = session(1);
        s.submit_answer("hablé0").unwrap();
        s.advance().unwrap();
        assert_eq!(s.submit_answer("x").unwrap_err(), SessionError::Completed);
        assert_eq!(s.results().len(), 1);
    }

    #[test]
    fn test_empty_session_is_completed() {
        let mut s = session(0);
        assert!(s.is_completed());
        assert_eq!(s.submit_answer("x").unwrap_err(), SessionError::Completed);
        assert_eq!(s.advance().unwrap_err(), SessionError::AdvancePastEnd);
    }

    #[test]
    fn test_reset_requires_completion() {
        let mut s = session(2);
        assert_eq!(s.reset().unwrap_err(), SessionError::ResetWhileInProgress);
    }

    #[test]
    fn test_reset_replays_same_questions() {
        let mut s = session(3);
        let questions_ptr = s.questions().as_ptr();
        let questions_before = s.questions().to_vec();
        let config_before = s.config().clone();

        for idx in 0..3 {
            s.submit_answer(&format!("hablé{idx}")).unwrap();
            s.advance().unwrap();
        }
        assert_eq!(s.score(), 3);

        s.reset().unwrap();
        assert_eq!(s.state(), SessionState::InProgress);
        assert_eq!(s.current_index(), 0);
        assert_eq!(s.score(), 0);
        assert!(s.results().is_empty());
        assert!(!s.is_current_answered());
        assert_eq!(s.questions().as_ptr(), questions_ptr);
        assert_eq!(s.questions(), questions_before.as_slice());
        assert_eq!(s.config(), &config_before);

        s.submit_answer("hablé0").unwrap();
        assert_eq!(s.score(), 1);
    }

    #[test]
    fn test_progress_message() {
        let mut s = session(2);
        assert_eq!(s.progress_message(), "Question 1 / 2");
        s.advance().unwrap();
        s.advance().unwrap();
        assert_eq!(s.progress_message(), "Question 2 / 2");
    }
}
