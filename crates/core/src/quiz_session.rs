//! Drives a single quiz from the first question to a final score.
//!
//! A session owns its attempt state (question index, recorded answers,
//! attempt counter). It never touches storage; callers persist the final
//! score through the services layer.

use thiserror::Error;

use crate::model::{Question, Quiz};

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizSessionError {
    #[error("option {option} is out of range for a question with {len} options")]
    OptionOutOfRange { option: usize, len: usize },

    #[error("quiz attempt already completed")]
    AlreadyCompleted,

    #[error("maximum attempts reached ({max})")]
    MaxAttemptsReached { max: u32 },

    #[error("max attempts must be at least 1")]
    InvalidMaxAttempts,
}

//
// ─── POLICY ────────────────────────────────────────────────────────────────────
//

/// How many attempts (initial + retries) a session allows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    max_attempts: u32,
}

impl RetryPolicy {
    pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;

    /// # Errors
    ///
    /// Returns `QuizSessionError::InvalidMaxAttempts` when `max_attempts` is zero.
    pub fn new(max_attempts: u32) -> Result<Self, QuizSessionError> {
        if max_attempts == 0 {
            return Err(QuizSessionError::InvalidMaxAttempts);
        }
        Ok(Self { max_attempts })
    }

    #[must_use]
    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: Self::DEFAULT_MAX_ATTEMPTS,
        }
    }
}

//
// ─── STATE ─────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizState {
    InProgress { question_index: usize },
    Completed { score: u32 },
}

/// Per-question result shown after an attempt completes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionReview<'a> {
    pub question: &'a Question,
    pub selected: usize,
    pub correct: bool,
}

/// Percentage of correct answers, rounded half-up to a whole number.
///
/// Positions without a matching question (or vice versa) are ignored; the
/// denominator is always the number of questions.
#[must_use]
pub fn score_answers(questions: &[Question], answers: &[usize]) -> u32 {
    let total = questions.len();
    if total == 0 {
        return 0;
    }
    let correct = questions
        .iter()
        .zip(answers)
        .filter(|(q, a)| q.is_correct(**a))
        .count();

    // round(100 * correct / total) with halves rounded up, in integers.
    let scaled = (200 * correct + total) / (2 * total);
    u32::try_from(scaled).unwrap_or(100).min(100)
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct QuizSession {
    quiz: Quiz,
    policy: RetryPolicy,
    state: QuizState,
    answers: Vec<usize>,
    attempt: u32,
}

impl QuizSession {
    #[must_use]
    pub fn new(quiz: Quiz) -> Self {
        Self::with_policy(quiz, RetryPolicy::default())
    }

    #[must_use]
    pub fn with_policy(quiz: Quiz, policy: RetryPolicy) -> Self {
        Self {
            quiz,
            policy,
            state: QuizState::InProgress { question_index: 0 },
            answers: Vec::new(),
            attempt: 0,
        }
    }

    #[must_use]
    pub fn quiz(&self) -> &Quiz {
        &self.quiz
    }

    #[must_use]
    pub fn state(&self) -> QuizState {
        self.state
    }

    #[must_use]
    pub fn answers(&self) -> &[usize] {
        &self.answers
    }

    /// Zero-based attempt counter.
    #[must_use]
    pub fn attempt(&self) -> u32 {
        self.attempt
    }

    #[must_use]
    pub fn attempts_used(&self) -> u32 {
        self.attempt + 1
    }

    #[must_use]
    pub fn attempts_remaining(&self) -> u32 {
        self.policy.max_attempts().saturating_sub(self.attempts_used())
    }

    #[must_use]
    pub fn can_retry(&self) -> bool {
        self.attempts_remaining() > 0
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        matches!(self.state, QuizState::Completed { .. })
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        match self.state {
            QuizState::InProgress { question_index } => self.quiz.questions().get(question_index),
            QuizState::Completed { .. } => None,
        }
    }

    /// One-based position of the current question and the total, for "Question 2 of 5".
    #[must_use]
    pub fn position(&self) -> (usize, usize) {
        let total = self.quiz.question_count();
        match self.state {
            QuizState::InProgress { question_index } => (question_index + 1, total),
            QuizState::Completed { .. } => (total, total),
        }
    }

    #[must_use]
    pub fn score(&self) -> Option<u32> {
        match self.state {
            QuizState::Completed { score } => Some(score),
            QuizState::InProgress { .. } => None,
        }
    }

    #[must_use]
    pub fn passed(&self) -> Option<bool> {
        self.score().map(|score| self.quiz.is_passing(score))
    }

    /// Records an answer for the current question and advances.
    ///
    /// # Errors
    ///
    /// Returns `QuizSessionError::OptionOutOfRange` if `option` does not index
    /// into the current question's options, and `AlreadyCompleted` once the
    /// attempt has a score. State is unchanged on error.
    pub fn submit_answer(&mut self, option: usize) -> Result<QuizState, QuizSessionError> {
        let QuizState::InProgress { question_index } = self.state else {
            return Err(QuizSessionError::AlreadyCompleted);
        };
        let len = self.quiz.questions()[question_index].options().len();
        if option >= len {
            return Err(QuizSessionError::OptionOutOfRange { option, len });
        }

        self.answers.push(option);
        let next = question_index + 1;
        self.state = if next < self.quiz.question_count() {
            QuizState::InProgress {
                question_index: next,
            }
        } else {
            QuizState::Completed {
                score: score_answers(self.quiz.questions(), &self.answers),
            }
        };
        Ok(self.state)
    }

    /// Starts the next attempt from the first question.
    ///
    /// # Errors
    ///
    /// Returns `QuizSessionError::MaxAttemptsReached` when the current attempt
    /// is already the last one allowed by the policy.
    pub fn retry(&mut self) -> Result<(), QuizSessionError> {
        if !self.can_retry() {
            return Err(QuizSessionError::MaxAttemptsReached {
                max: self.policy.max_attempts(),
            });
        }
        self.attempt += 1;
        self.answers.clear();
        self.state = QuizState::InProgress { question_index: 0 };
        Ok(())
    }

    /// Per-question breakdown of the finished attempt; `None` while in progress.
    #[must_use]
    pub fn review(&self) -> Option<Vec<QuestionReview<'_>>> {
        if !self.is_complete() {
            return None;
        }
        Some(
            self.quiz
                .questions()
                .iter()
                .zip(&self.answers)
                .map(|(question, &selected)| QuestionReview {
                    question,
                    selected,
                    correct: question.is_correct(selected),
                })
                .collect(),
        )
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
