use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::model::ids::{QuestionId, QuizId};

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizError {
    #[error("quiz title cannot be empty")]
    EmptyTitle,

    #[error("quiz must contain at least one question")]
    NoQuestions,

    #[error("passing score must be between 0 and 100, got {0}")]
    InvalidPassingScore(u32),

    #[error("question text cannot be empty")]
    EmptyQuestion,

    #[error("question needs at least two options, got {0}")]
    TooFewOptions(usize),

    #[error("correct option {index} is out of range for {len} options")]
    CorrectOptionOutOfRange { index: usize, len: usize },
}

//
// ─── CATEGORY ──────────────────────────────────────────────────────────────────
//

/// Subject area shared by lessons and quizzes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Html,
    Css,
    Javascript,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Html, Category::Css, Category::Javascript];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Html => "html",
            Category::Css => "css",
            Category::Javascript => "javascript",
        }
    }

    /// Course title shown for the category on the dashboard.
    #[must_use]
    pub fn course_title(self) -> &'static str {
        match self {
            Category::Html => "HTML Fundamentals",
            Category::Css => "CSS Styling",
            Category::Javascript => "JavaScript Programming",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "html" => Some(Category::Html),
            "css" => Some(Category::Css),
            "javascript" | "js" => Some(Category::Javascript),
            _ => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

//
// ─── QUESTION ──────────────────────────────────────────────────────────────────
//

/// A single multiple-choice question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    id: QuestionId,
    text: String,
    options: Vec<String>,
    correct_option: usize,
    explanation: String,
}

impl Question {
    /// Creates a validated question.
    ///
    /// # Errors
    ///
    /// Returns `QuizError` if the text is blank, fewer than two options are
    /// given, or `correct_option` does not index into `options`.
    pub fn new(
        id: QuestionId,
        text: impl Into<String>,
        options: Vec<String>,
        correct_option: usize,
        explanation: impl Into<String>,
    ) -> Result<Self, QuizError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(QuizError::EmptyQuestion);
        }
        if options.len() < 2 {
            return Err(QuizError::TooFewOptions(options.len()));
        }
        if correct_option >= options.len() {
            return Err(QuizError::CorrectOptionOutOfRange {
                index: correct_option,
                len: options.len(),
            });
        }

        Ok(Self {
            id,
            text,
            options,
            correct_option,
            explanation: explanation.into(),
        })
    }

    #[must_use]
    pub fn id(&self) -> &QuestionId {
        &self.id
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    #[must_use]
    pub fn correct_option(&self) -> usize {
        self.correct_option
    }

    #[must_use]
    pub fn explanation(&self) -> &str {
        &self.explanation
    }

    #[must_use]
    pub fn is_correct(&self, option: usize) -> bool {
        option == self.correct_option
    }
}

//
// ─── QUIZ ──────────────────────────────────────────────────────────────────────
//

/// An ordered set of questions with a passing threshold in percent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quiz {
    id: QuizId,
    title: String,
    category: Category,
    questions: Vec<Question>,
    passing_score: u32,
}

impl Quiz {
    /// Creates a validated quiz.
    ///
    /// # Errors
    ///
    /// Returns `QuizError` for a blank title, an empty question list, or a
    /// passing score above 100.
    pub fn new(
        id: QuizId,
        title: impl Into<String>,
        category: Category,
        questions: Vec<Question>,
        passing_score: u32,
    ) -> Result<Self, QuizError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(QuizError::EmptyTitle);
        }
        if questions.is_empty() {
            return Err(QuizError::NoQuestions);
        }
        if passing_score > 100 {
            return Err(QuizError::InvalidPassingScore(passing_score));
        }

        Ok(Self {
            id,
            title,
            category,
            questions,
            passing_score,
        })
    }

    #[must_use]
    pub fn id(&self) -> &QuizId {
        &self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn category(&self) -> Category {
        self.category
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn passing_score(&self) -> u32 {
        self.passing_score
    }

    #[must_use]
    pub fn is_passing(&self, score: u32) -> bool {
        score >= self.passing_score
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    fn options(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("option {i}")).collect()
    }

    fn question(correct: usize) -> Question {
        Question::new(QuestionId::new("q1"), "Pick one", options(4), correct, "").unwrap()
    }

    #[test]
    fn question_rejects_correct_option_out_of_range() {
        let err = Question::new(QuestionId::new("q1"), "Pick one", options(4), 4, "").unwrap_err();
        assert_eq!(err, QuizError::CorrectOptionOutOfRange { index: 4, len: 4 });
    }

    #[test]
    fn question_rejects_single_option() {
        let err = Question::new(QuestionId::new("q1"), "Pick one", options(1), 0, "").unwrap_err();
        assert_eq!(err, QuizError::TooFewOptions(1));
    }

    #[test]
    fn question_rejects_blank_text() {
        let err = Question::new(QuestionId::new("q1"), "  ", options(2), 0, "").unwrap_err();
        assert_eq!(err, QuizError::EmptyQuestion);
    }

    #[test]
    fn quiz_requires_questions() {
        let err = Quiz::new(QuizId::new("x"), "X", Category::Html, vec![], 70).unwrap_err();
        assert_eq!(err, QuizError::NoQuestions);
    }

    #[test]
    fn quiz_rejects_passing_score_over_100() {
        let err =
            Quiz::new(QuizId::new("x"), "X", Category::Css, vec![question(0)], 101).unwrap_err();
        assert_eq!(err, QuizError::InvalidPassingScore(101));
    }

    #[test]
    fn passing_is_inclusive() {
        let quiz = Quiz::new(QuizId::new("x"), "X", Category::Css, vec![question(0)], 70).unwrap();
        assert!(quiz.is_passing(70));
        assert!(!quiz.is_passing(69));
    }

    #[test]
    fn category_parses_short_javascript_alias() {
        assert_eq!(Category::parse("JS"), Some(Category::Javascript));
        assert_eq!(Category::parse("python"), None);
    }

    #[test]
    fn category_serializes_lowercase() {
        let json = serde_json::to_string(&Category::Javascript).unwrap();
        assert_eq!(json, "\"javascript\"");
    }
}
