use std::sync::Arc;

use academy_core::catalog::ContentCatalog;
use academy_core::certification::{CertificationEngine, CertificationOutcome, QuizResult};
use academy_core::model::{Certificate, QuizId, User};
use academy_core::quiz_session::{QuestionReview, QuizSession, QuizState, RetryPolicy};
use tracing::{info, warn};

use crate::Clock;
use crate::error::QuizServiceError;
use crate::progress_service::ProgressService;

/// What happened after an answer was submitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizStep {
    Next { question_index: usize },
    Completed { score: u32, passed: bool },
}

/// Result of a finished attempt once it has been persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizOutcome<'a> {
    pub score: u32,
    pub passed: bool,
    pub attempts_used: u32,
    pub attempts_remaining: u32,
    /// Set only when this attempt earned the course certificate.
    pub certificate: Option<Certificate>,
    pub review: Vec<QuestionReview<'a>>,
}

/// Runs quiz attempts against the catalog and persists their results.
#[derive(Clone)]
pub struct QuizService {
    clock: Clock,
    catalog: Arc<ContentCatalog>,
    progress: Arc<ProgressService>,
    engine: CertificationEngine,
    policy: RetryPolicy,
}

impl QuizService {
    #[must_use]
    pub fn new(
        clock: Clock,
        catalog: Arc<ContentCatalog>,
        progress: Arc<ProgressService>,
        engine: CertificationEngine,
    ) -> Self {
        Self {
            clock,
            catalog,
            progress,
            engine,
            policy: RetryPolicy::default(),
        }
    }

    #[must_use]
    pub fn with_retry_policy(mut self, policy: RetryPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Begin the first attempt at a catalog quiz.
    ///
    /// # Errors
    ///
    /// Returns `QuizServiceError::NotFound` if no quiz has this id.
    pub fn start(&self, quiz_id: &QuizId) -> Result<QuizSession, QuizServiceError> {
        let quiz = self
            .catalog
            .quiz(quiz_id)
            .ok_or_else(|| QuizServiceError::NotFound(quiz_id.clone()))?;
        Ok(QuizSession::with_policy(quiz.clone(), self.policy))
    }

    /// # Errors
    ///
    /// Returns `QuizServiceError::Session` if the option is out of range or
    /// the attempt is already complete.
    pub fn answer(
        &self,
        session: &mut QuizSession,
        option: usize,
    ) -> Result<QuizStep, QuizServiceError> {
        let step = match session.submit_answer(option)? {
            QuizState::InProgress { question_index } => QuizStep::Next { question_index },
            QuizState::Completed { score } => QuizStep::Completed {
                score,
                passed: session.quiz().is_passing(score),
            },
        };
        Ok(step)
    }

    /// Start the next attempt of `session`.
    ///
    /// # Errors
    ///
    /// Returns `QuizServiceError::Session` with `MaxAttemptsReached` when no
    /// attempts are left.
    pub fn retry(&self, session: &mut QuizSession) -> Result<(), QuizServiceError> {
        session.retry().map_err(|err| {
            warn!(
                quiz = %session.quiz().id(),
                attempts = session.attempts_used(),
                "retry rejected"
            );
            QuizServiceError::from(err)
        })
    }

    /// Persist a completed attempt and run certification.
    ///
    /// The score is stored whether or not the attempt passed; a pass is then
    /// handed to the certification engine, which may issue the course
    /// certificate.
    ///
    /// # Errors
    ///
    /// Returns `QuizServiceError::NotFinished` if the attempt still has
    /// unanswered questions, or `QuizServiceError::Progress` if persistence
    /// fails.
    pub async fn finish<'a>(
        &self,
        student: &User,
        session: &'a QuizSession,
    ) -> Result<QuizOutcome<'a>, QuizServiceError> {
        let (Some(score), Some(review)) = (session.score(), session.review()) else {
            return Err(QuizServiceError::NotFinished);
        };
        let quiz = session.quiz();

        let mut progress = self
            .progress
            .save_quiz_score(student.id, quiz.id().clone(), score)
            .await?;

        let result = QuizResult {
            quiz_id: quiz.id().clone(),
            score,
            passing_score: quiz.passing_score(),
        };
        let outcome = self
            .engine
            .evaluate(student, &result, &mut progress, self.clock.now());
        if let CertificationOutcome::Issued(certificate) = &outcome {
            self.progress.save(&progress).await?;
            info!(
                user_id = %student.id,
                certificate_id = %certificate.id,
                course = %certificate.course_name,
                "certificate issued"
            );
        }

        Ok(QuizOutcome {
            score,
            passed: result.passed(),
            attempts_used: session.attempts_used(),
            attempts_remaining: session.attempts_remaining(),
            certificate: outcome.certificate().cloned(),
            review,
        })
    }
}
