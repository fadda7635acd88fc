use std::sync::Arc;

use academy_core::model::{Certificate, LessonId, Progress, QuizId, UserId};
use storage::repository::ProgressRepository;
use tracing::{debug, info};

use crate::Clock;
use crate::error::ProgressServiceError;

/// Reads and updates per-user progress records.
///
/// Every mutation loads the stored record, applies one change and writes the
/// whole record back.
#[derive(Clone)]
pub struct ProgressService {
    clock: Clock,
    progress: Arc<dyn ProgressRepository>,
}

impl ProgressService {
    #[must_use]
    pub fn new(clock: Clock, progress: Arc<dyn ProgressRepository>) -> Self {
        Self { clock, progress }
    }

    /// Stored progress for `user_id`, or an empty record if none exists yet.
    ///
    /// # Errors
    ///
    /// Returns `ProgressServiceError::Storage` if the stored record is
    /// unreadable or corrupt.
    pub async fn get(&self, user_id: UserId) -> Result<Progress, ProgressServiceError> {
        let stored = self.progress.get_progress(user_id).await?;
        if stored.is_none() {
            debug!(%user_id, "no stored progress, starting empty");
        }
        Ok(stored.unwrap_or_else(|| Progress::empty(user_id)))
    }

    /// Overwrite the stored record.
    ///
    /// # Errors
    ///
    /// Returns `ProgressServiceError::Storage` if the record cannot be written.
    pub async fn save(&self, progress: &Progress) -> Result<(), ProgressServiceError> {
        self.progress.save_progress(progress).await?;
        Ok(())
    }

    /// Mark a lesson completed. Completing it again changes nothing.
    ///
    /// # Errors
    ///
    /// Returns `ProgressServiceError::Storage` if loading or saving fails.
    pub async fn mark_lesson_complete(
        &self,
        user_id: UserId,
        lesson: LessonId,
    ) -> Result<Progress, ProgressServiceError> {
        let mut progress = self.get(user_id).await?;
        let lesson_label = lesson.to_string();
        if progress.complete_lesson(lesson, self.clock.now()) {
            self.save(&progress).await?;
            info!(%user_id, lesson = %lesson_label, "lesson completed");
        } else {
            debug!(%user_id, lesson = %lesson_label, "lesson already completed");
        }
        Ok(progress)
    }

    /// Store a quiz score, replacing any earlier score for the same quiz.
    ///
    /// # Errors
    ///
    /// Returns `ProgressServiceError::Storage` if loading or saving fails.
    pub async fn save_quiz_score(
        &self,
        user_id: UserId,
        quiz: QuizId,
        score: u32,
    ) -> Result<Progress, ProgressServiceError> {
        let mut progress = self.get(user_id).await?;
        info!(%user_id, quiz = %quiz, score, "quiz score saved");
        progress.record_score(quiz, score);
        self.save(&progress).await?;
        Ok(progress)
    }

    /// Append a certificate to the user's record.
    ///
    /// # Errors
    ///
    /// Returns `ProgressServiceError::Storage` if loading or saving fails.
    pub async fn add_certificate(
        &self,
        user_id: UserId,
        certificate: Certificate,
    ) -> Result<Progress, ProgressServiceError> {
        let mut progress = self.get(user_id).await?;
        info!(%user_id, course = %certificate.course_name, "certificate added");
        progress.add_certificate(certificate);
        self.save(&progress).await?;
        Ok(progress)
    }

    /// Flip the bookmark on a lesson; returns whether it is now bookmarked.
    ///
    /// # Errors
    ///
    /// Returns `ProgressServiceError::Storage` if loading or saving fails.
    pub async fn toggle_bookmark(
        &self,
        user_id: UserId,
        lesson: LessonId,
    ) -> Result<bool, ProgressServiceError> {
        let mut progress = self.get(user_id).await?;
        let bookmarked = progress.toggle_bookmark(lesson);
        self.save(&progress).await?;
        debug!(%user_id, bookmarked, "bookmark toggled");
        Ok(bookmarked)
    }

    /// # Errors
    ///
    /// Returns `ProgressServiceError::Storage` if the record cannot be read.
    pub async fn is_bookmarked(
        &self,
        user_id: UserId,
        lesson: &LessonId,
    ) -> Result<bool, ProgressServiceError> {
        Ok(self.get(user_id).await?.is_bookmarked(lesson))
    }
}
