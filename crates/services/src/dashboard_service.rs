use std::sync::Arc;

use academy_core::catalog::ContentCatalog;
use academy_core::model::{Category, Progress, UserId};
use serde::Serialize;

use crate::error::ProgressServiceError;
use crate::progress_service::ProgressService;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryProgress {
    pub category: Category,
    pub title: &'static str,
    pub completed: usize,
    pub total: usize,
}

/// Completion overview for one user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub total_lessons: usize,
    pub completed_lessons: usize,
    /// Whole percent, rounded down.
    pub percent_complete: u32,
    pub categories: Vec<CategoryProgress>,
    pub quizzes_passed: usize,
    pub certificates: usize,
    pub all_lessons_done_without_certificate: bool,
}

impl DashboardSummary {
    /// Summarize `progress` against the lessons and quizzes in `catalog`.
    ///
    /// Completed ids that are not in the catalog are not counted.
    #[must_use]
    pub fn build(catalog: &ContentCatalog, progress: &Progress) -> Self {
        let categories: Vec<CategoryProgress> = Category::ALL
            .into_iter()
            .map(|category| {
                let mut total = 0;
                let mut completed = 0;
                for lesson in catalog.lessons_in(category) {
                    total += 1;
                    if progress.has_completed(&lesson.id) {
                        completed += 1;
                    }
                }
                CategoryProgress {
                    category,
                    title: category.course_title(),
                    completed,
                    total,
                }
            })
            .collect();

        let total_lessons = catalog.lessons().len();
        let completed_lessons = categories.iter().map(|c| c.completed).sum();
        let quizzes_passed = catalog
            .quizzes()
            .iter()
            .filter(|quiz| {
                progress
                    .quiz_scores
                    .get(quiz.id())
                    .is_some_and(|&score| quiz.is_passing(score))
            })
            .count();

        Self {
            total_lessons,
            completed_lessons,
            percent_complete: percent(completed_lessons, total_lessons),
            categories,
            quizzes_passed,
            certificates: progress.certificates.len(),
            all_lessons_done_without_certificate: total_lessons > 0
                && completed_lessons == total_lessons
                && !progress.has_certificate(),
        }
    }
}

fn percent(part: usize, whole: usize) -> u32 {
    if whole == 0 {
        return 0;
    }
    u32::try_from(part * 100 / whole).unwrap_or(100)
}

#[derive(Clone)]
pub struct DashboardService {
    catalog: Arc<ContentCatalog>,
    progress: Arc<ProgressService>,
}

impl DashboardService {
    #[must_use]
    pub fn new(catalog: Arc<ContentCatalog>, progress: Arc<ProgressService>) -> Self {
        Self { catalog, progress }
    }

    /// # Errors
    ///
    /// Returns `ProgressServiceError::Storage` if the user's progress cannot be read.
    pub async fn summary(&self, user_id: UserId) -> Result<DashboardSummary, ProgressServiceError> {
        let progress = self.progress.get(user_id).await?;
        Ok(DashboardSummary::build(&self.catalog, &progress))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use academy_core::model::{LessonId, QuizId};
    use academy_core::time::fixed_now;

    #[test]
    fn empty_progress_summarizes_to_zero() {
        let catalog = ContentCatalog::builtin();
        let summary = DashboardSummary::build(&catalog, &Progress::empty(UserId::generate()));
        assert_eq!(summary.total_lessons, 18);
        assert_eq!(summary.completed_lessons, 0);
        assert_eq!(summary.percent_complete, 0);
        assert_eq!(summary.categories.len(), 3);
        assert!(summary.categories.iter().all(|c| c.total == 6));
        assert!(!summary.all_lessons_done_without_certificate);
    }

    #[test]
    fn unknown_lessons_are_not_counted() {
        let catalog = ContentCatalog::builtin();
        let mut progress = Progress::empty(UserId::generate());
        for id in ["html-1", "html-2", "css-1", "not-a-lesson"] {
            progress.complete_lesson(LessonId::new(id), fixed_now());
        }
        progress.record_score(QuizId::new("html-quiz"), 80);
        progress.record_score(QuizId::new("css-quiz"), 60);

        let summary = DashboardSummary::build(&catalog, &progress);
        assert_eq!(summary.completed_lessons, 3);
        assert_eq!(summary.percent_complete, 16);
        assert_eq!(summary.categories[0].completed, 2);
        assert_eq!(summary.categories[1].completed, 1);
        assert_eq!(summary.categories[2].completed, 0);
        assert_eq!(summary.quizzes_passed, 1);
    }

    #[test]
    fn all_lessons_without_certificate_is_flagged() {
        let catalog = ContentCatalog::builtin();
        let mut progress = Progress::empty(UserId::generate());
        for lesson in catalog.lessons() {
            progress.complete_lesson(lesson.id.clone(), fixed_now());
        }
        let summary = DashboardSummary::build(&catalog, &progress);
        assert_eq!(summary.percent_complete, 100);
        assert!(summary.all_lessons_done_without_certificate);
    }
}
