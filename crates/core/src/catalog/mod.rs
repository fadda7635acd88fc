//! Read-only lesson and quiz content.

mod lessons;
mod quizzes;

use crate::model::{Category, Lesson, LessonId, Quiz, QuizError, QuizId};

#[derive(Debug, Clone)]
pub struct ContentCatalog {
    lessons: Vec<Lesson>,
    quizzes: Vec<Quiz>,
}

impl ContentCatalog {
    #[must_use]
    pub fn new(lessons: Vec<Lesson>, quizzes: Vec<Quiz>) -> Self {
        Self { lessons, quizzes }
    }

    /// The academy's bundled HTML, CSS and JavaScript course content.
    ///
    /// # Panics
    ///
    /// Panics if the bundled quiz data fails validation, which the tests below rule out.
    #[must_use]
    pub fn builtin() -> Self {
        Self::try_builtin().expect("bundled quiz content should be valid")
    }

    /// Fallible variant of [`ContentCatalog::builtin`].
    ///
    /// # Errors
    ///
    /// Returns `QuizError` if any bundled question or quiz is malformed.
    pub fn try_builtin() -> Result<Self, QuizError> {
        Ok(Self::new(lessons::builtin_lessons(), quizzes::builtin_quizzes()?))
    }

    #[must_use]
    pub fn lessons(&self) -> &[Lesson] {
        &self.lessons
    }

    #[must_use]
    pub fn quizzes(&self) -> &[Quiz] {
        &self.quizzes
    }

    #[must_use]
    pub fn lesson(&self, id: &LessonId) -> Option<&Lesson> {
        self.lessons.iter().find(|lesson| lesson.id == *id)
    }

    #[must_use]
    pub fn quiz(&self, id: &QuizId) -> Option<&Quiz> {
        self.quizzes.iter().find(|quiz| quiz.id() == id)
    }

    pub fn lessons_in(&self, category: Category) -> impl Iterator<Item = &Lesson> {
        self.lessons
            .iter()
            .filter(move |lesson| lesson.category == category)
    }

    pub fn quizzes_in(&self, category: Category) -> impl Iterator<Item = &Quiz> {
        self.quizzes
            .iter()
            .filter(move |quiz| quiz.category() == category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn builtin_content_is_valid() {
        let catalog = ContentCatalog::try_builtin().unwrap();
        assert_eq!(catalog.lessons().len(), 18);
        assert_eq!(catalog.quizzes().len(), 3);
    }

    #[test]
    fn six_lessons_per_category() {
        let catalog = ContentCatalog::builtin();
        for category in Category::ALL {
            assert_eq!(catalog.lessons_in(category).count(), 6, "{category}");
            assert_eq!(catalog.quizzes_in(category).count(), 1, "{category}");
        }
    }

    #[test]
    fn ids_are_unique() {
        let catalog = ContentCatalog::builtin();
        let lesson_ids: HashSet<_> = catalog.lessons().iter().map(|l| l.id.clone()).collect();
        assert_eq!(lesson_ids.len(), catalog.lessons().len());
        let question_ids: HashSet<_> = catalog
            .quizzes()
            .iter()
            .flat_map(|q| q.questions().iter().map(|question| question.id().clone()))
            .collect();
        assert_eq!(question_ids.len(), 15);
    }

    #[test]
    fn lookup_by_id() {
        let catalog = ContentCatalog::builtin();
        let lesson = catalog.lesson(&LessonId::new("css-4")).unwrap();
        assert_eq!(lesson.title, "CSS Flexbox");
        assert!(catalog.lesson(&LessonId::new("css-99")).is_none());
        assert_eq!(
            catalog.quiz(&QuizId::new("js-quiz")).unwrap().category(),
            Category::Javascript
        );
        assert!(catalog.quiz(&QuizId::new("rust-quiz")).is_none());
    }

    #[test]
    fn every_quiz_passes_at_70() {
        let catalog = ContentCatalog::builtin();
        assert!(catalog.quizzes().iter().all(|q| q.passing_score() == 70));
    }
}
