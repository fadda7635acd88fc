use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::model::ids::{CertificateId, LessonId, QuizId, UserId};

/// Proof of completion for a course.
///
/// Certificates are appended to a user's progress once and never edited.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Certificate {
    pub id: CertificateId,
    pub course_name: String,
    pub date_earned: DateTime<Utc>,
    pub student_name: String,
}

/// Per-user learning state, persisted as one record under `progress_<userId>`.
///
/// Completed lessons and bookmarks behave as sets but keep insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Progress {
    pub user_id: UserId,
    pub completed_lessons: Vec<LessonId>,
    pub quiz_scores: BTreeMap<QuizId, u32>,
    pub certificates: Vec<Certificate>,
    pub bookmarks: Vec<LessonId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_accessed: Option<DateTime<Utc>>,
}

impl Progress {
    /// Empty progress for a user who has not done anything yet.
    #[must_use]
    pub fn empty(user_id: UserId) -> Self {
        Self {
            user_id,
            completed_lessons: Vec::new(),
            quiz_scores: BTreeMap::new(),
            certificates: Vec::new(),
            bookmarks: Vec::new(),
            last_accessed: None,
        }
    }

    #[must_use]
    pub fn has_completed(&self, lesson: &LessonId) -> bool {
        self.completed_lessons.contains(lesson)
    }

    /// Marks a lesson complete and stamps `last_accessed`.
    ///
    /// Returns `false` (and leaves the record untouched) if it was already complete.
    pub fn complete_lesson(&mut self, lesson: LessonId, now: DateTime<Utc>) -> bool {
        if self.has_completed(&lesson) {
            return false;
        }
        self.completed_lessons.push(lesson);
        self.last_accessed = Some(now);
        true
    }

    /// Stores the latest score for a quiz, replacing any previous one.
    pub fn record_score(&mut self, quiz: QuizId, score: u32) {
        self.quiz_scores.insert(quiz, score);
    }

    /// Stored score for a quiz; quizzes never taken count as zero.
    #[must_use]
    pub fn score_for(&self, quiz: &QuizId) -> u32 {
        self.quiz_scores.get(quiz).copied().unwrap_or(0)
    }

    #[must_use]
    pub fn is_bookmarked(&self, lesson: &LessonId) -> bool {
        self.bookmarks.contains(lesson)
    }

    /// Flips bookmark membership and returns the new state.
    pub fn toggle_bookmark(&mut self, lesson: LessonId) -> bool {
        if let Some(pos) = self.bookmarks.iter().position(|b| *b == lesson) {
            self.bookmarks.remove(pos);
            false
        } else {
            self.bookmarks.push(lesson);
            true
        }
    }

    pub fn add_certificate(&mut self, certificate: Certificate) {
        self.certificates.push(certificate);
    }

    #[must_use]
    pub fn has_certificate(&self) -> bool {
        !self.certificates.is_empty()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::fixed_now;

    #[test]
    fn completing_a_lesson_twice_keeps_one_entry() {
        let mut progress = Progress::empty(UserId::generate());
        assert!(progress.complete_lesson(LessonId::new("html-1"), fixed_now()));
        assert!(!progress.complete_lesson(LessonId::new("html-1"), fixed_now()));
        assert_eq!(progress.completed_lessons.len(), 1);
        assert_eq!(progress.last_accessed, Some(fixed_now()));
    }

    #[test]
    fn toggling_bookmark_twice_restores_membership() {
        let mut progress = Progress::empty(UserId::generate());
        let lesson = LessonId::new("css-4");
        assert!(progress.toggle_bookmark(lesson.clone()));
        assert!(progress.is_bookmarked(&lesson));
        assert!(!progress.toggle_bookmark(lesson.clone()));
        assert!(!progress.is_bookmarked(&lesson));
        assert!(progress.bookmarks.is_empty());
    }

    #[test]
    fn record_score_overwrites_previous_value() {
        let mut progress = Progress::empty(UserId::generate());
        let quiz = QuizId::new("js-quiz");
        progress.record_score(quiz.clone(), 100);
        progress.record_score(quiz.clone(), 40);
        assert_eq!(progress.score_for(&quiz), 40);
        assert_eq!(progress.score_for(&QuizId::new("css-quiz")), 0);
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let mut progress = Progress::empty(UserId::generate());
        progress.record_score(QuizId::new("html-quiz"), 80);
        let value = serde_json::to_value(&progress).unwrap();
        assert!(value.get("userId").is_some());
        assert!(value.get("completedLessons").is_some());
        assert_eq!(value["quizScores"]["html-quiz"], 80);
        assert!(value.get("lastAccessed").is_none());
    }

    #[test]
    fn decoding_rejects_missing_fields() {
        let id = UserId::generate();
        let raw = format!(r#"{{"userId":"{id}","completedLessons":[]}}"#);
        assert!(serde_json::from_str::<Progress>(&raw).is_err());
    }

    #[test]
    fn decodes_browser_shaped_record() {
        let id = UserId::generate();
        let raw = format!(
            r#"{{
                "userId":"{id}",
                "completedLessons":["html-1"],
                "quizScores":{{"html-quiz":100}},
                "certificates":[{{
                    "id":"6f1f7a52-0bb6-4a61-9b8c-2d8f0c6a9d11",
                    "courseName":"Web Development Fundamentals",
                    "dateEarned":"2024-05-01T10:00:00.000Z",
                    "studentName":"Ana"
                }}],
                "bookmarks":[],
                "lastAccessed":"2024-05-01T09:00:00.000Z"
            }}"#
        );
        let progress: Progress = serde_json::from_str(&raw).unwrap();
        assert_eq!(progress.user_id, id);
        assert!(progress.has_certificate());
        assert_eq!(progress.certificates[0].student_name, "Ana");
    }
}
