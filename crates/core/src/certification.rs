//! Certificate eligibility for the fundamentals course.

use chrono::{DateTime, Utc};

use crate::model::{Certificate, CertificateId, Progress, QuizId, User};

pub const FUNDAMENTALS_COURSE: &str = "Web Development Fundamentals";

/// Score every required quiz must reach. Independent from each quiz's own
/// passing score.
pub const FUNDAMENTALS_THRESHOLD: u32 = 70;

pub const FUNDAMENTALS_QUIZZES: [&str; 3] = ["html-quiz", "css-quiz", "js-quiz"];

/// Which quizzes a course requires and the score each must reach.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CertificationPolicy {
    course_name: String,
    threshold: u32,
    required: Vec<QuizId>,
}

impl CertificationPolicy {
    #[must_use]
    pub fn new(course_name: impl Into<String>, threshold: u32, required: Vec<QuizId>) -> Self {
        Self {
            course_name: course_name.into(),
            threshold,
            required,
        }
    }

    #[must_use]
    pub fn course_name(&self) -> &str {
        &self.course_name
    }

    #[must_use]
    pub fn threshold(&self) -> u32 {
        self.threshold
    }

    #[must_use]
    pub fn required(&self) -> &[QuizId] {
        &self.required
    }

    /// True when every required quiz has a stored score at or above the threshold.
    #[must_use]
    pub fn is_satisfied_by(&self, progress: &Progress) -> bool {
        self.required
            .iter()
            .all(|quiz| progress.score_for(quiz) >= self.threshold)
    }
}

impl Default for CertificationPolicy {
    fn default() -> Self {
        Self::new(
            FUNDAMENTALS_COURSE,
            FUNDAMENTALS_THRESHOLD,
            FUNDAMENTALS_QUIZZES.iter().map(|id| QuizId::new(*id)).collect(),
        )
    }
}

/// A finished quiz attempt as seen by the certification engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizResult {
    pub quiz_id: QuizId,
    pub score: u32,
    pub passing_score: u32,
}

impl QuizResult {
    #[must_use]
    pub fn passed(&self) -> bool {
        self.score >= self.passing_score
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CertificationOutcome {
    /// Score below the quiz's passing score; progress untouched.
    NotPassed,
    /// Score stored; requirements not met or a certificate already exists.
    Recorded,
    /// Score stored and a new certificate appended to progress.
    Issued(Certificate),
}

impl CertificationOutcome {
    #[must_use]
    pub fn certificate(&self) -> Option<&Certificate> {
        match self {
            CertificationOutcome::Issued(cert) => Some(cert),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct CertificationEngine {
    policy: CertificationPolicy,
}

impl CertificationEngine {
    #[must_use]
    pub fn new(policy: CertificationPolicy) -> Self {
        Self { policy }
    }

    #[must_use]
    pub fn policy(&self) -> &CertificationPolicy {
        &self.policy
    }

    /// Applies a quiz result to the student's progress.
    ///
    /// On a pass the score is stored (last write wins). A certificate is
    /// issued only when the policy is satisfied and the student holds none
    /// yet, so repeated calls never issue a second one.
    pub fn evaluate(
        &self,
        student: &User,
        result: &QuizResult,
        progress: &mut Progress,
        now: DateTime<Utc>,
    ) -> CertificationOutcome {
        if !result.passed() {
            return CertificationOutcome::NotPassed;
        }

        progress.record_score(result.quiz_id.clone(), result.score);

        if progress.has_certificate() || !self.policy.is_satisfied_by(progress) {
            return CertificationOutcome::Recorded;
        }

        let certificate = Certificate {
            id: CertificateId::generate(),
            course_name: self.policy.course_name().to_owned(),
            date_earned: now,
            student_name: student.name.clone(),
        };
        progress.add_certificate(certificate.clone());
        CertificationOutcome::Issued(certificate)
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::UserId;
    use crate::time::fixed_now;

    fn student() -> User {
        User {
            id: UserId::generate(),
            email: "maria@example.com".into(),
            name: "Maria".into(),
            avatar: None,
        }
    }

    fn result(quiz: &str, score: u32) -> QuizResult {
        QuizResult {
            quiz_id: QuizId::new(quiz),
            score,
            passing_score: 70,
        }
    }

    #[test]
    fn failing_result_changes_nothing() {
        let engine = CertificationEngine::default();
        let user = student();
        let mut progress = Progress::empty(user.id);
        let outcome = engine.evaluate(&user, &result("html-quiz", 60), &mut progress, fixed_now());
        assert_eq!(outcome, CertificationOutcome::NotPassed);
        assert_eq!(progress, Progress::empty(user.id));
    }

    #[test]
    fn two_of_three_passed_issues_nothing() {
        let engine = CertificationEngine::default();
        let user = student();
        let mut progress = Progress::empty(user.id);
        engine.evaluate(&user, &result("html-quiz", 100), &mut progress, fixed_now());
        let outcome = engine.evaluate(&user, &result("css-quiz", 80), &mut progress, fixed_now());
        assert_eq!(outcome, CertificationOutcome::Recorded);
        assert!(progress.certificates.is_empty());
        assert_eq!(progress.score_for(&QuizId::new("css-quiz")), 80);
    }

    #[test]
    fn low_stored_score_blocks_certificate() {
        let engine = CertificationEngine::default();
        let user = student();
        let mut progress = Progress::empty(user.id);
        progress.record_score(QuizId::new("js-quiz"), 60);
        engine.evaluate(&user, &result("html-quiz", 100), &mut progress, fixed_now());
        let outcome = engine.evaluate(&user, &result("css-quiz", 100), &mut progress, fixed_now());
        assert_eq!(outcome, CertificationOutcome::Recorded);
    }

    #[test]
    fn third_pass_issues_single_certificate() {
        let engine = CertificationEngine::default();
        let user = student();
        let mut progress = Progress::empty(user.id);
        engine.evaluate(&user, &result("html-quiz", 100), &mut progress, fixed_now());
        engine.evaluate(&user, &result("css-quiz", 80), &mut progress, fixed_now());
        let outcome = engine.evaluate(&user, &result("js-quiz", 70), &mut progress, fixed_now());

        let cert = outcome.certificate().expect("certificate issued").clone();
        assert_eq!(cert.course_name, FUNDAMENTALS_COURSE);
        assert_eq!(cert.student_name, "Maria");
        assert_eq!(cert.date_earned, fixed_now());
        assert_eq!(progress.certificates, vec![cert]);
    }

    #[test]
    fn evaluating_again_is_idempotent() {
        let engine = CertificationEngine::default();
        let user = student();
        let mut progress = Progress::empty(user.id);
        for quiz in FUNDAMENTALS_QUIZZES {
            engine.evaluate(&user, &result(quiz, 100), &mut progress, fixed_now());
        }
        assert_eq!(progress.certificates.len(), 1);

        let outcome = engine.evaluate(&user, &result("js-quiz", 90), &mut progress, fixed_now());
        assert_eq!(outcome, CertificationOutcome::Recorded);
        assert_eq!(progress.certificates.len(), 1);
        assert_eq!(progress.score_for(&QuizId::new("js-quiz")), 90);
    }

    #[test]
    fn quiz_passing_score_and_course_threshold_are_independent() {
        let policy = CertificationPolicy::new("Strict", 90, vec![QuizId::new("html-quiz")]);
        let engine = CertificationEngine::new(policy);
        let user = student();
        let mut progress = Progress::empty(user.id);

        // passes the quiz (>= 70) but not the course threshold (90)
        let outcome = engine.evaluate(&user, &result("html-quiz", 80), &mut progress, fixed_now());
        assert_eq!(outcome, CertificationOutcome::Recorded);

        let outcome = engine.evaluate(&user, &result("html-quiz", 90), &mut progress, fixed_now());
        assert_eq!(outcome.certificate().map(|c| c.course_name.as_str()), Some("Strict"));
    }
}
