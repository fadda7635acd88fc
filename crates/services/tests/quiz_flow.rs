use academy_core::model::QuizId;
use academy_core::quiz_session::QuizSessionError;
use academy_core::time::fixed_clock;
use services::{AppServices, ChatConfig, QuizServiceError, QuizStep};

const HTML_ANSWERS: [usize; 5] = [0, 2, 1, 2, 1];
const CSS_ANSWERS: [usize; 5] = [1, 2, 1, 1, 1];
const JS_ANSWERS: [usize; 5] = [2, 2, 1, 1, 1];

fn services() -> AppServices {
    AppServices::in_memory(fixed_clock(), ChatConfig::immediate()).expect("services")
}

async fn take_quiz(
    app: &AppServices,
    user: &academy_core::model::User,
    quiz: &str,
    answers: &[usize],
) -> (u32, Option<academy_core::model::Certificate>) {
    let quizzes = app.quizzes();
    let mut session = quizzes.start(&QuizId::new(quiz)).expect("start");
    let mut last = None;
    for &option in answers {
        last = Some(quizzes.answer(&mut session, option).expect("answer"));
    }
    assert!(matches!(last, Some(QuizStep::Completed { .. })));
    let outcome = quizzes.finish(user, &session).await.expect("finish");
    (outcome.score, outcome.certificate)
}

#[tokio::test]
async fn passing_all_three_quizzes_earns_one_certificate() {
    let app = services();
    let user = app
        .auth()
        .register("maria@example.com", "pw", "Maria")
        .await
        .unwrap();

    let (score, cert) = take_quiz(&app, &user, "html-quiz", &HTML_ANSWERS).await;
    assert_eq!(score, 100);
    assert!(cert.is_none());
    let (_, cert) = take_quiz(&app, &user, "css-quiz", &CSS_ANSWERS).await;
    assert!(cert.is_none());
    let (_, cert) = take_quiz(&app, &user, "js-quiz", &JS_ANSWERS).await;
    let cert = cert.expect("certificate issued on third pass");
    assert_eq!(cert.course_name, "Web Development Fundamentals");
    assert_eq!(cert.student_name, "Maria");

    // Passing again never issues a second certificate.
    let (_, again) = take_quiz(&app, &user, "js-quiz", &JS_ANSWERS).await;
    assert!(again.is_none());

    let progress = app.progress().get(user.id).await.unwrap();
    assert_eq!(progress.certificates, vec![cert]);
    let summary = app.dashboard().summary(user.id).await.unwrap();
    assert_eq!(summary.quizzes_passed, 3);
    assert_eq!(summary.certificates, 1);
}

#[tokio::test]
async fn failed_attempt_score_is_still_stored() {
    let app = services();
    let user = app.auth().google_sign_in().await.unwrap();

    take_quiz(&app, &user, "css-quiz", &CSS_ANSWERS).await;
    let (score, cert) = take_quiz(&app, &user, "css-quiz", &[0, 0, 0, 1, 1]).await;
    assert_eq!(score, 40);
    assert!(cert.is_none());

    let progress = app.progress().get(user.id).await.unwrap();
    assert_eq!(progress.score_for(&QuizId::new("css-quiz")), 40);
}

#[tokio::test]
async fn two_passes_and_a_fail_give_no_certificate() {
    let app = services();
    let user = app.auth().register("a@b.c", "pw", "Ana").await.unwrap();

    take_quiz(&app, &user, "html-quiz", &HTML_ANSWERS).await;
    take_quiz(&app, &user, "css-quiz", &CSS_ANSWERS).await;
    let (score, cert) = take_quiz(&app, &user, "js-quiz", &[2, 2, 0, 0, 0]).await;
    assert_eq!(score, 40);
    assert!(cert.is_none());
    assert!(
        app.progress()
            .get(user.id)
            .await
            .unwrap()
            .certificates
            .is_empty()
    );
}

#[tokio::test]
async fn third_retry_is_rejected() {
    let app = services();
    let quizzes = app.quizzes();
    let mut session = quizzes.start(&QuizId::new("html-quiz")).unwrap();

    quizzes.retry(&mut session).unwrap();
    quizzes.retry(&mut session).unwrap();
    let err = quizzes.retry(&mut session).unwrap_err();
    assert!(matches!(
        err,
        QuizServiceError::Session(QuizSessionError::MaxAttemptsReached { max: 3 })
    ));
    assert_eq!(session.attempts_used(), 3);
}

#[tokio::test]
async fn unknown_quiz_and_unfinished_attempts_are_errors() {
    let app = services();
    let quizzes = app.quizzes();
    assert!(matches!(
        quizzes.start(&QuizId::new("rust-quiz")),
        Err(QuizServiceError::NotFound(_))
    ));

    let user = app.auth().google_sign_in().await.unwrap();
    let mut session = quizzes.start(&QuizId::new("js-quiz")).unwrap();
    assert_eq!(
        quizzes.answer(&mut session, 2).unwrap(),
        QuizStep::Next { question_index: 1 }
    );
    assert!(matches!(
        quizzes.finish(&user, &session).await,
        Err(QuizServiceError::NotFinished)
    ));
    assert!(matches!(
        quizzes.answer(&mut session, 9),
        Err(QuizServiceError::Session(
            QuizSessionError::OptionOutOfRange { option: 9, len: 4 }
        ))
    ));
}
