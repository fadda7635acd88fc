use std::error::Error;
use std::fmt;
use std::io::{self, BufRead, Write};

use academy_core::model::{Category, LessonId, QuizId, User};
use academy_core::quiz_session::QuizSession;
use services::{AppServices, QuizOutcome};

type CommandResult = Result<(), Box<dyn Error>>;

#[derive(Debug)]
enum CommandError {
    UnknownLesson(LessonId),
    AnswerOutOfRange { answer: usize, options: usize },
    WrongAnswerCount { expected: usize, got: usize },
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::UnknownLesson(id) => write!(f, "lesson not found: {id}"),
            CommandError::AnswerOutOfRange { answer, options } => {
                write!(f, "answer {answer} is not between 1 and {options}")
            }
            CommandError::WrongAnswerCount { expected, got } => {
                write!(f, "expected {expected} answers, got {got}")
            }
        }
    }
}

impl Error for CommandError {}

async fn signed_in(app: &AppServices) -> Result<User, Box<dyn Error>> {
    Ok(app.auth().require_user().await?)
}

// ─── ACCOUNT ───────────────────────────────────────────────────────────────────

pub async fn register(app: &AppServices, email: &str, password: &str, name: &str) -> CommandResult {
    let user = app.auth().register(email, password, name).await?;
    println!("Welcome, {}! You are signed in as {}.", user.name, user.email);
    Ok(())
}

pub async fn login(app: &AppServices, email: &str, password: &str) -> CommandResult {
    let user = app.auth().login(email, password).await?;
    println!("Signed in as {} <{}>.", user.name, user.email);
    Ok(())
}

pub async fn google_login(app: &AppServices) -> CommandResult {
    let user = app.auth().google_sign_in().await?;
    println!("Signed in as {} <{}>.", user.name, user.email);
    Ok(())
}

pub async fn logout(app: &AppServices) -> CommandResult {
    app.auth().logout().await?;
    println!("Signed out.");
    Ok(())
}

pub async fn whoami(app: &AppServices) -> CommandResult {
    match app.auth().current_user().await? {
        Some(user) => println!("{} <{}> ({})", user.name, user.email, user.id),
        None => println!("Not signed in."),
    }
    Ok(())
}

// ─── LESSONS ───────────────────────────────────────────────────────────────────

pub async fn lessons(app: &AppServices, category: Option<Category>) -> CommandResult {
    let catalog = app.catalog();
    let progress = match app.auth().current_user().await? {
        Some(user) => Some(app.progress().get(user.id).await?),
        None => None,
    };

    let categories = category.map_or(Category::ALL.to_vec(), |c| vec![c]);
    for category in categories {
        println!("{}", category.course_title());
        for lesson in catalog.lessons_in(category) {
            let done = progress
                .as_ref()
                .is_some_and(|p| p.has_completed(&lesson.id));
            let marked = progress
                .as_ref()
                .is_some_and(|p| p.is_bookmarked(&lesson.id));
            println!(
                "  [{}]{} {:<7} {} ({})",
                if done { "x" } else { " " },
                if marked { "*" } else { " " },
                lesson.id.as_str(),
                lesson.title,
                lesson.difficulty
            );
        }
    }
    Ok(())
}

pub async fn lesson(app: &AppServices, id: &LessonId) -> CommandResult {
    let catalog = app.catalog();
    let lesson = catalog
        .lesson(id)
        .ok_or_else(|| CommandError::UnknownLesson(id.clone()))?;

    println!("{} [{} / {}]", lesson.title, lesson.category, lesson.difficulty);
    println!("{}", lesson.description);
    println!();
    println!("{}", lesson.content);
    println!();
    println!("Example:");
    for line in lesson.code_example.lines() {
        println!("    {line}");
    }
    println!();
    println!("Practice: {}", lesson.practice_notes);
    Ok(())
}

pub async fn complete(app: &AppServices, id: LessonId) -> CommandResult {
    if app.catalog().lesson(&id).is_none() {
        return Err(CommandError::UnknownLesson(id).into());
    }
    let user = signed_in(app).await?;
    let progress = app.progress().mark_lesson_complete(user.id, id.clone()).await?;
    println!(
        "Lesson {id} completed ({} of {} lessons done).",
        progress.completed_lessons.len(),
        app.catalog().lessons().len()
    );
    Ok(())
}

pub async fn bookmark(app: &AppServices, id: LessonId) -> CommandResult {
    if app.catalog().lesson(&id).is_none() {
        return Err(CommandError::UnknownLesson(id).into());
    }
    let user = signed_in(app).await?;
    if app.progress().toggle_bookmark(user.id, id.clone()).await? {
        println!("Bookmarked {id}.");
    } else {
        println!("Removed bookmark from {id}.");
    }
    Ok(())
}

// ─── QUIZ ──────────────────────────────────────────────────────────────────────

pub async fn quiz(app: &AppServices, id: &QuizId, answers: Option<Vec<usize>>) -> CommandResult {
    let user = signed_in(app).await?;
    let quizzes = app.quizzes();
    let mut session = quizzes.start(id)?;
    println!("{}", session.quiz().title());

    if let Some(answers) = answers {
        let expected = session.quiz().question_count();
        if answers.len() != expected {
            return Err(CommandError::WrongAnswerCount {
                expected,
                got: answers.len(),
            }
            .into());
        }
        for answer in answers {
            let options = session
                .current_question()
                .map_or(0, |question| question.options().len());
            quizzes.answer(&mut session, to_index(answer, options)?)?;
        }
        let outcome = quizzes.finish(&user, &session).await?;
        print_outcome(&outcome);
        return Ok(());
    }

    let stdin = io::stdin();
    quiz_interactive(app, &user, session, &mut stdin.lock()).await
}

/// Prompts for each answer on `input`. A retry is offered only after a
/// failed attempt that still has attempts left.
async fn quiz_interactive(
    app: &AppServices,
    user: &User,
    mut session: QuizSession,
    input: &mut impl BufRead,
) -> CommandResult {
    let quizzes = app.quizzes();
    loop {
        while let Some(question) = session.current_question() {
            let (position, total) = session.position();
            println!();
            println!("Question {position} of {total}: {}", question.text());
            for (i, option) in question.options().iter().enumerate() {
                println!("  {}. {option}", i + 1);
            }
            let options = question.options().len();
            let Some(answer) = prompt_number(input, options)? else {
                println!("Quiz abandoned.");
                return Ok(());
            };
            quizzes.answer(&mut session, answer)?;
        }

        let outcome = quizzes.finish(user, &session).await?;
        print_outcome(&outcome);

        if outcome.passed || !session.can_retry() || !confirm(input, "Try again?")? {
            return Ok(());
        }
        quizzes.retry(&mut session)?;
    }
}

fn to_index(answer: usize, options: usize) -> Result<usize, CommandError> {
    if answer == 0 || answer > options {
        return Err(CommandError::AnswerOutOfRange { answer, options });
    }
    Ok(answer - 1)
}

fn prompt_number(input: &mut impl BufRead, options: usize) -> io::Result<Option<usize>> {
    loop {
        print!("Your answer (1-{options}): ");
        io::stdout().flush()?;
        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        match line.trim().parse::<usize>() {
            Ok(answer) => match to_index(answer, options) {
                Ok(index) => return Ok(Some(index)),
                Err(err) => println!("{err}"),
            },
            Err(_) => println!("Please enter a number."),
        }
    }
}

fn confirm(input: &mut impl BufRead, question: &str) -> io::Result<bool> {
    print!("{question} [y/N] ");
    io::stdout().flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(matches!(line.trim().to_lowercase().as_str(), "y" | "yes"))
}

fn print_outcome(outcome: &QuizOutcome<'_>) {
    println!();
    for (i, item) in outcome.review.iter().enumerate() {
        let mark = if item.correct { "correct" } else { "wrong" };
        println!("{}. {} ({mark})", i + 1, item.question.text());
        if !item.correct {
            let right = item.question.correct_option();
            if let Some(text) = item.question.options().get(right) {
                println!("   answer: {text}");
            }
        }
        println!("   {}", item.question.explanation());
    }
    println!();
    println!(
        "Score: {}% - {}",
        outcome.score,
        if outcome.passed { "passed" } else { "not passed" }
    );
    println!(
        "Attempt {} ({} left)",
        outcome.attempts_used, outcome.attempts_remaining
    );
    if let Some(certificate) = &outcome.certificate {
        println!(
            "Congratulations {}! You earned the {} certificate.",
            certificate.student_name, certificate.course_name
        );
    }
}

// ─── CHAT ──────────────────────────────────────────────────────────────────────

pub async fn chat(app: &AppServices, message: &str) -> CommandResult {
    let mut session = app.chat_session();

    if !message.trim().is_empty() {
        if let Some(reply) = session.send(message).await {
            println!("{}", reply.text);
        }
        return Ok(());
    }

    for greeting in session.messages() {
        println!("bot> {}", greeting.text);
    }
    let stdin = io::stdin();
    let mut input = stdin.lock();
    loop {
        print!("you> ");
        io::stdout().flush()?;
        let mut line = String::new();
        if input.read_line(&mut line)? == 0 || matches!(line.trim(), "exit" | "quit") {
            return Ok(());
        }
        if let Some(reply) = session.send(line.trim_end_matches(['\r', '\n'])).await {
            println!("bot> {}", reply.text);
        }
    }
}

// ─── PROGRESS ──────────────────────────────────────────────────────────────────

pub async fn dashboard(app: &AppServices, json: bool) -> CommandResult {
    let user = signed_in(app).await?;
    let summary = app.dashboard().summary(user.id).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    println!("Welcome back, {}!", user.name);
    println!(
        "Overall: {}/{} lessons ({}%)",
        summary.completed_lessons, summary.total_lessons, summary.percent_complete
    );
    for course in &summary.categories {
        println!("  {:<24} {}/{}", course.title, course.completed, course.total);
    }
    println!("Quizzes passed: {}", summary.quizzes_passed);
    println!("Certificates: {}", summary.certificates);
    if summary.all_lessons_done_without_certificate {
        println!("All lessons done. Pass the three quizzes to earn your certificate.");
    }
    Ok(())
}

pub async fn certificates(app: &AppServices) -> CommandResult {
    let user = signed_in(app).await?;
    let progress = app.progress().get(user.id).await?;
    if progress.certificates.is_empty() {
        println!("No certificates yet. Score 70% or more on every quiz to earn one.");
        return Ok(());
    }
    for certificate in &progress.certificates {
        println!(
            "{} - awarded to {} on {} (id {})",
            certificate.course_name,
            certificate.student_name,
            certificate.date_earned.format("%B %-d, %Y"),
            certificate.id
        );
    }
    Ok(())
}
