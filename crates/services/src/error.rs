//! Shared error types for the services crate.

use thiserror::Error;

use academy_core::model::{QuizError, QuizId};
use academy_core::quiz_session::QuizSessionError;
use storage::repository::StorageError;
use storage::sqlite::SqliteInitError;

/// Errors emitted by `ProgressService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ProgressServiceError {
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted by `AuthService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AuthError {
    #[error("User already exists")]
    UserExists,
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error("{0} cannot be empty")]
    InvalidInput(&'static str),
    #[error("no user is signed in")]
    NotSignedIn,
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted by `QuizService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuizServiceError {
    #[error("quiz not found: {0}")]
    NotFound(QuizId),
    #[error("quiz attempt is not finished yet")]
    NotFinished,
    #[error(transparent)]
    Session(#[from] QuizSessionError),
    #[error(transparent)]
    Progress(#[from] ProgressServiceError),
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Sqlite(#[from] SqliteInitError),
    #[error("bundled course content is invalid: {0}")]
    Content(#[from] QuizError),
}
