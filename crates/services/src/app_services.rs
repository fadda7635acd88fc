use std::sync::Arc;

use academy_core::catalog::ContentCatalog;
use academy_core::certification::CertificationEngine;
use academy_core::quiz_session::RetryPolicy;
use storage::repository::Storage;
use tracing::debug;

use crate::Clock;
use crate::auth_service::AuthService;
use crate::chat_service::{ChatConfig, ChatSession};
use crate::dashboard_service::DashboardService;
use crate::error::AppServicesError;
use crate::progress_service::ProgressService;
use crate::quiz_service::QuizService;

/// Assembles the app-facing services over one storage backend.
#[derive(Clone)]
pub struct AppServices {
    clock: Clock,
    chat: ChatConfig,
    catalog: Arc<ContentCatalog>,
    auth: Arc<AuthService>,
    progress: Arc<ProgressService>,
    quizzes: Arc<QuizService>,
    dashboard: Arc<DashboardService>,
}

impl AppServices {
    /// Build services backed by `SQLite` storage.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if storage initialization fails or the
    /// bundled content does not validate.
    pub async fn new_sqlite(
        db_url: &str,
        clock: Clock,
        chat: ChatConfig,
    ) -> Result<Self, AppServicesError> {
        let storage = Storage::sqlite(db_url).await?;
        Self::from_storage(&storage, clock, chat)
    }

    /// Build services over a throwaway in-memory store.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError::Content` if the bundled content does not validate.
    pub fn in_memory(clock: Clock, chat: ChatConfig) -> Result<Self, AppServicesError> {
        Self::from_storage(&Storage::in_memory(), clock, chat)
    }

    /// # Errors
    ///
    /// Returns `AppServicesError::Content` if the bundled content does not validate.
    pub fn from_storage(
        storage: &Storage,
        clock: Clock,
        chat: ChatConfig,
    ) -> Result<Self, AppServicesError> {
        let catalog = Arc::new(ContentCatalog::try_builtin()?);
        debug!(
            lessons = catalog.lessons().len(),
            quizzes = catalog.quizzes().len(),
            "content catalog loaded"
        );

        let auth = Arc::new(AuthService::new(Arc::clone(&storage.users)));
        let progress = Arc::new(ProgressService::new(clock, Arc::clone(&storage.progress)));
        let quizzes = Arc::new(
            QuizService::new(
                clock,
                Arc::clone(&catalog),
                Arc::clone(&progress),
                CertificationEngine::default(),
            )
            .with_retry_policy(RetryPolicy::default()),
        );
        let dashboard = Arc::new(DashboardService::new(
            Arc::clone(&catalog),
            Arc::clone(&progress),
        ));

        Ok(Self {
            clock,
            chat,
            catalog,
            auth,
            progress,
            quizzes,
            dashboard,
        })
    }

    #[must_use]
    pub fn catalog(&self) -> Arc<ContentCatalog> {
        Arc::clone(&self.catalog)
    }

    #[must_use]
    pub fn auth(&self) -> Arc<AuthService> {
        Arc::clone(&self.auth)
    }

    #[must_use]
    pub fn progress(&self) -> Arc<ProgressService> {
        Arc::clone(&self.progress)
    }

    #[must_use]
    pub fn quizzes(&self) -> Arc<QuizService> {
        Arc::clone(&self.quizzes)
    }

    #[must_use]
    pub fn dashboard(&self) -> Arc<DashboardService> {
        Arc::clone(&self.dashboard)
    }

    /// Open a new chatbot conversation using the configured pacing.
    #[must_use]
    pub fn chat_session(&self) -> ChatSession {
        ChatSession::new(self.clock, self.chat)
    }
}
