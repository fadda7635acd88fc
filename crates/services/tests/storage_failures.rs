use std::sync::Arc;

use academy_core::model::{LessonId, Progress, UserId};
use academy_core::time::fixed_clock;
use async_trait::async_trait;
use services::{AppServices, ChatConfig, ProgressService, ProgressServiceError};
use storage::repository::{ProgressRepository, StorageError};

struct UnreachableProgress;

#[async_trait]
impl ProgressRepository for UnreachableProgress {
    async fn get_progress(&self, _user_id: UserId) -> Result<Option<Progress>, StorageError> {
        Err(StorageError::Connection("backend offline".into()))
    }

    async fn save_progress(&self, _progress: &Progress) -> Result<(), StorageError> {
        Err(StorageError::Connection("backend offline".into()))
    }
}

#[tokio::test]
async fn storage_errors_surface_from_progress_service() {
    let service = ProgressService::new(fixed_clock(), Arc::new(UnreachableProgress));
    let err = service
        .mark_lesson_complete(UserId::generate(), LessonId::new("html-1"))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        ProgressServiceError::Storage(StorageError::Connection(_))
    ));
}

#[tokio::test]
async fn sqlite_backed_services_persist_progress() {
    let url = "sqlite:file:memdb_services_progress?mode=memory&cache=shared";
    let app = AppServices::new_sqlite(url, fixed_clock(), ChatConfig::immediate())
        .await
        .expect("services");
    let user = app
        .auth()
        .register("li@example.com", "pw", "Li")
        .await
        .unwrap();
    app.progress()
        .mark_lesson_complete(user.id, LessonId::new("css-2"))
        .await
        .unwrap();

    let reopened = AppServices::new_sqlite(url, fixed_clock(), ChatConfig::immediate())
        .await
        .expect("reopen");
    assert_eq!(
        reopened.auth().current_user().await.unwrap(),
        Some(user.clone())
    );
    let progress = reopened.progress().get(user.id).await.unwrap();
    assert!(progress.has_completed(&LessonId::new("css-2")));
}
