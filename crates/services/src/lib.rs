#![forbid(unsafe_code)]

pub mod app_services;
pub mod auth_service;
pub mod chat_service;
pub mod dashboard_service;
pub mod error;
pub mod progress_service;
pub mod quiz_service;

pub use academy_core::Clock;

pub use app_services::AppServices;
pub use auth_service::AuthService;
pub use chat_service::{ChatConfig, ChatSession};
pub use dashboard_service::{CategoryProgress, DashboardService, DashboardSummary};
pub use error::{AppServicesError, AuthError, ProgressServiceError, QuizServiceError};
pub use progress_service::ProgressService;
pub use quiz_service::{QuizOutcome, QuizService, QuizStep};
