mod chat;
mod ids;
mod lesson;
mod progress;
mod quiz;
mod user;

pub use chat::{ChatMessage, Sender};
pub use ids::{CertificateId, LessonId, ParseIdError, QuestionId, QuizId, UserId};
pub use lesson::{Difficulty, Lesson};
pub use progress::{Certificate, Progress};
pub use quiz::{Category, Question, Quiz, QuizError};
pub use user::{User, UserRecord};
