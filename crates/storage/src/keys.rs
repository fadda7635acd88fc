//! Key layout of the persisted state.

use academy_core::model::UserId;

pub const CURRENT_USER: &str = "currentUser";
pub const USERS: &str = "users";

const PROGRESS_PREFIX: &str = "progress_";

#[must_use]
pub fn progress_key(user_id: UserId) -> String {
    format!("{PROGRESS_PREFIX}{user_id}")
}
