use serde::{Deserialize, Serialize};

use crate::model::ids::UserId;

/// The signed-in identity as persisted under `currentUser`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub email: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

/// Registered account as persisted in the `users` list.
///
/// The password is stored in plain text; this is a mock identity provider
/// and offers no security.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    #[serde(flatten)]
    pub user: User,
    pub password: String,
}

impl UserRecord {
    #[must_use]
    pub fn matches(&self, email: &str, password: &str) -> bool {
        self.user.email == email && self.password == password
    }
}
