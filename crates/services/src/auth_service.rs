use std::sync::Arc;

use academy_core::model::{User, UserId, UserRecord};
use storage::repository::UserRepository;
use tracing::{info, warn};

use crate::error::AuthError;

pub const GOOGLE_DEMO_EMAIL: &str = "demo@google.com";
pub const GOOGLE_DEMO_NAME: &str = "Google User";
pub const GOOGLE_DEMO_AVATAR: &str = "https://api.dicebear.com/7.x/avataaars/svg?seed=google";

/// Mock accounts kept in the `users` list, plus the signed-in user.
///
/// Passwords are stored and compared as plain text; this is a demo login,
/// not an identity provider.
#[derive(Clone)]
pub struct AuthService {
    users: Arc<dyn UserRepository>,
}

impl AuthService {
    #[must_use]
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    /// Create an account and sign it in.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidInput` for a blank field,
    /// `AuthError::UserExists` if the email is taken, or
    /// `AuthError::Storage` if persistence fails.
    pub async fn register(
        &self,
        email: &str,
        password: &str,
        name: &str,
    ) -> Result<User, AuthError> {
        let email = non_empty("email", email)?;
        let name = non_empty("name", name)?;
        if password.is_empty() {
            return Err(AuthError::InvalidInput("password"));
        }

        let mut users = self.users.list_users().await?;
        if users.iter().any(|record| record.user.email == email) {
            warn!(email, "registration rejected: email already used");
            return Err(AuthError::UserExists);
        }

        let user = User {
            id: UserId::generate(),
            email: email.to_owned(),
            name: name.to_owned(),
            avatar: None,
        };
        users.push(UserRecord {
            user: user.clone(),
            password: password.to_owned(),
        });
        self.users.save_users(&users).await?;
        self.users.set_current_user(Some(&user)).await?;
        info!(user_id = %user.id, "user registered");
        Ok(user)
    }

    /// Sign in with an existing account.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidCredentials` if no account matches both
    /// email and password, or `AuthError::Storage` if persistence fails.
    pub async fn login(&self, email: &str, password: &str) -> Result<User, AuthError> {
        let email = email.trim();
        let users = self.users.list_users().await?;
        let Some(record) = users.into_iter().find(|r| r.matches(email, password)) else {
            warn!(email, "login rejected");
            return Err(AuthError::InvalidCredentials);
        };
        let user = record.user;
        self.users.set_current_user(Some(&user)).await?;
        info!(user_id = %user.id, "user signed in");
        Ok(user)
    }

    /// # Errors
    ///
    /// Returns `AuthError::Storage` if the current user cannot be cleared.
    pub async fn logout(&self) -> Result<(), AuthError> {
        self.users.set_current_user(None).await?;
        info!("user signed out");
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `AuthError::Storage` if the stored user cannot be read.
    pub async fn current_user(&self) -> Result<Option<User>, AuthError> {
        Ok(self.users.current_user().await?)
    }

    /// Like [`AuthService::current_user`] but treats "nobody signed in" as an error.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::NotSignedIn` if there is no current user, or
    /// `AuthError::Storage` if the stored user cannot be read.
    pub async fn require_user(&self) -> Result<User, AuthError> {
        self.current_user().await?.ok_or(AuthError::NotSignedIn)
    }

    /// Sign in as the demo Google account. The account is not added to the
    /// registered users list and gets a fresh id every time.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Storage` if the current user cannot be stored.
    pub async fn google_sign_in(&self) -> Result<User, AuthError> {
        let user = User {
            id: UserId::generate(),
            email: GOOGLE_DEMO_EMAIL.to_owned(),
            name: GOOGLE_DEMO_NAME.to_owned(),
            avatar: Some(GOOGLE_DEMO_AVATAR.to_owned()),
        };
        self.users.set_current_user(Some(&user)).await?;
        info!(user_id = %user.id, "google demo user signed in");
        Ok(user)
    }
}

fn non_empty<'a>(field: &'static str, value: &'a str) -> Result<&'a str, AuthError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(AuthError::InvalidInput(field))
    } else {
        Ok(trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storage::repository::Storage;

    fn service() -> AuthService {
        AuthService::new(Storage::in_memory().users)
    }

    #[tokio::test]
    async fn register_signs_the_user_in() {
        let auth = service();
        let user = auth
            .register("  ana@example.com ", "secret", " Ana ")
            .await
            .unwrap();
        assert_eq!(user.email, "ana@example.com");
        assert_eq!(user.name, "Ana");
        assert_eq!(auth.current_user().await.unwrap(), Some(user));
    }

    #[tokio::test]
    async fn duplicate_email_is_rejected() {
        let storage = Storage::in_memory();
        let auth = AuthService::new(Arc::clone(&storage.users));
        let first = auth
            .register("ana@example.com", "secret", "Ana")
            .await
            .unwrap();

        assert!(matches!(
            auth.register("ana@example.com", "other", "Ana Two").await,
            Err(AuthError::UserExists)
        ));
        let users = storage.users.list_users().await.unwrap();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].user, first);
        assert_eq!(auth.current_user().await.unwrap(), Some(first));
    }

    #[tokio::test]
    async fn blank_fields_are_rejected() {
        let auth = service();
        assert!(matches!(
            auth.register("   ", "pw", "Ana").await,
            Err(AuthError::InvalidInput("email"))
        ));
        assert!(matches!(
            auth.register("a@b.c", "", "Ana").await,
            Err(AuthError::InvalidInput("password"))
        ));
        assert!(matches!(
            auth.register("a@b.c", "pw", "").await,
            Err(AuthError::InvalidInput("name"))
        ));
    }

    #[tokio::test]
    async fn wrong_password_is_invalid_credentials() {
        let auth = service();
        auth.register("ana@example.com", "secret", "Ana")
            .await
            .unwrap();
        auth.logout().await.unwrap();

        assert!(matches!(
            auth.login("ana@example.com", "nope").await,
            Err(AuthError::InvalidCredentials)
        ));
        assert_eq!(auth.current_user().await.unwrap(), None);
        assert!(matches!(
            auth.require_user().await,
            Err(AuthError::NotSignedIn)
        ));
    }

    #[tokio::test]
    async fn google_user_is_not_registered() {
        let auth = service();
        let user = auth.google_sign_in().await.unwrap();
        assert_eq!(user.email, GOOGLE_DEMO_EMAIL);
        assert_eq!(user.avatar.as_deref(), Some(GOOGLE_DEMO_AVATAR));
        assert_eq!(auth.require_user().await.unwrap(), user);

        let again = auth.google_sign_in().await.unwrap();
        assert_ne!(again.id, user.id);
        assert!(matches!(
            auth.login(GOOGLE_DEMO_EMAIL, "").await,
            Err(AuthError::InvalidCredentials)
        ));
    }
}
