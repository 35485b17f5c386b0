//! User repository.
//!
//! Accounts live in the `users` list; the signed-in projection lives under
//! `currentUser` and never carries a password hash.

use tracing::debug;

use beauty_store_core::{Email, SessionUser, Store, StoreExt, StoreKey, User};

use super::{Collection, RepositoryError};

/// Repository for account and session documents.
pub struct UserRepository<'a> {
    store: &'a dyn Store,
}

impl<'a> UserRepository<'a> {
    /// Create a new user repository.
    #[must_use]
    pub const fn new(store: &'a dyn Store) -> Self {
        Self { store }
    }

    fn users(&self) -> Collection<'a, User> {
        Collection::new(self.store)
    }

    /// Get a user by their email address (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Store` if the document is unreadable.
    pub fn get_by_email(&self, email: &Email) -> Result<Option<User>, RepositoryError> {
        Ok(self
            .users()
            .list()?
            .into_iter()
            .find(|user| user.email.eq_ignore_case(email.as_str())))
    }

    /// All registered users.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Store` if the document is unreadable.
    pub fn list(&self) -> Result<Vec<User>, RepositoryError> {
        self.users().list()
    }

    /// Register a new user.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the email is already registered.
    pub fn create(&self, user: User) -> Result<User, RepositoryError> {
        if self.get_by_email(&user.email)?.is_some() {
            return Err(RepositoryError::Conflict(format!(
                "email {} already registered",
                user.email
            )));
        }
        let user = self.users().insert(user)?;
        debug!(user_id = %user.id, "Created user");
        Ok(user)
    }

    /// The signed-in user, if any.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Store` if the session document is corrupt.
    pub fn current_session(&self) -> Result<Option<SessionUser>, RepositoryError> {
        Ok(self.store.load_json(StoreKey::CurrentUser)?)
    }

    /// Record `session` as the signed-in user.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Store` if the write fails.
    pub fn set_session(&self, session: &SessionUser) -> Result<(), RepositoryError> {
        self.store.save_json(StoreKey::CurrentUser, session)?;
        Ok(())
    }

    /// Forget the signed-in user.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Store` if the removal fails.
    pub fn clear_session(&self) -> Result<(), RepositoryError> {
        self.store.remove(StoreKey::CurrentUser.as_str())?;
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use beauty_store_core::{MemoryStore, Role, UserId};
    use chrono::Utc;

    use super::*;

    fn user(email: &str) -> User {
        User {
            id: UserId::new(format!("user-{email}")),
            email: Email::parse(email).unwrap(),
            password_hash: "hash".to_owned(),
            name: "Ada".to_owned(),
            role: Role::User,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_create_and_lookup() {
        let store = MemoryStore::new();
        let repo = UserRepository::new(&store);
        repo.create(user("ada@example.com")).unwrap();

        let found = repo
            .get_by_email(&Email::parse("ADA@example.com").unwrap())
            .unwrap();
        assert!(found.is_some());
        assert!(matches!(
            repo.create(user("Ada@Example.com")),
            Err(RepositoryError::Conflict(_))
        ));
        assert_eq!(repo.list().unwrap().len(), 1);
    }

    #[test]
    fn test_session_roundtrip() {
        let store = MemoryStore::new();
        let repo = UserRepository::new(&store);
        assert!(repo.current_session().unwrap().is_none());

        let session = SessionUser::from(&user("ada@example.com"));
        repo.set_session(&session).unwrap();
        assert_eq!(repo.current_session().unwrap(), Some(session));

        repo.clear_session().unwrap();
        assert!(repo.current_session().unwrap().is_none());
    }
}
