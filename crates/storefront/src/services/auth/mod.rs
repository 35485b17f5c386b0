//! Customer and staff accounts.
//!
//! Email/password signup and login. The signed-in account lives under the
//! `currentUser` key as a [`SessionUser`] (no password hash).

mod error;

pub use error::AuthError;

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use chrono::Utc;
use tracing::{info, warn};

use beauty_store_core::{Email, Role, SessionUser, Store, User, UserId};

use crate::db::RepositoryError;
use crate::db::users::UserRepository;
use crate::ids;

/// Account signup, login and session lookup.
pub struct AuthService<'a> {
    users: UserRepository<'a>,
}

impl<'a> AuthService<'a> {
    /// Accounts stored in `store`.
    #[must_use]
    pub const fn new(store: &'a dyn Store) -> Self {
        Self {
            users: UserRepository::new(store),
        }
    }

    /// Register a self-service account.
    ///
    /// The role comes from [`Role::from_signup_email`]. Signing up does not
    /// sign the user in.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidEmail` for a malformed address,
    /// `AuthError::WeakPassword` for an empty password or blank name, and
    /// `AuthError::UserAlreadyExists` when the address already has an account.
    pub fn signup(&self, email: &str, password: &str, name: &str) -> Result<User, AuthError> {
        let email = Email::parse(email)?;
        let role = Role::from_signup_email(&email);
        self.register(email, password, name, role)
    }

    /// Register an account with an explicit role.
    ///
    /// # Errors
    ///
    /// Same as [`AuthService::signup`].
    pub fn create_user(
        &self,
        email: &str,
        password: &str,
        name: &str,
        role: Role,
    ) -> Result<User, AuthError> {
        let email = Email::parse(email)?;
        self.register(email, password, name, role)
    }

    fn register(
        &self,
        email: Email,
        password: &str,
        name: &str,
        role: Role,
    ) -> Result<User, AuthError> {
        validate_password(password)?;
        let name = name.trim();
        if name.is_empty() {
            return Err(AuthError::WeakPassword("name is required".to_owned()));
        }

        let taken: Vec<UserId> = self.users.list()?.into_iter().map(|u| u.id).collect();
        let id = ids::unique_millis(|millis| {
            taken.iter().any(|id| id.as_str() == millis.to_string())
        });

        let user = User {
            id: UserId::new(id.to_string()),
            email,
            password_hash: hash_password(password)?,
            name: name.to_owned(),
            role,
            created_at: Utc::now(),
        };

        let user = self.users.create(user).map_err(|e| match e {
            RepositoryError::Conflict(_) => {
                warn!("Signup rejected, email already registered");
                AuthError::UserAlreadyExists
            }
            other => AuthError::Repository(other),
        })?;

        info!(user_id = %user.id, role = %user.role, "User registered");
        Ok(user)
    }

    /// Login with email and password, recording the session.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidCredentials` for an unknown address or a
    /// wrong password.
    pub fn login(&self, email: &str, password: &str) -> Result<SessionUser, AuthError> {
        let email = Email::parse(email).map_err(|_| AuthError::InvalidCredentials)?;
        let user = self
            .users
            .get_by_email(&email)?
            .ok_or(AuthError::InvalidCredentials)?;

        verify_password(password, &user.password_hash).inspect_err(|_| {
            warn!(user_id = %user.id, "Login failed");
        })?;

        let session = SessionUser::from(&user);
        self.users.set_session(&session)?;
        info!(user_id = %session.id, "User logged in");
        Ok(session)
    }

    /// Forget the signed-in user.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Repository` if the store fails.
    pub fn logout(&self) -> Result<(), AuthError> {
        self.users.clear_session()?;
        info!("User logged out");
        Ok(())
    }

    /// The signed-in user, if any.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Repository` if the session document is corrupt.
    pub fn current_user(&self) -> Result<Option<SessionUser>, AuthError> {
        Ok(self.users.current_session()?)
    }

    /// Whether anyone is signed in.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Repository` if the session document is corrupt.
    pub fn is_authenticated(&self) -> Result<bool, AuthError> {
        Ok(self.current_user()?.is_some())
    }

    /// Whether the signed-in user is an admin.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Repository` if the session document is corrupt.
    pub fn is_admin(&self) -> Result<bool, AuthError> {
        Ok(self
            .current_user()?
            .is_some_and(|session| session.is_admin()))
    }
}

fn validate_password(password: &str) -> Result<(), AuthError> {
    if password.is_empty() {
        return Err(AuthError::WeakPassword("password is required".to_owned()));
    }
    Ok(())
}

/// Argon2id PHC string for `password`.
fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    argon2
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|_| AuthError::PasswordHash)
}

/// Check `password` against a stored PHC string.
fn verify_password(password: &str, hash: &str) -> Result<(), AuthError> {
    let parsed_hash = PasswordHash::new(hash).map_err(|_| AuthError::InvalidCredentials)?;
    let argon2 = Argon2::default();

    argon2
        .verify_password(password.as_bytes(), &parsed_hash)
        .map_err(|_| AuthError::InvalidCredentials)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use beauty_store_core::{MemoryStore, StoreExt, StoreKey};

    use super::*;

    #[test]
    fn test_signup_twice_fails() {
        let store = MemoryStore::new();
        let auth = AuthService::new(&store);
        auth.signup("a@x.com", "pw", "A").unwrap();

        assert!(matches!(
            auth.signup("a@x.com", "other", "Another A"),
            Err(AuthError::UserAlreadyExists)
        ));
        let users: Vec<User> = store.load_list(StoreKey::Users).unwrap();
        assert_eq!(users.len(), 1);
    }

    #[test]
    fn test_password_is_hashed() {
        let store = MemoryStore::new();
        let user = AuthService::new(&store)
            .signup("a@x.com", "pw", "A")
            .unwrap();
        assert_ne!(user.password_hash, "pw");
        assert!(user.password_hash.starts_with("$argon2"));
    }

    #[test]
    fn test_login_logout_cycle() {
        let store = MemoryStore::new();
        let auth = AuthService::new(&store);
        auth.signup("a@x.com", "pw", "A").unwrap();
        assert!(!auth.is_authenticated().unwrap());

        assert!(matches!(
            auth.login("a@x.com", "wrong"),
            Err(AuthError::InvalidCredentials)
        ));
        assert!(matches!(
            auth.login("nobody@x.com", "pw"),
            Err(AuthError::InvalidCredentials)
        ));

        let session = auth.login("a@x.com", "pw").unwrap();
        assert_eq!(session.role, Role::User);
        assert!(auth.is_authenticated().unwrap());
        assert!(!auth.is_admin().unwrap());
        assert!(!store.get("currentUser").unwrap().unwrap().contains("argon2"));

        auth.logout().unwrap();
        assert_eq!(auth.current_user().unwrap(), None);
    }

    #[test]
    fn test_admin_roles() {
        let store = MemoryStore::new();
        let auth = AuthService::new(&store);
        let admin = auth.signup("admin@shop.com", "pw", "Boss").unwrap();
        assert_eq!(admin.role, Role::Admin);

        let staff = auth
            .create_user("staff@shop.com", "pw", "Staff", Role::Admin)
            .unwrap();
        assert_eq!(staff.role, Role::Admin);
        auth.login("staff@shop.com", "pw").unwrap();
        assert!(auth.is_admin().unwrap());
    }

    #[test]
    fn test_rejects_bad_input() {
        let store = MemoryStore::new();
        let auth = AuthService::new(&store);
        assert!(matches!(
            auth.signup("not-an-email", "pw", "A"),
            Err(AuthError::InvalidEmail(_))
        ));
        assert!(matches!(
            auth.signup("a@x.com", "", "A"),
            Err(AuthError::WeakPassword(_))
        ));
    }
}
