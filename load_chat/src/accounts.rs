//! Account storage boundary used for sign-up and login
//!
//! The forecasting pipeline never reads accounts; only the front end uses
//! this to decide who the session belongs to.

use regex::Regex;
use sha2::{Digest, Sha256};
use std::collections::HashMap;
use std::sync::OnceLock;
use thiserror::Error;

/// Account errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AccountError {
    #[error("Username must not be empty")]
    EmptyUsername,

    #[error("Passwords do not match!")]
    PasswordMismatch,

    #[error("Invalid email format!")]
    InvalidEmail,

    #[error("Username '{0}' is already taken")]
    UsernameTaken(String),

    #[error("Credential store error: {0}")]
    Store(String),
}

/// A registered user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    pub username: String,
    pub email: String,
}

/// Storage for user credentials
pub trait CredentialStore {
    /// Return the user if the credentials match
    fn validate(&self, username: &str, password: &str) -> Result<Option<UserRecord>, AccountError>;

    /// Register a new user
    fn create(&mut self, username: &str, email: &str, password: &str) -> Result<(), AccountError>;

    /// Look up a user by name
    fn find(&self, username: &str) -> Result<Option<UserRecord>, AccountError>;
}

fn email_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[^@]+@[^@]+\.[^@]+").expect("valid email pattern"))
}

/// Sign-up form as entered by the user
#[derive(Debug, Clone, Default)]
pub struct SignupForm {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl SignupForm {
    /// Check the form before it reaches the store
    pub fn validate(&self) -> Result<(), AccountError> {
        if self.username.trim().is_empty() {
            return Err(AccountError::EmptyUsername);
        }
        if self.password != self.confirm_password {
            return Err(AccountError::PasswordMismatch);
        }
        if !email_pattern().is_match(&self.email) {
            return Err(AccountError::InvalidEmail);
        }
        Ok(())
    }

    /// Validate the form and create the account
    pub fn submit<S: CredentialStore + ?Sized>(&self, store: &mut S) -> Result<(), AccountError> {
        self.validate()?;
        store.create(self.username.trim(), &self.email, &self.password)?;
        tracing::info!(username = self.username.trim(), "account created");
        Ok(())
    }
}

#[derive(Debug, Clone)]
struct StoredUser {
    email: String,
    password_digest: Vec<u8>,
}

/// Credential store kept in memory for the lifetime of the process
#[derive(Debug, Default)]
pub struct InMemoryCredentialStore {
    users: HashMap<String, StoredUser>,
}

impl InMemoryCredentialStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of registered users
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// Check if no users are registered
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    fn digest(password: &str) -> Vec<u8> {
        Sha256::digest(password.as_bytes()).to_vec()
    }
}

impl CredentialStore for InMemoryCredentialStore {
    fn validate(&self, username: &str, password: &str) -> Result<Option<UserRecord>, AccountError> {
        Ok(self
            .users
            .get(username)
            .filter(|user| user.password_digest == Self::digest(password))
            .map(|user| UserRecord {
                username: username.to_string(),
                email: user.email.clone(),
            }))
    }

    fn create(&mut self, username: &str, email: &str, password: &str) -> Result<(), AccountError> {
        if self.users.contains_key(username) {
            return Err(AccountError::UsernameTaken(username.to_string()));
        }

        self.users.insert(
            username.to_string(),
            StoredUser {
                email: email.to_string(),
                password_digest: Self::digest(password),
            },
        );
        Ok(())
    }

    fn find(&self, username: &str) -> Result<Option<UserRecord>, AccountError> {
        Ok(self.users.get(username).map(|user| UserRecord {
            username: username.to_string(),
            email: user.email.clone(),
        }))
    }
}
