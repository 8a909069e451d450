//! Session/account store
//!
//! Registered accounts keyed by lowercased email, plus the single current
//! session slot. Sole writer of the `users` and `session` entries. Accounts
//! are never updated or deleted once created.

use tracing::instrument;

use crate::error::{Error, Result};
use crate::models::{Account, Session};
use crate::storage::{keys, KeyValueStore};

/// Minimum accepted password length
pub const MIN_PASSWORD_LEN: usize = 6;

/// Store for accounts and the current session
pub struct AccountStore<'a, S: KeyValueStore> {
    store: &'a S,
}

impl<'a, S: KeyValueStore> AccountStore<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// All registered accounts
    pub fn accounts(&self) -> Vec<Account> {
        self.store.get_json(keys::USERS, Vec::new())
    }

    /// Register a new account and log it in.
    ///
    /// Fails with [`Error::Validation`] if the name or email is empty or
    /// the password is shorter than [`MIN_PASSWORD_LEN`], and with
    /// [`Error::DuplicateAccount`] if the normalized email is taken.
    #[instrument(skip(self, password))]
    pub fn register(&self, name: &str, email: &str, password: &str) -> Result<Session> {
        let name = name.trim();
        let email = normalize_email(email);

        if name.is_empty() || email.is_empty() {
            return Err(Error::Validation("name and email are required".to_string()));
        }
        if password.chars().count() < MIN_PASSWORD_LEN {
            return Err(Error::Validation(format!(
                "password must be at least {MIN_PASSWORD_LEN} characters"
            )));
        }

        let mut accounts = self.accounts();
        if accounts.iter().any(|a| a.email == email) {
            return Err(Error::DuplicateAccount);
        }

        accounts.push(Account {
            name: name.to_string(),
            email: email.clone(),
            password: password.to_string(),
        });
        self.store.set_json(keys::USERS, &accounts)?;

        let session = Session {
            name: name.to_string(),
            email,
        };
        self.set_session(&session)?;
        Ok(session)
    }

    /// Log in with an email and password.
    ///
    /// The email match is case-insensitive, the password match exact. The
    /// single [`Error::InvalidCredentials`] covers both an unknown email
    /// and a wrong password, so callers cannot enumerate accounts.
    #[instrument(skip(self, password))]
    pub fn login(&self, email: &str, password: &str) -> Result<Session> {
        let email = normalize_email(email);

        let accounts = self.accounts();
        let account = accounts
            .iter()
            .find(|a| a.email == email && a.password == password)
            .ok_or(Error::InvalidCredentials)?;

        let session = Session {
            name: account.name.clone(),
            email,
        };
        self.set_session(&session)?;
        Ok(session)
    }

    /// Clear the session. Succeeds even when no session is active.
    pub fn logout(&self) -> Result<()> {
        self.store.remove(keys::SESSION)
    }

    /// The current session, if any. Pure read.
    pub fn current_session(&self) -> Option<Session> {
        self.store.get_json(keys::SESSION, None)
    }

    fn set_session(&self, session: &Session) -> Result<()> {
        self.store.set_json(keys::SESSION, session)
    }
}

fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
