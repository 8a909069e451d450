//! Account and session models

use serde::{Deserialize, Serialize};

/// A registered account.
///
/// The email is stored lowercased and is the unique key. The password is
/// stored in plaintext to keep the persisted `users` entry round-trippable
/// with the original store layout; there is no authentication security
/// model here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// The single "logged in" display-state slot.
///
/// Not an authentication token. Set by login or registration, cleared by
/// logout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub name: String,
    pub email: String,
}
