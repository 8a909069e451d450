//! Storage interface
//!
//! The durable store is a key-value map of JSON blobs, the same contract
//! the ledger and account store were written against originally: survives
//! restart, scoped to this application, synchronous access. The trait
//! allows swapping the SQLite-backed store for an in-memory fake in tests.

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::warn;

use crate::error::Result;

/// Well-known storage keys. Each is owned by exactly one writer.
pub mod keys {
    /// Ordered purchase records, newest first. Written only by the ledger.
    pub const PURCHASES: &str = "allsafe:purchases";
    /// Registered accounts. Written only by the account store.
    pub const USERS: &str = "allsafe:users";
    /// The current session, if any. Written only by the account store.
    pub const SESSION: &str = "allsafe:session";
}

/// A durable key-value store holding JSON-serialized values
pub trait KeyValueStore {
    /// Read the raw value under a key
    fn get_raw(&self, key: &str) -> Result<Option<String>>;

    /// Write the raw value under a key, replacing any previous value
    fn set_raw(&self, key: &str, value: &str) -> Result<()>;

    /// Remove a key. Removing an absent key is not an error.
    fn remove(&self, key: &str) -> Result<()>;

    /// Read and deserialize the value under a key.
    ///
    /// An absent key, a read failure, or corrupted JSON all degrade to
    /// `fallback` — the system prefers an empty ledger or account list
    /// over refusing to start.
    fn get_json<T: DeserializeOwned>(&self, key: &str, fallback: T) -> T
    where
        Self: Sized,
    {
        match self.get_raw(key) {
            Ok(Some(raw)) => match serde_json::from_str(&raw) {
                Ok(value) => value,
                Err(e) => {
                    warn!(key, error = %e, "Discarding corrupted stored value");
                    fallback
                }
            },
            Ok(None) => fallback,
            Err(e) => {
                warn!(key, error = %e, "Failed to read stored value");
                fallback
            }
        }
    }

    /// Serialize and write a value under a key
    fn set_json<T: Serialize>(&self, key: &str, value: &T) -> Result<()>
    where
        Self: Sized,
    {
        let raw = serde_json::to_string(value)?;
        self.set_raw(key, &raw)
    }
}
