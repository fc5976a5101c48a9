//! Persisted credential storage capability.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::cell::RefCell;
use std::collections::HashMap;

/// Storage key holding the opaque bearer token. Presence of a non-empty
/// value is the sole authentication signal; the value is never parsed.
pub const AUTH_TOKEN_KEY: &str = "authToken";

/// Storage key holding the serialized user-profile record.
pub const USER_DATA_KEY: &str = "userData";

/// String key-value storage persisted across page loads.
///
/// Shared, read-mostly state: [`crate::session::Session`] is the only
/// writer of the credential keys; the guard's auth oracle only reads them
/// and must tolerate the value changing between two calls.
pub trait CredentialStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// In-process store used natively and in tests.
///
/// Single-threaded by design, matching the browser main-thread environment;
/// share via `Rc<MemoryStore>`.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl CredentialStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_owned(), value.to_owned());
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}
