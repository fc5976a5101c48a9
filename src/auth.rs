//! Authentication capability consumed by the navigation guard.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::rc::Rc;

use crate::store::{AUTH_TOKEN_KEY, CredentialStore};

/// Answers "is a caller currently authenticated".
///
/// Must be side-effect-free and cheap: the guard calls it fresh on every
/// navigation decision rather than caching the answer, so a login or logout
/// elsewhere on the page takes effect on the very next navigation.
pub trait AuthOracle {
    fn is_authenticated(&self) -> bool;
}

/// Oracle backed by token presence in a persisted credential store.
///
/// Authenticated iff a non-empty string is stored under `authToken`. The
/// token value is opaque; no expiry or validation happens client-side.
pub struct TokenAuthOracle {
    store: Rc<dyn CredentialStore>,
}

impl TokenAuthOracle {
    #[must_use]
    pub fn new(store: Rc<dyn CredentialStore>) -> Self {
        Self { store }
    }
}

impl AuthOracle for TokenAuthOracle {
    fn is_authenticated(&self) -> bool {
        self.store
            .get(AUTH_TOKEN_KEY)
            .is_some_and(|token| !token.is_empty())
    }
}
