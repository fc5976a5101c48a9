//! Login/logout session flow over the persisted credential store.
//!
//! `Session` is the only component that writes the credential keys; the
//! guard's auth oracle only ever reads them.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::rc::Rc;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::store::{AUTH_TOKEN_KEY, CredentialStore, USER_DATA_KEY};

/// User-profile record persisted alongside the token.
///
/// Serialized camelCase (`firstName`, `lastName`) to stay compatible with
/// records already in storage.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub first_name: String,
    pub last_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl UserProfile {
    /// Display name shown in the navigation chrome.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Decode a stored profile record.
    ///
    /// # Errors
    ///
    /// Returns [`ProfileError::Decode`] when the stored text is not a valid
    /// profile record.
    pub fn from_json(raw: &str) -> Result<Self, ProfileError> {
        Ok(serde_json::from_str(raw)?)
    }
}

/// Error decoding a stored [`UserProfile`].
#[derive(Debug, thiserror::Error)]
pub enum ProfileError {
    #[error("failed to decode stored profile: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Tracks the signed-in user and owns the credential keys.
pub struct Session {
    store: Rc<dyn CredentialStore>,
    user: Option<UserProfile>,
}

impl Session {
    #[must_use]
    pub fn new(store: Rc<dyn CredentialStore>) -> Self {
        Self { store, user: None }
    }

    /// Rehydrate the signed-in user from storage, as on page load.
    ///
    /// Requires both the token and the profile record to be present. A
    /// corrupt stored profile clears the credentials entirely rather than
    /// leaving a token with no usable identity behind.
    pub fn restore(&mut self) -> Option<&UserProfile> {
        let token = self.store.get(AUTH_TOKEN_KEY)?;
        let raw = self.store.get(USER_DATA_KEY)?;
        if token.is_empty() {
            return None;
        }

        match UserProfile::from_json(&raw) {
            Ok(profile) => {
                self.user = Some(profile);
                self.user.as_ref()
            }
            Err(e) => {
                warn!(error = %e, "stored profile unreadable; clearing credentials");
                self.logout();
                None
            }
        }
    }

    /// Record a successful login: keep the profile in memory and persist
    /// both credential keys.
    pub fn login(&mut self, profile: UserProfile, token: &str) {
        self.store.set(AUTH_TOKEN_KEY, token);
        if let Ok(json) = serde_json::to_string(&profile) {
            self.store.set(USER_DATA_KEY, &json);
        }
        self.user = Some(profile);
    }

    /// Clear the in-memory user and both credential keys. Navigation back
    /// to the login surface is the caller's move.
    pub fn logout(&mut self) {
        self.user = None;
        self.store.remove(AUTH_TOKEN_KEY);
        self.store.remove(USER_DATA_KEY);
    }

    #[must_use]
    pub fn user(&self) -> Option<&UserProfile> {
        self.user.as_ref()
    }

    /// Signed in: a user is loaded and the token is still present.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some() && self.store.get(AUTH_TOKEN_KEY).is_some()
    }
}
