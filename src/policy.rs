//! Static route classification and redirect surfaces.

#[cfg(test)]
#[path = "policy_test.rs"]
mod policy_test;

use std::collections::HashSet;

/// Authentication classification of a path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteClass {
    /// No authentication constraint.
    Unclassified,
    /// Reachable only by authenticated callers.
    Protected,
    /// Reachable only by unauthenticated callers (login/registration).
    AuthOnly,
}

/// Route classification table plus the two redirect surfaces.
///
/// Fixed at startup and never mutated afterwards; the guard consults it on
/// every navigation decision.
#[derive(Clone, Debug)]
pub struct GuardPolicy {
    protected: HashSet<String>,
    auth_only: HashSet<String>,
    login_path: String,
    home_path: String,
}

impl GuardPolicy {
    pub fn new<P, A>(protected: P, auth_only: A, login_path: &str, home_path: &str) -> Self
    where
        P: IntoIterator<Item = String>,
        A: IntoIterator<Item = String>,
    {
        Self {
            protected: protected.into_iter().collect(),
            auth_only: auth_only.into_iter().collect(),
            login_path: login_path.to_owned(),
            home_path: home_path.to_owned(),
        }
    }

    /// Classify `path` by membership in the configured sets.
    #[must_use]
    pub fn classify(&self, path: &str) -> RouteClass {
        if self.protected.contains(path) {
            RouteClass::Protected
        } else if self.auth_only.contains(path) {
            RouteClass::AuthOnly
        } else {
            RouteClass::Unclassified
        }
    }

    /// Surface unauthenticated callers are redirected to.
    #[must_use]
    pub fn login_path(&self) -> &str {
        &self.login_path
    }

    /// Landing surface for authenticated callers.
    #[must_use]
    pub fn home_path(&self) -> &str {
        &self.home_path
    }
}

impl Default for GuardPolicy {
    /// The application's classification table: the dashboard, profile and
    /// settings pages require authentication; the login and registration
    /// pages require its absence.
    fn default() -> Self {
        Self::new(
            ["/dashboard", "/profile", "/settings"]
                .map(str::to_owned),
            ["/login", "/register"].map(str::to_owned),
            "/login",
            "/dashboard",
        )
    }
}
