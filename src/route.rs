//! Route table and the typed navigation event.

#[cfg(test)]
#[path = "route_test.rs"]
mod route_test;

use std::collections::HashMap;
use std::fmt;

/// Zero-argument callback invoked when its route becomes the settled
/// destination of a navigation.
pub type RouteHandler = Box<dyn FnMut()>;

/// How a navigation attempt reached the guard.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavOrigin {
    /// An in-page link or programmatic navigation.
    UserClick,
    /// The user pressed back/forward.
    PopState,
    /// The initial page load.
    InitialLoad,
}

/// A single navigation attempt. Ephemeral: created per attempt, consumed
/// immediately by [`crate::guard::NavigationGuard::resolve`].
#[derive(Debug)]
pub struct NavigationRequest {
    pub path: String,
    pub origin: NavOrigin,
}

impl NavigationRequest {
    #[must_use]
    pub fn new(path: impl Into<String>, origin: NavOrigin) -> Self {
        Self {
            path: path.into(),
            origin,
        }
    }
}

/// Mapping from exact path to navigation handler.
///
/// Routes are registered once at startup; the last registration for a given
/// path wins. A missing path is an expected case (the guard falls back to
/// its default-route policy), never an error.
#[derive(Default)]
pub struct RouteTable {
    handlers: HashMap<String, RouteHandler>,
}

impl RouteTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite the handler for `path`.
    pub fn register(&mut self, path: impl Into<String>, handler: impl FnMut() + 'static) {
        self.handlers.insert(path.into(), Box::new(handler));
    }

    /// Pure read; `None` when nothing was registered for `path`.
    #[must_use]
    pub fn lookup(&self, path: &str) -> Option<&RouteHandler> {
        self.handlers.get(path)
    }

    /// Invoke the handler for `path` if one is registered.
    ///
    /// Returns whether a handler ran. A panicking handler propagates to the
    /// caller; the table performs no recovery.
    pub(crate) fn run(&mut self, path: &str) -> bool {
        match self.handlers.get_mut(path) {
            Some(handler) => {
                handler();
                true
            }
            None => false,
        }
    }
}

impl fmt::Debug for RouteTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteTable")
            .field("paths", &self.handlers.keys().collect::<Vec<_>>())
            .finish()
    }
}
