//! The navigation guard: decides, per requested path, whether to deliver,
//! or to redirect to the login or home surface.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use std::rc::Rc;

use tracing::{debug, trace, warn};

use crate::auth::AuthOracle;
use crate::history::HistoryAdapter;
use crate::policy::{GuardPolicy, RouteClass};
use crate::route::{NavOrigin, NavigationRequest, RouteHandler, RouteTable};

/// Gates route access by authentication classification.
///
/// Holds the route table, the static [`GuardPolicy`], the injected
/// [`AuthOracle`] and a [`HistoryAdapter`]. The only state carried across
/// navigations is the current route; every decision is otherwise a pure
/// function of the requested path and a fresh `is_authenticated()` answer.
pub struct NavigationGuard<H: HistoryAdapter> {
    routes: RouteTable,
    policy: GuardPolicy,
    auth: Rc<dyn AuthOracle>,
    history: H,
    current: Option<String>,
}

impl<H: HistoryAdapter> NavigationGuard<H> {
    #[must_use]
    pub fn new(policy: GuardPolicy, auth: Rc<dyn AuthOracle>, history: H) -> Self {
        Self {
            routes: RouteTable::new(),
            policy,
            auth,
            history,
            current: None,
        }
    }

    /// Register the handler invoked when `path` becomes the settled
    /// destination. Last registration for a path wins.
    pub fn register(&mut self, path: impl Into<String>, handler: impl FnMut() + 'static) {
        self.routes.register(path, handler);
    }

    /// Pure read of the route table; `None` is the expected answer for
    /// paths covered by the default-route policy.
    #[must_use]
    pub fn lookup(&self, path: &str) -> Option<&RouteHandler> {
        self.routes.lookup(path)
    }

    /// The path the guard last settled on.
    #[must_use]
    pub fn current_route(&self) -> Option<&str> {
        self.current.as_deref()
    }

    #[must_use]
    pub fn history(&self) -> &H {
        &self.history
    }

    pub fn history_mut(&mut self) -> &mut H {
        &mut self.history
    }

    /// Programmatic or link navigation: records a history entry, then
    /// resolves. Returns the settled path (a redirect target when the
    /// guard denied `path`).
    pub fn navigate(&mut self, path: &str) -> String {
        self.history.push(path);
        self.resolve(NavigationRequest::new(path, NavOrigin::UserClick))
    }

    /// Back/forward navigation. No history entry is recorded; the full
    /// guard logic still applies, so a protected page does not become
    /// reachable merely by pressing back after logging out.
    pub fn handle_pop(&mut self, path: &str) -> String {
        self.resolve(NavigationRequest::new(path, NavOrigin::PopState))
    }

    /// Resolve the path the page loaded on.
    pub fn handle_initial(&mut self, path: &str) -> String {
        self.resolve(NavigationRequest::new(path, NavOrigin::InitialLoad))
    }

    /// Decide the final path for a navigation attempt, update the current
    /// route, and invoke the settled path's handler (exactly once,
    /// synchronously).
    ///
    /// Cannot fail: the only I/O is the boolean auth check. A panicking
    /// handler propagates to the caller; nothing is retried.
    pub fn resolve(&mut self, request: NavigationRequest) -> String {
        trace!(path = %request.path, origin = ?request.origin, "navigation requested");
        self.settle(&request.path)
    }

    fn settle(&mut self, path: &str) -> String {
        self.current = Some(path.to_owned());
        let authenticated = self.auth.is_authenticated();

        match self.policy.classify(path) {
            RouteClass::Protected if !authenticated => {
                debug!(%path, "unauthenticated caller on protected route");
                let login = self.policy.login_path().to_owned();
                return self.redirect(&login);
            }
            RouteClass::AuthOnly if authenticated => {
                debug!(%path, "authenticated caller on auth-only route");
                let home = self.policy.home_path().to_owned();
                return self.redirect(&home);
            }
            _ => {}
        }

        if self.routes.run(path) {
            return path.to_owned();
        }
        self.default_route(path, authenticated)
    }

    /// Replace the pending history entry and re-enter the decision for the
    /// target, so the target's own classification and handler apply.
    /// Replacing (never pushing) keeps redirects off the back stack.
    fn redirect(&mut self, target: &str) -> String {
        if self.current.as_deref() == Some(target) {
            // Redirect surface with no registered handler; settle here
            // instead of looping.
            warn!(path = %target, "redirect target has no handler; settling");
            return target.to_owned();
        }
        self.history.replace(target);
        self.settle(target)
    }

    /// Policy for resolved paths with no registered handler.
    fn default_route(&mut self, path: &str, authenticated: bool) -> String {
        let at_root = path == "/" || path.is_empty();
        if at_root && !authenticated {
            // Public landing page: terminal, valid, nothing to invoke.
            return path.to_owned();
        }

        let target = if authenticated {
            self.policy.home_path().to_owned()
        } else {
            self.policy.login_path().to_owned()
        };
        debug!(%path, %target, "no handler registered; applying default route");
        self.redirect(&target)
    }
}
