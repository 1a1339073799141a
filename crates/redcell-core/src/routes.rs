//! Static route table plus the in-process navigation state.

use std::sync::RwLock;

use crate::ports::Navigator;

/// Every navigable location in the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Root,
    Login,
    Main,
    Dashboard,
    Domain,
    Vps,
    Module,
    Config,
}

impl Route {
    /// Where a fresh login lands.
    pub const HOME: Route = Route::Domain;

    pub const fn path(self) -> &'static str {
        match self {
            Route::Root => "/",
            Route::Login => "/login",
            Route::Main => "/main",
            Route::Dashboard => "/main/dashboard",
            Route::Domain => "/domain",
            Route::Vps => "/vps",
            Route::Module => "/module",
            Route::Config => "/config",
        }
    }

    /// Shell-level redirect, if this route has one.
    pub const fn redirect(self) -> Option<Route> {
        match self {
            Route::Root => Some(Route::Login),
            Route::Main => Some(Route::Dashboard),
            _ => None,
        }
    }

    pub const fn requires_auth(self) -> bool {
        !matches!(self, Route::Root | Route::Login)
    }

    /// Match a path against the table. Unknown paths fall back to the root.
    pub fn resolve(path: &str) -> Route {
        let trimmed = if path.len() > 1 {
            path.trim_end_matches('/')
        } else {
            path
        };
        match trimmed {
            "/" => Route::Root,
            "/login" => Route::Login,
            "/main" => Route::Main,
            "/main/dashboard" => Route::Dashboard,
            "/domain" => Route::Domain,
            "/vps" => Route::Vps,
            "/module" => Route::Module,
            "/config" => Route::Config,
            _ => Route::Root,
        }
    }

    /// Resolve a path and follow redirects until a rendered route.
    pub fn resolve_entry(path: &str) -> Route {
        let mut route = Self::resolve(path);
        while let Some(next) = route.redirect() {
            route = next;
        }
        route
    }
}

/// Current route plus the transition history, shared across tasks.
///
/// Locks are held only for the duration of a field access.
pub struct RouteState {
    current: RwLock<Route>,
    visited: RwLock<Vec<Route>>,
}

impl RouteState {
    pub fn new() -> Self {
        Self::starting_at(Route::Root)
    }

    pub fn starting_at(route: Route) -> Self {
        Self {
            current: RwLock::new(route),
            visited: RwLock::new(Vec::new()),
        }
    }

    /// Every route navigated to since construction, in order.
    pub fn visited(&self) -> Vec<Route> {
        self.visited.read().unwrap().clone()
    }
}

impl Default for RouteState {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator for RouteState {
    fn navigate(&self, route: Route) {
        *self.current.write().unwrap() = route;
        self.visited.write().unwrap().push(route);
        tracing::debug!(path = route.path(), "navigated");
    }

    fn current(&self) -> Route {
        *self.current.read().unwrap()
    }
}
