//! Route history for the landing site.

use std::mem;

use peaky_types::{Route, normalize_path};

/// Maximum number of entries kept in the back stack.
const MAX_HISTORY: usize = 32;

/// A resolved location: the path as requested and the page it maps to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub path: String,
    pub route: Route,
}

impl Location {
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        let path = path.into();
        let route = Route::resolve(&path);
        Self { path, route }
    }
}

/// Outcome of a navigation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteChange {
    /// The page changed from `from` to `to`.
    Changed { from: Route, to: Route },
    /// Same page; only the path differs or nothing happened.
    Unchanged,
}

#[derive(Debug)]
pub struct Navigator {
    current: Location,
    back: Vec<Location>,
}

impl Navigator {
    #[must_use]
    pub fn new(start_path: &str) -> Self {
        let current = Location::new(start_path);
        tracing::info!(path = %current.path, route = ?current.route, "Router started");
        Self {
            current,
            back: Vec::new(),
        }
    }

    #[must_use]
    pub fn current(&self) -> &Location {
        &self.current
    }

    #[must_use]
    pub fn route(&self) -> Route {
        self.current.route
    }

    #[must_use]
    pub fn can_go_back(&self) -> bool {
        !self.back.is_empty()
    }

    /// Navigate to `path`, pushing the current location onto the back stack.
    ///
    /// Navigating to the location already shown (after path normalization)
    /// is a no-op and leaves history untouched.
    pub fn push(&mut self, path: &str) -> RouteChange {
        if normalize_path(&self.current.path) == normalize_path(path) {
            return RouteChange::Unchanged;
        }
        let next = Location::new(path);
        if next.route == Route::NotFound {
            tracing::warn!(path, "No route matches path");
        }
        let previous = mem::replace(&mut self.current, next);
        let from = previous.route;
        self.back.push(previous);
        if self.back.len() > MAX_HISTORY {
            self.back.remove(0);
        }
        self.change(from)
    }

    pub fn push_route(&mut self, route: Route) -> RouteChange {
        match route.path() {
            Some(path) => self.push(path),
            None => RouteChange::Unchanged,
        }
    }

    /// Return to the previous location, if any.
    pub fn back(&mut self) -> RouteChange {
        let Some(previous) = self.back.pop() else {
            return RouteChange::Unchanged;
        };
        let from = self.current.route;
        self.current = previous;
        self.change(from)
    }

    fn change(&self, from: Route) -> RouteChange {
        let to = self.current.route;
        tracing::info!(path = %self.current.path, ?from, ?to, "Route changed");
        if from == to {
            RouteChange::Unchanged
        } else {
            RouteChange::Changed { from, to }
        }
    }
}
