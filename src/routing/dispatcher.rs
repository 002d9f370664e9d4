//! Route lookup and dispatch.
//!
//! # Responsibilities
//! - Resolve (method, path) to the first matching route
//! - Bind placeholder values
//! - Invoke the handler, or return an explicit NotFound
//!
//! # Design Decisions
//! - Immutable after construction (thread-safe without locks)
//! - O(n) scan in registration order (acceptable for typical route counts)
//! - Path must already be normalized; no decoding happens here
//! - Handler output, including its errors, is returned unmodified

use std::sync::Arc;

use serde::Serialize;
use thiserror::Error;

use crate::routing::params::Params;
use crate::routing::pattern::split_path;
use crate::routing::registry::{Route, RouteRegistry, RouteSummary};

/// No registered route matches the request.
///
/// Covers both "no such path" and "path exists under another method".
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("no route matches {method} {path}")]
pub struct NotFoundError {
    pub method: String,
    pub path: String,
}

/// A successful lookup: the winning route and its bound parameters.
#[derive(Debug)]
pub struct RouteMatch<'r, T> {
    /// Position of the route in registration order.
    pub index: usize,
    pub route: &'r Route<T>,
    pub params: Params,
}

impl<T> RouteMatch<'_, T> {
    /// Invoke the matched handler with the bound parameters.
    pub fn invoke(&self) -> T {
        self.route.handler().call(&self.params)
    }

    pub fn summary(&self) -> MatchSummary {
        MatchSummary {
            index: self.index,
            route: self.route.summary(),
            params: self.params.clone(),
        }
    }
}

/// Serializable view of a match, used by diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchSummary {
    pub index: usize,
    pub route: RouteSummary,
    pub params: Params,
}

/// Frozen routing table shared by all request tasks.
pub struct Dispatcher<T> {
    registry: Arc<RouteRegistry<T>>,
}

impl<T> Dispatcher<T> {
    /// Freeze `registry`. No routes can be added afterwards.
    pub fn new(registry: RouteRegistry<T>) -> Self {
        Self {
            registry: Arc::new(registry),
        }
    }

    pub fn routes(&self) -> &[Route<T>] {
        self.registry.routes()
    }

    /// Find the first route matching `method` and `path` without invoking it.
    pub fn find(&self, method: &str, path: &str) -> Result<RouteMatch<'_, T>, NotFoundError> {
        let not_found = || NotFoundError {
            method: method.to_ascii_uppercase(),
            path: path.to_string(),
        };

        let segments = split_path(path).ok_or_else(not_found)?;

        for (index, route) in self.registry.routes().iter().enumerate() {
            if let Some(params) = route.matches(method, &segments) {
                tracing::debug!(
                    method = %route.method(),
                    path = %path,
                    pattern = %route.pattern(),
                    index,
                    "Route matched"
                );
                return Ok(RouteMatch {
                    index,
                    route,
                    params,
                });
            }
        }

        tracing::debug!(method = %method, path = %path, "No route matched");
        Err(not_found())
    }

    /// Resolve the request and invoke the winning handler.
    ///
    /// ```
    /// use route_dispatch::routing::{Dispatcher, Params, RouteRegistry};
    ///
    /// let mut registry: RouteRegistry<String> = RouteRegistry::new();
    /// registry
    ///     .add("GET", "/user/{id}", |p: &Params| format!("user {}", p.get("id").unwrap_or_default()))
    ///     .unwrap();
    ///
    /// let dispatcher = Dispatcher::new(registry);
    /// assert_eq!(dispatcher.dispatch("GET", "/user/42").unwrap(), "user 42");
    /// assert!(dispatcher.dispatch("DELETE", "/user/42").is_err());
    /// ```
    pub fn dispatch(&self, method: &str, path: &str) -> Result<T, NotFoundError> {
        self.find(method, path).map(|matched| matched.invoke())
    }
}

impl<T> Clone for Dispatcher<T> {
    fn clone(&self) -> Self {
        Self {
            registry: Arc::clone(&self.registry),
        }
    }
}

impl<T> From<RouteRegistry<T>> for Dispatcher<T> {
    fn from(registry: RouteRegistry<T>) -> Self {
        Self::new(registry)
    }
}

impl<T> std::fmt::Debug for Dispatcher<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatcher")
            .field("routes", &self.registry)
            .finish()
    }
}
