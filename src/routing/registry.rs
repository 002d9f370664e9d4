//! Route registry.
//!
//! # Responsibilities
//! - Validate and compile route declarations
//! - Keep routes in insertion order
//! - Expose a read-only view for the dispatcher
//!
//! # Design Decisions
//! - Append-only: no removal or reordering after registration
//! - A rejected declaration leaves the registry untouched
//! - Shadowed routes are logged, never reordered

use std::fmt;
use std::sync::Arc;

use axum::http::Method;
use serde::Serialize;

use crate::routing::handler::{Handler, SharedHandler};
use crate::routing::params::Params;
use crate::routing::pattern::{InvalidPatternError, Pattern};

/// A compiled (method, pattern, handler) binding.
pub struct Route<T> {
    method: Method,
    pattern: Pattern,
    handler: SharedHandler<T>,
}

impl<T> Route<T> {
    /// Uppercase-normalized method.
    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    pub fn handler(&self) -> &SharedHandler<T> {
        &self.handler
    }

    /// Match against a request method and its split path.
    pub fn matches(&self, method: &str, segments: &[&str]) -> Option<Params> {
        if !self.method.as_str().eq_ignore_ascii_case(method) {
            return None;
        }
        self.pattern.match_segments(segments)
    }

    pub fn summary(&self) -> RouteSummary {
        RouteSummary {
            method: self.method.to_string(),
            pattern: self.pattern.to_string(),
            params: self.pattern.param_names().map(str::to_string).collect(),
        }
    }
}

// Handlers are opaque closures, so Debug shows only the routing key.
impl<T> fmt::Debug for Route<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Route")
            .field("method", &self.method)
            .field("pattern", &self.pattern.as_str())
            .finish_non_exhaustive()
    }
}

/// Serializable view of a route, used by diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteSummary {
    pub method: String,
    pub pattern: String,
    pub params: Vec<String>,
}

/// Ordered set of registered routes.
pub struct RouteRegistry<T> {
    routes: Vec<Route<T>>,
}

impl<T> RouteRegistry<T> {
    pub fn new() -> Self {
        Self { routes: Vec::new() }
    }

    /// Register a route owning `handler`.
    ///
    /// ```
    /// use route_dispatch::routing::{Params, RouteRegistry};
    ///
    /// let mut registry: RouteRegistry<usize> = RouteRegistry::new();
    /// registry.add("get", "/user/{id}", |p: &Params| p.len()).unwrap();
    /// assert_eq!(registry.routes()[0].method().as_str(), "GET");
    /// ```
    pub fn add<H>(&mut self, method: &str, pattern: &str, handler: H) -> Result<(), InvalidPatternError>
    where
        H: Handler<T> + 'static,
    {
        self.add_shared(method, pattern, Arc::new(handler))
    }

    /// Register a route using a handler shared with other routes.
    pub fn add_shared(
        &mut self,
        method: &str,
        pattern: &str,
        handler: SharedHandler<T>,
    ) -> Result<(), InvalidPatternError> {
        let method = normalize_method(method)?;
        let pattern = Pattern::parse(pattern)?;

        if let Some(earlier) = self
            .routes
            .iter()
            .find(|r| r.method == method && r.pattern.covers(&pattern))
        {
            tracing::warn!(
                method = %method,
                pattern = %pattern,
                shadowed_by = %earlier.pattern,
                "Route is unreachable: an earlier route matches every path it does"
            );
        }

        tracing::debug!(
            index = self.routes.len(),
            method = %method,
            pattern = %pattern,
            "Route registered"
        );

        self.routes.push(Route {
            method,
            pattern,
            handler,
        });
        Ok(())
    }

    /// Registered routes in insertion order.
    pub fn routes(&self) -> &[Route<T>] {
        &self.routes
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

impl<T> Default for RouteRegistry<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for RouteRegistry<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.routes).finish()
    }
}

/// Uppercase `method` and check it is a valid HTTP token.
pub fn normalize_method(method: &str) -> Result<Method, InvalidPatternError> {
    if method.is_empty() {
        return Err(InvalidPatternError::InvalidMethod(method.to_string()));
    }
    Method::from_bytes(method.to_ascii_uppercase().as_bytes())
        .map_err(|_| InvalidPatternError::InvalidMethod(method.to_string()))
}
