//! Minimal HTTP request router.
//!
//! Routes are `(method, pattern, handler)` triples registered at startup.
//! A pattern is a `/`-separated list of literal segments and `{name}`
//! placeholders. Dispatch scans routes in registration order and invokes the
//! first one whose method and every segment match.
//!
//! ```
//! use route_dispatch::routing::{Dispatcher, Params, RouteRegistry};
//!
//! let mut registry: RouteRegistry<String> = RouteRegistry::new();
//! registry.add("GET", "/", |_: &Params| "home".to_string()).unwrap();
//! registry
//!     .add("GET", "/user/{id}", |p: &Params| format!("user {}", p.get("id").unwrap_or_default()))
//!     .unwrap();
//!
//! let dispatcher = Dispatcher::new(registry);
//! assert_eq!(dispatcher.dispatch("get", "/user/42").unwrap(), "user 42");
//! assert!(dispatcher.dispatch("POST", "/user/42").is_err());
//! ```

pub mod config;
pub mod controllers;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod routing;

pub use config::schema::RouterConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use routing::{Dispatcher, NotFoundError, Params, RouteRegistry};
