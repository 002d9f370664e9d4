//! Request handlers served by the binary.
//!
//! # Data Flow
//! ```text
//! config routes ("user.show")
//!     → HandlerTable::resolve (once, at startup)
//!     → Arc<dyn Handler<Response>> stored in the Route
//!     → invoked by the dispatcher with bound Params
//! ```
//!
//! # Design Decisions
//! - Handlers are looked up by name only while building the routing table
//! - Each handler declares the placeholders it needs, checked at startup
//! - Output escaping is the handler's job, not the router's

pub mod home;
pub mod user;

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::response::Response;

use crate::routing::handler::SharedHandler;

/// Handler type used by the HTTP server.
pub type HttpHandler = SharedHandler<Response>;

struct Entry {
    handler: HttpHandler,
    required_params: &'static [&'static str],
}

/// Named handlers that configuration can refer to.
pub struct HandlerTable {
    entries: BTreeMap<&'static str, Entry>,
}

impl HandlerTable {
    pub fn empty() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// The handlers shipped with the binary.
    pub fn builtin() -> Self {
        let mut table = Self::empty();
        table.register("home.index", &[], Arc::new(home::index));
        table.register("user.show", &["id"], Arc::new(user::show));
        table.register("user.create", &[], Arc::new(user::create));
        table
    }

    pub fn register(
        &mut self,
        name: &'static str,
        required_params: &'static [&'static str],
        handler: HttpHandler,
    ) {
        self.entries.insert(
            name,
            Entry {
                handler,
                required_params,
            },
        );
    }

    pub fn resolve(&self, name: &str) -> Option<HttpHandler> {
        self.entries.get(name).map(|e| Arc::clone(&e.handler))
    }

    /// Placeholders the named handler reads from its Params.
    pub fn required_params(&self, name: &str) -> Option<&'static [&'static str]> {
        self.entries.get(name).map(|e| e.required_params)
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.keys().copied()
    }
}

impl Default for HandlerTable {
    fn default() -> Self {
        Self::builtin()
    }
}
