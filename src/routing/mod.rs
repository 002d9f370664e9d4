//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Route Registration (at startup):
//!     (method, "/user/{id}", handler)
//!     → pattern.rs (compile into Literal/Param segments)
//!     → registry.rs (append to ordered route list)
//!     → Freeze as immutable Dispatcher
//!
//! Incoming Request (method, path):
//!     → dispatcher.rs (scan routes in insertion order)
//!     → pattern.rs (segment-by-segment match, bind params)
//!     → handler.rs (invoke with bound Params)
//!     → Return: handler output or NotFoundError
//! ```
//!
//! # Design Decisions
//! - Patterns compiled and validated once, dispatch trusts them
//! - Routes immutable after the registration phase (shared without locks)
//! - Deterministic: first registered match wins, never the most specific
//! - Method mismatch and path mismatch both collapse to NotFound (no 405)

pub mod dispatcher;
pub mod handler;
pub mod params;
pub mod pattern;
pub mod registry;

pub use dispatcher::{Dispatcher, MatchSummary, NotFoundError, RouteMatch};
pub use handler::Handler;
pub use params::Params;
pub use pattern::{InvalidPatternError, Pattern, Segment};
pub use registry::{Route, RouteRegistry, RouteSummary};
