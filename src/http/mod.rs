//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware)
//!     → request.rs (request ID, strip query, decode, collapse slashes)
//!     → routing::Dispatcher (method + clean path)
//!     → response.rs (NotFound → 404, bad path → 400)
//!     → Send to client
//! ```

pub mod request;
pub mod response;
pub mod server;

pub use request::{normalize_path, PathError, RequestIdGenerator, X_REQUEST_ID};
pub use server::{AppState, HttpServer};
