//! Handler contract.

use std::sync::Arc;

use crate::routing::params::Params;

/// A callable invoked with the parameters bound by a successful match.
///
/// `T` is whatever the handler produces. If a handler can fail, `T` is a
/// `Result` and the error reaches the dispatch caller untouched.
pub trait Handler<T>: Send + Sync {
    fn call(&self, params: &Params) -> T;
}

impl<T, F> Handler<T> for F
where
    F: Fn(&Params) -> T + Send + Sync,
{
    fn call(&self, params: &Params) -> T {
        self(params)
    }
}

/// Shared handle stored in a route. Resolved once, at registration.
pub type SharedHandler<T> = Arc<dyn Handler<T>>;
