//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with a single catch-all handler
//! - Wire up middleware (tracing, timeout, request ID)
//! - Bind server to listener
//! - Hand each request's method and clean path to the dispatcher
//! - Observability (metrics, request IDs)

use std::time::{Duration, Instant};

use axum::{
    body::Body,
    extract::State,
    http::Request,
    response::{IntoResponse, Response},
    routing::any,
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::RouterConfig;
use crate::http::request::{normalize_path, RequestIdGenerator, X_REQUEST_ID};
use crate::observability::metrics::{self, DispatchOutcome};
use crate::routing::Dispatcher;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub dispatcher: Dispatcher<Response>,
}

/// HTTP front end for the dispatcher.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server serving `dispatcher`.
    pub fn new(config: RouterConfig, dispatcher: Dispatcher<Response>) -> Self {
        let state = AppState { dispatcher };
        let router = Self::build_router(&config, state);
        Self { router }
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &RouterConfig, state: AppState) -> Router {
        Router::new()
            .route("/{*path}", any(dispatch_handler))
            .route("/", any(dispatch_handler))
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)))
            .layer(PropagateRequestIdLayer::new(X_REQUEST_ID))
            .layer(TraceLayer::new_for_http())
            .layer(SetRequestIdLayer::new(X_REQUEST_ID, RequestIdGenerator))
    }

    /// The fully layered Axum router, for serving it some other way.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server until `shutdown` fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Resolves every request through the dispatcher.
async fn dispatch_handler(State(state): State<AppState>, request: Request<Body>) -> Response {
    let start_time = Instant::now();
    let request_id = request
        .headers()
        .get(X_REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown")
        .to_string();
    let method = request.method().as_str().to_string();

    let path = match normalize_path(request.uri().path()) {
        Ok(path) => path,
        Err(e) => {
            tracing::warn!(request_id = %request_id, raw_path = %request.uri().path(), error = %e, "Rejected request path");
            metrics::record_dispatch(&method, DispatchOutcome::BadRequest, start_time);
            return e.into_response();
        }
    };

    match state.dispatcher.dispatch(&method, &path) {
        Ok(response) => {
            tracing::debug!(
                request_id = %request_id,
                method = %method,
                path = %path,
                status = %response.status(),
                "Request dispatched"
            );
            metrics::record_dispatch(&method, DispatchOutcome::Matched, start_time);
            response
        }
        Err(e) => {
            tracing::info!(request_id = %request_id, error = %e, "No route matched");
            metrics::record_dispatch(&method, DispatchOutcome::NotFound, start_time);
            e.into_response()
        }
    }
}
