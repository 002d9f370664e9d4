//! Startup orchestration.
//!
//! # Responsibilities
//! - Turn configured routes into a frozen dispatcher
//! - Start the metrics endpoint when enabled
//! - Bind the listener and begin accepting traffic
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - Handler names resolved here, never at dispatch time
//! - Listener binds last (traffic only when routes are ready)

use axum::response::Response;
use thiserror::Error;
use tokio::net::TcpListener;

use crate::config::{ConfigError, RouteConfig, RouterConfig};
use crate::controllers::HandlerTable;
use crate::http::HttpServer;
use crate::lifecycle::shutdown::Shutdown;
use crate::lifecycle::signals::shutdown_signal;
use crate::observability::metrics;
use crate::routing::{Dispatcher, InvalidPatternError, RouteRegistry};

/// Failures that stop the process before it serves traffic.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("route {index} ({method} {path}): {source}")]
    Route {
        index: usize,
        method: String,
        path: String,
        #[source]
        source: InvalidPatternError,
    },

    #[error("route {index} ({method} {path}) references unknown handler `{handler}`")]
    UnknownHandler {
        index: usize,
        method: String,
        path: String,
        handler: String,
    },

    #[error("route {index} ({method} {path}): handler `{handler}` needs placeholder `{param}`")]
    MissingParam {
        index: usize,
        method: String,
        path: String,
        handler: String,
        param: &'static str,
    },

    #[error("invalid metrics address `{0}`")]
    MetricsAddress(String),

    #[error("failed to start metrics exporter: {0}")]
    Metrics(#[from] metrics_exporter_prometheus::BuildError),

    #[error("failed to bind {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: std::io::Error,
    },

    #[error("server error: {0}")]
    Serve(#[source] std::io::Error),
}

/// Register `routes` in order, resolving each handler name through `table`.
pub fn build_dispatcher(
    routes: &[RouteConfig],
    table: &HandlerTable,
) -> Result<Dispatcher<Response>, StartupError> {
    let mut registry = RouteRegistry::new();

    for (index, route) in routes.iter().enumerate() {
        let handler = table
            .resolve(&route.handler)
            .ok_or_else(|| StartupError::UnknownHandler {
                index,
                method: route.method.clone(),
                path: route.path.clone(),
                handler: route.handler.clone(),
            })?;

        registry
            .add_shared(&route.method, &route.path, handler)
            .map_err(|source| StartupError::Route {
                index,
                method: route.method.clone(),
                path: route.path.clone(),
                source,
            })?;

        let compiled = &registry.routes()[index];
        let required = table.required_params(&route.handler).unwrap_or_default();
        if let Some(&param) = required
            .iter()
            .find(|p| !compiled.pattern().param_names().any(|name| name == **p))
        {
            return Err(StartupError::MissingParam {
                index,
                method: route.method.clone(),
                path: route.path.clone(),
                handler: route.handler.clone(),
                param,
            });
        }
    }

    tracing::info!(routes = registry.len(), "Routing table built");
    Ok(Dispatcher::new(registry))
}

/// Build everything from `config` and serve until Ctrl+C or SIGTERM.
pub async fn run(config: RouterConfig) -> Result<(), StartupError> {
    let dispatcher = build_dispatcher(&config.effective_routes(), &HandlerTable::builtin())?;

    tracing::info!(
        bind_address = %config.listener.bind_address,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        let addr = config
            .observability
            .metrics_address
            .parse::<std::net::SocketAddr>()
            .map_err(|_| StartupError::MetricsAddress(config.observability.metrics_address.clone()))?;
        metrics::init_metrics(addr)?;
    }

    let listener = TcpListener::bind(&config.listener.bind_address)
        .await
        .map_err(|source| StartupError::Bind {
            address: config.listener.bind_address.clone(),
            source,
        })?;

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        shutdown_signal().await;
        shutdown.trigger();
    });

    HttpServer::new(config, dispatcher)
        .run(listener, server_shutdown)
        .await
        .map_err(StartupError::Serve)
}
