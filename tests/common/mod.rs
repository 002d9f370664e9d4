//! Shared utilities for integration tests.

use std::net::SocketAddr;
use std::time::Duration;

use axum::body::Body;
use axum::http::{Request, Response};
use route_dispatch::config::{RouteConfig, RouterConfig};
use route_dispatch::controllers::HandlerTable;
use route_dispatch::lifecycle::{build_dispatcher, Shutdown};
use route_dispatch::HttpServer;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Server built from the default config and the built-in route table.
pub fn builtin_server() -> HttpServer {
    server_with_routes(RouteConfig::builtin())
}

pub fn server_with_routes(routes: Vec<RouteConfig>) -> HttpServer {
    let config = RouterConfig {
        routes,
        ..RouterConfig::default()
    };
    let dispatcher = build_dispatcher(&config.effective_routes(), &HandlerTable::builtin())
        .expect("routes should build");
    HttpServer::new(config, dispatcher)
}

#[allow(dead_code)]
pub fn request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

#[allow(dead_code)]
pub async fn body_text(response: Response<Body>) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// A server running on an ephemeral loopback port.
#[allow(dead_code)]
pub struct RunningServer {
    pub addr: SocketAddr,
    pub shutdown: Shutdown,
    pub handle: JoinHandle<Result<(), std::io::Error>>,
}

#[allow(dead_code)]
pub async fn spawn_server(server: HttpServer) -> RunningServer {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();

    let handle = tokio::spawn(async move { server.run(listener, server_shutdown).await });

    // Listener is already bound; give the accept loop a moment to start.
    tokio::time::sleep(Duration::from_millis(50)).await;

    RunningServer {
        addr,
        shutdown,
        handle,
    }
}
