//! Metrics collection and exposition.
//!
//! # Metrics
//! - `router_dispatch_total` (counter): dispatches by method, outcome
//! - `router_request_duration_seconds` (histogram): time spent per request
//!
//! # Design Decisions
//! - Recording is a no-op until an exporter is installed
//! - Labels limited to method and outcome; methods outside the standard
//!   set share the `OTHER` label

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

/// Result of resolving one request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    Matched,
    NotFound,
    BadRequest,
}

impl DispatchOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            DispatchOutcome::Matched => "matched",
            DispatchOutcome::NotFound => "not_found",
            DispatchOutcome::BadRequest => "bad_request",
        }
    }
}

/// Start the Prometheus scrape endpoint on `addr`.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics endpoint listening");
    Ok(())
}

/// Metric label for a request method. Extension methods collapse to `OTHER`.
pub fn method_label(method: &str) -> &'static str {
    const STANDARD: [&str; 9] = [
        "GET", "HEAD", "POST", "PUT", "DELETE", "CONNECT", "OPTIONS", "TRACE", "PATCH",
    ];
    STANDARD
        .into_iter()
        .find(|m| m.eq_ignore_ascii_case(method))
        .unwrap_or("OTHER")
}

/// Record one dispatch.
pub fn record_dispatch(method: &str, outcome: DispatchOutcome, start: Instant) {
    metrics::counter!(
        "router_dispatch_total",
        "method" => method_label(method),
        "outcome" => outcome.as_str()
    )
    .increment(1);

    metrics::histogram!(
        "router_request_duration_seconds",
        "outcome" => outcome.as_str()
    )
    .record(start.elapsed().as_secs_f64());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_labels() {
        assert_eq!(DispatchOutcome::Matched.as_str(), "matched");
        assert_eq!(DispatchOutcome::NotFound.as_str(), "not_found");
        assert_eq!(DispatchOutcome::BadRequest.as_str(), "bad_request");
    }

    #[test]
    fn test_method_labels() {
        assert_eq!(method_label("GET"), "GET");
        assert_eq!(method_label("patch"), "PATCH");
        assert_eq!(method_label("Options"), "OPTIONS");
        assert_eq!(method_label("PURGE"), "OTHER");
        assert_eq!(method_label("X-RANDOM-1234"), "OTHER");
        assert_eq!(method_label(""), "OTHER");
    }

    #[test]
    fn test_record_without_exporter() {
        record_dispatch("get", DispatchOutcome::Matched, Instant::now());
    }
}
