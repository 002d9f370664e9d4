//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the router.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct RouterConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,

    /// Route table, in match order. Empty means the built-in table.
    pub routes: Vec<RouteConfig>,
}

impl RouterConfig {
    /// Configured routes, or the built-in table when none are declared.
    pub fn effective_routes(&self) -> Vec<RouteConfig> {
        if self.routes.is_empty() {
            RouteConfig::builtin()
        } else {
            self.routes.clone()
        }
    }
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "127.0.0.1:8080").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1:8080".to_string(),
        }
    }
}

/// Timeout configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Total time allowed for one request, in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 30 }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log filter used when `RUST_LOG` is unset (e.g. "info", "route_dispatch=debug").
    pub log_level: String,

    /// Log output format.
    pub log_format: LogFormat,

    /// Enable Prometheus metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
            metrics_enabled: false,
            metrics_address: "127.0.0.1:9090".to_string(),
        }
    }
}

/// One route declaration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RouteConfig {
    /// HTTP method (case-insensitive).
    pub method: String,

    /// Path pattern, e.g. "/user/{id}".
    pub path: String,

    /// Name of a registered handler, e.g. "user.show".
    pub handler: String,
}

impl RouteConfig {
    pub fn new(method: &str, path: &str, handler: &str) -> Self {
        Self {
            method: method.to_string(),
            path: path.to_string(),
            handler: handler.to_string(),
        }
    }

    /// Routes served when the config declares none.
    pub fn builtin() -> Vec<RouteConfig> {
        vec![
            RouteConfig::new("GET", "/", "home.index"),
            RouteConfig::new("GET", "/user/{id}", "user.show"),
            RouteConfig::new("POST", "/user", "user.create"),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_config_uses_defaults() {
        let config: RouterConfig = toml::from_str("").unwrap();
        assert_eq!(config.listener.bind_address, "127.0.0.1:8080");
        assert_eq!(config.timeouts.request_secs, 30);
        assert_eq!(config.observability.log_format, LogFormat::Pretty);
        assert!(!config.observability.metrics_enabled);
        assert_eq!(config.effective_routes(), RouteConfig::builtin());
    }

    #[test]
    fn test_parse_full_config() {
        let config: RouterConfig = toml::from_str(
            r#"
            [listener]
            bind_address = "0.0.0.0:3000"

            [timeouts]
            request_secs = 5

            [observability]
            log_level = "debug"
            log_format = "json"
            metrics_enabled = true

            [[routes]]
            method = "get"
            path = "/user/{id}"
            handler = "user.show"

            [[routes]]
            method = "POST"
            path = "/user"
            handler = "user.create"
            "#,
        )
        .unwrap();

        assert_eq!(config.listener.bind_address, "0.0.0.0:3000");
        assert_eq!(config.timeouts.request_secs, 5);
        assert_eq!(config.observability.log_format, LogFormat::Json);
        assert_eq!(config.observability.metrics_address, "127.0.0.1:9090");
        assert_eq!(
            config.effective_routes(),
            vec![
                RouteConfig::new("get", "/user/{id}", "user.show"),
                RouteConfig::new("POST", "/user", "user.create"),
            ]
        );
    }

    #[test]
    fn test_unknown_log_format_is_rejected() {
        let result: Result<RouterConfig, _> = toml::from_str(
            r#"
            [observability]
            log_format = "xml"
            "#,
        );
        assert!(result.is_err());
    }
}
