//! Tollgate Observability Module
//!
//! Provides:
//! - Structured logging via `tracing-subscriber` (compact or JSON)
//! - Prometheus metrics, including authentication counters
//! - HTTP request/response logging middleware
//!
//! Metrics and request logging can be switched off at runtime with
//! `OBSERVABILITY_ENABLED=false`; console logging is always on.
//!
//! # Examples
//!
//! ```no_run
//! use tollgate_observability::{init_metrics, init_tracing};
//!
//! #[tokio::main]
//! async fn main() {
//!     init_tracing();
//!     let handle = init_metrics();
//!     // ... application code ...
//! }
//! ```

use std::sync::OnceLock;

pub mod logging;
pub mod metrics;

pub use metrics_exporter_prometheus::PrometheusHandle;

pub use self::logging::{LogFormat, init_tracing, logging_middleware};
pub use self::metrics::{
    init_metrics, metrics_middleware, track_login_failure, track_login_success,
    track_token_issued, track_token_rejected,
};

static OBSERVABILITY_ENABLED: OnceLock<bool> = OnceLock::new();

/// Check if observability is enabled via OBSERVABILITY_ENABLED env var
pub fn is_observability_enabled() -> bool {
    *OBSERVABILITY_ENABLED
        .get_or_init(|| parse_enabled(std::env::var("OBSERVABILITY_ENABLED").ok().as_deref()))
}

/// Enabled unless explicitly `false` or `0`.
fn parse_enabled(value: Option<&str>) -> bool {
    value
        .map(|v| !v.eq_ignore_ascii_case("false") && v != "0")
        .unwrap_or(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_enabled() {
        assert!(parse_enabled(None));
        assert!(parse_enabled(Some("true")));
        assert!(parse_enabled(Some("1")));
        assert!(!parse_enabled(Some("false")));
        assert!(!parse_enabled(Some("FALSE")));
        assert!(!parse_enabled(Some("0")));
    }
}
