//! Metrics collection and exposition.
//!
//! # Responsibilities
//! - Define route loading metrics
//! - Expose Prometheus-compatible metrics endpoint
//!
//! # Metrics
//! - `route_modules_mounted_total` (counter): route files mounted
//! - `route_modules_invalid_total` (counter): route files skipped as invalid
//! - `route_load_duration_seconds` (histogram): wall time of one load
//!
//! # Design Decisions
//! - Recording is a no-op until a recorder is installed, so library users
//!   and tests pay nothing

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

/// Install the Prometheus recorder and its HTTP scrape endpoint.
///
/// Must be called from within a Tokio runtime.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics endpoint listening");
    Ok(())
}

pub fn record_route_mounted() {
    metrics::counter!("route_modules_mounted_total").increment(1);
}

pub fn record_invalid_module() {
    metrics::counter!("route_modules_invalid_total").increment(1);
}

pub fn record_load_duration(start: Instant) {
    metrics::histogram!("route_load_duration_seconds").record(start.elapsed().as_secs_f64());
}
