//! Metrics collection and exposition.
//!
//! # Metrics
//! - `origin_lookups_total` (counter): lookups by result (hit, miss)
//! - `origin_map_reloads_total` (counter): reloads by result (ok, rejected)
//! - `origin_map_rules` (gauge): rules in the active RuleSet, defaults included

use std::net::SocketAddr;

use metrics_exporter_prometheus::PrometheusBuilder;

/// Install the Prometheus recorder and its HTTP listener.
///
/// Must run inside a tokio runtime.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics endpoint listening"),
        Err(e) => tracing::error!(
            address = %addr,
            error = %e,
            "Failed to install metrics exporter"
        ),
    }
}

pub fn record_lookup(hit: bool) {
    let result = if hit { "hit" } else { "miss" };
    ::metrics::counter!("origin_lookups_total", "result" => result).increment(1);
}

pub fn record_reload(ok: bool) {
    let result = if ok { "ok" } else { "rejected" };
    ::metrics::counter!("origin_map_reloads_total", "result" => result).increment(1);
}

pub fn record_rule_count(count: usize) {
    ::metrics::gauge!("origin_map_rules").set(count as f64);
}
