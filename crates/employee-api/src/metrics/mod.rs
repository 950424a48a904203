//! Prometheus metrics registry

pub mod middleware;

use prometheus::{
    Encoder, HistogramOpts, HistogramVec, IntCounter, IntCounterVec, IntGauge, Opts, Registry,
    TextEncoder,
};
use std::time::Instant;

/// Process-wide metrics, constructed once at startup and shared through
/// the application state. All primitives are safe for concurrent update.
pub struct Metrics {
    registry: Registry,
    pub http_requests_total: IntCounterVec,
    pub http_request_duration_seconds: HistogramVec,
    pub employees_created_total: IntCounter,
    pub employees_total: IntGauge,
}

impl Metrics {
    pub fn new() -> Result<Self, prometheus::Error> {
        let registry = Registry::new();

        let http_requests_total = IntCounterVec::new(
            Opts::new("http_requests_total", "Total number of HTTP requests"),
            &["method", "endpoint", "status"],
        )?;
        let http_request_duration_seconds = HistogramVec::new(
            HistogramOpts::new(
                "http_request_duration_seconds",
                "Duration of HTTP requests in seconds",
            ),
            &["method", "endpoint"],
        )?;
        let employees_created_total = IntCounter::new(
            "employees_created_total",
            "Total number of employees created",
        )?;
        let employees_total = IntGauge::new(
            "employees_total",
            "Total number of employees in database",
        )?;

        registry.register(Box::new(http_requests_total.clone()))?;
        registry.register(Box::new(http_request_duration_seconds.clone()))?;
        registry.register(Box::new(employees_created_total.clone()))?;
        registry.register(Box::new(employees_total.clone()))?;

        Ok(Self {
            registry,
            http_requests_total,
            http_request_duration_seconds,
            employees_created_total,
            employees_total,
        })
    }

    /// Record one completed request. `endpoint` is the literal request
    /// path, so distinct ids produce distinct series.
    pub fn record_request(&self, method: &str, endpoint: &str, status: u16, started: Instant) {
        self.http_requests_total
            .with_label_values(&[method, endpoint, &status.to_string()])
            .inc();
        self.http_request_duration_seconds
            .with_label_values(&[method, endpoint])
            .observe(started.elapsed().as_secs_f64());
    }

    /// Render the registry in the Prometheus text exposition format.
    pub fn render(&self) -> Result<String, prometheus::Error> {
        let metric_families = self.registry.gather();
        let mut buffer = Vec::new();
        TextEncoder::new().encode(&metric_families, &mut buffer)?;
        Ok(String::from_utf8_lossy(&buffer).into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_request_increments_counter() {
        let metrics = Metrics::new().unwrap();
        let started = Instant::now();
        metrics.record_request("GET", "/api/employees", 200, started);
        metrics.record_request("GET", "/api/employees", 200, started);
        metrics.record_request("POST", "/api/employees", 500, started);

        let counted = metrics
            .http_requests_total
            .with_label_values(&["GET", "/api/employees", "200"])
            .get();
        assert_eq!(counted, 2);

        let failed = metrics
            .http_requests_total
            .with_label_values(&["POST", "/api/employees", "500"])
            .get();
        assert_eq!(failed, 1);
    }

    #[test]
    fn test_gauge_tracks_latest_count() {
        let metrics = Metrics::new().unwrap();
        metrics.employees_total.set(7);
        metrics.employees_total.set(3);
        assert_eq!(metrics.employees_total.get(), 3);
    }

    #[test]
    fn test_render_contains_all_series() {
        let metrics = Metrics::new().unwrap();
        metrics.record_request("DELETE", "/api/employees/42", 204, Instant::now());
        metrics.employees_created_total.inc();
        metrics.employees_total.set(1);

        let body = metrics.render().unwrap();
        assert!(body.contains("http_requests_total"));
        assert!(body.contains("http_request_duration_seconds"));
        assert!(body.contains("employees_created_total 1"));
        assert!(body.contains("employees_total 1"));
        // Literal path, not a route template
        assert!(body.contains("endpoint=\"/api/employees/42\""));
    }
}
