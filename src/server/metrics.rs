// src/server/metrics.rs
//! Server metrics tracking
//!
//! Simple atomic counters for request/response statistics, exposed via the
//! admin stats endpoint.

use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

/// Server metrics collector
#[derive(Default)]
pub struct ServerMetrics {
    /// Total requests handled by recipe endpoints
    requests_total: AtomicU64,
    /// Recipes returned (detail, download, label, fermentation)
    recipes_served: AtomicU64,
    /// Lookups of slugs with no recipe
    not_found: AtomicU64,
    /// Recipes saved through the admin API
    recipes_written: AtomicU64,
    /// Files written by imports
    files_imported: AtomicU64,
    /// Exports rendered without saving
    exports: AtomicU64,
    /// Filesystem or task failures
    errors: AtomicU64,
    /// Server start time
    start_time: std::sync::OnceLock<Instant>,
}

impl ServerMetrics {
    /// Create new metrics collector
    pub fn new() -> Self {
        let metrics = Self::default();
        let _ = metrics.start_time.set(Instant::now());
        metrics
    }

    pub fn record_request(&self) {
        self.requests_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_served(&self) {
        self.recipes_served.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_not_found(&self) {
        self.not_found.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_written(&self) {
        self.recipes_written.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_imported(&self, files: u64) {
        self.files_imported.fetch_add(files, Ordering::Relaxed);
    }

    pub fn record_export(&self) {
        self.exports.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_error(&self) {
        self.errors.fetch_add(1, Ordering::Relaxed);
    }

    /// Get a snapshot of current metrics
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            requests_total: self.requests_total.load(Ordering::Relaxed),
            recipes_served: self.recipes_served.load(Ordering::Relaxed),
            not_found: self.not_found.load(Ordering::Relaxed),
            recipes_written: self.recipes_written.load(Ordering::Relaxed),
            files_imported: self.files_imported.load(Ordering::Relaxed),
            exports: self.exports.load(Ordering::Relaxed),
            errors: self.errors.load(Ordering::Relaxed),
            uptime_secs: self
                .start_time
                .get()
                .map(|t| t.elapsed().as_secs())
                .unwrap_or(0),
        }
    }
}

/// Snapshot of metrics for serialization
#[derive(Debug, Clone, Serialize)]
pub struct MetricsSnapshot {
    pub requests_total: u64,
    pub recipes_served: u64,
    pub not_found: u64,
    pub recipes_written: u64,
    pub files_imported: u64,
    pub exports: u64,
    pub errors: u64,
    pub uptime_secs: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters() {
        let metrics = ServerMetrics::new();
        metrics.record_request();
        metrics.record_request();
        metrics.record_served();
        metrics.record_not_found();
        metrics.record_imported(3);

        let snapshot = metrics.snapshot();
        assert_eq!(snapshot.requests_total, 2);
        assert_eq!(snapshot.recipes_served, 1);
        assert_eq!(snapshot.not_found, 1);
        assert_eq!(snapshot.files_imported, 3);
        assert_eq!(snapshot.recipes_written, 0);
    }
}
