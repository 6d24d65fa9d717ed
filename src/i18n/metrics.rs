//! Lookup metrics for a language manager.
//!
//! Counters are atomics so they can be recorded through `&self` from
//! `LanguageManager::translate`. Each manager owns its own instance.

use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Counters for translation lookups.
#[derive(Debug, Default)]
pub struct LookupMetrics {
    /// Number of `translate` calls
    lookups: AtomicUsize,

    /// Number of lookups for keys absent from the table
    unknown_keys: AtomicUsize,

    /// Number of lookups retried against the fallback language
    fallback_retries: AtomicUsize,

    /// Number of lookups that ended up displaying the bare key
    key_fallbacks: AtomicUsize,
}

impl LookupMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a `translate` call.
    pub fn record_lookup(&self) {
        self.lookups.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a lookup for a key that is not in the table.
    pub fn record_unknown_key(&self) {
        self.unknown_keys.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a retry against the fallback language.
    pub fn record_fallback_retry(&self) {
        self.fallback_retries.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a lookup that returned the key as display text.
    pub fn record_key_fallback(&self) {
        self.key_fallbacks.fetch_add(1, Ordering::Relaxed);
    }

    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::Relaxed)
    }

    pub fn unknown_keys(&self) -> usize {
        self.unknown_keys.load(Ordering::Relaxed)
    }

    pub fn fallback_retries(&self) -> usize {
        self.fallback_retries.load(Ordering::Relaxed)
    }

    pub fn key_fallbacks(&self) -> usize {
        self.key_fallbacks.load(Ordering::Relaxed)
    }

    /// Generate a metrics report.
    pub fn report(&self) -> MetricsReport {
        let lookups = self.lookups();
        let key_fallbacks = self.key_fallbacks();
        let resolved_rate = if lookups > 0 {
            ((lookups - key_fallbacks.min(lookups)) as f64 / lookups as f64) * 100.0
        } else {
            0.0
        };

        MetricsReport {
            lookups,
            unknown_keys: self.unknown_keys(),
            fallback_retries: self.fallback_retries(),
            key_fallbacks,
            resolved_rate,
        }
    }
}

/// Metrics report containing current lookup statistics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricsReport {
    /// Number of `translate` calls
    pub lookups: usize,

    /// Number of lookups for unknown keys
    pub unknown_keys: usize,

    /// Number of retries against the fallback language
    pub fallback_retries: usize,

    /// Number of lookups that displayed the bare key
    pub key_fallbacks: usize,

    /// Share of lookups that produced a real string, as a percentage (0-100)
    pub resolved_rate: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Counter Tests ====================

    #[test]
    fn test_record_lookup() {
        let metrics = LookupMetrics::new();

        assert_eq!(metrics.lookups(), 0);
        metrics.record_lookup();
        assert_eq!(metrics.lookups(), 1);
        metrics.record_lookup();
        assert_eq!(metrics.lookups(), 2);
    }

    #[test]
    fn test_record_unknown_key() {
        let metrics = LookupMetrics::new();
        metrics.record_unknown_key();
        assert_eq!(metrics.unknown_keys(), 1);
    }

    #[test]
    fn test_record_fallback_retry() {
        let metrics = LookupMetrics::new();
        metrics.record_fallback_retry();
        assert_eq!(metrics.fallback_retries(), 1);
    }

    #[test]
    fn test_record_key_fallback() {
        let metrics = LookupMetrics::new();
        metrics.record_key_fallback();
        assert_eq!(metrics.key_fallbacks(), 1);
    }

    // ==================== Report Tests ====================

    #[test]
    fn test_report_empty() {
        let report = LookupMetrics::new().report();

        assert_eq!(report.lookups, 0);
        assert_eq!(report.unknown_keys, 0);
        assert_eq!(report.fallback_retries, 0);
        assert_eq!(report.key_fallbacks, 0);
        assert_eq!(report.resolved_rate, 0.0);
    }

    #[test]
    fn test_report_resolved_rate() {
        let metrics = LookupMetrics::new();

        // 4 lookups, 1 shown as bare key = 75% resolved
        for _ in 0..4 {
            metrics.record_lookup();
        }
        metrics.record_key_fallback();

        let report = metrics.report();
        assert_eq!(report.lookups, 4);
        assert_eq!(report.key_fallbacks, 1);
        assert_eq!(report.resolved_rate, 75.0);
    }

    #[test]
    fn test_report_100_percent_resolved() {
        let metrics = LookupMetrics::new();
        metrics.record_lookup();
        metrics.record_lookup();
        assert_eq!(metrics.report().resolved_rate, 100.0);
    }

    #[test]
    fn test_instances_are_independent() {
        let first = LookupMetrics::new();
        let second = LookupMetrics::new();
        first.record_lookup();
        assert_eq!(first.lookups(), 1);
        assert_eq!(second.lookups(), 0);
    }

    #[test]
    fn test_report_serializes() {
        let metrics = LookupMetrics::new();
        metrics.record_lookup();
        let json = serde_json::to_value(metrics.report()).expect("Should serialize");
        assert_eq!(json["lookups"], 1);
        assert_eq!(json["resolved_rate"], 100.0);
    }
}
