//! Translation metrics and observability module.
//!
//! Tracks how string lookups resolve (localized, canonical fallback, or
//! literal key) and how many simulated message translations ran.

use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::OnceLock;

/// Global translation metrics singleton.
pub struct TranslationMetrics {
    /// Total `translate` lookups served
    lookups: AtomicUsize,

    /// Lookups that fell back to the canonical (English) table
    canonical_fallbacks: AtomicUsize,

    /// Lookups that resolved to the literal key (unknown key)
    literal_fallbacks: AtomicUsize,

    /// Simulated message translations performed by the messenger
    simulated_translations: AtomicUsize,
}

/// Global metrics instance (initialized lazily)
static METRICS: OnceLock<TranslationMetrics> = OnceLock::new();

impl TranslationMetrics {
    /// Get the global translation metrics instance.
    pub fn global() -> &'static TranslationMetrics {
        METRICS.get_or_init(|| TranslationMetrics {
            lookups: AtomicUsize::new(0),
            canonical_fallbacks: AtomicUsize::new(0),
            literal_fallbacks: AtomicUsize::new(0),
            simulated_translations: AtomicUsize::new(0),
        })
    }

    /// Record a served lookup.
    pub fn record_lookup(&self) {
        self.lookups.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a lookup that resolved through the canonical table.
    pub fn record_canonical_fallback(&self) {
        self.canonical_fallbacks.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a lookup that resolved to the literal key.
    pub fn record_literal_fallback(&self) {
        self.literal_fallbacks.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a simulated message translation.
    pub fn record_simulated_translation(&self) {
        self.simulated_translations.fetch_add(1, Ordering::Relaxed);
    }

    /// Get the current lookup count.
    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::Relaxed)
    }

    /// Get the current canonical-fallback count.
    pub fn canonical_fallbacks(&self) -> usize {
        self.canonical_fallbacks.load(Ordering::Relaxed)
    }

    /// Get the current literal-fallback count.
    pub fn literal_fallbacks(&self) -> usize {
        self.literal_fallbacks.load(Ordering::Relaxed)
    }

    /// Get the current simulated-translation count.
    pub fn simulated_translations(&self) -> usize {
        self.simulated_translations.load(Ordering::Relaxed)
    }

    /// Generate a metrics report.
    pub fn report(&self) -> MetricsReport {
        let lookups = self.lookups();
        let canonical = self.canonical_fallbacks();
        let literal = self.literal_fallbacks();
        let localized_rate = if lookups > 0 {
            ((lookups - canonical - literal) as f64 / lookups as f64) * 100.0
        } else {
            0.0
        };

        MetricsReport {
            lookups,
            canonical_fallbacks: canonical,
            literal_fallbacks: literal,
            localized_rate,
            simulated_translations: self.simulated_translations(),
        }
    }

    /// Reset all metrics to zero (useful for testing).
    #[cfg(test)]
    pub fn reset(&self) {
        self.lookups.store(0, Ordering::Relaxed);
        self.canonical_fallbacks.store(0, Ordering::Relaxed);
        self.literal_fallbacks.store(0, Ordering::Relaxed);
        self.simulated_translations.store(0, Ordering::Relaxed);
    }
}

/// Metrics report containing current translation statistics.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsReport {
    /// Total lookups served
    pub lookups: usize,

    /// Lookups that fell back to the canonical table
    pub canonical_fallbacks: usize,

    /// Lookups that resolved to the literal key
    pub literal_fallbacks: usize,

    /// Share of lookups answered from the requested language's own table,
    /// as a percentage (0-100)
    pub localized_rate: f64,

    /// Simulated message translations performed
    pub simulated_translations: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    // Helper to reset metrics before each test
    fn reset_metrics() {
        TranslationMetrics::global().reset();
    }

    // ==================== Counter Tests ====================

    #[test]
    #[serial]
    fn test_record_lookup() {
        reset_metrics();
        let metrics = TranslationMetrics::global();

        assert_eq!(metrics.lookups(), 0);
        metrics.record_lookup();
        assert_eq!(metrics.lookups(), 1);
        metrics.record_lookup();
        assert_eq!(metrics.lookups(), 2);
    }

    #[test]
    #[serial]
    fn test_record_fallbacks() {
        reset_metrics();
        let metrics = TranslationMetrics::global();

        metrics.record_canonical_fallback();
        metrics.record_literal_fallback();
        assert_eq!(metrics.canonical_fallbacks(), 1);
        assert_eq!(metrics.literal_fallbacks(), 1);
    }

    #[test]
    #[serial]
    fn test_record_simulated_translation() {
        reset_metrics();
        let metrics = TranslationMetrics::global();

        assert_eq!(metrics.simulated_translations(), 0);
        metrics.record_simulated_translation();
        assert_eq!(metrics.simulated_translations(), 1);
    }

    // ==================== Report Tests ====================

    #[test]
    #[serial]
    fn test_report_empty() {
        reset_metrics();
        let report = TranslationMetrics::global().report();

        assert_eq!(report.lookups, 0);
        assert_eq!(report.canonical_fallbacks, 0);
        assert_eq!(report.literal_fallbacks, 0);
        assert_eq!(report.localized_rate, 0.0);
        assert_eq!(report.simulated_translations, 0);
    }

    #[test]
    #[serial]
    fn test_report_localized_rate() {
        reset_metrics();
        let metrics = TranslationMetrics::global();

        // 3 localized, 1 canonical fallback = 75% localized
        metrics.record_lookup();
        metrics.record_lookup();
        metrics.record_lookup();
        metrics.record_lookup();
        metrics.record_canonical_fallback();

        let report = metrics.report();
        assert_eq!(report.lookups, 4);
        assert_eq!(report.canonical_fallbacks, 1);
        assert_eq!(report.localized_rate, 75.0);
    }

    #[test]
    #[serial]
    fn test_report_serializes() {
        reset_metrics();
        let report = TranslationMetrics::global().report();
        let json = serde_json::to_string(&report).expect("Should serialize");
        assert!(json.contains("localized_rate"));
    }

    // ==================== Singleton Tests ====================

    #[test]
    fn test_global_returns_same_instance() {
        let metrics1 = TranslationMetrics::global();
        let metrics2 = TranslationMetrics::global();

        // Should return the same instance (same memory address)
        assert!(std::ptr::eq(metrics1, metrics2));
    }

    #[test]
    #[serial]
    fn test_metrics_persist_across_calls() {
        let metrics1 = TranslationMetrics::global();
        let initial = metrics1.lookups();
        metrics1.record_lookup();

        let metrics2 = TranslationMetrics::global();
        assert_eq!(metrics2.lookups(), initial + 1);
    }
}
