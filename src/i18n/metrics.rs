//! Resolution metrics.
//!
//! Counts how each validation message was resolved: by an exact translation,
//! by the parameterized template, or not at all.

use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Counters for message resolution outcomes.
#[derive(Debug, Default)]
pub struct ResolutionMetrics {
    /// Messages translated by their literal text
    exact_hits: AtomicUsize,

    /// Messages translated through the `{0}` template
    parameterized_hits: AtomicUsize,

    /// Messages left in the source language
    misses: AtomicUsize,

    /// Lookups that failed in the backend
    lookup_failures: AtomicUsize,
}

impl ResolutionMetrics {
    /// Create a set of counters, all at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a message translated by its literal text.
    pub fn record_exact_hit(&self) {
        self.exact_hits.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a message translated through a `{0}` or generic template.
    pub fn record_parameterized_hit(&self) {
        self.parameterized_hits.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a message left in the source language.
    pub fn record_miss(&self) {
        self.misses.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a lookup the localization backend could not answer.
    pub fn record_lookup_failure(&self) {
        self.lookup_failures.fetch_add(1, Ordering::Relaxed);
    }

    /// Get the current exact-hit count.
    pub fn exact_hits(&self) -> usize {
        self.exact_hits.load(Ordering::Relaxed)
    }

    /// Get the current parameterized-hit count.
    pub fn parameterized_hits(&self) -> usize {
        self.parameterized_hits.load(Ordering::Relaxed)
    }

    /// Get the current miss count.
    pub fn misses(&self) -> usize {
        self.misses.load(Ordering::Relaxed)
    }

    /// Get the current lookup-failure count.
    pub fn lookup_failures(&self) -> usize {
        self.lookup_failures.load(Ordering::Relaxed)
    }

    /// Generate a metrics report.
    pub fn report(&self) -> MetricsReport {
        let exact = self.exact_hits();
        let parameterized = self.parameterized_hits();
        let misses = self.misses();
        let failures = self.lookup_failures();

        let total = exact + parameterized + misses + failures;
        let hit_rate = if total > 0 {
            ((exact + parameterized) as f64 / total as f64) * 100.0
        } else {
            0.0
        };

        MetricsReport {
            exact_hits: exact,
            parameterized_hits: parameterized,
            misses,
            lookup_failures: failures,
            hit_rate,
        }
    }

    /// Reset all counters to zero (useful for testing).
    #[cfg(test)]
    pub fn reset(&self) {
        self.exact_hits.store(0, Ordering::Relaxed);
        self.parameterized_hits.store(0, Ordering::Relaxed);
        self.misses.store(0, Ordering::Relaxed);
        self.lookup_failures.store(0, Ordering::Relaxed);
    }
}

/// Snapshot of resolution counters.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsReport {
    /// Number of exact-text translations
    pub exact_hits: usize,

    /// Number of translations through a template
    pub parameterized_hits: usize,

    /// Number of messages left untranslated
    pub misses: usize,

    /// Number of failed backend lookups
    pub lookup_failures: usize,

    /// Share of resolutions that found a translation, as a percentage (0-100)
    pub hit_rate: f64,
}
