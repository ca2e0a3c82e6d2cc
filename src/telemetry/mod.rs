//! Telemetry for symptom-check
//!
//! In-process counters for submissions, shown by the REPL `/status` command.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Telemetry event types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TelemetryEvent {
    SubmissionStarted,
    SubmissionCompleted { duration_ms: u64, success: bool },
    SubmissionRejected,
}

/// Telemetry statistics
#[derive(Debug, Clone, Default)]
pub struct TelemetryStats {
    pub submissions: usize,
    pub successes: usize,
    pub failures: usize,
    pub rejected: usize,
    pub last_latency_ms: Option<u64>,
}

/// Telemetry collector
///
/// Clones share the same counters.
#[derive(Clone, Default)]
pub struct TelemetryCollector {
    stats: Arc<Mutex<TelemetryStats>>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl TelemetryCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold an event into the counters
    pub fn record(&self, event: TelemetryEvent) {
        let mut stats = lock(&self.stats);
        match event {
            TelemetryEvent::SubmissionStarted => stats.submissions += 1,
            TelemetryEvent::SubmissionCompleted { duration_ms, success } => {
                if success {
                    stats.successes += 1;
                } else {
                    stats.failures += 1;
                }
                stats.last_latency_ms = Some(duration_ms);
            }
            TelemetryEvent::SubmissionRejected => stats.rejected += 1,
        }
    }

    /// Get current statistics
    pub fn get_stats(&self) -> TelemetryStats {
        lock(&self.stats).clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collector_counts() {
        let telemetry = TelemetryCollector::new();
        telemetry.record(TelemetryEvent::SubmissionStarted);
        telemetry.record(TelemetryEvent::SubmissionCompleted {
            duration_ms: 120,
            success: true,
        });
        telemetry.record(TelemetryEvent::SubmissionRejected);

        let stats = telemetry.get_stats();
        assert_eq!(stats.submissions, 1);
        assert_eq!(stats.successes, 1);
        assert_eq!(stats.failures, 0);
        assert_eq!(stats.rejected, 1);
        assert_eq!(stats.last_latency_ms, Some(120));
    }

    #[test]
    fn test_latency_tracks_last_completion() {
        let telemetry = TelemetryCollector::new();
        for (duration_ms, success) in [(10, true), (40, false), (25, false)] {
            telemetry.record(TelemetryEvent::SubmissionCompleted { duration_ms, success });
        }
        let stats = telemetry.get_stats();
        assert_eq!(stats.successes, 1);
        assert_eq!(stats.failures, 2);
        assert_eq!(stats.last_latency_ms, Some(25));
    }

    #[test]
    fn test_clones_share_counters() {
        let telemetry = TelemetryCollector::new();
        let handle = telemetry.clone();
        handle.record(TelemetryEvent::SubmissionRejected);
        assert_eq!(telemetry.get_stats().rejected, 1);
    }
}
