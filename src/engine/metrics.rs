//! Scan metrics.
//!
//! A small struct used to observe what a single scan did and where the time
//! went. Metrics are opt-in: only the verbose API entry point collects them;
//! the plain iterator path does no timing at all.

use std::time::Duration;

/// Timing and counters for one verbose scan.
#[derive(Debug, Default, Clone)]
pub struct ScanMetrics {
    /// Total elapsed time for the scan, including the trigger check.
    pub total: Duration,
    /// Time spent in the trigger pre-scan.
    pub trigger: Duration,
    /// Time spent running the compiled matcher.
    pub matching: Duration,
    /// The trigger check rejected the input; the matcher never ran.
    pub gated_out: bool,
    /// Number of matches produced.
    pub matches: usize,
    /// Length of the input in bytes.
    pub input_bytes: usize,
}
