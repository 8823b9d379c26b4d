use std::time::{Duration, Instant};

use passio_core::DEFAULT_REPORT_INTERVAL;

/// Options shared by the console and file consumers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateOptions {
    /// Stop after this many strings; `None` runs to exhaustion.
    pub max_count: Option<u64>,
    /// Status line refresh interval for file output, in written strings.
    pub report_interval: u64,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            max_count: None,
            report_interval: DEFAULT_REPORT_INTERVAL,
        }
    }
}

impl GenerateOptions {
    pub(crate) fn cap_reached(&self, produced: u64) -> bool {
        self.max_count.is_some_and(|cap| produced >= cap)
    }

    pub(crate) fn is_report_point(&self, produced: u64) -> bool {
        self.report_interval > 0 && produced > 0 && produced % self.report_interval == 0
    }
}

/// Running counters owned by a consumer for one invocation.
#[derive(Debug, Clone, Copy)]
pub struct RunStats {
    produced: u64,
    started: Instant,
}

impl RunStats {
    pub fn start() -> Self {
        Self {
            produced: 0,
            started: Instant::now(),
        }
    }

    pub fn record(&mut self) {
        self.produced += 1;
    }

    pub fn produced(&self) -> u64 {
        self.produced
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    /// Strings per second so far; 0 when no time has elapsed.
    pub fn rate(&self) -> f64 {
        rate(self.produced, self.elapsed())
    }
}

/// Why a consumer stopped without error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// Every candidate was written.
    Exhausted,
    /// The configured maximum count was reached first.
    CapReached,
}

/// Outcome of a completed consumer run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub produced: u64,
    pub elapsed: Duration,
    pub stop_reason: StopReason,
}

impl RunSummary {
    /// Average strings per second; 0 when no time has elapsed.
    pub fn rate(&self) -> f64 {
        rate(self.produced, self.elapsed)
    }
}

fn rate(count: u64, elapsed: Duration) -> f64 {
    let secs = elapsed.as_secs_f64();
    if secs > 0.0 { count as f64 / secs } else { 0.0 }
}
