//! Per-sweep timing and triangle counters.
//!
//! Recording is compiled in with the `metrics` feature and can be switched
//! off at runtime through [`COLLECT_METRICS`]; otherwise
//! [`SweepMetrics::record_sweep`] returns immediately.
//!
//! ```ignore
//! COLLECT_METRICS.store(false, Ordering::Relaxed);
//! metrics.record_sweep(timing_us, &stats);
//! ```

use std::collections::VecDeque;
use std::sync::atomic::AtomicBool;
#[cfg(feature = "metrics")]
use std::sync::atomic::Ordering;

use crate::marching_cubes::SweepStats;

/// Clear to stop [`SweepMetrics`] from recording without rebuilding.
pub static COLLECT_METRICS: AtomicBool = AtomicBool::new(true);

/// True when built with the `metrics` feature and [`COLLECT_METRICS`] is set.
#[inline]
pub fn is_enabled() -> bool {
  cfg!(feature = "metrics") && collect_flag()
}

#[cfg(feature = "metrics")]
#[inline]
fn collect_flag() -> bool {
  COLLECT_METRICS.load(Ordering::Relaxed)
}

#[cfg(not(feature = "metrics"))]
#[inline]
fn collect_flag() -> bool {
  false
}

/// Extraction times kept for the last `capacity` sweeps.
#[derive(Debug, Clone)]
pub struct RollingWindow<T> {
  samples: VecDeque<T>,
  capacity: usize,
}

impl<T> RollingWindow<T> {
  pub fn new(capacity: usize) -> Self {
    Self {
      samples: VecDeque::with_capacity(capacity),
      capacity,
    }
  }

  /// Append a sample, dropping the oldest once full.
  pub fn push(&mut self, sample: T) {
    if self.samples.len() == self.capacity {
      self.samples.pop_front();
    }
    if self.capacity > 0 {
      self.samples.push_back(sample);
    }
  }

  pub fn is_empty(&self) -> bool {
    self.samples.is_empty()
  }

  pub fn clear(&mut self) {
    self.samples.clear();
  }
}

impl RollingWindow<u64> {
  /// Mean of the held samples, 0 when empty.
  pub fn average(&self) -> f64 {
    match self.samples.len() {
      0 => 0.0,
      n => self.samples.iter().sum::<u64>() as f64 / n as f64,
    }
  }

  /// Fastest and slowest held samples.
  pub fn min_max(&self) -> Option<(u64, u64)> {
    self.samples.iter().fold(None, |range, &sample| match range {
      None => Some((sample, sample)),
      Some((lo, hi)) => Some((lo.min(sample), hi.max(sample))),
    })
  }
}

impl Default for RollingWindow<u64> {
  fn default() -> Self {
    // Two seconds of frames at 60 Hz
    Self::new(120)
  }
}

/// Extraction statistics accumulated across cycles.
#[derive(Debug, Clone, Default)]
pub struct SweepMetrics {
  /// Rolling window of extraction times in microseconds.
  pub extract_timings: RollingWindow<u64>,

  /// Last extraction time in microseconds.
  pub last_extract_us: u64,

  /// Counters from the last sweep.
  pub last_stats: SweepStats,

  /// Sweeps recorded this session.
  pub total_sweeps: u64,

  /// Triangles emitted this session.
  pub total_triangles: u64,
}

impl SweepMetrics {
  pub fn new() -> Self {
    Self::default()
  }

  /// Record one extraction.
  pub fn record_sweep(&mut self, timing_us: u64, stats: &SweepStats) {
    if !is_enabled() {
      return;
    }

    self.extract_timings.push(timing_us);
    self.last_extract_us = timing_us;
    self.last_stats = *stats;
    self.total_sweeps += 1;
    self.total_triangles += stats.triangles;
  }

  /// Reset everything except the session totals.
  pub fn reset(&mut self) {
    self.extract_timings.clear();
    self.last_extract_us = 0;
    self.last_stats = SweepStats::default();
  }

  /// Get average extraction timing in microseconds.
  pub fn avg_extract_timing_us(&self) -> f64 {
    self.extract_timings.average()
  }

  /// Approximate soup memory of the last sweep: 24 bytes per vertex
  /// (position + normal), 4 bytes per index.
  pub fn last_soup_bytes(&self) -> u64 {
    self.last_stats.triangles * 3 * (24 + 4)
  }
}
