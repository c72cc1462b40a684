//! Batch extraction of independent fields.
//!
//! Thin wrapper around [`SurfaceExtractor`] that:
//! - Processes fields in parallel via rayon
//! - Tracks timing per field
//! - Keeps results in input order
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │ Batch Extraction                                             │
//! │                                                              │
//! │  [field₀, field₁, ...]   (e.g. pre-baked animation frames)   │
//! │           │                                                  │
//! │           ▼  par_iter, one single-threaded sweep per field   │
//! │  ┌──────────────────────────────────────────────┐            │
//! │  │ SurfaceExtractor::extract(&field)            │            │
//! │  │ → TriangleSoup + SweepStats                  │            │
//! │  └──────────────────────────────────────────────┘            │
//! │           │                                                  │
//! │           ▼                                                  │
//! │  [BatchResult { surface, stats, timing_us }, ...]            │
//! └──────────────────────────────────────────────────────────────┘
//! ```

use rayon::prelude::*;
use web_time::Instant;

use crate::error::ConfigError;
use crate::field::IsoField;
use crate::marching_cubes::{SurfaceExtractor, SweepStats};
use crate::types::{MesherConfig, TriangleSoup};

/// Surface extracted from one batch entry.
#[derive(Clone, Debug)]
pub struct BatchResult {
  pub surface: TriangleSoup,
  pub stats: SweepStats,
  /// Wall time of the sweep in microseconds.
  pub timing_us: u64,
}

/// Extract a single field with timing.
fn extract_timed<F: IsoField + ?Sized>(field: &F, config: MesherConfig) -> BatchResult {
  let start = Instant::now();
  let mut extractor = SurfaceExtractor::from_validated(config);
  extractor.extract(field);
  let timing_us = start.elapsed().as_micros() as u64;

  let stats = extractor.last_stats();
  BatchResult {
    surface: extractor.into_surface(),
    stats,
    timing_us,
  }
}

/// Extract many independent fields in parallel using rayon.
///
/// Results maintain the same order as inputs for deterministic output.
#[cfg_attr(
  feature = "tracing",
  tracing::instrument(skip_all, name = "metaball::extract_batch", fields(count = inputs.len()))
)]
pub fn extract_batch<F: IsoField + Sync>(
  inputs: &[F],
  config: &MesherConfig,
) -> Result<Vec<BatchResult>, ConfigError> {
  config.validate()?;
  if inputs.is_empty() {
    return Ok(Vec::new());
  }

  let config = *config;
  Ok(
    inputs
      .par_iter()
      .map(|field| extract_timed(field, config))
      .collect(),
  )
}

#[cfg(test)]
#[path = "batch_test.rs"]
mod batch_test;
