//! Host-driven lifecycle: one extraction per frame.
//!
//! ```text
//! initialize()            advance(dt)              advance(dt) ...
//!     │                       │
//!     ▼                       ▼
//!  provider ──positions──► ScalarField::update_from
//!                             │
//!                             ▼
//!                      SurfaceExtractor::extract
//!                             │
//!                             ▼
//!                  SurfacePresenter::present(frame, soup)
//! ```

use web_time::Instant;

use crate::error::ConfigError;
use crate::field::ScalarField;
use crate::marching_cubes::{SurfaceExtractor, SweepStats};
use crate::metrics::SweepMetrics;
use crate::presentation::SurfacePresenter;
use crate::provider::SourceProvider;
use crate::types::{FieldConfig, MesherConfig, TriangleSoup};

/// Wires a source provider, the field, the extractor and a presenter.
pub struct MetaballScene<P, S> {
  provider: P,
  presenter: S,
  field: ScalarField,
  extractor: SurfaceExtractor,
  frame: u64,
  metrics: SweepMetrics,
}

impl<P: SourceProvider, S: SurfacePresenter> MetaballScene<P, S> {
  pub fn new(
    provider: P,
    presenter: S,
    field_config: &FieldConfig,
    mesher_config: MesherConfig,
  ) -> Result<Self, ConfigError> {
    Ok(Self {
      provider,
      presenter,
      field: ScalarField::from_config(field_config)?,
      extractor: SurfaceExtractor::new(mesher_config)?,
      frame: 0,
      metrics: SweepMetrics::new(),
    })
  }

  /// Capture the provider's starting positions and present frame 0.
  pub fn initialize(&mut self) -> &TriangleSoup {
    self.frame = 0;
    self.run_cycle()
  }

  /// Step the provider by `dt` seconds, re-extract and present.
  pub fn advance(&mut self, dt: f32) -> &TriangleSoup {
    self.provider.advance(dt);
    self.frame += 1;
    self.run_cycle()
  }

  fn run_cycle(&mut self) -> &TriangleSoup {
    #[cfg(feature = "tracing")]
    let _span = tracing::info_span!("metaball::cycle", frame = self.frame).entered();

    self.field.update_from(&self.provider);

    let start = Instant::now();
    self.extractor.extract(&self.field);
    let timing_us = start.elapsed().as_micros() as u64;

    let stats = self.extractor.last_stats();
    self.metrics.record_sweep(timing_us, &stats);
    self
      .presenter
      .present(self.frame, self.extractor.surface(), &stats);

    self.extractor.surface()
  }

  pub fn field(&self) -> &ScalarField {
    &self.field
  }

  /// Surface from the most recent cycle.
  pub fn surface(&self) -> &TriangleSoup {
    self.extractor.surface()
  }

  /// Frames advanced since [`initialize`](Self::initialize).
  pub fn frame(&self) -> u64 {
    self.frame
  }

  pub fn stats(&self) -> SweepStats {
    self.extractor.last_stats()
  }

  pub fn metrics(&self) -> &SweepMetrics {
    &self.metrics
  }

  pub fn provider(&self) -> &P {
    &self.provider
  }

  pub fn provider_mut(&mut self) -> &mut P {
    &mut self.provider
  }

  pub fn presenter(&self) -> &S {
    &self.presenter
  }

  pub fn presenter_mut(&mut self) -> &mut S {
    &mut self.presenter
  }
}

#[cfg(test)]
#[path = "scene_test.rs"]
mod scene_test;
