//! Metaball scalar field.
//!
//! Each source contributes an inverse-square potential scaled by the shared
//! radius:
//!
//! ```text
//! F(p) = r² · Σ 1 / |cᵢ − p|²  −  1
//! ```
//!
//! `F > 0` inside the blob, `F < 0` outside, and the surface is the zero
//! level set. A lone source yields a sphere of radius `r`.
//!
//! Sources are mutated by the host between cycles. Evaluation always reads a
//! [`FieldSnapshot`] captured by [`ScalarField::update`], so a sweep never
//! observes a half-updated source list.

use glam::Vec3;

use crate::constants::{DEFAULT_BORDER_MARGIN, DEFAULT_RADIUS};
use crate::error::ConfigError;
use crate::provider::SourceProvider;
use crate::types::FieldConfig;

/// Lower bound on squared distance to a source centre.
///
/// Sampling exactly at a centre would divide by zero; the clamp keeps the
/// potential finite (and huge) instead.
pub const MIN_DISTANCE_SQ: f32 = 1e-12;

/// Gradients shorter than this fall back to +Y.
const MIN_GRADIENT_LEN_SQ: f32 = 1e-12;

/// Axis-aligned region swept by the extractor.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FieldBorders {
  pub min: Vec3,
  pub max: Vec3,
}

impl FieldBorders {
  /// Inverted region containing no grid cells.
  pub const EMPTY: Self = Self {
    min: Vec3::INFINITY,
    max: Vec3::NEG_INFINITY,
  };

  pub fn new(min: Vec3, max: Vec3) -> Self {
    Self { min, max }
  }

  /// True when some axis has `min >= max`.
  pub fn is_empty(&self) -> bool {
    !self.min.cmplt(self.max).all()
  }

  pub fn size(&self) -> Vec3 {
    if self.is_empty() {
      Vec3::ZERO
    } else {
      self.max - self.min
    }
  }
}

/// Anything the extractor can polygonize.
pub trait IsoField {
  /// Field value at `point`; positive inside.
  fn value_at(&self, point: Vec3) -> f32;

  /// Region to sweep.
  fn borders(&self) -> FieldBorders;

  /// Unscaled central differences `F(p + ε·axis) − F(p − ε·axis)`.
  ///
  /// Points towards increasing `F`, i.e. into the blob.
  fn gradient(&self, point: Vec3, epsilon: f32) -> Vec3 {
    let dx = Vec3::X * epsilon;
    let dy = Vec3::Y * epsilon;
    let dz = Vec3::Z * epsilon;
    Vec3::new(
      self.value_at(point + dx) - self.value_at(point - dx),
      self.value_at(point + dy) - self.value_at(point - dy),
      self.value_at(point + dz) - self.value_at(point - dz),
    )
  }

  /// Unit normal pointing out of the blob (towards decreasing `F`).
  fn surface_normal(&self, point: Vec3, epsilon: f32) -> Vec3 {
    let outward = -self.gradient(point, epsilon);
    let len_sq = outward.length_squared();
    if len_sq.is_finite() && len_sq > MIN_GRADIENT_LEN_SQ {
      outward * len_sq.sqrt().recip()
    } else {
      Vec3::Y
    }
  }
}

/// Frozen source positions plus the parameters needed to evaluate `F`.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldSnapshot {
  centers: Vec<Vec3>,
  radius: f32,
  border_margin: f32,
}

impl Default for FieldSnapshot {
  fn default() -> Self {
    Self::new(Vec::new(), DEFAULT_RADIUS)
  }
}

impl FieldSnapshot {
  pub fn new(centers: Vec<Vec3>, radius: f32) -> Self {
    Self {
      centers,
      radius,
      border_margin: DEFAULT_BORDER_MARGIN,
    }
  }

  pub fn with_border_margin(mut self, margin: f32) -> Self {
    self.border_margin = margin;
    self
  }

  pub fn centers(&self) -> &[Vec3] {
    &self.centers
  }

  pub fn radius(&self) -> f32 {
    self.radius
  }

  pub fn border_margin(&self) -> f32 {
    self.border_margin
  }

  pub fn is_empty(&self) -> bool {
    self.centers.is_empty()
  }

  /// Overwrite the snapshot in place, reusing the centre allocation.
  fn capture(&mut self, centers: &[Vec3], radius: f32, border_margin: f32) {
    self.centers.clear();
    self.centers.extend_from_slice(centers);
    self.radius = radius;
    self.border_margin = border_margin;
  }
}

impl IsoField for FieldSnapshot {
  #[inline]
  fn value_at(&self, point: Vec3) -> f32 {
    let potential: f32 = self
      .centers
      .iter()
      .map(|&center| (center - point).length_squared().max(MIN_DISTANCE_SQ).recip())
      .sum();
    self.radius * self.radius * potential - 1.0
  }

  fn borders(&self) -> FieldBorders {
    if self.centers.is_empty() {
      return FieldBorders::EMPTY;
    }

    let (min, max) = self
      .centers
      .iter()
      .fold((Vec3::INFINITY, Vec3::NEG_INFINITY), |(min, max), &c| {
        (min.min(c), max.max(c))
      });
    let margin = Vec3::splat(self.border_margin * self.radius);
    FieldBorders::new(min - margin, max + margin)
  }
}

/// Live metaball sources plus the snapshot the extractor reads.
///
/// Edits through [`sources_mut`](Self::sources_mut) and friends only become
/// visible to [`IsoField`] queries after the next [`update`](Self::update).
#[derive(Clone, Debug)]
pub struct ScalarField {
  sources: Vec<Vec3>,
  radius: f32,
  border_margin: f32,
  snapshot: FieldSnapshot,
}

impl Default for ScalarField {
  fn default() -> Self {
    Self::new(DEFAULT_RADIUS)
  }
}

impl ScalarField {
  /// Empty field with the default border margin. The snapshot stays empty
  /// until the first [`update`](Self::update).
  pub fn new(radius: f32) -> Self {
    Self {
      sources: Vec::new(),
      radius,
      border_margin: DEFAULT_BORDER_MARGIN,
      snapshot: FieldSnapshot::new(Vec::new(), radius),
    }
  }

  /// Build from validated configuration.
  pub fn from_config(config: &FieldConfig) -> Result<Self, ConfigError> {
    config.validate()?;
    let mut field = Self::new(config.radius);
    field.border_margin = config.border_margin;
    field.snapshot.border_margin = config.border_margin;
    Ok(field)
  }

  pub fn with_sources(mut self, sources: impl IntoIterator<Item = Vec3>) -> Self {
    self.sources = sources.into_iter().collect();
    self
  }

  pub fn sources(&self) -> &[Vec3] {
    &self.sources
  }

  pub fn sources_mut(&mut self) -> &mut [Vec3] {
    &mut self.sources
  }

  pub fn set_sources(&mut self, sources: &[Vec3]) {
    self.sources.clear();
    self.sources.extend_from_slice(sources);
  }

  pub fn push_source(&mut self, center: Vec3) {
    self.sources.push(center);
  }

  /// Remove and return the source at `index`, shifting later ones down.
  pub fn remove_source(&mut self, index: usize) -> Option<Vec3> {
    (index < self.sources.len()).then(|| self.sources.remove(index))
  }

  pub fn clear_sources(&mut self) {
    self.sources.clear();
  }

  pub fn radius(&self) -> f32 {
    self.radius
  }

  /// Set the shared radius. Must be finite and positive; borders are
  /// expanded by a multiple of it.
  pub fn set_radius(&mut self, radius: f32) {
    debug_assert!(
      radius.is_finite() && radius > 0.0,
      "metaball radius must be finite and positive, got {radius}"
    );
    self.radius = radius;
  }

  pub fn border_margin(&self) -> f32 {
    self.border_margin
  }

  /// Capture the current sources into the snapshot.
  pub fn update(&mut self) {
    self
      .snapshot
      .capture(&self.sources, self.radius, self.border_margin);
  }

  /// Copy positions and radius from `provider`, then [`update`](Self::update).
  ///
  /// The provider's radius goes through [`set_radius`](Self::set_radius).
  pub fn update_from<P: SourceProvider + ?Sized>(&mut self, provider: &P) {
    self.set_sources(provider.positions());
    self.set_radius(provider.radius());
    self.update();
  }

  /// The snapshot captured by the last update.
  pub fn snapshot(&self) -> &FieldSnapshot {
    &self.snapshot
  }
}

impl IsoField for ScalarField {
  #[inline]
  fn value_at(&self, point: Vec3) -> f32 {
    self.snapshot.value_at(point)
  }

  fn borders(&self) -> FieldBorders {
    self.snapshot.borders()
  }
}

#[cfg(test)]
#[path = "field_test.rs"]
mod field_test;
