//! Marching cubes surface extraction.
//!
//! Sweeps a uniform grid over the field borders and emits a triangle soup
//! approximating the zero level set. Vertices are never shared: every
//! triangle corner is a fresh vertex placed on a cube edge.
//!
//! # Processing Pipeline
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                        INPUT                                    │
//! │  field: impl IsoField    - value_at(p), borders()               │
//! │  config: MesherConfig    - cell size, normal step, normal mode  │
//! └─────────────────────────────────────────────────────────────────┘
//!                               │
//!                               ▼
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    PASS 1: Sweep                                │
//! │  For each cell index k with min + k·h < max (x outer, z inner): │
//! │    Sample F at the 8 corners                                    │
//! │    Build 8-bit corner mask (bit set iff F > 0)                  │
//! │    Early-out if homogeneous (mask == 0 or mask == 255)          │
//! │    Fill 12 edge slots (crossing or placeholder corner)          │
//! │    Gradient mode: sample a normal for every slot                │
//! │    Emit table triangles as 3 fresh vertices each                │
//! └─────────────────────────────────────────────────────────────────┘
//!                               │
//!                               ▼
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    PASS 2: Normals                              │
//! │  Gradient: already done during the sweep                        │
//! │  Flat: face normal copied to each triangle's vertices           │
//! └─────────────────────────────────────────────────────────────────┘
//!                               │
//!                               ▼
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                        OUTPUT                                   │
//! │  positions / normals / indices   - index-aligned soup           │
//! │  bounds                          - AABB of emitted vertices     │
//! │  SweepStats                      - visited, active, triangles   │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Triangles are wound counter-clockwise when viewed from outside the blob.

mod corner_mask;
mod edge_interp;
mod gradient;

pub use corner_mask::is_homogeneous;
pub use edge_interp::strictly_crosses;
pub use gradient::face_normal;

use glam::{UVec3, Vec3};

use crate::constants::lattice_corners;
use crate::error::ConfigError;
use crate::field::{FieldBorders, IsoField};
use crate::tri_table::case_triangles;
use crate::types::{MesherConfig, NormalMode, TriangleSoup};

/// Counters from one sweep.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SweepStats {
  /// Grid cells classified.
  pub cells_visited: u64,

  /// Cells with a mixed corner mask.
  pub active_cells: u64,

  /// Triangles appended to the soup.
  pub triangles: u64,
}

/// Cell indices along one axis: every `k` with `min + k·h < max`.
///
/// Empty when `min >= max` or either bound is NaN.
pub fn axis_cells(min: f32, max: f32, cell_size: f32) -> impl Iterator<Item = u32> {
  (0u32..).take_while(move |&k| min + k as f32 * cell_size < max)
}

/// Number of cells the sweep visits along one axis.
pub fn axis_cell_count(min: f32, max: f32, cell_size: f32) -> usize {
  if !is_valid_cell_size(cell_size) {
    return 0;
  }
  axis_cells(min, max, cell_size).count()
}

#[inline]
fn is_valid_cell_size(cell_size: f32) -> bool {
  cell_size.is_finite() && cell_size > 0.0
}

/// Marching cubes extractor with reusable output buffers.
///
/// Each [`extract`](Self::extract) clears the previous soup (keeping its
/// capacity) and returns a borrow of the new one.
#[derive(Clone, Debug, Default)]
pub struct SurfaceExtractor {
  config: MesherConfig,
  soup: TriangleSoup,
  stats: SweepStats,
}

impl SurfaceExtractor {
  pub fn new(config: MesherConfig) -> Result<Self, ConfigError> {
    config.validate()?;
    Ok(Self::from_validated(config))
  }

  pub(crate) fn from_validated(config: MesherConfig) -> Self {
    Self {
      config,
      soup: TriangleSoup::new(),
      stats: SweepStats::default(),
    }
  }

  pub fn config(&self) -> &MesherConfig {
    &self.config
  }

  /// Surface produced by the last extraction.
  pub fn surface(&self) -> &TriangleSoup {
    &self.soup
  }

  /// Counters from the last extraction.
  pub fn last_stats(&self) -> SweepStats {
    self.stats
  }

  pub fn into_surface(self) -> TriangleSoup {
    self.soup
  }

  /// Polygonize `field` over its borders.
  #[cfg_attr(
    feature = "tracing",
    tracing::instrument(skip_all, name = "metaball::extract")
  )]
  pub fn extract<F: IsoField + ?Sized>(&mut self, field: &F) -> &TriangleSoup {
    self.soup.clear();

    let borders = field.borders();
    #[cfg(feature = "tracing")]
    tracing::debug!(min = ?borders.min, max = ?borders.max, "field borders");

    self.stats = sweep(field, borders, &self.config, &mut self.soup);

    if self.config.normal_mode == NormalMode::Flat {
      #[cfg(feature = "tracing")]
      let _span = tracing::info_span!("metaball::flat_normals").entered();
      gradient::apply_flat_normals(&mut self.soup);
    }

    &self.soup
  }
}

/// One-shot extraction into a fresh soup.
pub fn extract<F: IsoField + ?Sized>(
  field: &F,
  config: &MesherConfig,
) -> Result<TriangleSoup, ConfigError> {
  let mut extractor = SurfaceExtractor::new(*config)?;
  extractor.extract(field);
  Ok(extractor.into_surface())
}

/// Pass 1: classify every cell and append its triangles.
fn sweep<F: IsoField + ?Sized>(
  field: &F,
  borders: FieldBorders,
  config: &MesherConfig,
  soup: &mut TriangleSoup,
) -> SweepStats {
  let mut stats = SweepStats::default();
  let h = config.cell_size;
  if !is_valid_cell_size(h) {
    return stats;
  }

  let (min, max) = (borders.min, borders.max);
  for x in axis_cells(min.x, max.x, h) {
    for y in axis_cells(min.y, max.y, h) {
      for z in axis_cells(min.z, max.z, h) {
        stats.cells_visited += 1;
        let corners = lattice_corners(min, UVec3::new(x, y, z), h);
        if let Some(triangles) = process_cube(field, &corners, config, soup) {
          stats.active_cells += 1;
          stats.triangles += triangles as u64;
        }
      }
    }
  }

  stats
}

/// Classify one cube and emit its triangles.
///
/// Returns `None` for homogeneous cubes, otherwise the triangle count.
#[inline]
fn process_cube<F: IsoField + ?Sized>(
  field: &F,
  corners: &[Vec3; 8],
  config: &MesherConfig,
  soup: &mut TriangleSoup,
) -> Option<usize> {
  let samples: [f32; 8] = corners.map(|corner| field.value_at(corner));

  let mask = corner_mask::build(&samples);
  if is_homogeneous(mask) {
    return None;
  }

  let vertices = edge_interp::edge_vertices(corners, &samples);
  let normals = match config.normal_mode {
    NormalMode::Gradient => vertices.map(|v| field.surface_normal(v, config.normal_epsilon)),
    // Filled by the flat normal pass
    NormalMode::Flat => [Vec3::Y; 12],
  };

  let mut count = 0;
  for triangle in case_triangles(mask) {
    for edge in triangle {
      let slot = edge as usize;
      soup.push_vertex(vertices[slot], normals[slot]);
    }
    count += 1;
  }

  Some(count)
}
