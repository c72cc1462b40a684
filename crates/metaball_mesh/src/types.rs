//! Core data types for metaball surface extraction.

use glam::Vec3;

use crate::constants::{
  DEFAULT_BORDER_MARGIN, DEFAULT_CELL_SIZE, DEFAULT_NORMAL_EPSILON, DEFAULT_RADIUS,
};
use crate::error::{positive, ConfigError};

/// Normal computation mode for mesh generation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize), serde(rename_all = "snake_case"))]
pub enum NormalMode {
  /// Central-difference field gradient at every vertex (smooth shading).
  #[default]
  Gradient,

  /// Geometric face normal copied to the three vertices of each triangle
  /// (faceted shading).
  Flat,
}

/// Axis-aligned bounding box.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MinMaxAABB {
  pub min: [f32; 3],
  pub max: [f32; 3],
}

impl MinMaxAABB {
  /// Create AABB with inverted extents (ready for encapsulation).
  pub fn empty() -> Self {
    Self {
      min: [f32::INFINITY; 3],
      max: [f32::NEG_INFINITY; 3],
    }
  }

  /// Create AABB from min/max corners.
  pub fn new(min: [f32; 3], max: [f32; 3]) -> Self {
    Self { min, max }
  }

  /// Expand AABB to include a point.
  #[inline]
  pub fn encapsulate(&mut self, point: [f32; 3]) {
    for i in 0..3 {
      self.min[i] = self.min[i].min(point[i]);
      self.max[i] = self.max[i].max(point[i]);
    }
  }

  /// Check if AABB is valid (min <= max on all axes).
  pub fn is_valid(&self) -> bool {
    self.min[0] <= self.max[0] && self.min[1] <= self.max[1] && self.min[2] <= self.max[2]
  }
}

impl Default for MinMaxAABB {
  fn default() -> Self {
    Self::empty()
  }
}

/// Extraction result: an unshared triangle list.
///
/// Every triangle corner is its own vertex, so `positions`, `normals` and
/// `indices` always have the same length and `indices[i] == i`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TriangleSoup {
  /// Vertex positions in world space.
  pub positions: Vec<[f32; 3]>,

  /// Unit vertex normals (parallel to positions), pointing out of the surface.
  pub normals: Vec<[f32; 3]>,

  /// Triangle indices (3 indices per triangle).
  pub indices: Vec<u32>,

  /// Bounding box encompassing all vertices.
  pub bounds: MinMaxAABB,
}

impl TriangleSoup {
  pub fn new() -> Self {
    Self::default()
  }

  /// Clear all buffers, preserving capacity.
  pub fn clear(&mut self) {
    self.positions.clear();
    self.normals.clear();
    self.indices.clear();
    self.bounds = MinMaxAABB::empty();
  }

  /// Returns true if no geometry was generated.
  pub fn is_empty(&self) -> bool {
    self.positions.is_empty()
  }

  /// Number of vertices in the soup.
  pub fn vertex_count(&self) -> usize {
    self.positions.len()
  }

  /// Number of triangles in the soup.
  pub fn triangle_count(&self) -> usize {
    self.indices.len() / 3
  }

  /// Append one vertex and its index.
  #[inline]
  pub fn push_vertex(&mut self, position: Vec3, normal: Vec3) {
    let position = position.to_array();
    self.indices.push(self.positions.len() as u32);
    self.positions.push(position);
    self.normals.push(normal.to_array());
    self.bounds.encapsulate(position);
  }

  /// Iterate triangles as position triples.
  pub fn triangles(&self) -> impl Iterator<Item = [Vec3; 3]> + '_ {
    self
      .indices
      .chunks_exact(3)
      .map(|tri| [tri[0], tri[1], tri[2]].map(|i| Vec3::from_array(self.positions[i as usize])))
  }
}

/// Configuration for the marching cubes sweep.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize), serde(default))]
pub struct MesherConfig {
  /// Side length of a grid cell in world units.
  pub cell_size: f32,

  /// Finite-difference step for gradient normals.
  pub normal_epsilon: f32,

  /// Normal computation mode.
  pub normal_mode: NormalMode,
}

impl Default for MesherConfig {
  fn default() -> Self {
    Self {
      cell_size: DEFAULT_CELL_SIZE,
      normal_epsilon: DEFAULT_NORMAL_EPSILON,
      normal_mode: NormalMode::default(),
    }
  }
}

impl MesherConfig {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_cell_size(mut self, size: f32) -> Self {
    self.cell_size = size;
    self
  }

  pub fn with_normal_epsilon(mut self, epsilon: f32) -> Self {
    self.normal_epsilon = epsilon;
    self
  }

  pub fn with_normal_mode(mut self, mode: NormalMode) -> Self {
    self.normal_mode = mode;
    self
  }

  /// Reject parameters that would stall or poison the sweep.
  pub fn validate(&self) -> Result<(), ConfigError> {
    positive(self.cell_size, ConfigError::InvalidCellSize)?;
    positive(self.normal_epsilon, ConfigError::InvalidNormalEpsilon)?;
    Ok(())
  }
}

/// Configuration for the scalar field.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize), serde(default))]
pub struct FieldConfig {
  /// Radius shared by every source.
  pub radius: f32,

  /// Border expansion around the sources, as a multiple of the radius.
  pub border_margin: f32,
}

impl Default for FieldConfig {
  fn default() -> Self {
    Self {
      radius: DEFAULT_RADIUS,
      border_margin: DEFAULT_BORDER_MARGIN,
    }
  }
}

impl FieldConfig {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_radius(mut self, radius: f32) -> Self {
    self.radius = radius;
    self
  }

  pub fn with_border_margin(mut self, margin: f32) -> Self {
    self.border_margin = margin;
    self
  }

  pub fn validate(&self) -> Result<(), ConfigError> {
    positive(self.radius, ConfigError::InvalidRadius)?;
    if !(self.border_margin.is_finite() && self.border_margin >= 0.0) {
      return Err(ConfigError::InvalidBorderMargin(self.border_margin));
    }
    Ok(())
  }
}

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;
