//! Default tunables and the cube corner layout.
//!
//! # Cube Corner Layout
//!
//! The triangle table is indexed by this enumeration, so it must never change.
//! Bottom face (min Z) counter-clockwise from the min corner, then the top face
//! (max Z) in the same pattern, offset by 4.
//!
//! ```text
//!        5──────6          Corners (unit cube):
//!       /│     /│            0=(0,0,0)  1=(0,1,0)  2=(1,1,0)  3=(1,0,0)
//!      1─┼────2 │            4=(0,0,1)  5=(0,1,1)  6=(1,1,1)  7=(1,0,1)
//!      │ 4────┼─7
//!      │/     │/           +Y
//!      0──────3             │  +Z
//!                           │ /
//!                           └───+X
//! ```

use glam::{UVec3, Vec3};

/// Default grid cell side length in world units.
pub const DEFAULT_CELL_SIZE: f32 = 0.15;

/// Default finite-difference step for normal estimation.
pub const DEFAULT_NORMAL_EPSILON: f32 = 0.01;

/// Default metaball radius shared by all sources.
pub const DEFAULT_RADIUS: f32 = 1.0;

/// Default border margin, as a multiple of the radius.
pub const DEFAULT_BORDER_MARGIN: f32 = 2.0;

/// Number of corners per cube.
pub const CORNER_COUNT: usize = 8;

/// Number of edges per cube.
pub const EDGE_COUNT: usize = 12;

/// Largest number of triangles a single cube can emit.
pub const MAX_CUBE_TRIANGLES: usize = 5;

/// Unit-cube offsets of the 8 corners, in table order.
pub const CORNER_OFFSETS: [Vec3; CORNER_COUNT] = [
  Vec3::new(0.0, 0.0, 0.0), // 0: (minX, minY, minZ)
  Vec3::new(0.0, 1.0, 0.0), // 1: (minX, maxY, minZ)
  Vec3::new(1.0, 1.0, 0.0), // 2: (maxX, maxY, minZ)
  Vec3::new(1.0, 0.0, 0.0), // 3: (maxX, minY, minZ)
  Vec3::new(0.0, 0.0, 1.0), // 4: (minX, minY, maxZ)
  Vec3::new(0.0, 1.0, 1.0), // 5: (minX, maxY, maxZ)
  Vec3::new(1.0, 1.0, 1.0), // 6: (maxX, maxY, maxZ)
  Vec3::new(1.0, 0.0, 1.0), // 7: (maxX, minY, maxZ)
];

/// World-space corner positions of the cube with origin `min` and side `size`.
#[inline]
pub fn cube_corners(min: Vec3, size: f32) -> [Vec3; CORNER_COUNT] {
  std::array::from_fn(|i| min + CORNER_OFFSETS[i] * size)
}

/// Corner positions of grid cell `cell` in a lattice anchored at `min`.
///
/// Each coordinate is `min + (index + offset) * size`, so neighbouring cells
/// produce bit-identical positions for the corners they share.
#[inline]
pub fn lattice_corners(min: Vec3, cell: UVec3, size: f32) -> [Vec3; CORNER_COUNT] {
  let base = cell.as_vec3();
  std::array::from_fn(|i| min + (base + CORNER_OFFSETS[i]) * size)
}

#[cfg(test)]
#[path = "constants_test.rs"]
mod constants_test;
