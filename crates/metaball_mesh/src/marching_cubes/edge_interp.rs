//! Edge crossing positions.
//!
//! Each of the 12 cube edges gets one slot. Edges whose endpoint samples have
//! strictly opposite signs hold the linear zero crossing; every other slot
//! holds the edge's first corner as a placeholder. The case table only ever
//! reads crossing slots.
//!
//! Crossings are always interpolated from the edge endpoint nearer the cube
//! origin. Two cubes sharing an edge then compute the same bits for it.

use glam::Vec3;

use crate::constants::{CORNER_OFFSETS, EDGE_COUNT};
use crate::edge_table::EDGE_CORNERS;

/// True when one sample is strictly positive and the other strictly negative.
#[inline]
pub fn strictly_crosses(a: f32, b: f32) -> bool {
  (a > 0.0 && b < 0.0) || (a < 0.0 && b > 0.0)
}

/// Position of the zero crossing between `pa` (value `fa`) and `pb` (value `fb`).
#[inline]
pub fn interpolate(pa: Vec3, pb: Vec3, fa: f32, fb: f32) -> Vec3 {
  let t = fa / (fa - fb);
  pa.lerp(pb, t)
}

/// Fill all 12 edge slots for one cube.
#[inline]
pub fn edge_vertices(corners: &[Vec3; 8], samples: &[f32; 8]) -> [Vec3; EDGE_COUNT] {
  std::array::from_fn(|edge| {
    let [a, b] = EDGE_CORNERS[edge];
    let (a, b) = (a as usize, b as usize);
    if !strictly_crosses(samples[a], samples[b]) {
      return corners[a];
    }

    let (lo, hi) = if CORNER_OFFSETS[a].element_sum() < CORNER_OFFSETS[b].element_sum() {
      (a, b)
    } else {
      (b, a)
    };
    interpolate(corners[lo], corners[hi], samples[lo], samples[hi])
  })
}

#[cfg(test)]
#[path = "edge_interp_test.rs"]
mod edge_interp_test;
