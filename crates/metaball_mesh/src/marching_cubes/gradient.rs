//! Normal passes.
//!
//! Gradient normals are sampled from the field during the sweep (see
//! [`IsoField::surface_normal`](crate::field::IsoField::surface_normal)).
//! Flat normals are derived afterwards from triangle geometry.

use glam::Vec3A;

use crate::types::TriangleSoup;

/// Unit normal of triangle `(p0, p1, p2)` under counter-clockwise winding.
///
/// Degenerate triangles fall back to +Y.
#[inline]
pub fn face_normal(p0: Vec3A, p1: Vec3A, p2: Vec3A) -> Vec3A {
  let normal = (p1 - p0).cross(p2 - p0);
  let len_sq = normal.length_squared();

  if len_sq < 1e-12 {
    return Vec3A::Y;
  }

  normal * len_sq.sqrt().recip()
}

/// Overwrite every normal with its triangle's face normal.
///
/// Soup vertices are never shared, so each triangle owns its three normals
/// and the result is faceted shading.
pub fn apply_flat_normals(soup: &mut TriangleSoup) {
  let positions = &soup.positions;
  let normals = &mut soup.normals;

  for tri in soup.indices.chunks_exact(3) {
    let [i0, i1, i2] = [tri[0] as usize, tri[1] as usize, tri[2] as usize];

    let p0 = Vec3A::from_array(positions[i0]);
    let p1 = Vec3A::from_array(positions[i1]);
    let p2 = Vec3A::from_array(positions[i2]);

    let normal = face_normal(p0, p1, p2).to_array();
    normals[i0] = normal;
    normals[i1] = normal;
    normals[i2] = normal;
  }
}

#[cfg(test)]
#[path = "gradient_test.rs"]
mod gradient_test;
