//! Corner mask computation using glam SIMD.
//!
//! The corner mask is an 8-bit value where each bit indicates whether a corner
//! of the cube is inside the blob (strictly positive field value).

use glam::Vec4;

/// Build corner mask from 8 field samples.
///
/// Bit `i` corresponds to corner `i` of the cube enumeration and is set when
/// `samples[i] > 0`. Zero and NaN count as outside.
#[inline]
pub fn build(samples: &[f32; 8]) -> u8 {
  let low = Vec4::from_slice(&samples[..4]).cmpgt(Vec4::ZERO).bitmask();
  let high = Vec4::from_slice(&samples[4..]).cmpgt(Vec4::ZERO).bitmask();
  (low | (high << 4)) as u8
}

/// True when every corner lies on the same side of the surface.
#[inline]
pub fn is_homogeneous(mask: u8) -> bool {
  mask == 0 || mask == u8::MAX
}

#[cfg(test)]
#[path = "corner_mask_test.rs"]
mod corner_mask_test;
