use glam::Vec3;

use super::*;
use crate::constants::CORNER_OFFSETS;
use crate::edge_table::{EDGE_CORNERS, EDGE_TABLE};

fn edge_midpoint(edge: u8) -> Vec3 {
  let [a, b] = EDGE_CORNERS[edge as usize];
  (CORNER_OFFSETS[a as usize] + CORNER_OFFSETS[b as usize]) * 0.5
}

fn face_normal(triangle: [u8; 3]) -> (Vec3, Vec3) {
  let [a, b, c] = triangle.map(edge_midpoint);
  ((b - a).cross(c - a), (a + b + c) / 3.0)
}

#[test]
fn test_homogeneous_masks_are_empty() {
  assert_eq!(triangle_count(0), 0);
  assert_eq!(triangle_count(255), 0);
}

#[test]
fn test_mixed_masks_emit_triangles() {
  for mask in 1u8..255 {
    let count = triangle_count(mask);
    assert!(
      (1..=MAX_CUBE_TRIANGLES).contains(&count),
      "Mask {:#04x} emits {} triangles",
      mask,
      count
    );
  }
}

#[test]
fn test_sentinels_only_trail() {
  for (mask, entries) in TRIANGLE_TABLE.iter().enumerate() {
    assert!(is_well_formed(entries), "Mask {:#04x} is malformed", mask);
  }
}

#[test]
fn test_triangles_only_use_crossing_edges() {
  for mask in 0..=255u8 {
    let crossing = EDGE_TABLE[mask as usize];
    for triangle in case_triangles(mask) {
      for edge in triangle {
        assert!(
          crossing & (1 << edge) != 0,
          "Mask {:#04x} references non-crossing edge {}",
          mask,
          edge
        );
      }
    }
  }
}

#[test]
fn test_every_crossing_edge_is_used() {
  for mask in 0..=255u8 {
    let mut used = 0u16;
    for triangle in case_triangles(mask) {
      for edge in triangle {
        used |= 1 << edge;
      }
    }
    assert_eq!(
      used, EDGE_TABLE[mask as usize],
      "Mask {:#04x} leaves crossing edges unused",
      mask
    );
  }
}

#[test]
fn test_no_repeated_edges_within_triangle() {
  for mask in 0..=255u8 {
    for [a, b, c] in case_triangles(mask) {
      assert!(a != b && b != c && a != c, "Mask {:#04x} has a degenerate triangle", mask);
    }
  }
}

#[test]
fn test_single_corner_cases() {
  assert_eq!(TRIANGLE_TABLE[1][0], [8, 3, 0]);

  for corner in 0..8 {
    assert_eq!(triangle_count(1 << corner), 1);
    assert_eq!(triangle_count(!(1u8 << corner)), 1);
  }
}

#[test]
fn test_winding_faces_away_from_inside() {
  for corner in 0..8 {
    let inside_corner = CORNER_OFFSETS[corner];

    // Lone inside corner: normals point away from it
    for triangle in case_triangles(1 << corner) {
      let (normal, centroid) = face_normal(triangle);
      assert!(normal.dot(centroid - inside_corner) > 0.0);
    }

    // Lone outside corner: normals point towards it
    for triangle in case_triangles(!(1u8 << corner)) {
      let (normal, centroid) = face_normal(triangle);
      assert!(normal.dot(inside_corner - centroid) > 0.0);
    }
  }
}

#[test]
fn test_ambiguous_face_separates_inside_corners() {
  // Corners 0 and 2 are diagonal on the bottom face: two separate caps
  let triangles: Vec<_> = case_triangles(0b0000_0101).collect();
  assert_eq!(triangles.len(), 2);
}
