use glam::Vec3;

use super::*;

fn approx_eq(a: [f32; 3], b: [f32; 3], epsilon: f32) -> bool {
  (a[0] - b[0]).abs() < epsilon && (a[1] - b[1]).abs() < epsilon && (a[2] - b[2]).abs() < epsilon
}

#[test]
fn test_face_normal_ccw() {
  let n = face_normal(Vec3A::ZERO, Vec3A::X, Vec3A::Y);
  assert!(approx_eq(n.to_array(), [0.0, 0.0, 1.0], 1e-6));

  // Reversed winding flips the normal
  let n = face_normal(Vec3A::ZERO, Vec3A::Y, Vec3A::X);
  assert!(approx_eq(n.to_array(), [0.0, 0.0, -1.0], 1e-6));
}

#[test]
fn test_face_normal_is_unit() {
  let n = face_normal(
    Vec3A::new(0.3, -1.0, 2.0),
    Vec3A::new(4.0, 0.5, -1.0),
    Vec3A::new(-2.0, 3.0, 0.1),
  );
  assert!((n.length() - 1.0).abs() < 1e-5);
}

#[test]
fn test_face_normal_degenerate() {
  let n = face_normal(Vec3A::ONE, Vec3A::ONE, Vec3A::ONE);
  assert_eq!(n, Vec3A::Y);

  // Collinear
  let n = face_normal(Vec3A::ZERO, Vec3A::X, Vec3A::X * 2.0);
  assert_eq!(n, Vec3A::Y);
}

#[test]
fn test_apply_flat_normals() {
  let mut soup = TriangleSoup::new();
  soup.push_vertex(Vec3::ZERO, Vec3::Y);
  soup.push_vertex(Vec3::X, Vec3::Y);
  soup.push_vertex(Vec3::Y, Vec3::Y);

  soup.push_vertex(Vec3::ZERO, Vec3::Y);
  soup.push_vertex(Vec3::Z, Vec3::Y);
  soup.push_vertex(Vec3::X, Vec3::Y);

  apply_flat_normals(&mut soup);

  for normal in &soup.normals[..3] {
    assert!(approx_eq(*normal, [0.0, 0.0, 1.0], 1e-6));
  }
  for normal in &soup.normals[3..] {
    assert!(approx_eq(*normal, [0.0, 1.0, 0.0], 1e-6));
  }
}

#[test]
fn test_apply_flat_normals_empty() {
  let mut soup = TriangleSoup::new();
  apply_flat_normals(&mut soup);
  assert!(soup.normals.is_empty());
}
