use super::*;
use crate::provider::StaticSources;

fn single_ball() -> ScalarField {
  let mut field = ScalarField::new(1.0).with_sources([Vec3::ZERO]);
  field.update();
  field
}

#[test]
fn test_value_at_sign_convention() {
  let field = single_ball();

  assert_eq!(field.value_at(Vec3::new(0.5, 0.0, 0.0)), 3.0);
  assert_eq!(field.value_at(Vec3::new(1.0, 0.0, 0.0)), 0.0);
  assert!(field.value_at(Vec3::new(2.0, 0.0, 0.0)) < 0.0);
}

#[test]
fn test_value_at_sums_sources() {
  let mut field = ScalarField::new(1.0).with_sources([Vec3::new(-1.0, 0.0, 0.0), Vec3::new(1.0, 0.0, 0.0)]);
  field.update();

  // Midpoint sees 1/1 from each side
  assert_eq!(field.value_at(Vec3::ZERO), 1.0);
}

#[test]
fn test_value_at_scales_with_radius() {
  let mut field = ScalarField::new(2.0).with_sources([Vec3::ZERO]);
  field.update();

  assert_eq!(field.value_at(Vec3::new(2.0, 0.0, 0.0)), 0.0);
}

#[test]
fn test_value_at_center_is_finite() {
  let field = single_ball();
  let value = field.value_at(Vec3::ZERO);

  assert!(value.is_finite());
  assert!(value > 0.0);
}

#[test]
fn test_empty_field_is_outside_everywhere() {
  let mut field = ScalarField::new(1.0);
  field.update();

  assert_eq!(field.value_at(Vec3::ZERO), -1.0);
  assert_eq!(field.value_at(Vec3::splat(100.0)), -1.0);
  assert_eq!(field.borders(), FieldBorders::EMPTY);
  assert!(field.borders().is_empty());
}

#[test]
fn test_borders_expand_by_margin() {
  let mut field = ScalarField::new(1.0).with_sources([Vec3::ZERO, Vec3::new(3.0, 0.0, 0.0)]);
  field.update();
  let borders = field.borders();

  assert_eq!(borders.min, Vec3::new(-2.0, -2.0, -2.0));
  assert_eq!(borders.max, Vec3::new(5.0, 2.0, 2.0));
  assert_eq!(borders.size(), Vec3::new(7.0, 4.0, 4.0));
}

#[test]
fn test_borders_follow_config_margin() {
  let config = FieldConfig::new().with_radius(0.5).with_border_margin(4.0);
  let mut field = ScalarField::from_config(&config).unwrap();
  field.push_source(Vec3::new(1.0, 2.0, 3.0));
  field.update();
  let borders = field.borders();

  assert_eq!(borders.min, Vec3::new(-1.0, 0.0, 1.0));
  assert_eq!(borders.max, Vec3::new(3.0, 4.0, 5.0));
}

#[test]
fn test_from_config_rejects_invalid() {
  let config = FieldConfig::new().with_radius(0.0);
  assert_eq!(
    ScalarField::from_config(&config).unwrap_err(),
    ConfigError::InvalidRadius(0.0)
  );
}

#[test]
fn test_snapshot_isolated_from_live_edits() {
  let mut field = single_ball();
  let before = field.borders();

  field.sources_mut()[0] = Vec3::new(10.0, 0.0, 0.0);
  field.push_source(Vec3::new(-10.0, 0.0, 0.0));
  field.set_radius(3.0);

  assert_eq!(field.borders(), before);
  assert_eq!(field.snapshot().centers(), &[Vec3::ZERO]);

  field.update();
  assert_eq!(field.snapshot().centers().len(), 2);
  assert_eq!(field.snapshot().radius(), 3.0);
  assert_ne!(field.borders(), before);
}

#[test]
fn test_source_management() {
  let mut field = ScalarField::new(1.0);
  field.set_sources(&[Vec3::X, Vec3::Y, Vec3::Z]);
  assert_eq!(field.sources().len(), 3);

  assert_eq!(field.remove_source(1), Some(Vec3::Y));
  assert_eq!(field.sources(), &[Vec3::X, Vec3::Z]);
  assert_eq!(field.remove_source(5), None);

  field.clear_sources();
  assert!(field.sources().is_empty());
}

#[test]
fn test_update_from_provider() {
  let provider = StaticSources::new(vec![Vec3::ONE, Vec3::NEG_ONE], 0.75);
  let mut field = ScalarField::default();
  field.update_from(&provider);

  assert_eq!(field.sources(), &[Vec3::ONE, Vec3::NEG_ONE]);
  assert_eq!(field.radius(), 0.75);
  assert_eq!(field.snapshot().centers(), &[Vec3::ONE, Vec3::NEG_ONE]);
  assert_eq!(field.snapshot().radius(), 0.75);
}

#[test]
#[cfg(debug_assertions)]
#[should_panic(expected = "radius must be finite and positive")]
fn test_update_from_rejects_negative_radius() {
  let provider = StaticSources::new(vec![Vec3::ZERO], -1.0);
  let mut field = ScalarField::default();
  field.update_from(&provider);
}

#[test]
#[cfg(debug_assertions)]
#[should_panic(expected = "radius must be finite and positive")]
fn test_set_radius_rejects_nan() {
  ScalarField::default().set_radius(f32::NAN);
}

#[test]
fn test_gradient_points_inward() {
  let field = single_ball();
  let gradient = field.gradient(Vec3::new(1.0, 0.0, 0.0), 0.01);

  assert!(gradient.x < 0.0);
  assert!(gradient.y.abs() < 1e-4);
  assert!(gradient.z.abs() < 1e-4);
}

#[test]
fn test_surface_normal_points_outward() {
  let field = single_ball();

  for dir in [Vec3::X, Vec3::NEG_Y, Vec3::new(1.0, 1.0, 1.0).normalize()] {
    let normal = field.surface_normal(dir, 0.01);
    assert!((normal.length() - 1.0).abs() < 1e-5);
    assert!(normal.dot(dir) > 0.99, "normal {:?} at {:?}", normal, dir);
  }
}

#[test]
fn test_surface_normal_fallback_on_flat_field() {
  let mut field = ScalarField::new(1.0);
  field.update();

  assert_eq!(field.surface_normal(Vec3::ZERO, 0.01), Vec3::Y);
}

#[test]
fn test_snapshot_evaluates_directly() {
  let snapshot = FieldSnapshot::new(vec![Vec3::ZERO], 1.0).with_border_margin(1.0);

  assert_eq!(snapshot.value_at(Vec3::new(1.0, 0.0, 0.0)), 0.0);
  assert_eq!(snapshot.borders().min, Vec3::splat(-1.0));
  assert!(!snapshot.is_empty());
}
