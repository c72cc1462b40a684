use glam::Vec3;

use super::*;
use crate::field::IsoField;
use crate::metrics;
use crate::presentation::NullPresenter;
use crate::provider::{OrbitingSources, StaticSources};

/// Records what it was shown.
#[derive(Default)]
struct RecordingPresenter {
  frames: Vec<u64>,
  triangle_counts: Vec<usize>,
}

impl SurfacePresenter for RecordingPresenter {
  fn present(&mut self, frame: u64, surface: &TriangleSoup, stats: &SweepStats) {
    assert_eq!(stats.triangles as usize, surface.triangle_count());
    self.frames.push(frame);
    self.triangle_counts.push(surface.triangle_count());
  }
}

fn coarse() -> MesherConfig {
  MesherConfig::new().with_cell_size(0.25)
}

#[test]
fn test_initialize_presents_frame_zero() {
  let provider = StaticSources::new(vec![Vec3::ZERO], 1.0);
  let mut scene =
    MetaballScene::new(provider, RecordingPresenter::default(), &FieldConfig::default(), coarse())
      .unwrap();

  let triangles = scene.initialize().triangle_count();

  assert!(triangles > 0);
  assert_eq!(scene.frame(), 0);
  assert_eq!(scene.presenter().frames, vec![0]);
  assert_eq!(scene.presenter().triangle_counts, vec![triangles]);
  assert_eq!(scene.field().sources(), &[Vec3::ZERO]);
}

#[test]
fn test_advance_bumps_frame_and_represents() {
  let provider = StaticSources::new(vec![Vec3::ZERO], 1.0);
  let mut scene =
    MetaballScene::new(provider, RecordingPresenter::default(), &FieldConfig::default(), coarse())
      .unwrap();

  scene.initialize();
  scene.advance(0.016);
  scene.advance(0.016);

  assert_eq!(scene.frame(), 2);
  assert_eq!(scene.presenter().frames, vec![0, 1, 2]);

  // Static sources give the same surface every frame
  let counts = &scene.presenter().triangle_counts;
  assert!(counts.iter().all(|&c| c == counts[0]));
}

#[test]
fn test_orbiting_sources_change_surface() {
  let provider = OrbitingSources::swirl(1.0);
  let mut scene =
    MetaballScene::new(provider, NullPresenter, &FieldConfig::default(), coarse()).unwrap();

  let first = scene.initialize().clone();
  let before = scene.field().snapshot().centers().to_vec();

  scene.advance(0.5);

  assert_ne!(scene.field().snapshot().centers(), before.as_slice());
  assert_ne!(scene.surface(), &first);
  assert_eq!(scene.provider().time(), 0.5);
}

#[test]
fn test_scene_tracks_provider_radius() {
  let provider = StaticSources::new(vec![Vec3::ZERO], 2.0);
  let mut scene =
    MetaballScene::new(provider, NullPresenter, &FieldConfig::default(), coarse()).unwrap();
  scene.initialize();

  assert_eq!(scene.field().radius(), 2.0);
  assert_eq!(scene.field().borders().min, Vec3::splat(-4.0));
}

#[test]
fn test_stats_follow_last_cycle() {
  let provider = StaticSources::new(vec![Vec3::ZERO], 1.0);
  let mut scene =
    MetaballScene::new(provider, NullPresenter, &FieldConfig::default(), coarse()).unwrap();
  scene.initialize();

  let stats = scene.stats();
  assert_eq!(stats.triangles as usize, scene.surface().triangle_count());
  assert!(stats.cells_visited >= stats.active_cells);

  if metrics::is_enabled() {
    assert_eq!(scene.metrics().total_sweeps, 1);
    assert_eq!(scene.metrics().last_stats, stats);
  } else {
    assert_eq!(scene.metrics().total_sweeps, 0);
  }
}

#[test]
fn test_closure_presenter() {
  let mut seen = Vec::new();
  {
    let presenter = |frame: u64, surface: &TriangleSoup, _stats: &SweepStats| {
      seen.push((frame, surface.is_empty()));
    };
    let mut scene = MetaballScene::new(
      StaticSources::default(),
      presenter,
      &FieldConfig::default(),
      coarse(),
    )
    .unwrap();
    scene.initialize();
    scene.advance(1.0);
  }

  assert_eq!(seen, vec![(0, true), (1, true)]);
}

#[test]
fn test_invalid_config_rejected() {
  let result = MetaballScene::new(
    StaticSources::default(),
    NullPresenter,
    &FieldConfig::new().with_radius(f32::NAN),
    MesherConfig::default(),
  );
  assert!(matches!(result, Err(ConfigError::InvalidRadius(_))));

  let result = MetaballScene::new(
    StaticSources::default(),
    NullPresenter,
    &FieldConfig::default(),
    MesherConfig::new().with_cell_size(-1.0),
  );
  assert!(matches!(result, Err(ConfigError::InvalidCellSize(_))));
}
