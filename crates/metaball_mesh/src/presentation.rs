//! SurfacePresenter - callback interface for mesh consumers.
//!
//! Lets the scene hand each freshly extracted surface to a renderer, file
//! writer or test probe without depending on any of them.

use crate::marching_cubes::SweepStats;
use crate::types::TriangleSoup;

/// Receives the surface once per cycle.
///
/// The soup is borrowed from the extractor's reusable buffers and is
/// overwritten by the next cycle; copy out anything that must outlive the
/// call.
///
/// # Example
///
/// ```ignore
/// struct GpuUpload { mesh: MeshHandle }
///
/// impl SurfacePresenter for GpuUpload {
///     fn present(&mut self, _frame: u64, surface: &TriangleSoup, _stats: &SweepStats) {
///         self.mesh.write(&surface.positions, &surface.normals, &surface.indices);
///     }
/// }
/// ```
pub trait SurfacePresenter {
  /// Called after every extraction with the frame number (0 for the
  /// initial surface).
  fn present(&mut self, frame: u64, surface: &TriangleSoup, stats: &SweepStats);
}

/// No-op implementation for testing and headless operation.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullPresenter;

impl SurfacePresenter for NullPresenter {
  fn present(&mut self, _frame: u64, _surface: &TriangleSoup, _stats: &SweepStats) {
    // No-op
  }
}

impl<F> SurfacePresenter for F
where
  F: FnMut(u64, &TriangleSoup, &SweepStats),
{
  fn present(&mut self, frame: u64, surface: &TriangleSoup, stats: &SweepStats) {
    self(frame, surface, stats)
  }
}
