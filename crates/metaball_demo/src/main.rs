//! Headless metaball demo.
//!
//! Drives a [`MetaballScene`] for a fixed number of frames, logs per-frame
//! extraction statistics and optionally exports the final surface as OBJ.
//!
//! ```text
//! RUST_LOG=debug metaball_demo --config config/swirl.toml --frames 300 --obj out.obj
//! ```

mod config;
mod obj;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use metaball_mesh::{MetaballScene, SurfacePresenter, SweepStats, TriangleSoup};
use tracing_subscriber::EnvFilter;

use config::DemoConfig;

/// Headless metaball surface extraction loop.
#[derive(Parser, Debug)]
#[command(name = "metaball_demo")]
#[command(about = "Animates metaballs and extracts their surface every frame")]
struct Args {
  /// Path to configuration TOML file (default: built-in swirl).
  #[arg(short, long)]
  config: Option<PathBuf>,

  /// Number of frames to advance after the initial one.
  #[arg(short, long, default_value_t = 120)]
  frames: u64,

  /// Seconds per frame.
  #[arg(long, default_value_t = 1.0 / 60.0)]
  dt: f32,

  /// Log a summary every N frames.
  #[arg(long, default_value_t = 30)]
  log_every: u64,

  /// Write the final surface to this OBJ file.
  #[arg(long)]
  obj: Option<PathBuf>,
}

/// Logs extraction statistics as frames are presented.
struct FrameLog {
  every: u64,
}

impl SurfacePresenter for FrameLog {
  fn present(&mut self, frame: u64, surface: &TriangleSoup, stats: &SweepStats) {
    tracing::debug!(
      frame,
      cells = stats.cells_visited,
      active = stats.active_cells,
      triangles = stats.triangles,
      "surface extracted"
    );

    if self.every > 0 && frame % self.every == 0 {
      tracing::info!(
        frame,
        vertices = surface.vertex_count(),
        triangles = surface.triangle_count(),
        bounds_min = ?surface.bounds.min,
        bounds_max = ?surface.bounds.max,
        "frame"
      );
    }
  }
}

fn main() -> Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
    .init();

  let args = Args::parse();

  let config = match &args.config {
    Some(path) => {
      tracing::info!("Loading config from: {}", path.display());
      DemoConfig::load(path)?
    }
    None => DemoConfig::default(),
  };

  let provider = config.provider();
  tracing::info!(
    balls = provider.orbits().len(),
    radius = config.field.radius,
    cell_size = config.mesher.cell_size,
    normal_mode = ?config.mesher.normal_mode,
    "starting"
  );

  let presenter = FrameLog {
    every: args.log_every,
  };
  let mut scene = MetaballScene::new(provider, presenter, &config.field, config.mesher)
    .context("Invalid scene configuration")?;

  scene.initialize();
  for _ in 0..args.frames {
    scene.advance(args.dt);
  }

  let metrics = scene.metrics();
  tracing::info!(
    frames = scene.frame() + 1,
    sweeps = metrics.total_sweeps,
    total_triangles = metrics.total_triangles,
    avg_us = metrics.avg_extract_timing_us(),
    min_max_us = ?metrics.extract_timings.min_max(),
    "done"
  );

  if let Some(path) = &args.obj {
    obj::save(path, scene.surface())?;
    tracing::info!(
      "Wrote {} triangles to {}",
      scene.surface().triangle_count(),
      path.display()
    );
  }

  Ok(())
}
