//! metaball_mesh - Metaball scalar field and marching cubes surface extraction
//!
//! This crate turns a set of point sources sharing one radius into a triangle
//! soup approximating the blobby iso-surface around them, once per frame.
//!
//! # Features
//!
//! - **Scalar field**: inverse-square metaball potential with an explicit
//!   per-frame snapshot of the source positions
//! - **Marching cubes**: single-threaded uniform grid sweep with a crack-free
//!   256-case triangle table and outward, counter-clockwise winding
//! - **Normals**: smooth field-gradient normals or faceted face normals
//! - **Batch extraction**: independent fields (e.g. baked animation frames)
//!   extracted in parallel with rayon
//! - **Scene lifecycle**: `initialize` / `advance(dt)` wiring a source provider
//!   to a presenter
//!
//! # Example
//!
//! ```ignore
//! use glam::Vec3;
//! use metaball_mesh::{IsoField, MesherConfig, ScalarField, SurfaceExtractor};
//!
//! let mut field = ScalarField::new(1.0)
//!   .with_sources([Vec3::ZERO, Vec3::new(1.5, 0.0, 0.0)]);
//! field.update();
//!
//! let mut extractor = SurfaceExtractor::new(MesherConfig::default())?;
//! let soup = extractor.extract(&field);
//!
//! println!("Generated {} vertices, {} triangles",
//!     soup.vertex_count(), soup.triangle_count());
//! ```

pub mod constants;
pub mod edge_table;
pub mod error;
pub mod tri_table;
pub mod types;

// Re-export commonly used items
pub use constants::{CORNER_OFFSETS, DEFAULT_CELL_SIZE, DEFAULT_NORMAL_EPSILON};
pub use edge_table::{EDGE_CORNERS, EDGE_TABLE};
pub use error::ConfigError;
pub use tri_table::TRIANGLE_TABLE;
pub use types::{FieldConfig, MesherConfig, MinMaxAABB, NormalMode, TriangleSoup};

// Scalar field and its snapshot
pub mod field;
pub use field::{FieldBorders, FieldSnapshot, IsoField, ScalarField};

// Marching cubes extraction
pub mod marching_cubes;
pub use marching_cubes::{extract, SurfaceExtractor, SweepStats};

// Parallel extraction of independent fields
pub mod batch;
pub use batch::{extract_batch, BatchResult};

// Source providers and mesh consumers
pub mod presentation;
pub mod provider;
pub use presentation::{NullPresenter, SurfacePresenter};
pub use provider::{Orbit, OrbitingSources, SourceProvider, StaticSources};

// Frame lifecycle
pub mod scene;
pub use scene::MetaballScene;

// Sweep metrics (feature-gated collection)
pub mod metrics;
