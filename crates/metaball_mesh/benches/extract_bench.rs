//! Benchmark comparing metaball_mesh marching cubes against the
//! fast_surface_nets crate on the same metaball field.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use fast_surface_nets::ndshape::{ConstShape, ConstShape3u32};
use fast_surface_nets::{surface_nets, SurfaceNetsBuffer};
use glam::Vec3;
use metaball_mesh::{
  extract_batch, FieldSnapshot, IsoField, MesherConfig, NormalMode, OrbitingSources,
  SourceProvider, SurfaceExtractor,
};

/// Grid shape for fast_surface_nets (32³).
type GridShape = ConstShape3u32<32, 32, 32>;

/// Sample the field on a 32³ lattice spanning its borders.
///
/// fast_surface_nets treats negative values as inside, so the field is
/// negated.
fn sample_grid(field: &FieldSnapshot) -> ([f32; GridShape::USIZE], f32) {
  let borders = field.borders();
  let step = borders.size().max_element() / 31.0;
  let mut sdf = [1.0f32; GridShape::USIZE];

  for i in 0u32..GridShape::SIZE {
    let [x, y, z] = GridShape::delinearize(i);
    let p = borders.min + Vec3::new(x as f32, y as f32, z as f32) * step;
    sdf[i as usize] = -field.value_at(p);
  }

  (sdf, step)
}

fn two_balls() -> FieldSnapshot {
  FieldSnapshot::new(vec![Vec3::ZERO, Vec3::new(1.5, 0.0, 0.0)], 1.0)
}

/// Benchmark our marching cubes at the default cell size.
fn bench_extract(c: &mut Criterion) {
  let field = two_balls();
  let mut extractor = SurfaceExtractor::new(MesherConfig::default()).unwrap();

  c.bench_function("metaball_mesh::extract (2 balls, h=0.15)", |b| {
    b.iter(|| {
      let soup = extractor.extract(black_box(&field));
      black_box(soup.triangle_count())
    })
  });
}

/// Same field through fast_surface_nets on a comparable lattice.
fn bench_fast_surface_nets(c: &mut Criterion) {
  let field = two_balls();
  let (sdf, _) = sample_grid(&field);

  c.bench_function("fast_surface_nets (2 balls, 32³)", |b| {
    b.iter(|| {
      let mut buffer = SurfaceNetsBuffer::default();
      surface_nets(black_box(&sdf), &GridShape {}, [0; 3], [31; 3], &mut buffer);
      black_box(buffer)
    })
  });
}

/// Matching resolution: our cell size equals the 32³ lattice step.
fn bench_comparison(c: &mut Criterion) {
  let mut group = c.benchmark_group("metaball_comparison");

  for radius in [0.5, 1.0, 1.5] {
    let field = FieldSnapshot::new(vec![Vec3::ZERO, Vec3::new(1.5, 0.0, 0.0)], radius);
    let (sdf, step) = sample_grid(&field);
    let mut extractor =
      SurfaceExtractor::new(MesherConfig::new().with_cell_size(step)).unwrap();

    group.bench_with_input(
      BenchmarkId::new("metaball_mesh", format!("r={}", radius)),
      &radius,
      |b, _| b.iter(|| black_box(extractor.extract(black_box(&field)).triangle_count())),
    );

    group.bench_with_input(
      BenchmarkId::new("fast_surface_nets", format!("r={}", radius)),
      &radius,
      |b, _| {
        b.iter(|| {
          let mut buffer = SurfaceNetsBuffer::default();
          surface_nets(
            black_box(&sdf),
            &GridShape {},
            [0; 3],
            [31; 3],
            &mut buffer,
          );
          black_box(buffer)
        })
      },
    );
  }

  group.finish();
}

/// Gradient normals cost 72 extra field samples per active cell.
fn bench_normal_modes(c: &mut Criterion) {
  let mut group = c.benchmark_group("normal_modes");
  let field = two_balls();

  for mode in [NormalMode::Gradient, NormalMode::Flat] {
    let mut extractor =
      SurfaceExtractor::new(MesherConfig::new().with_normal_mode(mode)).unwrap();
    group.bench_function(format!("{:?}", mode), |b| {
      b.iter(|| black_box(extractor.extract(black_box(&field)).triangle_count()))
    });
  }

  group.finish();
}

/// Eight baked animation frames, sequential vs rayon.
fn bench_batch(c: &mut Criterion) {
  let mut group = c.benchmark_group("batch");
  let config = MesherConfig::default();

  let mut provider = OrbitingSources::swirl(1.0);
  let frames: Vec<FieldSnapshot> = (0..8)
    .map(|_| {
      provider.advance(1.0 / 30.0);
      FieldSnapshot::new(provider.positions().to_vec(), provider.radius())
    })
    .collect();

  group.bench_function("sequential (8 frames)", |b| {
    let mut extractor = SurfaceExtractor::new(config).unwrap();
    b.iter(|| {
      for frame in &frames {
        black_box(extractor.extract(frame).triangle_count());
      }
    })
  });

  group.bench_function("extract_batch (8 frames)", |b| {
    b.iter(|| black_box(extract_batch(black_box(&frames), &config).unwrap()))
  });

  group.finish();
}

criterion_group!(
  benches,
  bench_extract,
  bench_fast_surface_nets,
  bench_comparison,
  bench_normal_modes,
  bench_batch
);
criterion_main!(benches);
