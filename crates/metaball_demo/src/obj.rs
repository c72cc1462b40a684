//! Wavefront OBJ export of a triangle soup.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use metaball_mesh::TriangleSoup;

/// Write `soup` to `path` as OBJ with per-vertex normals.
pub fn save(path: &Path, soup: &TriangleSoup) -> Result<()> {
  let file =
    File::create(path).with_context(|| format!("Failed to create OBJ file: {}", path.display()))?;
  let mut writer = BufWriter::new(file);
  write(&mut writer, soup).with_context(|| format!("Failed to write OBJ: {}", path.display()))?;
  writer.flush()?;
  Ok(())
}

/// Serialize `soup` as OBJ. Indices are 1-based and reference the normal
/// with the same index.
pub fn write<W: Write>(out: &mut W, soup: &TriangleSoup) -> std::io::Result<()> {
  writeln!(
    out,
    "# metaball surface: {} vertices, {} triangles",
    soup.vertex_count(),
    soup.triangle_count()
  )?;

  for [x, y, z] in &soup.positions {
    writeln!(out, "v {} {} {}", x, y, z)?;
  }
  for [x, y, z] in &soup.normals {
    writeln!(out, "vn {} {} {}", x, y, z)?;
  }
  for tri in soup.indices.chunks_exact(3) {
    let [a, b, c] = [tri[0] + 1, tri[1] + 1, tri[2] + 1];
    writeln!(out, "f {a}//{a} {b}//{b} {c}//{c}")?;
  }

  Ok(())
}
