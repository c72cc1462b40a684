//! Cube edge layout and the precomputed edge crossing table.
//!
//! Maps 8-bit corner masks to 12-bit edge masks indicating which edges have
//! surface crossings.
//!
//! # Edge Layout
//!
//! ```text
//! Edges 0-3:  bottom face ring (corners 0→1→2→3→0, Z = min)
//! Edges 4-7:  top face ring    (corners 4→5→6→7→4, Z = max)
//! Edges 8-11: verticals        (corner i → corner i + 4)
//! ```
//!
//! # Edge Table Usage
//!
//! Given a corner mask (bit `i` set when corner `i` is inside the surface),
//! `EDGE_TABLE[corner_mask]` has bit `e` set when edge `e` crosses the surface.
//!
//! ```text
//! Corner mask: 0b00000001 (only corner 0 is inside)
//! Edge mask:   0b000100001001 (edges 0, 3, 8)
//! ```

use crate::constants::EDGE_COUNT;

/// Edge endpoint corner indices.
pub const EDGE_CORNERS: [[u8; 2]; EDGE_COUNT] = [
  [0, 1], // Edge 0:  Y axis at minX, minZ
  [1, 2], // Edge 1:  X axis at maxY, minZ
  [2, 3], // Edge 2:  Y axis at maxX, minZ
  [3, 0], // Edge 3:  X axis at minY, minZ
  [4, 5], // Edge 4:  Y axis at minX, maxZ
  [5, 6], // Edge 5:  X axis at maxY, maxZ
  [6, 7], // Edge 6:  Y axis at maxX, maxZ
  [7, 4], // Edge 7:  X axis at minY, maxZ
  [0, 4], // Edge 8:  Z axis at minX, minY
  [1, 5], // Edge 9:  Z axis at minX, maxY
  [2, 6], // Edge 10: Z axis at maxX, maxY
  [3, 7], // Edge 11: Z axis at maxX, minY
];

/// Precomputed edge table.
/// Index: 8-bit corner mask (which corners are inside)
/// Value: 12-bit edge mask (which edges have crossings)
pub const EDGE_TABLE: [u16; 256] = generate_edge_table();

const fn generate_edge_table() -> [u16; 256] {
  let mut table = [0u16; 256];
  let mut corner_mask = 0usize;

  while corner_mask < 256 {
    let mut edge_mask = 0u16;
    let mut edge = 0;

    while edge < EDGE_COUNT {
      let c0 = EDGE_CORNERS[edge][0] as usize;
      let c1 = EDGE_CORNERS[edge][1] as usize;

      let inside0 = (corner_mask >> c0) & 1;
      let inside1 = (corner_mask >> c1) & 1;

      if inside0 != inside1 {
        edge_mask |= 1 << edge;
      }

      edge += 1;
    }

    table[corner_mask] = edge_mask;
    corner_mask += 1;
  }

  table
}

#[cfg(test)]
#[path = "edge_table_test.rs"]
mod edge_table_test;
