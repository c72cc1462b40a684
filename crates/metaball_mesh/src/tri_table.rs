//! Marching cubes triangle table.
//!
//! `TRIANGLE_TABLE[corner_mask]` lists up to five triangles for a cube, each a
//! triple of edge slots (see [`crate::edge_table::EDGE_CORNERS`]). Unused
//! entries hold [`NO_EDGE`] in every component and only ever trail the used
//! ones.
//!
//! The table follows the corner enumeration in [`crate::constants`]. Faces
//! with two diagonal inside corners are resolved by separating the inside
//! corners, the same rule on both sides of every face, so neighbouring cubes
//! always agree and the extracted surface has no cracks. Triangles are wound
//! counter-clockwise when seen from outside the surface.

use crate::constants::MAX_CUBE_TRIANGLES;

/// Sentinel edge slot marking an unused triangle entry.
pub const NO_EDGE: u8 = u8::MAX;

const N: [u8; 3] = [NO_EDGE; 3];

/// Triangles per corner mask, as edge slot triples.
#[rustfmt::skip]
pub const TRIANGLE_TABLE: [[[u8; 3]; MAX_CUBE_TRIANGLES]; 256] = [
  /* 0x00 */ [N, N, N, N, N],
  /* 0x01 */ [[8, 3, 0], N, N, N, N],
  /* 0x02 */ [[0, 1, 9], N, N, N, N],
  /* 0x03 */ [[8, 1, 9], [8, 3, 1], N, N, N],
  /* 0x04 */ [[10, 1, 2], N, N, N, N],
  /* 0x05 */ [[8, 3, 0], [10, 1, 2], N, N, N],
  /* 0x06 */ [[0, 10, 9], [0, 2, 10], N, N, N],
  /* 0x07 */ [[8, 10, 9], [8, 2, 10], [8, 3, 2], N, N],
  /* 0x08 */ [[2, 3, 11], N, N, N, N],
  /* 0x09 */ [[8, 2, 0], [8, 11, 2], N, N, N],
  /* 0x0A */ [[0, 1, 9], [2, 3, 11], N, N, N],
  /* 0x0B */ [[8, 1, 9], [8, 2, 1], [8, 11, 2], N, N],
  /* 0x0C */ [[10, 3, 11], [10, 1, 3], N, N, N],
  /* 0x0D */ [[8, 1, 0], [8, 10, 1], [8, 11, 10], N, N],
  /* 0x0E */ [[0, 10, 9], [0, 11, 10], [0, 3, 11], N, N],
  /* 0x0F */ [[8, 10, 9], [8, 11, 10], N, N, N],
  /* 0x10 */ [[4, 7, 8], N, N, N, N],
  /* 0x11 */ [[4, 3, 0], [4, 7, 3], N, N, N],
  /* 0x12 */ [[0, 1, 9], [4, 7, 8], N, N, N],
  /* 0x13 */ [[4, 1, 9], [4, 3, 1], [4, 7, 3], N, N],
  /* 0x14 */ [[4, 7, 8], [10, 1, 2], N, N, N],
  /* 0x15 */ [[4, 3, 0], [4, 7, 3], [10, 1, 2], N, N],
  /* 0x16 */ [[0, 10, 9], [0, 2, 10], [4, 7, 8], N, N],
  /* 0x17 */ [[4, 10, 9], [4, 2, 10], [4, 3, 2], [4, 7, 3], N],
  /* 0x18 */ [[4, 7, 8], [2, 3, 11], N, N, N],
  /* 0x19 */ [[4, 2, 0], [4, 11, 2], [4, 7, 11], N, N],
  /* 0x1A */ [[0, 1, 9], [4, 7, 8], [2, 3, 11], N, N],
  /* 0x1B */ [[4, 1, 9], [4, 2, 1], [4, 11, 2], [4, 7, 11], N],
  /* 0x1C */ [[4, 7, 8], [10, 3, 11], [10, 1, 3], N, N],
  /* 0x1D */ [[4, 1, 0], [4, 10, 1], [4, 11, 10], [4, 7, 11], N],
  /* 0x1E */ [[0, 10, 9], [0, 11, 10], [0, 3, 11], [4, 7, 8], N],
  /* 0x1F */ [[4, 10, 9], [4, 11, 10], [4, 7, 11], N, N],
  /* 0x20 */ [[9, 5, 4], N, N, N, N],
  /* 0x21 */ [[8, 3, 0], [9, 5, 4], N, N, N],
  /* 0x22 */ [[0, 5, 4], [0, 1, 5], N, N, N],
  /* 0x23 */ [[8, 5, 4], [8, 1, 5], [8, 3, 1], N, N],
  /* 0x24 */ [[9, 5, 4], [10, 1, 2], N, N, N],
  /* 0x25 */ [[8, 3, 0], [9, 5, 4], [10, 1, 2], N, N],
  /* 0x26 */ [[0, 5, 4], [0, 10, 5], [0, 2, 10], N, N],
  /* 0x27 */ [[8, 5, 4], [8, 10, 5], [8, 2, 10], [8, 3, 2], N],
  /* 0x28 */ [[9, 5, 4], [2, 3, 11], N, N, N],
  /* 0x29 */ [[8, 2, 0], [8, 11, 2], [9, 5, 4], N, N],
  /* 0x2A */ [[0, 5, 4], [0, 1, 5], [2, 3, 11], N, N],
  /* 0x2B */ [[8, 5, 4], [8, 1, 5], [8, 2, 1], [8, 11, 2], N],
  /* 0x2C */ [[9, 5, 4], [10, 3, 11], [10, 1, 3], N, N],
  /* 0x2D */ [[8, 1, 0], [8, 10, 1], [8, 11, 10], [9, 5, 4], N],
  /* 0x2E */ [[0, 5, 4], [0, 10, 5], [0, 11, 10], [0, 3, 11], N],
  /* 0x2F */ [[8, 5, 4], [8, 10, 5], [8, 11, 10], N, N],
  /* 0x30 */ [[9, 7, 8], [9, 5, 7], N, N, N],
  /* 0x31 */ [[9, 3, 0], [9, 7, 3], [9, 5, 7], N, N],
  /* 0x32 */ [[0, 7, 8], [0, 5, 7], [0, 1, 5], N, N],
  /* 0x33 */ [[3, 5, 7], [3, 1, 5], N, N, N],
  /* 0x34 */ [[9, 7, 8], [9, 5, 7], [10, 1, 2], N, N],
  /* 0x35 */ [[9, 3, 0], [9, 7, 3], [9, 5, 7], [10, 1, 2], N],
  /* 0x36 */ [[0, 7, 8], [0, 5, 7], [0, 10, 5], [0, 2, 10], N],
  /* 0x37 */ [[10, 3, 2], [10, 7, 3], [10, 5, 7], N, N],
  /* 0x38 */ [[9, 7, 8], [9, 5, 7], [2, 3, 11], N, N],
  /* 0x39 */ [[9, 2, 0], [9, 11, 2], [9, 7, 11], [9, 5, 7], N],
  /* 0x3A */ [[0, 7, 8], [0, 5, 7], [0, 1, 5], [2, 3, 11], N],
  /* 0x3B */ [[2, 7, 11], [2, 5, 7], [2, 1, 5], N, N],
  /* 0x3C */ [[9, 7, 8], [9, 5, 7], [10, 3, 11], [10, 1, 3], N],
  /* 0x3D */ [[9, 1, 0], [9, 10, 1], [9, 11, 10], [9, 7, 11], [9, 5, 7]],
  /* 0x3E */ [[0, 7, 8], [0, 5, 7], [0, 10, 5], [0, 11, 10], [0, 3, 11]],
  /* 0x3F */ [[10, 7, 11], [10, 5, 7], N, N, N],
  /* 0x40 */ [[6, 5, 10], N, N, N, N],
  /* 0x41 */ [[8, 3, 0], [6, 5, 10], N, N, N],
  /* 0x42 */ [[0, 1, 9], [6, 5, 10], N, N, N],
  /* 0x43 */ [[8, 1, 9], [8, 3, 1], [6, 5, 10], N, N],
  /* 0x44 */ [[6, 1, 2], [6, 5, 1], N, N, N],
  /* 0x45 */ [[8, 3, 0], [6, 1, 2], [6, 5, 1], N, N],
  /* 0x46 */ [[0, 5, 9], [0, 6, 5], [0, 2, 6], N, N],
  /* 0x47 */ [[8, 5, 9], [8, 6, 5], [8, 2, 6], [8, 3, 2], N],
  /* 0x48 */ [[2, 3, 11], [6, 5, 10], N, N, N],
  /* 0x49 */ [[8, 2, 0], [8, 11, 2], [6, 5, 10], N, N],
  /* 0x4A */ [[0, 1, 9], [2, 3, 11], [6, 5, 10], N, N],
  /* 0x4B */ [[8, 1, 9], [8, 2, 1], [8, 11, 2], [6, 5, 10], N],
  /* 0x4C */ [[6, 3, 11], [6, 1, 3], [6, 5, 1], N, N],
  /* 0x4D */ [[8, 1, 0], [8, 5, 1], [8, 6, 5], [8, 11, 6], N],
  /* 0x4E */ [[0, 5, 9], [0, 6, 5], [0, 11, 6], [0, 3, 11], N],
  /* 0x4F */ [[8, 5, 9], [8, 6, 5], [8, 11, 6], N, N],
  /* 0x50 */ [[4, 7, 8], [6, 5, 10], N, N, N],
  /* 0x51 */ [[4, 3, 0], [4, 7, 3], [6, 5, 10], N, N],
  /* 0x52 */ [[0, 1, 9], [4, 7, 8], [6, 5, 10], N, N],
  /* 0x53 */ [[4, 1, 9], [4, 3, 1], [4, 7, 3], [6, 5, 10], N],
  /* 0x54 */ [[4, 7, 8], [6, 1, 2], [6, 5, 1], N, N],
  /* 0x55 */ [[4, 3, 0], [4, 7, 3], [6, 1, 2], [6, 5, 1], N],
  /* 0x56 */ [[0, 5, 9], [0, 6, 5], [0, 2, 6], [4, 7, 8], N],
  /* 0x57 */ [[4, 5, 9], [4, 6, 5], [4, 2, 6], [4, 3, 2], [4, 7, 3]],
  /* 0x58 */ [[4, 7, 8], [2, 3, 11], [6, 5, 10], N, N],
  /* 0x59 */ [[4, 2, 0], [4, 11, 2], [4, 7, 11], [6, 5, 10], N],
  /* 0x5A */ [[0, 1, 9], [4, 7, 8], [2, 3, 11], [6, 5, 10], N],
  /* 0x5B */ [[4, 1, 9], [4, 2, 1], [4, 11, 2], [4, 7, 11], [6, 5, 10]],
  /* 0x5C */ [[4, 7, 8], [6, 3, 11], [6, 1, 3], [6, 5, 1], N],
  /* 0x5D */ [[4, 1, 0], [4, 5, 1], [4, 6, 5], [4, 11, 6], [4, 7, 11]],
  /* 0x5E */ [[0, 5, 9], [0, 6, 5], [0, 11, 6], [0, 3, 11], [4, 7, 8]],
  /* 0x5F */ [[4, 5, 9], [4, 6, 5], [4, 11, 6], [4, 7, 11], N],
  /* 0x60 */ [[9, 6, 4], [9, 10, 6], N, N, N],
  /* 0x61 */ [[8, 3, 0], [9, 6, 4], [9, 10, 6], N, N],
  /* 0x62 */ [[0, 6, 4], [0, 10, 6], [0, 1, 10], N, N],
  /* 0x63 */ [[8, 6, 4], [8, 10, 6], [8, 1, 10], [8, 3, 1], N],
  /* 0x64 */ [[9, 6, 4], [9, 2, 6], [9, 1, 2], N, N],
  /* 0x65 */ [[8, 3, 0], [9, 6, 4], [9, 2, 6], [9, 1, 2], N],
  /* 0x66 */ [[0, 6, 4], [0, 2, 6], N, N, N],
  /* 0x67 */ [[8, 6, 4], [8, 2, 6], [8, 3, 2], N, N],
  /* 0x68 */ [[9, 6, 4], [9, 10, 6], [2, 3, 11], N, N],
  /* 0x69 */ [[8, 2, 0], [8, 11, 2], [9, 6, 4], [9, 10, 6], N],
  /* 0x6A */ [[0, 6, 4], [0, 10, 6], [0, 1, 10], [2, 3, 11], N],
  /* 0x6B */ [[8, 6, 4], [8, 10, 6], [8, 1, 10], [8, 2, 1], [8, 11, 2]],
  /* 0x6C */ [[9, 6, 4], [9, 11, 6], [9, 3, 11], [9, 1, 3], N],
  /* 0x6D */ [[8, 1, 0], [8, 9, 1], [8, 4, 9], [8, 6, 4], [8, 11, 6]],
  /* 0x6E */ [[0, 6, 4], [0, 11, 6], [0, 3, 11], N, N],
  /* 0x6F */ [[8, 6, 4], [8, 11, 6], N, N, N],
  /* 0x70 */ [[9, 7, 8], [9, 6, 7], [9, 10, 6], N, N],
  /* 0x71 */ [[9, 3, 0], [9, 7, 3], [9, 6, 7], [9, 10, 6], N],
  /* 0x72 */ [[0, 7, 8], [0, 6, 7], [0, 10, 6], [0, 1, 10], N],
  /* 0x73 */ [[6, 1, 10], [6, 3, 1], [6, 7, 3], N, N],
  /* 0x74 */ [[9, 7, 8], [9, 6, 7], [9, 2, 6], [9, 1, 2], N],
  /* 0x75 */ [[9, 3, 0], [9, 7, 3], [9, 6, 7], [9, 2, 6], [9, 1, 2]],
  /* 0x76 */ [[0, 7, 8], [0, 6, 7], [0, 2, 6], N, N],
  /* 0x77 */ [[6, 3, 2], [6, 7, 3], N, N, N],
  /* 0x78 */ [[9, 7, 8], [9, 6, 7], [9, 10, 6], [2, 3, 11], N],
  /* 0x79 */ [[9, 2, 0], [9, 11, 2], [9, 7, 11], [9, 6, 7], [9, 10, 6]],
  /* 0x7A */ [[0, 7, 8], [0, 6, 7], [0, 10, 6], [0, 1, 10], [2, 3, 11]],
  /* 0x7B */ [[2, 7, 11], [2, 6, 7], [2, 10, 6], [2, 1, 10], N],
  /* 0x7C */ [[9, 7, 8], [9, 6, 7], [9, 11, 6], [9, 3, 11], [9, 1, 3]],
  /* 0x7D */ [[9, 1, 0], [6, 7, 11], N, N, N],
  /* 0x7E */ [[0, 7, 8], [0, 6, 7], [0, 11, 6], [0, 3, 11], N],
  /* 0x7F */ [[6, 7, 11], N, N, N, N],
  /* 0x80 */ [[11, 7, 6], N, N, N, N],
  /* 0x81 */ [[8, 3, 0], [11, 7, 6], N, N, N],
  /* 0x82 */ [[0, 1, 9], [11, 7, 6], N, N, N],
  /* 0x83 */ [[8, 1, 9], [8, 3, 1], [11, 7, 6], N, N],
  /* 0x84 */ [[10, 1, 2], [11, 7, 6], N, N, N],
  /* 0x85 */ [[8, 3, 0], [10, 1, 2], [11, 7, 6], N, N],
  /* 0x86 */ [[0, 10, 9], [0, 2, 10], [11, 7, 6], N, N],
  /* 0x87 */ [[8, 10, 9], [8, 2, 10], [8, 3, 2], [11, 7, 6], N],
  /* 0x88 */ [[2, 7, 6], [2, 3, 7], N, N, N],
  /* 0x89 */ [[8, 2, 0], [8, 6, 2], [8, 7, 6], N, N],
  /* 0x8A */ [[0, 1, 9], [2, 7, 6], [2, 3, 7], N, N],
  /* 0x8B */ [[8, 1, 9], [8, 2, 1], [8, 6, 2], [8, 7, 6], N],
  /* 0x8C */ [[10, 7, 6], [10, 3, 7], [10, 1, 3], N, N],
  /* 0x8D */ [[8, 1, 0], [8, 10, 1], [8, 6, 10], [8, 7, 6], N],
  /* 0x8E */ [[0, 10, 9], [0, 6, 10], [0, 7, 6], [0, 3, 7], N],
  /* 0x8F */ [[8, 10, 9], [8, 6, 10], [8, 7, 6], N, N],
  /* 0x90 */ [[4, 11, 8], [4, 6, 11], N, N, N],
  /* 0x91 */ [[4, 3, 0], [4, 11, 3], [4, 6, 11], N, N],
  /* 0x92 */ [[0, 1, 9], [4, 11, 8], [4, 6, 11], N, N],
  /* 0x93 */ [[4, 1, 9], [4, 3, 1], [4, 11, 3], [4, 6, 11], N],
  /* 0x94 */ [[4, 11, 8], [4, 6, 11], [10, 1, 2], N, N],
  /* 0x95 */ [[4, 3, 0], [4, 11, 3], [4, 6, 11], [10, 1, 2], N],
  /* 0x96 */ [[0, 10, 9], [0, 2, 10], [4, 11, 8], [4, 6, 11], N],
  /* 0x97 */ [[4, 10, 9], [4, 2, 10], [4, 3, 2], [4, 11, 3], [4, 6, 11]],
  /* 0x98 */ [[4, 3, 8], [4, 2, 3], [4, 6, 2], N, N],
  /* 0x99 */ [[4, 2, 0], [4, 6, 2], N, N, N],
  /* 0x9A */ [[0, 1, 9], [4, 3, 8], [4, 2, 3], [4, 6, 2], N],
  /* 0x9B */ [[4, 1, 9], [4, 2, 1], [4, 6, 2], N, N],
  /* 0x9C */ [[4, 3, 8], [4, 1, 3], [4, 10, 1], [4, 6, 10], N],
  /* 0x9D */ [[4, 1, 0], [4, 10, 1], [4, 6, 10], N, N],
  /* 0x9E */ [[0, 10, 9], [0, 6, 10], [0, 4, 6], [0, 8, 4], [0, 3, 8]],
  /* 0x9F */ [[4, 10, 9], [4, 6, 10], N, N, N],
  /* 0xA0 */ [[9, 5, 4], [11, 7, 6], N, N, N],
  /* 0xA1 */ [[8, 3, 0], [9, 5, 4], [11, 7, 6], N, N],
  /* 0xA2 */ [[0, 5, 4], [0, 1, 5], [11, 7, 6], N, N],
  /* 0xA3 */ [[8, 5, 4], [8, 1, 5], [8, 3, 1], [11, 7, 6], N],
  /* 0xA4 */ [[9, 5, 4], [10, 1, 2], [11, 7, 6], N, N],
  /* 0xA5 */ [[8, 3, 0], [9, 5, 4], [10, 1, 2], [11, 7, 6], N],
  /* 0xA6 */ [[0, 5, 4], [0, 10, 5], [0, 2, 10], [11, 7, 6], N],
  /* 0xA7 */ [[8, 5, 4], [8, 10, 5], [8, 2, 10], [8, 3, 2], [11, 7, 6]],
  /* 0xA8 */ [[9, 5, 4], [2, 7, 6], [2, 3, 7], N, N],
  /* 0xA9 */ [[8, 2, 0], [8, 6, 2], [8, 7, 6], [9, 5, 4], N],
  /* 0xAA */ [[0, 5, 4], [0, 1, 5], [2, 7, 6], [2, 3, 7], N],
  /* 0xAB */ [[8, 5, 4], [8, 1, 5], [8, 2, 1], [8, 6, 2], [8, 7, 6]],
  /* 0xAC */ [[9, 5, 4], [10, 7, 6], [10, 3, 7], [10, 1, 3], N],
  /* 0xAD */ [[8, 1, 0], [8, 10, 1], [8, 6, 10], [8, 7, 6], [9, 5, 4]],
  /* 0xAE */ [[0, 5, 4], [0, 10, 5], [0, 6, 10], [0, 7, 6], [0, 3, 7]],
  /* 0xAF */ [[8, 5, 4], [8, 10, 5], [8, 6, 10], [8, 7, 6], N],
  /* 0xB0 */ [[9, 11, 8], [9, 6, 11], [9, 5, 6], N, N],
  /* 0xB1 */ [[9, 3, 0], [9, 11, 3], [9, 6, 11], [9, 5, 6], N],
  /* 0xB2 */ [[0, 11, 8], [0, 6, 11], [0, 5, 6], [0, 1, 5], N],
  /* 0xB3 */ [[11, 5, 6], [11, 1, 5], [11, 3, 1], N, N],
  /* 0xB4 */ [[9, 11, 8], [9, 6, 11], [9, 5, 6], [10, 1, 2], N],
  /* 0xB5 */ [[9, 3, 0], [9, 11, 3], [9, 6, 11], [9, 5, 6], [10, 1, 2]],
  /* 0xB6 */ [[0, 11, 8], [0, 6, 11], [0, 5, 6], [0, 10, 5], [0, 2, 10]],
  /* 0xB7 */ [[10, 3, 2], [10, 11, 3], [10, 6, 11], [10, 5, 6], N],
  /* 0xB8 */ [[9, 3, 8], [9, 2, 3], [9, 6, 2], [9, 5, 6], N],
  /* 0xB9 */ [[9, 2, 0], [9, 6, 2], [9, 5, 6], N, N],
  /* 0xBA */ [[0, 3, 8], [0, 2, 3], [0, 6, 2], [0, 5, 6], [0, 1, 5]],
  /* 0xBB */ [[2, 5, 6], [2, 1, 5], N, N, N],
  /* 0xBC */ [[9, 3, 8], [9, 1, 3], [9, 10, 1], [9, 6, 10], [9, 5, 6]],
  /* 0xBD */ [[9, 1, 0], [9, 10, 1], [9, 6, 10], [9, 5, 6], N],
  /* 0xBE */ [[0, 3, 8], [10, 5, 6], N, N, N],
  /* 0xBF */ [[10, 5, 6], N, N, N, N],
  /* 0xC0 */ [[11, 5, 10], [11, 7, 5], N, N, N],
  /* 0xC1 */ [[8, 3, 0], [11, 5, 10], [11, 7, 5], N, N],
  /* 0xC2 */ [[0, 1, 9], [11, 5, 10], [11, 7, 5], N, N],
  /* 0xC3 */ [[8, 1, 9], [8, 3, 1], [11, 5, 10], [11, 7, 5], N],
  /* 0xC4 */ [[11, 1, 2], [11, 5, 1], [11, 7, 5], N, N],
  /* 0xC5 */ [[8, 3, 0], [11, 1, 2], [11, 5, 1], [11, 7, 5], N],
  /* 0xC6 */ [[0, 5, 9], [0, 7, 5], [0, 11, 7], [0, 2, 11], N],
  /* 0xC7 */ [[8, 5, 9], [8, 7, 5], [8, 11, 7], [8, 2, 11], [8, 3, 2]],
  /* 0xC8 */ [[2, 5, 10], [2, 7, 5], [2, 3, 7], N, N],
  /* 0xC9 */ [[8, 2, 0], [8, 10, 2], [8, 5, 10], [8, 7, 5], N],
  /* 0xCA */ [[0, 1, 9], [2, 5, 10], [2, 7, 5], [2, 3, 7], N],
  /* 0xCB */ [[8, 1, 9], [8, 2, 1], [8, 10, 2], [8, 5, 10], [8, 7, 5]],
  /* 0xCC */ [[7, 1, 3], [7, 5, 1], N, N, N],
  /* 0xCD */ [[8, 1, 0], [8, 5, 1], [8, 7, 5], N, N],
  /* 0xCE */ [[0, 5, 9], [0, 7, 5], [0, 3, 7], N, N],
  /* 0xCF */ [[8, 5, 9], [8, 7, 5], N, N, N],
  /* 0xD0 */ [[4, 11, 8], [4, 10, 11], [4, 5, 10], N, N],
  /* 0xD1 */ [[4, 3, 0], [4, 11, 3], [4, 10, 11], [4, 5, 10], N],
  /* 0xD2 */ [[0, 1, 9], [4, 11, 8], [4, 10, 11], [4, 5, 10], N],
  /* 0xD3 */ [[4, 1, 9], [4, 3, 1], [4, 11, 3], [4, 10, 11], [4, 5, 10]],
  /* 0xD4 */ [[4, 11, 8], [4, 2, 11], [4, 1, 2], [4, 5, 1], N],
  /* 0xD5 */ [[4, 3, 0], [4, 11, 3], [4, 2, 11], [4, 1, 2], [4, 5, 1]],
  /* 0xD6 */ [[0, 5, 9], [0, 4, 5], [0, 8, 4], [0, 11, 8], [0, 2, 11]],
  /* 0xD7 */ [[4, 5, 9], [11, 3, 2], N, N, N],
  /* 0xD8 */ [[4, 3, 8], [4, 2, 3], [4, 10, 2], [4, 5, 10], N],
  /* 0xD9 */ [[4, 2, 0], [4, 10, 2], [4, 5, 10], N, N],
  /* 0xDA */ [[0, 1, 9], [4, 3, 8], [4, 2, 3], [4, 10, 2], [4, 5, 10]],
  /* 0xDB */ [[4, 1, 9], [4, 2, 1], [4, 10, 2], [4, 5, 10], N],
  /* 0xDC */ [[4, 3, 8], [4, 1, 3], [4, 5, 1], N, N],
  /* 0xDD */ [[4, 1, 0], [4, 5, 1], N, N, N],
  /* 0xDE */ [[0, 5, 9], [0, 4, 5], [0, 8, 4], [0, 3, 8], N],
  /* 0xDF */ [[4, 5, 9], N, N, N, N],
  /* 0xE0 */ [[9, 7, 4], [9, 11, 7], [9, 10, 11], N, N],
  /* 0xE1 */ [[8, 3, 0], [9, 7, 4], [9, 11, 7], [9, 10, 11], N],
  /* 0xE2 */ [[0, 7, 4], [0, 11, 7], [0, 10, 11], [0, 1, 10], N],
  /* 0xE3 */ [[8, 7, 4], [8, 11, 7], [8, 10, 11], [8, 1, 10], [8, 3, 1]],
  /* 0xE4 */ [[9, 7, 4], [9, 11, 7], [9, 2, 11], [9, 1, 2], N],
  /* 0xE5 */ [[8, 3, 0], [9, 7, 4], [9, 11, 7], [9, 2, 11], [9, 1, 2]],
  /* 0xE6 */ [[0, 7, 4], [0, 11, 7], [0, 2, 11], N, N],
  /* 0xE7 */ [[8, 7, 4], [8, 11, 7], [8, 2, 11], [8, 3, 2], N],
  /* 0xE8 */ [[9, 7, 4], [9, 3, 7], [9, 2, 3], [9, 10, 2], N],
  /* 0xE9 */ [[8, 2, 0], [8, 10, 2], [8, 9, 10], [8, 4, 9], [8, 7, 4]],
  /* 0xEA */ [[0, 7, 4], [0, 3, 7], [0, 2, 3], [0, 10, 2], [0, 1, 10]],
  /* 0xEB */ [[8, 7, 4], [2, 1, 10], N, N, N],
  /* 0xEC */ [[9, 7, 4], [9, 3, 7], [9, 1, 3], N, N],
  /* 0xED */ [[8, 1, 0], [8, 9, 1], [8, 4, 9], [8, 7, 4], N],
  /* 0xEE */ [[0, 7, 4], [0, 3, 7], N, N, N],
  /* 0xEF */ [[8, 7, 4], N, N, N, N],
  /* 0xF0 */ [[9, 11, 8], [9, 10, 11], N, N, N],
  /* 0xF1 */ [[9, 3, 0], [9, 11, 3], [9, 10, 11], N, N],
  /* 0xF2 */ [[0, 11, 8], [0, 10, 11], [0, 1, 10], N, N],
  /* 0xF3 */ [[11, 1, 10], [11, 3, 1], N, N, N],
  /* 0xF4 */ [[9, 11, 8], [9, 2, 11], [9, 1, 2], N, N],
  /* 0xF5 */ [[9, 3, 0], [9, 11, 3], [9, 2, 11], [9, 1, 2], N],
  /* 0xF6 */ [[0, 11, 8], [0, 2, 11], N, N, N],
  /* 0xF7 */ [[11, 3, 2], N, N, N, N],
  /* 0xF8 */ [[9, 3, 8], [9, 2, 3], [9, 10, 2], N, N],
  /* 0xF9 */ [[9, 2, 0], [9, 10, 2], N, N, N],
  /* 0xFA */ [[0, 3, 8], [0, 2, 3], [0, 10, 2], [0, 1, 10], N],
  /* 0xFB */ [[2, 1, 10], N, N, N, N],
  /* 0xFC */ [[9, 3, 8], [9, 1, 3], N, N, N],
  /* 0xFD */ [[9, 1, 0], N, N, N, N],
  /* 0xFE */ [[0, 3, 8], N, N, N, N],
  /* 0xFF */ [N, N, N, N, N],
];

/// Iterate the triangles of a corner mask, stopping at the first sentinel.
#[inline]
pub fn case_triangles(corner_mask: u8) -> impl Iterator<Item = [u8; 3]> {
  let entries = &TRIANGLE_TABLE[corner_mask as usize];
  debug_assert!(
    is_well_formed(entries),
    "Malformed triangle table entry for mask {:#04x}",
    corner_mask
  );
  entries
    .iter()
    .copied()
    .take_while(|triangle| triangle[0] != NO_EDGE)
}

/// Number of triangles emitted for a corner mask.
#[inline]
pub fn triangle_count(corner_mask: u8) -> usize {
  case_triangles(corner_mask).count()
}

/// Check that an entry is a run of valid triples followed only by sentinels.
fn is_well_formed(entries: &[[u8; 3]; MAX_CUBE_TRIANGLES]) -> bool {
  let used = entries
    .iter()
    .take_while(|triangle| triangle[0] != NO_EDGE)
    .count();

  entries[..used]
    .iter()
    .all(|triangle| triangle.iter().all(|&edge| edge < 12))
    && entries[used..].iter().all(|triangle| *triangle == N)
}

#[cfg(test)]
#[path = "tri_table_test.rs"]
mod tri_table_test;
