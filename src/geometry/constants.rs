// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Fixed combinatorial data of the regular dodecahedron.
//!
//! # Labelling convention
//!
//! Vertices are labelled 0 to 19:
//! - 0 to 4 run counterclockwise around the reference face.
//! - 5 to 9 are the respective nearest neighbours of 0 to 4.
//! - 10 to 14 are the next nearest, with a counterclockwise half shift.
//! - 15 to 19 are the next nearest again, around the opposite face.
//!
//! Every face in [`FACES`] is listed counterclockwise when viewed from
//! outside the solid and starts at its smallest label. This is the same
//! orientation as the reference face `(0, 1, 2, 3, 4)`, which the base
//! face rotation turns counterclockwise.

/// Number of vertices of the dodecahedron.
pub const NVERTICES: usize = 20;

/// Number of edges of the dodecahedron.
pub const NEDGES: usize = 30;

/// Number of (pentagonal) faces of the dodecahedron.
pub const NFACES: usize = 12;

/// Number of vertices around each face.
pub const FACE_SIZE: usize = 5;

/// Order of the full symmetry group (rotations and reflections).
pub const GROUP_ORDER: usize = 120;

/// Order of the chiral (rotation-only) subgroup.
pub const CHIRAL_ORDER: usize = 60;

/// Number of turns of the base vertex rotation before it returns to the identity.
pub const VERTEX_DEGREE: usize = 3;

/// The vertex fixed by the base vertex rotation.
pub const REFERENCE_VERTEX: u8 = 0;

/// The edge flipped by the base edge rotation.
pub const REFERENCE_EDGE: [u8; 2] = [0, 1];

/// The face turned by the base face rotation.
pub const REFERENCE_FACE: [u8; FACE_SIZE] = [0, 1, 2, 3, 4];

/// Neighbours of the reference vertex, in the order the base vertex
/// rotation visits them: `1 -> 4 -> 5 -> 1`.
///
/// Index `k` is the neighbour reached after `k` turns.
pub const REFERENCE_NEIGHBORS: [u8; VERTEX_DEGREE] = [1, 4, 5];

/// The 12 faces, canonical and counterclockwise.
pub const FACES: [[u8; FACE_SIZE]; NFACES] = [
    [0, 1, 2, 3, 4],
    [0, 4, 9, 14, 5],
    [0, 5, 10, 6, 1],
    [1, 6, 11, 7, 2],
    [2, 7, 12, 8, 3],
    [3, 8, 13, 9, 4],
    [5, 14, 19, 15, 10],
    [6, 10, 15, 16, 11],
    [7, 11, 16, 17, 12],
    [8, 12, 17, 18, 13],
    [9, 13, 18, 19, 14],
    [15, 19, 18, 17, 16],
];

/// The 30 edges, canonical (smaller label first) and sorted.
pub const EDGES: [[u8; 2]; NEDGES] = [
    [0, 1],
    [0, 4],
    [0, 5],
    [1, 2],
    [1, 6],
    [2, 3],
    [2, 7],
    [3, 4],
    [3, 8],
    [4, 9],
    [5, 10],
    [5, 14],
    [6, 10],
    [6, 11],
    [7, 11],
    [7, 12],
    [8, 12],
    [8, 13],
    [9, 13],
    [9, 14],
    [10, 15],
    [11, 16],
    [12, 17],
    [13, 18],
    [14, 19],
    [15, 16],
    [15, 19],
    [16, 17],
    [17, 18],
    [18, 19],
];
