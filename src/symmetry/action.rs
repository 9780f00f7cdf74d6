// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The action of symmetries on vertices, edges, and faces.
//!
//! Edges and faces come back in canonical form, so two images of the same
//! feature compare equal. For all `g`, `h` and every feature `x`:
//!
//! ```text
//! apply(identity, x) == x            (x canonical)
//! apply(g ∘ h, x)    == apply(g, apply(h, x))
//! ```

use crate::geometry::{Edge, Face, Vertex};
use crate::symmetry::Permutation;

/// The image of a vertex: `g[v]`.
pub fn apply_to_vertex(g: &Permutation, v: Vertex) -> Vertex {
    g.image(v)
}

/// The image of an edge, smaller label first.
pub fn apply_to_edge(g: &Permutation, e: Edge) -> Edge {
    Edge::new(g.image(e.a), g.image(e.b)).canonical()
}

/// The image of a face, rotated to start at its smallest label.
///
/// Orientation-reversing symmetries produce the clockwise listing of the
/// image face.
pub fn apply_to_face(g: &Permutation, f: Face) -> Face {
    Face::new(f.0.map(|v| g.image(v))).canonical()
}
