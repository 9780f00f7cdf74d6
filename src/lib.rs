// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The symmetry group of the regular dodecahedron.
//!
//! The 120 symmetries (60 rotations and 60 orientation-reversing ones) are
//! represented as permutations of the 20 vertex labels. The crate provides:
//!
//! - the group law: compose, invert, and raise to integer powers;
//! - the rotation about any given vertex, edge, or face;
//! - the action of a symmetry on vertices, edges, and faces, with edges and
//!   faces returned in canonical form.
//!
//! The computation is purely combinatorial: no coordinates are involved.
//!
//! # Architecture
//!
//! ## Immutable tables
//!
//! Built once and then only read:
//! - Five base symmetries: the half turn about edge (0, 1), the fifth turn
//!   of face (0, 1, 2, 3, 4), the third turn about vertex 0 derived from
//!   those two, the central inversion, and the identity.
//! - A coset table of 20 rotations, the `v`th sending vertex 0 to `v`.
//!
//! ## Derived symmetries
//!
//! A rotation about any feature is a base rotation conjugated by a coset
//! representative (and, for edges and faces, some turns about vertex 0).
//! Only the elements asked for are computed; the group is never
//! enumerated.
//!
//! All operations are pure and synchronous. The process-wide tables are
//! read-only, so every function may be called from any thread.
//!
//! # Example
//!
//! ```
//! use dodeca_symmetry::{apply_to_edge, rotation_about_edge, Edge, Vertex};
//!
//! let e = Edge::new(Vertex::new(7), Vertex::new(11));
//! let r = rotation_about_edge(e)?;
//! assert_eq!(apply_to_edge(&r, e), e);
//! assert!(r.power(2).is_identity());
//! # Ok::<(), dodeca_symmetry::Error>(())
//! ```

pub mod error;
pub mod geometry;
pub mod memo;
pub mod symmetry;

// Re-export commonly used types
pub use error::{Error, Result};
pub use geometry::{canonical_edge, canonical_face, Edge, Face, Vertex};
pub use memo::{tables, CosetTable, SymmetryTables};
pub use symmetry::{
    apply_to_edge, apply_to_face, apply_to_vertex, compose, identity, invert, power,
    Decomposition, Generator, GeneratorSet, Permutation,
};

/// Counterclockwise third turn about `v`, using the shared tables.
pub fn rotation_about_vertex(v: Vertex) -> Permutation {
    tables().rotation_about_vertex(v)
}

/// Half turn about the edge `e`, using the shared tables.
///
/// # Errors
///
/// Returns [`Error::InvalidGeometry`] if `e` is not an edge of the solid.
pub fn rotation_about_edge(e: Edge) -> Result<Permutation> {
    tables().rotation_about_edge(e)
}

/// Counterclockwise fifth turn of the face `f`, using the shared tables.
///
/// # Errors
///
/// Returns [`Error::InvalidGeometry`] unless `f` lists a face of the solid
/// counterclockwise.
pub fn rotation_about_face(f: Face) -> Result<Permutation> {
    tables().rotation_about_face(f)
}

/// Normal form of `g`, using the shared tables.
///
/// # Errors
///
/// Returns [`Error::InvalidGeometry`] if `g` is not a symmetry of the solid.
pub fn decompose(g: &Permutation) -> Result<Decomposition> {
    tables().decompose(g)
}
