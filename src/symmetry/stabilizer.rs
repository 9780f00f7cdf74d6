// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Rotations about an arbitrary vertex, edge, or face.
//!
//! Each base rotation turns the solid about a reference feature: vertex 0,
//! edge (0, 1), or face (0, 1, 2, 3, 4). To turn about another feature we
//! pick a rotation `g` carrying the reference feature onto it and conjugate:
//!
//! ```text
//! rotation about g(x) = g ∘ (rotation about x) ∘ g⁻¹
//! ```
//!
//! For a vertex `v`, `g` is the coset representative `Ref[v]`. For an edge
//! or face starting `(a, b, ...)`, `Ref[a]` puts `a` at vertex 0 but leaves
//! `b` at one of the three neighbours of 0; extra turns about vertex 0 bring
//! that neighbour round to 1.

use crate::error::{Error, Result};
use crate::geometry::constants::{FACE_SIZE, REFERENCE_NEIGHBORS};
use crate::geometry::{Edge, Face, Vertex};
use crate::memo::SymmetryTables;
use crate::symmetry::Permutation;

impl SymmetryTables {
    /// Counterclockwise third turn about `v`.
    ///
    /// The result fixes `v`, has order 3, and is the base vertex rotation
    /// when `v` is vertex 0.
    pub fn rotation_about_vertex(&self, v: Vertex) -> Permutation {
        conjugate(
            self.cosets.representative(v),
            &self.generators.vertex_rotation,
        )
    }

    /// Half turn about the edge `(a, b)`.
    ///
    /// The result swaps `a` and `b` and is its own inverse.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidGeometry`] if `a` and `b` are not adjacent.
    pub fn rotation_about_edge(&self, edge: Edge) -> Result<Permutation> {
        let frame = self.frame(edge.a, edge.b).ok_or_else(|| {
            log::debug!("Rejected edge {}", edge);
            Error::InvalidGeometry(format!("{} is not an edge of the dodecahedron", edge))
        })?;
        Ok(conjugate(&frame, &self.generators.edge_rotation))
    }

    /// Counterclockwise fifth turn of the face `f`.
    ///
    /// The result sends each vertex of `f` to the next one in the tuple and
    /// has order 5.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidGeometry`] unless `f` lists a face of the
    /// solid counterclockwise, starting anywhere.
    pub fn rotation_about_face(&self, face: Face) -> Result<Permutation> {
        let [v0, v1, ..] = face.0;
        let frame = self
            .frame(v0, v1)
            .filter(|frame| carries_reference_face(frame, &face))
            .ok_or_else(|| {
                log::debug!("Rejected face {}", face);
                Error::InvalidGeometry(format!(
                    "{} is not a counterclockwise face of the dodecahedron",
                    face
                ))
            })?;
        Ok(conjugate(&frame, &self.generators.face_rotation))
    }

    /// A rotation sending vertex 0 to `a` and vertex 1 to `b`.
    ///
    /// Returns None unless `b` is a neighbour of `a`.
    fn frame(&self, a: Vertex, b: Vertex) -> Option<Permutation> {
        let offset = self.cosets.offset(a, b).value();
        let turns = REFERENCE_NEIGHBORS.iter().position(|&n| n == offset)?;
        log::trace!(
            "Neighbour {} of {} sits at {} after Ref[{}]: {} turns",
            b,
            a,
            offset,
            a,
            turns
        );
        Some(
            self.cosets
                .representative(a)
                .compose(&self.generators.vertex_rotation.power(turns as i64)),
        )
    }
}

/// `g ∘ x ∘ g⁻¹`
fn conjugate(g: &Permutation, x: &Permutation) -> Permutation {
    g.compose(&x.compose(&g.invert()))
}

/// Check that the frame carries (0, 1, 2, 3, 4) onto the face vertex by vertex.
fn carries_reference_face(frame: &Permutation, face: &Face) -> bool {
    (0..FACE_SIZE as u8).all(|i| frame.image(Vertex::new(i)) == face.0[i as usize])
}
