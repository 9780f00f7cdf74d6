// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Faces of the dodecahedron.
//!
//! A face is a 5-tuple of vertices in cyclic order around its boundary.
//! Cyclic rotations describe the same oriented face; reversing the tuple
//! describes the same pentagon with the opposite orientation, which is a
//! different value. Orientation-reversing symmetries turn a counterclockwise
//! face into a clockwise one.

use std::fmt;

use crate::error::{Error, Result};
use crate::geometry::constants::{FACES, FACE_SIZE};
use crate::geometry::Vertex;

/// An oriented pentagonal face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "[usize; 5]", into = "[usize; 5]")
)]
pub struct Face(pub [Vertex; FACE_SIZE]);

impl Face {
    /// Create a face from its boundary vertices in cyclic order.
    pub fn new(vertices: [Vertex; FACE_SIZE]) -> Self {
        Self(vertices)
    }

    /// Boundary vertices in stored order.
    pub fn vertices(&self) -> &[Vertex; FACE_SIZE] {
        &self.0
    }

    /// The cyclic rotation that starts at the smallest label.
    ///
    /// Orientation is preserved: the result is never reversed.
    pub fn canonical(&self) -> Self {
        let start = self
            .0
            .iter()
            .enumerate()
            .min_by_key(|(_, v)| **v)
            .map_or(0, |(i, _)| i);
        let mut rotated = self.0;
        rotated.rotate_left(start);
        Self(rotated)
    }

    /// The same pentagon traversed the other way round.
    pub fn reversed(&self) -> Self {
        let [v0, v1, v2, v3, v4] = self.0;
        Self([v0, v4, v3, v2, v1])
    }

    /// Check whether `v` lies on the boundary.
    pub fn contains(&self, v: Vertex) -> bool {
        self.0.contains(&v)
    }

    /// Check whether this is a face of the solid listed counterclockwise.
    ///
    /// Clockwise listings of real faces return false; use
    /// [`reversed`](Self::reversed) first if orientation does not matter.
    pub fn is_dodecahedron_face(&self) -> bool {
        let labels = self.canonical().0.map(Vertex::value);
        FACES.contains(&labels)
    }
}

/// Return the cyclic rotation of `face` starting at its smallest label.
pub fn canonical_face(face: Face) -> Face {
    face.canonical()
}

impl TryFrom<[usize; FACE_SIZE]> for Face {
    type Error = Error;

    fn try_from(labels: [usize; FACE_SIZE]) -> Result<Self> {
        let mut vertices = [Vertex::from_label(0); FACE_SIZE];
        for (slot, &label) in vertices.iter_mut().zip(labels.iter()) {
            *slot = Vertex::try_new(label).ok_or_else(|| {
                Error::InvalidGeometry(format!(
                    "face {:?} has label {} out of range",
                    labels, label
                ))
            })?;
        }
        for i in 0..FACE_SIZE {
            if vertices[i + 1..].contains(&vertices[i]) {
                return Err(Error::InvalidGeometry(format!(
                    "face {:?} repeats vertex {}",
                    labels, labels[i]
                )));
            }
        }
        Ok(Self(vertices))
    }
}

impl From<Face> for [usize; FACE_SIZE] {
    fn from(face: Face) -> [usize; FACE_SIZE] {
        face.0.map(Vertex::as_usize)
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [v0, v1, v2, v3, v4] = self.0;
        write!(f, "({}, {}, {}, {}, {})", v0, v1, v2, v3, v4)
    }
}
