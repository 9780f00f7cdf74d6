// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The five base symmetries.
//!
//! Two rotations, one about the reference edge `(0, 1)` and one about the
//! reference face `(0, 1, 2, 3, 4)`, generate the 60 rotations. Adding the
//! central inversion gives all 120 symmetries. The rotation about the
//! reference vertex 0 is derived from the first two.

use strum_macros::{Display, EnumCount as EnumCountMacro, EnumIter};

use crate::geometry::constants::{FACES, FACE_SIZE};
use crate::geometry::{Face, Vertex};
use crate::symmetry::Permutation;

/// Half turn about the edge (0, 1).
const EDGE_ROTATION: Permutation = Permutation::from_images([
    1, 0, 5, 10, 6, 2, 4, 14, 15, 11, 3, 9, 19, 16, 7, 8, 13, 18, 17, 12,
]);

/// Counterclockwise fifth turn of the face (0, 1, 2, 3, 4).
const FACE_ROTATION: Permutation = Permutation::from_images([
    1, 2, 3, 4, 0, 6, 7, 8, 9, 5, 11, 12, 13, 14, 10, 16, 17, 18, 19, 15,
]);

/// Point reflection through the centre (orientation reversing).
const INVERSION: Permutation = Permutation::from_images([
    17, 18, 19, 15, 16, 12, 13, 14, 10, 11, 8, 9, 5, 6, 7, 3, 4, 0, 1, 2,
]);

/// Names of the base symmetries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumCountMacro, EnumIter)]
pub enum Generator {
    /// The symmetry that moves nothing.
    Identity,
    /// Half turn about the edge (0, 1).
    EdgeRotation,
    /// Counterclockwise turn of the face (0, 1, 2, 3, 4).
    FaceRotation,
    /// Counterclockwise turn about the vertex 0.
    VertexRotation,
    /// Point reflection through the centre.
    Inversion,
}

impl Generator {
    /// The order of the generator in the group.
    pub fn order(self) -> usize {
        match self {
            Generator::Identity => 1,
            Generator::EdgeRotation => 2,
            Generator::FaceRotation => 5,
            Generator::VertexRotation => 3,
            Generator::Inversion => 2,
        }
    }

    /// Whether the generator preserves orientation.
    pub fn is_chiral(self) -> bool {
        self != Generator::Inversion
    }
}

/// The base symmetries, built once and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorSet {
    pub identity: Permutation,
    pub edge_rotation: Permutation,
    pub face_rotation: Permutation,
    pub vertex_rotation: Permutation,
    pub inversion: Permutation,
}

impl GeneratorSet {
    /// Build the generators and verify them.
    ///
    /// # Panics
    ///
    /// Panics if the literal generator data is not a set of symmetries of
    /// the stated orders. This only happens if the tables above are edited
    /// incorrectly.
    pub fn new() -> Self {
        // The face turn followed by the edge flip fixes vertex 0 and turns
        // clockwise about it.
        let vertex_rotation = EDGE_ROTATION.compose(&FACE_ROTATION).invert();
        let set = Self {
            identity: Permutation::identity(),
            edge_rotation: EDGE_ROTATION,
            face_rotation: FACE_ROTATION,
            vertex_rotation,
            inversion: INVERSION,
        };
        set.verify();
        set
    }

    /// Look up a generator by name.
    pub fn get(&self, generator: Generator) -> &Permutation {
        match generator {
            Generator::Identity => &self.identity,
            Generator::EdgeRotation => &self.edge_rotation,
            Generator::FaceRotation => &self.face_rotation,
            Generator::VertexRotation => &self.vertex_rotation,
            Generator::Inversion => &self.inversion,
        }
    }

    fn verify(&self) {
        use strum::IntoEnumIterator;

        for generator in Generator::iter() {
            let g = self.get(generator);
            assert!(g.is_bijection(), "{} is not a bijection", generator);
            assert_eq!(
                g.order(),
                generator.order(),
                "{} has the wrong order",
                generator
            );
            assert!(
                g.power(generator.order() as i64).is_identity(),
                "{} does not return to the identity",
                generator
            );
            assert!(
                preserves_faces(g),
                "{} does not map faces onto faces",
                generator
            );
        }
    }
}

impl Default for GeneratorSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Check that `g` carries every face of the solid onto a face, up to
/// orientation.
pub fn preserves_faces(g: &Permutation) -> bool {
    FACES.iter().all(|labels| {
        let image = image_of_face(g, labels);
        image.is_dodecahedron_face() || image.reversed().is_dodecahedron_face()
    })
}

/// Check that `g` carries every counterclockwise face onto a counterclockwise face.
pub fn preserves_orientation(g: &Permutation) -> bool {
    FACES
        .iter()
        .all(|labels| image_of_face(g, labels).is_dodecahedron_face())
}

fn image_of_face(g: &Permutation, labels: &[u8; FACE_SIZE]) -> Face {
    Face::new((*labels).map(|l| g.image(Vertex::from_label(l))))
}
