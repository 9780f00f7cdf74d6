// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Coset representatives of the vertex stabilizer.
//!
//! For every vertex `v` the table holds one rotation `Ref[v]` with
//! `Ref[v][0] == v`. Together with the three turns about vertex 0 these give
//! every rotation exactly once:
//!
//! ```text
//! rotation = Ref[j] ∘ R_v^k      j in 0..20, k in 0..3
//! ```
//!
//! and with the inversion `I` every symmetry exactly once:
//!
//! ```text
//! symmetry = I^i ∘ Ref[j] ∘ R_v^k      i in 0..2
//! ```
//!
//! Each representative is written as a word in the edge rotation `E` and
//! the face rotation `F`, read right to left like a composition.

use crate::geometry::constants::{NVERTICES, REFERENCE_VERTEX};
use crate::geometry::Vertex;
use crate::symmetry::{Generator, GeneratorSet, Permutation};

const E: Generator = Generator::EdgeRotation;
const F: Generator = Generator::FaceRotation;

/// Words for `Ref[0]` to `Ref[19]`.
///
/// - 1 to 4: turns of the reference face.
/// - 5 to 14: one edge flip between face turns.
/// - 15 to 19: two edge flips, reaching the far face.
const WORDS: [&[Generator]; NVERTICES] = [
    &[],
    &[F],
    &[F, F],
    &[F, F, F],
    &[F, F, F, F],
    &[F, F, F, F, E, F, F, F, F],
    &[E, F, F, F, F],
    &[F, E, F, F, F, F],
    &[F, F, E, F, F, F, F],
    &[F, F, F, E, F, F, F, F],
    &[E, F, F, F],
    &[F, E, F, F, F],
    &[F, F, E, F, F, F],
    &[F, F, F, E, F, F, F],
    &[F, F, F, F, E, F, F, F],
    &[E, F, F, E, F, F, F, F],
    &[F, E, F, F, E, F, F, F, F],
    &[F, F, E, F, F, E, F, F, F, F],
    &[F, F, F, E, F, F, E, F, F, F, F],
    &[F, F, F, F, E, F, F, E, F, F, F, F],
];

/// The 20 coset representatives and their inverses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CosetTable {
    representatives: [Permutation; NVERTICES],
    inverses: [Permutation; NVERTICES],
}

impl CosetTable {
    /// Evaluate the representative words over the given generators.
    ///
    /// # Panics
    ///
    /// Panics if some representative does not send vertex 0 to its own
    /// index, which would mean the word table is corrupt.
    pub fn new(generators: &GeneratorSet) -> Self {
        let representatives = WORDS.map(|word| evaluate(generators, word));
        for (v, rep) in representatives.iter().enumerate() {
            assert_eq!(
                rep.images()[REFERENCE_VERTEX as usize] as usize,
                v,
                "coset representative {} does not send {} to {}",
                v,
                REFERENCE_VERTEX,
                v
            );
        }
        let inverses = representatives.map(|rep| rep.invert());
        log::debug!("[CosetTable] Evaluated {} representatives", NVERTICES);

        Self {
            representatives,
            inverses,
        }
    }

    /// `Ref[v]`: a rotation sending vertex 0 to `v`.
    pub fn representative(&self, v: Vertex) -> &Permutation {
        &self.representatives[v.as_usize()]
    }

    /// The inverse of `Ref[v]`.
    pub fn inverse(&self, v: Vertex) -> &Permutation {
        &self.inverses[v.as_usize()]
    }

    /// Where `w` lands in the frame that puts `v` at vertex 0.
    pub fn offset(&self, v: Vertex, w: Vertex) -> Vertex {
        self.inverse(v).image(w)
    }

    /// All representatives, indexed by vertex label.
    pub fn representatives(&self) -> &[Permutation; NVERTICES] {
        &self.representatives
    }
}

fn evaluate(generators: &GeneratorSet, word: &[Generator]) -> Permutation {
    word.iter()
        .fold(Permutation::identity(), |acc, &letter| {
            acc.compose(generators.get(letter))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> CosetTable {
        CosetTable::new(&GeneratorSet::new())
    }

    #[test]
    fn test_representative_sends_reference_vertex() {
        let table = table();
        for v in Vertex::all() {
            assert_eq!(table.representative(v).image(Vertex::new(0)), v);
        }
    }

    #[test]
    fn test_inverses() {
        let table = table();
        for v in Vertex::all() {
            assert!(table
                .representative(v)
                .compose(table.inverse(v))
                .is_identity());
            assert_eq!(table.offset(v, v), Vertex::new(0));
        }
    }

    #[test]
    fn test_representatives_are_rotations() {
        use crate::symmetry::generators::preserves_orientation;

        let table = table();
        for rep in table.representatives() {
            assert!(preserves_orientation(rep));
        }
    }

    #[test]
    fn test_known_representatives() {
        let table = table();
        assert!(table.representative(Vertex::new(0)).is_identity());
        assert_eq!(
            *table.representative(Vertex::new(5)).images(),
            [5, 0, 4, 9, 14, 10, 1, 3, 13, 19, 6, 2, 8, 18, 15, 11, 7, 12, 17, 16]
        );
        assert_eq!(
            *table.representative(Vertex::new(12)).images(),
            [12, 8, 3, 2, 7, 17, 13, 4, 1, 11, 18, 9, 0, 6, 16, 19, 14, 5, 10, 15]
        );
        assert_eq!(
            *table.representative(Vertex::new(19)).images(),
            [19, 14, 9, 13, 18, 15, 5, 4, 8, 17, 10, 0, 3, 12, 16, 6, 1, 2, 7, 11]
        );
    }

    #[test]
    fn test_face_turns_lead_the_table() {
        let generators = GeneratorSet::new();
        let table = CosetTable::new(&generators);
        for k in 0..5u8 {
            assert_eq!(
                *table.representative(Vertex::new(k)),
                generators.face_rotation.power(k as i64)
            );
        }
    }
}
