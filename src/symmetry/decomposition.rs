// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Normal form of a symmetry.
//!
//! Every symmetry is uniquely `I^i ∘ Ref[j] ∘ R_v^k` with `i` in 0..2,
//! `j` a vertex and `k` in 0..3, where `I` is the inversion, `Ref` the coset
//! table and `R_v` the turn about vertex 0. The symmetry is a rotation
//! exactly when `i == 0`.
//!
//! Decomposition recovers one element's `(i, j, k)` on demand; the group is
//! never enumerated.

use crate::error::{Error, Result};
use crate::geometry::constants::{REFERENCE_VERTEX, VERTEX_DEGREE};
use crate::geometry::Vertex;
use crate::memo::{tables, SymmetryTables};
use crate::symmetry::Permutation;

/// The `(i, j, k)` coordinates of a symmetry.
///
/// Serialized as the tuple `(inverted, vertex, turns)`; deserializing goes
/// through [`Decomposition::new`], so `turns` is always in 0..3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "(bool, Vertex, u8)", into = "(bool, Vertex, u8)")
)]
pub struct Decomposition {
    inverted: bool,
    vertex: Vertex,
    turns: u8,
}

impl Decomposition {
    /// Coordinates `(i, j, k)`; `turns` is reduced modulo 3, since three
    /// turns about a vertex are the identity.
    pub fn new(inverted: bool, vertex: Vertex, turns: u8) -> Self {
        Self {
            inverted,
            vertex,
            turns: turns % VERTEX_DEGREE as u8,
        }
    }

    /// Whether the inversion is applied last (`i == 1`).
    pub fn inverted(&self) -> bool {
        self.inverted
    }

    /// Coset representative index `j`: where the rotation part sends vertex 0.
    pub fn vertex(&self) -> Vertex {
        self.vertex
    }

    /// Turns `k` about vertex 0, applied first. Always in 0..3.
    pub fn turns(&self) -> u8 {
        self.turns
    }

    /// Whether the symmetry preserves orientation.
    pub fn is_chiral(&self) -> bool {
        !self.inverted
    }

    /// The symmetry with these coordinates, using the shared tables.
    pub fn to_permutation(&self) -> Permutation {
        tables().compose_normal_form(*self)
    }
}

impl From<(bool, Vertex, u8)> for Decomposition {
    fn from((inverted, vertex, turns): (bool, Vertex, u8)) -> Self {
        Self::new(inverted, vertex, turns)
    }
}

impl From<Decomposition> for (bool, Vertex, u8) {
    fn from(d: Decomposition) -> Self {
        (d.inverted, d.vertex, d.turns)
    }
}

impl SymmetryTables {
    /// Find the normal form of `g`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidGeometry`] if `g` is a permutation of the
    /// labels that does not preserve the dodecahedron.
    pub fn decompose(&self, g: &Permutation) -> Result<Decomposition> {
        if let Some((vertex, turns)) = self.decompose_rotation(g) {
            return Ok(Decomposition::new(false, vertex, turns));
        }
        let rotation = self.generators.inversion.compose(g);
        if let Some((vertex, turns)) = self.decompose_rotation(&rotation) {
            return Ok(Decomposition::new(true, vertex, turns));
        }
        Err(Error::InvalidGeometry(format!(
            "{} is not a symmetry of the dodecahedron",
            g
        )))
    }

    /// Rebuild the symmetry `I^i ∘ Ref[j] ∘ R_v^k`.
    pub fn compose_normal_form(&self, d: Decomposition) -> Permutation {
        let rotation = self
            .cosets
            .representative(d.vertex)
            .compose(&self.generators.vertex_rotation.power(d.turns as i64));
        if d.inverted {
            self.generators.inversion.compose(&rotation)
        } else {
            rotation
        }
    }

    /// Whether `g` maps the edges and faces of the solid onto themselves.
    pub fn is_symmetry(&self, g: &Permutation) -> bool {
        self.decompose(g).is_ok()
    }

    /// Whether `g` is a rotation.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidGeometry`] if `g` is not a symmetry.
    pub fn is_chiral(&self, g: &Permutation) -> Result<bool> {
        self.decompose(g).map(|d| d.is_chiral())
    }

    /// Find `(j, k)` with `g == Ref[j] ∘ R_v^k`, if `g` is a rotation.
    fn decompose_rotation(&self, g: &Permutation) -> Option<(Vertex, u8)> {
        let vertex = g.image(Vertex::new(REFERENCE_VERTEX));
        let residue = self.cosets.inverse(vertex).compose(g);
        (0..VERTEX_DEGREE as u8)
            .find(|&k| residue == self.generators.vertex_rotation.power(k as i64))
            .map(|k| (vertex, k))
    }
}
