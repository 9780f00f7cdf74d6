// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Permutations of the 20 vertex labels.
//!
//! A permutation `g` sends vertex `i` to `g[i]`. Composition follows the
//! usual right-to-left convention: `g.compose(&h)` applies `h` first, then
//! `g`, so `g.compose(&h)[i] == g[h[i]]`.
//!
//! Validity (a bijection on 0..20) is checked once, when a permutation is
//! built from outside data. Composition, inversion and powers of valid
//! permutations are valid, so none of them can fail.

use std::fmt;
use std::ops::Index;

use crate::error::{Error, Result};
use crate::geometry::constants::NVERTICES;
use crate::geometry::Vertex;

/// A bijection on the vertex labels, stored as its image table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<usize>", into = "Vec<usize>")
)]
pub struct Permutation([u8; NVERTICES]);

impl Permutation {
    /// The permutation mapping every label to itself.
    pub const fn identity() -> Self {
        let mut images = [0u8; NVERTICES];
        let mut i = 0;
        while i < NVERTICES {
            images[i] = i as u8;
            i += 1;
        }
        Self(images)
    }

    /// Build a permutation from an image table, checking it is a bijection.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPermutation`] if the sequence does not have
    /// exactly 20 entries, contains a label outside 0..20, or repeats a label.
    pub fn try_new(values: impl IntoIterator<Item = usize>) -> Result<Self> {
        let values: Vec<usize> = values.into_iter().collect();
        if values.len() != NVERTICES {
            return Err(Error::InvalidPermutation(format!(
                "expected {} images, found {}",
                NVERTICES,
                values.len()
            )));
        }

        let mut images = [0u8; NVERTICES];
        let mut seen = [false; NVERTICES];
        for (i, &value) in values.iter().enumerate() {
            if value >= NVERTICES {
                return Err(Error::InvalidPermutation(format!(
                    "image of {} is {}, out of range",
                    i, value
                )));
            }
            if seen[value] {
                return Err(Error::InvalidPermutation(format!(
                    "label {} appears more than once",
                    value
                )));
            }
            seen[value] = true;
            images[i] = value as u8;
        }
        Ok(Self(images))
    }

    /// Build from literal data known to be a bijection.
    pub(crate) const fn from_images(images: [u8; NVERTICES]) -> Self {
        Self(images)
    }

    /// Check the bijection invariant.
    pub(crate) fn is_bijection(&self) -> bool {
        let mut seen = [false; NVERTICES];
        for &value in self.0.iter() {
            let value = value as usize;
            if value >= NVERTICES || seen[value] {
                return false;
            }
            seen[value] = true;
        }
        true
    }

    /// The image table: entry `i` is the image of vertex `i`.
    pub fn images(&self) -> &[u8; NVERTICES] {
        &self.0
    }

    /// The image of a vertex.
    pub fn image(&self, v: Vertex) -> Vertex {
        Vertex::from_label(self.0[v.as_usize()])
    }

    /// Apply `other` first, then `self`.
    pub fn compose(&self, other: &Permutation) -> Permutation {
        Permutation(other.0.map(|i| self.0[i as usize]))
    }

    /// The positional inverse: `self.invert()[self[i]] == i`.
    pub fn invert(&self) -> Permutation {
        let mut images = [0u8; NVERTICES];
        for (i, &value) in self.0.iter().enumerate() {
            images[value as usize] = i as u8;
        }
        Permutation(images)
    }

    /// Raise to an integer power.
    ///
    /// Positive `n` composes `n` copies, zero gives the identity, and
    /// negative `n` gives the inverse of the `-n`th power. Computed by
    /// binary exponentiation; the result matches repeated composition.
    pub fn power(&self, n: i64) -> Permutation {
        let mut base = if n < 0 { self.invert() } else { *self };
        let mut exponent = n.unsigned_abs();
        let mut result = Permutation::identity();
        while exponent > 0 {
            if exponent & 1 == 1 {
                result = result.compose(&base);
            }
            base = base.compose(&base);
            exponent >>= 1;
        }
        result
    }

    /// Check whether this is the identity.
    pub fn is_identity(&self) -> bool {
        *self == Permutation::identity()
    }

    /// Vertices mapped to themselves.
    pub fn fixed_points(&self) -> Vec<Vertex> {
        Vertex::all().filter(|&v| self.image(v) == v).collect()
    }

    /// Disjoint cycles of length at least two.
    ///
    /// Each cycle starts at its smallest label and cycles are listed in
    /// order of their first element.
    pub fn cycles(&self) -> Vec<Vec<Vertex>> {
        let mut visited = [false; NVERTICES];
        let mut cycles = Vec::new();
        for start in 0..NVERTICES {
            if visited[start] {
                continue;
            }
            let mut cycle = Vec::new();
            let mut current = start;
            while !visited[current] {
                visited[current] = true;
                cycle.push(Vertex::from_label(current as u8));
                current = self.0[current] as usize;
            }
            if cycle.len() > 1 {
                cycles.push(cycle);
            }
        }
        cycles
    }

    /// The smallest positive `n` with `self.power(n)` the identity.
    pub fn order(&self) -> usize {
        self.cycles()
            .iter()
            .map(Vec::len)
            .fold(1, |acc, len| acc / gcd(acc, len) * len)
    }
}

fn gcd(a: usize, b: usize) -> usize {
    if b == 0 {
        a
    } else {
        gcd(b, a % b)
    }
}

impl Default for Permutation {
    fn default() -> Self {
        Self::identity()
    }
}

impl Index<Vertex> for Permutation {
    type Output = u8;

    fn index(&self, v: Vertex) -> &u8 {
        &self.0[v.as_usize()]
    }
}

impl TryFrom<&[usize]> for Permutation {
    type Error = Error;

    fn try_from(values: &[usize]) -> Result<Self> {
        Permutation::try_new(values.iter().copied())
    }
}

impl TryFrom<Vec<usize>> for Permutation {
    type Error = Error;

    fn try_from(values: Vec<usize>) -> Result<Self> {
        Permutation::try_new(values)
    }
}

impl From<Permutation> for Vec<usize> {
    fn from(g: Permutation) -> Vec<usize> {
        g.0.iter().map(|&value| value as usize).collect()
    }
}

impl fmt::Display for Permutation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, value) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", value)?;
        }
        write!(f, ")")
    }
}

/// The permutation mapping every label to itself.
pub fn identity() -> Permutation {
    Permutation::identity()
}

/// `compose(g, h)[i] == g[h[i]]`: apply `h` first, then `g`.
pub fn compose(g: &Permutation, h: &Permutation) -> Permutation {
    g.compose(h)
}

/// The inverse permutation.
pub fn invert(g: &Permutation) -> Permutation {
    g.invert()
}

/// `g` raised to the integer power `n`.
pub fn power(g: &Permutation, n: i64) -> Permutation {
    g.power(n)
}

#[cfg(test)]
mod tests {
    use super::*;

    // Half turn about the edge (0, 1).
    const HALF_TURN: [usize; NVERTICES] = [
        1, 0, 5, 10, 6, 2, 4, 14, 15, 11, 3, 9, 19, 16, 7, 8, 13, 18, 17, 12,
    ];
    // Counterclockwise turn of the face (0, 1, 2, 3, 4).
    const FIFTH_TURN: [usize; NVERTICES] = [
        1, 2, 3, 4, 0, 6, 7, 8, 9, 5, 11, 12, 13, 14, 10, 16, 17, 18, 19, 15,
    ];

    fn perm(values: [usize; NVERTICES]) -> Permutation {
        Permutation::try_new(values).unwrap()
    }

    fn naive_power(g: &Permutation, n: i64) -> Permutation {
        if n > 0 {
            g.compose(&naive_power(g, n - 1))
        } else if n < 0 {
            naive_power(g, -n).invert()
        } else {
            Permutation::identity()
        }
    }

    #[test]
    fn test_try_new_rejects_wrong_length() {
        let err = Permutation::try_new(0..19).unwrap_err();
        assert!(matches!(err, Error::InvalidPermutation(_)));
        assert!(Permutation::try_new(0..21).is_err());
        assert!(Permutation::try_new(Vec::new()).is_err());
    }

    #[test]
    fn test_try_new_rejects_non_bijection() {
        let mut values = HALF_TURN;
        values[3] = values[4];
        assert!(matches!(
            Permutation::try_new(values),
            Err(Error::InvalidPermutation(_))
        ));

        let mut values = FIFTH_TURN;
        values[0] = 20;
        assert!(matches!(
            Permutation::try_new(values),
            Err(Error::InvalidPermutation(_))
        ));
    }

    #[test]
    fn test_try_from_slice() {
        let values: Vec<usize> = (0..NVERTICES).rev().collect();
        let g = Permutation::try_from(values.as_slice()).unwrap();
        assert_eq!(g[Vertex::new(0)], 19);
        assert!(g.is_bijection());
    }

    #[test]
    fn test_vec_round_trip() {
        let f = perm(FIFTH_TURN);
        let values: Vec<usize> = f.into();
        assert_eq!(values, FIFTH_TURN.to_vec());
        assert_eq!(Permutation::try_from(values), Ok(f));
        assert!(matches!(
            Permutation::try_from(vec![0; NVERTICES]),
            Err(Error::InvalidPermutation(_))
        ));
    }

    #[test]
    fn test_compose_applies_right_operand_first() {
        let e = perm(HALF_TURN);
        let f = perm(FIFTH_TURN);
        let ef = compose(&e, &f);
        for v in Vertex::all() {
            assert_eq!(ef.image(v), e.image(f.image(v)));
        }
        assert_ne!(ef, compose(&f, &e));
    }

    #[test]
    fn test_identity_is_two_sided_unit() {
        let f = perm(FIFTH_TURN);
        assert_eq!(compose(&identity(), &f), f);
        assert_eq!(compose(&f, &identity()), f);
        assert!(identity().is_identity());
        assert_eq!(Permutation::default(), identity());
    }

    #[test]
    fn test_compose_is_associative() {
        let e = perm(HALF_TURN);
        let f = perm(FIFTH_TURN);
        let lhs = compose(&compose(&e, &f), &e);
        let rhs = compose(&e, &compose(&f, &e));
        assert_eq!(lhs, rhs);
    }

    #[test]
    fn test_invert() {
        let e = perm(HALF_TURN);
        let f = perm(FIFTH_TURN);
        let ef = e.compose(&f);
        assert!(compose(&ef, &invert(&ef)).is_identity());
        assert!(compose(&invert(&ef), &ef).is_identity());
        assert_eq!(invert(&e), e);
        for v in Vertex::all() {
            assert_eq!(f.invert().image(f.image(v)), v);
        }
    }

    #[test]
    fn test_power_matches_repeated_composition() {
        let e = perm(HALF_TURN);
        let f = perm(FIFTH_TURN);
        let g = e.compose(&f).compose(&f);
        for n in -12..=12 {
            assert_eq!(power(&g, n), naive_power(&g, n), "exponent {}", n);
            assert_eq!(power(&f, n), naive_power(&f, n), "exponent {}", n);
        }
    }

    #[test]
    fn test_power_edge_cases() {
        let f = perm(FIFTH_TURN);
        assert!(f.power(0).is_identity());
        assert_eq!(f.power(1), f);
        assert_eq!(f.power(-1), f.invert());
        assert!(f.power(5).is_identity());
        assert_eq!(f.power(1_000_001), f);
        assert_eq!(f.power(i64::MIN), f.power(2));
    }

    #[test]
    fn test_cycles_and_order() {
        let f = perm(FIFTH_TURN);
        let cycles = f.cycles();
        assert_eq!(cycles.len(), 4);
        assert!(cycles.iter().all(|c| c.len() == 5));
        assert_eq!(cycles[0], [0, 1, 2, 3, 4].map(Vertex::new).to_vec());
        assert_eq!(f.order(), 5);

        let e = perm(HALF_TURN);
        assert_eq!(e.order(), 2);
        assert!(e.fixed_points().is_empty());

        assert_eq!(identity().order(), 1);
        assert!(identity().cycles().is_empty());
        assert_eq!(identity().fixed_points().len(), NVERTICES);
    }

    #[test]
    fn test_display() {
        let text = perm(FIFTH_TURN).to_string();
        assert!(text.starts_with("(1, 2, 3, 4, 0, 6"));
        assert!(text.ends_with("19, 15)"));
    }
}
