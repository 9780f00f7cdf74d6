// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Edges of the dodecahedron.
//!
//! An edge is an unordered pair of distinct vertices. The [`Edge`] value
//! keeps the order it was built with, because the stabilizer reads the first
//! endpoint as the pivot of its reference frame; [`Edge::canonical`] gives
//! the unique representative with the smaller label first.

use std::fmt;

use crate::error::{Error, Result};
use crate::geometry::constants::EDGES;
use crate::geometry::Vertex;

/// A pair of vertices joined by an edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "[usize; 2]", into = "[usize; 2]")
)]
pub struct Edge {
    /// First endpoint, as given.
    pub a: Vertex,
    /// Second endpoint, as given.
    pub b: Vertex,
}

impl Edge {
    /// Create an edge from two endpoints, keeping their order.
    pub fn new(a: Vertex, b: Vertex) -> Self {
        Self { a, b }
    }

    /// Both endpoints, in stored order.
    pub fn endpoints(&self) -> (Vertex, Vertex) {
        (self.a, self.b)
    }

    /// The same edge with the smaller label first.
    pub fn canonical(&self) -> Self {
        if self.a <= self.b {
            *self
        } else {
            Self {
                a: self.b,
                b: self.a,
            }
        }
    }

    /// Check whether `v` is an endpoint.
    pub fn contains(&self, v: Vertex) -> bool {
        self.a == v || self.b == v
    }

    /// Check whether the two endpoints are joined by an edge of the solid.
    pub fn is_dodecahedron_edge(&self) -> bool {
        let c = self.canonical();
        EDGES.contains(&[c.a.value(), c.b.value()])
    }
}

/// Return the edge with the smaller label first.
pub fn canonical_edge(edge: Edge) -> Edge {
    edge.canonical()
}

impl TryFrom<[usize; 2]> for Edge {
    type Error = Error;

    fn try_from(labels: [usize; 2]) -> Result<Self> {
        let [a, b] = labels;
        let (Some(va), Some(vb)) = (Vertex::try_new(a), Vertex::try_new(b)) else {
            return Err(Error::InvalidGeometry(format!(
                "edge ({}, {}) has a label out of range",
                a, b
            )));
        };
        if va == vb {
            return Err(Error::InvalidGeometry(format!(
                "edge ({}, {}) joins a vertex to itself",
                a, b
            )));
        }
        Ok(Self::new(va, vb))
    }
}

impl From<Edge> for [usize; 2] {
    fn from(edge: Edge) -> [usize; 2] {
        [edge.a.as_usize(), edge.b.as_usize()]
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.a, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edge(a: u8, b: u8) -> Edge {
        Edge::new(Vertex::new(a), Vertex::new(b))
    }

    #[test]
    fn test_canonical_orders_endpoints() {
        assert_eq!(edge(7, 11).canonical(), edge(7, 11));
        assert_eq!(edge(11, 7).canonical(), edge(7, 11));
        assert_eq!(canonical_edge(edge(1, 0)), edge(0, 1));
    }

    #[test]
    fn test_is_dodecahedron_edge() {
        assert!(edge(0, 1).is_dodecahedron_edge());
        assert!(edge(19, 14).is_dodecahedron_edge());
        assert!(!edge(0, 2).is_dodecahedron_edge());
        assert!(!edge(0, 19).is_dodecahedron_edge());
    }

    #[test]
    fn test_try_from_labels() {
        assert_eq!(Edge::try_from([3, 8]), Ok(edge(3, 8)));
        assert!(matches!(
            Edge::try_from([3, 20]),
            Err(Error::InvalidGeometry(_))
        ));
        assert!(matches!(
            Edge::try_from([4, 4]),
            Err(Error::InvalidGeometry(_))
        ));
    }

    #[test]
    fn test_labels_round_trip() {
        let labels: [usize; 2] = edge(11, 7).into();
        assert_eq!(labels, [11, 7]);
        assert_eq!(Edge::try_from(labels), Ok(edge(11, 7)));
    }

    #[test]
    fn test_contains() {
        let e = edge(5, 14);
        assert!(e.contains(Vertex::new(5)));
        assert!(e.contains(Vertex::new(14)));
        assert!(!e.contains(Vertex::new(0)));
    }

    #[test]
    fn test_display() {
        assert_eq!(edge(8, 12).to_string(), "(8, 12)");
    }
}
