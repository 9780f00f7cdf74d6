// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Vertex labels of the dodecahedron.
//!
//! A vertex carries no state beyond its label; see
//! [`constants`](crate::geometry::constants) for the labelling convention.

use std::fmt;

use crate::error::{Error, Result};
use crate::geometry::constants::NVERTICES;

/// A vertex label in the range 0..NVERTICES.
///
/// This is a newtype wrapper so that labels cannot be mixed up with
/// positions, exponents, or other small integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "u8", into = "u8")
)]
pub struct Vertex(u8);

impl Vertex {
    /// Create a new vertex, panicking if out of range.
    ///
    /// # Panics
    ///
    /// Panics if `value >= NVERTICES`.
    pub fn new(value: u8) -> Self {
        assert!(
            (value as usize) < NVERTICES,
            "Vertex out of range: {}",
            value
        );
        Self(value)
    }

    /// Try to create a new vertex, returning None if out of range.
    pub fn try_new(value: usize) -> Option<Self> {
        if value < NVERTICES {
            Some(Self(value as u8))
        } else {
            None
        }
    }

    /// Labels are checked by the caller.
    pub(crate) const fn from_label(value: u8) -> Self {
        Self(value)
    }

    /// Get the underlying label.
    pub fn value(self) -> u8 {
        self.0
    }

    /// Get the label as a usize (for array indexing).
    pub fn as_usize(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all 20 vertices in label order.
    pub fn all() -> impl Iterator<Item = Vertex> {
        (0..NVERTICES as u8).map(Vertex)
    }
}

impl TryFrom<u8> for Vertex {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self> {
        Vertex::try_new(value as usize).ok_or_else(|| {
            Error::InvalidGeometry(format!("vertex {} out of range", value))
        })
    }
}

impl From<Vertex> for u8 {
    fn from(v: Vertex) -> u8 {
        v.0
    }
}

impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
