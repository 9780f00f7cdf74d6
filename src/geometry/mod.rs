// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Combinatorial features of the dodecahedron.
//!
//! This module contains type-safe representations of the objects the
//! symmetry group acts on:
//! - Vertex: a label 0..20
//! - Edge: a pair of adjacent vertices
//! - Face: five vertices in cyclic order

pub mod constants;
pub mod edge;
pub mod face;
pub mod vertex;

// Re-export for convenience
pub use constants::*;
pub use edge::{canonical_edge, Edge};
pub use face::{canonical_face, Face};
pub use vertex::Vertex;
