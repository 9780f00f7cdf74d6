// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The symmetry group of the dodecahedron as permutations of vertex labels.
//!
//! ## Module Structure
//!
//! - `permutation`: compose, invert, and exponentiate label permutations
//! - `generators`: the five base symmetries
//! - `stabilizer`: rotations about any vertex, edge, or face
//! - `action`: symmetries acting on vertices, edges, and faces
//! - `decomposition`: normal form `I^i ∘ Ref[j] ∘ R_v^k` of a symmetry

pub mod action;
pub mod decomposition;
pub mod generators;
pub mod permutation;
pub mod stabilizer;

// Re-export main types and operations
pub use action::{apply_to_edge, apply_to_face, apply_to_vertex};
pub use decomposition::Decomposition;
pub use generators::{Generator, GeneratorSet};
pub use permutation::{compose, identity, invert, power, Permutation};
