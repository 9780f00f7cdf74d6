// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for the dodecahedral symmetry group.

use thiserror::Error;

/// Result type alias for symmetry operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Precondition violations reported at the boundary of an operation.
///
/// Neither variant is transient: both indicate a caller passed something
/// that is not a permutation of the 20 labels, or not a feature of the solid.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Input is not a bijection on the 20 vertex labels.
    #[error("Invalid permutation: {0}")]
    InvalidPermutation(String),

    /// Edge or face argument is not an edge or face of the dodecahedron.
    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),
}
