// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Immutable precomputed data.
//!
//! The generators and the coset table are built once and never change.
//! Every operation that needs them reads them through a shared reference,
//! so the tables can be used from any number of threads without locking.

pub mod cosets;

use std::sync::LazyLock;

pub use cosets::CosetTable;

use crate::symmetry::GeneratorSet;

/// The generators and the coset table, built together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymmetryTables {
    /// The five base symmetries.
    pub generators: GeneratorSet,

    /// One rotation per vertex, sending vertex 0 to that vertex.
    pub cosets: CosetTable,
}

impl SymmetryTables {
    /// Build and verify all tables.
    pub fn new() -> Self {
        let generators = GeneratorSet::new();
        let cosets = CosetTable::new(&generators);
        log::debug!("[SymmetryTables] Generators verified, coset table built");
        Self { generators, cosets }
    }
}

impl Default for SymmetryTables {
    fn default() -> Self {
        Self::new()
    }
}

static TABLES: LazyLock<SymmetryTables> = LazyLock::new(SymmetryTables::new);

/// The process-wide tables, built on first use.
pub fn tables() -> &'static SymmetryTables {
    &TABLES
}
