//! Isthmus grid generator and benchmark utilities.
//!
//! This crate provides deterministic generation of isthmus-shaped elevation
//! grids for benchmarking and property-based testing of `isthmus-core`,
//! plus a brute-force reference solver used to cross-check it.

use std::path::PathBuf;

pub mod correctness;
pub mod generator;

pub use generator::{GeneratorConfig, SizeTier, generate_isthmus, generate_rows};

/// Returns the path where the huge-tier text fixture is stored on disk.
///
/// The file lives under `target/bench-fixtures/huge.grid.txt` so it is
/// automatically gitignored and shared between the generator binary and
/// the benchmark harness.
pub fn huge_fixture_path() -> PathBuf {
    let manifest = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    manifest
        .join("..")
        .join("..")
        .join("target")
        .join("bench-fixtures")
        .join("huge.grid.txt")
}
